//! Turns `address/mask` text into a [`SubnetDescriptor`].
//!
//! Two mask notations are accepted after the `/`: a prefix length in
//! `0..=32`, tried first, and a dotted-decimal mask whose one-bits are
//! contiguous from the top.

use crate::error::ParseError;
use crate::models::{prefix_from_mask, Ipv4, SubnetDescriptor, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Resolve `A.B.C.D/N` or `A.B.C.D/M.M.M.M` to a descriptor.
///
/// # Examples
/// ```
/// use subnet_calculator::resolve;
/// let subnet = resolve("192.168.1.10/255.255.255.0").unwrap();
/// assert_eq!(subnet.network_address().to_string(), "192.168.1.0");
/// assert_eq!(subnet.prefix_length(), 24);
/// ```
pub fn resolve(input: &str) -> Result<SubnetDescriptor, ParseError> {
    match resolve_ipv4(input) {
        Ok(ipv4) => {
            let descriptor = SubnetDescriptor::new(input, ipv4);
            log::debug!(
                "resolve({input}) -> {network} broadcast={broadcast}",
                network = descriptor.network(),
                broadcast = descriptor.broadcast_address()
            );
            Ok(descriptor)
        }
        Err(e) => {
            log::info!("resolve({input}) rejected: {e}");
            Err(e)
        }
    }
}

fn resolve_ipv4(input: &str) -> Result<Ipv4, ParseError> {
    let (addr_part, mask_part) = split_input(input)?;
    let addr = parse_address(addr_part)?;
    let len = parse_mask(mask_part)?;
    log::trace!("split {input:?} -> addr={addr} len={len}");
    Ipv4::new(addr, len).ok_or_else(|| ParseError::InvalidMask(format!("/{len} is too long")))
}

/// Split on the single `/`, both sides must be non-empty.
fn split_input(input: &str) -> Result<(&str, &str), ParseError> {
    let parts: Vec<&str> = input.split('/').collect();
    if parts.len() != 2 {
        return Err(ParseError::MalformedInput(format!(
            "expected exactly one '/' in '{input}'"
        )));
    }
    if parts[0].is_empty() || parts[1].is_empty() {
        return Err(ParseError::MalformedInput(format!(
            "address and mask must both be given in '{input}'"
        )));
    }
    Ok((parts[0], parts[1]))
}

/// Four dot separated decimal octets, each 1-3 digits and at most 255.
fn parse_octets(text: &str) -> Option<[u8; 4]> {
    let mut octets = [0u8; 4];
    let mut parts = text.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next()?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *octet = part.parse().ok()?;
    }
    match parts.next() {
        Some(_) => None,
        None => Some(octets),
    }
}

/// Parse the address part of the input.
pub fn parse_address(text: &str) -> Result<Ipv4Addr, ParseError> {
    parse_octets(text).map(Ipv4Addr::from).ok_or_else(|| {
        ParseError::InvalidAddress(format!(
            "'{text}' is not four decimal octets between 0 and 255"
        ))
    })
}

/// Parse the mask part of the input to a prefix length.
///
/// A plain number is a prefix length. Anything else must be a dotted mask
/// without holes.
pub fn parse_mask(text: &str) -> Result<u8, ParseError> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return text
            .parse::<u8>()
            .ok()
            .filter(|len| *len <= MAX_LENGTH)
            .ok_or_else(|| {
                ParseError::InvalidMask(format!(
                    "prefix length '{text}' is not between 0 and {MAX_LENGTH}"
                ))
            });
    }
    let octets = parse_octets(text).ok_or_else(|| {
        ParseError::InvalidMask(format!(
            "'{text}' is neither a prefix length nor a dotted mask"
        ))
    })?;
    prefix_from_mask(u32::from_be_bytes(octets)).ok_or_else(|| {
        ParseError::InvalidMask(format!("'{text}' is not a contiguous subnet mask"))
    })
}

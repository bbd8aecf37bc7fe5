//! IPv4 mask arithmetic.
//!
//! Provides the [`Ipv4`] address/prefix pair together with the free
//! functions it is built on. Every helper that takes a prefix length returns
//! `None` when the length is larger than [`MAX_LENGTH`].

use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_calculator::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
/// assert_eq!(get_cidr_mask(33), None);
/// ```
pub fn get_cidr_mask(len: u8) -> Option<u32> {
    if len > MAX_LENGTH {
        return None;
    }
    let right_len = MAX_LENGTH - len;
    // u64 so that a shift by 32 is defined for /0
    let all_bits = u32::MAX as u64;
    let mask = (all_bits >> right_len) << right_len;
    Some(mask as u32)
}

/// Find the prefix length of a dotted mask given as u32.
///
/// Returns `None` unless the one-bits form a single run starting at the
/// most significant bit.
///
/// # Examples
/// ```
/// use subnet_calculator::models::prefix_from_mask;
/// assert_eq!(prefix_from_mask(0xFFFFFF00), Some(24));
/// assert_eq!(prefix_from_mask(0xFF00FF00), None);
/// ```
pub fn prefix_from_mask(value: u32) -> Option<u8> {
    let len = value.leading_ones() as u8;
    match get_cidr_mask(len) {
        Some(mask) if mask == value => Some(len),
        _ => None,
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    Some(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Option<Ipv4Addr> {
    let mask = get_cidr_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Some(Ipv4Addr::from(network_bits | !mask))
}

/// Number of addresses in a subnet, network and broadcast included.
pub fn num_addresses(len: u8) -> Option<u64> {
    if len > MAX_LENGTH {
        None
    } else {
        Some(1u64 << (MAX_LENGTH - len))
    }
}

/// Number of addresses that can be handed to hosts.
///
/// Network and broadcast are excluded up to /30. A /31 or /32 has no room
/// left for hosts once those two are reserved, so it reports zero.
pub fn num_usable_hosts(len: u8) -> Option<u64> {
    match len {
        0..=30 => num_addresses(len).map(|n| n - 2),
        31 | 32 => Some(0),
        _ => None,
    }
}

/// IPv4 address paired with a CIDR prefix length.
///
/// The address is kept as given: host bits may be set. Use [`Ipv4::lo`] for
/// the network address.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    addr: Ipv4Addr,
    mask: u8,
}

impl Ipv4 {
    /// Pair an address with a prefix length, `None` if the length is above 32.
    pub fn new(addr: Ipv4Addr, mask: u8) -> Option<Ipv4> {
        if mask > MAX_LENGTH {
            None
        } else {
            Some(Ipv4 { addr, mask })
        }
    }

    /// The address as given.
    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    /// The prefix length (0-32).
    pub fn mask(&self) -> u8 {
        self.mask
    }

    fn mask_bits(&self) -> u32 {
        // mask <= MAX_LENGTH is checked in new()
        get_cidr_mask(self.mask).unwrap_or(u32::MAX)
    }

    /// The same subnet with the host bits of the address cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4 {
            addr: self.lo(),
            mask: self.mask,
        }
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask).unwrap_or(self.addr)
    }

    /// Subnet mask in dotted form.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.mask_bits())
    }

    /// Wildcard (inverse) mask in dotted form.
    pub fn hostmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(!self.mask_bits())
    }

    pub fn size(&self) -> u64 {
        1u64 << (MAX_LENGTH - self.mask)
    }

    pub fn usable_hosts(&self) -> u64 {
        num_usable_hosts(self.mask).unwrap_or(0)
    }

    /// First and last assignable host, `None` for /31 and /32.
    pub fn host_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        if self.usable_hosts() == 0 {
            return None;
        }
        let first = u32::from(self.lo()) + 1;
        let last = u32::from(self.hi()) - 1;
        Some((Ipv4Addr::from(first), Ipv4Addr::from(last)))
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_cidr_mask() {
        assert_eq!(get_cidr_mask(0), Some(0x00000000));
        assert_eq!(get_cidr_mask(1), Some(0x80000000));
        assert_eq!(get_cidr_mask(8), Some(0xFF000000));
        assert_eq!(get_cidr_mask(16), Some(0xFFFF0000));
        assert_eq!(get_cidr_mask(24), Some(0xFFFFFF00));
        assert_eq!(get_cidr_mask(31), Some(0xFFFFFFFE));
        assert_eq!(get_cidr_mask(32), Some(0xFFFFFFFF));
        assert_eq!(get_cidr_mask(33), None);
    }

    #[test]
    fn test_get_cidr_mask_bit_counts() {
        for len in 0..=MAX_LENGTH {
            let mask = get_cidr_mask(len).unwrap();
            assert_eq!(mask.leading_ones(), len as u32, "/{len}");
            assert_eq!(mask.trailing_zeros(), (MAX_LENGTH - len) as u32, "/{len}");
        }
    }

    #[test]
    fn test_prefix_from_mask() {
        assert_eq!(prefix_from_mask(0), Some(0));
        assert_eq!(prefix_from_mask(0xFFFF0000), Some(16));
        assert_eq!(prefix_from_mask(0xFFFFFFFC), Some(30));
        assert_eq!(prefix_from_mask(u32::MAX), Some(32));
        // holes and inverse masks
        assert_eq!(prefix_from_mask(0xFF00FF00), None);
        assert_eq!(prefix_from_mask(0x000000FF), None);
        assert_eq!(prefix_from_mask(0x7FFFFFFF), None);
        for len in 0..=MAX_LENGTH {
            assert_eq!(prefix_from_mask(get_cidr_mask(len).unwrap()), Some(len));
        }
    }

    #[test]
    fn test_cut_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 42);
        assert_eq!(cut_addr(ip, 24), Some(Ipv4Addr::new(192, 168, 1, 0)));
        assert_eq!(cut_addr(ip, 16), Some(Ipv4Addr::new(192, 168, 0, 0)));
        assert_eq!(cut_addr(ip, 8), Some(Ipv4Addr::new(192, 0, 0, 0)));
        assert_eq!(cut_addr(ip, 0), Some(Ipv4Addr::UNSPECIFIED));
        assert_eq!(cut_addr(ip, 32), Some(ip));
        assert_eq!(cut_addr(ip, 33), None);
    }

    #[test]
    fn test_broadcast_addr() {
        let ip = Ipv4Addr::new(192, 168, 1, 0);
        assert_eq!(broadcast_addr(ip, 24), Some(Ipv4Addr::new(192, 168, 1, 255)));
        assert_eq!(broadcast_addr(ip, 16), Some(Ipv4Addr::new(192, 168, 255, 255)));
        assert_eq!(broadcast_addr(ip, 8), Some(Ipv4Addr::new(192, 255, 255, 255)));
        assert_eq!(broadcast_addr(ip, 0), Some(Ipv4Addr::BROADCAST));
        assert_eq!(broadcast_addr(ip, 32), Some(ip));
        assert_eq!(broadcast_addr(ip, 33), None);
    }

    #[test]
    fn test_num_addresses_and_hosts() {
        assert_eq!(num_addresses(0), Some(4294967296));
        assert_eq!(num_usable_hosts(0), Some(4294967294));
        assert_eq!(num_addresses(24), Some(256));
        assert_eq!(num_usable_hosts(24), Some(254));
        assert_eq!(num_addresses(30), Some(4));
        assert_eq!(num_usable_hosts(30), Some(2));
        assert_eq!(num_addresses(31), Some(2));
        assert_eq!(num_usable_hosts(31), Some(0));
        assert_eq!(num_addresses(32), Some(1));
        assert_eq!(num_usable_hosts(32), Some(0));
        assert_eq!(num_addresses(33), None);
        assert_eq!(num_usable_hosts(33), None);
    }

    #[test]
    fn test_ipv4_new_rejects_long_prefix() {
        assert!(Ipv4::new(Ipv4Addr::new(10, 0, 0, 0), 32).is_some());
        assert!(Ipv4::new(Ipv4Addr::new(10, 0, 0, 0), 33).is_none());
    }

    #[test]
    fn test_ipv4_lo_hi() {
        let ip = Ipv4::new(Ipv4Addr::new(10, 0, 10, 77), 8).unwrap();
        assert_eq!(ip.addr(), Ipv4Addr::new(10, 0, 10, 77));
        assert_eq!(ip.lo(), Ipv4Addr::new(10, 0, 0, 0));
        assert_eq!(ip.hi(), Ipv4Addr::new(10, 255, 255, 255));
        assert_eq!(ip.netmask(), Ipv4Addr::new(255, 0, 0, 0));
        assert_eq!(ip.hostmask(), Ipv4Addr::new(0, 255, 255, 255));
        assert_eq!(ip.network().to_string(), "10.0.0.0/8");
        assert_eq!(ip.to_string(), "10.0.10.77/8");
    }

    #[test]
    fn test_ipv4_lo_hi_every_prefix() {
        let addr = Ipv4Addr::new(203, 0, 113, 77);
        for len in 0..=MAX_LENGTH {
            let ip = Ipv4::new(addr, len).unwrap();
            assert_eq!(Some(ip.lo()), cut_addr(addr, len), "/{len}");
            assert_eq!(Some(ip.hi()), broadcast_addr(addr, len), "/{len}");
        }
    }

    #[test]
    fn test_ipv4_host_range() {
        let ip = Ipv4::new(Ipv4Addr::new(192, 168, 1, 10), 24).unwrap();
        assert_eq!(
            ip.host_range(),
            Some((Ipv4Addr::new(192, 168, 1, 1), Ipv4Addr::new(192, 168, 1, 254)))
        );
        let p2p = Ipv4::new(Ipv4Addr::new(192, 168, 1, 10), 30).unwrap();
        assert_eq!(
            p2p.host_range(),
            Some((Ipv4Addr::new(192, 168, 1, 9), Ipv4Addr::new(192, 168, 1, 10)))
        );
        assert_eq!(Ipv4::new(Ipv4Addr::new(10, 0, 0, 5), 31).unwrap().host_range(), None);
        assert_eq!(Ipv4::new(Ipv4Addr::new(10, 0, 0, 5), 32).unwrap().host_range(), None);
    }

    #[test]
    fn test_ipv4_cmp() {
        let ip1 = Ipv4::new(Ipv4Addr::new(10, 0, 0, 1), 24).unwrap();
        let ip2 = Ipv4::new(Ipv4Addr::new(10, 0, 0, 2), 24).unwrap();
        let ip3 = Ipv4::new(Ipv4Addr::new(10, 0, 0, 1), 24).unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip1 != ip2);
        assert_eq!(ip1.network(), ip2.network());
    }
}

//! Subnet descriptor produced by the resolver.

use super::Ipv4;
use serde::Serialize;
use std::net::Ipv4Addr;

/// Every property derived from one `address/mask` input.
///
/// Built once per resolution and never changed afterwards.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetDescriptor {
    /// The input exactly as it was handed to the resolver.
    input: String,
    /// Address part of the input, host bits untouched.
    address: Ipv4Addr,
    prefix_length: u8,
    network_address: Ipv4Addr,
    subnet_mask: Ipv4Addr,
    wildcard_mask: Ipv4Addr,
    broadcast_address: Ipv4Addr,
    total_addresses: u64,
    usable_hosts: u64,
    first_host: Option<Ipv4Addr>,
    last_host: Option<Ipv4Addr>,
    #[serde(skip)]
    network: Ipv4,
}

impl SubnetDescriptor {
    pub fn new(input: impl Into<String>, ipv4: Ipv4) -> SubnetDescriptor {
        let range = ipv4.host_range();
        SubnetDescriptor {
            input: input.into(),
            address: ipv4.addr(),
            prefix_length: ipv4.mask(),
            network_address: ipv4.lo(),
            subnet_mask: ipv4.netmask(),
            wildcard_mask: ipv4.hostmask(),
            broadcast_address: ipv4.hi(),
            total_addresses: ipv4.size(),
            usable_hosts: ipv4.usable_hosts(),
            first_host: range.map(|(first, _)| first),
            last_host: range.map(|(_, last)| last),
            network: ipv4.network(),
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    pub fn network_address(&self) -> Ipv4Addr {
        self.network_address
    }

    pub fn subnet_mask(&self) -> Ipv4Addr {
        self.subnet_mask
    }

    /// Subnet mask as a raw 32-bit value.
    pub fn mask_bits(&self) -> u32 {
        u32::from(self.subnet_mask)
    }

    pub fn wildcard_mask(&self) -> Ipv4Addr {
        self.wildcard_mask
    }

    pub fn broadcast_address(&self) -> Ipv4Addr {
        self.broadcast_address
    }

    pub fn total_addresses(&self) -> u64 {
        self.total_addresses
    }

    pub fn usable_hosts(&self) -> u64 {
        self.usable_hosts
    }

    pub fn host_range(&self) -> Option<(Ipv4Addr, Ipv4Addr)> {
        self.first_host.zip(self.last_host)
    }

    /// Canonical network, equal for every input naming the same subnet.
    pub fn network(&self) -> Ipv4 {
        self.network
    }
}

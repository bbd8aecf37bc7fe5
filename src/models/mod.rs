//! Domain models for the subnet calculator.
//!
//! - [`Ipv4`] - IPv4 address with CIDR prefix length and mask arithmetic
//! - [`SubnetDescriptor`] - all properties derived from one input

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_addresses, num_usable_hosts, prefix_from_mask,
    Ipv4, MAX_LENGTH,
};
pub use subnet::SubnetDescriptor;

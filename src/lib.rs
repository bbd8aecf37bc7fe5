//! IPv4 subnet calculator.
//!
//! [`resolve`] turns `address/prefix` or `address/dotted-mask` text into a
//! [`SubnetDescriptor`] holding the network, mask, broadcast and host counts.
pub mod cmd;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
mod resolver;

pub use error::ParseError;
pub use models::SubnetDescriptor;
pub use resolver::{parse_address, parse_mask, resolve};

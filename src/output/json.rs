//! JSON output.

use crate::error::ParseError;
use crate::models::SubnetDescriptor;

pub fn report(subnet: &SubnetDescriptor) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(subnet)
}

pub fn error(error: &ParseError) -> Result<String, serde_json::Error> {
    let value = serde_json::json!({
        "error": error.kind(),
        "reason": error.reason(),
    });
    serde_json::to_string_pretty(&value)
}

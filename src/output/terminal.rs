//! Terminal output.
//!
//! Every function returns the finished text so the caller decides where it
//! goes. Labels are colored when the terminal supports it.

use crate::error::ParseError;
use crate::models::SubnetDescriptor;
use colored::Colorize;

pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

const RULE: &str = "----------------------------------------";
const LABEL_WIDTH: usize = 20;

/// Pad a label to the report column and make it bold.
fn label(text: &str) -> String {
    format!("{text:<width$}", width = LABEL_WIDTH).bold().to_string()
}

pub fn banner() -> String {
    format!(
        "{RULE}\n{title}\nCreated by Richard Kwame Appiah\n{RULE}\n\n",
        title = "Subnetting Calculator".cyan()
    )
}

/// Usage text shown when no input was given.
pub fn usage(program: &str) -> String {
    format!(
        "Usage: {program} <IP_ADDRESS/MASK>\n\
         Example: {program} 192.168.1.0/24\n\
         Example: {program} 10.0.0.10/255.255.0.0\n\n"
    )
}

/// Text report for a resolved subnet, ending with a blank line.
pub fn report(subnet: &SubnetDescriptor) -> String {
    let rows: [(&str, String); 7] = [
        ("Input Network/IP:", subnet.input().to_string()),
        ("Network Address:", subnet.network_address().to_string()),
        ("Subnet Mask:", subnet.subnet_mask().to_string()),
        ("Broadcast Address:", subnet.broadcast_address().to_string()),
        ("Number of Hosts:", subnet.total_addresses().to_string()),
        ("Usable Hosts:", subnet.usable_hosts().to_string()),
        ("CIDR Notation:", format!("/{}", subnet.prefix_length())),
    ];
    let mut text = String::new();
    for (name, value) in rows.iter() {
        text.push_str(&format!("{}{value}\n", label(name)));
    }
    text.push('\n');
    text
}

/// Error line plus a reminder of the accepted formats.
pub fn error_hint(error: &ParseError) -> String {
    format!(
        "{failed} Invalid IP address or mask format. {error}\n\
         Please provide input in the format 'IP_ADDRESS/MASK',\n\
         e.g., '192.168.1.0/24' or '192.168.1.10/255.255.255.0'\n\n",
        failed = "Error:".red()
    )
}

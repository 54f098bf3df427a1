//! Validation of address lists typed into the multi-line editors.

use std::{fmt, net::Ipv4Addr};

const MAX_IPV4_PREFIX: u8 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressRule {
    /// A single dotted-quad IPv4 address.
    Ipv4,
    /// An IPv4 address or an IPv4 network in `address/prefix` form.
    Ipv4OrCidr,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NoEntries,
    InvalidEntry { entry: String, rule: AddressRule },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NoEntries => write!(f, "No entries given. Add at least one address."),
            ValidationError::InvalidEntry { entry, rule: AddressRule::Ipv4 } => {
                write!(f, "'{}' is not a valid IPv4 address.", entry)
            }
            ValidationError::InvalidEntry {
                entry,
                rule: AddressRule::Ipv4OrCidr,
            } => write!(f, "'{}' is not a valid IPv4 address or CIDR range.", entry),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Split into lines, trim, drop blanks, then check every remaining entry.
pub fn validate_address_list(text: &str, rule: AddressRule) -> Result<Vec<String>, ValidationError> {
    let entries: Vec<String> = text.lines().map(str::trim).filter(|line| !line.is_empty()).map(str::to_string).collect();

    if entries.is_empty() {
        return Err(ValidationError::NoEntries);
    }

    if let Some(invalid) = entries.iter().find(|entry| !is_valid(entry, rule)) {
        return Err(ValidationError::InvalidEntry {
            entry: invalid.clone(),
            rule,
        });
    }

    Ok(entries)
}

fn is_valid(entry: &str, rule: AddressRule) -> bool {
    match rule {
        AddressRule::Ipv4 => is_ipv4(entry),
        AddressRule::Ipv4OrCidr => match entry.split_once('/') {
            Some((address, prefix)) => is_ipv4(address) && is_ipv4_prefix(prefix),
            None => is_ipv4(entry),
        },
    }
}

fn is_ipv4(text: &str) -> bool {
    text.parse::<Ipv4Addr>().is_ok()
}

fn is_ipv4_prefix(text: &str) -> bool {
    !text.is_empty()
        && text.len() <= 2
        && text.bytes().all(|byte| byte.is_ascii_digit())
        && text.parse::<u8>().is_ok_and(|prefix| prefix <= MAX_IPV4_PREFIX)
}

#[cfg(test)]
#[path = "test/validate.rs"]
mod tests;

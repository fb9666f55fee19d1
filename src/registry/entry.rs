//! Canonical registry entry type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One registered vendor prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// 24-bit prefix as 6 uppercase hex characters.
    pub oui: String,

    /// Trimmed display name. May be empty.
    pub vendor_name: String,

    /// Trimmed secondary/legal name. May be empty.
    pub vendor_alternate_name: String,
}

/// The extracted prefix does not parse as a base-16 identifier.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid OUI prefix {0:?}")]
pub struct InvalidPrefix(pub String);

impl Entry {
    /// Build an entry from raw record fields.
    ///
    /// The prefix is canonicalized to uppercase; both names are
    /// whitespace-trimmed. The numeric parse is redundant with the fixed
    /// 6-hex-digit record format but guards against a corrupt source line.
    pub fn new(
        oui: &str,
        vendor_name: &str,
        vendor_alternate_name: &str,
    ) -> Result<Self, InvalidPrefix> {
        match u64::from_str_radix(oui, 16) {
            Ok(value) if value < (1 << 48) => Ok(Self {
                oui: oui.to_ascii_uppercase(),
                vendor_name: vendor_name.trim().to_string(),
                vendor_alternate_name: vendor_alternate_name.trim().to_string(),
            }),
            _ => Err(InvalidPrefix(oui.to_string())),
        }
    }
}

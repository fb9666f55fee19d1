//! Lookup operations over the loaded registry.
//!
//! # Responsibilities
//! - Store entries in source order
//! - O(1) exact prefix lookup via index
//! - Resolve full 48-bit addresses to a vendor name
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - Index maps canonical prefix → position in the ordered list, so both
//!   views always agree
//! - NotFound is a value (`None`), never an error

use std::collections::HashMap;

use crate::registry::entry::Entry;

/// Number of hex characters in a full 48-bit hardware address.
const ADDRESS_LEN: usize = 12;

/// Number of hex characters in a vendor prefix.
const PREFIX_LEN: usize = 6;

/// The complete in-memory registry, read-only after load.
#[derive(Debug, Default)]
pub struct Registry {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Registry {
    /// Build a registry from entries in source order.
    ///
    /// Duplicate prefixes: the first record wins; later duplicates are
    /// dropped from both views with a warning.
    pub fn new(entries: Vec<Entry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut index = HashMap::with_capacity(entries.len());

        for entry in entries {
            match index.entry(entry.oui.clone()) {
                std::collections::hash_map::Entry::Vacant(slot) => {
                    slot.insert(kept.len());
                    kept.push(entry);
                }
                std::collections::hash_map::Entry::Occupied(_) => {
                    tracing::warn!(prefix = %entry.oui, "Dropping duplicate registry record");
                }
            }
        }

        Self { entries: kept, index }
    }

    /// All entries in load order.
    pub fn list_all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Exact lookup by prefix, case- and delimiter-insensitive.
    pub fn get(&self, prefix: &str) -> Option<&Entry> {
        let key = canonicalize(prefix);
        self.index.get(&key).map(|&pos| &self.entries[pos])
    }

    /// Resolve a full hardware address to its vendor name.
    ///
    /// Accepts dash-, colon-, or dot-delimited forms as well as bare hex.
    /// Anything that does not normalize to exactly 12 characters is a
    /// normal no-match, never an error.
    pub fn resolve(&self, address: &str) -> Option<&str> {
        let normalized = canonicalize(address);
        if normalized.len() != ADDRESS_LEN {
            return None;
        }
        self.get(&normalized[..PREFIX_LEN])
            .map(|entry| entry.vendor_name.as_str())
    }
}

/// Strip every character that is not an ASCII letter or digit and uppercase
/// the rest, matching the canonical form stored in the index.
fn canonicalize(input: &str) -> String {
    input
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

//! Registry loading from the IEEE OUI text format.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::registry::entry::Entry;
use crate::registry::lookup::Registry;

/// Error type for registry loading. An unreadable source file is the only
/// fatal condition; malformed records are skipped during parsing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read registry source {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One registration is a two-line record: a hex-grouped header line
/// followed by a compact base-16 line, e.g.
///
/// ```text
/// AC-DE-48   (hex)        Private
/// ACDE48     (base 16)    Private
/// ```
static RECORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^([0-9A-Fa-f]{2}(?:-[0-9A-Fa-f]{2}){2})\s+\(hex\)\s+(?P<vendor>.*)\r?\n(?P<oui>[0-9A-Fa-f]{6})\s+\(base 16\)\s+(?P<alternate>.*)$",
    )
    .expect("static record pattern compiles")
});

/// Read and parse the registry source file.
pub fn load_from_file(path: &Path) -> Result<Registry, LoadError> {
    tracing::info!(path = %path.display(), "Loading OUI registry");

    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let registry = parse(&text);
    tracing::info!(entries = registry.len(), "Finished loading OUI registry");
    Ok(registry)
}

/// Parse registry text into a lookup table.
///
/// Records whose prefix fails base-16 validation are skipped with a warning
/// rather than aborting the load.
pub fn parse(text: &str) -> Registry {
    let mut entries = Vec::new();

    for capture in RECORD.captures_iter(text) {
        let oui = &capture["oui"];
        match Entry::new(oui, &capture["vendor"], &capture["alternate"]) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                tracing::warn!(prefix = %oui, error = %err, "Skipping malformed record");
            }
        }
    }

    Registry::new(entries)
}

//! OUI registry subsystem.
//!
//! # Data Flow
//! ```text
//! oui.txt (IEEE registry text)
//!     → loader.rs (regex extraction, per-record validation)
//!     → entry.rs (canonical Entry values)
//!     → lookup.rs (ordered table + prefix index)
//!     → shared via Arc to the HTTP handlers
//! ```
//!
//! # Design Decisions
//! - Registry is immutable after load; there is no reload path
//! - Malformed records are skipped, never fatal; only an unreadable
//!   source file aborts startup
//! - Duplicate prefixes: first record wins in both views
//! - Lookups canonicalize input once, then exact-match on the index

pub mod entry;
pub mod loader;
pub mod lookup;

pub use entry::Entry;
pub use loader::{load_from_file, parse, LoadError};
pub use lookup::Registry;

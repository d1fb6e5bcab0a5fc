//! Environment-aware decoding of TOML documents into typed records.
//!
//! A document may carry environment-named tables next to its regular keys.
//! When decoding for an environment, every lookup at every nesting depth
//! prefers `<env>.<key>` over `<key>`, so an environment only has to spell
//! out the values it changes.
//!
//! ```toml
//! [user]
//! name = "user1"
//! age = 10
//!
//! [user.development]
//! name = "user2"
//! ```
//!
//! Decoding `user` for `development` yields `name = "user2"` and `age = 10`.

mod coerce;
mod error;
mod extract;
mod loader;
mod macros;
mod naming;
mod path;
mod tree;

/// Numeric narrowing used for integer and float leaves.
pub use coerce::{Coerce, Number};
/// Public error type returned by loading and decoding APIs.
pub use error::DecodeError;
/// Extraction traits and helpers, also used by `record!` expansions.
pub use extract::{FieldCursor, FromTree, Record, Shape, decode_record, extract};
/// Document handling and decoder entry points.
pub use loader::{Document, LoadOptions, decode, load, load_from_path};
/// Field naming.
pub use naming::{FieldDescriptor, Visibility, to_snake_case};
/// Overlay path resolution.
pub use path::{ResolvedPath, resolve};
/// Tree queries.
pub use tree::{TreeQuery, kind_name};

/// Re-export for convenience; documents are `toml` tables.
pub use toml;

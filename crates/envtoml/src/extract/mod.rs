//! Type-directed extraction of values from a document tree.
//!
//! Every decodable type implements [`FromTree`], which converts a single
//! node. [`extract`] adds the overlay lookup in front of it: the key is
//! resolved against the current table (preferring `<env>.<key>`), the node is
//! read, and the target type takes over, recursing with the same environment
//! for nested records, maps and sequences.

mod collection;
mod record;
mod scalar;

use crate::DecodeError;
use crate::path::resolve;
use crate::tree::{TreeQuery, kind_name};
use log::trace;
use toml::{Table, Value};

pub use record::{FieldCursor, Record, decode_record};

/// Shape of a decodable target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// A leaf: string, boolean, number, timestamp or untyped value.
    Scalar,
    /// A record with a fixed field list.
    Record,
    /// A string-keyed associative container.
    Map,
    /// A growable or fixed-size sequence.
    Sequence,
}

/// Types that can be built from a document node.
pub trait FromTree: Sized {
    const SHAPE: Shape;

    /// Convert a node that has already been located.
    ///
    /// `env` is passed down unchanged so nested lookups keep applying the
    /// same overlay.
    fn from_node(node: &Value, env: &str) -> Result<Self, DecodeError>;
}

/// Look up `key` in `tree` with the `env` overlay and convert the node.
///
/// Errors carry the path they occurred at, relative to `tree`.
pub fn extract<T: FromTree>(tree: &Table, key: &str, env: &str) -> Result<T, DecodeError> {
    let path = resolve(tree, key, env)?;
    let location = path.to_string();
    trace!("extracting {:?} value at {location}", T::SHAPE);
    let node = tree.get_path(&path).ok_or_else(|| DecodeError::NotFound {
        path: location.clone(),
    })?;
    T::from_node(node, env).map_err(|err| err.within(&location))
}

/// Borrow a node as a table, failing with `InvalidTree` otherwise.
pub(crate) fn expect_table(node: &Value) -> Result<&Table, DecodeError> {
    match node {
        Value::Table(table) => Ok(table),
        other => Err(DecodeError::invalid_tree(kind_name(other))),
    }
}

//! Maps and sequences.
//!
//! The two composites fail differently: a sequence is all-or-nothing, while
//! a map drops entries that do not convert and keeps the rest.

use super::{FromTree, Shape, expect_table, extract};
use crate::DecodeError;
use crate::tree::{TreeQuery, kind_name};
use log::debug;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use toml::{Table, Value};

/// Convert every key of a table node, skipping keys that fail.
///
/// Each key is resolved with the overlay, so `<env>.<key>` inside the table
/// still wins over `<key>`. An empty quoted key cannot be looked up and is
/// skipped like any other failing entry.
fn map_entries<V: FromTree>(node: &Value, env: &str) -> Result<Vec<(String, V)>, DecodeError> {
    let table = expect_table(node)?;
    let mut entries = Vec::new();
    for key in table.local_keys() {
        match extract::<V>(table, key, env) {
            Ok(value) => entries.push((key.to_string(), value)),
            Err(err) => debug!("skipping map entry (key={key}, reason={err})"),
        }
    }
    Ok(entries)
}

/// Convert every element of an array node, failing on the first bad one.
fn sequence_items<T: FromTree>(node: &Value, env: &str) -> Result<Vec<T>, DecodeError> {
    let Value::Array(items) = node else {
        return Err(DecodeError::type_mismatch("array", kind_name(node)));
    };
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| T::from_node(item, env).map_err(|err| err.within(&format!("[{idx}]"))))
        .collect()
}

impl<V: FromTree, S: BuildHasher + Default> FromTree for HashMap<String, V, S> {
    const SHAPE: Shape = Shape::Map;

    fn from_node(node: &Value, env: &str) -> Result<Self, DecodeError> {
        Ok(map_entries(node, env)?.into_iter().collect())
    }
}

impl<V: FromTree> FromTree for BTreeMap<String, V> {
    const SHAPE: Shape = Shape::Map;

    fn from_node(node: &Value, env: &str) -> Result<Self, DecodeError> {
        Ok(map_entries(node, env)?.into_iter().collect())
    }
}

impl FromTree for Table {
    const SHAPE: Shape = Shape::Map;

    fn from_node(node: &Value, env: &str) -> Result<Self, DecodeError> {
        Ok(map_entries::<Value>(node, env)?.into_iter().collect())
    }
}

impl<T: FromTree> FromTree for Vec<T> {
    const SHAPE: Shape = Shape::Sequence;

    fn from_node(node: &Value, env: &str) -> Result<Self, DecodeError> {
        sequence_items(node, env)
    }
}

impl<T: FromTree, const N: usize> FromTree for [T; N] {
    const SHAPE: Shape = Shape::Sequence;

    fn from_node(node: &Value, env: &str) -> Result<Self, DecodeError> {
        let items = sequence_items::<T>(node, env)?;
        let len = items.len();
        items.try_into().map_err(|_| {
            DecodeError::type_mismatch(
                format!("array of {N} elements"),
                format!("array of {len} elements"),
            )
        })
    }
}

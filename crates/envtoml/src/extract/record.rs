//! Records: types with a fixed, statically described field list.

use super::{FromTree, expect_table, extract};
use crate::DecodeError;
use crate::naming::FieldDescriptor;
use log::debug;
use std::any::type_name;
use std::slice;
use toml::{Table, Value};

/// A struct whose fields are decoded by key.
///
/// Implementations are normally generated by [`record!`](crate::record).
pub trait Record: Sized {
    /// Fields in declaration order.
    const FIELDS: &'static [FieldDescriptor];

    /// Build a complete value from `table`; any field failure fails the whole
    /// record.
    fn decode_table(table: &Table, env: &str) -> Result<Self, DecodeError>;

    /// Assign visible fields in place, in declaration order.
    ///
    /// Stops at the first failure; fields assigned before it keep their new
    /// values and hidden fields are never touched.
    fn decode_into(&mut self, table: &Table, env: &str) -> Result<(), DecodeError>;
}

/// Decode a record from a node, which must be a table.
pub fn decode_record<R: Record>(node: &Value, env: &str) -> Result<R, DecodeError> {
    R::decode_table(expect_table(node)?, env)
}

/// Walks a record's field descriptors while its fields are being built.
pub struct FieldCursor<'a> {
    table: &'a Table,
    env: &'a str,
    fields: slice::Iter<'static, FieldDescriptor>,
}

impl<'a> FieldCursor<'a> {
    pub fn new<R: Record>(table: &'a Table, env: &'a str) -> Self {
        debug!(
            "decoding record (type={}, fields={}, env={env})",
            type_name::<R>(),
            R::FIELDS.len()
        );
        Self {
            table,
            env,
            fields: R::FIELDS.iter(),
        }
    }

    /// Extract the next field using its derived key.
    pub fn next_field<T: FromTree>(&mut self) -> Result<T, DecodeError> {
        let field = self.fields.next().ok_or_else(|| {
            DecodeError::InvalidArgument("record has more fields than descriptors".to_string())
        })?;
        debug_assert!(field.is_visible(), "hidden field {} decoded", field.name);
        extract(self.table, &field.key(), self.env)
    }

    /// Step over a hidden field.
    pub fn skip_field(&mut self) {
        if let Some(field) = self.fields.next() {
            debug!("skipping hidden field {}", field.name);
        }
    }
}

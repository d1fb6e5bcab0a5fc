//! Error types for document loading and decoding.

use thiserror::Error;

/// Errors returned while loading or decoding a document.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// Reading a document file failed.
    #[error("failed to read document: {0}")]
    ReadFailed(#[from] std::io::Error),
    /// Parsing document text failed.
    #[error("failed to parse document: {0}")]
    ParseFailed(#[from] toml::de::Error),
    /// Neither the overlay path nor the base path exists.
    #[error("path not found: {path}")]
    NotFound { path: String },
    /// The node kind does not match the requested leaf kind.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: String,
        found: String,
    },
    /// A numeric value does not fit the target width or precision.
    #[error("value out of range at {path}: {value} does not fit {target}")]
    Overflow {
        path: String,
        target: &'static str,
        value: String,
    },
    /// A node expected to be a table is something else.
    #[error("invalid tree at {path}: expected table, found {found}")]
    InvalidTree { path: String, found: &'static str },
    /// The caller supplied an argument the decoder cannot work with.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl DecodeError {
    pub(crate) fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            path: String::new(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub(crate) fn overflow(target: &'static str, value: impl ToString) -> Self {
        Self::Overflow {
            path: String::new(),
            target,
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_tree(found: &'static str) -> Self {
        Self::InvalidTree {
            path: String::new(),
            found,
        }
    }

    /// Location the error refers to, relative to the decoded root.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::NotFound { path }
            | Self::TypeMismatch { path, .. }
            | Self::Overflow { path, .. }
            | Self::InvalidTree { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Prefix the error location with the segment it was reached through.
    pub(crate) fn within(mut self, segment: &str) -> Self {
        if let Self::NotFound { path }
        | Self::TypeMismatch { path, .. }
        | Self::Overflow { path, .. }
        | Self::InvalidTree { path, .. } = &mut self
        {
            *path = prefix_path(segment, path);
        }
        self
    }
}

fn prefix_path(segment: &str, path: &str) -> String {
    match (segment.is_empty(), path.is_empty()) {
        (true, _) => path.to_string(),
        (false, true) => segment.to_string(),
        (false, false) if path.starts_with('[') => format!("{segment}{path}"),
        (false, false) => format!("{segment}.{path}"),
    }
}

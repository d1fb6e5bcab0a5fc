//! Decoder entry points.
//!
//! Parses TOML text into a [`Document`] and decodes records out of it for a
//! chosen environment. Decoding only borrows the document, so one parsed
//! document can serve any number of environments and threads.

mod document_io;


use crate::{DecodeError, Record};
use log::{debug, info};
use std::any::type_name;
use std::path::Path;
use std::str::FromStr;
use toml::Table;

/// A parsed document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    root: Table,
}

impl Document {
    /// Wrap an already-parsed table.
    pub fn from_table(root: Table) -> Self {
        Self { root }
    }

    /// Parse a document from TOML text.
    pub fn load_from_str(contents: &str) -> Result<Self, DecodeError> {
        debug!("parsing document from raw contents (len={})", contents.len());
        Ok(Self::from_table(document_io::parse(contents)?))
    }

    /// Read and parse a document file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, DecodeError> {
        Ok(Self::from_table(document_io::read(path.as_ref())?))
    }

    /// Root table of the document.
    pub fn root(&self) -> &Table {
        &self.root
    }

    /// Build a new record for the configured environment.
    pub fn decode_with_options<T: Record>(&self, options: &LoadOptions) -> Result<T, DecodeError> {
        let env = options.environment.as_str();
        let value = T::decode_table(&self.root, env)?;
        debug!("decoded {} (env={env})", type_name::<T>());
        Ok(value)
    }

    /// Decode into an existing record for the configured environment.
    ///
    /// On failure the fields decoded before the failing one keep their new
    /// values.
    pub fn load_with_options<T: Record>(
        &self,
        destination: &mut T,
        options: &LoadOptions,
    ) -> Result<(), DecodeError> {
        let env = options.environment.as_str();
        destination.decode_into(&self.root, env)?;
        debug!("loaded {} (env={env})", type_name::<T>());
        Ok(())
    }
}

impl FromStr for Document {
    type Err = DecodeError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        Self::load_from_str(contents)
    }
}

impl From<Table> for Document {
    fn from(root: Table) -> Self {
        Self::from_table(root)
    }
}

/// Options controlling a decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Environment whose overlay tables take precedence; empty for none.
    ///
    /// Used verbatim as a table name, whitespace included.
    pub environment: String,
}

impl LoadOptions {
    /// Options for the given environment.
    pub fn new(environment: impl Into<String>) -> Self {
        Self {
            environment: environment.into(),
        }
    }

    /// Options whose environment is read from a process environment variable.
    ///
    /// An unset or non-unicode variable selects no environment.
    pub fn from_env_var(var: &str) -> Self {
        let environment = std::env::var(var).unwrap_or_default();
        debug!("environment from {var}: {environment:?}");
        Self::new(environment)
    }

    /// Replace the environment.
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }
}

/// Decode `document` into `destination` for `env`.
///
/// Visible fields are assigned in declaration order; the first failing field
/// aborts the load and its error is returned, leaving earlier fields
/// assigned.
pub fn load<T: Record>(
    destination: &mut T,
    document: &Document,
    env: &str,
) -> Result<(), DecodeError> {
    document.load_with_options(destination, &LoadOptions::new(env))
}

/// Read the document at `path` and decode it into `destination` for `env`.
pub fn load_from_path<T: Record>(
    destination: &mut T,
    path: impl AsRef<Path>,
    env: &str,
) -> Result<(), DecodeError> {
    let path = path.as_ref();
    let document = Document::load_from_path(path)?;
    load(destination, &document, env)?;
    info!("document loaded (path={}, env={env})", path.display());
    Ok(())
}

/// Build a record from `document` for `env`; any failure discards it.
pub fn decode<T: Record>(document: &Document, env: &str) -> Result<T, DecodeError> {
    document.decode_with_options(&LoadOptions::new(env))
}

//! Overlay-aware path resolution.

use crate::DecodeError;
use crate::tree::TreeQuery;
use log::trace;
use std::fmt;

/// A location in the tree as a list of non-empty segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath<'a> {
    segments: Vec<&'a str>,
}

impl<'a> ResolvedPath<'a> {
    /// Build a path from segments, dropping empty ones.
    pub fn join(segments: &[&'a str]) -> Self {
        Self {
            segments: segments
                .iter()
                .copied()
                .filter(|segment| !segment.is_empty())
                .collect(),
        }
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for ResolvedPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Pick the path to read for `key`: `<env>.<key>` when it exists, else `<key>`.
///
/// `key` must be non-empty; the root of a record is decoded against the
/// current table directly and never goes through here.
pub fn resolve<'a, T>(
    tree: &T,
    key: &'a str,
    env: &'a str,
) -> Result<ResolvedPath<'a>, DecodeError>
where
    T: TreeQuery + ?Sized,
{
    if key.is_empty() {
        return Err(DecodeError::InvalidArgument(
            "lookup key must not be empty".to_string(),
        ));
    }

    let overlay = ResolvedPath::join(&[env, key]);
    if tree.has(&overlay) {
        trace!("resolved overlay path (key={key}, path={overlay})");
        return Ok(overlay);
    }

    let base = ResolvedPath::join(&[key]);
    if tree.has(&base) {
        trace!("resolved base path (key={key}, env={env})");
        return Ok(base);
    }

    Err(DecodeError::NotFound {
        path: key.to_string(),
    })
}

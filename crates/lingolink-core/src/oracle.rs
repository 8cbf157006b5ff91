//! Existence oracle boundary.
//!
//! The engine never touches the filesystem directly; it asks an
//! [`ExistenceOracle`] whether a resolved localized path actually denotes an
//! existing resource of the expected kind. Implementations must fail closed:
//! any I/O error answers `false`. A missed diagnostic is safe for an
//! advisory tool; a crash or a false positive is not.

use crate::resolve::ResourceKind;
use std::fs;
use std::path::Path;

/// Answers whether a path denotes an existing resource of the given kind.
///
/// Implementations must never panic or propagate I/O errors.
pub trait ExistenceOracle {
    /// Returns `true` only if `path` exists and is of the expected `kind`
    /// (a directory for [`ResourceKind::Folder`], a regular file for
    /// [`ResourceKind::File`]).
    fn exists(&self, path: &Path, kind: ResourceKind) -> bool;
}

/// Any `Fn(&Path, ResourceKind) -> bool` is an oracle. Handy for tests and
/// in-memory corpora.
impl<F> ExistenceOracle for F
where
    F: Fn(&Path, ResourceKind) -> bool,
{
    fn exists(&self, path: &Path, kind: ResourceKind) -> bool {
        self(path, kind)
    }
}

/// The real-filesystem oracle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOracle;

impl ExistenceOracle for FsOracle {
    fn exists(&self, path: &Path, kind: ResourceKind) -> bool {
        match fs::metadata(path) {
            Ok(meta) => match kind {
                ResourceKind::Folder => meta.is_dir(),
                ResourceKind::File => meta.is_file(),
            },
            Err(_) => false,
        }
    }
}

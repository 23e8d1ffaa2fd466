//! Template lookup, either built in or from a directory on disk

use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{files, TemplateSetKind};
use crate::error::{Result, ScaffoldError};

/// Reference documents copied unchanged into every scaffold
pub const DOCUMENTS: [&str; 2] = ["README.md", "DEPLOYMENT.md"];

/// Where template text is read from
///
/// A `Directory` root mirrors the built-in layout: common templates and
/// documents at the top level, model templates under a subdirectory named
/// after the model type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary
    #[default]
    Embedded,
    /// Templates read from this directory
    Directory(PathBuf),
}

impl TemplateSource {
    /// Load a template's text
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the template does not exist or
    /// cannot be read.
    pub fn load(&self, kind: TemplateSetKind, name: &str) -> Result<Cow<'static, str>> {
        match self {
            Self::Embedded => kind.embedded(name).map(Cow::Borrowed).ok_or_else(|| {
                ScaffoldError::io(kind.relative_path(name), not_found("no built-in template"))
            }),
            Self::Directory(root) => {
                let path = root.join(kind.relative_path(name));
                fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|e| ScaffoldError::io(path, e))
            }
        }
    }

    /// Copy a reference document to `dest` byte for byte, replacing any existing file
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the document is missing or `dest`
    /// cannot be written.
    pub fn copy_document(&self, name: &str, dest: &Path) -> Result<()> {
        match self {
            Self::Embedded => {
                let text = files::document(name)
                    .ok_or_else(|| ScaffoldError::io(name, not_found("no built-in document")))?;
                fs::write(dest, text).map_err(|e| ScaffoldError::io(dest, e))
            }
            Self::Directory(root) => {
                // Contents only; the output keeps default permissions
                let src = root.join(name);
                let bytes = fs::read(&src).map_err(|e| ScaffoldError::io(&src, e))?;
                fs::write(dest, bytes).map_err(|e| ScaffoldError::io(dest, e))
            }
        }
    }
}

fn not_found(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::NotFound, msg.to_string())
}

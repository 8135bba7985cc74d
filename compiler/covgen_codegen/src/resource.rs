//! The hand-written fixed test block.
//!
//! Appended verbatim after the generated groups. Its contents are never
//! inspected; only its entry function name is needed for `main`.

use std::path::Path;

use covgen_ir::CoverageError;

/// Default location of the fixed block.
pub const DEFAULT_FIXED_PATH: &str = "fixed_tests";

/// Default entry function defined by the fixed block.
pub const DEFAULT_ENTRY: &str = "fixed_tests";

/// Fixed test source plus the function `main` calls to run it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedBlock {
    pub text: String,
    pub entry: String,
}

impl FixedBlock {
    pub fn new(text: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entry: entry.into(),
        }
    }

    /// Read the block from `path` in full.
    pub fn load(path: &Path, entry: impl Into<String>) -> Result<Self, CoverageError> {
        let text = std::fs::read_to_string(path).map_err(|source| {
            CoverageError::ResourceNotFound {
                path: path.to_path_buf(),
                source,
            }
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded fixed block");
        Ok(Self::new(text, entry))
    }
}

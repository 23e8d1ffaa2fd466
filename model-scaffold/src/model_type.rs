//! Model types and their template layout

use std::fmt;
use std::str::FromStr;

use crate::error::ScaffoldError;

/// Every spelling accepted by `--model-type`
pub const VALID_MODEL_TYPES: [&str; 3] = ["python", "python_sklearn", "h2o_mojo"];

/// Kind of model the scaffold is generated for
///
/// `python` is an alias for [`ModelType::PythonSklearn`] and is folded
/// into it during parsing, so nothing downstream ever sees the alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelType {
    /// Pickled scikit-learn style model served from Python
    PythonSklearn,
    /// H2O MOJO artifact scored through the H2O runtime
    H2oMojo,
}

impl ModelType {
    /// Name of the template subdirectory for this model type
    #[must_use]
    pub const fn template_dir(self) -> &'static str {
        match self {
            Self::PythonSklearn => "python_sklearn",
            Self::H2oMojo => "h2o_mojo",
        }
    }

    /// Directories the user populates by hand, created empty
    #[must_use]
    pub const fn extra_directories(self) -> &'static [&'static str] {
        match self {
            Self::PythonSklearn => &[],
            Self::H2oMojo => &["ext_packages", "license"],
        }
    }
}

impl FromStr for ModelType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "python" | "python_sklearn" => Ok(Self::PythonSklearn),
            "h2o_mojo" => Ok(Self::H2oMojo),
            other => Err(ScaffoldError::InvalidModelType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_dir())
    }
}

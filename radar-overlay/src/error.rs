use std::fmt;

/// Typed error for rendering map records as text.
#[derive(Debug)]
pub enum OutputError {
    /// JSON serialization failed.
    Json(serde_json::Error),
    /// TOML serialization failed.
    Toml(toml::ser::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(e) => write!(f, "JSON serialization failed: {e}"),
            Self::Toml(e) => write!(f, "TOML serialization failed: {e}"),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            Self::Toml(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for OutputError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<toml::ser::Error> for OutputError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Toml(e)
    }
}

/// Failure parsing an `x,y[,z]` world position.
#[derive(Debug)]
pub enum PositionError {
    /// Expected two or three comma-separated components.
    Components(usize),
    /// A component was not a finite number.
    Number(String),
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Components(n) => write!(f, "expected x,y or x,y,z but got {n} components"),
            Self::Number(s) => write!(f, "invalid coordinate {s:?}"),
        }
    }
}

impl std::error::Error for PositionError {}

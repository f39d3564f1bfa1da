use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for podbay operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for podbay operations
#[derive(Debug)]
pub enum SiteError {
    /// IO error wrapper
    Io(io::Error),
    /// Configuration error
    Config(String),
    /// Template processing error
    Template(String),
    /// File watching error
    Watch(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for SiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteError::Io(err) => write!(f, "IO error: {}", err),
            SiteError::Config(msg) => write!(f, "Configuration error: {}", msg),
            SiteError::Template(msg) => write!(f, "Template error: {}", msg),
            SiteError::Watch(msg) => write!(f, "Watch error: {}", msg),
            SiteError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for SiteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SiteError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SiteError {
    fn from(err: io::Error) -> Self {
        SiteError::Io(err)
    }
}

impl From<String> for SiteError {
    fn from(msg: String) -> Self {
        SiteError::Generic(msg)
    }
}

impl From<&str> for SiteError {
    fn from(msg: &str) -> Self {
        SiteError::Generic(msg.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        let err = SiteError::Config("bad debounce".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad debounce");

        let err: SiteError = "plain".into();
        assert_eq!(err.to_string(), "plain");
    }

    #[test]
    fn test_io_source_is_kept() {
        let err = SiteError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("IO error:"));
    }
}

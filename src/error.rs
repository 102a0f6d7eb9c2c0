use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Args(String),
}

// The failure envelope surfaces this text verbatim as `msg`, so the
// underlying description is not prefixed or rewrapped.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "{}", err),
            Error::Args(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Args(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Args(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_verbatim() {
        let io_error = Error::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "permission denied",
        ));
        assert_eq!(io_error.to_string(), "permission denied");

        let args_error = Error::Args("path is required".to_string());
        assert_eq!(args_error.to_string(), "path is required");
    }

    #[test]
    fn test_error_from_conversions() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test");
        let error: Error = io_err.into();
        assert!(matches!(error, Error::Io(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let error: Error = json_err.into();
        assert!(matches!(error, Error::Args(_)));
    }

    #[test]
    fn test_io_error_source_is_preserved() {
        use std::error::Error as _;

        let error = Error::Io(std::io::Error::other("disk fault"));
        assert!(error.source().is_some());
        assert!(Error::Args("bad flag".to_string()).source().is_none());
    }
}

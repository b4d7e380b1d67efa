use colored::Colorize;
use std::fmt;

/// Errors raised at the application boundary. The browsing core never
/// fails, so these variants cover catalog loading and terminal
/// interaction only.
#[derive(Debug)]
pub enum RentalError {
    CatalogError {
        path: String,
        message: String,
    },
    IoError {
        operation: String,
        source: std::io::Error,
    },
    Other(anyhow::Error),
}

impl RentalError {
    pub fn catalog_error(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CatalogError {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io_error(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            operation: operation.into(),
            source,
        }
    }
}

impl fmt::Display for RentalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CatalogError { path, message } => {
                writeln!(f, "{} Catalog error", "✗".red().bold())?;
                writeln!(f, "  {} Path: {}", "→".blue(), path.yellow())?;
                write!(f, "  {} Error: {}", "→".blue(), message)
            }
            Self::IoError { operation, source } => {
                writeln!(
                    f,
                    "{} I/O error during: {}",
                    "✗".red().bold(),
                    operation.yellow()
                )?;
                write!(f, "  {} Error: {}", "→".blue(), source)
            }
            Self::Other(err) => write!(f, "{} {}", "✗".red().bold(), err),
        }
    }
}

impl std::error::Error for RentalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::IoError { source, .. } => Some(source),
            Self::Other(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RentalError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            operation: "unknown".to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for RentalError {
    fn from(err: anyhow::Error) -> Self {
        Self::Other(err)
    }
}

impl From<dialoguer::Error> for RentalError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Other(anyhow::anyhow!("Dialog error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, RentalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = RentalError::catalog_error("listings.json", "invalid JSON: trailing comma");
        let rendered = err.to_string();
        assert!(rendered.contains("Catalog error"));
        assert!(rendered.contains("listings.json"));
        assert!(rendered.contains("trailing comma"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error;

        let inner = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = RentalError::io_error("reading catalog", inner);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("reading catalog"));
    }

    #[test]
    fn test_from_io_error_defaults_operation() {
        let inner = std::io::Error::other("boom");
        let err: RentalError = inner.into();
        match err {
            RentalError::IoError { operation, .. } => assert_eq!(operation, "unknown"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_from_anyhow() {
        let err: RentalError = anyhow::anyhow!("something else").into();
        assert!(matches!(err, RentalError::Other(_)));
    }
}

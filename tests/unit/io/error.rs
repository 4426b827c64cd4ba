//! Tests for error display and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::io;
    use std::path::{Path, PathBuf};

    use polypack::PackError;
    use polypack::io::error::{WithPath, invalid_parameter, parse_error, verification_error};

    #[test]
    fn test_parse_error_display() {
        let err = parse_error(7, &"invalid shape id 'ab'");

        assert_eq!(err.to_string(), "Parse error on line 7: invalid shape id 'ab'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = invalid_parameter("steps_per_advance", &0, &"must be positive");

        assert_eq!(
            err.to_string(),
            "Invalid parameter 'steps_per_advance' = '0': must be positive"
        );
    }

    #[test]
    fn test_verification_display() {
        let err = verification_error(&"overlap at (1, 2)");

        assert!(err.to_string().contains("overlap at (1, 2)"));
    }

    // Tests file system errors keep the path and the io source
    // Verified by dropping the source from Error::source
    #[test]
    fn test_with_path_keeps_source() {
        let result: io::Result<()> = Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));

        let Err(err) = result.with_path(Path::new("out/region_000.png"), "create file") else {
            unreachable!("error input stays an error");
        };

        assert!(err.to_string().contains("create file"));
        assert!(err.to_string().contains("out/region_000.png"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_from_io_error() {
        let err = PackError::from(io::Error::from(io::ErrorKind::NotFound));

        match err {
            PackError::FileSystem { path, .. } => assert_eq!(path, PathBuf::from("<unknown>")),
            _ => unreachable!("Expected FileSystem error type"),
        }
    }
}

//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use rasterfx::RasterError;
    use rasterfx::io::error::{invalid_kernel, invalid_parameter, unsupported};
    use std::error::Error;

    // Tests error source chaining for wrapped I/O failures
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = RasterError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests that engine errors carry no source
    #[test]
    fn test_engine_errors_have_no_source() {
        assert!(unsupported("filter", &"emboss").source().is_none());
        assert!(invalid_kernel("filter", &"even size").source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    #[test]
    fn test_invalid_parameter_message() {
        let message = invalid_parameter("seed_count", &0, &"must be positive").to_string();
        assert!(message.contains("seed_count"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests DimensionMismatch formatting
    #[test]
    fn test_dimension_mismatch_message() {
        let error = RasterError::DimensionMismatch {
            operation: "colour transform",
            expected: 3,
            found: 4,
        };
        let message = error.to_string();
        assert!(message.contains("colour transform"));
        assert!(message.contains("expected 3, found 4"));
    }

    // Tests Unsupported and InvalidKernel formatting
    #[test]
    fn test_identifier_messages() {
        assert_eq!(
            unsupported("country", &"narnia").to_string(),
            "Unsupported country 'narnia'"
        );
        assert_eq!(
            invalid_kernel("dither", &"kernel cannot be empty").to_string(),
            "Invalid dither matrix: kernel cannot be empty"
        );
    }

    // Tests conversion from bare I/O errors
    #[test]
    fn test_from_io_error() {
        let error = RasterError::from(std::io::Error::other("boom"));
        assert!(matches!(error, RasterError::FileSystem { .. }));
    }
}

//! Tests for colour matrix validation and per-pixel transforms

#[cfg(test)]
mod tests {
    use ndarray::{Array2, array};
    use rasterfx::RasterError;
    use rasterfx::effects::transform::{ColorTransform, TransformKind};
    use rasterfx::model::{Color, PixelGrid};

    // Tests that the identity matrix changes nothing, alpha included
    #[test]
    fn test_identity_transform() -> rasterfx::Result<()> {
        let identity = ColorTransform::new(Array2::eye(3))?;
        let grid = PixelGrid::from_rows(vec![vec![
            Color::rgba(1, 2, 3, 4),
            Color::rgba(250, 128, 0, 200),
        ]])?;
        assert_eq!(identity.apply(&grid)?, grid);
        Ok(())
    }

    // Tests the greyscale luminance weights with half-up rounding
    #[test]
    fn test_greyscale_rounds_half_up() -> rasterfx::Result<()> {
        let grey = TransformKind::Greyscale
            .transform()
            .transform(Color::rgba(10, 20, 30, 99))?;
        assert_eq!(grey.components(), [19, 19, 19, 99]);
        Ok(())
    }

    // Tests that sepia saturates bright channels
    #[test]
    fn test_sepia_saturates() -> rasterfx::Result<()> {
        let sepia = TransformKind::Sepia.transform().transform(Color::WHITE)?;
        assert_eq!(sepia.components(), [255, 255, 239, 255]);
        Ok(())
    }

    // Tests that a matrix of the wrong size fails before touching pixels
    #[test]
    fn test_dimension_mismatch() -> rasterfx::Result<()> {
        let small = ColorTransform::new(array![[1.0, 0.0], [0.0, 1.0]])?;
        let grid = PixelGrid::new(1, 1)?;
        assert!(matches!(
            small.apply(&grid),
            Err(RasterError::DimensionMismatch {
                expected: 3,
                found: 2,
                ..
            })
        ));
        assert!(small.transform(Color::BLACK).is_err());
        Ok(())
    }

    // Tests rejection of empty and non-square matrices
    #[test]
    fn test_matrix_validation() {
        assert!(matches!(
            ColorTransform::new(Array2::zeros((3, 2))),
            Err(RasterError::InvalidKernel { .. })
        ));
        assert!(ColorTransform::new(Array2::zeros((0, 0))).is_err());
        assert!(ColorTransform::from_rows(&[vec![1.0, 0.0], vec![0.0, 1.0]]).is_ok());
    }

    // Tests name resolution for the built-in transforms
    #[test]
    fn test_transform_kind_from_str() {
        assert_eq!(
            "Grayscale".parse::<TransformKind>().ok(),
            Some(TransformKind::Greyscale)
        );
        assert_eq!("sepia".parse::<TransformKind>().ok(), Some(TransformKind::Sepia));
        assert!("negative".parse::<TransformKind>().is_err());
    }
}

//! Tests for dispatching engines over images

#[cfg(test)]
mod tests {
    use rasterfx::effects::{DitherKind, FilterKind, Operation, TransformKind};
    use rasterfx::model::{Color, ColorType, Image, PixelGrid};

    fn sample() -> rasterfx::Result<Image> {
        let grid = PixelGrid::filled(4, 4, Color::rgb(90, 140, 200))?;
        Image::new(grid, "bmp", ColorType::Rgb)
    }

    // Tests that results keep format and colour type
    #[test]
    fn test_apply_keeps_metadata() -> rasterfx::Result<()> {
        let image = sample()?;
        for operation in [
            Operation::Filter(FilterKind::Blur),
            Operation::Transform(TransformKind::Sepia),
            Operation::Dither(DitherKind::FloydSteinberg),
            Operation::Mosaic {
                seeds: 3,
                rng_seed: 100,
            },
        ] {
            let result = operation.apply(&image)?;
            assert_eq!(result.format(), "bmp");
            assert_eq!(result.color_type(), ColorType::Rgb);
            assert_eq!((result.height(), result.width()), (4, 4));
        }
        Ok(())
    }

    // Tests that consuming engines work on a copy
    #[test]
    fn test_apply_leaves_input_untouched() -> rasterfx::Result<()> {
        let image = sample()?;
        let before = image.clone();
        let dithered = Operation::Dither(DitherKind::JarvisJudiceNinke).apply(&image)?;
        assert_eq!(image, before);
        assert_ne!(dithered.grid(), image.grid());
        Ok(())
    }

    // Tests that engine parameter errors surface through the facade
    #[test]
    fn test_invalid_mosaic_parameters() -> rasterfx::Result<()> {
        let image = sample()?;
        let operation = Operation::Mosaic {
            seeds: 0,
            rng_seed: 1,
        };
        assert!(operation.apply(&image).is_err());
        Ok(())
    }

    // Tests the names used in output files
    #[test]
    fn test_names() {
        assert_eq!(Operation::Filter(FilterKind::Sharpen).name(), "sharpen");
        assert_eq!(Operation::Transform(TransformKind::Greyscale).name(), "greyscale");
        assert_eq!(
            Operation::Dither(DitherKind::FloydSteinberg).name(),
            "floyd-steinberg"
        );
        assert_eq!(
            Operation::Mosaic {
                seeds: 250,
                rng_seed: 100
            }
            .name(),
            "mosaic250"
        );
    }
}

//! Tests for diffusion tap resolution, quantization and error propagation

#[cfg(test)]
mod tests {
    use ndarray::Array2;
    use rasterfx::RasterError;
    use rasterfx::effects::dither::{DiffusionTap, DitherKernel, DitherKind, quantize};
    use rasterfx::model::{Color, PixelGrid};

    fn offsets(kernel: &DitherKernel) -> Vec<(i64, i64)> {
        kernel
            .taps()
            .iter()
            .map(|tap| (tap.row_offset, tap.col_offset))
            .collect()
    }

    // Tests that Floyd-Steinberg resolves to the classic four neighbours
    #[test]
    fn test_floyd_steinberg_taps() {
        let kernel = DitherKind::FloydSteinberg.kernel();
        assert_eq!(offsets(&kernel), vec![(0, 1), (1, -1), (1, 0), (1, 1)]);
        assert_eq!(
            kernel.taps().first(),
            Some(&DiffusionTap {
                row_offset: 0,
                col_offset: 1,
                weight: 0.4375
            })
        );
    }

    // Tests that the anchor sits left of the first nonzero weight
    #[test]
    fn test_jarvis_judice_ninke_taps() {
        let kernel = DitherKind::JarvisJudiceNinke.kernel();
        let taps = offsets(&kernel);
        assert_eq!(taps.len(), 12);
        assert_eq!(taps.first(), Some(&(0, 1)));
        assert_eq!(taps.get(1), Some(&(0, 2)));
        assert_eq!(taps.get(2), Some(&(1, -2)));
        assert_eq!(taps.last(), Some(&(2, 2)));
    }

    // Tests the quantization threshold on the integer channel average
    #[test]
    fn test_quantize_threshold() {
        assert_eq!(quantize(Color::rgb(127, 127, 127)), 0);
        assert_eq!(quantize(Color::rgb(128, 128, 128)), 255);
        assert_eq!(quantize(Color::rgb(255, 128, 0)), 0);
        assert_eq!(quantize(Color::rgb(255, 129, 0)), 255);
    }

    // Tests single grey pixels on each side of the threshold
    #[test]
    fn test_single_pixel_threshold() -> rasterfx::Result<()> {
        let kernel = DitherKind::FloydSteinberg.kernel();
        let dark = kernel.apply(PixelGrid::filled(1, 1, Color::rgba(127, 127, 127, 10))?)?;
        let light = kernel.apply(PixelGrid::filled(1, 1, Color::rgb(128, 128, 128))?)?;
        assert_eq!(dark.get(0, 0)?, Color::BLACK);
        assert_eq!(light.get(0, 0)?, Color::WHITE);
        Ok(())
    }

    // Tests that quantization error is carried to the right-hand neighbour
    #[test]
    fn test_error_diffuses_right() -> rasterfx::Result<()> {
        let grid = PixelGrid::filled(1, 2, Color::rgb(127, 127, 127))?;
        let dithered = DitherKind::FloydSteinberg.kernel().apply(grid)?;
        // 127 + round(0.4375 * 127) = 183, which quantizes to white
        assert_eq!(dithered.get(0, 0)?, Color::BLACK);
        assert_eq!(dithered.get(0, 1)?, Color::WHITE);
        Ok(())
    }

    // Tests that every output pixel is pure black or white and opaque
    #[test]
    fn test_output_is_binary() -> rasterfx::Result<()> {
        let grid = PixelGrid::from_rows(
            (0..6)
                .map(|row| {
                    (0..7)
                        .map(|col| Color::rgba(row * 40, col * 30, 90, 50))
                        .collect()
                })
                .collect(),
        )?;
        for kind in [DitherKind::FloydSteinberg, DitherKind::JarvisJudiceNinke] {
            let dithered = kind.kernel().apply(grid.clone())?;
            assert_eq!(dithered.dimensions(), (6, 7));
            assert!(
                dithered
                    .indexed_iter()
                    .all(|(_, c)| c == Color::BLACK || c == Color::WHITE)
            );
        }
        Ok(())
    }

    // Tests that diffused neighbour values saturate instead of wrapping
    #[test]
    fn test_diffused_values_are_clamped() -> rasterfx::Result<()> {
        let grey = |v| Color::rgb(v, v, v);
        let grid = PixelGrid::from_rows(vec![vec![grey(200), grey(10), grey(130)]])?;
        let kernel = DitherKernel::from_rows(&[vec![0.0, 0.0, 0.4375]])?;

        // 10 - 24 saturates to 0, so no negative error reaches the last pixel
        let dithered = kernel.apply(grid)?;
        let levels: Vec<u8> = dithered.indexed_iter().map(|(_, c)| c.red()).collect();
        assert_eq!(levels, vec![255, 0, 255]);
        Ok(())
    }

    // Tests kernel construction from rows and rejection of empty kernels
    #[test]
    fn test_kernel_validation() -> rasterfx::Result<()> {
        assert!(matches!(
            DitherKernel::new(Array2::zeros((0, 3))),
            Err(RasterError::InvalidKernel { .. })
        ));
        let kernel = DitherKernel::from_rows(&[vec![0.0, 1.0]])?;
        assert_eq!(offsets(&kernel), vec![(0, 1)]);
        assert_eq!(kernel.weights().dim(), (1, 2));
        Ok(())
    }

    // Tests name resolution including abbreviations
    #[test]
    fn test_dither_kind_from_str() {
        for name in ["fs", "Floyd-Steinberg", "floyd_steinberg"] {
            assert_eq!(name.parse::<DitherKind>().ok(), Some(DitherKind::FloydSteinberg));
        }
        assert_eq!("JJN".parse::<DitherKind>().ok(), Some(DitherKind::JarvisJudiceNinke));
        assert!("atkinson".parse::<DitherKind>().is_err());
        assert_eq!(DitherKind::JarvisJudiceNinke.to_string(), "jarvis-judice-ninke");
    }
}

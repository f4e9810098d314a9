//! Tests for rainbow stripe counting, padding and placement

#[cfg(test)]
mod tests {
    use rasterfx::RasterError;
    use rasterfx::model::Color;
    use rasterfx::pattern::rainbow::RAINBOW_COLORS;
    use rasterfx::pattern::{Orientation, Pattern, Rainbow};

    const RED: Color = Color::rgb(255, 0, 0);
    const YELLOW: Color = Color::rgb(255, 255, 0);
    const VIOLET: Color = Color::rgb(139, 0, 255);

    // Tests seven stripes filling the axis exactly
    #[test]
    fn test_exact_fit_has_no_padding() -> rasterfx::Result<()> {
        let rainbow = Rainbow::new(700, 700, 100, Orientation::Vertical, false)?;
        assert_eq!(rainbow.stripe_count(), 7);
        assert_eq!(rainbow.padding(), 0);
        assert_eq!(rainbow.layout().len(), 7);

        let grid = rainbow.draw()?;
        assert_eq!(grid.get(0, 0)?, RED);
        assert_eq!(grid.get(699, 650)?, VIOLET);
        Ok(())
    }

    // Tests centring with equal white margins
    #[test]
    fn test_centred_with_padding() -> rasterfx::Result<()> {
        let rainbow = Rainbow::new(1000, 1000, 100, Orientation::Horizontal, false)?;
        assert_eq!(rainbow.stripe_count(), 7);
        assert_eq!(rainbow.padding(), 150);
        assert_eq!(rainbow.layout().len(), 9);

        let grid = rainbow.draw()?;
        assert_eq!(grid.get(149, 500)?, Color::WHITE);
        assert_eq!(grid.get(150, 0)?, RED);
        assert_eq!(grid.get(849, 999)?, VIOLET);
        assert_eq!(grid.get(850, 0)?, Color::WHITE);
        Ok(())
    }

    // Tests that an odd leftover line stays white
    #[test]
    fn test_odd_leftover_line() -> rasterfx::Result<()> {
        let rainbow = Rainbow::new(20, 701, 100, Orientation::Horizontal, false)?;
        assert_eq!(rainbow.padding(), 0);
        let grid = rainbow.draw()?;
        assert_eq!(grid.get(699, 0)?, VIOLET);
        assert_eq!(grid.get(700, 0)?, Color::WHITE);
        Ok(())
    }

    // Tests the truncated final stripe when fewer than seven fit
    #[test]
    fn test_partial_stripe_without_repeat() -> rasterfx::Result<()> {
        let rainbow = Rainbow::new(650, 10, 100, Orientation::Vertical, false)?;
        assert_eq!(rainbow.stripe_count(), 7);
        assert_eq!(rainbow.padding(), 0);
        let last = rainbow.layout().last().copied();
        assert_eq!(last.map(|r| (r.x(), r.width())), Some((600, 50)));

        let short = Rainbow::new(250, 10, 100, Orientation::Vertical, false)?;
        assert_eq!(short.stripe_count(), 3);
        assert_eq!(short.draw()?.get(0, 249)?, YELLOW);
        Ok(())
    }

    // Tests colour cycling with repeat
    #[test]
    fn test_repeat_cycles_colors() -> rasterfx::Result<()> {
        let rainbow = Rainbow::new(950, 5, 100, Orientation::Vertical, true)?;
        assert_eq!(rainbow.stripe_count(), 10);
        assert_eq!(rainbow.padding(), 0);

        let grid = rainbow.draw()?;
        assert_eq!(grid.get(4, 700)?, RED);
        assert_eq!(grid.get(0, 949)?, YELLOW);
        Ok(())
    }

    // Tests parameter validation
    #[test]
    fn test_validation() {
        assert!(matches!(
            Rainbow::new(10, 10, 0, Orientation::Horizontal, false),
            Err(RasterError::InvalidParameter { parameter: "stripe_size", .. })
        ));
        assert!(Rainbow::new(0, 10, 1, Orientation::Horizontal, true).is_err());
        assert!(Rainbow::new(10, 0, 1, Orientation::Vertical, true).is_err());
    }

    // Tests orientation parsing from characters and names
    #[test]
    fn test_orientation_parsing() {
        assert_eq!(Orientation::try_from('h').ok(), Some(Orientation::Horizontal));
        assert_eq!(Orientation::try_from('V').ok(), Some(Orientation::Vertical));
        assert!(Orientation::try_from('x').is_err());
        assert_eq!(
            "Vertical".parse::<Orientation>().ok(),
            Some(Orientation::Vertical)
        );
        assert_eq!("H".parse::<Orientation>().ok(), Some(Orientation::Horizontal));
        assert!(matches!(
            "diagonal".parse::<Orientation>(),
            Err(RasterError::Unsupported { kind: "orientation", .. })
        ));
    }

    // Tests the band colour table
    #[test]
    fn test_band_colors() {
        assert_eq!(RAINBOW_COLORS.first(), Some(&RED));
        assert_eq!(RAINBOW_COLORS.get(5), Some(&Color::rgb(46, 43, 95)));
        assert_eq!(RAINBOW_COLORS.last(), Some(&VIOLET));
    }
}

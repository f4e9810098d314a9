//! Tests for rectangle geometry and painting

#[cfg(test)]
mod tests {
    use rasterfx::model::{Color, Paint, PixelGrid, Rectangle};

    // Tests that x addresses columns and y addresses rows
    #[test]
    fn test_paint_uses_x_as_column() -> rasterfx::Result<()> {
        let mut grid = PixelGrid::filled(4, 6, Color::WHITE)?;
        Rectangle::new(3, 1, 2, 3, Color::BLACK).paint(&mut grid)?;

        assert_eq!(grid.get(1, 3)?, Color::BLACK);
        assert_eq!(grid.get(3, 4)?, Color::BLACK);
        assert_eq!(grid.get(0, 3)?, Color::WHITE);
        assert_eq!(grid.get(1, 5)?, Color::WHITE);
        Ok(())
    }

    // Tests that an overflowing rectangle is rejected without painting
    #[test]
    fn test_paint_out_of_bounds() -> rasterfx::Result<()> {
        let mut grid = PixelGrid::filled(4, 4, Color::WHITE)?;
        let result = Rectangle::new(2, 0, 3, 1, Color::BLACK).paint(&mut grid);
        assert!(result.is_err());
        assert!(grid.indexed_iter().all(|(_, c)| c == Color::WHITE));
        Ok(())
    }

    // Tests scaling of origin and extents
    #[test]
    fn test_scaled() {
        let rect = Rectangle::new(1, 2, 3, 4, Color::BLACK).scaled(5);
        assert_eq!((rect.x(), rect.y()), (5, 10));
        assert_eq!((rect.width(), rect.height()), (15, 20));
        assert_eq!((rect.right(), rect.bottom()), (20, 30));
        assert_eq!(rect.color(), Color::BLACK);
    }
}

//! Text bar for visualizing a resource level against its capacity

use std::fmt::{self, Write};
use telemachus_dash_core::BAR_WIDTH;

/// Glyph for a filled cell
pub const FILLED_CELL: char = '█';

/// Glyph for an empty cell
pub const EMPTY_CELL: char = '-';

/// Number of filled and empty cells for `value / max`
///
/// The two counts are rounded independently (filled rounds up, empty
/// rounds down), so for some ratios they add up to 39 rather than
/// `BAR_WIDTH`. Each count is capped at `BAR_WIDTH`, so an overfull tank
/// draws a full bar instead of `ceil(40 * value / max)` cells running
/// past the row. Non-finite or negative counts draw nothing.
pub fn bar_cells(value: f64, max: f64) -> (usize, usize) {
    let ratio = value / max;
    let width = BAR_WIDTH as f64;
    let filled = cell_count((width * ratio).ceil());
    let empty = cell_count((width * (1.0 - ratio)).floor());
    (filled, empty)
}

fn cell_count(cells: f64) -> usize {
    if cells.is_finite() && cells > 0.0 {
        (cells as usize).min(BAR_WIDTH)
    } else {
        0
    }
}

/// Render a bar display
pub fn render_bar<W: Write>(out: &mut W, value: f64, max: f64) -> fmt::Result {
    let (filled, empty) = bar_cells(value, max);
    for _ in 0..filled {
        out.write_char(FILLED_CELL)?;
    }
    for _ in 0..empty {
        out.write_char(EMPTY_CELL)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(value: f64, max: f64) -> String {
        let mut s = String::new();
        render_bar(&mut s, value, max).unwrap();
        s
    }

    #[test]
    fn half_full_bar() {
        assert_eq!(bar_cells(20.0, 40.0), (20, 20));
        assert_eq!(bar(20.0, 40.0), format!("{}{}", "█".repeat(20), "-".repeat(20)));
    }

    #[test]
    fn fractional_ratio_still_sums_to_width() {
        assert_eq!(bar_cells(25.0, 40.0), (25, 15));
        assert_eq!(bar_cells(1.0, 3.0), (14, 26));
    }

    #[test]
    fn independent_rounding_can_drop_a_cell() {
        // 40 * (1 - 0.8) lands just below 8
        assert_eq!(bar_cells(4.0, 5.0), (32, 7));
        assert_eq!(bar(4.0, 5.0).chars().count(), 39);
        assert_eq!(bar_cells(9.0, 10.0), (36, 3));
        assert_eq!(bar(9.0, 10.0).chars().count(), 39);
    }

    #[test]
    fn empty_and_full() {
        assert_eq!(bar_cells(0.0, 100.0), (0, 40));
        assert_eq!(bar_cells(100.0, 100.0), (40, 0));
    }

    #[test]
    fn overfull_tank_stops_at_bar_width() {
        assert_eq!(bar_cells(50.0, 40.0), (40, 0));
        assert_eq!(bar(50.0, 40.0), "█".repeat(40));
        assert_eq!(bar_cells(41.0, 40.0), (40, 0));
    }

    #[test]
    fn degenerate_capacity_draws_nothing_filled() {
        assert_eq!(bar_cells(5.0, 0.0).0, 0);
        assert_eq!(bar_cells(-3.0, 10.0).0, 0);
    }
}

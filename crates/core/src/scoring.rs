//! Scoring module - points for line clears and running round totals
//!
//! A clear awards `cleared_cells * lines`. Cells where a full row crosses a full
//! column are counted once in `cleared_cells`, while both lines count toward the
//! multiplier, so simultaneous clears pay more than the same lines cleared one by one.

use crate::placement::ClearResult;

/// Points for a clear of `cleared_cells` distinct cells across `lines` full lines
pub fn line_clear_score(cleared_cells: u32, lines: u32) -> u32 {
    cleared_cells.saturating_mul(lines)
}

/// Running totals for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RoundStats {
    pub score: u32,
    pub lines_cleared: u32,
    pub cells_cleared: u32,
    pub pieces_placed: u32,
    /// Times the tray was refilled after all slots were used
    pub refills: u32,
}

impl RoundStats {
    /// Record a placement and its clear; returns the points earned
    pub fn record_placement(&mut self, clear: &ClearResult) -> u32 {
        let points = clear.points();
        self.pieces_placed += 1;
        self.lines_cleared += clear.lines;
        self.cells_cleared += clear.cleared_cells;
        self.score = self.score.saturating_add(points);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_score() {
        assert_eq!(line_clear_score(0, 0), 0);
        assert_eq!(line_clear_score(10, 1), 10);
        // Row + column crossing: 19 distinct cells, 2 lines
        assert_eq!(line_clear_score(19, 2), 38);
        // Two parallel rows
        assert_eq!(line_clear_score(20, 2), 40);
    }

    #[test]
    fn test_line_clear_score_saturates() {
        assert_eq!(line_clear_score(u32::MAX, 2), u32::MAX);
    }

    #[test]
    fn test_record_placement() {
        let mut stats = RoundStats::default();
        let clear = ClearResult {
            cleared_cells: 19,
            lines: 2,
            ..ClearResult::default()
        };
        assert_eq!(stats.record_placement(&clear), 38);
        assert_eq!(stats.record_placement(&ClearResult::default()), 0);

        assert_eq!(stats.score, 38);
        assert_eq!(stats.pieces_placed, 2);
        assert_eq!(stats.lines_cleared, 2);
        assert_eq!(stats.cells_cleared, 19);
    }
}

use crate::game::Direction;

/// Tracks an in-progress drag gesture over the terminal.
///
/// A press records the starting cell; the release compares horizontal
/// against vertical displacement and the larger axis wins, its sign
/// picking the direction. Drags shorter than the threshold on both axes
/// resolve to nothing, so a plain click never steers.
///
/// Terminal cells are roughly twice as tall as they are wide, so the
/// column delta is halved before the comparison.
#[derive(Debug)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    threshold: u16,
}

impl SwipeTracker {
    pub fn new(threshold: u16) -> Self {
        Self {
            start: None,
            threshold,
        }
    }

    /// Mouse button went down at (column, row)
    pub fn press(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    /// Mouse button came up; returns the swiped direction, or None for
    /// clicks, jitter, and releases without a matching press.
    pub fn release(&mut self, column: u16, row: u16) -> Option<Direction> {
        let (start_col, start_row) = self.start.take()?;

        let dx = (i32::from(column) - i32::from(start_col)) / 2;
        let dy = i32::from(row) - i32::from(start_row);

        let threshold = i32::from(self.threshold);
        if dx.abs() < threshold && dy.abs() < threshold {
            return None;
        }

        // Ties go vertical, matching the axis comparison order
        Some(if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_swipes() {
        let mut swipe = SwipeTracker::new(2);

        swipe.press(10, 10);
        assert_eq!(swipe.release(20, 10), Some(Direction::Right));

        swipe.press(20, 10);
        assert_eq!(swipe.release(10, 10), Some(Direction::Left));
    }

    #[test]
    fn test_vertical_swipes() {
        let mut swipe = SwipeTracker::new(2);

        swipe.press(10, 5);
        assert_eq!(swipe.release(10, 12), Some(Direction::Down));

        swipe.press(10, 12);
        assert_eq!(swipe.release(10, 5), Some(Direction::Up));
    }

    #[test]
    fn test_larger_axis_wins() {
        let mut swipe = SwipeTracker::new(2);

        // 12 columns right (6 after aspect correction) vs 3 rows down
        swipe.press(0, 0);
        assert_eq!(swipe.release(12, 3), Some(Direction::Right));

        // 4 columns right (2 after correction) vs 5 rows down
        swipe.press(0, 0);
        assert_eq!(swipe.release(4, 5), Some(Direction::Down));
    }

    #[test]
    fn test_click_is_not_a_swipe() {
        let mut swipe = SwipeTracker::new(2);

        swipe.press(10, 10);
        assert_eq!(swipe.release(10, 10), None);

        // One row of jitter stays under the threshold
        swipe.press(10, 10);
        assert_eq!(swipe.release(11, 11), None);
    }

    #[test]
    fn test_release_without_press() {
        let mut swipe = SwipeTracker::new(2);
        assert_eq!(swipe.release(10, 10), None);
    }

    #[test]
    fn test_press_consumed_by_release() {
        let mut swipe = SwipeTracker::new(2);

        swipe.press(10, 10);
        assert_eq!(swipe.release(10, 20), Some(Direction::Down));
        assert_eq!(swipe.release(10, 30), None);
    }

    #[test]
    fn test_column_delta_is_aspect_corrected() {
        let mut swipe = SwipeTracker::new(2);

        // Three columns is only one effective cell, below the threshold
        swipe.press(10, 10);
        assert_eq!(swipe.release(13, 10), None);

        swipe.press(10, 10);
        assert_eq!(swipe.release(14, 10), Some(Direction::Right));
    }
}

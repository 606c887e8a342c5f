//! # Camera Window
//!
//! Vertical scrolling that keeps a look-ahead margin between the player and
//! the top and bottom edges of the visible rows.

use crate::config;

/// Returns the new top row of the camera window after the player moved to
/// `row`.
///
/// Scrolls down when the player comes within the margin of the bottom edge
/// and up when it comes within the margin of the top edge. The camera never
/// goes above row 0.
///
/// # Examples
///
/// ```
/// use miner::scroll_camera;
///
/// assert_eq!(scroll_camera(0, 10, 30), 0);
/// assert_eq!(scroll_camera(0, 28, 30), 1);
/// assert_eq!(scroll_camera(1, 3, 30), 0);
/// ```
pub fn scroll_camera(camera_y: i32, row: i32, visible_rows: i32) -> i32 {
    let margin = config::CAMERA_MARGIN;
    let mut camera = camera_y;
    if row > camera + visible_rows - margin {
        camera = row - visible_rows + margin;
    }
    // windows shorter than both margins can overshoot, so the top is checked again
    if row < camera + margin {
        camera = (row - margin).max(0);
    }
    camera
}

#[cfg(test)]
mod tests {
    use super::*;

    const H: i32 = config::VISIBLE_ROWS;

    #[test]
    fn test_no_scroll_inside_window() {
        for row in 0..=H - 3 {
            assert_eq!(scroll_camera(0, row, H), 0);
        }
        assert_eq!(scroll_camera(10, 20, H), 10);
    }

    #[test]
    fn test_scroll_down_keeps_margin() {
        assert_eq!(scroll_camera(0, H - 2, H), 1);
        assert_eq!(scroll_camera(40, 80, H), 80 - H + 3);
    }

    #[test]
    fn test_scroll_up_is_clamped() {
        assert_eq!(scroll_camera(1, 3, H), 0);
        assert_eq!(scroll_camera(50, 49, H), 46);
        assert_eq!(scroll_camera(5, 0, H), 0);
    }

    #[test]
    fn test_small_window_keeps_top_margin() {
        assert_eq!(scroll_camera(0, 0, 1), 0);
        assert_eq!(scroll_camera(0, 5, 4), 2);
        for rows in 1..8 {
            for camera in 0..10 {
                for row in 0..20 {
                    let scrolled = scroll_camera(camera, row, rows);
                    assert!(scrolled >= 0);
                    assert!(row >= scrolled + 3 || scrolled == 0);
                }
            }
        }
    }
}

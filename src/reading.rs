/// Fraction of the viewport height at which reading starts and ends.
pub const READ_START: f64 = 0.1;
pub const READ_END: f64 = 0.9;

/// How far the reader has progressed through an element, in `0.0..=1.0`.
///
/// Zero while the element's top is below `READ_START` of the viewport, one
/// once its bottom has passed `READ_END`. `top` is relative to the viewport.
pub fn reading_progress(top: f64, height: f64, viewport: f64) -> f64 {
    let travelled = READ_START * viewport - top;
    let distance = height - (READ_END - READ_START) * viewport;
    if distance <= 0.0 {
        return if travelled >= 0.0 { 1.0 } else { 0.0 };
    }
    (travelled / distance).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bounds() {
        // top still at 50% of an 800px viewport
        assert_eq!(reading_progress(400.0, 3000.0, 800.0), 0.0);
        // top exactly at the start line
        assert_eq!(reading_progress(80.0, 3000.0, 800.0), 0.0);
        // bottom at the end line: top = 720 - 3000
        assert_eq!(reading_progress(-2280.0, 3000.0, 800.0), 1.0);
        assert_eq!(reading_progress(-9000.0, 3000.0, 800.0), 1.0);
    }

    #[test]
    fn test_progress_midway() {
        // distance = 3000 - 640 = 2360, halfway means travelled 1180
        let p = reading_progress(80.0 - 1180.0, 3000.0, 800.0);
        assert!((p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_short_element() {
        assert_eq!(reading_progress(200.0, 300.0, 800.0), 0.0);
        assert_eq!(reading_progress(50.0, 300.0, 800.0), 1.0);
    }
}

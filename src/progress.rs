//! Percentage-of-target calculation shared by the goal views.

/// Map `(current, target)` to a percentage in `[0, 100]`.
///
/// A zero target reads as 0% rather than dividing by zero; out-of-range
/// ratios (negative current, current past target) clamp to the bounds.
pub fn calculate_progress(current: f64, target: f64) -> f64 {
    if target == 0.0 {
        return 0.0;
    }
    ((current / target) * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_target_is_zero() {
        assert_eq!(calculate_progress(0.0, 0.0), 0.0);
        assert_eq!(calculate_progress(50.0, 0.0), 0.0);
        assert_eq!(calculate_progress(-50.0, 0.0), 0.0);
    }

    #[test]
    fn test_partial_progress() {
        assert_eq!(calculate_progress(50.0, 200.0), 25.0);
        assert_eq!(calculate_progress(1.0, 3.0), 100.0 / 3.0);
    }

    #[test]
    fn test_clamps_above_hundred() {
        assert_eq!(calculate_progress(300.0, 100.0), 100.0);
    }

    #[test]
    fn test_clamps_below_zero() {
        assert_eq!(calculate_progress(-10.0, 100.0), 0.0);
    }

    #[test]
    fn test_exact_completion() {
        assert_eq!(calculate_progress(100.0, 100.0), 100.0);
    }
}

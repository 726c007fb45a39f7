//! Regular grid stepping shared by the stage generators.

/// Yields `start, start + step, start + 2·step, …` while the value is below `end`.
///
/// Values are computed as `start + i·step` rather than by accumulation, so
/// long runs do not drift.
pub(crate) fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(move |i| start + f64::from(i) * step)
        .take_while(move |value| *value < end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_exclusive_end() {
        let values: Vec<f64> = steps(100.0, 400.0, 100.0).collect();
        assert_eq!(values, [100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_steps_partial_cell() {
        let values: Vec<f64> = steps(10.0, 390.0, 80.0).collect();
        assert_eq!(values, [10.0, 90.0, 170.0, 250.0, 330.0]);
    }

    #[test]
    fn test_steps_empty() {
        assert_eq!(steps(100.0, 100.0, 100.0).count(), 0);
    }
}

//! Small numeric helpers shared by the ray sources and renderers.
use std::ops::{Add, Div, Mul, Sub};

#[must_use]
pub const fn usize_to_f64(value: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let newval = value as f64;
    newval
}

/// Generate `nr_of_points` evenly spaced values covering the closed interval `[start, end]`.
///
/// A single point is placed at `start`. An empty vector is returned for
/// `nr_of_points == 0`. Works for plain `f64` values as well as for `uom` quantities such as
/// `Length` or `Angle`.
#[must_use]
pub fn evenly_spaced<T>(start: T, end: T, nr_of_points: usize) -> Vec<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f64, Output = T> + Div<f64, Output = T>,
{
    match nr_of_points {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / usize_to_f64(nr_of_points - 1);
            (0..nr_of_points)
                .map(|i| start + step * usize_to_f64(i))
                .collect()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::millimeter;
    use approx::assert_abs_diff_eq;
    use uom::si::length::millimeter;
    #[test]
    fn usize_to_f64_conversion() {
        assert_eq!(usize_to_f64(0), 0.0);
        assert_eq!(usize_to_f64(42), 42.0);
    }
    #[test]
    fn evenly_spaced_f64() {
        assert!(evenly_spaced(-1.0, 1.0, 0).is_empty());
        assert_eq!(evenly_spaced(-1.0, 1.0, 1), vec![-1.0]);
        assert_eq!(evenly_spaced(-1.0, 1.0, 2), vec![-1.0, 1.0]);
        assert_eq!(evenly_spaced(-1.0, 1.0, 3), vec![-1.0, 0.0, 1.0]);
        let values = evenly_spaced(0.0, 1.0, 11);
        assert_eq!(values.len(), 11);
        assert_abs_diff_eq!(values[10], 1.0);
        assert_abs_diff_eq!(values[3], 0.3, epsilon = 1e-15);
    }
    #[test]
    fn evenly_spaced_degenerate_interval() {
        assert_eq!(evenly_spaced(0.0, 0.0, 4), vec![0.0; 4]);
    }
    #[test]
    fn evenly_spaced_length() {
        let values = evenly_spaced(millimeter!(-2.0), millimeter!(2.0), 5);
        assert_eq!(values.len(), 5);
        assert_abs_diff_eq!(values[0].get::<millimeter>(), -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(values[1].get::<millimeter>(), -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(values[2].get::<millimeter>(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(values[4].get::<millimeter>(), 2.0, epsilon = 1e-12);
    }
}

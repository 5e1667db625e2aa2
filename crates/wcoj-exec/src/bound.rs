//! AGM size bound.
//!
//! For `n` relations with cardinalities `N_1..N_n`:
//!
//! ```text
//! P = 0                         if any N_i = 0
//! P = 1                         if n <= 1
//! P = Π N_i ^ (1 / (n - 1))     otherwise
//! ```
//!
//! `P` sizes the gate and caps deferral at non-root nodes; it never filters
//! tuples.

/// Compute `P` from relation cardinalities.
pub fn agm_bound<I>(cardinalities: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    let sizes: Vec<usize> = cardinalities.into_iter().collect();
    if sizes.iter().any(|&n| n == 0) {
        return 0.0;
    }
    let n = sizes.len();
    if n <= 1 {
        return 1.0;
    }
    let exp = 1.0 / (n - 1) as f64;
    sizes.iter().map(|&c| (c as f64).powf(exp)).product()
}

/// Gate width at a node whose right input holds `right_rows` tuples:
/// `⌈P / right_rows⌉`, or 0 when the right input is empty.
///
/// Float → int casts saturate, so an overflowing `P` yields `usize::MAX`.
pub fn gate_threshold(p: f64, right_rows: usize) -> usize {
    if right_rows == 0 || p <= 0.0 || p.is_nan() {
        return 0;
    }
    (p / right_rows as f64).ceil() as usize
}

/// Most candidates a non-root node may hand up unjoined: `⌈P⌉`.
pub fn deferral_cap(p: f64) -> usize {
    if p <= 0.0 || p.is_nan() {
        return 0;
    }
    p.ceil() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_bound_is_n_to_the_three_halves() {
        let p = agm_bound([3, 3, 3]);
        assert!((p - 27f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn two_way_bound_is_the_product() {
        assert!((agm_bound([3, 4]) - 12.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(agm_bound([7]), 1.0);
        assert_eq!(agm_bound(Vec::<usize>::new()), 1.0);
        assert_eq!(agm_bound([5, 0, 2]), 0.0);
        assert_eq!(agm_bound([0]), 0.0);
    }

    #[test]
    fn threshold_rounds_up() {
        assert_eq!(gate_threshold(27f64.sqrt(), 3), 2);
        assert_eq!(gate_threshold(9.0, 3), 3);
        assert_eq!(gate_threshold(9.0, 0), 0);
        assert_eq!(gate_threshold(f64::INFINITY, 2), usize::MAX);
    }

    #[test]
    fn deferral_cap_is_the_ceiling_of_the_bound() {
        assert_eq!(deferral_cap(27f64.sqrt()), 6);
        assert_eq!(deferral_cap(9.0), 9);
        assert_eq!(deferral_cap(0.0), 0);
        assert_eq!(deferral_cap(f64::NAN), 0);
    }
}

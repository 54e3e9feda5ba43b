// crates/monocut-core/src/helpers/fixed.rs
//
// Fixed-decimal formatting with ties rounded up. `format!("{:.1}")` rounds an
// exact binary tie to even (1.25 → "1.2"); every size and frame-rate string
// in the UI expects "1.3".

/// Format `value` with exactly `digits` decimals, rounding halves away from zero.
///
/// ```
/// use monocut_core::helpers::fixed::to_fixed;
/// assert_eq!(to_fixed(1.25, 1),  "1.3");
/// assert_eq!(to_fixed(12.5, 0),  "13");
/// assert_eq!(to_fixed(29.97, 2), "29.97");
/// ```
pub fn to_fixed(value: f64, digits: u32) -> String {
    let scale = 10f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", digits as usize, rounded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_round_up() {
        assert_eq!(to_fixed(0.5, 0),     "1");
        assert_eq!(to_fixed(2.5, 0),     "3");
        assert_eq!(to_fixed(1.25, 1),    "1.3");
        assert_eq!(to_fixed(12.125, 2),  "12.13");
    }

    #[test]
    fn non_ties_unchanged() {
        assert_eq!(to_fixed(23.976, 0), "24");
        assert_eq!(to_fixed(1.0, 1),    "1.0");
        assert_eq!(to_fixed(2.0, 2),    "2.00");
    }
}

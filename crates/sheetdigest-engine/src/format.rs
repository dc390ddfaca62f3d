//! Number formatting for report lines.

/// Round half away from zero to `decimals` places.
///
/// Operates on the binary value, so `1.005` (stored as `1.00499...`) rounds
/// down to `1.00`. Values too large to scale are already whole and are
/// returned unchanged.
pub fn round_half_up(n: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let scaled = n * factor;
    if !scaled.is_finite() {
        return n;
    }
    scaled.round() / factor
}

/// Format a number for display.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "#NAN!".to_string()
    } else if n.is_infinite() {
        "#INF!".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e10 {
        format!("{:.0}", n)
    } else {
        format!("{:.2}", n)
    }
}

/// Format an average: always two decimals.
pub fn format_avg(n: f64) -> String {
    format!("{:.2}", round_half_up(n, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.125, 2), 2.13);
        assert_eq!(round_half_up(-2.5, 0), -3.0);
        assert_eq!(round_half_up(4.0, 2), 4.0);
        assert_eq!(round_half_up(10.0 / 3.0, 2), 3.33);
    }

    #[test]
    fn test_round_half_up_near_f64_max() {
        assert_eq!(round_half_up(1e307, 2), 1e307);
        assert_eq!(round_half_up(-f64::MAX, 2), -f64::MAX);
        assert!(format_avg(1e307).ends_with(".00"));
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42.0), "42");
        assert_eq!(format_number(-7.0), "-7");
        assert_eq!(format_number(3.14159), "3.14");
    }

    #[test]
    fn test_format_avg_keeps_two_decimals() {
        assert_eq!(format_avg(4.0), "4.00");
        assert_eq!(format_avg(2.5), "2.50");
        assert_eq!(format_avg(2.0 / 3.0), "0.67");
    }
}

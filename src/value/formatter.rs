/// Absolute fractional part of a value.
fn absfract(value: f64) -> f64 {
    (value - value.trunc()).abs()
}

/// Round to the nearest multiple of `nearest`, ties away from zero.
fn round_to_nearest(value: f64, nearest: f64) -> f64 {
    (value / nearest).round() * nearest
}

/// Render a quantity for display.
///
/// Values within 0.1 of the common cooking fractions snap to their glyphs
/// (¼ checked before ½ before ¾). Below 1 two decimals are kept; below 10
/// one decimal, dropped entirely when the value sits close to an integer.
/// From 10 up, `round_to_nice` additionally snaps to multiples of 5 (10
/// from 100 up) so a bulk-rescaled page reads cleanly. Pass
/// `round_to_nice = false` when echoing the exact current value back for
/// editing.
///
/// All zero-decimal emission rounds ties away from zero (`f64::round`):
/// 22.5 nice-rounds to 25, not 20.
pub fn format_quantity(value: f64, round_to_nice: bool) -> String {
    if (value - 0.25).abs() < 0.1 {
        "¼".to_string()
    } else if (value - 0.5).abs() < 0.1 {
        "½".to_string()
    } else if (value - 0.75).abs() < 0.1 {
        "¾".to_string()
    } else if value < 1.0 {
        format!("{:.2}", value)
    } else if value < 10.0 {
        if absfract(value) < 0.2 || absfract(value) > 0.8 {
            format!("{}", value.round())
        } else {
            format!("{:.1}", value)
        }
    } else if value < 100.0 {
        if round_to_nice {
            format!("{}", round_to_nearest(value, 5.0))
        } else {
            format!("{}", value.round())
        }
    } else if round_to_nice {
        format!("{}", round_to_nearest(value, 10.0))
    } else {
        format!("{}", value.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::parser::parse_quantity;

    #[test]
    fn test_fraction_snapping() {
        assert_eq!(format_quantity(0.25, false), "¼");
        assert_eq!(format_quantity(0.5, false), "½");
        assert_eq!(format_quantity(0.75, false), "¾");
        // anywhere inside the 0.1 window snaps too
        assert_eq!(format_quantity(0.3, false), "¼");
        assert_eq!(format_quantity(0.55, false), "½");
        assert_eq!(format_quantity(0.8, false), "¾");
    }

    #[test]
    fn test_small_values_keep_two_decimals() {
        assert_eq!(format_quantity(0.1, false), "0.10");
        assert_eq!(format_quantity(0.999, false), "1.00");
        assert_eq!(format_quantity(0.12, false), "0.12");
    }

    #[test]
    fn test_single_digit_values() {
        // close to an integer: no decimal
        assert_eq!(format_quantity(1.0, false), "1");
        assert_eq!(format_quantity(3.1, false), "3");
        assert_eq!(format_quantity(8.9, false), "9");
        // otherwise one decimal
        assert_eq!(format_quantity(2.5, false), "2.5");
        assert_eq!(format_quantity(9.5, false), "9.5");
    }

    #[test]
    fn test_nice_rounding_to_fives() {
        assert_eq!(format_quantity(23.0, true), "25");
        assert_eq!(format_quantity(23.0, false), "23");
        assert_eq!(format_quantity(12.0, true), "10");
        assert_eq!(format_quantity(99.0, true), "100");
    }

    #[test]
    fn test_nice_rounding_to_tens() {
        assert_eq!(format_quantity(115.0, true), "120");
        assert_eq!(format_quantity(123.4, true), "120");
        assert_eq!(format_quantity(123.4, false), "123");
        assert_eq!(format_quantity(123.6, false), "124");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(format_quantity(22.5, true), "25");
        assert_eq!(format_quantity(17.5, true), "20");
    }

    #[test]
    fn test_exact_round_trip_for_fractions() {
        for v in [0.25, 0.5, 0.75] {
            let text = format_quantity(v, false);
            assert_eq!(parse_quantity(&text).unwrap(), v);
        }
    }
}

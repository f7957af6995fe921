use libm::{fabsf, floorf, log10f, powf};

/// The E24 preferred values of one decade, stored as mantissa × 10.
pub const E24: [u8; 24] = [
    10, 11, 12, 13, 15, 16, 18, 20, 22, 24, 27, 30, 33, 36, 39, 43, 47, 51, 56, 62, 68, 75, 82, 91,
];

/// Decades scanned around the decade of the input.
const DECADE_OFFSETS: [i32; 3] = [-1, 0, 1];

/// Returns `value` (mantissa × 10) scaled into the decade starting at
/// `10^exponent`.
fn scaled(value: u8, exponent: i32) -> f32 {
    f32::from(value) * powf(10.0, (exponent - 1) as f32)
}

/// Returns the E24 resistance closest to `resistance`.
///
/// The table is scanned in the decade of `resistance` and in the decades
/// directly below and above it, so values just under a power of ten can
/// round up into the next decade. On a tie the candidate from the lower
/// decade, then the lower table entry, wins.
///
/// `resistance` must be positive and finite or this function will panic
/// when running in debug mode.
///
/// # Examples
///
/// ```
/// use ohmmeter::e24::nearest;
///
/// assert_eq!(nearest(4630.0), 4700.0);
/// assert_eq!(nearest(98.0), 100.0);
/// ```
pub fn nearest(resistance: f32) -> f32 {
    debug_assert!(
        resistance.is_finite() && resistance > 0.0,
        "Resistance must be positive and finite"
    );

    let exponent = floorf(log10f(resistance)) as i32;

    let mut best = scaled(E24[0], exponent + DECADE_OFFSETS[0]);
    let mut best_error = fabsf(best - resistance);

    for offset in DECADE_OFFSETS {
        for value in E24 {
            let candidate = scaled(value, exponent + offset);
            let error = fabsf(candidate - resistance);

            if error < best_error {
                best_error = error;
                best = candidate;
            }
        }
    }

    log::debug!("{resistance} Ω matched to E24 {best} Ω");

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn table_is_ascending_within_one_decade() {
        assert!(E24.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(E24.first(), Some(&10));
        assert_eq!(E24.last(), Some(&91));
    }

    #[test]
    fn exact_values_match_themselves() {
        assert_eq!(nearest(4700.0), 4700.0);
        assert_eq!(nearest(10.0), 10.0);
        assert_eq!(nearest(910.0), 910.0);
        assert_eq!(nearest(1_000_000.0), 1_000_000.0);
    }

    #[test]
    fn rounds_to_closest_entry() {
        assert_eq!(nearest(4630.0), 4700.0);
        assert_eq!(nearest(4400.0), 4300.0);
        assert_eq!(nearest(9920.0), 10_000.0);
        assert_eq!(nearest(1140.0), 1100.0);
    }

    #[test]
    fn crosses_decade_boundary_upwards() {
        assert_eq!(nearest(98.0), 100.0);
        assert_eq!(nearest(9.8), 10.0);
    }

    #[test]
    fn stays_in_decade_below_boundary() {
        assert_eq!(nearest(92.0), 91.0);
        assert_eq!(nearest(101.0), 100.0);
    }

    #[test]
    fn tie_keeps_lower_candidate() {
        // 10.5 sits halfway between 10 and 11
        assert_eq!(nearest(10.5), 10.0);
    }

    #[test]
    fn sub_ohm_values() {
        assert_relative_eq!(nearest(0.5), 0.51, max_relative = 1e-5);
        assert_relative_eq!(nearest(0.22), 0.22, max_relative = 1e-5);
    }

    #[test]
    fn largest_finite_input_matches_a_finite_value() {
        // candidates above 3.6e38 overflow to infinity and are never picked
        let matched = nearest(f32::MAX);

        assert!(matched.is_finite());
        assert_relative_eq!(matched, 3.3e38, max_relative = 1e-5);
    }

    #[test]
    fn idempotent() {
        let mut x = 0.013_f32;

        while x < 5.0e7 {
            let matched = nearest(x);
            assert_eq!(nearest(matched), matched, "re-matching {x}");
            x *= 1.07;
        }
    }
}

//! Two-band-plus-multiplier resistor color codes.

use libm::{powf, roundf};
use rgb::RGB8;

/// Largest value of a significant digit.
pub const DIGIT_MAX: u8 = 9;

/// Smallest multiplier exponent with a band color (silver).
pub const MULTIPLIER_MIN: i8 = -2;

/// Largest multiplier exponent with a band color (white).
pub const MULTIPLIER_MAX: i8 = 9;

/// Factor applied to values below 1 Ω before decomposing them.
pub const SUB_OHM_SCALE: f32 = 1000.0;

/// Scales sub-ohm values up by [`SUB_OHM_SCALE`]; larger values pass
/// through unchanged.
pub fn prescale_sub_ohm(resistance: f32) -> f32 {
    if resistance < 1.0 {
        resistance * SUB_OHM_SCALE
    } else {
        resistance
    }
}

/// Saturates a significant digit to `0..=DIGIT_MAX`.
pub fn clamp_digit(digit: i32) -> u8 {
    digit.clamp(0, i32::from(DIGIT_MAX)) as u8
}

/// Saturates a multiplier exponent to `MULTIPLIER_MIN..=MULTIPLIER_MAX`.
pub fn clamp_multiplier(multiplier: i32) -> i8 {
    multiplier.clamp(i32::from(MULTIPLIER_MIN), i32::from(MULTIPLIER_MAX)) as i8
}

/// Two significant digits and a power-of-ten multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitCode {
    pub digit1: u8,
    pub digit2: u8,
    pub multiplier: i8,
}

impl DigitCode {
    const SMALLEST: DigitCode = DigitCode {
        digit1: 1,
        digit2: 0,
        multiplier: MULTIPLIER_MIN,
    };

    const LARGEST: DigitCode = DigitCode {
        digit1: DIGIT_MAX,
        digit2: DIGIT_MAX,
        multiplier: MULTIPLIER_MAX,
    };

    /// Reduces `resistance` to two rounded significant digits and a
    /// multiplier.
    ///
    /// Values below 1 Ω are first scaled by [`SUB_OHM_SCALE`]. Results
    /// that fall outside the band alphabet saturate to the nearest valid
    /// digit or multiplier.
    ///
    /// Zero, negative and NaN inputs saturate to the smallest code,
    /// `1 0 × 10^MULTIPLIER_MIN`. Infinite inputs saturate to the largest,
    /// `9 9 × 10^MULTIPLIER_MAX`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::DigitCode;
    ///
    /// let code = DigitCode::decompose(4700.0);
    ///
    /// assert_eq!((code.digit1, code.digit2, code.multiplier), (4, 7, 2));
    /// ```
    pub fn decompose(resistance: f32) -> Self {
        if resistance.is_nan() || resistance <= 0.0 {
            return Self::SMALLEST;
        }
        if resistance.is_infinite() {
            return Self::LARGEST;
        }

        let mut mantissa = prescale_sub_ohm(resistance);
        let mut multiplier: i32 = 0;

        while mantissa >= 100.0 {
            mantissa /= 10.0;
            multiplier += 1;
        }
        while mantissa < 10.0 {
            mantissa *= 10.0;
            multiplier -= 1;
        }

        let value = roundf(mantissa) as i32;

        Self {
            digit1: clamp_digit(value / 10),
            digit2: clamp_digit(value % 10),
            multiplier: clamp_multiplier(multiplier),
        }
    }

    /// Returns `(digit1 * 10 + digit2) * 10^multiplier`.
    pub fn value(&self) -> f32 {
        let mantissa = f32::from(self.digit1 * 10 + self.digit2);
        mantissa * powf(10.0, f32::from(self.multiplier))
    }

    /// Returns the band colors, in the order they sit on the resistor.
    pub fn bands(&self) -> [&'static ColorEntry; 3] {
        [
            ColorCodeTable::color_of(self.digit1),
            ColorCodeTable::color_of(self.digit2),
            ColorCodeTable::multiplier_band(self.multiplier),
        ]
    }

    /// Returns the short names of the three bands.
    pub fn band_names(&self) -> [&'static str; 3] {
        self.bands().map(|band| band.name)
    }
}

/// A band color and its four character label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorEntry {
    pub rgb: RGB8,
    pub name: &'static str,
}

const fn entry(r: u8, g: u8, b: u8, name: &'static str) -> ColorEntry {
    ColorEntry {
        rgb: RGB8 { r, g, b },
        name,
    }
}

/// Digit colors, indexed by digit value.
pub const DIGIT_COLORS: [ColorEntry; 10] = [
    entry(0, 0, 0, "blck"),
    entry(188, 32, 0, "brwn"),
    entry(188, 0, 0, "red "),
    entry(255, 200, 0, "orng"),
    entry(235, 230, 0, "yell"),
    entry(0, 188, 0, "gren"),
    entry(0, 0, 188, "blue"),
    entry(130, 0, 240, "viol"),
    entry(128, 128, 128, "grey"),
    entry(188, 188, 188, "whit"),
];

/// Multiplier band for 10^-1.
pub const GOLD: ColorEntry = entry(212, 175, 55, "gold");

/// Multiplier band for 10^-2.
pub const SILVER: ColorEntry = entry(96, 96, 96, "silv");

pub struct ColorCodeTable;

impl ColorCodeTable {
    /// Returns the color of `digit`. Digits above [`DIGIT_MAX`] saturate.
    pub fn color_of(digit: u8) -> &'static ColorEntry {
        &DIGIT_COLORS[usize::from(digit.min(DIGIT_MAX))]
    }

    /// Returns the color of a multiplier band. Exponents outside
    /// `MULTIPLIER_MIN..=MULTIPLIER_MAX` saturate.
    pub fn multiplier_band(multiplier: i8) -> &'static ColorEntry {
        match clamp_multiplier(i32::from(multiplier)) {
            -2 => &SILVER,
            -1 => &GOLD,
            exponent => Self::color_of(exponent as u8),
        }
    }
}

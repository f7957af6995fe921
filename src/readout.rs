//! Text handed to the character display.

use core::fmt::Write;
use heapless::String;
use libm::roundf;

/// Largest resistance the six digit readout can show (Ω).
pub const RESISTANCE_TEXT_MAX: u32 = 999_999;

/// Formats `resistance` as six zero-padded whole ohms, saturating at
/// [`RESISTANCE_TEXT_MAX`].
///
/// # Examples
///
/// ```
/// use ohmmeter::readout::resistance_text;
///
/// assert_eq!(resistance_text(4712.6), "004713");
/// ```
pub fn resistance_text(resistance: f32) -> String<6> {
    let ohms = roundf(resistance.max(0.0)) as u32;

    let mut text = String::new();
    // Six digits always fit once saturated.
    let _ = write!(text, "{:06}", ohms.min(RESISTANCE_TEXT_MAX));
    text
}

/// Formats `voltage` with three decimals, eg. `1.650`.
pub fn voltage_text(voltage: f32) -> String<8> {
    let mut text = String::new();
    if write!(text, "{:05.3}", voltage).is_err() {
        text.clear();
        let _ = text.push_str("-.---");
    }
    text
}

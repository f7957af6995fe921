//! Build-time constants for the reference board layout.

/// ADC input the divider midpoint is wired to.
pub const ADC_CHANNEL: u8 = 2;

/// ADC reference voltage (V).
pub const REFERENCE_VOLTAGE: f32 = 3.30;

/// Largest raw value the ADC can return (12 bits).
pub const ADC_RESOLUTION: u16 = 4095;

/// Known resistor on the supply side of the divider (Ω).
pub const KNOWN_RESISTOR: f32 = 9920.0;

/// Samples averaged per measurement.
pub const SAMPLE_COUNT: u16 = 1000;

/// Delay between consecutive samples (µs).
pub const SAMPLE_DELAY_US: u32 = 1000;

/// Pixels on the LED panel (5×5).
pub const LED_COUNT: usize = 25;

/// Bit rate of the single-wire LED protocol (Hz).
pub const LED_BIT_RATE_HZ: u32 = 800_000;

/// Idle time after a frame so the pixels latch it (µs). The protocol needs
/// at least 50 µs.
pub const LED_IDLE_GAP_US: u32 = 100;

/// Configuration for an [`Ohmmeter`](crate::Ohmmeter).
///
/// - `reference_voltage`: The voltage corresponding to `adc_resolution` (V)
/// - `adc_resolution`: The largest raw value the ADC returns (eg. for 12 bits, use `4095`)
/// - `known_resistor`: The reference resistor in the divider (Ω)
/// - `sample_count`: How many samples are averaged per measurement
/// - `sample_delay_us`: The delay between consecutive samples (µs)
///
/// # Examples
///
/// ```
/// use ohmmeter::Config;
///
/// let config = Config {
///     sample_count: 16,
///     sample_delay_us: 0,
///     ..Config::DEFAULT
/// };
/// assert_eq!(config.known_resistor, 9920.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub reference_voltage: f32,
    pub adc_resolution: u16,
    pub known_resistor: f32,
    pub sample_count: u16,
    pub sample_delay_us: u32,
}

impl Config {
    /// The reference board layout.
    pub const DEFAULT: Config = Config {
        reference_voltage: REFERENCE_VOLTAGE,
        adc_resolution: ADC_RESOLUTION,
        known_resistor: KNOWN_RESISTOR,
        sample_count: SAMPLE_COUNT,
        sample_delay_us: SAMPLE_DELAY_US,
    };

    /// Time a single measurement blocks for (µs).
    pub fn acquisition_window_us(&self) -> u64 {
        u64::from(self.sample_count) * u64::from(self.sample_delay_us)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Time to clock out `led_count` pixels plus the latch gap (µs),
/// saturating at `u32::MAX`.
pub fn frame_duration_us(led_count: usize, bit_rate_hz: u32, idle_gap_us: u32) -> u32 {
    let bits = (led_count as u64).saturating_mul(24);
    let transmit_us = bits.saturating_mul(1_000_000) / u64::from(bit_rate_hz.max(1));

    u32::try_from(transmit_us)
        .unwrap_or(u32::MAX)
        .saturating_add(idle_gap_us)
}

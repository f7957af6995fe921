use crate::color_code::DigitCode;
use crate::config::Config;
use crate::divider::{Divider, Measurement};
use crate::e24;
use crate::error::{Error, EstimateError};
use crate::led_matrix::LedMatrix;
use crate::readout::{resistance_text, voltage_text};
use crate::sampler::SampleAverager;
use core::convert::Infallible;
use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::serial::Write;
use heapless::String;

/// Everything one pass of the meter derives from a measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub measurement: Measurement,
    /// Closest E24 resistance (Ω).
    pub standard_value: f32,
    pub raw_code: DigitCode,
    pub standard_code: DigitCode,
}

impl Reading {
    /// Builds a reading from a measurement of a positive, finite
    /// resistance.
    pub fn from_measurement(measurement: Measurement) -> Result<Self, EstimateError> {
        let resistance = measurement.resistance;
        if !resistance.is_finite() {
            return Err(EstimateError::NotFinite { resistance });
        }
        if resistance <= 0.0 {
            return Err(EstimateError::ShortCircuit);
        }

        let standard_value = e24::nearest(measurement.resistance);

        Ok(Self {
            measurement,
            standard_value,
            raw_code: DigitCode::decompose(measurement.resistance),
            standard_code: DigitCode::decompose(standard_value),
        })
    }

    pub fn resistance_text(&self) -> String<6> {
        resistance_text(self.measurement.resistance)
    }

    pub fn voltage_text(&self) -> String<8> {
        voltage_text(self.measurement.voltage)
    }

    /// Band names of the measured resistance.
    pub fn raw_bands(&self) -> [&'static str; 3] {
        self.raw_code.band_names()
    }

    /// Band names of the closest E24 resistance.
    pub fn standard_bands(&self) -> [&'static str; 3] {
        self.standard_code.band_names()
    }
}

/// Measures the resistor on `Pin` and shows its color code.
#[derive(Debug)]
pub struct Ohmmeter<Pin> {
    averager: SampleAverager<Pin>,
    divider: Divider,
}

impl<Pin> Ohmmeter<Pin> {
    /// Returns a meter reading the divider midpoint from `pin`, using the
    /// provided `config`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::{Config, Ohmmeter};
    /// # use embedded_hal_mock::{
    /// #     adc::{Mock, MockChan2, Transaction},
    /// #     delay::MockNoop,
    /// # };
    /// #
    /// # let expectations: [Transaction<u16>; 2] =
    /// #     [Transaction::read(2, 1311), Transaction::read(2, 1311)];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan2 {};
    ///
    /// let config = Config {
    ///     sample_count: 2,
    ///     ..Config::DEFAULT
    /// };
    /// let mut meter = Ohmmeter::new(pin, config);
    ///
    /// let reading = meter.measure(&mut adc, &mut MockNoop::new()).unwrap();
    ///
    /// assert_eq!(reading.standard_value, 4700.0);
    /// assert_eq!(reading.standard_bands(), ["yell", "viol", "red "]);
    /// ```
    pub fn new<ADC>(pin: Pin, config: Config) -> Self
    where
        Pin: Channel<ADC>,
    {
        Self {
            averager: SampleAverager::new(pin, config.sample_count, config.sample_delay_us),
            divider: Divider::new(
                config.reference_voltage,
                config.adc_resolution,
                config.known_resistor,
            ),
        }
    }

    /// Destroys the meter and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.averager.free()
    }

    /// Takes an averaged measurement and derives its E24 match and color
    /// codes.
    pub fn measure<Adc, ADC, Word, Delay>(
        &mut self,
        adc: &mut Adc,
        delay: &mut Delay,
    ) -> Result<Reading, Error<Adc::Error, Infallible>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        Delay: DelayUs<u32>,
    {
        let raw = self.averager.average(adc, delay).map_err(Error::Adc)?;

        let reading = self
            .divider
            .estimate(raw)
            .and_then(Reading::from_measurement)
            .inspect_err(|error| log::warn!("{}", error))?;

        log::debug!(
            "{:.3} V, {:.1} Ω, E24 {} Ω, code {:?}",
            reading.measurement.voltage,
            reading.measurement.resistance,
            reading.standard_value,
            reading.standard_code
        );

        Ok(reading)
    }

    /// Runs one full pass: measures, paints the E24 bands onto `leds` and
    /// writes the frame. Pixels outside the band slots keep whatever was
    /// drawn on them before.
    ///
    /// When the measurement fails the LED matrix is left as it was.
    pub fn refresh<Adc, ADC, Word, Delay, Tx, const LEN: usize>(
        &mut self,
        adc: &mut Adc,
        delay: &mut Delay,
        leds: &mut LedMatrix<Tx, LEN>,
    ) -> Result<Reading, Error<Adc::Error, Tx::Error>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        Delay: DelayUs<u32>,
        Tx: Write<u8>,
    {
        let reading = self.measure(adc, delay).map_err(|error| match error {
            Error::Adc(error) => Error::Adc(error),
            Error::Estimate(error) => Error::Estimate(error),
            Error::Transmit(never) => match never {},
        })?;

        let [digit1, digit2, multiplier] = reading.standard_code.bands();
        leds.framebuffer_mut()
            .render_color_code_bands(digit1, digit2, multiplier);
        leds.write(delay).map_err(Error::Transmit)?;

        Ok(reading)
    }
}

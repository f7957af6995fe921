use crate::error::EstimateError;

/// One averaged reading of the divider midpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Midpoint voltage (V).
    pub voltage: f32,
    /// Estimated unknown resistance (Ω).
    pub resistance: f32,
}

/// A voltage divider with the known resistor on the supply side and the
/// unknown resistor to ground.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divider {
    reference_voltage: f32,
    adc_resolution: f32,
    known_resistor: f32,
}

impl Divider {
    /// Returns a divider for an ADC whose largest raw value
    /// `adc_resolution` corresponds to `reference_voltage` (V), measuring
    /// against `known_resistor` (Ω).
    pub fn new(reference_voltage: f32, adc_resolution: u16, known_resistor: f32) -> Self {
        debug_assert!(reference_voltage > 0.0, "Reference voltage must be positive");
        debug_assert!(adc_resolution > 0, "ADC resolution must be positive");
        debug_assert!(known_resistor > 0.0, "Known resistor must be positive");

        Self {
            reference_voltage,
            adc_resolution: f32::from(adc_resolution),
            known_resistor,
        }
    }

    pub fn reference_voltage(&self) -> f32 {
        self.reference_voltage
    }

    /// Converts an averaged raw sample to volts.
    pub fn voltage(&self, averaged_raw: f32) -> f32 {
        averaged_raw / self.adc_resolution * self.reference_voltage
    }

    /// Estimates the unknown resistance from an averaged raw sample.
    ///
    /// Returns [`EstimateError::DivisionSingularity`] when the midpoint sits
    /// at (or above) the reference voltage, where the divider cannot be
    /// inverted. A midpoint of 0 V yields `Ok` with a resistance of 0 Ω.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::Divider;
    ///
    /// let divider = Divider::new(3.3, 4095, 10_000.0);
    /// let measurement = divider.estimate(2047.5).unwrap();
    ///
    /// assert!((measurement.resistance - 10_000.0).abs() < 0.5);
    /// assert!(divider.estimate(4095.0).is_err());
    /// ```
    pub fn estimate(&self, averaged_raw: f32) -> Result<Measurement, EstimateError> {
        let voltage = self.voltage(averaged_raw);
        let headroom = self.reference_voltage - voltage;

        if headroom.is_nan() || headroom <= 0.0 {
            return Err(EstimateError::DivisionSingularity {
                voltage,
                reference: self.reference_voltage,
            });
        }

        Ok(Measurement {
            voltage,
            resistance: voltage * self.known_resistor / headroom,
        })
    }
}

use thiserror::Error;

/// Reasons a measurement cannot be turned into a resistance.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EstimateError {
    #[error("divider midpoint {voltage:.3} V is not below the {reference:.3} V reference")]
    DivisionSingularity { voltage: f32, reference: f32 },

    #[error("divider midpoint is at 0 V, the unknown resistor is shorted")]
    ShortCircuit,

    #[error("estimated resistance {resistance} Ω is not a finite value")]
    NotFinite { resistance: f32 },
}

/// Errors raised by one pass of the [`Ohmmeter`](crate::Ohmmeter) pipeline.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error<AdcError, TxError> {
    #[error("ADC read failed: {0:?}")]
    Adc(AdcError),

    #[error(transparent)]
    Estimate(#[from] EstimateError),

    #[error("LED matrix transmission failed: {0:?}")]
    Transmit(TxError),
}

//! Measures an unknown resistor through a voltage divider, matches it to
//! the closest E24 value and shows its color code on an addressable LED
//! panel.
//!
//! Hardware is reached through `embedded-hal` traits: an ADC
//! [`OneShot`](embedded_hal::adc::OneShot) channel for the divider, a
//! [`serial::Write<u8>`](embedded_hal::serial::Write) word sink for the LED
//! data line and a [`DelayUs`](embedded_hal::blocking::delay::DelayUs)
//! timer.
//!
//! ```
//! use ohmmeter::{Config, LedMatrix, Ohmmeter, config::LED_IDLE_GAP_US};
//! # use embedded_hal_mock::{adc, delay::MockNoop, serial};
//! #
//! # let samples: Vec<adc::Transaction<u16>> =
//! #     (0..8).map(|_| adc::Transaction::read(2, 1311)).collect();
//! # let mut adc = adc::Mock::new(&samples);
//! # let pin = adc::MockChan2 {};
//! # // GRB words: dark, red, violet, yellow, then the rest of the panel dark
//! # let frame: [u8; 12] = [0, 0, 0, 0, 188, 0, 0, 130, 240, 230, 235, 0];
//! # let mut words: Vec<serial::Transaction<u8>> = frame
//! #     .into_iter()
//! #     .chain([0; 63])
//! #     .map(serial::Transaction::write)
//! #     .collect();
//! # words.push(serial::Transaction::flush());
//! # let tx = serial::Mock::new(&words);
//! # let mut delay = MockNoop::new();
//!
//! let config = Config {
//!     sample_count: 8,
//!     ..Config::DEFAULT
//! };
//! let mut meter = Ohmmeter::new(pin, config);
//! let mut leds: LedMatrix<_, 25> = LedMatrix::new(tx, LED_IDLE_GAP_US);
//!
//! let reading = meter.refresh(&mut adc, &mut delay, &mut leds).unwrap();
//!
//! assert_eq!(reading.resistance_text(), "004671");
//! assert_eq!(reading.standard_bands(), ["yell", "viol", "red "]);
//! ```

#![cfg_attr(not(test), no_std)]

pub mod color_code;
pub mod config;
mod divider;
pub mod e24;
mod error;
pub mod framebuffer;
mod led_matrix;
mod meter;
pub mod readout;
mod sampler;

pub use color_code::{ColorCodeTable, ColorEntry, DigitCode};
pub use config::Config;
pub use divider::{Divider, Measurement};
pub use error::{Error, EstimateError};
pub use framebuffer::Framebuffer;
pub use led_matrix::{ChannelOrder, LedMatrix};
pub use meter::{Ohmmeter, Reading};
pub use sampler::SampleAverager;

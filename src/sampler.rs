use embedded_hal::adc::{Channel, OneShot};
use embedded_hal::blocking::delay::DelayUs;

type Error<Adc, ADC, Word, Pin> = <Adc as OneShot<ADC, Word, Pin>>::Error;

/// Averages consecutive samples of a single ADC channel.
#[derive(Debug)]
pub struct SampleAverager<Pin> {
    pin: Pin,
    sample_count: u16,
    sample_delay_us: u32,
}

impl<Pin> SampleAverager<Pin> {
    /// Returns an averager taking `sample_count` samples from `pin`,
    /// `sample_delay_us` apart.
    ///
    /// `sample_count` must be at least 1 or this function will panic
    /// when running in debug mode.
    pub fn new<ADC>(pin: Pin, sample_count: u16, sample_delay_us: u32) -> Self
    where
        Pin: Channel<ADC>,
    {
        debug_assert!(sample_count > 0, "At least one sample must be taken");

        Self {
            pin,
            sample_count: sample_count.max(1),
            sample_delay_us,
        }
    }

    /// Destroys the averager and returns the `Pin`.
    pub fn free(self) -> Pin {
        self.pin
    }

    pub fn sample_count(&self) -> u16 {
        self.sample_count
    }

    /// Returns the arithmetic mean of `sample_count` raw samples.
    ///
    /// Blocks for the whole acquisition window, waiting `sample_delay_us`
    /// after every sample.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::SampleAverager;
    /// # use embedded_hal_mock::{
    /// #     adc::{Mock, MockChan2, Transaction},
    /// #     delay::MockNoop,
    /// # };
    /// #
    /// # let expectations: [Transaction<u16>; 4] = [
    /// #     Transaction::read(2, 100),
    /// #     Transaction::read(2, 200),
    /// #     Transaction::read(2, 300),
    /// #     Transaction::read(2, 400),
    /// # ];
    /// # let mut adc = Mock::new(&expectations);
    /// # let pin = MockChan2 {};
    ///
    /// let mut averager = SampleAverager::new(pin, 4, 1000);
    ///
    /// assert_eq!(averager.average(&mut adc, &mut MockNoop::new()), Ok(250.0));
    /// ```
    pub fn average<Adc, ADC, Word, Delay>(
        &mut self,
        adc: &mut Adc,
        delay: &mut Delay,
    ) -> Result<f32, Error<Adc, ADC, Word, Pin>>
    where
        Word: Copy + Into<u32>,
        Pin: Channel<ADC>,
        Adc: OneShot<ADC, Word, Pin>,
        Delay: DelayUs<u32>,
    {
        let mut sum: u64 = 0;

        for _ in 0..self.sample_count {
            let sample: Word = nb::block!(adc.read(&mut self.pin))?;
            sum += u64::from(sample.into());
            delay.delay_us(self.sample_delay_us);
        }

        Ok(sum as f32 / f32::from(self.sample_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ADC_CHANNEL;
    use embedded_hal_mock::{
        adc::{Mock, MockChan2, Transaction},
        common::Generic,
        delay::MockNoop,
        MockError,
    };
    use std::io::ErrorKind;

    #[derive(Default)]
    struct CountingDelay {
        calls: u32,
        total_us: u32,
    }

    impl DelayUs<u32> for CountingDelay {
        fn delay_us(&mut self, us: u32) {
            self.calls += 1;
            self.total_us += us;
        }
    }

    fn averager(sample_count: u16) -> SampleAverager<MockChan2> {
        SampleAverager::new(MockChan2 {}, sample_count, 1000)
    }

    fn adc(samples: &[u16]) -> Generic<Transaction<u16>> {
        let expectations: Vec<_> = samples
            .iter()
            .map(|sample| Transaction::read(ADC_CHANNEL, *sample))
            .collect();
        Mock::new(&expectations)
    }

    #[test]
    fn constant_input_averages_to_itself() {
        for count in [1u16, 2, 7, 32] {
            let samples = vec![1234u16; count as usize];
            let mut adc = adc(&samples);

            let average = averager(count).average(&mut adc, &mut MockNoop::new());

            assert_eq!(average, Ok(1234.0));
            adc.done();
        }
    }

    #[test]
    fn arithmetic_mean() {
        let mut adc = adc(&[0, 4095, 1000, 3000]);

        let average = averager(4).average(&mut adc, &mut MockNoop::new());

        assert_eq!(average, Ok(2023.75));
        adc.done();
    }

    #[test]
    fn waits_between_samples() {
        let mut adc = adc(&[10, 20, 30]);
        let mut delay = CountingDelay::default();

        averager(3).average(&mut adc, &mut delay).unwrap();

        assert_eq!(delay.calls, 3);
        assert_eq!(delay.total_us, 3000);
        adc.done();
    }

    #[test]
    fn error() {
        let expectations: [Transaction<u16>; 1] =
            [Transaction::read(ADC_CHANNEL, 0).with_error(MockError::Io(ErrorKind::InvalidData))];
        let mut adc = Mock::new(&expectations);

        assert!(averager(1).average(&mut adc, &mut MockNoop::new()).is_err());
    }

    #[test]
    #[should_panic]
    fn panics_without_samples() {
        averager(0);
    }

    #[test]
    fn free_returns_pin() {
        let _pin: MockChan2 = averager(1).free();
    }
}

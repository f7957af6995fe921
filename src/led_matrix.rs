use crate::config::{frame_duration_us, LED_BIT_RATE_HZ};
use crate::framebuffer::Framebuffer;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::serial::Write;
use rgb::RGB8;

/// Order in which a pixel's channels are clocked out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelOrder {
    /// Green, red, blue. What WS2812 pixels expect.
    #[default]
    Grb,
    Rgb,
}

impl ChannelOrder {
    pub fn words(self, color: RGB8) -> [u8; 3] {
        match self {
            ChannelOrder::Grb => [color.g, color.r, color.b],
            ChannelOrder::Rgb => [color.r, color.g, color.b],
        }
    }
}

/// An addressable LED panel behind a word-oriented transmitter, such as the
/// TX FIFO of a state machine that generates the single-wire waveform.
///
/// The driver owns both the transmitter and the [`Framebuffer`]; drawing
/// happens through [`framebuffer_mut`](LedMatrix::framebuffer_mut) and
/// reaches the pixels on the next [`write`](LedMatrix::write).
#[derive(Debug)]
pub struct LedMatrix<Tx, const LEN: usize> {
    tx: Tx,
    framebuffer: Framebuffer<LEN>,
    order: ChannelOrder,
    idle_gap_us: u32,
}

impl<Tx, const LEN: usize> LedMatrix<Tx, LEN>
where
    Tx: Write<u8>,
{
    /// Returns a driver with a dark framebuffer, waiting `idle_gap_us`
    /// after every frame so the pixels latch it.
    pub fn new(tx: Tx, idle_gap_us: u32) -> Self {
        Self::with_order(tx, ChannelOrder::default(), idle_gap_us)
    }

    pub fn with_order(tx: Tx, order: ChannelOrder, idle_gap_us: u32) -> Self {
        Self {
            tx,
            framebuffer: Framebuffer::new(),
            order,
            idle_gap_us,
        }
    }

    /// Destroys the driver and returns the transmitter.
    pub fn free(self) -> Tx {
        self.tx
    }

    pub fn framebuffer(&self) -> &Framebuffer<LEN> {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<LEN> {
        &mut self.framebuffer
    }

    /// Time one [`write`](LedMatrix::write) blocks for at
    /// [`LED_BIT_RATE_HZ`] (µs).
    pub fn frame_duration_us(&self) -> u32 {
        frame_duration_us(LEN, LED_BIT_RATE_HZ, self.idle_gap_us)
    }

    /// Clocks the framebuffer out, one word per channel in pixel index
    /// order, then holds the line idle for the latch gap.
    ///
    /// Blocks until the last word is flushed and the gap has elapsed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::LedMatrix;
    /// # use embedded_hal_mock::{
    /// #     delay::MockNoop,
    /// #     serial::{Mock, Transaction},
    /// # };
    /// use rgb::RGB8;
    /// #
    /// # let mut expectations: Vec<Transaction<u8>> = [0, 10, 0]
    /// #     .into_iter()
    /// #     .chain([0; 9])
    /// #     .map(Transaction::write)
    /// #     .collect();
    /// # expectations.push(Transaction::flush());
    /// # let tx = Mock::new(&expectations);
    ///
    /// let mut leds: LedMatrix<_, 4> = LedMatrix::new(tx, 100);
    /// leds.framebuffer_mut().set(0, RGB8 { r: 10, g: 0, b: 0 });
    ///
    /// // Sends G, R, B for each of the 4 pixels, then waits 100 µs
    /// leds.write(&mut MockNoop::new()).unwrap();
    /// # leds.free().done();
    /// ```
    pub fn write<Delay>(&mut self, delay: &mut Delay) -> Result<(), Tx::Error>
    where
        Delay: DelayUs<u32>,
    {
        for pixel in self.framebuffer.pixels() {
            for word in self.order.words(*pixel) {
                nb::block!(self.tx.write(word))?;
            }
        }
        nb::block!(self.tx.flush())?;

        delay.delay_us(self.idle_gap_us);
        log::trace!("wrote {} LEDs in {} µs", LEN, self.frame_duration_us());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LED_IDLE_GAP_US;
    use embedded_hal_mock::{
        delay::MockNoop,
        serial::{Mock, Transaction},
        MockError,
    };
    use std::io::ErrorKind;

    const RED: RGB8 = RGB8 { r: 200, g: 0, b: 0 };
    const TEAL: RGB8 = RGB8 { r: 0, g: 20, b: 30 };

    #[derive(Default)]
    struct CountingDelay {
        total_us: u32,
    }

    impl DelayUs<u32> for CountingDelay {
        fn delay_us(&mut self, us: u32) {
            self.total_us += us;
        }
    }

    struct BrokenTx;

    impl Write<u8> for BrokenTx {
        type Error = MockError;

        fn write(&mut self, _word: u8) -> nb::Result<(), Self::Error> {
            Err(nb::Error::Other(MockError::Io(ErrorKind::BrokenPipe)))
        }

        fn flush(&mut self) -> nb::Result<(), Self::Error> {
            Ok(())
        }
    }

    fn pixel(words: [u8; 3]) -> Vec<Transaction<u8>> {
        words.into_iter().map(Transaction::write).collect()
    }

    fn frame(pixels: &[[u8; 3]]) -> Vec<Transaction<u8>> {
        let mut expectations: Vec<_> = pixels.iter().copied().flat_map(pixel).collect();
        expectations.push(Transaction::flush());
        expectations
    }

    #[test]
    fn channel_orders() {
        assert_eq!(ChannelOrder::Grb.words(TEAL), [20, 0, 30]);
        assert_eq!(ChannelOrder::Rgb.words(TEAL), [0, 20, 30]);
        assert_eq!(ChannelOrder::default(), ChannelOrder::Grb);
    }

    #[test]
    fn writes_green_red_blue_in_index_order() {
        let expectations = frame(&[[0, 200, 0], [20, 0, 30], [0; 3], [0; 3]]);

        let mut leds: LedMatrix<_, 4> = LedMatrix::new(Mock::new(&expectations), LED_IDLE_GAP_US);
        leds.framebuffer_mut().set(0, RED);
        leds.framebuffer_mut().set(1, TEAL);

        leds.write(&mut MockNoop::new()).unwrap();
        leds.free().done();
    }

    #[test]
    fn rgb_order() {
        let expectations = frame(&[[200, 0, 0], [0; 3], [0; 3], [0; 3]]);

        let mut leds: LedMatrix<_, 4> =
            LedMatrix::with_order(Mock::new(&expectations), ChannelOrder::Rgb, LED_IDLE_GAP_US);
        leds.framebuffer_mut().set(0, RED);

        leds.write(&mut MockNoop::new()).unwrap();
        leds.free().done();
    }

    #[test]
    fn waits_for_latch() {
        let expectations = frame(&[[0; 3]; 4]);

        let mut leds: LedMatrix<_, 4> = LedMatrix::new(Mock::new(&expectations), LED_IDLE_GAP_US);
        let mut delay = CountingDelay::default();

        leds.write(&mut delay).unwrap();

        assert!(delay.total_us >= 50);
        assert_eq!(delay.total_us, LED_IDLE_GAP_US);
        leds.free().done();
    }

    #[test]
    fn frame_duration_covers_pixels_and_latch() {
        let leds: LedMatrix<_, 25> = LedMatrix::new(BrokenTx, LED_IDLE_GAP_US);

        // 25 pixels * 24 bits at 800 kHz plus the latch gap
        assert_eq!(leds.frame_duration_us(), 750 + LED_IDLE_GAP_US);
    }

    #[test]
    fn error() {
        let mut leds: LedMatrix<_, 4> = LedMatrix::new(BrokenTx, LED_IDLE_GAP_US);

        assert_eq!(
            leds.write(&mut MockNoop::new()),
            Err(MockError::Io(ErrorKind::BrokenPipe))
        );
    }
}

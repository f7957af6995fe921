use crate::color_code::ColorEntry;
use rgb::RGB8;

/// Physical slots of the three color bands: first digit, second digit,
/// multiplier. These are the middle pixels of the first wired row, which is
/// logical row 4 on a 5×5 panel.
pub const BAND_SLOTS: [usize; 3] = [3, 2, 1];

const LEAD: RGB8 = RGB8 { r: 24, g: 24, b: 24 };
const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

/// Static decoration for a 5×5 panel: the two resistor leads either side
/// of the bands, in logical row-major order.
pub const RESISTOR_LEADS: [[RGB8; 5]; 5] = [
    [OFF; 5],
    [OFF; 5],
    [OFF; 5],
    [OFF; 5],
    [LEAD, OFF, OFF, OFF, LEAD],
];

const fn side_of(len: usize) -> usize {
    let mut side = 0;
    while (side + 1) * (side + 1) <= len {
        side += 1;
    }
    side
}

/// Pixel colors of a square LED panel wired as a serpentine strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer<const LEN: usize> {
    pixels: [RGB8; LEN],
}

impl<const LEN: usize> Framebuffer<LEN> {
    /// Pixels along one edge of the panel.
    pub const SIDE: usize = side_of(LEN);

    /// Returns a framebuffer with every pixel off.
    ///
    /// `LEN` must be a perfect square or this function will panic when
    /// running in debug mode.
    pub fn new() -> Self {
        debug_assert!(
            Self::SIDE * Self::SIDE == LEN,
            "The panel must be square"
        );

        Self {
            pixels: [RGB8::default(); LEN],
        }
    }

    pub fn pixels(&self) -> &[RGB8; LEN] {
        &self.pixels
    }

    pub fn get(&self, index: usize) -> Option<RGB8> {
        self.pixels.get(index).copied()
    }

    /// Sets the pixel at physical `index`. Writes past the end of the strip
    /// are ignored.
    pub fn set(&mut self, index: usize, color: RGB8) {
        match self.pixels.get_mut(index) {
            Some(pixel) => *pixel = color,
            None => log::warn!("ignoring write to LED {} of {}", index, LEN),
        }
    }

    /// Turns every pixel off.
    pub fn clear(&mut self) {
        self.pixels = [RGB8::default(); LEN];
    }

    /// Returns the physical index of the pixel at logical `row` and `col`,
    /// or `None` if the coordinate is off the panel.
    ///
    /// Row 0 is wired last. Even rows run right to left and odd rows left
    /// to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use ohmmeter::Framebuffer;
    ///
    /// assert_eq!(Framebuffer::<25>::logical_index(0, 0), Some(24));
    /// assert_eq!(Framebuffer::<25>::logical_index(1, 0), Some(15));
    /// assert_eq!(Framebuffer::<25>::logical_index(4, 4), Some(0));
    /// assert_eq!(Framebuffer::<25>::logical_index(5, 0), None);
    /// ```
    pub fn logical_index(row: usize, col: usize) -> Option<usize> {
        let side = Self::SIDE;
        if row >= side || col >= side {
            return None;
        }

        let base = (side - 1 - row) * side;
        let offset = if row % 2 == 0 { side - 1 - col } else { col };

        Some(base + offset)
    }

    /// Sets the pixel at logical `row` and `col`. Writes off the panel are
    /// ignored.
    pub fn set_logical(&mut self, row: usize, col: usize, color: RGB8) {
        match Self::logical_index(row, col) {
            Some(index) => self.set(index, color),
            None => log::warn!("ignoring write to LED ({row}, {col})"),
        }
    }

    /// Fills the panel from a grid of colors in logical row-major order.
    /// Cells that fall off the panel are ignored.
    pub fn draw<const ROWS: usize, const COLS: usize>(&mut self, grid: &[[RGB8; COLS]; ROWS]) {
        for (row, colors) in grid.iter().enumerate() {
            for (col, color) in colors.iter().enumerate() {
                self.set_logical(row, col, *color);
            }
        }
    }

    /// Writes the three band colors into [`BAND_SLOTS`], leaving every
    /// other pixel as it was.
    pub fn render_color_code_bands(
        &mut self,
        digit1: &ColorEntry,
        digit2: &ColorEntry,
        multiplier: &ColorEntry,
    ) {
        for (slot, band) in BAND_SLOTS.into_iter().zip([digit1, digit2, multiplier]) {
            self.set(slot, band.rgb);
        }
    }
}

impl<const LEN: usize> Default for Framebuffer<LEN> {
    fn default() -> Self {
        Self::new()
    }
}

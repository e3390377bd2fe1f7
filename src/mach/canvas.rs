use crate::error;
use crate::lang::{Color, Error};
use rand::seq::SliceRandom;
use rand::Rng;

type Result<T> = std::result::Result<T, Error>;

/// ## Pixel grid
///
/// Pixels are stored bottom row first: offset `y * width + x` with
/// row 0 at the bottom, so moving up adds `width`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// All white.
    pub fn new(width: usize, height: usize) -> Result<Canvas> {
        Canvas::filled(width, height, Color::White)
    }

    pub fn filled(width: usize, height: usize, color: Color) -> Result<Canvas> {
        let len = Canvas::pixel_count(width, height)?;
        Canvas::from_pixels(width, height, vec![color; len])
    }

    fn pixel_count(width: usize, height: usize) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(error!(InvalidCanvas; "canvas is empty"));
        }
        width
            .checked_mul(height)
            .ok_or_else(|| error!(InvalidCanvas; format!("{}x{} is too large", width, height)))
    }

    /// `pixels` is bottom row first.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Result<Canvas> {
        let len = Canvas::pixel_count(width, height)?;
        if pixels.len() != len {
            return Err(error!(InvalidCanvas; format!(
                "expected {} pixels for {}x{}, found {}",
                len,
                width,
                height,
                pixels.len()
            )));
        }
        Ok(Canvas {
            width,
            height,
            pixels,
        })
    }

    /// Every pixel drawn from `palette`; white if the palette is empty.
    pub fn random<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        rng: &mut R,
        palette: &[Color],
    ) -> Result<Canvas> {
        let pixels = (0..Canvas::pixel_count(width, height)?)
            .map(|_| palette.choose(rng).copied().unwrap_or_default())
            .collect();
        Canvas::from_pixels(width, height, pixels)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// `y` counts rows up from the bottom.
    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Option<Color> {
        if x < self.width && y < self.height {
            let offset = y * self.width + x;
            Some(std::mem::replace(&mut self.pixels[offset], color))
        } else {
            None
        }
    }

    pub(crate) fn at(&self, offset: usize) -> Color {
        self.pixels[offset]
    }

    pub(crate) fn put(&mut self, offset: usize, color: Color) {
        self.pixels[offset] = color;
    }
}

impl std::str::FromStr for Canvas {
    type Err = Error;

    /// Rows of pixel letters, top row first.
    fn from_str(s: &str) -> Result<Canvas> {
        let mut rows: Vec<Vec<Color>> = vec![];
        for (line, text) in s.lines().enumerate() {
            let text = text.trim();
            if text.is_empty() {
                continue;
            }
            let row = text
                .chars()
                .map(|ch| {
                    Color::from_char(ch).ok_or_else(|| {
                        error!(InvalidCanvas, line; format!("'{}' is not a valid pixel", ch))
                    })
                })
                .collect::<Result<Vec<Color>>>()?;
            if let Some(first) = rows.first() {
                if first.len() != row.len() {
                    return Err(error!(InvalidCanvas, line; format!(
                        "row is {} pixels wide, expected {}",
                        row.len(),
                        first.len()
                    )));
                }
            }
            rows.push(row);
        }
        let width = rows.first().map_or(0, Vec::len);
        let height = rows.len();
        let pixels = rows.into_iter().rev().flatten().collect();
        Canvas::from_pixels(width, height, pixels)
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for row in self.pixels.chunks(self.width).rev() {
            let s: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{}", s)?;
        }
        Ok(())
    }
}

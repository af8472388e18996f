use image::{ImageFormat, ImageResult, RgbImage};

use super::{Rgb, Surface};

/// An in-memory RGB image.
pub struct Raster {
    image: RgbImage,
    background: Rgb,
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        image::Rgb([r, g, b])
    }
}

impl Raster {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Raster {
            image: RgbImage::from_pixel(width, height, background.into()),
            background,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at the given pixel, or `None` outside the image.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image
            .get_pixel_checked(x as u32, y as u32)
            .map(|&image::Rgb([r, g, b])| Rgb(r, g, b))
    }

    /// Fills the half-open box `[x0, x1) x [y0, y1)`, clipped to the image.
    fn fill_box(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width() as i32);
        let y1 = y1.min(self.height() as i32);
        let color = color.into();
        for y in y0..y1 {
            for x in x0..x1 {
                self.image.put_pixel(x as u32, y as u32, color);
            }
        }
    }

    /// Saves the image, picking the format from the file extension.
    pub fn save(&self, path: &std::path::Path) -> ImageResult<()> {
        self.image.save(path)
    }

    /// Encodes the image as PNG into `writer`.
    pub fn write_png<W: std::io::Write + std::io::Seek>(&self, writer: &mut W) -> ImageResult<()> {
        self.image.write_to(writer, ImageFormat::Png)
    }
}

impl Surface for Raster {
    fn clear(&mut self) {
        let background = self.background.into();
        self.image.pixels_mut().for_each(|p| *p = background);
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: u32, height: u32, color: Rgb) {
        self.fill_box(x, y, x + width as i32, y + height as i32, color);
    }

    fn stroke_rect(&mut self, x: i32, y: i32, width: u32, height: u32, line_width: u32, color: Rgb) {
        // The line straddles the outline: `outset` pixels outside, `inset` inside
        let outset = (line_width / 2) as i32;
        let inset = line_width as i32 - outset;
        let (x1, y1) = (x + width as i32, y + height as i32);

        // Top and bottom bands span the full outer width, left and right bands fill in between
        self.fill_box(x - outset, y - outset, x1 + outset, y + inset, color);
        self.fill_box(x - outset, y1 - inset, x1 + outset, y1 + outset, color);
        self.fill_box(x - outset, y + inset, x + inset, y1 - inset, color);
        self.fill_box(x1 - inset, y + inset, x1 + outset, y1 - inset, color);
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32), line_width: u32, color: Rgb) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs());
        let lw = line_width.max(1) as i32;
        let lo = lw / 2;

        // Stamp a square brush at every step along the dominant axis
        for step in 0..=steps {
            let (x, y) = if steps == 0 {
                from
            } else {
                (
                    from.0 + (dx * step + steps / 2 * dx.signum()) / steps,
                    from.1 + (dy * step + steps / 2 * dy.signum()) / steps,
                )
            };
            self.fill_box(x - lo, y - lo, x - lo + lw, y - lo + lw, color);
        }
    }
}

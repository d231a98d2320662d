use std::{error::Error, fs, path::Path};

use image::{RgbImage, imageops};
use show_image::{BoxImage, ImageInfo};

/// RGBA color, 0-255 per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn gray(value: u8) -> Self {
        Self::rgb(value, value, value)
    }
}

/// The pixel buffer every rasterizer writes into.
///
/// The origin is the bottom-left corner, so rows are flipped when the picture
/// leaves the program (file or window).
pub struct Picture {
    pub xres: usize,
    pub yres: usize,
    pub background: Color,
    pub data: Vec<Color>,
}

impl Picture {
    pub fn new(xres: usize, yres: usize, background: Color) -> Self {
        Self {
            xres,
            yres,
            background,
            data: vec![background; xres * yres],
        }
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.xres || y as usize >= self.yres {
            return None;
        }

        Some(y as usize * self.xres + x as usize)
    }

    /// Sets one pixel. Coordinates outside the picture are dropped and reported with `false`.
    pub fn plot(&mut self, x: isize, y: isize, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.data[i] = color;
                true
            }
            None => false,
        }
    }

    #[cfg(test)]
    pub fn get(&self, x: isize, y: isize) -> Option<Color> {
        self.index(x, y).map(|i| self.data[i])
    }

    pub fn clear(&mut self) {
        self.data.fill(self.background);
    }

    /// Number of pixels that differ from the background.
    pub fn drawn_pixels(&self) -> usize {
        self.data.iter().filter(|&&c| c != self.background).count()
    }

    fn to_rgb_image(&self) -> RgbImage {
        let mut image = RgbImage::from_fn(self.xres as u32, self.yres as u32, |x, y| {
            let c = self.data[y as usize * self.xres + x as usize];
            image::Rgb([c.r, c.g, c.b])
        });

        // row 0 is the bottom of the picture but the top of the image
        imageops::flip_vertical_in_place(&mut image);
        image
    }

    /// Writes the picture to disk. The encoder is picked from the extension (bmp or png).
    pub fn save_as_file(&self, file_path: &str) -> Result<(), Box<dyn Error>> {
        let path = Path::new(file_path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        self.to_rgb_image()
            .save(path)
            .map_err(|e| format!("Couldn't save '{}': {}", file_path, e))?;

        log::debug!("saved {}x{} picture to {}", self.xres, self.yres, file_path);

        Ok(())
    }

    pub fn display(&self) -> Result<(), Box<dyn Error>> {
        let image = self.to_rgb_image();
        let view = BoxImage::new(
            ImageInfo::rgb8(self.xres as u32, self.yres as u32),
            image.into_raw().into_boxed_slice(),
        );

        let window = show_image::create_window("tiny-rasterizer", Default::default())?;
        window.set_image("picture", view)?;
        window.wait_until_destroyed()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_drops_out_of_range_pixels() {
        let mut picture = Picture::new(4, 3, Color::gray(0));
        assert!(picture.plot(3, 2, Color::gray(9)));
        assert!(!picture.plot(4, 0, Color::gray(9)));
        assert!(!picture.plot(0, 3, Color::gray(9)));
        assert!(!picture.plot(-1, 1, Color::gray(9)));
        assert_eq!(picture.drawn_pixels(), 1);
        assert_eq!(picture.get(3, 2), Some(Color::gray(9)));
        assert_eq!(picture.get(-1, 0), None);
    }

    #[test]
    fn clear_restores_background() {
        let mut picture = Picture::new(2, 2, Color::rgb(1, 2, 3));
        picture.plot(0, 0, Color::gray(200));
        picture.clear();
        assert_eq!(picture.drawn_pixels(), 0);
    }

    #[test]
    fn saved_file_is_flipped() {
        let mut picture = Picture::new(3, 2, Color::gray(0));
        picture.plot(0, 0, Color::rgb(255, 0, 0));

        let path = std::env::temp_dir().join("tiny_rasterizer_picture_flip.bmp");
        picture.save_as_file(path.to_str().unwrap()).unwrap();

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.get_pixel(0, 1).0, [255, 0, 0]);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0]);
        std::fs::remove_file(path).ok();
    }
}

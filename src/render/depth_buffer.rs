use std::error::Error;

use crate::{
    constants::{DEFAULT_DEPTH_CLEAR, DEPTH_GRAY_CEILING},
    picture::{Color, Picture},
};

/// Per-pixel depth that persists across every triangle of one render pass.
///
/// Larger values are nearer: a fragment only lands when its depth is strictly
/// greater than the stored one.
pub struct DepthBuffer {
    pub width: usize,
    pub height: usize,
    pub clear_value: f32,
    values: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_clear_value(width, height, DEFAULT_DEPTH_CLEAR)
    }

    pub fn with_clear_value(width: usize, height: usize, clear_value: f32) -> Self {
        Self {
            width,
            height,
            clear_value,
            values: vec![clear_value; width * height],
        }
    }

    fn index(&self, x: isize, y: isize) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }

        Some(y as usize * self.width + x as usize)
    }

    pub fn get(&self, x: isize, y: isize) -> Option<f32> {
        self.index(x, y).map(|i| self.values[i])
    }

    /// Stores `z` if it beats the current value. Ties and out-of-range pixels lose.
    pub fn test_and_set(&mut self, x: isize, y: isize, z: f32) -> bool {
        let Some(i) = self.index(x, y) else {
            return false;
        };

        if z > self.values[i] {
            self.values[i] = z;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.values.fill(self.clear_value);
    }

    pub fn min_max(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::MAX, f32::MIN), |(min, max), &v| (min.min(v), max.max(v)))
    }
}

/// Maps the stored depths linearly onto grays in [0, 230].
///
/// A buffer holding one single value has no range to spread, so it turns into
/// uniform mid-gray.
pub fn depth_to_picture(depth_buffer: &DepthBuffer) -> Picture {
    let mut picture = Picture::new(depth_buffer.width, depth_buffer.height, Color::gray(0));
    let (min, max) = depth_buffer.min_max();
    let range = max - min;

    for y in 0..depth_buffer.height as isize {
        for x in 0..depth_buffer.width as isize {
            let Some(z) = depth_buffer.get(x, y) else { continue };

            let value = if range > 0.0 {
                ((z - min) / range * DEPTH_GRAY_CEILING) as u8
            } else {
                (DEPTH_GRAY_CEILING / 2.0) as u8
            };

            picture.plot(x, y, Color::gray(value));
        }
    }

    picture
}

pub fn render_depth_buffer(depth_buffer: &DepthBuffer, file_path: &str) -> Result<(), Box<dyn Error>> {
    let (min, max) = depth_buffer.min_max();
    log::debug!("depth range [{}, {}] -> {}", min, max, file_path);

    depth_to_picture(depth_buffer).save_as_file(file_path)
}

// Software surface writing straight into an RGBA8 buffer laid out like canvas
// ImageData (row-major, non-premultiplied). Handy for rendering frames
// without a browser.

use crate::color::Color;
use crate::surface::Surface;
use std::convert::Infallible;

pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixel_data: Vec<u8>,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer {
            width,
            height,
            pixel_data: vec![0x00; (width * height * 4) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_data(&self) -> &[u8] {
        &self.pixel_data
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<[u8; 4]> {
        self.get_pixel_index(x, y).map(|idx| {
            [
                self.pixel_data[idx],
                self.pixel_data[idx + 1],
                self.pixel_data[idx + 2],
                self.pixel_data[idx + 3],
            ]
        })
    }

    fn get_pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some(((y * self.width as i32 + x) * 4) as usize)
        } else {
            None
        }
    }

    // Source-over compositing of `color` at `opacity` onto one pixel
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, opacity: f64) {
        let idx = match self.get_pixel_index(x, y) {
            Some(idx) => idx,
            None => return,
        };
        let src_a = opacity.max(0.0).min(1.0) * (color.a as f64 / 255.0);
        let dst_a = self.pixel_data[idx + 3] as f64 / 255.0;
        let out_a = src_a + dst_a * (1.0 - src_a);
        if out_a <= 0.0 {
            return;
        }
        let src = [color.r, color.g, color.b];
        for (channel, &src_c) in src.iter().enumerate() {
            let dst_c = self.pixel_data[idx + channel] as f64;
            let out_c = (src_c as f64 * src_a + dst_c * dst_a * (1.0 - src_a)) / out_a;
            self.pixel_data[idx + channel] = out_c.round() as u8;
        }
        self.pixel_data[idx + 3] = (out_a * 255.0).round() as u8;
    }
}

impl Surface for PixelBuffer {
    type Error = Infallible;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), Infallible> {
        let cols = (width.max(0.0).ceil() as u32).min(self.width) as usize;
        let rows = (height.max(0.0).ceil() as u32).min(self.height) as usize;
        let stride = self.width as usize * 4;
        for row in self.pixel_data.chunks_mut(stride).take(rows) {
            for byte in &mut row[..cols * 4] {
                *byte = 0x00;
            }
        }
        Ok(())
    }

    fn fill_circle(
        &mut self,
        center: glm::DVec2,
        radius: f64,
        color: Color,
        opacity: f64,
    ) -> Result<(), Infallible> {
        let min_x = (center.x - radius).floor() as i32;
        let max_x = (center.x + radius).ceil() as i32;
        let min_y = (center.y - radius).floor() as i32;
        let max_y = (center.y + radius).ceil() as i32;
        for pixel_y in min_y..=max_y {
            for pixel_x in min_x..=max_x {
                let pixel_center = glm::vec2(pixel_x as f64 + 0.5, pixel_y as f64 + 0.5);
                if glm::distance(&pixel_center, &center) <= radius {
                    self.blend_pixel(pixel_x, pixel_y, color, opacity);
                }
            }
        }
        Ok(())
    }

    // Lines are rasterised one pixel wide; thinner strokes are drawn with
    // proportionally less alpha, the way canvas antialiasing would spread them.
    fn stroke_line(
        &mut self,
        from: glm::DVec2,
        to: glm::DVec2,
        color: Color,
        opacity: f64,
        line_width: f64,
    ) -> Result<(), Infallible> {
        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as u32;
        let coverage = line_width.max(0.0).min(1.0);
        let mut last = None;
        for step in 0..=steps {
            let point = from + delta * (step as f64 / steps as f64);
            let pixel = (point.x.floor() as i32, point.y.floor() as i32);
            // Don't blend the same pixel twice in a row
            if last == Some(pixel) {
                continue;
            }
            last = Some(pixel);
            self.blend_pixel(pixel.0, pixel.1, color, opacity * coverage);
        }
        Ok(())
    }
}

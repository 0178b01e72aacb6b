use crate::foundation::{
    core::{BYTES_PER_PIXEL, Canvas, Rgba8},
    error::{BackgroundError, BackgroundResult},
};

/// Row-major RGBA8 pixel buffer, tightly packed, straight alpha.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    canvas: Canvas,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a fully transparent surface.
    pub fn new(canvas: Canvas) -> BackgroundResult<Self> {
        if canvas.width == 0 || canvas.height == 0 {
            return Err(BackgroundError::validation(format!(
                "surface must be non-empty, got {}x{}",
                canvas.width, canvas.height
            )));
        }
        let len = canvas.byte_len()?;
        Ok(Self {
            canvas,
            data: vec![0u8; len],
        })
    }

    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    pub fn width(&self) -> u32 {
        self.canvas.width
    }

    pub fn height(&self) -> u32 {
        self.canvas.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA bytes at `(x, y)`, or `None` outside the canvas.
    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let idx = self.index(x, y)?;
        let px = &self.data[idx..idx + BYTES_PER_PIXEL];
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Scanlines top to bottom, `width * 4` bytes each.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.stride())
    }

    pub(crate) fn stride(&self) -> usize {
        (self.canvas.width as usize) * BYTES_PER_PIXEL
    }

    pub(crate) fn index(&self, x: i64, y: i64) -> Option<usize> {
        if !self.canvas.contains(x, y) {
            return None;
        }
        Some(((y as usize) * (self.canvas.width as usize) + (x as usize)) * BYTES_PER_PIXEL)
    }

    pub(crate) fn pixel_mut(&mut self, x: i64, y: i64) -> Option<&mut [u8]> {
        let idx = self.index(x, y)?;
        Some(&mut self.data[idx..idx + BYTES_PER_PIXEL])
    }

    /// Overwrite without blending. Only used for the opaque base layer, where
    /// blend and overwrite coincide.
    pub(crate) fn put_opaque(&mut self, x: i64, y: i64, color: Rgba8) {
        if let Some(px) = self.pixel_mut(x, y) {
            px.copy_from_slice(&color.with_alpha(255).to_array());
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;

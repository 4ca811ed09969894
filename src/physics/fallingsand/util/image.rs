//! Image utilities
//! Keeps us from having to use specific bevy types in the physics engine,
//! the conversion into a bevy image happens only at the very end.

use bevy::render::{
    render_resource::{Extent3d, TextureDimension, TextureFormat},
    texture::Image,
};

/// Representing a raw RGBA image
/// Game engine agnostic, full ownership, no lifetimes, not a component
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawImage {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<u8>,
}

impl RawImage {
    /// Get the rgba value of the pixel at x, y
    /// Returns None if out of bounds
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * 4;
        let px = self.pixels.get(start..start + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Convert to a bevy image
    /// Load this into an asset server to get a texture like the following
    /// ```ignore
    /// let image: RawImage = RawImage::default();
    /// let image_handle: Handle<Image> = images.add(image.to_bevy_image());
    /// ```
    pub fn to_bevy_image(self) -> Image {
        let size = Extent3d {
            width: self.width as u32,
            height: self.height as u32,
            depth_or_array_layers: 1,
        };

        Image::new(
            size,
            TextureDimension::D2,
            self.pixels,
            TextureFormat::Rgba8UnormSrgb,
        )
    }
}

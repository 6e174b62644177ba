use image::{GrayImage, RgbImage};
use serde::{Deserialize, Serialize};

use crate::common::Rgb;

// Solid two-color fill mask
//------------------------------------------------------------------------------

/// Maps the grayscale ink canvas onto two colors. Ink level 255 is pure
/// background, 0 is pure foreground and anything in between interpolates,
/// which keeps the anti-aliased module edges smooth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillMask {
    pub back: Rgb,
    pub front: Rgb,
}

impl Default for FillMask {
    fn default() -> Self {
        Self { back: Rgb([1, 68, 78]), front: Rgb([190, 232, 32]) }
    }
}

impl FillMask {
    pub fn new(back: Rgb, front: Rgb) -> Self {
        Self { back, front }
    }

    pub fn color_at(&self, ink: u8) -> image::Rgb<u8> {
        let (l, norm) = (ink as u32, 255 - ink as u32);
        let mix = |b: u8, f: u8| ((b as u32 * l + f as u32 * norm) / 255) as u8;
        let (Rgb([br, bg, bb]), Rgb([fr, fg, fb])) = (self.back, self.front);
        image::Rgb([mix(br, fr), mix(bg, fg), mix(bb, fb)])
    }

    pub fn apply(&self, canvas: &GrayImage) -> RgbImage {
        let lut: Vec<image::Rgb<u8>> = (0..=255u8).map(|l| self.color_at(l)).collect();
        RgbImage::from_fn(canvas.width(), canvas.height(), |x, y| {
            lut[canvas.get_pixel(x, y)[0] as usize]
        })
    }
}

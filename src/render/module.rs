use image::{
    imageops::{self, FilterType},
    GrayImage,
};
use imageproc::drawing::draw_filled_circle_mut;

use super::{shapes, BG, INK};
use crate::common::{Color, PixelBox, QRError, QRResult, MAX_IMAGE_SIDE};

const ANTIALIASING_FACTOR: u32 = 4;

pub trait ModuleDrawer {
    fn draw_module(&self, canvas: &mut GrayImage, bx: PixelBox, clr: Color);
}

// Square modules
//------------------------------------------------------------------------------

#[derive(Debug, Default, Clone, Copy)]
pub struct SquareModuleDrawer;

impl ModuleDrawer for SquareModuleDrawer {
    fn draw_module(&self, canvas: &mut GrayImage, bx: PixelBox, clr: Color) {
        if clr == Color::Dark {
            shapes::fill_rounded_rect(canvas, bx, 0, shapes::Corners::ALL, INK);
        }
    }
}

// Circle modules
//------------------------------------------------------------------------------

/// Filled circle per dark module. The circle is drawn once at 4x and
/// downsampled, then stamped into every dark module box.
#[derive(Debug, Clone)]
pub struct CircleModuleDrawer {
    stamp: GrayImage,
}

impl CircleModuleDrawer {
    pub fn new(box_sz: u32) -> QRResult<Self> {
        let big_sz = Some(box_sz)
            .filter(|b| (1..=MAX_IMAGE_SIDE).contains(b))
            .and_then(|b| b.checked_mul(ANTIALIASING_FACTOR))
            .ok_or(QRError::InvalidBoxSize(box_sz))?;
        let mut big = GrayImage::from_pixel(big_sz, big_sz, BG);
        let half = (big_sz / 2) as i32;
        draw_filled_circle_mut(&mut big, (half, half), half, INK);

        let stamp = imageops::resize(&big, box_sz, box_sz, FilterType::Lanczos3);
        Ok(Self { stamp })
    }

    pub fn stamp(&self) -> &GrayImage {
        &self.stamp
    }
}

impl ModuleDrawer for CircleModuleDrawer {
    fn draw_module(&self, canvas: &mut GrayImage, bx: PixelBox, clr: Color) {
        debug_assert!(
            bx.width() == self.stamp.width(),
            "Module box {} doesn't match stamp {}",
            bx.width(),
            self.stamp.width()
        );
        if clr == Color::Dark {
            imageops::replace(canvas, &self.stamp, bx.x0 as i64, bx.y0 as i64);
        }
    }
}

use image::GrayImage;
use log::debug;

use super::{
    shapes::{fill_rounded_rect, stroke_rounded_rect, Corners},
    BG, INK,
};
use crate::common::{eye_geometry, Corner, EyeGeometry, PixelBox};

/// Draws the three finder eyes in place of the standard finder squares.
pub trait EyeDrawer {
    fn draw_eye(&self, canvas: &mut GrayImage, corner: Corner, bx: PixelBox);

    fn draw_eyeball(&self, canvas: &mut GrayImage, corner: Corner, bx: PixelBox);

    fn draw(&self, canvas: &mut GrayImage, n: usize, box_sz: u32, border: u32) {
        let eyes = Corner::ALL.map(|corner| eye_geometry(corner, n, box_sz, border));
        for EyeGeometry { corner, eye, eyeball } in eyes {
            debug!("Drawing {corner:?} eye at {eye:?}, eyeball at {eyeball:?}");
            self.draw_eye(canvas, corner, eye);
            self.draw_eyeball(canvas, corner, eyeball);
        }
    }
}

// Rounded eyes with hamburger eyeballs
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
pub struct HamburgerEyeDrawer {
    box_sz: u32,
}

impl HamburgerEyeDrawer {
    pub fn new(box_sz: u32) -> Self {
        Self { box_sz }
    }

    // Corner facing the symbol center stays square
    fn corners(corner: Corner) -> Corners {
        match corner {
            Corner::NorthWest => Corners::all_but_bottom_right(),
            Corner::NorthEast => Corners::all_but_bottom_left(),
            Corner::SouthWest => Corners::all_but_top_right(),
        }
    }

    /// Bar height and gap for an eyeball of `height` pixels. The pixel
    /// constants are tuned for a 40px box and scale with it.
    pub fn bar_metrics(&self, height: u32) -> (u32, u32) {
        let pad = 15 * self.box_sz / 40;
        let bar = (height / 5 + pad).max(1);
        let gap = bar.saturating_sub(30 * self.box_sz / 40);
        (bar, gap)
    }

    pub fn bars(&self, bx: PixelBox) -> [PixelBox; 3] {
        let (bar, gap) = self.bar_metrics(bx.height() - 1);
        let at = |i: u32| {
            let y0 = bx.y0 + i * (bar + gap);
            PixelBox::new(bx.x0, y0, bx.x1, y0 + bar)
        };
        [at(0), at(1), at(2)]
    }
}

impl EyeDrawer for HamburgerEyeDrawer {
    fn draw_eye(&self, canvas: &mut GrayImage, corner: Corner, bx: PixelBox) {
        stroke_rounded_rect(
            canvas,
            bx,
            self.box_sz * 2,
            self.box_sz,
            Self::corners(corner),
            INK,
            BG,
        );
    }

    fn draw_eyeball(&self, canvas: &mut GrayImage, _corner: Corner, bx: PixelBox) {
        for bar in self.bars(bx) {
            if bar.y0 >= canvas.height() {
                break;
            }
            let bar = PixelBox::new(bar.x0, bar.y0, bar.x1, bar.y1.min(canvas.height() - 1));
            fill_rounded_rect(canvas, bar, self.box_sz, Corners::ALL, INK);
        }
    }
}

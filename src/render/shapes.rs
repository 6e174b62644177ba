use image::{GrayImage, Luma};
use imageproc::{
    drawing::{draw_filled_circle_mut, draw_filled_rect_mut},
    rect::Rect,
};

use crate::common::PixelBox;

// Which corners are rounded, clockwise from the top-left
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corners {
    pub top_left: bool,
    pub top_right: bool,
    pub bottom_right: bool,
    pub bottom_left: bool,
}

impl Corners {
    pub const ALL: Corners =
        Corners { top_left: true, top_right: true, bottom_right: true, bottom_left: true };

    pub fn all_but_bottom_right() -> Self {
        Self { bottom_right: false, ..Self::ALL }
    }

    pub fn all_but_bottom_left() -> Self {
        Self { bottom_left: false, ..Self::ALL }
    }

    pub fn all_but_top_right() -> Self {
        Self { top_right: false, ..Self::ALL }
    }
}

// Rounded rectangles
//------------------------------------------------------------------------------

fn fill_rect(canvas: &mut GrayImage, x0: u32, y0: u32, x1: u32, y1: u32, ink: Luma<u8>) {
    if x1 < x0 || y1 < y0 {
        return;
    }
    let rect = Rect::at(x0 as i32, y0 as i32).of_size(x1 - x0 + 1, y1 - y0 + 1);
    draw_filled_rect_mut(canvas, rect, ink);
}

/// Radius clamped so opposite corner arcs never overlap.
pub fn clamp_radius(bx: PixelBox, radius: u32) -> u32 {
    radius.min((bx.width().min(bx.height()) - 1) / 2)
}

pub fn fill_rounded_rect(
    canvas: &mut GrayImage,
    bx: PixelBox,
    radius: u32,
    corners: Corners,
    ink: Luma<u8>,
) {
    let r = clamp_radius(bx, radius);
    let PixelBox { x0, y0, x1, y1 } = bx;
    if r == 0 {
        fill_rect(canvas, x0, y0, x1, y1, ink);
        return;
    }

    // Cross of two bands, corners left open
    fill_rect(canvas, x0, y0 + r, x1, y1 - r, ink);
    fill_rect(canvas, x0 + r, y0, x1 - r, y1, ink);

    let quadrants = [
        (corners.top_left, x0, y0, x0 + r, y0 + r),
        (corners.top_right, x1 - r, y0, x1, y0 + r),
        (corners.bottom_right, x1 - r, y1 - r, x1, y1),
        (corners.bottom_left, x0, y1 - r, x0 + r, y1),
    ];
    for (rounded, qx0, qy0, qx1, qy1) in quadrants {
        if !rounded {
            fill_rect(canvas, qx0, qy0, qx1, qy1, ink);
            continue;
        }
        let cx = if qx0 == x0 { x0 + r } else { x1 - r };
        let cy = if qy0 == y0 { y0 + r } else { y1 - r };
        draw_filled_circle_mut(canvas, (cx as i32, cy as i32), r as i32, ink);
    }
}

/// Outline of `stroke` pixels drawn inside `bx`. The interior is reset to
/// `bg`, so the caller owns every pixel in the box.
pub fn stroke_rounded_rect(
    canvas: &mut GrayImage,
    bx: PixelBox,
    radius: u32,
    stroke: u32,
    corners: Corners,
    ink: Luma<u8>,
    bg: Luma<u8>,
) {
    fill_rounded_rect(canvas, bx, radius, corners, ink);
    if bx.width() <= 2 * stroke || bx.height() <= 2 * stroke {
        return;
    }
    let inner = PixelBox::new(bx.x0 + stroke, bx.y0 + stroke, bx.x1 - stroke, bx.y1 - stroke);
    let inner_radius = clamp_radius(bx, radius).saturating_sub(stroke);
    fill_rounded_rect(canvas, inner, inner_radius, corners, bg);
}

use super::error::{QRError, QRResult};

// Image side
//------------------------------------------------------------------------------

/// Largest canvas side accepted, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 65535;

/// Side of the square image for `n` modules: `(n + 2 * border) * box_sz`.
/// Blames the border when the module count alone is out of range.
pub fn image_side(n: usize, box_sz: u32, border: u32) -> QRResult<u32> {
    if box_sz == 0 || box_sz > MAX_IMAGE_SIDE {
        return Err(QRError::InvalidBoxSize(box_sz));
    }
    let modules = u32::try_from(n)
        .ok()
        .zip(border.checked_mul(2))
        .and_then(|(n, quiet)| n.checked_add(quiet))
        .filter(|&m| m <= MAX_IMAGE_SIDE)
        .ok_or(QRError::InvalidBorder(border))?;
    modules
        .checked_mul(box_sz)
        .filter(|&side| side <= MAX_IMAGE_SIDE)
        .ok_or(QRError::InvalidBoxSize(box_sz))
}


// Pixel box
//------------------------------------------------------------------------------

/// Inclusive pixel bounds of a region on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl PixelBox {
    pub fn new(x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        debug_assert!(x0 <= x1 && y0 <= y1, "Pixel box corners are swapped");
        Self { x0, y0, x1, y1 }
    }

    /// Spans from the top-left of `self` to the bottom-right of `other`.
    pub fn span(self, other: PixelBox) -> Self {
        Self::new(self.x0, self.y0, other.x1, other.y1)
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0 + 1
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0 + 1
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        (self.x0..=self.x1).contains(&x) && (self.y0..=self.y1).contains(&y)
    }
}

pub fn pixel_box(r: usize, c: usize, box_sz: u32, border: u32) -> PixelBox {
    let x0 = (c as u32 + border) * box_sz;
    let y0 = (r as u32 + border) * box_sz;
    PixelBox::new(x0, y0, x0 + box_sz - 1, y0 + box_sz - 1)
}


// Eye corners
//------------------------------------------------------------------------------

pub const EYE_SPAN: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    NorthWest,
    NorthEast,
    SouthWest,
}

impl Corner {
    pub const ALL: [Corner; 3] = [Corner::NorthWest, Corner::NorthEast, Corner::SouthWest];

    // Top-left module (row, col) of the 7x7 eye for an n-module symbol
    fn origin(self, n: usize) -> (usize, usize) {
        debug_assert!(n >= EYE_SPAN, "Symbol narrower than an eye");
        match self {
            Self::NorthWest => (0, 0),
            Self::NorthEast => (0, n - EYE_SPAN),
            Self::SouthWest => (n - EYE_SPAN, 0),
        }
    }

    /// First and last module of the eye, as (row, col) pairs.
    pub fn eye_modules(self, n: usize) -> ((usize, usize), (usize, usize)) {
        let (r, c) = self.origin(n);
        ((r, c), (r + EYE_SPAN - 1, c + EYE_SPAN - 1))
    }

    /// First and last module of the 3x3 eyeball centered in the eye.
    pub fn eyeball_modules(self, n: usize) -> ((usize, usize), (usize, usize)) {
        let (r, c) = self.origin(n);
        ((r + 2, c + 2), (r + 4, c + 4))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EyeGeometry {
    pub corner: Corner,
    pub eye: PixelBox,
    pub eyeball: PixelBox,
}

pub fn eye_geometry(corner: Corner, n: usize, box_sz: u32, border: u32) -> EyeGeometry {
    let to_box = |((r0, c0), (r1, c1)): ((usize, usize), (usize, usize))| {
        pixel_box(r0, c0, box_sz, border).span(pixel_box(r1, c1, box_sz, border))
    };
    EyeGeometry {
        corner,
        eye: to_box(corner.eye_modules(n)),
        eyeball: to_box(corner.eyeball_modules(n)),
    }
}

pub fn is_eye(r: usize, c: usize, n: usize) -> bool {
    let near = |i: usize| i < EYE_SPAN;
    let far = |i: usize| i + EYE_SPAN >= n;
    (near(r) && near(c)) || (near(r) && far(c)) || (far(r) && near(c))
}

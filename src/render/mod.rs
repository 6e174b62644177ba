mod eye;
mod mask;
mod module;
mod shapes;

pub use eye::{EyeDrawer, HamburgerEyeDrawer};
pub use mask::FillMask;
pub use module::{CircleModuleDrawer, ModuleDrawer, SquareModuleDrawer};
pub use shapes::{fill_rounded_rect, stroke_rounded_rect, Corners};

use std::str::FromStr;

use image::{GrayImage, Luma, RgbImage};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    builder::{Module, Symbol},
    common::{image_side, pixel_box, QRError, QRResult},
};

// Ink levels on the grayscale canvas, mapped to colors by the fill mask
pub(crate) const INK: Luma<u8> = Luma([0]);
pub(crate) const BG: Luma<u8> = Luma([255]);

// Styles
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleStyle {
    #[default]
    Circle,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EyeStyle {
    #[default]
    Hamburger,
    Standard,
}

impl FromStr for ModuleStyle {
    type Err = QRError;
    fn from_str(s: &str) -> QRResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Self::Circle),
            "square" => Ok(Self::Square),
            _ => Err(QRError::InvalidStyle(s.to_string())),
        }
    }
}

impl FromStr for EyeStyle {
    type Err = QRError;
    fn from_str(s: &str) -> QRResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hamburger" => Ok(Self::Hamburger),
            "standard" => Ok(Self::Standard),
            _ => Err(QRError::InvalidStyle(s.to_string())),
        }
    }
}

// Renderer
//------------------------------------------------------------------------------

pub struct Renderer {
    box_sz: u32,
    border: u32,
    module_drawer: Box<dyn ModuleDrawer>,
    eye_drawer: Option<Box<dyn EyeDrawer>>,
    mask: FillMask,
}

impl Renderer {
    pub fn new(
        box_sz: u32,
        border: u32,
        module_style: ModuleStyle,
        eye_style: EyeStyle,
        mask: FillMask,
    ) -> QRResult<Self> {
        let module_drawer: Box<dyn ModuleDrawer> = match module_style {
            ModuleStyle::Circle => Box::new(CircleModuleDrawer::new(box_sz)?),
            ModuleStyle::Square => Box::new(SquareModuleDrawer),
        };
        let eye_drawer: Option<Box<dyn EyeDrawer>> = match eye_style {
            EyeStyle::Hamburger => Some(Box::new(HamburgerEyeDrawer::new(box_sz))),
            EyeStyle::Standard => None,
        };
        Ok(Self { box_sz, border, module_drawer, eye_drawer, mask })
    }

    pub fn with_drawers(
        box_sz: u32,
        border: u32,
        module_drawer: Box<dyn ModuleDrawer>,
        eye_drawer: Option<Box<dyn EyeDrawer>>,
        mask: FillMask,
    ) -> Self {
        Self { box_sz, border, module_drawer, eye_drawer, mask }
    }

    pub fn image_size(&self, w: usize) -> QRResult<u32> {
        image_side(w, self.box_sz, self.border)
    }

    /// Grayscale ink canvas before the fill mask is applied.
    pub fn render_canvas(&self, qr: &Symbol) -> QRResult<GrayImage> {
        let w = qr.width();
        let sz = self.image_size(w)?;
        let mut canvas = GrayImage::from_pixel(sz, sz, BG);

        debug!("Drawing {w}x{w} modules on a {sz}px canvas");
        for (r, c, module) in qr.modules() {
            if matches!(module, Module::Finder(_)) && self.eye_drawer.is_some() {
                continue;
            }
            let bx = pixel_box(r, c, self.box_sz, self.border);
            self.module_drawer.draw_module(&mut canvas, bx, *module);
        }

        if let Some(eye_drawer) = &self.eye_drawer {
            debug!("Drawing custom eyes");
            eye_drawer.draw(&mut canvas, w, self.box_sz, self.border);
        }

        Ok(canvas)
    }

    pub fn render(&self, qr: &Symbol) -> QRResult<RgbImage> {
        let canvas = self.render_canvas(qr)?;
        debug!("Applying fill mask {} on {}", self.mask.front, self.mask.back);
        Ok(self.mask.apply(&canvas))
    }
}

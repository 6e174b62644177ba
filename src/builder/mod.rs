mod symbol;

pub use symbol::{Module, Symbol};

use image::RgbImage;
use log::debug;
use qrcode::{types::QrError, QrCode};

use crate::{
    common::{image_side, ECLevel, QRError, QRResult, Version},
    render::{EyeStyle, FillMask, ModuleStyle, Renderer},
};

pub const DEFAULT_BOX_SIZE: u32 = 40;
pub const DEFAULT_BORDER: u32 = 4;

// Everything about a symbol except its data
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub version: Version,
    pub ec_level: ECLevel,
    pub box_size: u32,
    pub border: u32,
    pub palette: FillMask,
    pub module_style: ModuleStyle,
    pub eye_style: EyeStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            version: Version::default(),
            ec_level: ECLevel::default(),
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            palette: FillMask::default(),
            module_style: ModuleStyle::default(),
            eye_style: EyeStyle::default(),
        }
    }
}

impl RenderOptions {
    /// Fails with `InvalidBoxSize` or `InvalidBorder` when the image for
    /// `version` would be empty or wider than 65535px.
    pub fn renderer(&self) -> QRResult<Renderer> {
        image_side(self.version.width(), self.box_size, self.border)?;
        Renderer::new(self.box_size, self.border, self.module_style, self.eye_style, self.palette)
    }
}

// Builder
//------------------------------------------------------------------------------

pub struct QRBuilder<'a> {
    data: &'a [u8],
    opts: RenderOptions,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, opts: RenderOptions::default() }
    }

    pub fn options(&mut self, opts: RenderOptions) -> &mut Self {
        self.opts = opts;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.opts.version = version;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.opts.ec_level = ec_level;
        self
    }

    pub fn box_size(&mut self, box_size: u32) -> &mut Self {
        self.opts.box_size = box_size;
        self
    }

    pub fn border(&mut self, border: u32) -> &mut Self {
        self.opts.border = border;
        self
    }

    pub fn palette(&mut self, palette: FillMask) -> &mut Self {
        self.opts.palette = palette;
        self
    }

    pub fn module_style(&mut self, module_style: ModuleStyle) -> &mut Self {
        self.opts.module_style = module_style;
        self
    }

    pub fn eye_style(&mut self, eye_style: EyeStyle) -> &mut Self {
        self.opts.eye_style = eye_style;
        self
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Version: {}, Ec level: {:?}, Box: {}px, Border: {}, Modules: {:?}, Eyes: {:?} }}",
            self.opts.version,
            self.opts.ec_level,
            self.opts.box_size,
            self.opts.border,
            self.opts.module_style,
            self.opts.eye_style
        )
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<Symbol> {
        debug!("Generating QR {}", self.metadata());
        if self.data.is_empty() {
            return Err(QRError::EmptyData);
        }

        let RenderOptions { version, ec_level, .. } = self.opts;
        let code = QrCode::with_version(self.data, version.into(), ec_level.into()).map_err(
            |e| match e {
                QrError::DataTooLong => QRError::DataTooLong { version: *version },
                e => QRError::Encode(e),
            },
        )?;
        let qr = Symbol::from_code(&code, version, ec_level);

        debug!(
            "Encoded {} bytes into {w}x{w} modules, {} dark",
            self.data.len(),
            qr.count_dark_modules(),
            w = qr.width()
        );
        Ok(qr)
    }

    pub fn render(&self) -> QRResult<RgbImage> {
        let renderer = self.opts.renderer()?;
        let qr = self.build()?;
        renderer.render(&qr)
    }
}

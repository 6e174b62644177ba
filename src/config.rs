use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    builder::{RenderOptions, DEFAULT_BORDER, DEFAULT_BOX_SIZE},
    common::{ECLevel, QRResult, Rgb, Version},
    render::{EyeStyle, FillMask, ModuleStyle},
};

/// Defaults for a generation run, loaded from a JSON file. Every field is
/// optional; command line flags take precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub host: Option<String>,
    pub market: Option<String>,
    pub tables: Option<String>,
    pub out_dir: Option<PathBuf>,
    pub front_color: Rgb,
    pub back_color: Rgb,
    pub box_size: u32,
    pub border: u32,
    pub version: Version,
    pub ec_level: ECLevel,
    pub module_style: ModuleStyle,
    pub eye_style: EyeStyle,
}

impl Default for Settings {
    fn default() -> Self {
        let palette = FillMask::default();
        Self {
            host: None,
            market: None,
            tables: None,
            out_dir: None,
            front_color: palette.front,
            back_color: palette.back,
            box_size: DEFAULT_BOX_SIZE,
            border: DEFAULT_BORDER,
            version: Version::default(),
            ec_level: ECLevel::default(),
            module_style: ModuleStyle::default(),
            eye_style: EyeStyle::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> QRResult<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> QRResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            version: self.version,
            ec_level: self.ec_level,
            box_size: self.box_size,
            border: self.border,
            palette: FillMask::new(self.back_color, self.front_color),
            module_style: self.module_style,
            eye_style: self.eye_style,
        }
    }
}

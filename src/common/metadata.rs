use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::{QRError, QRResult};

// Version
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Version(u8);

impl Version {
    pub const MAX: u8 = 40;

    pub fn new(ver: u8) -> QRResult<Self> {
        match ver {
            1..=Self::MAX => Ok(Self(ver)),
            _ => Err(QRError::InvalidVersion(ver.to_string())),
        }
    }

    pub fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }
}

impl Default for Version {
    fn default() -> Self {
        Self(5)
    }
}

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<u8> for Version {
    type Error = QRError;
    fn try_from(ver: u8) -> QRResult<Self> {
        Self::new(ver)
    }
}

impl From<Version> for u8 {
    fn from(ver: Version) -> Self {
        ver.0
    }
}

impl From<Version> for qrcode::Version {
    fn from(ver: Version) -> Self {
        qrcode::Version::Normal(ver.0 as i16)
    }
}

impl FromStr for Version {
    type Err = QRError;
    fn from_str(s: &str) -> QRResult<Self> {
        let invalid = || QRError::InvalidVersion(s.trim().to_string());
        let ver = s.trim().parse::<u8>().map_err(|_| invalid())?;
        Self::new(ver).map_err(|_| invalid())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}


// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ECLevel {
    #[default]
    L,
    M,
    Q,
    H,
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;
    fn from_str(s: &str) -> QRResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel(s.to_string())),
        }
    }
}

// Color
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Self::Dark => dark,
            Self::Light => light,
        }
    }
}

impl From<qrcode::Color> for Color {
    fn from(clr: qrcode::Color) -> Self {
        match clr {
            qrcode::Color::Dark => Self::Dark,
            qrcode::Color::Light => Self::Light,
        }
    }
}

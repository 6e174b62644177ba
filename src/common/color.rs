use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::{QRError, QRResult};

// Rgb
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    pub fn to_hex(self) -> String {
        let [r, g, b] = self.0;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<Rgb> for image::Rgb<u8> {
    fn from(clr: Rgb) -> Self {
        image::Rgb(clr.0)
    }
}

impl FromStr for Rgb {
    type Err = QRError;

    fn from_str(s: &str) -> QRResult<Self> {
        let invalid = || QRError::InvalidColor(s.to_string());
        let t = s.trim();

        if t.contains(',') {
            let parts = t
                .split(',')
                .map(|p| p.trim().parse::<u8>().map_err(|_| invalid()))
                .collect::<QRResult<Vec<_>>>()?;
            return match parts[..] {
                [r, g, b] => Ok(Self([r, g, b])),
                _ => Err(invalid()),
            };
        }

        let hex = t.strip_prefix('#').unwrap_or(t);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }
}

impl TryFrom<String> for Rgb {
    type Error = QRError;
    fn try_from(s: String) -> QRResult<Self> {
        s.parse()
    }
}

impl From<Rgb> for String {
    fn from(clr: Rgb) -> Self {
        clr.to_hex()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod rgb_tests {
    use test_case::test_case;

    use super::Rgb;

    #[test_case("#bee820", [190, 232, 32])]
    #[test_case("01444E", [1, 68, 78])]
    #[test_case("190, 232, 32", [190, 232, 32])]
    #[test_case(" 0,0,0 ", [0, 0, 0])]
    fn test_parse(s: &str, exp: [u8; 3]) {
        assert_eq!(s.parse::<Rgb>().unwrap(), Rgb(exp));
    }

    #[test_case("")]
    #[test_case("#12345")]
    #[test_case("#gg0000")]
    #[test_case("256,0,0")]
    #[test_case("1,2")]
    #[test_case("#ффф")]
    #[test_case("#+f+f+f")]
    #[test_case("+fffff")]
    fn test_parse_invalid(s: &str) {
        assert!(s.parse::<Rgb>().is_err());
    }

    #[test]
    fn test_hex() {
        assert_eq!(Rgb([190, 232, 32]).to_string(), "#bee820");
    }
}

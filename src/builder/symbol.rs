use std::ops::Deref;

use qrcode::QrCode;

use crate::common::{is_eye, Color, ECLevel, Version};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Finder(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Finder(c) => c,
            Module::Data(c) => c,
        }
    }
}

// Encoded symbol, modules split into eye regions and everything else
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Symbol {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
}

impl Symbol {
    pub fn from_code(code: &QrCode, ver: Version, ecl: ECLevel) -> Self {
        let w = code.width();
        debug_assert!(w == ver.width(), "Encoded width {w} doesn't match version {ver}");

        let grid = code
            .to_colors()
            .into_iter()
            .enumerate()
            .map(|(i, clr)| {
                let clr = Color::from(clr);
                if is_eye(i / w, i % w, w) {
                    Module::Finder(clr)
                } else {
                    Module::Data(clr)
                }
            })
            .collect();

        Self { grid, w, ver, ecl }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1));
        for r in 0..self.w as i16 {
            for c in 0..self.w as i16 {
                let ch = match self.get(r, c) {
                    Module::Finder(clr) => clr.select('F', 'f'),
                    Module::Data(clr) => clr.select('D', '.'),
                };
                res.push(ch);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "row should be less than width");
        debug_assert!(-w <= c && c < w, "column should be less than width");

        let r = if r < 0 { r + w } else { r } as usize;
        let c = if c < 0 { c + w } else { c } as usize;
        r * self.w + c
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    /// Row-major iterator over `(row, col, module)`.
    pub fn modules(&self) -> impl Iterator<Item = (usize, usize, Module)> + '_ {
        self.grid.iter().enumerate().map(move |(i, &m)| (i / self.w, i % self.w, m))
    }
}

#[cfg(test)]
mod symbol_tests {
    use qrcode::QrCode;

    use super::{Module, Symbol};
    use crate::common::{Color, ECLevel, Version};

    fn symbol(data: &str, ver: u8) -> Symbol {
        let ver = Version::new(ver).unwrap();
        let code = QrCode::with_version(data, ver.into(), ECLevel::L.into()).unwrap();
        Symbol::from_code(&code, ver, ECLevel::L)
    }

    #[test]
    fn test_index_wrap() {
        let qr = symbol("Hello, world!", 1);
        let w = qr.width() as i16;
        assert_eq!(w, 21);
        assert_eq!(qr.get(-1, -1), qr.get(w - 1, w - 1));
        assert_eq!(qr.get(0, -7), qr.get(0, w - 7));
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_bound() {
        let qr = symbol("Hello, world!", 1);
        let w = qr.width() as i16;
        qr.get(w, 0);
    }

    #[test]
    fn test_finder_classification() {
        let qr = symbol("https://example.com/market/62", 5);
        assert_eq!(qr.get(0, 0), Module::Finder(Color::Dark));
        assert_eq!(qr.get(1, 1), Module::Finder(Color::Light));
        assert_eq!(qr.get(3, 3), Module::Finder(Color::Dark));
        assert_eq!(qr.get(0, -1), Module::Finder(Color::Dark));
        assert_eq!(qr.get(-1, 0), Module::Finder(Color::Dark));
        assert_eq!(qr.get(7, 7), Module::Data(Color::Light));
        assert!(matches!(qr.get(-1, -1), Module::Data(_)));

        let finders = qr.modules().filter(|(_, _, m)| matches!(m, Module::Finder(_))).count();
        assert_eq!(finders, 3 * 49);
    }

    #[test]
    fn test_debug_str_nw_eye() {
        let qr = symbol("TEST", 1);
        let s = qr.to_debug_str();
        let rows: Vec<&str> = s.lines().collect();
        assert_eq!(rows.len(), 21);
        assert_eq!(&rows[0][..7], "FFFFFFF");
        assert_eq!(&rows[1][..7], "FfffffF");
        assert_eq!(&rows[2][..7], "FfFFFfF");
    }
}

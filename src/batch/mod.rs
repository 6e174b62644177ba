mod markets;

pub use markets::{market_name, KNOWN_MARKETS};

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    builder::{QRBuilder, RenderOptions},
    common::{QRError, QRResult},
};

// Table selection
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableSelection {
    /// Tables 1..=n
    Count(u32),
    List(Vec<u32>),
}

impl TableSelection {
    /// `"12"` selects tables 1 through 12, `"3; 7;12"` selects exactly those.
    pub fn parse(input: &str) -> QRResult<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(QRError::MissingTables);
        }

        let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

        if input.contains(';') {
            let tables = input
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(|s| match is_number(s) {
                    true => s.parse::<u32>().map_err(|_| QRError::InvalidTableNumber(s.into())),
                    false => Err(QRError::InvalidTableNumber(s.into())),
                })
                .collect::<QRResult<Vec<_>>>()?;
            if tables.is_empty() {
                return Err(QRError::NoTables);
            }
            return Ok(Self::List(tables));
        }

        let invalid = || QRError::InvalidTableCount(input.into());
        if !is_number(input) {
            return Err(invalid());
        }
        match input.parse::<u32>().map_err(|_| invalid())? {
            0 => Err(invalid()),
            n => Ok(Self::Count(n)),
        }
    }

    /// Table numbers in selection order, produced lazily.
    pub fn tables(&self) -> Box<dyn Iterator<Item = u32> + '_> {
        match self {
            Self::Count(n) => Box::new(1..=*n),
            Self::List(tables) => Box::new(tables.iter().copied()),
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Count(n) => *n as usize,
            Self::List(tables) => tables.len(),
        }
    }
}

#[cfg(test)]
mod table_selection_tests {
    use proptest::prelude::*;
    use test_case::test_case;

    use super::TableSelection;
    use crate::common::QRError;

    #[test_case("5", vec![1, 2, 3, 4, 5])]
    #[test_case(" 3 ", vec![1, 2, 3])]
    #[test_case("007", vec![1, 2, 3, 4, 5, 6, 7])]
    #[test_case("1;12; 200", vec![1, 12, 200])]
    #[test_case("4;", vec![4])]
    #[test_case("0;9;9", vec![0, 9, 9])]
    #[test_case(";;7;;", vec![7])]
    fn test_parse(input: &str, exp: Vec<u32>) {
        assert_eq!(TableSelection::parse(input).unwrap().tables().collect::<Vec<_>>(), exp);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(TableSelection::parse("  "), Err(QRError::MissingTables)));
        assert!(matches!(TableSelection::parse("0"), Err(QRError::InvalidTableCount(_))));
        assert!(matches!(TableSelection::parse("-3"), Err(QRError::InvalidTableCount(_))));
        assert!(matches!(TableSelection::parse("1,2"), Err(QRError::InvalidTableCount(_))));
        assert!(matches!(
            TableSelection::parse("1;b"),
            Err(QRError::InvalidTableNumber(s)) if s == "b"
        ));
        assert!(matches!(TableSelection::parse("1;+2"), Err(QRError::InvalidTableNumber(_))));
        assert!(matches!(TableSelection::parse(";;"), Err(QRError::NoTables)));
        assert!(matches!(
            TableSelection::parse("99999999999"),
            Err(QRError::InvalidTableCount(_))
        ));
    }

    #[test]
    fn test_count() {
        assert_eq!(TableSelection::parse("12").unwrap().count(), 12);
        assert_eq!(TableSelection::parse("1;2").unwrap().count(), 2);
    }

    #[test]
    fn test_large_count_is_lazy() {
        let selection = TableSelection::parse("4000000000").unwrap();
        assert_eq!(selection.count(), 4_000_000_000);
        assert_eq!(selection.tables().take(3).collect::<Vec<_>>(), [1, 2, 3]);
    }

    proptest! {
        #[test]
        fn proptest_list_roundtrip(tables in prop::collection::vec(0u32..100_000, 1..20)) {
            let input = tables.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" ; ");
            let input = format!("{input};");
            prop_assert_eq!(TableSelection::parse(&input).unwrap().tables().collect::<Vec<_>>(), tables);
        }
    }
}

// Links and file names
//------------------------------------------------------------------------------

pub fn pad_table(table: u32) -> String {
    format!("{table:03}")
}

pub fn normalize_host(host: &str) -> &str {
    let host = host.trim();
    let host = host
        .strip_prefix("https://")
        .or_else(|| host.strip_prefix("http://"))
        .unwrap_or(host);
    host.trim_end_matches('/')
}

pub fn table_url(host: &str, market: &str, padded_table: &str) -> String {
    format!(
        "https://{}/market/{market}?deliveryType=MarketTable&table={padded_table}",
        normalize_host(host)
    )
}

pub fn file_name(market: &str, padded_table: &str) -> String {
    format!("{market}{padded_table}.png")
}

#[cfg(test)]
mod link_tests {
    use test_case::test_case;

    use super::{file_name, normalize_host, pad_table, table_url};

    #[test_case(1, "001")]
    #[test_case(11, "011")]
    #[test_case(200, "200")]
    #[test_case(0, "000")]
    #[test_case(1234, "1234")]
    fn test_pad_table(table: u32, exp: &str) {
        assert_eq!(pad_table(table), exp);
    }

    #[test_case("order.example.com", "order.example.com")]
    #[test_case(" https://order.example.com/ ", "order.example.com")]
    #[test_case("http://order.example.com//", "order.example.com")]
    fn test_normalize_host(host: &str, exp: &str) {
        assert_eq!(normalize_host(host), exp);
    }

    #[test]
    fn test_table_url() {
        assert_eq!(
            table_url("order.example.com", "62", "007"),
            "https://order.example.com/market/62?deliveryType=MarketTable&table=007"
        );
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("62", "007"), "62007.png");
        assert_eq!(file_name("1", "120"), "1120.png");
    }
}

// Batch
//------------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Batch {
    host: String,
    market: String,
    tables: TableSelection,
    out_dir: PathBuf,
    opts: RenderOptions,
}

impl Batch {
    /// Validates the raw inputs in form order: host, market, tables, output
    /// directory, then the table syntax.
    pub fn new(host: &str, market: &str, tables: &str, out_dir: Option<&Path>) -> QRResult<Self> {
        let host = normalize_host(host);
        if host.is_empty() {
            return Err(QRError::MissingHost);
        }
        let market = market.trim();
        if market.is_empty() {
            return Err(QRError::MissingMarket);
        }
        if !market.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_') {
            return Err(QRError::InvalidMarket(market.into()));
        }
        if tables.trim().is_empty() {
            return Err(QRError::MissingTables);
        }
        let out_dir = match out_dir {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => return Err(QRError::MissingOutputDir),
        };
        let tables = TableSelection::parse(tables)?;

        Ok(Self {
            host: host.into(),
            market: market.into(),
            tables,
            out_dir,
            opts: RenderOptions::default(),
        })
    }

    pub fn options(&mut self, opts: RenderOptions) -> &mut Self {
        self.opts = opts;
        self
    }

    pub fn market(&self) -> &str {
        &self.market
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Links and output paths, one per table, in selection order.
    pub fn plan(&self) -> impl Iterator<Item = (String, PathBuf)> + '_ {
        self.tables.tables().map(|t| {
            let padded = pad_table(t);
            let url = table_url(&self.host, &self.market, &padded);
            (url, self.out_dir.join(file_name(&self.market, &padded)))
        })
    }

    /// Writes one PNG per table and returns their paths. Stops at the first
    /// failure.
    pub fn run(&self) -> QRResult<Vec<PathBuf>> {
        let renderer = self.opts.renderer()?;
        fs::create_dir_all(&self.out_dir)?;

        let label = match market_name(&self.market) {
            Some(name) => format!("{} ({name})", self.market),
            None => self.market.clone(),
        };
        info!("Generating {} codes for market {label}", self.tables.count());

        let mut written = Vec::new();
        for (url, path) in self.plan() {
            debug!("Encoding {url}");
            let qr = QRBuilder::new(url.as_bytes()).options(self.opts).build()?;
            renderer.render(&qr)?.save(&path)?;
            info!("Wrote {}", path.display());
            written.push(path);
        }
        Ok(written)
    }
}

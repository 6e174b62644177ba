//! # table-qr
//!
//! Styled QR codes for table ordering links. Every table of a market gets a
//! PNG whose link opens the market's menu with the table preselected.
//!
//! ## Features
//!
//! - **Circle modules**: data modules are drawn as anti-aliased dots
//! - **Custom eyes**: the three finder patterns are replaced by rounded
//!   outlines with a three-bar "hamburger" eyeball, the corner facing the
//!   symbol center left square
//! - **Two-color fill**: the ink canvas is mapped onto any foreground and
//!   background color
//! - **Batches**: `"12"` renders tables 1 through 12, `"3;7;12"` renders
//!   exactly those
//!
//! ## Quick Start
//!
//! ### Single symbol
//!
//! ```rust,no_run
//! use table_qr::{QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let img = QRBuilder::new(b"https://order.example.com/market/62?deliveryType=MarketTable&table=007")
//!     .version(Version::new(5)?)  // 37x37 modules
//!     .box_size(40)               // pixels per module
//!     .render()?;
//!
//! img.save("62007.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Whole market
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use table_qr::Batch;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let batch = Batch::new("order.example.com", "62", "1;2;15", Some(Path::new("codes")))?;
//! for path in batch.run()? {
//!     println!("{}", path.display());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Geometry
//!
//! For an `n`-module symbol with `B`-pixel modules and a border of `q`
//! modules the image is `(n + 2q) * B` pixels wide. The eyes cover modules
//! `(0,0)-(6,6)`, `(0,n-7)-(6,n-1)` and `(n-7,0)-(n-1,6)`; each eyeball covers
//! the 3x3 modules in the middle of its eye.

pub mod batch;
pub mod builder;
pub mod common;
pub mod config;
pub mod render;

pub use batch::{Batch, TableSelection};
pub use builder::{QRBuilder, RenderOptions, Symbol};
pub use common::{ECLevel, QRError, QRResult, Rgb, Version};
pub use config::Settings;
pub use render::{EyeStyle, FillMask, ModuleStyle, Renderer};

//! Main article text extraction module.
//!
//! # Module Structure
//!
//! - `json_ld`: article body from JSON-LD structured data
//! - `clutter`: removal of navigation, ads and other page chrome
//! - `blocks`: content container selection and text block joining
//! - `pipeline`: the cascade tying the stages together
//!
//! Each stage returns `Option` and can be exercised on its own:
//!
//! ```rust
//! use pitwall_extract::{dom, Options};
//! use pitwall_extract::extractor::{blocks, clutter};
//!
//! let doc = dom::parse("<nav>Home</nav><article><p>A paragraph long enough to keep.</p></article>");
//! let options = Options::default();
//!
//! clutter::strip(&doc, &options.clutter_selectors);
//! if let Some((text, _source)) = blocks::select(&doc, &options) {
//!     assert_eq!(text, "A paragraph long enough to keep.");
//! }
//! ```

pub mod blocks;
pub mod clutter;
pub mod json_ld;
pub mod pipeline;

pub use pipeline::extract_article;

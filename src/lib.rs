//! worldsheet - Theme-driven stylesheet and page generator for worldbuilding sites
//!
//! A site is described by one JSON file holding the appearance settings, the
//! overview content and the world items. From it this library renders a
//! stylesheet, the world section with its tag/status/search filters, and a
//! complete single-page site.
//!
//! # Features
//!
//! - Named style variants per surface (navigation, containers, buttons, cards,
//!   overview) with fallback to a default for unknown names
//! - Color schemes and font sets interpolated through a sanitizing CSS template helper
//! - Content-driven minimum container height estimate with a tunable constant table
//! - World item filtering with hidden (`!`-prefixed) tags and any/all tag matching
//!
//! # Example
//!
//! ```no_run
//! use worldsheet::{filter::WorldFilter, page::SiteFile, stylesheet};
//!
//! let site = SiteFile::load_from_file("site.json".as_ref()).unwrap();
//!
//! let css = stylesheet::render_stylesheet(&site.appearance, &site.overview, &site.tuning).unwrap();
//! println!("{}", css);
//!
//! let filter = WorldFilter::new().select_tag("coastal");
//! for item in filter.apply(&site.world) {
//!     println!("{}", item.name);
//! }
//! ```

pub mod appearance;
pub mod error;
pub mod filter;
pub mod height;
pub mod page;
pub mod palette;
pub mod styles;
pub mod stylesheet;
pub mod template;
pub mod validation;
pub mod variant;
pub mod world;

pub use error::{Error, Result};

//! chart-slug: write-only serialization of a chart view state into a
//! URL-safe hash fragment.
//!
//! A [`ChartSlugBuilder`] accumulates chart parameters through chained
//! setters and renders them as a deterministic RISON-style string,
//! percent-encoded and prefixed with `#` so it can be appended directly to
//! the chart page URL. There is no decode path in this crate; the front
//! end owns parsing.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartSlugBuilder, ChartState, SourceQuery, TimeRange};
pub use error::{SlugError, SlugResult};

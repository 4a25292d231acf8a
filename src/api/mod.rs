pub mod chart_state;
pub mod slug_builder;
mod validation;

pub use chart_state::{ChartState, SourceQuery, TimeRange};
pub use slug_builder::ChartSlugBuilder;

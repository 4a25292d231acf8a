//! Fluent accumulate-then-build construction of chart fragments.

use chrono::{DateTime, Utc};

use crate::core::{fragment, rison};
use crate::error::{SlugError, SlugResult};

use super::chart_state::{ChartState, SourceQuery, TimeRange};
use super::validation::{require_non_empty, validate_base};

/// Accumulates chart view parameters and renders them as a URL hash
/// fragment.
///
/// Every mutator returns the builder again so calls chain in any order;
/// [`build`](Self::build) is a pure function of the accumulated state and
/// may be called repeatedly. Each logical "build a chart link" operation
/// should use its own builder instance.
///
/// ```
/// use chart_slug::ChartSlugBuilder;
///
/// let mut builder = ChartSlugBuilder::new();
/// builder
///     .set_customer_id("acme")
///     .set_start_millis(1_000)
///     .set_end_millis(5_000)
///     .add_source("cpu", "ts(cpu.load)")?;
/// let fragment = builder.build()?;
/// assert!(fragment.starts_with('#'));
/// # Ok::<(), chart_slug::SlugError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChartSlugBuilder {
    customer_id: Option<String>,
    id: Option<String>,
    name: Option<String>,
    granularity: Option<String>,
    compare: Option<String>,
    units: Option<String>,
    base: Option<i64>,
    start_millis: Option<i64>,
    end_millis: Option<i64>,
    range_granularity: Option<String>,
    range_compare: Option<String>,
    sources: Vec<SourceQuery>,
    focused_hosts: Vec<String>,
}

impl ChartSlugBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the customer id for the chart.
    pub fn set_customer_id(&mut self, customer_id: impl Into<String>) -> &mut Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Sets the chart id. Only used when redirected from a dashboard; the
    /// front end defaults it to `"chart"`.
    pub fn set_id(&mut self, id: impl Into<String>) -> &mut Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the name of the chart.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the chart-level granularity. Valid values are defined by the
    /// front end (e.g. `"m"`, `"h"`, `"d"`, `"auto"`) and not checked here.
    pub fn set_granularity(&mut self, granularity: impl Into<String>) -> &mut Self {
        self.granularity = Some(granularity.into());
        self
    }

    /// Sets the chart-level comparison option (e.g. `"1d"`, `"1w"`).
    pub fn set_compare(&mut self, compare: impl Into<String>) -> &mut Self {
        self.compare = Some(compare.into());
        self
    }

    /// Sets the units rendered to the right of the y-axis.
    pub fn set_units(&mut self, units: impl Into<String>) -> &mut Self {
        self.units = Some(units.into());
        self
    }

    /// Sets the y-axis base. Must be >= 1; 1 selects a linear y-axis.
    pub fn set_base(&mut self, base: i64) -> SlugResult<&mut Self> {
        self.base = Some(validate_base(base)?);
        Ok(self)
    }

    /// Sets the start of the visible time range in epoch millis.
    pub fn set_start_millis(&mut self, start_millis: i64) -> &mut Self {
        self.start_millis = Some(start_millis);
        self
    }

    /// Sets the start of the visible time range from an instant. The
    /// instant's own millisecond value is used; no timezone adjustment.
    pub fn set_start(&mut self, instant: DateTime<Utc>) -> &mut Self {
        self.set_start_millis(instant.timestamp_millis())
    }

    /// Sets the end of the visible time range in epoch millis. The range
    /// is stored as start plus duration; the duration is derived at
    /// [`build`](Self::build) time as `end - start`.
    pub fn set_end_millis(&mut self, end_millis: i64) -> &mut Self {
        self.end_millis = Some(end_millis);
        self
    }

    /// Sets the end of the visible time range from an instant.
    pub fn set_end(&mut self, instant: DateTime<Utc>) -> &mut Self {
        self.set_end_millis(instant.timestamp_millis())
    }

    /// Sets the granularity of the time range itself. Defaults to
    /// `"auto"`, which is elided from the output.
    pub fn set_time_range_granularity(&mut self, granularity: impl Into<String>) -> &mut Self {
        self.range_granularity = Some(granularity.into());
        self
    }

    /// Sets the comparison option of the time range itself. Defaults to
    /// `"off"`, which is elided from the output.
    pub fn set_time_range_compare(&mut self, compare: impl Into<String>) -> &mut Self {
        self.range_compare = Some(compare.into());
        self
    }

    /// Appends an enabled source query. Name and query must be non-empty.
    pub fn add_source(
        &mut self,
        name: impl Into<String>,
        query: impl Into<String>,
    ) -> SlugResult<&mut Self> {
        let source = SourceQuery::new(name, query)?;
        Ok(self.add_source_query(source))
    }

    /// Appends an already-constructed source query. Use this together with
    /// the [`SourceQuery`] combinators for the disabled and query-builder
    /// variants.
    pub fn add_source_query(&mut self, source: SourceQuery) -> &mut Self {
        self.sources.push(source);
        self
    }

    /// Appends a host to focus when the page loads. The chart must contain
    /// queries yielding host tags (e.g. `host=abcd01`) for focusing to
    /// take effect.
    pub fn add_focused_host(&mut self, host_name: impl Into<String>) -> SlugResult<&mut Self> {
        let host_name = host_name.into();
        require_non_empty(&host_name, "focused host")?;
        self.focused_hosts.push(host_name);
        Ok(self)
    }

    /// Renders the accumulated state as a `#`-prefixed, percent-encoded
    /// fragment ready to concatenate onto the chart page URL.
    ///
    /// Fails with [`SlugError::InvalidState`] when the time range was
    /// touched but only one of start and end was ever set.
    pub fn build(&self) -> SlugResult<String> {
        let state = self.finalize()?;
        let payload = rison::encode(&state.to_rison());
        let slug = format!("#{}", fragment::encode_fragment(&payload));
        tracing::debug!(
            sources = state.sources.len(),
            len = slug.len(),
            "built chart fragment"
        );
        Ok(slug)
    }

    fn finalize(&self) -> SlugResult<ChartState> {
        Ok(ChartState {
            customer_id: self.customer_id.clone(),
            id: self.id.clone(),
            name: self.name.clone(),
            time_range: self.finalize_time_range()?,
            granularity: self.granularity.clone(),
            compare: self.compare.clone(),
            units: self.units.clone(),
            base: self.base,
            sources: self.sources.clone(),
            focused_hosts: self.focused_hosts.clone(),
        })
    }

    fn finalize_time_range(&self) -> SlugResult<Option<TimeRange>> {
        let touched = self.start_millis.is_some()
            || self.end_millis.is_some()
            || self.range_granularity.is_some()
            || self.range_compare.is_some();
        if !touched {
            return Ok(None);
        }
        let (Some(start), Some(end)) = (self.start_millis, self.end_millis) else {
            return Err(SlugError::InvalidState(
                "time range requires both start and end to be set".to_owned(),
            ));
        };
        let mut range = TimeRange::from_bounds(start, end)?;
        if let Some(granularity) = &self.range_granularity {
            range.granularity.clone_from(granularity);
        }
        if let Some(compare) = &self.range_compare {
            range.compare.clone_from(compare);
        }
        Ok(Some(range))
    }
}

//! Chart view state value objects and their fragment key table.
//!
//! The short keys below are the wire contract shared with the front end.
//! They are stable: changing any of them breaks every stored or shared
//! link.
//!
//! Top-level object: `b` base, `c` customer id, `compare` compare,
//! `g` granularity, `h` focused hosts, `id` chart id, `n` name,
//! `s` sources, `t` time range, `u` units.
//! Time range object: `s` start millis, `d` duration millis,
//! `g` granularity (default `"auto"`), `c` compare (default `"off"`).
//! Source object: `n` name, `q` query, `d` disabled, `qb` query builder
//! serialization, `qbe` query builder enabled.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::rison::RisonValue;
use crate::error::{SlugError, SlugResult};

use super::validation::require_non_empty;

pub(crate) const TIME_RANGE_DEFAULT_GRANULARITY: &str = "auto";
pub(crate) const TIME_RANGE_DEFAULT_COMPARE: &str = "off";
pub(crate) const CHART_DEFAULT_GRANULARITY: &str = "auto";

/// Finalized view state for a single chart.
///
/// Serializable so host applications can persist chart setups alongside
/// their own data; the URL fragment itself is produced by the builder and
/// is write-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartState {
    pub customer_id: Option<String>,
    /// Chart id. Only meaningful when redirected from a dashboard; the
    /// front end falls back to `"chart"` when absent.
    pub id: Option<String>,
    pub name: Option<String>,
    pub time_range: Option<TimeRange>,
    /// Chart-level granularity. Valid values are defined by the front end
    /// (e.g. `"m"`, `"h"`, `"d"`, `"auto"`) and are not validated here.
    pub granularity: Option<String>,
    pub compare: Option<String>,
    /// Units rendered to the right of the y-axis.
    pub units: Option<String>,
    /// Y-axis base, >= 1. A base of 1 selects a linear y-axis.
    pub base: Option<i64>,
    pub sources: Vec<SourceQuery>,
    pub focused_hosts: Vec<String>,
}

/// Visible time window, expressed as start plus duration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start_millis: i64,
    pub duration_millis: i64,
    pub granularity: String,
    pub compare: String,
}

/// One query line on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceQuery {
    pub name: String,
    pub query: String,
    pub disabled: bool,
    pub query_builder_serialization: Option<String>,
    pub query_builder_enabled: bool,
}

impl SourceQuery {
    /// Creates an enabled source query. Name and query must be non-empty.
    pub fn new(name: impl Into<String>, query: impl Into<String>) -> SlugResult<Self> {
        let name = name.into();
        let query = query.into();
        require_non_empty(&name, "source name")?;
        require_non_empty(&query, "source query")?;
        Ok(Self {
            name,
            query,
            disabled: false,
            query_builder_serialization: None,
            query_builder_enabled: false,
        })
    }

    /// Marks the query as disabled (unchecked) when the chart loads.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Attaches a query-builder serialization for this source.
    #[must_use]
    pub fn with_query_builder(mut self, serialization: impl Into<String>) -> Self {
        self.query_builder_serialization = Some(serialization.into());
        self
    }

    #[must_use]
    pub fn with_query_builder_enabled(mut self, enabled: bool) -> Self {
        self.query_builder_enabled = enabled;
        self
    }
}

impl TimeRange {
    /// Derives the range from explicit start and end instants in epoch
    /// millis. Granularity and compare keep their documented defaults.
    pub fn from_bounds(start_millis: i64, end_millis: i64) -> SlugResult<Self> {
        if end_millis < start_millis {
            return Err(SlugError::InvalidState(format!(
                "time range end ({end_millis}) precedes start ({start_millis})"
            )));
        }
        Ok(Self {
            start_millis,
            duration_millis: end_millis - start_millis,
            granularity: TIME_RANGE_DEFAULT_GRANULARITY.to_owned(),
            compare: TIME_RANGE_DEFAULT_COMPARE.to_owned(),
        })
    }
}

// Canonicalization lives next to the key table: each object is described
// by one (key, optional value) row per field, where `None` means the field
// is elided, and keys are then sorted so setter call order can never leak
// into the output.

fn canonical_object(rows: Vec<(&'static str, Option<RisonValue>)>) -> RisonValue {
    let mut entries = IndexMap::new();
    for (key, value) in rows {
        if let Some(value) = value {
            entries.insert(key, value);
        }
    }
    entries.sort_keys();
    RisonValue::Object(entries)
}

fn set_string(value: &Option<String>) -> Option<RisonValue> {
    value.as_deref().map(RisonValue::str)
}

fn non_default_string(value: &str, default: &str) -> Option<RisonValue> {
    (value != default).then(|| RisonValue::str(value))
}

fn set_flag(value: bool) -> Option<RisonValue> {
    value.then_some(RisonValue::Bool(true))
}

fn non_empty_list(items: Vec<RisonValue>) -> Option<RisonValue> {
    (!items.is_empty()).then_some(RisonValue::List(items))
}

impl ChartState {
    pub(crate) fn to_rison(&self) -> RisonValue {
        canonical_object(vec![
            ("b", self.base.map(RisonValue::Int)),
            ("c", set_string(&self.customer_id)),
            ("compare", set_string(&self.compare)),
            (
                "g",
                self.granularity
                    .as_deref()
                    .and_then(|g| non_default_string(g, CHART_DEFAULT_GRANULARITY)),
            ),
            (
                "h",
                non_empty_list(
                    self.focused_hosts
                        .iter()
                        .map(|host| RisonValue::str(host.as_str()))
                        .collect(),
                ),
            ),
            ("id", set_string(&self.id)),
            ("n", set_string(&self.name)),
            (
                "s",
                non_empty_list(self.sources.iter().map(SourceQuery::to_rison).collect()),
            ),
            ("t", self.time_range.as_ref().map(TimeRange::to_rison)),
            ("u", set_string(&self.units)),
        ])
    }
}

impl TimeRange {
    fn to_rison(&self) -> RisonValue {
        canonical_object(vec![
            (
                "c",
                non_default_string(&self.compare, TIME_RANGE_DEFAULT_COMPARE),
            ),
            ("d", Some(RisonValue::Int(self.duration_millis))),
            (
                "g",
                non_default_string(&self.granularity, TIME_RANGE_DEFAULT_GRANULARITY),
            ),
            ("s", Some(RisonValue::Int(self.start_millis))),
        ])
    }
}

impl SourceQuery {
    fn to_rison(&self) -> RisonValue {
        canonical_object(vec![
            ("d", set_flag(self.disabled)),
            ("n", Some(RisonValue::str(self.name.as_str()))),
            ("q", Some(RisonValue::str(self.query.as_str()))),
            ("qb", set_string(&self.query_builder_serialization)),
            ("qbe", set_flag(self.query_builder_enabled)),
        ])
    }
}

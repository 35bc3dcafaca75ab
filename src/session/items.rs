//! Unified view of the run and its loads as one ordered list.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::load::LoadId;

/// Identity of an entry in the timing list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "id")]
pub enum ItemId {
    Run,
    Load(LoadId),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Run => f.write_str("run"),
            ItemId::Load(id) => write!(f, "{}", id),
        }
    }
}

/// Parses `run` or a numeric load id.
impl FromStr for ItemId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("run") {
            return Ok(ItemId::Run);
        }
        s.parse::<u64>()
            .map(|id| ItemId::Load(LoadId(id)))
            .map_err(|_| format!("expected `run` or a numeric load id, got `{}`", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Run,
    Load,
}

/// Read-only projection of one row of the timing list.
///
/// The run is always the first item, even before it is marked, and can
/// never be deleted. Run times are the adjusted (offset-corrected) times.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingItem {
    pub id: ItemId,
    pub kind: ItemKind,
    pub label: String,
    pub start_time: Option<f64>,
    pub end_time: Option<f64>,
    /// Position in the load list; `None` for the run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_index: Option<usize>,
    pub is_deletable: bool,
}

impl TimingItem {
    pub(crate) fn run(start_time: Option<f64>, end_time: Option<f64>) -> Self {
        Self {
            id: ItemId::Run,
            kind: ItemKind::Run,
            label: "Run".to_string(),
            start_time,
            end_time,
            load_index: None,
            is_deletable: false,
        }
    }

    pub(crate) fn load(
        id: LoadId,
        index: usize,
        start_time: Option<f64>,
        end_time: Option<f64>,
    ) -> Self {
        Self {
            id: ItemId::Load(id),
            kind: ItemKind::Load,
            label: load_label(index),
            start_time,
            end_time,
            load_index: Some(index),
            is_deletable: true,
        }
    }

    /// Marked duration in seconds, when both edges are set.
    pub fn duration(&self) -> Option<f64> {
        Some(self.end_time? - self.start_time?)
    }
}

/// Positional label of a load, 1-based: `Load #1`.
pub fn load_label(index: usize) -> String {
    format!("Load #{}", index + 1)
}

//! Flat persistence record for saving, exporting and importing sessions.
//!
//! The same JSON shape serves as the on-disk session file and as the
//! export format:
//!
//! ```json
//! { "videoId": "…", "fps": 30,
//!   "runStart": { "time": 1.5, "offset": 0 }, "runEnd": { "time": 80.2, "offset": 0 },
//!   "loads": [{ "id": 1, "startTime": 10.0, "endTime": 12.5 }],
//!   "currentSelectedIndex": 1, "nextId": 2,
//!   "exportedAt": "2024-01-01T00:00:00.000Z",
//!   "summary": { "totalLoadFrames": 75, "rtaFrames": 2361, "lrtFrames": 2286 } }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::load::{Load, RunMarker};
use super::model::Session;
use super::summary::TimingSummary;
use super::{checked_offset, checked_time, SessionError};
use crate::timing::FrameRate;

/// Errors reading or writing a session record.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed session record: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Complete snapshot of a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub video_id: Option<String>,
    pub fps: FrameRate,
    pub run_start: RunMarker,
    pub run_end: RunMarker,
    pub loads: Vec<Load>,
    pub current_selected_index: usize,
    /// Id the next added load receives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<u64>,
    /// Set only on exports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<String>,
    pub summary: TimingSummary,
}

/// A record in which any top-level field may be missing.
///
/// Applying it to a session overwrites only the fields that are present.
/// Derived fields (`summary`, `exportedAt`) are ignored on input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialRecord {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub fps: Option<FrameRate>,
    #[serde(default)]
    pub run_start: Option<RunMarker>,
    #[serde(default)]
    pub run_end: Option<RunMarker>,
    #[serde(default)]
    pub loads: Option<Vec<Load>>,
    #[serde(default)]
    pub current_selected_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_id: Option<u64>,
}

impl PartialRecord {
    /// Parse a JSON record.
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON record from a file.
    pub fn read(path: &Path) -> Result<Self, RecordError> {
        let json = fs::read_to_string(path).map_err(|source| RecordError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

impl From<SessionRecord> for PartialRecord {
    fn from(record: SessionRecord) -> Self {
        Self {
            video_id: record.video_id,
            fps: Some(record.fps),
            run_start: Some(record.run_start),
            run_end: Some(record.run_end),
            loads: Some(record.loads),
            current_selected_index: Some(record.current_selected_index),
            next_id: record.next_id,
        }
    }
}

impl Session {
    /// Snapshot the session, including its derived summary.
    pub fn to_record(&self) -> SessionRecord {
        SessionRecord {
            video_id: self.video_id.clone(),
            fps: self.fps,
            run_start: self.run_start,
            run_end: self.run_end,
            loads: self.loads.clone(),
            current_selected_index: self.selected,
            next_id: Some(self.next_id),
            exported_at: None,
            summary: self.summary(),
        }
    }

    /// Snapshot for export, stamped with `exported_at`.
    ///
    /// Refuses while either run marker is unmarked; an export without a
    /// run has no timing to share.
    pub fn export_record(&self, exported_at: DateTime<Utc>) -> Result<SessionRecord, SessionError> {
        if self.run_start.time.is_none() || self.run_end.time.is_none() {
            return Err(SessionError::ExportPrecondition);
        }
        let mut record = self.to_record();
        record.exported_at = Some(exported_at.to_rfc3339_opts(SecondsFormat::Millis, true));
        Ok(record)
    }

    /// Build a session from a (possibly partial) record on top of defaults.
    pub fn from_partial(record: PartialRecord) -> Result<Self, SessionError> {
        let mut session = Session::default();
        session.apply_partial(record)?;
        Ok(session)
    }

    /// Overwrite the fields present in `record`, leaving the rest untouched.
    ///
    /// Everything is checked before anything is applied, so a rejected
    /// record leaves the session unchanged. Imported loads keep their ids;
    /// ids allocated afterwards continue past both the largest one seen and
    /// the record's `nextId`, so ids of deleted loads are never handed out
    /// again.
    pub fn apply_partial(&mut self, record: PartialRecord) -> Result<(), SessionError> {
        for marker in [&record.run_start, &record.run_end].into_iter().flatten() {
            check_marker(marker)?;
        }
        if let Some(loads) = &record.loads {
            check_loads(loads)?;
        }

        let mut applied = Vec::new();
        if let Some(video_id) = record.video_id {
            self.set_video_id(Some(video_id));
            applied.push("videoId");
        }
        if let Some(fps) = record.fps {
            self.fps = fps;
            applied.push("fps");
        }
        if let Some(marker) = record.run_start {
            self.run_start = marker;
            applied.push("runStart");
        }
        if let Some(marker) = record.run_end {
            self.run_end = marker;
            applied.push("runEnd");
        }
        if let Some(loads) = record.loads {
            let max_id = loads.iter().map(|load| load.id.0).max().unwrap_or(0);
            self.next_id = self.next_id.max(max_id.saturating_add(1));
            self.loads = loads;
            applied.push("loads");
        }
        if let Some(next_id) = record.next_id {
            self.next_id = self.next_id.max(next_id);
            applied.push("nextId");
        }
        if let Some(index) = record.current_selected_index {
            self.selected = index;
            applied.push("currentSelectedIndex");
        }
        self.selected = self.selected.min(self.loads.len());

        info!(fields = ?applied, "applied session record");
        Ok(())
    }

    /// Load a session file.
    pub fn load_file(path: &Path) -> Result<Self, RecordError> {
        let record = PartialRecord::read(path)?;
        Ok(Self::from_partial(record)?)
    }

    /// Write the session file as JSON.
    pub fn save_file(&self, path: &Path, pretty: bool) -> Result<(), RecordError> {
        write_record(&self.to_record(), path, pretty)
    }
}

/// Serialize a record to JSON text.
pub fn record_to_json(record: &SessionRecord, pretty: bool) -> Result<String, RecordError> {
    let json = if pretty {
        serde_json::to_string_pretty(record)?
    } else {
        serde_json::to_string(record)?
    };
    Ok(json)
}

/// Write a record to a file, followed by a newline.
pub fn write_record(record: &SessionRecord, path: &Path, pretty: bool) -> Result<(), RecordError> {
    let json = record_to_json(record, pretty)?;
    fs::write(path, format!("{}\n", json)).map_err(|source| RecordError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn check_marker(marker: &RunMarker) -> Result<(), SessionError> {
    if let Some(time) = marker.time {
        checked_time(time)?;
    }
    checked_offset(marker.offset)?;
    Ok(())
}

fn check_loads(loads: &[Load]) -> Result<(), SessionError> {
    let mut seen = HashSet::with_capacity(loads.len());
    for load in loads {
        if !seen.insert(load.id) {
            return Err(SessionError::DuplicateLoadId(load.id));
        }
        for time in [load.start_time, load.end_time].into_iter().flatten() {
            checked_time(time)?;
        }
    }
    Ok(())
}

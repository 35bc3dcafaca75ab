//! Session model: the canonical run markers, loads and frame rate.
//!
//! A [`Session`] owns every marked timestamp of one video. Everything shown
//! to the user (timing list, RTA, LRT, warnings) is derived from it on
//! demand by pure functions; nothing derived is cached.
//!
//! Loads are addressed by their stable [`LoadId`]. Positions in the load
//! list are only used for labels (`Load #3`) and recomputed on every read.
//!
//! # Usage
//!
//! ```
//! use loadmark::session::{Edge, ItemId, Session};
//!
//! let mut session = Session::default();
//! session.mark_time(ItemId::Run, Edge::Start, 0.0).unwrap();
//! session.mark_time(ItemId::Run, Edge::End, 10.0).unwrap();
//!
//! let load = session.add_load();
//! session.mark_time(ItemId::Load(load), Edge::Start, 1.0).unwrap();
//! session.mark_time(ItemId::Load(load), Edge::End, 3.0).unwrap();
//!
//! let summary = session.summary();
//! assert_eq!(summary.rta_frames, Some(300));
//! assert_eq!(summary.lrt_frames, Some(240));
//! ```

mod items;
mod load;
mod model;
mod record;
mod summary;

pub use items::{load_label, ItemId, ItemKind, TimingItem};
pub use load::{Edge, Load, LoadId, RunMarker};
pub use model::Session;
pub use record::{record_to_json, write_record, PartialRecord, RecordError, SessionRecord};
pub use summary::TimingSummary;

use crate::timing::{is_valid_seconds, TimingError, MAX_SECONDS};

/// Contract violations when mutating a session.
///
/// A failed operation leaves the session exactly as it was.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("No timing item with id {0}")]
    UnknownItem(ItemId),

    #[error(
        "Time must be a finite, non-negative number of seconds up to {max} (got {0})",
        max = MAX_SECONDS
    )]
    InvalidTime(f64),

    #[error(
        "Offset must be a finite number of seconds between -{max} and {max} (got {0})",
        max = MAX_SECONDS
    )]
    InvalidOffset(f64),

    #[error("Duplicate load id {0} in imported loads")]
    DuplicateLoadId(LoadId),

    #[error(transparent)]
    Timing(#[from] TimingError),

    #[error("Run start and run end must both be marked before exporting")]
    ExportPrecondition,
}

/// A marked time: finite, non-negative and at most [`MAX_SECONDS`].
fn checked_time(time: f64) -> Result<f64, SessionError> {
    if is_valid_seconds(time) && time >= 0.0 {
        Ok(time)
    } else {
        Err(SessionError::InvalidTime(time))
    }
}

/// A run marker offset: finite and within [`MAX_SECONDS`] of zero.
fn checked_offset(offset: f64) -> Result<f64, SessionError> {
    if is_valid_seconds(offset) {
        Ok(offset)
    } else {
        Err(SessionError::InvalidOffset(offset))
    }
}

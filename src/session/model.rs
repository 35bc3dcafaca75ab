//! The session state and its mutation API.

use tracing::{debug, info};

use super::items::{ItemId, TimingItem};
use super::load::{Edge, Load, LoadId, RunMarker};
use super::summary::TimingSummary;
use super::{checked_offset, checked_time, SessionError};
use crate::timing::{frames_to_timecode, seconds_to_frames, FrameRate, Timecode};
use crate::validation::{validate_load, validate_loads, ValidationReport, ValidationStatus};

/// All marked timestamps of one video.
///
/// The selection is an index into the timing list: `0` is the run, `p + 1`
/// is the load at position `p`. It always stays within `0..=loads.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub(super) video_id: Option<String>,
    pub(super) fps: FrameRate,
    pub(super) run_start: RunMarker,
    pub(super) run_end: RunMarker,
    pub(super) loads: Vec<Load>,
    pub(super) selected: usize,
    pub(super) next_id: u64,
    pub(super) auto_advance: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(FrameRate::default())
    }
}

impl Session {
    /// An empty session: run unmarked, no loads, run selected.
    pub fn new(fps: FrameRate) -> Self {
        Self {
            video_id: None,
            fps,
            run_start: RunMarker::default(),
            run_end: RunMarker::default(),
            loads: Vec::new(),
            selected: 0,
            next_id: 1,
            auto_advance: false,
        }
    }

    // === Accessors ===

    pub fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref()
    }

    pub fn fps(&self) -> FrameRate {
        self.fps
    }

    pub fn run_start(&self) -> RunMarker {
        self.run_start
    }

    pub fn run_end(&self) -> RunMarker {
        self.run_end
    }

    pub fn run_marker(&self, edge: Edge) -> RunMarker {
        match edge {
            Edge::Start => self.run_start,
            Edge::End => self.run_end,
        }
    }

    /// Loads in list order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    pub fn load(&self, id: LoadId) -> Option<&Load> {
        self.loads.iter().find(|load| load.id == id)
    }

    /// Current list position of a load.
    pub fn position(&self, id: LoadId) -> Option<usize> {
        self.loads.iter().position(|load| load.id == id)
    }

    /// Index of the selected row in the timing list (`0` = run).
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> ItemId {
        match self.selected.checked_sub(1).and_then(|p| self.loads.get(p)) {
            Some(load) => ItemId::Load(load.id),
            None => ItemId::Run,
        }
    }

    /// The load a "mark load" action applies to: the selected load, or the
    /// last load when the run is selected.
    pub fn current_load(&self) -> Option<LoadId> {
        match self.selected_item() {
            ItemId::Load(id) => Some(id),
            ItemId::Run => self.loads.last().map(|load| load.id),
        }
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    /// Both edges of the item are marked. Unknown items are never complete.
    pub fn is_item_complete(&self, item: ItemId) -> bool {
        match item {
            ItemId::Run => self.run_start.time.is_some() && self.run_end.time.is_some(),
            ItemId::Load(id) => self.load(id).map_or(false, Load::is_complete),
        }
    }

    // === Derived values ===

    pub fn adjusted_run_start(&self) -> Option<f64> {
        self.run_start.adjusted_time()
    }

    pub fn adjusted_run_end(&self) -> Option<f64> {
        self.run_end.adjusted_time()
    }

    pub fn adjusted_run_start_frames(&self) -> Option<i64> {
        self.run_start.adjusted_frames(self.fps)
    }

    pub fn adjusted_run_end_frames(&self) -> Option<i64> {
        self.run_end.adjusted_frames(self.fps)
    }

    /// Frames spent in complete loads. Pending loads contribute nothing.
    pub fn total_load_frames(&self) -> i64 {
        self.loads.iter().filter_map(|load| load.frames(self.fps)).sum()
    }

    pub fn rta_frames(&self) -> Option<i64> {
        Some(self.adjusted_run_end_frames()? - self.adjusted_run_start_frames()?)
    }

    pub fn lrt_frames(&self) -> Option<i64> {
        self.rta_frames().map(|rta| rta - self.total_load_frames())
    }

    pub fn summary(&self) -> TimingSummary {
        TimingSummary::new(self.total_load_frames(), self.rta_frames())
    }

    /// Validate every load against the adjusted run boundaries.
    pub fn validate(&self) -> ValidationReport {
        validate_loads(
            &self.loads,
            self.adjusted_run_start(),
            self.adjusted_run_end(),
        )
    }

    /// Validation status of a single load, `None` if the id is unknown.
    pub fn load_status(&self, id: LoadId) -> Option<ValidationStatus> {
        let index = self.position(id)?;
        let load = &self.loads[index];
        Some(validate_load(
            load.start_time,
            load.end_time,
            &self.loads,
            index,
            self.adjusted_run_start(),
            self.adjusted_run_end(),
        ))
    }

    /// The run followed by every load, in list order.
    pub fn timing_items(&self) -> Vec<TimingItem> {
        let mut items = Vec::with_capacity(self.loads.len() + 1);
        items.push(TimingItem::run(
            self.adjusted_run_start(),
            self.adjusted_run_end(),
        ));
        items.extend(
            self.loads
                .iter()
                .enumerate()
                .map(|(index, load)| {
                    TimingItem::load(load.id, index, load.start_time, load.end_time)
                }),
        );
        items
    }

    /// Time the player should seek to when jumping to an item's edge.
    ///
    /// Run markers jump to their adjusted time. `Ok(None)` when the edge is
    /// not marked yet.
    pub fn seek_target(&self, item: ItemId, edge: Edge) -> Result<Option<f64>, SessionError> {
        match item {
            ItemId::Run => Ok(self.run_marker(edge).adjusted_time()),
            ItemId::Load(id) => self
                .load(id)
                .map(|load| load.edge(edge))
                .ok_or(SessionError::UnknownItem(item)),
        }
    }

    /// Render seconds as a timecode at this session's frame rate.
    pub fn timecode(&self, seconds: f64) -> Timecode {
        frames_to_timecode(seconds_to_frames(seconds, self.fps), self.fps)
    }

    // === Mutations ===

    /// Overwrite one edge of the run or of a load with a newly marked time.
    ///
    /// Marking a run edge replaces its raw time and keeps its offset.
    pub fn mark_time(&mut self, item: ItemId, edge: Edge, time: f64) -> Result<(), SessionError> {
        let time = checked_time(time)?;
        match item {
            ItemId::Run => match edge {
                Edge::Start => self.run_start.time = Some(time),
                Edge::End => self.run_end.time = Some(time),
            },
            ItemId::Load(id) => {
                let index = self.position(id).ok_or(SessionError::UnknownItem(item))?;
                let updated = self.loads[index].with_edge(edge, time);
                self.loads[index] = updated;
            }
        }
        debug!(item = %item, edge = %edge, time, "marked time");
        Ok(())
    }

    /// Mark an edge of whichever row is selected.
    pub fn mark_selected(&mut self, edge: Edge, time: f64) -> Result<ItemId, SessionError> {
        let item = self.selected_item();
        self.mark_time(item, edge, time)?;
        Ok(item)
    }

    /// Mark an edge of the current load.
    ///
    /// The current load is the selected one, or the last load when the run
    /// is selected. With no loads at all, load #1 is created first.
    pub fn mark_current_load(&mut self, edge: Edge, time: f64) -> Result<LoadId, SessionError> {
        let time = checked_time(time)?;
        let id = match self.current_load() {
            Some(id) => id,
            None => self.add_load(),
        };
        self.mark_time(ItemId::Load(id), edge, time)?;
        Ok(id)
    }

    /// Append an empty load and select it.
    pub fn add_load(&mut self) -> LoadId {
        let id = LoadId(self.next_id);
        self.next_id += 1;
        self.loads.push(Load::new(id));
        self.selected = self.loads.len();
        info!(load = %id, count = self.loads.len(), "added load");
        id
    }

    /// Remove a load by identity.
    ///
    /// Deleting the selected load selects the new last load (or the run when
    /// none remain). Deleting a load above the selection keeps the same row
    /// selected.
    pub fn delete_load(&mut self, id: LoadId) -> Result<Load, SessionError> {
        let position = self
            .position(id)
            .ok_or(SessionError::UnknownItem(ItemId::Load(id)))?;
        let item_index = position + 1;

        let removed = self.loads.remove(position);
        let selected = if self.selected == item_index {
            self.loads.len()
        } else if item_index < self.selected {
            self.selected - 1
        } else {
            self.selected
        };
        self.selected = selected.min(self.loads.len());

        info!(load = %id, remaining = self.loads.len(), "deleted load");
        Ok(removed)
    }

    pub fn select(&mut self, item: ItemId) -> Result<(), SessionError> {
        self.selected = match item {
            ItemId::Run => 0,
            ItemId::Load(id) => self.position(id).ok_or(SessionError::UnknownItem(item))? + 1,
        };
        Ok(())
    }

    /// Directly edit a run marker's raw time; `None` clears it.
    pub fn set_run_time(&mut self, edge: Edge, time: Option<f64>) -> Result<(), SessionError> {
        let time = time.map(checked_time).transpose()?;
        match edge {
            Edge::Start => self.run_start.time = time,
            Edge::End => self.run_end.time = time,
        }
        Ok(())
    }

    /// Directly edit a run marker's offset. Offsets may be negative.
    pub fn set_run_offset(&mut self, edge: Edge, offset: f64) -> Result<(), SessionError> {
        let offset = checked_offset(offset)?;
        match edge {
            Edge::Start => self.run_start.offset = offset,
            Edge::End => self.run_end.offset = offset,
        }
        debug!(edge = %edge, offset, "set run offset");
        Ok(())
    }

    pub fn set_fps(&mut self, fps: u32) -> Result<(), SessionError> {
        self.fps = FrameRate::new(fps)?;
        Ok(())
    }

    pub fn set_video_id(&mut self, video_id: Option<String>) {
        self.video_id = video_id.filter(|id| !id.is_empty());
    }

    pub fn set_auto_advance(&mut self, enabled: bool) {
        self.auto_advance = enabled;
    }

    // === Auto advance ===

    /// Whether completing the last row should open a new load.
    ///
    /// True only when auto advance is enabled, the selected row is the last
    /// load, that load is complete, and it validates without error against
    /// its siblings and the current run boundaries.
    pub fn should_auto_advance(&self) -> bool {
        if !self.auto_advance || self.loads.is_empty() || self.selected != self.loads.len() {
            return false;
        }
        let last = &self.loads[self.loads.len() - 1];
        last.is_complete()
            && self
                .load_status(last.id)
                .map_or(false, |status| !status.has_error)
    }

    /// Append and select a new load if [`Self::should_auto_advance`] holds.
    pub fn advance(&mut self) -> Option<LoadId> {
        if !self.should_auto_advance() {
            return None;
        }
        let id = self.add_load();
        info!(load = %id, "auto-advanced to new load");
        Some(id)
    }
}

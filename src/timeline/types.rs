//! Timeline type definitions
//!
//! The event vocabulary a playback session consumes: typed, timestamped
//! events over clip and word indices, held in a time-sorted [`Timeline`].

use serde::Serialize;

/// What happened at a point on the timeline.
///
/// `WordEnd` marks the end of a word's natural (speech) duration;
/// `HighlightEnd` marks the end of its visual highlight, which the duration
/// policy may place earlier or later. Consumers that only track "current
/// word" can ignore `WordEnd` and clear on `HighlightEnd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    ClipStart,
    ClipEnd,
    WordStart,
    WordEnd,
    HighlightEnd,
}

impl EventKind {
    /// Tie-break rank for events sharing a timestamp: ending states release
    /// first, then a clip starts before its own first word.
    pub(crate) fn rank(self) -> u8 {
        match self {
            EventKind::ClipEnd => 0,
            EventKind::HighlightEnd => 1,
            EventKind::WordEnd => 2,
            EventKind::ClipStart => 3,
            EventKind::WordStart => 4,
        }
    }
}

/// A single timed event.
///
/// `clip_index` refers into the project's clip list as it was at build time;
/// `word_index` is present only for word-level kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEvent {
    pub time: f64,
    pub kind: EventKind,
    pub clip_index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_index: Option<usize>,
}

/// An immutable, time-sorted sequence of events.
///
/// Built once per (project, settings) pair; a settings change means a whole
/// rebuild, never an in-place edit. Sorting is total and deterministic:
/// ascending time, then [`EventKind`] rank
/// (`ClipEnd < HighlightEnd < WordEnd < ClipStart < WordStart`), then clip
/// and word index.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    events: Vec<TimeEvent>,
}

impl Timeline {
    /// Sort invariant lives here: every construction path goes through this.
    pub(crate) fn from_events(mut events: Vec<TimeEvent>) -> Self {
        events.sort_by(|a, b| {
            a.time
                .total_cmp(&b.time)
                .then_with(|| a.kind.rank().cmp(&b.kind.rank()))
                .then_with(|| a.clip_index.cmp(&b.clip_index))
                .then_with(|| a.word_index.cmp(&b.word_index))
        });
        Self { events }
    }

    pub fn events(&self) -> &[TimeEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Timestamp of the final event; `0.0` for an empty timeline.
    pub fn end_time(&self) -> f64 {
        self.events.last().map_or(0.0, |e| e.time)
    }
}

//! Incremental event cursor
//!
//! A stateful reader over a sorted [`Timeline`]: advances a monotonic index
//! as the clock advances, yields due events exactly once, and repositions in
//! O(log n) on seek without retroactively firing skipped events.

use log::trace;

use super::types::{EventKind, TimeEvent, Timeline};

/// Consumer-side callbacks, one per event kind.
///
/// All methods have empty default bodies so a consumer implements only what
/// it draws. For visual purposes a word is active from `on_word_start` until
/// the next `on_word_start` or its `on_highlight_end`, whichever the
/// consumer's display rule prefers; `on_word_end` marks the end of the
/// natural speech duration independently.
pub trait TimelineObserver {
    fn on_clip_start(&mut self, _clip_index: usize) {}
    fn on_clip_end(&mut self, _clip_index: usize) {}
    fn on_word_start(&mut self, _clip_index: usize, _word_index: usize) {}
    fn on_word_end(&mut self, _clip_index: usize, _word_index: usize) {}
    fn on_highlight_end(&mut self, _clip_index: usize, _word_index: usize) {}
}

impl TimeEvent {
    /// Route this event to the matching observer callback.
    pub fn dispatch(&self, observer: &mut dyn TimelineObserver) {
        match (self.kind, self.word_index) {
            (EventKind::ClipStart, _) => observer.on_clip_start(self.clip_index),
            (EventKind::ClipEnd, _) => observer.on_clip_end(self.clip_index),
            (EventKind::WordStart, Some(w)) => observer.on_word_start(self.clip_index, w),
            (EventKind::WordEnd, Some(w)) => observer.on_word_end(self.clip_index, w),
            (EventKind::HighlightEnd, Some(w)) => observer.on_highlight_end(self.clip_index, w),
            // Word-level kind without an index: nothing to report.
            _ => {}
        }
    }
}

/// Position marker into a sorted timeline.
///
/// The cursor holds no reference to the timeline; the driver that owns both
/// passes the timeline into each call. One cursor per playback session,
/// reset or re-seeked whenever the timeline is rebuilt.
#[derive(Debug, Clone, Default)]
pub struct EventCursor {
    next_index: usize,
}

impl EventCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next event the cursor would consider.
    pub fn position(&self) -> usize {
        self.next_index
    }

    /// Yield every event in `[previous_time, current_time)`, in order,
    /// exactly once over the cursor's lifetime (absent a seek).
    ///
    /// Events older than `previous_time` were due in a window the caller
    /// never consumed (a forward clock jump); they are skipped without
    /// firing (lossy catch-up, by contract). Events at or after
    /// `current_time` are left for a later call. A backward or empty window
    /// (`current_time <= previous_time`) yields nothing and consumes
    /// nothing, which is how small backward resyncs of an external clock are
    /// tolerated; a large regression calls for [`EventCursor::seek`].
    ///
    /// The returned slice is a contiguous run of the timeline: stale events
    /// can only be a prefix of the scan, so what fires is always
    /// `timeline[first..next]`.
    pub fn process_events<'t>(
        &mut self,
        timeline: &'t Timeline,
        previous_time: f64,
        current_time: f64,
    ) -> &'t [TimeEvent] {
        if current_time <= previous_time {
            return &[];
        }

        let events = timeline.events();

        while self.next_index < events.len() && events[self.next_index].time < previous_time {
            trace!(
                "skipping stale event at {:.3}s (window starts {:.3}s)",
                events[self.next_index].time,
                previous_time
            );
            self.next_index += 1;
        }

        let first_due = self.next_index;
        while self.next_index < events.len() && events[self.next_index].time < current_time {
            self.next_index += 1;
        }

        &events[first_due..self.next_index]
    }

    /// Reposition to the first event with `time >= target_time`.
    ///
    /// Fires nothing, not even events whose span logically covers
    /// `target_time`. The caller derives display state for the landed-on
    /// position by direct lookup instead (see
    /// [`Project::word_index_at`](crate::project::Project::word_index_at));
    /// the cursor's contract is strictly "fire events discovered by forward
    /// scanning". Targets before the first event resolve to index 0, targets
    /// after the last to `len`.
    pub fn seek(&mut self, timeline: &Timeline, target_time: f64) {
        self.next_index = timeline
            .events()
            .partition_point(|e| e.time < target_time);
        trace!(
            "seek to {:.3}s -> event index {}/{}",
            target_time,
            self.next_index,
            timeline.len()
        );
    }

    /// Back to the start of the timeline.
    pub fn reset(&mut self) {
        self.next_index = 0;
    }
}

//! # Playback Session
//!
//! The driver that owns one timeline + cursor pair for the lifetime of a
//! playback run and feeds the cursor a clock.
//!
//! ## Purpose
//! The scheduling core (`timeline`) is pure and clock-agnostic; this module
//! supplies the policy around it:
//! - **Snapshot at build time** - the session clones the project when it is
//!   created, so later edits to the live project never invalidate a running
//!   timeline. Picking up edits is an explicit new session (or rebuild).
//! - **Clock modes** - a free-running software timer or an external
//!   (decoded-audio) position, selected at runtime by [`ClockMode`] so both
//!   paths are testable from one binary.
//! - **Look-ahead** - render-latency compensation shifts the query window,
//!   never the timeline itself.
//! - **Display state** - current clip/word, maintained incrementally from
//!   fired events and recomputed by direct lookup after a seek.
//!
//! ## Concurrency Model
//! Single-threaded, cooperative, tick-driven. The session performs no
//! blocking and no I/O; the only mutating entry points are the tick calls,
//! [`PlaybackSession::seek_to`], and
//! [`PlaybackSession::update_settings`], all invoked from the driver's tick
//! loop. A rebuild swaps in a whole new timeline, so no reader ever sees a
//! half-built one. Stopping playback just stops ticking; there is no
//! in-flight work to cancel.

use log::debug;
use serde::Serialize;

use crate::project::Project;
use crate::settings::HighlightSettings;
use crate::timeline::{build_timeline, EventCursor, EventKind, TimeEvent, Timeline};

/// Where the playback clock comes from, chosen at session creation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClockMode {
    /// Software timer: each [`PlaybackSession::tick`] advances the clock by
    /// `tick_interval` seconds (~16 ms for a 60 Hz driver).
    FreeRunning { tick_interval: f64 },
    /// Caller-supplied position (typically a decoded-audio playhead) via
    /// [`PlaybackSession::tick_at`]. May stutter or step backward.
    External,
}

/// What the presentation layer should be showing right now.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub clip_index: Option<usize>,
    pub word_index: Option<usize>,
    pub running: bool,
}

/// One playback run over a project snapshot.
pub struct PlaybackSession {
    project: Project,
    settings: HighlightSettings,
    timeline: Timeline,
    cursor: EventCursor,
    clock_mode: ClockMode,
    current_time: f64,
    /// Upper edge of the last consumed query window (look-ahead included).
    /// Monotonic except across an explicit seek.
    last_query: f64,
    running: bool,
    current_clip: Option<usize>,
    current_word: Option<usize>,
}

impl PlaybackSession {
    /// Create a session positioned at time zero, not yet running.
    ///
    /// The project is cloned here, which is the snapshot contract: mutating the
    /// source project afterwards does not change this session's timeline.
    pub fn new(project: &Project, settings: HighlightSettings, clock_mode: ClockMode) -> Self {
        let project = project.clone();
        let timeline = build_timeline(&project, &settings);
        Self {
            project,
            settings,
            timeline,
            cursor: EventCursor::new(),
            clock_mode,
            current_time: 0.0,
            last_query: 0.0,
            running: false,
            current_clip: None,
            current_word: None,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// The session's own snapshot of the project.
    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn settings(&self) -> &HighlightSettings {
        &self.settings
    }

    pub fn display_state(&self) -> DisplayState {
        DisplayState {
            clip_index: self.current_clip,
            word_index: self.current_word,
            running: self.running,
        }
    }

    /// Advance the free-running clock by one tick interval and return the
    /// events that fired. No-op (empty) when stopped or in external mode.
    ///
    /// The session stops itself once the clock has passed both the project's
    /// total duration and the last timeline event.
    pub fn tick(&mut self) -> Vec<TimeEvent> {
        let interval = match self.clock_mode {
            ClockMode::FreeRunning { tick_interval } => tick_interval,
            ClockMode::External => {
                debug!("tick() ignored: session uses an external clock");
                return Vec::new();
            }
        };
        if !self.running {
            return Vec::new();
        }

        let fired = self.advance_to(self.current_time + interval);

        let end = self.project.total_duration().max(self.timeline.end_time());
        if self.current_time >= end {
            debug!("playback finished at {:.3}s", self.current_time);
            self.running = false;
        }
        fired
    }

    /// Feed an external clock position and return the events that fired.
    /// No-op (empty) when stopped or in free-running mode.
    ///
    /// A position slightly behind the last one (an audio-engine stutter) is
    /// tolerated as an empty scan; a regression beyond one look-ahead window
    /// realigns with an internal [`PlaybackSession::seek_to`] instead of
    /// silently consuming the regressed span.
    pub fn tick_at(&mut self, position: f64) -> Vec<TimeEvent> {
        if !matches!(self.clock_mode, ClockMode::External) {
            debug!("tick_at() ignored: session uses a free-running clock");
            return Vec::new();
        }
        if !self.running {
            return Vec::new();
        }

        if position + self.regression_threshold() < self.current_time {
            debug!(
                "external clock moved back {:.3}s -> {:.3}s; realigning",
                self.current_time, position
            );
            self.seek_to(position);
            return Vec::new();
        }

        self.advance_to(position)
    }

    /// Jump to an arbitrary time. Fires no events; display state for the
    /// landed-on position comes from direct project lookup instead.
    pub fn seek_to(&mut self, time: f64) {
        self.cursor.seek(&self.timeline, time);
        self.current_time = time;
        self.last_query = time;
        self.current_clip = self.project.clip_index_at(time);
        self.current_word = self
            .current_clip
            .and_then(|clip| self.project.word_index_at(clip, time));
    }

    /// Swap in new settings: whole-timeline rebuild from the same snapshot,
    /// then realign the cursor on the current clock position.
    ///
    /// The query window is left where it was, so events the old timeline
    /// already delivered inside the look-ahead margin are skipped rather
    /// than re-fired.
    pub fn update_settings(&mut self, settings: HighlightSettings) {
        self.settings = settings;
        self.timeline = build_timeline(&self.project, &self.settings);
        self.cursor.seek(&self.timeline, self.current_time);
        debug!(
            "rebuilt timeline ({} events), realigned at {:.3}s",
            self.timeline.len(),
            self.current_time
        );
    }

    fn look_ahead_secs(&self) -> f64 {
        self.settings.look_ahead_ms / 1000.0
    }

    /// Backward motion below this is an engine stutter, above it a real jump.
    fn regression_threshold(&self) -> f64 {
        self.look_ahead_secs().max(0.05)
    }

    fn advance_to(&mut self, new_time: f64) -> Vec<TimeEvent> {
        let query = new_time + self.look_ahead_secs();
        let fired: Vec<TimeEvent> = self
            .cursor
            .process_events(&self.timeline, self.last_query, query)
            .to_vec();
        self.current_time = new_time;
        self.last_query = self.last_query.max(query);

        for event in &fired {
            self.apply_event(event);
        }
        fired
    }

    /// Incremental display-state rule: a word is current from its WordStart
    /// until the next WordStart or its HighlightEnd; WordEnd (natural speech
    /// end) does not clear the highlight on its own.
    fn apply_event(&mut self, event: &TimeEvent) {
        match event.kind {
            EventKind::ClipStart => {
                self.current_clip = Some(event.clip_index);
            }
            EventKind::ClipEnd => {
                if self.current_clip == Some(event.clip_index) {
                    self.current_clip = None;
                    self.current_word = None;
                }
            }
            EventKind::WordStart => {
                self.current_clip = Some(event.clip_index);
                self.current_word = event.word_index;
            }
            EventKind::HighlightEnd => {
                if self.current_clip == Some(event.clip_index)
                    && self.current_word == event.word_index
                {
                    self.current_word = None;
                }
            }
            EventKind::WordEnd => {}
        }
    }
}

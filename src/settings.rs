//! # Highlight Settings
//!
//! Configurable behavior for word highlighting: tempo-grid quantization and
//! the highlight-duration policy. Supports distinct use cases (natural
//! speech timing, rhythmic content quantized to a tempo, teleprompter
//! reading) through preset constructors.
//!
//! Both transforms are pure functions of the settings value:
//! - [`HighlightSettings::quantize_time`] snaps a time to the tempo grid
//! - [`HighlightSettings::highlight_duration`] decides how long a word's
//!   highlight stays visible
//!
//! Settings are immutable per timeline build; changing them requires a
//! whole-timeline rebuild (see [`PlaybackSession::update_settings`]).
//!
//! [`PlaybackSession::update_settings`]: crate::session::PlaybackSession::update_settings

use serde::{Deserialize, Serialize};

/// How long a word's highlight remains visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationMode {
    /// Use the word's natural duration (storytelling, audiobooks).
    #[default]
    Original,
    /// Natural duration, but never shorter than `minimum_duration`.
    Minimum,
    /// Every word highlighted for exactly `fixed_duration`.
    Fixed,
    /// Highlight until the next tempo-grid line after the word start.
    GridBased,
}

/// Settings for quantization and highlight duration.
///
/// `bpm > 0` is expected; a non-positive tempo (or a zero subdivision)
/// silently disables quantization rather than producing a degenerate grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightSettings {
    pub quantize_enabled: bool,
    /// Tempo in beats per minute.
    pub bpm: f64,
    /// Grid divisor: 1 = whole note, 2 = half, 4 = quarter, 8 = eighth.
    pub subdivision: u32,
    pub duration_mode: DurationMode,
    /// Minimum highlight duration in seconds (used by `Minimum`).
    pub minimum_duration: f64,
    /// Uniform highlight duration in seconds (used by `Fixed`).
    pub fixed_duration: f64,
    /// Render-latency compensation applied by the playback driver, never by
    /// the scheduler itself.
    pub look_ahead_ms: f64,
}

impl Default for HighlightSettings {
    fn default() -> Self {
        Self {
            quantize_enabled: false,
            bpm: 120.0,
            subdivision: 4,
            duration_mode: DurationMode::Original,
            minimum_duration: 0.0,
            fixed_duration: 0.5,
            look_ahead_ms: 25.0,
        }
    }
}

impl HighlightSettings {
    /// Natural preset - original timing, no quantization.
    ///
    /// Best for: storytelling, audiobooks, natural speech.
    pub fn natural() -> Self {
        Self::default()
    }

    /// Readable preset - natural timing with a 200 ms minimum so short words
    /// stay visible long enough to read.
    pub fn readable() -> Self {
        Self {
            duration_mode: DurationMode::Minimum,
            minimum_duration: 0.2,
            ..Self::default()
        }
    }

    /// Rhythmic preset - word starts quantized to the tempo grid, highlights
    /// held to the next subdivision boundary.
    ///
    /// Best for: music, rhythmic content, synchronized timing.
    pub fn rhythmic(bpm: f64, subdivision: u32) -> Self {
        Self {
            quantize_enabled: true,
            bpm,
            subdivision,
            duration_mode: DurationMode::GridBased,
            ..Self::default()
        }
    }

    /// Teleprompter preset - 300 ms minimum for comfortable reading.
    ///
    /// Best for: teleprompter, voice acting, scripts.
    pub fn teleprompter() -> Self {
        Self {
            duration_mode: DurationMode::Minimum,
            minimum_duration: 0.3,
            ..Self::default()
        }
    }

    /// Fixed-duration preset - every word highlighted for the same length.
    ///
    /// Best for: consistent timing, educational content.
    pub fn fixed(duration: f64) -> Self {
        Self {
            duration_mode: DurationMode::Fixed,
            fixed_duration: duration,
            ..Self::default()
        }
    }

    /// Grid spacing in seconds, or `0.0` when quantization is effectively
    /// disabled (toggle off, non-positive tempo, or zero subdivision).
    pub fn snap_interval(&self) -> f64 {
        if !self.quantize_enabled || self.bpm <= 0.0 || self.subdivision == 0 {
            return 0.0;
        }
        let beat_duration = 60.0 / self.bpm;
        beat_duration / self.subdivision as f64
    }

    /// Snap a time to the nearest grid line. Identity when quantization is
    /// disabled. Idempotent for all finite inputs.
    pub fn quantize_time(&self, time: f64) -> f64 {
        let interval = self.snap_interval();
        if interval <= 0.0 {
            return time;
        }
        (time / interval).round() * interval
    }

    /// Highlight duration for a word, given its natural duration (time until
    /// the next word or the clip end) and its resolved start time.
    pub fn highlight_duration(&self, natural_duration: f64, word_start: f64) -> f64 {
        match self.duration_mode {
            DurationMode::Original => natural_duration,
            DurationMode::Minimum => natural_duration.max(self.minimum_duration),
            DurationMode::Fixed => self.fixed_duration,
            DurationMode::GridBased => {
                let interval = self.snap_interval();
                if interval <= 0.0 {
                    // No usable grid: behave like Original.
                    return natural_duration;
                }
                // Smallest grid line strictly after the word start, so a word
                // sitting exactly on a grid line still gets a full
                // subdivision of highlight.
                let mut next_grid = (word_start / interval).ceil() * interval;
                if next_grid <= word_start {
                    next_grid += interval;
                }
                next_grid - word_start
            }
        }
    }
}

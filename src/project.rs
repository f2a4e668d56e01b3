//! # Project Data Model
//!
//! This module defines the content a timeline is scheduled from: a project
//! of time-ordered clips, each holding time-ordered words.
//!
//! ## Type Hierarchy
//! ```text
//! Project
//!   ├── name: String
//!   └── Vec<Clip>
//!         ├── id: String
//!         ├── start_time / end_time (seconds, absolute)
//!         └── Vec<Word>
//!               ├── text: String (opaque to scheduling)
//!               └── relative_time: f64 (seconds from clip start)
//! ```
//!
//! ## Key Concepts
//!
//! ### Absolute time
//! A word's position on the playback clock is `clip.start_time +
//! word.relative_time`. Words never carry absolute times themselves, so a
//! clip can be moved by editing two fields.
//!
//! ### Ordering
//! [`Project::add_clip`] keeps clips sorted by start time, which is what
//! display lookups expect. The timeline builder does not rely on this: a
//! project deserialized from an arbitrary description schedules correctly
//! with clips in any order.
//!
//! ## Related Modules
//! - `timeline` - Builds the event timeline from these types
//! - `session` - Snapshots a `Project` for the lifetime of a playback run

use serde::{Deserialize, Serialize};

use crate::error::WordsyncError;

/// A text token with a time offset relative to its clip's start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub text: String,
    #[serde(default)]
    pub relative_time: f64,
}

impl Word {
    pub fn new(text: impl Into<String>, relative_time: f64) -> Self {
        Self {
            text: text.into(),
            relative_time,
        }
    }
}

/// A time-bounded unit (a line, a phrase) containing an ordered set of words.
///
/// `end_time > start_time` is expected but not guaranteed by upstream
/// producers; the scheduler clamps rather than rejects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clip {
    #[serde(default)]
    pub id: String,
    pub start_time: f64,
    pub end_time: f64,
    #[serde(default)]
    pub words: Vec<Word>,
}

impl Clip {
    pub fn new(id: impl Into<String>, start_time: f64, end_time: f64) -> Self {
        Self {
            id: id.into(),
            start_time,
            end_time,
            words: Vec::new(),
        }
    }

    pub fn with_words(mut self, words: Vec<Word>) -> Self {
        self.words = words;
        self
    }

    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Absolute time of a word, or the clip start for an out-of-range index.
    pub fn word_absolute_time(&self, word_index: usize) -> f64 {
        match self.words.get(word_index) {
            Some(word) => self.start_time + word.relative_time,
            None => self.start_time,
        }
    }

    /// All word texts joined with single spaces.
    pub fn full_text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// The complete set of clips a playback session schedules against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub clips: Vec<Clip>,
}

impl Project {
    /// Deserialize a project from a YAML description.
    ///
    /// # Example
    /// ```rust
    /// use wordsync::Project;
    ///
    /// let source = r#"
    /// name: Demo
    /// clips:
    ///   - id: line-1
    ///     start_time: 0.0
    ///     end_time: 2.0
    ///     words:
    ///       - { text: hello, relative_time: 0.0 }
    ///       - { text: world, relative_time: 1.0 }
    /// "#;
    /// let project = Project::from_yaml(source)?;
    /// assert_eq!(project.clips[0].full_text(), "hello world");
    /// # Ok::<(), wordsync::WordsyncError>(())
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, WordsyncError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Add a clip, keeping clips ordered by start time.
    pub fn add_clip(&mut self, clip: Clip) {
        self.clips.push(clip);
        self.clips
            .sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }

    /// End time of the last-ending clip; `0.0` for an empty project.
    pub fn total_duration(&self) -> f64 {
        self.clips
            .iter()
            .map(|c| c.end_time)
            .fold(0.0, f64::max)
    }

    /// Index of the clip containing `time` (`start <= time < end`), if any.
    pub fn clip_index_at(&self, time: f64) -> Option<usize> {
        self.clips
            .iter()
            .position(|c| time >= c.start_time && time < c.end_time)
    }

    /// Index of the word active at `time` within a clip: the last word whose
    /// absolute start is `<= time`. `None` before the first word or for an
    /// out-of-range clip index.
    ///
    /// This is the direct display-state lookup used after a seek, where no
    /// events have fired to establish the current word.
    pub fn word_index_at(&self, clip_index: usize, time: f64) -> Option<usize> {
        let clip = self.clips.get(clip_index)?;
        clip.words
            .iter()
            .rposition(|w| time >= clip.start_time + w.relative_time)
    }
}

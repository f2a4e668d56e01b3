//! # Timeline Module
//!
//! Convert a project into a sorted event stream and replay it incrementally
//! against a playback clock.
//!
//! ## Purpose
//! This module is the scheduling core: it turns static, possibly-irregular
//! per-word timestamps into a deterministic event stream, then reads that
//! stream forward in variable-size steps, tolerating clock stutter and
//! arbitrary repositioning.
//!
//! ## Sub-modules
//! - `types` - EventKind, TimeEvent, Timeline definitions
//! - `builder` - Timeline construction (quantization + duration policy)
//! - `cursor` - Incremental reader: process_events, seek, observer dispatch
//!
//! ## Key Types
//! - [`Timeline`] - immutable, time-sorted event sequence
//! - [`TimeEvent`] / [`EventKind`] - one timestamped occurrence
//! - [`EventCursor`] - monotonic position marker with O(log n) seek
//! - [`TimelineObserver`] - per-kind callback surface for consumers
//!
//! ## Entry Point
//! [`build_timeline()`] - build the event stream for a (project, settings)
//! pair
//!
//! ## Example
//! ```rust
//! use wordsync::{build_timeline, Clip, EventCursor, HighlightSettings, Project, Word};
//!
//! let mut project = Project::default();
//! project.add_clip(
//!     Clip::new("line-1", 0.0, 4.0).with_words(vec![
//!         Word::new("hello", 0.0),
//!         Word::new("world", 2.0),
//!     ]),
//! );
//!
//! let timeline = build_timeline(&project, &HighlightSettings::natural());
//! let mut cursor = EventCursor::new();
//!
//! // One 60 Hz tick's worth of playback starting at t=0.
//! let fired = cursor.process_events(&timeline, 0.0, 0.016);
//! assert_eq!(fired.len(), 2); // ClipStart and the first WordStart
//! ```
//!
//! ## Replay Contract
//! Data flows one direction: project + settings → builder → immutable
//! timeline → cursor → fired events. The cursor fires each event exactly
//! once while the clock moves forward; a seek repositions without firing,
//! and display state at the seek target is the caller's direct lookup.
//!
//! ## Related Modules
//! - `project` / `settings` - builder inputs
//! - `session` - owns one timeline + cursor per playback run

mod builder;
mod cursor;
mod types;


pub use builder::build_timeline;
pub use cursor::{EventCursor, TimelineObserver};
pub use types::{EventKind, TimeEvent, Timeline};

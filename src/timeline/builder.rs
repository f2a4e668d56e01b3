//! Timeline construction
//!
//! Converts a project snapshot plus highlight settings into a sorted,
//! deterministic event stream. Clips are processed independently (in
//! whatever order the project holds them) and the full collection is sorted
//! once at the end.

use log::debug;

use super::types::{EventKind, TimeEvent, Timeline};
use crate::project::{Clip, Project};
use crate::settings::HighlightSettings;

/// Build the highlight timeline for a project.
///
/// Per clip:
/// 1. `ClipStart` at the (possibly quantized) clip start.
/// 2. Word starts resolved in sequence: quantized when enabled, then floored
///    at the previous resolved start so quantization can never reorder words
///    within a clip.
/// 3. Per word: `WordStart` at its resolved start, `HighlightEnd` after the
///    policy-computed highlight duration, `WordEnd` after its natural
///    duration (distance to the next resolved start, or the clip end).
/// 4. `ClipEnd` at the raw clip end; clip boundaries are structural, not
///    rhythmic, and are never snapped.
///
/// An empty project yields an empty timeline; a clip with no words still
/// emits its start/end pair. Negative durations from malformed input clamp
/// to zero silently.
pub fn build_timeline(project: &Project, settings: &HighlightSettings) -> Timeline {
    let mut events = Vec::new();

    for (clip_index, clip) in project.clips.iter().enumerate() {
        push_clip_events(&mut events, clip, clip_index, settings);
    }

    debug!(
        "built timeline: {} events from {} clips (quantize: {})",
        events.len(),
        project.clips.len(),
        settings.quantize_enabled
    );

    Timeline::from_events(events)
}

fn push_clip_events(
    events: &mut Vec<TimeEvent>,
    clip: &Clip,
    clip_index: usize,
    settings: &HighlightSettings,
) {
    let clip_start = settings.quantize_time(clip.start_time);

    events.push(TimeEvent {
        time: clip_start,
        kind: EventKind::ClipStart,
        clip_index,
        word_index: None,
    });

    // Resolve every word's start first. The floor starts at the clip start
    // and advances to each resolved start, which keeps starts non-decreasing
    // under quantization and makes the later duration pass a simple
    // difference of neighbors.
    let mut starts = Vec::with_capacity(clip.words.len());
    let mut floor = clip_start;
    for word in &clip.words {
        let absolute = clip.start_time + word.relative_time;
        let resolved = if settings.quantize_enabled {
            settings.quantize_time(absolute).max(floor)
        } else {
            absolute
        };
        starts.push(resolved);
        floor = resolved;
    }

    for word_index in 0..starts.len() {
        let word_start = starts[word_index];
        let next_start = starts
            .get(word_index + 1)
            .copied()
            .unwrap_or(clip.end_time);
        let natural_duration = (next_start - word_start).max(0.0);
        let highlight_duration = settings.highlight_duration(natural_duration, word_start);

        events.push(TimeEvent {
            time: word_start,
            kind: EventKind::WordStart,
            clip_index,
            word_index: Some(word_index),
        });
        events.push(TimeEvent {
            time: word_start + highlight_duration,
            kind: EventKind::HighlightEnd,
            clip_index,
            word_index: Some(word_index),
        });
        events.push(TimeEvent {
            time: word_start + natural_duration,
            kind: EventKind::WordEnd,
            clip_index,
            word_index: Some(word_index),
        });
    }

    events.push(TimeEvent {
        time: clip.end_time,
        kind: EventKind::ClipEnd,
        clip_index,
        word_index: None,
    });
}

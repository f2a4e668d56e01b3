pub mod error;
pub mod project;
pub mod session;
pub mod settings;
pub mod timeline;

pub use error::WordsyncError;
pub use project::{Clip, Project, Word};
pub use session::{ClockMode, DisplayState, PlaybackSession};
pub use settings::{DurationMode, HighlightSettings};
pub use timeline::{build_timeline, EventCursor, EventKind, TimeEvent, Timeline, TimelineObserver};

/// Build a highlight timeline straight from a YAML project description.
/// This is the main entry point for one-shot consumers.
pub fn schedule(source: &str, settings: &HighlightSettings) -> Result<Timeline, WordsyncError> {
    let project = Project::from_yaml(source)?;
    Ok(build_timeline(&project, settings))
}

/// Open a playback session from a YAML project description.
pub fn open_session(
    source: &str,
    settings: HighlightSettings,
    clock_mode: ClockMode,
) -> Result<PlaybackSession, WordsyncError> {
    let project = Project::from_yaml(source)?;
    Ok(PlaybackSession::new(&project, settings, clock_mode))
}

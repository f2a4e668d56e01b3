//! # Error Types
//!
//! This module defines the error type for the wordsync library.
//!
//! The scheduling core itself never fails: malformed timing data is clamped
//! and degraded gracefully (empty projects build empty timelines, invalid
//! tempo settings disable quantization, negative durations clamp to zero).
//! Errors exist only at the project-description boundary, where a YAML
//! description is turned into a [`Project`](crate::project::Project).
//!
//! ## Usage
//! ```rust
//! use wordsync::{Project, WordsyncError};
//!
//! match Project::from_yaml("clips: [") {
//!     Ok(project) => println!("{} clips", project.clips.len()),
//!     Err(WordsyncError::ProjectDescription(e)) => eprintln!("Bad description: {}", e),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WordsyncError {
    /// Malformed YAML project description.
    ///
    /// Occurs when a project description cannot be deserialized.
    #[error("Invalid project description: {0}")]
    ProjectDescription(#[from] serde_yaml::Error),

    /// A structurally unusable project.
    ///
    /// Occurs when a description deserializes but cannot be scheduled in a
    /// meaningful way (e.g., the caller requires a non-empty project).
    ///
    /// # Example
    /// ```
    /// # use wordsync::WordsyncError;
    /// let err = WordsyncError::InvalidProject {
    ///     message: "project has no clips".to_string(),
    /// };
    /// assert_eq!(err.to_string(), "Invalid project: project has no clips");
    /// ```
    #[error("Invalid project: {message}")]
    InvalidProject { message: String },
}

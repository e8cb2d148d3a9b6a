//! Error types for the bundled viewer.
//!
//! The simulation core has no failure modes (every input is valid by
//! construction), so errors only surface when standing up the host window.

use std::fmt;

/// Errors that can occur while running the viewer.
#[derive(Debug)]
pub enum ViewerError {
    /// The host event loop or window could not be created.
    Host(eframe::Error),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::Host(e) => write!(f, "Failed to start the viewer window: {}", e),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::Host(e) => Some(e),
        }
    }
}

impl From<eframe::Error> for ViewerError {
    fn from(e: eframe::Error) -> Self {
        ViewerError::Host(e)
    }
}

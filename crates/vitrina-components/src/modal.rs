//! Modal dialog controller.
//!
//! A modal becomes visible immediately and gains its "shown" class one frame
//! later so the CSS transition can engage; dismissal removes the class at
//! once and fully hides the panel only after the transition delay.

use serde::{Deserialize, Serialize};

/// Delay before the shown class is added after display, letting the browser
/// paint the hidden state first.
pub const SHOW_DELAY_MS: f64 = 10.0;

/// Fade-out transition time before the panel is un-rendered.
pub const CLOSE_DELAY_MS: f64 = 300.0;

/// Modal lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ModalPhase {
    /// Not rendered.
    #[default]
    Hidden,
    /// Displayed, waiting one frame for the shown class.
    Opening,
    /// Fully visible.
    Shown,
    /// Shown class removed, waiting out the fade transition.
    Closing,
}

/// DOM mutations requested by the modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ModalEffect {
    /// Render the panel (`display: flex`).
    Display,
    /// Add the body-level modal-open flag.
    AddBodyFlag,
    /// Add the "show" class to engage the CSS transition.
    AddShownClass,
    /// Remove the "show" class to start the fade-out.
    RemoveShownClass,
    /// Fully hide the panel (`display: none`).
    Hide,
    /// Release the body-level modal-open flag.
    RemoveBodyFlag,
    /// Pause any video inside the panel.
    PauseVideo,
}

/// Modal controller. One instance per dialog panel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Modal {
    phase: ModalPhase,
    deadline: Option<f64>,
}

impl Modal {
    /// Create a hidden modal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Whether the modal currently carries the shown class.
    #[must_use]
    pub const fn is_shown(&self) -> bool {
        matches!(self.phase, ModalPhase::Shown)
    }

    /// Open the modal. Ignored unless fully hidden.
    pub fn open(&mut self, now_ms: f64) -> Vec<ModalEffect> {
        if self.phase != ModalPhase::Hidden {
            return Vec::new();
        }
        self.phase = ModalPhase::Opening;
        self.deadline = Some(now_ms + SHOW_DELAY_MS);
        vec![ModalEffect::Display, ModalEffect::AddBodyFlag]
    }

    /// Request dismissal (close button, backdrop click, or Escape).
    /// Ignored while hidden or already closing.
    pub fn request_close(&mut self, now_ms: f64) -> Vec<ModalEffect> {
        match self.phase {
            ModalPhase::Shown | ModalPhase::Opening => {
                self.phase = ModalPhase::Closing;
                self.deadline = Some(now_ms + CLOSE_DELAY_MS);
                vec![ModalEffect::RemoveShownClass]
            }
            ModalPhase::Hidden | ModalPhase::Closing => Vec::new(),
        }
    }

    /// Advance deferred transitions. Call from timers or frame callbacks.
    pub fn tick(&mut self, now_ms: f64) -> Vec<ModalEffect> {
        let Some(deadline) = self.deadline else {
            return Vec::new();
        };
        if now_ms < deadline {
            return Vec::new();
        }
        self.deadline = None;
        match self.phase {
            ModalPhase::Opening => {
                self.phase = ModalPhase::Shown;
                vec![ModalEffect::AddShownClass]
            }
            ModalPhase::Closing => {
                self.phase = ModalPhase::Hidden;
                vec![
                    ModalEffect::Hide,
                    ModalEffect::RemoveBodyFlag,
                    ModalEffect::PauseVideo,
                ]
            }
            ModalPhase::Hidden | ModalPhase::Shown => Vec::new(),
        }
    }

    /// The next deadline this modal is waiting on, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<f64> {
        self.deadline
    }
}

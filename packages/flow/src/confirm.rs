//! # Confirmation gate
//!
//! One blocking modal, two modes. The mode is plain data: the UI renders whatever
//! mode the flow currently holds, and the flow decides what "accept" and "dismiss"
//! mean for it. There are no per-mode handlers to attach or detach.

/// What the confirmation modal is currently asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalMode {
    /// "Generate a token for this team?" before the token request goes out.
    Proceed { team: String },
    /// "Did you save it?" after a copy, before the token is cleared.
    AcknowledgeSave,
}

/// How the user closed the modal without accepting. All channels mean "No".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dismissal {
    Button,
    Overlay,
    Escape,
}

/// Icon hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalTone {
    Question,
    Warning,
}

impl ModalMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Proceed { .. } => "Confirm token generation",
            Self::AcknowledgeSave => "Have you saved your token?",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Proceed { team } => {
                format!("Are you sure you want to generate an API token for team \"{team}\"?")
            }
            Self::AcknowledgeSave => "The token will be cleared from this page and cannot be \
                 shown again. Make sure you have stored it somewhere safe."
                .to_string(),
        }
    }

    pub fn accept_label(&self) -> &'static str {
        match self {
            Self::Proceed { .. } => "Yes, generate",
            Self::AcknowledgeSave => "I have saved it",
        }
    }

    pub fn reject_label(&self) -> &'static str {
        match self {
            Self::Proceed { .. } => "No",
            Self::AcknowledgeSave => "Let me save it",
        }
    }

    pub fn tone(&self) -> ModalTone {
        match self {
            Self::Proceed { .. } => ModalTone::Question,
            Self::AcknowledgeSave => ModalTone::Warning,
        }
    }
}

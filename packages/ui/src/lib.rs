//! Shared UI for the portal: the login and token pages, their widgets, and the
//! glue that runs the `flow` reducers inside Dioxus.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const PORTAL_CSS: Asset = asset!("/assets/portal.css");

mod portal;
pub use portal::{use_portal, use_session, Portal, PortalProvider, SessionState};

mod platform;
pub use platform::BrowserPlatform;

pub mod driver;

mod gate_button;
pub use gate_button::GateButton;

mod outcome_banner;
pub use outcome_banner::OutcomeBanner;

mod confirm_modal;
pub use confirm_modal::ConfirmModal;

mod team_select;
pub use team_select::TeamSelect;

mod token_panel;
pub use token_panel::TokenPanel;

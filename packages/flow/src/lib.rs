//! # Flow crate: the portal's state machines, without a DOM
//!
//! Both pages of the portal are driven by a reducer: the current flow value and an
//! event go in, the next flow value and a list of effects come out. The UI keeps
//! the flow value in a signal, renders it, and hands effects to [`runtime`].
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`login`] | Login form: credentials → session endpoint → redirect |
//! | [`token`] | Token page: identity → teams → confirmed token → save acknowledgement |
//! | [`gate`] | Request gate shared by every trigger control |
//! | [`reporter`] | The transient error/success notice |
//! | [`confirm`] | Confirmation modal modes |
//! | [`restriction`] | Administrative-team predicate (UX only, not authorization) |
//! | [`config`] | `portal.toml` |
//! | [`runtime`] | Executes effects over [`api::PortalApi`] and a [`runtime::Platform`] |

pub mod config;
pub mod confirm;
pub mod gate;
pub mod login;
pub mod messages;
pub mod reporter;
pub mod restriction;
pub mod runtime;
pub mod task;
pub mod token;

pub use config::PortalConfig;
pub use confirm::{Dismissal, ModalMode, ModalTone};
pub use gate::{
    GateLabels, GatePhase, RequestGate, COPY_LABELS, FETCH_LABELS, GENERATE_LABELS, LOGIN_LABELS,
};
pub use login::{LoginEffect, LoginEvent, LoginFlow};
pub use reporter::{Notice, NoticeKind, OutcomeReporter};
pub use restriction::{is_restricted, RestrictionPolicy};
pub use runtime::{run_login_effect, run_token_effect, Platform};
pub use task::RequestId;
pub use token::{Team, TokenEffect, TokenEvent, TokenFlow, TokenStage};

//! # Token flow reducer
//!
//! The three-stage pipeline of the token page:
//!
//! 1. **Team lookup**: `Idle -> Fetching -> {Ready, Failed}`. An empty team list
//!    goes back to `Idle`.
//! 2. **Selection**: restricted teams are refused on selection and again when
//!    Generate is pressed.
//! 3. **Generation**: `Idle -> AwaitingConfirmation -> Generating -> {Shown, Failed}`,
//!    followed by copy and the save acknowledgement that clears the token.
//!
//! Like the login flow, [`update`] maps `(&flow, event)` to a new flow value plus
//! effects. Network responses and timers come back as events tagged with the
//! request id or epoch they were issued for, and are dropped when the flow has
//! moved on.

use std::time::Duration;

use api::{ApiError, TeamsResponse, TokenResponse};

use crate::config::PortalConfig;
use crate::confirm::{Dismissal, ModalMode};
use crate::gate::RequestGate;
use crate::messages;
use crate::reporter::{NoticeId, OutcomeReporter};
use crate::task::{RequestId, RequestSeq};

/// A team offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    /// Derived from the restriction policy; never sent by the server.
    pub restricted: bool,
}

/// Identity the team list was resolved for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TeamLookup {
    #[default]
    Idle,
    /// `username` is the trimmed name the lookup was sent for.
    Fetching {
        request: RequestId,
        username: String,
    },
    Ready {
        teams: Vec<Team>,
    },
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TokenStage {
    #[default]
    Idle,
    AwaitingConfirmation {
        team: String,
    },
    Generating {
        team: String,
        request: RequestId,
    },
    Shown {
        team: String,
        token: String,
        epoch: u64,
    },
    Failed,
}

/// The gated controls of the token page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Fetch,
    Generate,
    Copy,
}

/// Whole state of the token page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenFlow {
    /// Current content of the identity input.
    pub username: String,
    pub identity: Option<Identity>,
    pub lookup: TeamLookup,
    pub selected: Option<String>,
    pub stage: TokenStage,
    pub modal: Option<ModalMode>,
    pub fetch_gate: RequestGate,
    pub generate_gate: RequestGate,
    pub copy_gate: RequestGate,
    pub notices: OutcomeReporter,
    requests: RequestSeq,
    token_epoch: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenEvent {
    UsernameEdited(String),
    FetchTeams,
    TeamsLoaded {
        request: RequestId,
        result: Result<TeamsResponse, ApiError>,
    },
    /// `None` is the empty placeholder option.
    TeamSelected(Option<String>),
    GenerateRequested,
    ConfirmAccepted,
    ConfirmDismissed(Dismissal),
    TokenLoaded {
        request: RequestId,
        result: Result<TokenResponse, ApiError>,
    },
    CopyRequested,
    CopyFinished(Result<(), String>),
    Timer(TokenTimer),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTimer {
    RestoreGate { control: Control, epoch: u64 },
    HideNotice(NoticeId),
    RemindSave { epoch: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenEffect {
    FetchTeams {
        request: RequestId,
        username: String,
    },
    GenerateToken {
        request: RequestId,
        team: String,
        username: String,
        email: String,
    },
    CopyToClipboard {
        text: String,
    },
    Schedule {
        after: Duration,
        timer: TokenTimer,
    },
}

impl TokenFlow {
    /// Start the page with the identity input prefilled (e.g. from login).
    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// Teams to list, empty unless the lookup is `Ready`.
    pub fn teams(&self) -> &[Team] {
        match &self.lookup {
            TeamLookup::Ready { teams } => teams,
            _ => &[],
        }
    }

    pub fn team_section_visible(&self) -> bool {
        matches!(self.lookup, TeamLookup::Ready { .. })
    }

    pub fn selected_team(&self) -> Option<&Team> {
        let name = self.selected.as_deref()?;
        self.teams().iter().find(|t| t.name == name)
    }

    /// The visible token, only while the stage is `Shown`.
    pub fn token(&self) -> Option<&str> {
        match &self.stage {
            TokenStage::Shown { token, .. } => Some(token),
            _ => None,
        }
    }

    pub fn can_fetch(&self) -> bool {
        self.fetch_gate.is_ready()
    }

    /// Generate is enabled only for a selected, non-restricted team, with the
    /// gate idle and no token waiting to be acknowledged.
    pub fn can_generate(&self) -> bool {
        self.generate_gate.is_ready()
            && self.selected_team().is_some_and(|t| !t.restricted)
            && matches!(self.stage, TokenStage::Idle | TokenStage::Failed)
    }

    pub fn can_copy(&self) -> bool {
        self.token().is_some() && self.copy_gate.is_ready()
    }

    fn gate_mut(&mut self, control: Control) -> &mut RequestGate {
        match control {
            Control::Fetch => &mut self.fetch_gate,
            Control::Generate => &mut self.generate_gate,
            Control::Copy => &mut self.copy_gate,
        }
    }

    fn report_error(&mut self, config: &PortalConfig, message: impl Into<String>) -> TokenEffect {
        let id = self.notices.error(message);
        TokenEffect::Schedule {
            after: config.timing.error_display(),
            timer: TokenTimer::HideNotice(id),
        }
    }

    fn report_success(&mut self, config: &PortalConfig, message: impl Into<String>) -> TokenEffect {
        let id = self.notices.success(message);
        TokenEffect::Schedule {
            after: config.timing.success_display(),
            timer: TokenTimer::HideNotice(id),
        }
    }

    fn flash_success(&mut self, config: &PortalConfig, control: Control) -> TokenEffect {
        let epoch = self.gate_mut(control).succeed();
        TokenEffect::Schedule {
            after: config.timing.success_display(),
            timer: TokenTimer::RestoreGate { control, epoch },
        }
    }

    /// Hide any token and abandon pending generation. An in-flight token request
    /// is left to finish, but its response no longer matches and is dropped.
    fn clear_token(&mut self) {
        if matches!(self.stage, TokenStage::Generating { .. }) {
            self.generate_gate.reset();
        }
        self.stage = TokenStage::Idle;
        self.modal = None;
        self.copy_gate.reset();
    }

    /// Refuse a restricted team: denial notice, deselect, Generate disabled.
    fn deny(&mut self, config: &PortalConfig, team: &str) -> TokenEffect {
        tracing::warn!(team, "refused token generation for restricted team");
        self.selected = None;
        self.clear_token();
        self.report_error(config, messages::restricted_team(team))
    }
}

/// The token page reducer.
pub fn update(
    flow: &TokenFlow,
    config: &PortalConfig,
    event: TokenEvent,
) -> (TokenFlow, Vec<TokenEffect>) {
    let mut next = flow.clone();
    let mut effects = Vec::new();

    match event {
        TokenEvent::UsernameEdited(value) => {
            next.username = value;
            next.notices.dismiss_error();
        }

        TokenEvent::FetchTeams => {
            let username = next.username.trim().to_string();
            if username.is_empty() {
                effects.push(next.report_error(config, messages::USERNAME_REQUIRED));
            } else if next.fetch_gate.begin() {
                let request = next.requests.next_id();
                tracing::debug!(request = request.0, %username, "fetching teams");
                next.notices.dismiss_error();
                next.selected = None;
                next.identity = None;
                next.clear_token();
                next.lookup = TeamLookup::Fetching {
                    request,
                    username: username.clone(),
                };
                effects.push(TokenEffect::FetchTeams { request, username });
            }
        }

        TokenEvent::TeamsLoaded { request, result } => {
            let queried = match &next.lookup {
                TeamLookup::Fetching {
                    request: pending,
                    username,
                } if *pending == request => username.clone(),
                _ => {
                    tracing::debug!(request = request.0, "dropping stale team list");
                    return (next, effects);
                }
            };
            match result {
                Err(e) => {
                    tracing::error!("team lookup failed: {} ({})", e, e.detail().unwrap_or(""));
                    next.fetch_gate.reset();
                    next.lookup = TeamLookup::Failed;
                    effects.push(next.report_error(config, messages::FETCH_TEAMS_FAILED));
                }
                Ok(TeamsResponse {
                    error: Some(message),
                    ..
                }) => {
                    tracing::warn!("team lookup rejected: {}", message);
                    next.fetch_gate.reset();
                    next.lookup = TeamLookup::Failed;
                    effects.push(next.report_error(config, message));
                }
                Ok(TeamsResponse { teams, .. }) if teams.is_empty() => {
                    tracing::info!("team lookup returned no teams");
                    next.fetch_gate.reset();
                    next.lookup = TeamLookup::Idle;
                    effects.push(next.report_error(config, messages::NO_TEAMS_FOUND));
                }
                Ok(TeamsResponse { teams, email, .. }) => {
                    let teams: Vec<Team> = teams
                        .into_iter()
                        .map(|name| Team {
                            restricted: config.restriction.is_restricted(&name),
                            name,
                        })
                        .collect();
                    tracing::info!(count = teams.len(), "team lookup succeeded");
                    effects.push(next.report_success(config, messages::teams_found(teams.len())));
                    effects.push(next.flash_success(config, Control::Fetch));
                    next.identity = Some(Identity {
                        username: queried,
                        email: email.filter(|e| !e.trim().is_empty()),
                    });
                    next.lookup = TeamLookup::Ready { teams };
                }
            }
        }

        TokenEvent::TeamSelected(choice) => {
            next.clear_token();
            match choice.filter(|name| !name.is_empty()) {
                None => next.selected = None,
                Some(name) => {
                    let found = next.teams().iter().find(|t| t.name == name).cloned();
                    match found {
                        None => {
                            tracing::debug!(team = %name, "ignoring selection of unknown team");
                            next.selected = None;
                        }
                        Some(team) if team.restricted => {
                            effects.push(next.deny(config, &team.name));
                        }
                        Some(team) => {
                            next.notices.dismiss_error();
                            next.selected = Some(team.name);
                        }
                    }
                }
            }
        }

        TokenEvent::GenerateRequested => {
            if !next.generate_gate.is_ready() || next.modal.is_some() {
                return (next, effects);
            }
            match next.selected.clone() {
                None => effects.push(next.report_error(config, messages::TEAM_REQUIRED)),
                // Checked again here: the list decoration may be stale.
                Some(team) if config.restriction.is_restricted(&team) => {
                    effects.push(next.deny(config, &team));
                }
                Some(team) => {
                    if matches!(next.stage, TokenStage::Idle | TokenStage::Failed) {
                        next.stage = TokenStage::AwaitingConfirmation { team: team.clone() };
                        next.modal = Some(ModalMode::Proceed { team });
                    }
                }
            }
        }

        TokenEvent::ConfirmAccepted => match next.modal.take() {
            Some(ModalMode::Proceed { team }) => match next.identity.clone() {
                Some(identity) => {
                    if next.generate_gate.begin() {
                        let request = next.requests.next_id();
                        let email = identity
                            .email
                            .unwrap_or_else(|| config.identity.email_fallback.clone());
                        tracing::debug!(request = request.0, %team, "generating token");
                        next.stage = TokenStage::Generating {
                            team: team.clone(),
                            request,
                        };
                        effects.push(TokenEffect::GenerateToken {
                            request,
                            team,
                            username: identity.username,
                            email,
                        });
                    } else {
                        next.stage = TokenStage::Idle;
                    }
                }
                None => {
                    next.stage = TokenStage::Idle;
                    effects.push(next.report_error(config, messages::USERNAME_REQUIRED));
                }
            },
            Some(ModalMode::AcknowledgeSave) => {
                tracing::debug!("token acknowledged as saved, clearing");
                next.clear_token();
                next.generate_gate.reset();
            }
            None => {}
        },

        TokenEvent::ConfirmDismissed(channel) => match next.modal.take() {
            Some(ModalMode::Proceed { .. }) => {
                tracing::debug!(?channel, "token generation cancelled");
                next.stage = TokenStage::Idle;
            }
            Some(ModalMode::AcknowledgeSave) => {
                tracing::debug!(?channel, "save reminder dismissed, keeping token");
            }
            None => {}
        },

        TokenEvent::TokenLoaded { request, result } => {
            let team = match &next.stage {
                TokenStage::Generating { team, request: pending } if *pending == request => {
                    team.clone()
                }
                _ => {
                    tracing::debug!(request = request.0, "dropping stale token response");
                    return (next, effects);
                }
            };
            match result {
                Ok(TokenResponse {
                    error: Some(message),
                    ..
                }) => {
                    tracing::warn!(%team, "token generation rejected: {}", message);
                    next.generate_gate.reset();
                    next.stage = TokenStage::Failed;
                    effects.push(next.report_error(config, message));
                }
                Ok(TokenResponse {
                    token: Some(token), ..
                }) if !token.is_empty() => {
                    tracing::info!(%team, "token generated");
                    next.token_epoch = next.token_epoch.wrapping_add(1);
                    effects.push(next.report_success(config, messages::token_generated(&team)));
                    effects.push(next.flash_success(config, Control::Generate));
                    next.copy_gate.reset();
                    next.stage = TokenStage::Shown {
                        team,
                        token,
                        epoch: next.token_epoch,
                    };
                }
                Ok(_) => {
                    tracing::warn!(%team, "token response carried no token");
                    next.generate_gate.reset();
                    next.stage = TokenStage::Failed;
                    effects.push(next.report_error(config, messages::TOKEN_MISSING));
                }
                Err(e) => {
                    tracing::error!(%team, "token request failed: {} ({})", e, e.detail().unwrap_or(""));
                    next.generate_gate.reset();
                    next.stage = TokenStage::Failed;
                    effects.push(next.report_error(config, messages::GENERATE_FAILED));
                }
            }
        }

        TokenEvent::CopyRequested => {
            if let Some(text) = next.token().map(str::to_string) {
                if next.copy_gate.begin() {
                    effects.push(TokenEffect::CopyToClipboard { text });
                }
            }
        }

        TokenEvent::CopyFinished(result) => {
            if !next.copy_gate.is_busy() {
                return (next, effects);
            }
            match result {
                Ok(()) => {
                    effects.push(next.flash_success(config, Control::Copy));
                    if let TokenStage::Shown { epoch, .. } = next.stage {
                        effects.push(TokenEffect::Schedule {
                            after: config.timing.save_reminder_delay(),
                            timer: TokenTimer::RemindSave { epoch },
                        });
                    }
                }
                Err(e) => {
                    tracing::error!("clipboard write failed: {}", e);
                    next.copy_gate.reset();
                    effects.push(next.report_error(config, messages::COPY_FAILED));
                }
            }
        }

        TokenEvent::Timer(TokenTimer::RestoreGate { control, epoch }) => {
            next.gate_mut(control).restore(epoch);
        }

        TokenEvent::Timer(TokenTimer::HideNotice(id)) => {
            next.notices.expire(id);
        }

        TokenEvent::Timer(TokenTimer::RemindSave { epoch }) => {
            let current = matches!(next.stage, TokenStage::Shown { epoch: shown, .. } if shown == epoch);
            if current && next.modal.is_none() {
                next.modal = Some(ModalMode::AcknowledgeSave);
            }
        }
    }

    (next, effects)
}

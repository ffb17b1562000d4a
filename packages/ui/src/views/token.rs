//! Token page: identity, team lookup, generation and copy.

use dioxus::prelude::*;
use flow::{TokenEvent, TokenStage, FETCH_LABELS, GENERATE_LABELS};

use crate::components::{Input, Label};
use crate::driver::use_token_driver;
use crate::portal::use_portal;
use crate::{ConfirmModal, GateButton, OutcomeBanner, TeamSelect, TokenPanel};

#[component]
pub fn TokenView(#[props(default = "Generate API Token".to_string())] title: String) -> Element {
    let driver = use_token_driver();
    let logout = use_portal().read().config.navigation.logout.clone();
    let flow = driver.flow.read().clone();

    let notice = flow.notices.current().cloned();
    let email = flow.identity.as_ref().and_then(|i| i.email.clone());
    let shown = match &flow.stage {
        TokenStage::Shown { team, token, .. } => Some((team.clone(), token.clone())),
        _ => None,
    };
    let lookup_busy = flow.fetch_gate.is_busy();

    rsx! {
        div { class: "portal-page",
            div { class: "portal-card portal-card-wide",
                div { class: "portal-header",
                    h1 { class: "portal-title", "{title}" }
                    a { class: "sign-out", href: "{logout}", "Sign out" }
                }

                OutcomeBanner { notice }

                form {
                    class: "field",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        driver.send(TokenEvent::FetchTeams);
                    },
                    Label { html_for: "identity", "Username" }
                    div { class: "field-row",
                        Input {
                            id: "identity",
                            autocomplete: "username",
                            disabled: lookup_busy,
                            value: flow.username.clone(),
                            oninput: move |evt: FormEvent| {
                                driver.send(TokenEvent::UsernameEdited(evt.value()));
                            },
                        }
                        GateButton {
                            gate: flow.fetch_gate.clone(),
                            labels: FETCH_LABELS,
                            r#type: "submit",
                        }
                    }
                }

                if flow.team_section_visible() {
                    section { class: "field",
                        if let Some(email) = email {
                            p { class: "identity-email", "Email: {email}" }
                        }
                        Label { html_for: "team-select", "Team" }
                        div { class: "field-row",
                            TeamSelect {
                                teams: flow.teams().to_vec(),
                                selected: flow.selected.clone(),
                                onchange: move |team| driver.send(TokenEvent::TeamSelected(team)),
                            }
                            GateButton {
                                gate: flow.generate_gate.clone(),
                                labels: GENERATE_LABELS,
                                disabled: !flow.can_generate(),
                                onclick: move |_| driver.send(TokenEvent::GenerateRequested),
                            }
                        }
                    }
                }

                if let Some((team, token)) = shown {
                    TokenPanel {
                        team,
                        token,
                        copy_gate: flow.copy_gate.clone(),
                        copy_disabled: !flow.can_copy(),
                        on_copy: move |_| driver.send(TokenEvent::CopyRequested),
                    }
                }
            }

            if let Some(mode) = flow.modal.clone() {
                ConfirmModal {
                    mode,
                    on_accept: move |_| driver.send(TokenEvent::ConfirmAccepted),
                    on_dismiss: move |how| driver.send(TokenEvent::ConfirmDismissed(how)),
                }
            }
        }
    }
}

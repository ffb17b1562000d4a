use dioxus::prelude::*;
use flow::Team;

/// Team picker. Restricted teams stay in the list but are marked, so the user
/// sees why they cannot be used. The empty placeholder maps to `None`.
#[component]
pub fn TeamSelect(
    teams: Vec<Team>,
    selected: Option<String>,
    onchange: EventHandler<Option<String>>,
) -> Element {
    let current = selected.unwrap_or_default();

    rsx! {
        select {
            id: "team-select",
            class: "input team-select",
            value: "{current}",
            onchange: move |evt: FormEvent| {
                let value = evt.value();
                onchange.call(if value.is_empty() { None } else { Some(value) });
            },
            option { value: "", selected: current.is_empty(), "Select a team" }
            for team in teams {
                option {
                    key: "{team.name}",
                    value: "{team.name}",
                    class: if team.restricted { "team-restricted" } else { "" },
                    selected: team.name == current,
                    {option_label(&team)}
                }
            }
        }
    }
}

fn option_label(team: &Team) -> String {
    if team.restricted {
        format!("\u{26a0} {} (restricted)", team.name)
    } else {
        team.name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_label_marks_restricted() {
        let team = Team {
            name: "Admin".to_string(),
            restricted: true,
        };
        assert_eq!(option_label(&team), "\u{26a0} Admin (restricted)");

        let team = Team {
            name: "Backend".to_string(),
            restricted: false,
        };
        assert_eq!(option_label(&team), "Backend");
    }
}

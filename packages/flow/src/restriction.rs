//! # Restriction predicate for administrative team names
//!
//! Flags team names that look administrative so the UI can warn about them in the
//! team list and refuse to request a token for them.
//!
//! This is a **UX guard only**. Anyone can call the token endpoint directly, so the
//! backend must enforce authorization on its own. The match is deliberately broad
//! (fail-closed): any name containing the marker substring is flagged, which also
//! catches harmless names like `"administrative-support"`.

use serde::{Deserialize, Serialize};

/// Denylist plus marker substring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestrictionPolicy {
    /// Exact names (compared after trim + lowercase) that are always restricted.
    #[serde(default = "default_denylist")]
    pub denylist: Vec<String>,
    /// Any normalized name containing this is restricted. Empty disables the rule.
    #[serde(default = "default_substring")]
    pub substring: String,
}

fn default_denylist() -> Vec<String> {
    [
        "administrators",
        "administrator",
        "admin",
        "portfolio managers",
        "superusers",
        "system",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_substring() -> String {
    "admin".to_string()
}

impl Default for RestrictionPolicy {
    fn default() -> Self {
        Self {
            denylist: default_denylist(),
            substring: default_substring(),
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

impl RestrictionPolicy {
    /// Whether `name` is an administrative team under this policy.
    pub fn is_restricted(&self, name: &str) -> bool {
        let name = normalize(name);
        let marker = normalize(&self.substring);
        if !marker.is_empty() && name.contains(&marker) {
            return true;
        }
        self.denylist.iter().any(|entry| normalize(entry) == name)
    }
}

/// [`RestrictionPolicy::is_restricted`] under the default policy.
pub fn is_restricted(name: &str) -> bool {
    RestrictionPolicy::default().is_restricted(name)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Upper-case the characters of `s` where `mask` (cycled) is set.
    fn recase(s: &str, mask: &[bool]) -> String {
        if mask.is_empty() {
            return s.to_string();
        }
        s.chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect()
    }

    proptest! {
        #[test]
        fn prop_any_name_containing_admin_is_restricted(
            prefix in "[a-zA-Z0-9 _-]{0,12}",
            suffix in "[a-zA-Z0-9 _-]{0,12}",
            mask in proptest::collection::vec(any::<bool>(), 5),
            lead in "[ \t\n]{0,3}",
            trail in "[ \t\n]{0,3}",
        ) {
            let name = format!("{lead}{prefix}{}{suffix}{trail}", recase("admin", &mask));
            prop_assert!(is_restricted(&name), "{:?} should be restricted", name);
        }

        #[test]
        fn prop_denylist_entries_restricted_under_any_case_and_padding(
            entry in prop::sample::select(default_denylist()),
            mask in proptest::collection::vec(any::<bool>(), 1..32),
            lead in "[ \t\n]{0,3}",
            trail in "[ \t\n]{0,3}",
        ) {
            let policy = RestrictionPolicy {
                denylist: default_denylist(),
                substring: String::new(),
            };
            let name = format!("{lead}{}{trail}", recase(&entry, &mask));
            prop_assert!(policy.is_restricted(&name), "{:?} should be restricted", name);
        }
    }

    #[test]
    fn test_admin_substring_any_case_and_padding() {
        for name in [
            "admin",
            "ADMIN",
            "  Admin  ",
            "sysadmins",
            "Administrative-Support",
            "team-ADMINISTRATION-eu",
            "\tadmin\n",
        ] {
            assert!(is_restricted(name), "{name:?} should be restricted");
        }
    }

    #[test]
    fn test_denylist_any_case_and_padding() {
        let policy = RestrictionPolicy::default();
        for entry in &policy.denylist {
            assert!(policy.is_restricted(entry));
            assert!(policy.is_restricted(&entry.to_uppercase()));
            assert!(policy.is_restricted(&format!("  {entry}\t")));
        }
        assert!(is_restricted("Portfolio Managers"));
        assert!(is_restricted(" SYSTEM "));
    }

    #[test]
    fn test_ordinary_teams_pass() {
        for name in ["Backend", "Platform Security", "Automation", "systems-eng", "adm"] {
            assert!(!is_restricted(name), "{name:?} should not be restricted");
        }
    }

    #[test]
    fn test_denylist_is_exact_match() {
        // "system" is denylisted but only as a whole name.
        assert!(!is_restricted("system-integration"));
    }

    #[test]
    fn test_custom_policy() {
        let policy = RestrictionPolicy {
            denylist: vec!["Root Ops".to_string()],
            substring: String::new(),
        };
        assert!(policy.is_restricted("root ops"));
        assert!(!policy.is_restricted("admin"));
    }
}

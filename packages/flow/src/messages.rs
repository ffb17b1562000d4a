//! User-facing messages.

pub const CREDENTIALS_REQUIRED: &str = "Username and password are required.";
pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials and try again.";
pub const LOGIN_SUCCEEDED: &str = "Login successful. Redirecting...";

pub const USERNAME_REQUIRED: &str = "Please enter your username or email.";
pub const FETCH_TEAMS_FAILED: &str = "Failed to fetch teams. Please try again.";
pub const NO_TEAMS_FOUND: &str = "No teams found for this user.";

pub const TEAM_REQUIRED: &str = "Please select a team first.";
pub const GENERATE_FAILED: &str = "Failed to generate token. Please try again.";
pub const TOKEN_MISSING: &str = "Token generation failed.";
pub const COPY_FAILED: &str = "Failed to copy the token to the clipboard.";

pub fn restricted_team(team: &str) -> String {
    format!(
        "Token generation is not allowed for administrative team \"{team}\". \
         Please select a different team or contact an administrator."
    )
}

pub fn teams_found(count: usize) -> String {
    if count == 1 {
        "Found 1 team.".to_string()
    } else {
        format!("Found {count} teams.")
    }
}

pub fn token_generated(team: &str) -> String {
    format!("Token generated for team \"{team}\". Copy it now: it will not be shown again.")
}

//! Profile page - renders the caller's user and session data.
//!
//! Tokens are rendered as short previews only. The page this replaces wrote
//! the full access and refresh tokens into the document body; that exposes
//! live credentials to anything that can read the page and is deliberately
//! not reproduced here.

use crate::auth::{AuthSession, AuthUser};

use super::pages::{html_escape, page_layout};

/// Number of leading characters shown for the access token.
const ACCESS_TOKEN_PREVIEW: usize = 12;

/// Number of leading characters shown for refresh/provider tokens.
const SECONDARY_TOKEN_PREVIEW: usize = 8;

/// Truncate a token to a short preview, never echoing the full value.
fn token_preview(token: &str, keep: usize) -> String {
    let prefix: String = token.chars().take(keep).collect();
    if token.chars().count() > keep {
        format!("{}\u{2026}", prefix)
    } else {
        prefix
    }
}

fn field(label: &str, value: &str, mono: bool) -> String {
    let class = if mono { " class=\"mono\"" } else { "" };
    format!(
        r#"            <div class="field">
                <label>{label}</label>
                <p{class}>{value}</p>
            </div>
"#,
        label = html_escape(label),
        value = html_escape(value),
        class = class,
    )
}

/// Render the inline error page shown when a provider read fails.
pub fn render_error_html(message: &str) -> String {
    let body = format!(
        r#"<main>
    <div class="notice">Error: {}</div>
</main>"#,
        html_escape(message)
    );
    page_layout("Profile", &body)
}

/// Render the prompt shown when no user is signed in.
pub fn render_sign_in_html() -> String {
    let body = r#"<main>
    <div class="notice">Please sign in to view your profile.</div>
</main>"#;
    page_layout("Profile", body)
}

/// Render the full profile page for a signed-in user.
pub fn render_profile_html(user: &AuthUser, session: Option<&AuthSession>) -> String {
    let mut user_fields = String::new();
    user_fields.push_str(&field(
        "Email:",
        user.email.as_deref().unwrap_or("N/A"),
        false,
    ));
    user_fields.push_str(&field("User ID:", &user.id, true));
    user_fields.push_str(&field(
        "Created:",
        user.created_at.as_deref().unwrap_or("N/A"),
        false,
    ));
    user_fields.push_str(&field(
        "Last Sign In:",
        user.last_sign_in_at.as_deref().unwrap_or("Never"),
        false,
    ));

    let session_card = match session {
        Some(session) => render_session_card(session),
        None => r#"    <div class="card">
        <h2>Session Information</h2>
            <div class="field">
                <label>Session Status:</label>
                <p class="status-inactive">No Active Session</p>
            </div>
    </div>
"#
        .to_string(),
    };

    let body = format!(
        r#"<main>
    <div class="card">
        <h2>User Information</h2>
{user_fields}    </div>
{session_card}</main>"#,
        user_fields = user_fields,
        session_card = session_card,
    );

    page_layout("Profile", &body)
}

fn render_session_card(session: &AuthSession) -> String {
    let mut fields = String::new();

    fields.push_str(
        r#"            <div class="field">
                <label>Session Status:</label>
                <p class="status-active">Active</p>
            </div>
"#,
    );
    fields.push_str(&field(
        "Access Token:",
        &token_preview(&session.access_token, ACCESS_TOKEN_PREVIEW),
        true,
    ));
    fields.push_str(&field("Token Type:", &session.token_type, false));
    fields.push_str(&field(
        "Expires At:",
        &session
            .expires_at
            .map(|ts| ts.to_string())
            .unwrap_or_else(|| "N/A".to_string()),
        false,
    ));
    fields.push_str(&field(
        "Refresh Token:",
        &session
            .refresh_token
            .as_deref()
            .map(|t| token_preview(t, SECONDARY_TOKEN_PREVIEW))
            .unwrap_or_else(|| "N/A".to_string()),
        true,
    ));
    fields.push_str(&field(
        "Provider Token:",
        &session
            .provider_token
            .as_deref()
            .map(|t| token_preview(t, SECONDARY_TOKEN_PREVIEW))
            .unwrap_or_else(|| "N/A".to_string()),
        true,
    ));
    fields.push_str(&field(
        "Provider Refresh Token:",
        &session
            .provider_refresh_token
            .as_deref()
            .map(|t| token_preview(t, SECONDARY_TOKEN_PREVIEW))
            .unwrap_or_else(|| "N/A".to_string()),
        true,
    ));

    format!(
        r#"    <div class="card">
        <h2>Session Information</h2>
{fields}    </div>
"#,
        fields = fields
    )
}

// =============================================================================
// Tests
// =============================================================================

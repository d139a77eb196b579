// Helper functions for avatars, skills parsing, and safe logging

/// Derive the deterministic Gravatar URL for an email address.
///
/// The digest is computed over the trimmed, lowercased address, so
/// `" User@X.com "` and `"user@x.com"` resolve to the same avatar.
/// Query parameters: 200px, PG-rated, "mystery man" fallback.
pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = md5::compute(normalized.as_bytes());
    format!(
        "https://www.gravatar.com/avatar/{:x}?s=200&r=pg&d=mm",
        digest
    )
}

/// Split a comma-separated skills string into a trimmed, ordered list.
///
/// Empty segments (e.g. from a trailing comma) are dropped.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}

/// Masks email addresses for safe logging
///
/// # Example
/// ```text
/// safe_email_log("user@example.com") // "u***@example.com"
/// ```
pub fn safe_email_log(email: &str) -> String {
    if email.len() > 3 {
        let parts: Vec<&str> = email.split('@').collect();
        if parts.len() == 2 && !parts[0].is_empty() {
            format!("{}***@{}", &parts[0][..1], parts[1])
        } else {
            "***@***.***".to_string()
        }
    } else {
        "***@***.***".to_string()
    }
}

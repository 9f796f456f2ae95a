//! Email address helpers for the auth service

/// Mask an email address for logging
///
/// Keeps the first two characters of the local part and the full domain:
/// `someone@example.com` becomes `so***@example.com`. Log lines never carry
/// the full address of an unverified mailbox.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        _ => "***".to_string(),
    }
}

use url::form_urlencoded;

pub const EMAIL: &str = "nicoguehe@gmail.com";
pub const LINKEDIN: &str = "https://www.linkedin.com/in/nicol%C3%A1s-guevara-herr%C3%A1n-a959a82ab/";
pub const GITHUB: &str = "https://github.com/NicoG2023";
pub const RESUME: &str = "/resume.pdf";

/// How long the copy button reads "Copied".
pub const COPIED_RESET_MS: u64 = 1200;

/// `mailto:` link with a form-encoded subject.
pub fn mailto(email: &str, subject: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("subject", subject)
        .finish();
    format!("mailto:{email}?{query}")
}

/// Inline handler for the copy button: writes to the clipboard and falls
/// back to a prompt when clipboard access is refused.
pub fn copy_script(email: &str, fallback_label: &str) -> String {
    let email = js_string(email);
    let label = js_string(fallback_label);
    format!(
        "navigator.clipboard.writeText('{email}').catch(() => window.prompt('{label}', '{email}'))"
    )
}

fn js_string(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

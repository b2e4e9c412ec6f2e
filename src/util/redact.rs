pub(crate) fn truncate_utf8(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Replace every currently stored token value with `<redacted>` before text
/// is surfaced in errors or logs.
pub(crate) fn redact_text(mut text: String, secrets: &[String]) -> String {
    for secret in secrets {
        if !secret.is_empty() {
            text = text.replace(secret.as_str(), "<redacted>");
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redacts_all_secrets() {
        let secrets = vec!["access-1".to_owned(), "refresh-1".to_owned()];
        let out = redact_text("got access-1 and refresh-1".into(), &secrets);
        assert_eq!(out, "got <redacted> and <redacted>");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_utf8("héllo", 2), "h");
    }
}

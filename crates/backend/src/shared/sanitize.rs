//! HTML sanitization for rich-text fields coming from the admin editor
//! (TEXT_BLOCK bodies, news bodies). Applied at the boundary before
//! content is persisted.

/// Strip scripts, event handlers and other unsafe markup
pub fn clean_html(input: &str) -> String {
    ammonia::clean(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_are_stripped() {
        let dirty = "<p>Pay your bill</p><script>alert('x')</script>";
        let clean = clean_html(dirty);
        assert!(clean.contains("<p>Pay your bill</p>"));
        assert!(!clean.contains("script"));
    }

    #[test]
    fn test_plain_markup_survives() {
        let body = "<h2>Outage notice</h2><ul><li>Sector 7</li></ul>";
        assert_eq!(clean_html(body), body);
    }
}

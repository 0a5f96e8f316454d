/// Escapes text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prefixes `https://` unless the value already names an http(s) scheme.
/// Blank input stays blank.
pub fn ensure_http(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return String::new();
    }
    let lowered = url.get(..8).unwrap_or(url).to_ascii_lowercase();
    if lowered.starts_with("http://") || lowered.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markup_characters() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_escape_leaves_plain_text() {
        assert_eq!(escape_html("Zürich, 2024"), "Zürich, 2024");
    }

    #[test]
    fn test_ensure_http_adds_scheme() {
        assert_eq!(ensure_http("example.com"), "https://example.com");
        assert_eq!(ensure_http("  github.com/ada "), "https://github.com/ada");
    }

    #[test]
    fn test_ensure_http_keeps_existing_scheme() {
        assert_eq!(ensure_http("http://example.com"), "http://example.com");
        assert_eq!(ensure_http("https://example.com"), "https://example.com");
        assert_eq!(ensure_http("HTTPS://Example.com"), "HTTPS://Example.com");
    }

    #[test]
    fn test_ensure_http_blank() {
        assert_eq!(ensure_http("   "), "");
    }
}

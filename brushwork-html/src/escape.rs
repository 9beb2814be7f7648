/// HTML-escape a value for use in an attribute or text position.
///
/// Applied to attribute values before they are embedded in markup. Code
/// bodies are deliberately NOT passed through here - the sample must
/// reach the client byte-for-byte for the highlighter to work on it.
#[must_use]
pub fn escape_attribute(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_attribute() {
        assert_eq!(escape_attribute("php"), "php");
        assert_eq!(
            escape_attribute("\"><script>"),
            "&quot;&gt;&lt;script&gt;"
        );
        assert_eq!(escape_attribute("a & 'b'"), "a &amp; &#39;b&#39;");
    }
}

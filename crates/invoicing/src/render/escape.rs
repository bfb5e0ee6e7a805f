/// Escape text for use in HTML element content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escape, then turn line breaks into `<br>`.
pub fn multiline(s: &str) -> String {
    html_escape(s).replace("\r\n", "\n").replace('\n', "<br>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape(r#"<script>alert("x")</script> & 'y'"#),
            "&lt;script&gt;alert(&quot;x&quot;)&lt;/script&gt; &amp; &#39;y&#39;"
        );
    }

    #[test]
    fn keeps_line_breaks_after_escaping() {
        assert_eq!(multiline("BCA: 123\r\nQRIS <wa>\nCash"), "BCA: 123<br>QRIS &lt;wa&gt;<br>Cash");
    }
}

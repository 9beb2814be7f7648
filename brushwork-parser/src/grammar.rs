use crate::model::{AttributeValue, RawShortcode};

// Grammar for a single shortcode occurrence, parameterized on the tag so
// the scanner only ever matches its own shortcode, no matter what other
// bracketed tags a document carries.
peg::parser! {
    pub(crate) grammar shortcode_grammar(tag: &str) for str {
        /// Match one occurrence at the start of the input and report how
        /// many bytes it consumed. The remainder of the input is ignored.
        pub(crate) rule prefix() -> (RawShortcode, usize)
            = code:occurrence() end:position!() [_]* { (code, end) }

        /// Match an input that consists of exactly one occurrence.
        pub(crate) rule single() -> RawShortcode
            = code:occurrence() ![_] { code }

        // A doubled bracket pair escapes the shortcode: `[[tag]…[/tag]]`
        // is reported but treated as literal content by consumers.
        rule occurrence() -> RawShortcode
            = "[" code:plain() "]" { RawShortcode { escaped: true, ..code } }
            / code:plain() { code }

        rule plain() -> RawShortcode
            = "[" tag_token() attributes:attributes() whitespace()* body:tail() {
                RawShortcode { attributes, body, escaped: false }
            }

        // Self-closing (`/]`, or `]` with no matching closing tag in the
        // rest of the input) yields an empty body; the enclosing form
        // captures everything up to the *first* closing tag, verbatim.
        rule tail() -> String
            = "/]" { String::new() }
            / "]" body:$((!close_tag() [_])*) close_tag() { body.to_string() }
            / "]" { String::new() }

        rule close_tag() = "[/" tag_token() "]"

        rule tag_token()
            = t:name() {? if t == tag { Ok(()) } else { Err("shortcode tag") } }

        rule attributes() -> Vec<(String, AttributeValue)>
            = entries:(whitespace()+ attribute:attribute() { attribute })* { entries }

        // Attribute names are lowercased; a bare name is a boolean flag.
        rule attribute() -> (String, AttributeValue)
            = n:name() "=" v:value() { (n.to_lowercase(), AttributeValue::String(v)) }
            / n:name() { (n.to_lowercase(), AttributeValue::Bool(true)) }

        rule value() -> String
            = "\"" v:$([^'"']*) "\"" { v.to_string() }
            / "'" v:$([^'\'']*) "'" { v.to_string() }
            / v:$([^' ' | '\t' | '\r' | '\n' | ']' | '/' | '\'' | '"']+) { v.to_string() }

        rule name() -> &'input str
            = $(['a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-']+)

        rule whitespace() = [' ' | '\t' | '\r' | '\n']
    }
}

//! Shortcode scanner and parser for the brushwork syntax highlighter.
//!
//! This crate finds and parses occurrences of the highlighter shortcode in
//! raw document text:
//!
//! - [`scan`] - collect every occurrence of the tag in a document
//! - [`parse`] - parse a string holding exactly one occurrence
//! - [`Shortcode`] - the parse result (attributes, body, span)
//!
//! Scanning is restricted to [`TAG`]; bracketed text for any other tag is
//! left alone. A scan is pure and synchronous: no I/O, no state outside
//! the returned values, so callers can scope it per document render.

mod error;
mod grammar;
mod model;

pub use error::Error;
pub use model::{AttributeName, AttributeValue, ElementAttributes, Location, Shortcode};

/// The shortcode tag this parser recognizes.
pub const TAG: &str = "render_syntax_highlighter";

/// Find every occurrence of the highlighter shortcode in `content`.
///
/// Occurrences are returned in document order with their byte spans.
/// Escaped (doubled-bracket) occurrences are included with
/// [`Shortcode::escaped`] set; consumers decide whether to skip them.
/// Content without any occurrence yields an empty vec - the common,
/// non-error case.
#[must_use]
pub fn scan(content: &str) -> Vec<Shortcode> {
    let mut found = Vec::new();
    let mut offset = 0;
    while let Some(relative) = content.get(offset..).and_then(|rest| rest.find('[')) {
        let start = offset + relative;
        let Some(rest) = content.get(start..) else {
            break;
        };
        match grammar::shortcode_grammar::prefix(rest, TAG) {
            Ok((raw, consumed)) => {
                let code = raw.into_shortcode(start, start + consumed);
                tracing::debug!(
                    start,
                    end = start + consumed,
                    escaped = code.escaped,
                    "found shortcode occurrence"
                );
                found.push(code);
                offset = start + consumed;
            }
            // Not our shortcode; '[' is a 1-byte char, so start + 1 is a
            // valid boundary.
            Err(_) => offset = start + 1,
        }
    }
    found
}

/// Parse a string holding exactly one shortcode occurrence.
///
/// # Errors
///
/// Returns an error if the input is not a single, complete occurrence of
/// [`TAG`].
pub fn parse(input: &str) -> Result<Shortcode, Error> {
    let raw = grammar::shortcode_grammar::single(input, TAG)?;
    Ok(raw.into_shortcode(0, input.len()))
}

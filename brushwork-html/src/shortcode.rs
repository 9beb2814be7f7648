//! The shortcode render callback: one occurrence to one `<pre>` fragment.

use std::io::Write;

use brushwork_assets::Brush;
use brushwork_parser::Shortcode;

use crate::{Error, escape::escape_attribute};

/// Render one occurrence as a preformatted block.
///
/// The class token is the lowercased `language` value, unvalidated: an
/// unsupported language yields a token the client-side highlighter does
/// not recognize, so the block degrades to unstyled output instead of
/// failing. The body is emitted verbatim; only the attribute value goes
/// through output escaping.
pub fn write_shortcode<W: Write + ?Sized>(w: &mut W, code: &Shortcode) -> Result<(), Error> {
    let token = code
        .attribute("language")
        .map_or_else(|| Brush::default().slug(), str::to_lowercase);
    write!(
        w,
        "<pre class=\"brush: {};\">{}</pre>",
        escape_attribute(&token),
        code.body
    )?;
    Ok(())
}

/// Render one occurrence to a string.
///
/// # Errors
///
/// Returns an error if the fragment is not valid UTF-8 after writing,
/// which cannot happen for UTF-8 input.
pub fn render_shortcode(code: &Shortcode) -> Result<String, Error> {
    let mut buffer = Vec::new();
    write_shortcode(&mut buffer, code)?;
    Ok(String::from_utf8(buffer)?)
}

//! HTML rendering and asset delivery for the brushwork syntax highlighter.
//!
//! This crate turns scanned shortcode occurrences into markup and hands
//! the selected assets to a delivery layer:
//!
//! - [`write_shortcode`] / [`render_shortcode`] - the render callback for
//!   one occurrence
//! - [`Processor`] - whole-document expansion and page assembly
//! - [`HtmlPipeline`] - an [`AssetPipeline`](brushwork_assets::AssetPipeline)
//!   that delivers enqueued assets as `<link>`/`<script>` tags
//! - [`ShortcodeRegistry`] - the host seam for tag registration
//!
//! Rendering is a pure transform of the occurrence's attributes and body;
//! all per-document state lives in the
//! [`ActivationSet`](brushwork_assets::ActivationSet) threaded through
//! explicitly.

use std::io::Write;

use brushwork_assets::{ActivationSet, AssetPipeline, register_assets};
use brushwork_parser::Location;

mod error;
mod escape;
mod host;
mod page;
mod shortcode;

pub use error::Error;
pub use escape::escape_attribute;
pub use host::{MemoryRegistry, ShortcodeRegistry};
pub use page::HtmlPipeline;
pub use shortcode::{render_shortcode, write_shortcode};

/// Converter options.
///
/// Use [`Options::builder()`] to construct an instance.
#[derive(Debug, Clone)]
pub struct Options {
    base_url: String,
    embedded: bool,
    title: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            base_url: ".".to_string(),
            embedded: false,
            title: "Document".to_string(),
        }
    }
}

impl Options {
    /// Create a new builder with default values.
    #[must_use]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Base URL prepended to every delivered asset path.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether to output an embeddable fragment stream.
    ///
    /// When true, [`Processor::convert`] emits only the expanded content,
    /// without page chrome or asset tags.
    #[must_use]
    pub fn embedded(&self) -> bool {
        self.embedded
    }

    /// Title for standalone page output.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Builder for [`Options`].
#[derive(Debug, Default, Clone)]
pub struct OptionsBuilder {
    options: Options,
}

impl OptionsBuilder {
    /// Set the base URL for delivered asset references.
    #[must_use]
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.options.base_url = base_url.into();
        self
    }

    /// Enable or disable embedded output mode.
    #[must_use]
    pub fn embedded(mut self, embedded: bool) -> Self {
        self.options.embedded = embedded;
        self
    }

    /// Set the page title for standalone output.
    #[must_use]
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.options.title = title.into();
        self
    }

    /// Build the [`Options`] instance.
    #[must_use]
    pub fn build(self) -> Options {
        self.options
    }
}

/// Document processor: expansion, activation, and page assembly.
#[derive(Debug, Clone, Default)]
pub struct Processor {
    options: Options,
}

impl Processor {
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Wire the integration into a host.
    ///
    /// Registers the shortcode tag and declares the full asset catalog.
    /// A failing collaborator disables the whole integration: the first
    /// error is surfaced as a single operator-facing notice and nothing
    /// is partially registered on our side.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Host`] wrapping the collaborator's error.
    pub fn init<R, P>(&self, registry: &mut R, pipeline: &mut P) -> Result<(), Error>
    where
        R: ShortcodeRegistry,
        R::Error: std::fmt::Display,
        P: AssetPipeline,
        P::Error: std::fmt::Display,
    {
        registry
            .register_shortcode(brushwork_parser::TAG)
            .map_err(|e| self.host_error(&e))?;
        register_assets(pipeline).map_err(|e| self.host_error(&e))?;
        Ok(())
    }

    fn host_error<E: std::fmt::Display>(&self, source: &E) -> Error {
        let error = Error::Host(source.to_string());
        tracing::error!(%error, "disabling syntax highlighter integration");
        error
    }

    /// Compute the activation set for one document.
    #[must_use]
    pub fn activation(&self, content: &str) -> ActivationSet {
        ActivationSet::from_content(content)
    }

    /// Expand every occurrence in `content`, writing the result to `w`.
    ///
    /// Text outside occurrences is copied through untouched. Escaped
    /// occurrences become their literal text minus the outer bracket
    /// pair.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn expand_into<W: Write + ?Sized>(&self, w: &mut W, content: &str) -> Result<(), Error> {
        let mut cursor = 0;
        for code in brushwork_parser::scan(content) {
            let Location {
                absolute_start,
                absolute_end,
            } = code.location;
            if let Some(before) = content.get(cursor..absolute_start) {
                w.write_all(before.as_bytes())?;
            }
            if code.escaped {
                let inner = content.get(absolute_start + 1..absolute_end.saturating_sub(1));
                if let Some(literal) = inner {
                    w.write_all(literal.as_bytes())?;
                }
            } else {
                write_shortcode(w, &code)?;
            }
            cursor = absolute_end;
        }
        if let Some(rest) = content.get(cursor..) {
            w.write_all(rest.as_bytes())?;
        }
        Ok(())
    }

    /// Expand every occurrence in `content` to a string.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn expand(&self, content: &str) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.expand_into(&mut buffer, content)?;
        Ok(String::from_utf8(buffer)?)
    }

    /// Convert one document to HTML.
    ///
    /// In embedded mode this is just [`Processor::expand_into`]. In
    /// standalone mode the expanded content is wrapped in a full page:
    /// activated stylesheets in the head, scripts at the end of the body,
    /// and the client-side activation snippet last, after all assets.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or asset delivery fails.
    pub fn convert<W: Write + ?Sized>(&self, w: &mut W, content: &str) -> Result<(), Error> {
        if self.options.embedded {
            return self.expand_into(w, content);
        }

        let mut pipeline = HtmlPipeline::new(self.options.base_url());
        register_assets(&mut pipeline)?;
        let activation = self.activation(content);
        activation.enqueue(&mut pipeline)?;
        tracing::debug!(
            scripts = activation.scripts().len(),
            styles = activation.styles().len(),
            "activated highlighter assets for document"
        );

        writeln!(w, "<!DOCTYPE html>")?;
        writeln!(w, "<html>")?;
        writeln!(w, "<head>")?;
        writeln!(w, "<meta charset=\"utf-8\">")?;
        writeln!(w, "<title>{}</title>", escape_attribute(self.options.title()))?;
        pipeline.write_style_tags(w)?;
        writeln!(w, "</head>")?;
        writeln!(w, "<body>")?;
        self.expand_into(w, content)?;
        writeln!(w)?;
        pipeline.write_script_tags(w)?;
        if let Some(snippet) = activation.footer_script() {
            writeln!(w, "{snippet}")?;
        }
        writeln!(w, "</body>")?;
        writeln!(w, "</html>")?;
        Ok(())
    }
}

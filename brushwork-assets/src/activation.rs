//! The selective loader: per-document accumulation of needed assets.

use brushwork_parser::Shortcode;
use rustc_hash::FxHashSet;

use crate::{
    AssetId, AssetPipeline, Brush, Theme,
    asset::{core_script_id, core_stylesheet_id, extend_stylesheet_id},
};

// Client-side kick-off, appended after all styles and scripts are in place.
const ACTIVATE_SNIPPET: &str =
    r#"<script type="text/javascript">SyntaxHighlighter.all();</script>"#;

/// The set of assets one document needs, accumulated over one scan.
///
/// Grows monotonically and never shrinks. Create a fresh set per document
/// render and thread it explicitly - the seen-brush and activation
/// trackers are fields of this value, never process-global state, so
/// nothing leaks between unrelated documents in a long-lived host.
///
/// The first recorded occurrence pulls in the shared assets (core script,
/// core and extend stylesheets, the default theme and the referenced
/// theme); every occurrence adds its brush script at most once. Names
/// that do not resolve against the catalog fall back to the defaults, so
/// the set never references an unregistered resource.
#[derive(Debug, Default)]
pub struct ActivationSet {
    scripts: Vec<AssetId>,
    styles: Vec<AssetId>,
    seen_brushes: FxHashSet<Brush>,
    activated: bool,
}

impl ActivationSet {
    /// Scan a document and accumulate everything it needs.
    ///
    /// Escaped occurrences activate nothing. Content without occurrences
    /// yields an empty set - the common, non-error case.
    #[must_use]
    pub fn from_content(content: &str) -> Self {
        let mut set = Self::default();
        for code in brushwork_parser::scan(content) {
            if code.escaped {
                continue;
            }
            set.record(&code);
        }
        set
    }

    /// Record one shortcode occurrence.
    pub fn record(&mut self, code: &Shortcode) {
        let brush = code
            .attribute("language")
            .and_then(Brush::from_name)
            .unwrap_or_default();

        if !self.activated {
            // Only the first occurrence decides the theme; the default
            // theme stylesheet is loaded alongside it either way.
            let theme = code
                .attribute("style")
                .and_then(Theme::from_name)
                .unwrap_or_default();
            self.add_style(Theme::default().stylesheet_id());
            self.add_style(theme.stylesheet_id());
            self.add_style(core_stylesheet_id());
            self.add_style(extend_stylesheet_id());
            self.add_script(core_script_id());
            self.activated = true;
            tracing::debug!(theme = %theme, "highlighter activated for document");
        }

        if self.seen_brushes.insert(brush) {
            self.add_script(brush.script_id());
            tracing::debug!(brush = %brush, "brush script selected");
        }
    }

    fn add_script(&mut self, id: AssetId) {
        if !self.scripts.contains(&id) {
            self.scripts.push(id);
        }
    }

    fn add_style(&mut self, id: AssetId) {
        if !self.styles.contains(&id) {
            self.styles.push(id);
        }
    }

    /// True when no occurrence has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.activated
    }

    /// Selected script identifiers, in selection order.
    #[must_use]
    pub fn scripts(&self) -> &[AssetId] {
        &self.scripts
    }

    /// Selected stylesheet identifiers, in selection order.
    #[must_use]
    pub fn styles(&self) -> &[AssetId] {
        &self.styles
    }

    /// The one-time footer snippet triggering client-side highlighting.
    ///
    /// Present exactly when at least one occurrence was recorded.
    #[must_use]
    pub fn footer_script(&self) -> Option<&'static str> {
        self.activated.then_some(ACTIVATE_SNIPPET)
    }

    /// Mark every member of the set for delivery.
    ///
    /// # Errors
    ///
    /// Propagates the first pipeline error.
    pub fn enqueue<P: AssetPipeline>(&self, pipeline: &mut P) -> Result<(), P::Error> {
        for id in &self.scripts {
            pipeline.enqueue_script(id)?;
        }
        for id in &self.styles {
            pipeline.enqueue_style(id)?;
        }
        Ok(())
    }
}

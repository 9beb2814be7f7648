//! Delivery layer: turns enqueued assets into `<link>` and `<script>` tags.

use std::collections::BTreeMap;
use std::io::Write;

use brushwork_assets::{AssetId, AssetPipeline, RegisteredAsset};

use crate::Error;

/// An [`AssetPipeline`] that delivers assets as HTML tags.
///
/// Registration records each resource's path and dependencies; enqueueing
/// resolves dependencies depth-first so a dependency's tag is always
/// emitted before its dependents'. The asset dependency graph built by
/// the registry is one level deep (brush -> core, theme -> core).
#[derive(Debug)]
pub struct HtmlPipeline {
    base_url: String,
    scripts: BTreeMap<AssetId, RegisteredAsset>,
    styles: BTreeMap<AssetId, RegisteredAsset>,
    enqueued_scripts: Vec<AssetId>,
    enqueued_styles: Vec<AssetId>,
}

impl HtmlPipeline {
    #[must_use]
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            scripts: BTreeMap::new(),
            styles: BTreeMap::new(),
            enqueued_scripts: Vec::new(),
            enqueued_styles: Vec::new(),
        }
    }

    /// Write one `<link>` tag per enqueued stylesheet, in dependency order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_style_tags<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), Error> {
        for id in &self.enqueued_styles {
            if let Some(asset) = self.styles.get(id) {
                writeln!(
                    w,
                    "<link rel=\"stylesheet\" href=\"{}/{}\">",
                    self.base_url, asset.path
                )?;
            }
        }
        Ok(())
    }

    /// Write one `<script>` tag per enqueued script, in dependency order.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    pub fn write_script_tags<W: Write + ?Sized>(&self, w: &mut W) -> Result<(), Error> {
        for id in &self.enqueued_scripts {
            if let Some(asset) = self.scripts.get(id) {
                writeln!(
                    w,
                    "<script type=\"text/javascript\" src=\"{}/{}\"></script>",
                    self.base_url, asset.path
                )?;
            }
        }
        Ok(())
    }

    /// Enqueued scripts, dependencies first.
    #[must_use]
    pub fn enqueued_scripts(&self) -> &[AssetId] {
        &self.enqueued_scripts
    }

    /// Enqueued stylesheets, dependencies first.
    #[must_use]
    pub fn enqueued_styles(&self) -> &[AssetId] {
        &self.enqueued_styles
    }
}

impl AssetPipeline for HtmlPipeline {
    type Error = brushwork_assets::Error;

    fn register_script(
        &mut self,
        id: &AssetId,
        path: &str,
        dependencies: &[AssetId],
    ) -> Result<(), Self::Error> {
        self.scripts.insert(
            id.clone(),
            RegisteredAsset {
                path: path.to_string(),
                dependencies: dependencies.to_vec(),
            },
        );
        Ok(())
    }

    fn register_style(
        &mut self,
        id: &AssetId,
        path: &str,
        dependencies: &[AssetId],
    ) -> Result<(), Self::Error> {
        self.styles.insert(
            id.clone(),
            RegisteredAsset {
                path: path.to_string(),
                dependencies: dependencies.to_vec(),
            },
        );
        Ok(())
    }

    fn enqueue_script(&mut self, id: &AssetId) -> Result<(), Self::Error> {
        if self.enqueued_scripts.contains(id) {
            return Ok(());
        }
        let asset = self
            .scripts
            .get(id)
            .ok_or_else(|| brushwork_assets::Error::UnknownAsset(id.clone()))?;
        for dep in asset.dependencies.clone() {
            self.enqueue_script(&dep)?;
        }
        if !self.enqueued_scripts.contains(id) {
            self.enqueued_scripts.push(id.clone());
        }
        Ok(())
    }

    fn enqueue_style(&mut self, id: &AssetId) -> Result<(), Self::Error> {
        if self.enqueued_styles.contains(id) {
            return Ok(());
        }
        let asset = self
            .styles
            .get(id)
            .ok_or_else(|| brushwork_assets::Error::UnknownAsset(id.clone()))?;
        for dep in asset.dependencies.clone() {
            self.enqueue_style(&dep)?;
        }
        if !self.enqueued_styles.contains(id) {
            self.enqueued_styles.push(id.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use brushwork_assets::{Brush, core_script_id, register_assets};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_dependency_tag_comes_first() {
        let mut pipeline = HtmlPipeline::new("https://example.com/assets/");
        register_assets(&mut pipeline).unwrap();

        pipeline.enqueue_script(&Brush::Python.script_id()).unwrap();
        assert_eq!(
            pipeline.enqueued_scripts(),
            &[core_script_id(), Brush::Python.script_id()]
        );

        let mut out = Vec::new();
        pipeline.write_script_tags(&mut out).unwrap();
        let html = String::from_utf8(out).unwrap();
        assert_eq!(
            html,
            "<script type=\"text/javascript\" src=\"https://example.com/assets/js/shCore.js\"></script>\n\
             <script type=\"text/javascript\" src=\"https://example.com/assets/js/brushes/shBrushPython.js\"></script>\n"
        );
    }

    #[test]
    fn test_unknown_asset_is_rejected() {
        let mut pipeline = HtmlPipeline::new(".");
        assert!(pipeline.enqueue_script(&AssetId::new("nope")).is_err());
    }

    #[test]
    fn test_core_enqueued_once_across_brushes() {
        let mut pipeline = HtmlPipeline::new(".");
        register_assets(&mut pipeline).unwrap();
        pipeline.enqueue_script(&Brush::Python.script_id()).unwrap();
        pipeline.enqueue_script(&Brush::Sql.script_id()).unwrap();

        let core = core_script_id();
        assert_eq!(
            pipeline
                .enqueued_scripts()
                .iter()
                .filter(|id| **id == core)
                .count(),
            1
        );
    }
}

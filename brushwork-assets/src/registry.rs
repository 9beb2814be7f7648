//! Declares the full asset catalog to a host pipeline.

use crate::{
    AssetPipeline, Brush, Theme,
    asset::{
        CORE_SCRIPT_PATH, CORE_STYLESHEET_PATH, EXTEND_STYLESHEET_PATH, core_script_id,
        core_stylesheet_id, extend_stylesheet_id,
    },
};

/// Register every script and stylesheet the highlighter can deliver.
///
/// One script per brush (depending on the core script), one stylesheet per
/// theme (depending on the core stylesheet), plus the shared core script,
/// core stylesheet and extend stylesheet. Registration declares resources
/// only; nothing is enqueued here.
///
/// # Errors
///
/// Propagates the first pipeline error; no partial-registration recovery
/// is attempted.
pub fn register_assets<P: AssetPipeline>(pipeline: &mut P) -> Result<(), P::Error> {
    let core_script = core_script_id();
    pipeline.register_script(&core_script, CORE_SCRIPT_PATH, &[])?;

    let script_deps = [core_script];
    for brush in Brush::ALL {
        pipeline.register_script(&brush.script_id(), &brush.script_path(), &script_deps)?;
    }

    let style_deps = [core_stylesheet_id()];
    for theme in Theme::ALL {
        pipeline.register_style(&theme.stylesheet_id(), &theme.stylesheet_path(), &style_deps)?;
    }

    pipeline.register_style(&core_stylesheet_id(), CORE_STYLESHEET_PATH, &[])?;
    pipeline.register_style(&extend_stylesheet_id(), EXTEND_STYLESHEET_PATH, &[])?;

    tracing::debug!(
        scripts = Brush::ALL.len() + 1,
        styles = Theme::ALL.len() + 2,
        "registered highlighter assets"
    );
    Ok(())
}

//! Asset identifiers for the bundled highlighter library.
//!
//! Every script and stylesheet the highlighter can deliver is addressed by
//! a stable [`AssetId`], derived from the catalog names the same way the
//! library names its files. Nothing here loads anything - identifiers are
//! declared to an [`AssetPipeline`](crate::AssetPipeline) and delivery is
//! the host's concern.

use serde::{Deserialize, Serialize};

// All handles share one prefix so they cannot collide with other asset
// producers registered against the same pipeline.
pub(crate) const HANDLE_PREFIX: &str = "syntax-highlighter";

pub(crate) const CORE_SCRIPT_PATH: &str = "js/shCore.js";
pub(crate) const CORE_STYLESHEET_PATH: &str = "css/shCore.css";
pub(crate) const EXTEND_STYLESHEET_PATH: &str = "css/extend.css";

/// A stable identifier for a registered script or stylesheet.
///
/// Identifiers are namespaced per kind: a script and a stylesheet may
/// share the same id (the core assets do).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(String);

impl AssetId {
    #[must_use]
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AssetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of the shared highlighter core script.
#[must_use]
pub fn core_script_id() -> AssetId {
    AssetId::new(format!("{HANDLE_PREFIX}-shCore"))
}

/// Identifier of the shared highlighter core stylesheet.
#[must_use]
pub fn core_stylesheet_id() -> AssetId {
    AssetId::new(format!("{HANDLE_PREFIX}-shCore"))
}

/// Identifier of the stylesheet extending the core styles for embedding.
#[must_use]
pub fn extend_stylesheet_id() -> AssetId {
    AssetId::new(format!("{HANDLE_PREFIX}-extend"))
}

//! The asset delivery capability the host must provide.
//!
//! The core never performs network or file delivery itself; it declares
//! resources to an [`AssetPipeline`] and marks members of an activation
//! set for delivery. The CMS pipeline is one implementation;
//! [`RecordingPipeline`] is an in-memory one for tests and simple hosts.

use std::collections::BTreeMap;

use crate::{AssetId, Error};

/// Host capability for registering and enqueueing page assets.
///
/// Registration declares a resource without loading it; enqueueing marks a
/// registered resource to be sent with the current response. Scripts and
/// styles are namespaced separately, so one id may name one of each.
pub trait AssetPipeline {
    /// The error type for this pipeline.
    type Error;

    /// Declare a script resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot accept the declaration.
    fn register_script(
        &mut self,
        id: &AssetId,
        path: &str,
        dependencies: &[AssetId],
    ) -> Result<(), Self::Error>;

    /// Declare a stylesheet resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot accept the declaration.
    fn register_style(
        &mut self,
        id: &AssetId,
        path: &str,
        dependencies: &[AssetId],
    ) -> Result<(), Self::Error>;

    /// Mark a registered script for delivery with the current response.
    ///
    /// # Errors
    ///
    /// Returns an error if the id was never registered.
    fn enqueue_script(&mut self, id: &AssetId) -> Result<(), Self::Error>;

    /// Mark a registered stylesheet for delivery with the current response.
    ///
    /// # Errors
    ///
    /// Returns an error if the id was never registered.
    fn enqueue_style(&mut self, id: &AssetId) -> Result<(), Self::Error>;
}

/// A resource declared against a pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredAsset {
    pub path: String,
    pub dependencies: Vec<AssetId>,
}

/// In-memory [`AssetPipeline`] that records declarations and enqueues.
///
/// Enqueueing an unregistered id is an error, which keeps the activation
/// invariant observable: a scan can never select a resource the registry
/// did not declare. Enqueueing the same id twice records it once.
#[derive(Debug, Default)]
pub struct RecordingPipeline {
    scripts: BTreeMap<AssetId, RegisteredAsset>,
    styles: BTreeMap<AssetId, RegisteredAsset>,
    enqueued_scripts: Vec<AssetId>,
    enqueued_styles: Vec<AssetId>,
}

impl RecordingPipeline {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn registered_script(&self, id: &AssetId) -> Option<&RegisteredAsset> {
        self.scripts.get(id)
    }

    #[must_use]
    pub fn registered_style(&self, id: &AssetId) -> Option<&RegisteredAsset> {
        self.styles.get(id)
    }

    /// Enqueued scripts, in enqueue order.
    #[must_use]
    pub fn enqueued_scripts(&self) -> &[AssetId] {
        &self.enqueued_scripts
    }

    /// Enqueued stylesheets, in enqueue order.
    #[must_use]
    pub fn enqueued_styles(&self) -> &[AssetId] {
        &self.enqueued_styles
    }
}

impl AssetPipeline for RecordingPipeline {
    type Error = Error;

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
        if !self.scripts.contains_key(id) {
            return Err(Error::UnknownAsset(id.clone()));
        }
        if !self.enqueued_scripts.contains(id) {
            self.enqueued_scripts.push(id.clone());
        }
        Ok(())
    }

    fn enqueue_style(&mut self, id: &AssetId) -> Result<(), Self::Error> {
        if !self.styles.contains_key(id) {
            return Err(Error::UnknownAsset(id.clone()));
        }
        if !self.enqueued_styles.contains(id) {
            self.enqueued_styles.push(id.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_unregistered_is_an_error() {
        let mut pipeline = RecordingPipeline::new();
        let id = AssetId::new("nope");
        assert!(matches!(
            pipeline.enqueue_script(&id),
            Err(Error::UnknownAsset(_))
        ));
        assert!(matches!(
            pipeline.enqueue_style(&id),
            Err(Error::UnknownAsset(_))
        ));
    }

    #[test]
    fn test_enqueue_is_deduplicated() -> Result<(), Error> {
        let mut pipeline = RecordingPipeline::new();
        let id = AssetId::new("core");
        pipeline.register_script(&id, "js/core.js", &[])?;
        pipeline.enqueue_script(&id)?;
        pipeline.enqueue_script(&id)?;
        assert_eq!(pipeline.enqueued_scripts(), &[id]);
        Ok(())
    }

    #[test]
    fn test_script_and_style_namespaces_are_separate() -> Result<(), Error> {
        let mut pipeline = RecordingPipeline::new();
        let id = AssetId::new("core");
        pipeline.register_script(&id, "js/core.js", &[])?;
        assert!(pipeline.registered_script(&id).is_some());
        assert!(pipeline.registered_style(&id).is_none());
        assert!(pipeline.enqueue_style(&id).is_err());
        Ok(())
    }
}

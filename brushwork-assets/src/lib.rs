//! Asset catalog and selective loading for the brushwork syntax highlighter.
//!
//! Highlighting happens client-side in a bundled JavaScript library with
//! one script per language ("brush") and one stylesheet per color theme.
//! Loading all of them on every page would be wasteful, so this crate
//! splits the concern in two:
//!
//! - [`register_assets`] - declare the full catalog to a host
//!   [`AssetPipeline`] without loading anything
//! - [`ActivationSet`] - scan one document's text and accumulate the
//!   minimal set of resources it actually references
//!
//! The catalog itself lives in [`Brush`] and [`Theme`]; identifiers are
//! derived from catalog names, so registry and loader can never disagree
//! about what an occurrence resolves to.
//!
//! All state is request-scoped: an [`ActivationSet`] is created per
//! document render and dropped afterwards.

mod activation;
mod asset;
mod catalog;
mod error;
mod pipeline;
mod registry;

pub use activation::ActivationSet;
pub use asset::{AssetId, core_script_id, core_stylesheet_id, extend_stylesheet_id};
pub use catalog::{Brush, Theme};
pub use error::Error;
pub use pipeline::{AssetPipeline, RecordingPipeline, RegisteredAsset};
pub use registry::register_assets;

//! The shortcode-registration capability the host must provide.

/// Host capability for routing a shortcode tag to this crate's expansion.
///
/// The real CMS registry is one implementation; [`MemoryRegistry`] serves
/// tests and standalone hosts such as the CLI.
pub trait ShortcodeRegistry {
    /// The error type for this registry.
    type Error;

    /// Declare a shortcode tag.
    ///
    /// # Errors
    ///
    /// Returns an error if the host cannot accept the registration.
    fn register_shortcode(&mut self, tag: &str) -> Result<(), Self::Error>;
}

/// In-memory [`ShortcodeRegistry`].
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    tags: Vec<String>,
}

impl MemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_registered(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl ShortcodeRegistry for MemoryRegistry {
    type Error = std::convert::Infallible;

    fn register_shortcode(&mut self, tag: &str) -> Result<(), Self::Error> {
        if !self.is_registered(tag) {
            self.tags.push(tag.to_string());
        }
        Ok(())
    }
}

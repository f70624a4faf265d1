pub mod config;
pub mod panel;
pub mod password_generation;

pub use config::{Config, ConfigError, PanelConfig};
pub use panel::{Clipboard, GeneratorPanel, Notice, PanelError, PanelEvent, PanelView, Theme};
pub use password_generation::{Alphabet, EmptyAlphabet, PasswordSampler};

/// A generated password. Its `Debug` output never shows the contents.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct Secret(String);

opaque_debug::implement!(Secret);

impl Secret {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Secret {
        Secret(s)
    }
}

//! The fixed catalog of supported language brushes and color themes.
//!
//! Both enumerations mirror the file set shipped with the bundled
//! highlighter library: one brush script per language under `js/brushes/`,
//! one theme stylesheet per color scheme under `css/`. The catalog is the
//! source of truth for name resolution and asset identifier derivation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::asset::{AssetId, HANDLE_PREFIX};

/// A named syntax-highlighting definition for one source language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Brush {
    AppleScript,
    As3,
    Bash,
    ColdFusion,
    Cpp,
    CSharp,
    Css,
    Delphi,
    Diff,
    Erlang,
    Groovy,
    Java,
    JavaFx,
    JScript,
    Perl,
    #[default]
    Php,
    Plain,
    PowerShell,
    Python,
    Ruby,
    Sass,
    Scala,
    Sql,
    Vb,
    Xml,
}

impl Brush {
    /// Every supported brush, in catalog order.
    pub const ALL: [Brush; 25] = [
        Brush::AppleScript,
        Brush::As3,
        Brush::Bash,
        Brush::ColdFusion,
        Brush::Cpp,
        Brush::CSharp,
        Brush::Css,
        Brush::Delphi,
        Brush::Diff,
        Brush::Erlang,
        Brush::Groovy,
        Brush::Java,
        Brush::JavaFx,
        Brush::JScript,
        Brush::Perl,
        Brush::Php,
        Brush::Plain,
        Brush::PowerShell,
        Brush::Python,
        Brush::Ruby,
        Brush::Sass,
        Brush::Scala,
        Brush::Sql,
        Brush::Vb,
        Brush::Xml,
    ];

    /// The catalog name, as it appears in the bundled library's file names.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Brush::AppleScript => "AppleScript",
            Brush::As3 => "AS3",
            Brush::Bash => "Bash",
            Brush::ColdFusion => "ColdFusion",
            Brush::Cpp => "Cpp",
            Brush::CSharp => "CSharp",
            Brush::Css => "Css",
            Brush::Delphi => "Delphi",
            Brush::Diff => "Diff",
            Brush::Erlang => "Erlang",
            Brush::Groovy => "Groovy",
            Brush::Java => "Java",
            Brush::JavaFx => "JavaFX",
            Brush::JScript => "JScript",
            Brush::Perl => "Perl",
            Brush::Php => "Php",
            Brush::Plain => "Plain",
            Brush::PowerShell => "PowerShell",
            Brush::Python => "Python",
            Brush::Ruby => "Ruby",
            Brush::Sass => "Sass",
            Brush::Scala => "Scala",
            Brush::Sql => "Sql",
            Brush::Vb => "Vb",
            Brush::Xml => "Xml",
        }
    }

    /// Lowercased name, used as the `brush:` class token client-side.
    #[must_use]
    pub fn slug(self) -> String {
        self.name().to_lowercase()
    }

    /// Resolve a brush from a name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Brush> {
        Brush::ALL
            .into_iter()
            .find(|brush| brush.name().eq_ignore_ascii_case(name))
    }

    /// Identifier of this brush's script asset.
    #[must_use]
    pub fn script_id(self) -> AssetId {
        AssetId::new(format!("{HANDLE_PREFIX}-sh{}", self.name()))
    }

    /// Path of this brush's script, relative to the asset root.
    #[must_use]
    pub fn script_path(self) -> String {
        format!("js/brushes/shBrush{}.js", self.name())
    }
}

impl FromStr for Brush {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Brush::from_name(s).ok_or_else(|| format!("invalid brush: '{s}'"))
    }
}

impl std::fmt::Display for Brush {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A named color scheme applied to highlighted code blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Default,
    Django,
    Eclipse,
    Emacs,
    FadeToGrey,
    MdUltra,
    Midnight,
    RDark,
}

impl Theme {
    /// Every supported theme, in catalog order.
    pub const ALL: [Theme; 8] = [
        Theme::Default,
        Theme::Django,
        Theme::Eclipse,
        Theme::Emacs,
        Theme::FadeToGrey,
        Theme::MdUltra,
        Theme::Midnight,
        Theme::RDark,
    ];

    /// The catalog name, as it appears in the bundled library's file names.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Django => "Django",
            Theme::Eclipse => "Eclipse",
            Theme::Emacs => "Emacs",
            Theme::FadeToGrey => "FadeToGrey",
            Theme::MdUltra => "MDUltra",
            Theme::Midnight => "Midnight",
            Theme::RDark => "RDark",
        }
    }

    /// Resolve a theme from a name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name().eq_ignore_ascii_case(name))
    }

    /// Identifier of this theme's stylesheet asset.
    #[must_use]
    pub fn stylesheet_id(self) -> AssetId {
        AssetId::new(format!("{HANDLE_PREFIX}-sh{}", self.name()))
    }

    /// Path of this theme's stylesheet, relative to the asset root.
    #[must_use]
    pub fn stylesheet_path(self) -> String {
        format!("css/shTheme{}.css", self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::from_name(s).ok_or_else(|| format!("invalid theme: '{s}'"))
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

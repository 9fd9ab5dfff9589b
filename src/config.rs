//! Page configuration.
//!
//! Loads the landing page content and animation timings from a TOML file,
//! falling back to built-in defaults for anything the file leaves out.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::anim::TypewriterConfig;

/// Default config template with comments, embedded at compile time.
const DEFAULT_CONFIG_TEMPLATE: &str = include_str!("default_config.toml");

/// Environment variable naming a config file when `--config` is absent
pub const CONFIG_ENV_VAR: &str = "PORTTY_CONFIG";

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub typewriter: TypewriterSettings,
    pub captions: CaptionSettings,
    pub header: HeaderSettings,
    pub hero: HeroSettings,
    /// Placeholder sections shown below the hero, in page order
    pub sections: Vec<SectionSettings>,
}

/// `[typewriter]`: the hero title animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterSettings {
    /// Phrases to type. A `\n` splits a phrase into two styled lines.
    pub phrases: Vec<String>,
    pub typing_interval_ms: i64,
    pub deleting_interval_ms: i64,
    pub pause_ms: i64,
    /// Shown when `phrases` is empty
    pub idle_text: String,
}

/// `[captions]`: the rotating description under the title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionSettings {
    pub items: Vec<String>,
    pub interval_ms: i64,
    /// Shown when `items` is empty
    pub fallback: String,
}

/// `[header]`: logo, navigation and scroll tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderSettings {
    pub logo: String,
    pub nav: Vec<Link>,
    /// Viewport row used to decide the active section
    pub reference_line: i64,
    /// Scroll offset (rows) after which the header turns solid
    pub scrolled_threshold: usize,
}

/// `[hero]`: static hero content around the animations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroSettings {
    pub badge: String,
    pub tech_tags: Vec<String>,
    pub actions: Vec<Link>,
    pub socials: Vec<String>,
}

/// A labelled link to a section anchor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub anchor: String,
}

/// `[[sections]]`: one placeholder section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSettings {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}

fn link(label: &str, anchor: &str) -> Link {
    Link {
        label: label.to_string(),
        anchor: anchor.to_string(),
    }
}

fn section(id: &str, title: &str, body: &str) -> SectionSettings {
    SectionSettings {
        id: id.to_string(),
        title: title.to_string(),
        body: body.to_string(),
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            typewriter: TypewriterSettings::default(),
            captions: CaptionSettings::default(),
            header: HeaderSettings::default(),
            hero: HeroSettings::default(),
            sections: vec![
                section(
                    "about",
                    "About Section",
                    "This is where the about section will go",
                ),
                section(
                    "portfolio",
                    "Portfolio Section",
                    "This is where the portfolio will go",
                ),
                section(
                    "contact",
                    "Contact Section",
                    "This is where the contact form will go",
                ),
            ],
        }
    }
}

impl Default for TypewriterSettings {
    fn default() -> Self {
        TypewriterSettings {
            phrases: vec![
                "Software\nEngineer".to_string(),
                "Project\nManager".to_string(),
            ],
            typing_interval_ms: 100,
            deleting_interval_ms: 50,
            pause_ms: 4000,
            idle_text: "Loading...".to_string(),
        }
    }
}

impl Default for CaptionSettings {
    fn default() -> Self {
        CaptionSettings {
            items: vec![
                "Building Modern, Full-Stack, and User-Centric Web Applications with Cutting-Edge Technologies.".to_string(),
                "Leading cross-functional teams to deliver innovative digital solutions that drive business growth.".to_string(),
            ],
            interval_ms: 6500,
            fallback: String::new(),
        }
    }
}

impl Default for HeaderSettings {
    fn default() -> Self {
        HeaderSettings {
            logo: "GS".to_string(),
            nav: vec![
                link("Home", "home"),
                link("About", "about"),
                link("Portfolio", "portfolio"),
                link("Contact", "contact"),
            ],
            reference_line: crate::sections::DEFAULT_REFERENCE_LINE,
            scrolled_threshold: crate::sections::DEFAULT_SCROLLED_THRESHOLD,
        }
    }
}

impl Default for HeroSettings {
    fn default() -> Self {
        HeroSettings {
            badge: "✨ Ready to innovate".to_string(),
            tech_tags: ["React JS", "Next JS", "Node JS", "Laravel"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            actions: vec![link("Projects", "portfolio"), link("Contact", "contact")],
            socials: ["GitHub", "LinkedIn", "Twitter"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl TypewriterSettings {
    /// Engine settings for [`crate::anim::Typewriter::new`]
    pub fn engine_config(&self) -> TypewriterConfig {
        TypewriterConfig {
            typing_interval_ms: self.typing_interval_ms,
            deleting_interval_ms: self.deleting_interval_ms,
            pause_ms: self.pause_ms,
            idle_text: self.idle_text.clone(),
        }
    }
}

impl Config {
    /// Loads configuration from `explicit`, else from `$PORTTY_CONFIG`, else
    /// returns defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match std::env::var_os(CONFIG_ENV_VAR) {
                Some(path) => Self::load_from(&PathBuf::from(path)),
                None => {
                    debug!("no config file given, using defaults");
                    Ok(Config::default())
                }
            },
        }
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            let config = Self::parse(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))?;
            info!(path = %path.display(), "loaded config");
            Ok(config)
        } else {
            debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Config::default())
        }
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// The commented default config file.
    pub fn default_template() -> &'static str {
        DEFAULT_CONFIG_TEMPLATE
    }
}

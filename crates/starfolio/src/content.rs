//! Portfolio content.
//!
//! The page text is data: a TOML document embedded at build time, optionally
//! replaced by a user file named in the config.

use std::fs;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;

/// Content shipped with the binary.
const BUILTIN: &str = include_str!("../assets/portfolio.toml");

/// Everything shown in the foreground.
#[derive(Debug, Clone, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tagline: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    pub about: About,
    pub skills: Skills,
    pub experience: Experience,
    pub projects: Projects,
    pub footer: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct About {
    pub heading: String,
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Skills {
    pub heading: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Experience {
    pub heading: String,
    #[serde(default)]
    pub entries: Vec<Role>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Role {
    pub role: String,
    pub company: String,
    pub period: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Projects {
    pub heading: String,
    #[serde(default)]
    pub entries: Vec<Project>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub title: String,
    pub tech: String,
}

impl Portfolio {
    /// The embedded content.
    pub fn builtin() -> Result<Self> {
        toml::from_str(BUILTIN).wrap_err("built-in portfolio content is invalid")
    }

    /// Load from `path`, or the embedded content when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::builtin();
        };
        let raw = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read content file {}", path.display()))?;
        toml::from_str(&raw)
            .wrap_err_with(|| format!("invalid content file {}", path.display()))
    }

    /// Initials for the hero badge.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(3)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parses() {
        let portfolio = Portfolio::builtin().unwrap();
        assert_eq!(portfolio.links.len(), 3);
        assert_eq!(portfolio.skills.items.len(), 6);
        assert_eq!(portfolio.experience.entries.len(), 2);
        assert_eq!(portfolio.projects.entries.len(), 3);
    }

    #[test]
    fn test_initials() {
        let mut portfolio = Portfolio::builtin().unwrap();
        portfolio.name = "ada  quasar lovelace nova".to_string();
        assert_eq!(portfolio.initials(), "AQL");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let missing = std::env::temp_dir().join("starfolio-no-such-content.toml");
        assert!(Portfolio::load(Some(&missing)).is_err());
        assert!(Portfolio::load(None).is_ok());
    }
}

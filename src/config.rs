use std::collections::HashSet;

use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

use crate::components::icon::Icon;
use crate::nav::{NavEntry, VisibilityConfig};

const SITE_JSON: &str = include_str!("../assets/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("site configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("navigation entry {label:?} has an empty anchor")]
    EmptyAnchor { label: String },
    #[error("anchor #{0} is used by more than one navigation entry")]
    DuplicateAnchor(String),
    #[error("visibility settings out of range: threshold {threshold}, bottom inset {inset_bottom_percent}%")]
    Visibility {
        threshold: f64,
        inset_bottom_percent: u32,
    },
    #[error("unknown clock time zone {name:?}: {reason}")]
    TimeZone { name: String, reason: String },
}

fn default_settle_ms() -> u32 {
    800
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavSettings {
    pub entries: Vec<NavEntry>,
    #[serde(default)]
    pub visibility: VisibilityConfig,
    #[serde(default = "default_settle_ms")]
    pub scroll_settle_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HudSettings {
    pub time_zone: String,
    pub status: String,
    pub coordinates: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub tagline: String,
    pub subtitle: String,
    pub summary: String,
    pub cv_href: String,
    pub linkedin_href: String,
    pub status_lines: Vec<(String, String)>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Card {
    pub title: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct About {
    pub intro: String,
    pub photo: Option<String>,
    pub cards: Vec<Card>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Apprenticeship {
    pub period: String,
    pub intro: String,
    pub motivations: Vec<Card>,
    pub missions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub date: String,
    pub points: Vec<String>,
    pub tags: Vec<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Education {
    pub degree: String,
    pub school: String,
    pub period: String,
    pub detail: String,
    #[serde(default)]
    pub modules: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub icon: Icon,
    pub skills: Vec<Skill>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skills {
    pub categories: Vec<SkillCategory>,
    pub soft_skills: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub icon: Icon,
    pub desc: String,
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Reason {
    pub title: String,
    pub desc: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactLink {
    pub href: String,
    pub icon: Icon,
    pub label: String,
    #[serde(default)]
    pub external: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteConfig {
    pub profile: Profile,
    pub nav: NavSettings,
    pub hud: HudSettings,
    pub about: About,
    pub apprenticeship: Apprenticeship,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Skills,
    pub academic_projects: Vec<Project>,
    pub personal_projects: Vec<Project>,
    pub reasons: Vec<Reason>,
    pub contact_links: Vec<ContactLink>,
}

impl SiteConfig {
    /// Parses and validates the configuration compiled into the binary.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.nav.entries {
            if entry.anchor_id.trim().is_empty() {
                return Err(ConfigError::EmptyAnchor {
                    label: entry.label.clone(),
                });
            }
            if !seen.insert(entry.anchor_id.as_str()) {
                return Err(ConfigError::DuplicateAnchor(entry.anchor_id.clone()));
            }
        }

        let visibility = &self.nav.visibility;
        if !visibility.is_valid() {
            return Err(ConfigError::Visibility {
                threshold: visibility.threshold,
                inset_bottom_percent: visibility.inset_bottom_percent,
            });
        }

        self.clock_zone()?;
        Ok(())
    }

    pub fn clock_zone(&self) -> Result<Tz, ConfigError> {
        self.hud
            .time_zone
            .parse::<Tz>()
            .map_err(|err| ConfigError::TimeZone {
                name: self.hud.time_zone.clone(),
                reason: err.to_string(),
            })
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.profile.first_name, self.profile.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> SiteConfig {
        SiteConfig::load().expect("embedded site config is valid")
    }

    #[test]
    fn embedded_config_loads() {
        let site = site();
        let anchors: Vec<_> = site
            .nav
            .entries
            .iter()
            .map(|e| e.anchor_id.as_str())
            .collect();
        assert_eq!(anchors.first(), Some(&"top"));
        assert!(anchors.contains(&"contact"));
        assert_eq!(site.nav.visibility, VisibilityConfig::default());
        assert_eq!(site.clock_zone().unwrap(), chrono_tz::Europe::Paris);
    }

    #[test]
    fn rejects_duplicate_anchor() {
        let mut site = site();
        let first = site.nav.entries[1].clone();
        site.nav.entries.push(first.clone());
        match site.validate() {
            Err(ConfigError::DuplicateAnchor(anchor)) => assert_eq!(anchor, first.anchor_id),
            other => panic!("expected duplicate anchor error, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_anchor() {
        let mut site = site();
        site.nav.entries[0].anchor_id = "  ".into();
        assert!(matches!(
            site.validate(),
            Err(ConfigError::EmptyAnchor { .. })
        ));
    }

    #[test]
    fn rejects_unknown_time_zone() {
        let mut site = site();
        site.hud.time_zone = "Mars/Olympus_Mons".into();
        let err = site.validate().unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus_Mons"));
    }

    #[test]
    fn rejects_threshold_above_one() {
        let mut site = site();
        site.nav.visibility.threshold = 1.25;
        assert!(matches!(
            site.validate(),
            Err(ConfigError::Visibility { .. })
        ));
    }

    #[test]
    fn reports_json_errors() {
        let err = SiteConfig::from_json("{ \"profile\": ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

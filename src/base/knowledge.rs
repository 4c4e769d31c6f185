//! Curated site content the responder answers from.
//!
//! The knowledge base is plain data: the builtin content ships with the binary,
//! and a TOML file of the same shape can replace it at startup. Once built it is
//! never mutated; share it behind an `Arc`.

use std::path::Path;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

use super::{content, types::Res};

fn default_team_keywords() -> Vec<String> {
    to_strings(&["team", "who works", "who is on", "members", "people", "consultant", "managing consultant", "research consultant", "agriculture"])
}

fn default_about_keywords() -> Vec<String> {
    to_strings(&["mission", "vision", "values", "acronym"])
}

fn default_services_keywords() -> Vec<String> {
    to_strings(&["services", "offer", "what do you do", "capabilities"])
}

fn default_sustainability_keywords() -> Vec<String> {
    to_strings(&["sustainability", "green", "impact", "carbon", "solar", "hydro", "plastic"])
}

fn default_contact_keywords() -> Vec<String> {
    to_strings(&["contact", "reach", "email", "call", "schedule"])
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

/// A member of the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    /// Short biography, shown on person lookups.
    #[serde(default)]
    pub bio: Option<String>,
    /// Focus tag, used when a member has no contact details.
    #[serde(default)]
    pub focus: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Keyword sets for each keyword-triggered category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keywords {
    #[serde(default = "default_team_keywords")]
    pub team: Vec<String>,
    /// The organization name is always added to this set.
    #[serde(default = "default_about_keywords")]
    pub about: Vec<String>,
    #[serde(default = "default_services_keywords")]
    pub services: Vec<String>,
    #[serde(default = "default_sustainability_keywords")]
    pub sustainability: Vec<String>,
    #[serde(default = "default_contact_keywords")]
    pub contact: Vec<String>,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            team: default_team_keywords(),
            about: default_about_keywords(),
            services: default_services_keywords(),
            sustainability: default_sustainability_keywords(),
            contact: default_contact_keywords(),
        }
    }
}

/// Immutable site content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub organization: String,
    /// Shown next to the values list, e.g. `Values (iVENTICE): ...`.
    #[serde(default)]
    pub values_acronym: Option<String>,
    pub mission: String,
    pub vision: String,
    #[serde(default)]
    pub values: Vec<String>,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub team: Vec<TeamMember>,
    #[serde(default)]
    pub sustainability: Vec<String>,
    #[serde(default)]
    pub keywords: Keywords,
}

impl KnowledgeBase {
    /// The content bundled with the binary.
    pub fn builtin() -> Res<Self> {
        Self::from_source(config::File::from_str(content::DEFAULT_KNOWLEDGE_BASE, config::FileFormat::Toml))
    }

    /// Loads a knowledge base from a TOML file.
    pub fn load(path: &Path) -> Res<Self> {
        Self::from_source(config::File::from(path.to_path_buf()).format(config::FileFormat::Toml))
    }

    fn from_source<S>(source: S) -> Res<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let knowledge: KnowledgeBase = config::Config::builder().add_source(source).build()?.try_deserialize()?;
        knowledge.validate()?;

        Ok(knowledge)
    }

    /// Checks the invariants the responder relies on.
    pub fn validate(&self) -> Res<()> {
        if self.organization.trim().is_empty() {
            return Err(anyhow!("Knowledge base organization must not be empty."));
        }

        for member in &self.team {
            if member.name.trim().is_empty() || member.role.trim().is_empty() {
                return Err(anyhow!("Every team member needs a name and a role."));
            }
        }

        let sets = [
            ("team", &self.keywords.team),
            ("about", &self.keywords.about),
            ("services", &self.keywords.services),
            ("sustainability", &self.keywords.sustainability),
            ("contact", &self.keywords.contact),
        ];

        for (category, keywords) in sets {
            if keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(anyhow!("Keyword set `{category}` contains an empty keyword."));
            }
        }

        Ok(())
    }
}

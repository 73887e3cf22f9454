//! Static protocol catalogue.
//!
//! Every built-in protocol is a [`ProtocolDefinition`]: metadata, the ordered steps shown in
//! the explanation panel, and the [`Scene`] the frame renderer draws. Definitions are built
//! once and never mutated.

mod application;
mod arq;
mod network;
mod security;
mod transport;

use std::{collections::BTreeMap, fmt, str::FromStr, sync::OnceLock};

use crate::{
    foundation::error::{ProtovizError, ProtovizResult},
    scene::model::Scene,
};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// One discrete phase of a protocol's illustrated sequence.
pub struct ProtocolStep {
    /// 1-based position in the sequence.
    pub ordinal: u32,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
/// OSI layer a protocol is filed under.
pub enum Category {
    DataLink,
    Network,
    Transport,
    Presentation,
    Application,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Self::DataLink,
        Self::Network,
        Self::Transport,
        Self::Presentation,
        Self::Application,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DataLink => "Data Link",
            Self::Network => "Network",
            Self::Transport => "Transport",
            Self::Presentation => "Presentation",
            Self::Application => "Application",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = ProtovizError;

    /// Accepts the label or its kebab-case form, case-insensitively (`Data Link`, `data-link`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_ascii_lowercase().replace(' ', "-") == norm)
            .ok_or_else(|| ProtovizError::validation(format!("unknown category '{s}'")))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        })
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A complete protocol visualization: metadata, steps and scene.
pub struct ProtocolDefinition {
    /// Unique key, used in routes and export file names.
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub difficulty: Difficulty,
    pub steps: Vec<ProtocolStep>,
    pub scene: Scene,
}

impl ProtocolDefinition {
    pub fn last_index(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    pub fn step(&self, index: usize) -> Option<&ProtocolStep> {
        self.steps.get(index)
    }

    pub fn validate(&self) -> ProtovizResult<()> {
        if self.id.is_empty() {
            return Err(ProtovizError::validation("protocol id must be non-empty"));
        }
        if self.steps.is_empty() {
            return Err(ProtovizError::validation(format!(
                "protocol '{}' has no steps",
                self.id
            )));
        }
        for (idx, step) in self.steps.iter().enumerate() {
            if usize::try_from(step.ordinal).ok() != Some(idx + 1) {
                return Err(ProtovizError::validation(format!(
                    "protocol '{}': step {} has ordinal {}",
                    self.id,
                    idx + 1,
                    step.ordinal
                )));
            }
        }
        self.scene
            .validate(self.steps.len())
            .map_err(|e| ProtovizError::validation(format!("protocol '{}': {e}", self.id)))
    }
}

/// Result of looking a protocol up by id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a ProtocolDefinition),
    Unknown { requested: &'a str },
}

/// Immutable id → definition mapping, iterated in declaration order.
#[derive(Clone, Debug)]
pub struct Registry {
    defs: Vec<ProtocolDefinition>,
    index: BTreeMap<String, usize>,
}

impl Registry {
    /// Build a registry, validating every definition and rejecting duplicate ids.
    pub fn new(defs: Vec<ProtocolDefinition>) -> ProtovizResult<Self> {
        let mut index = BTreeMap::new();
        for (i, def) in defs.iter().enumerate() {
            def.validate()?;
            if index.insert(def.id.clone(), i).is_some() {
                return Err(ProtovizError::validation(format!(
                    "duplicate protocol id '{}'",
                    def.id
                )));
            }
        }
        Ok(Self { defs, index })
    }

    /// The built-in catalogue, constructed on first use.
    pub fn builtin() -> ProtovizResult<&'static Registry> {
        static BUILTIN: OnceLock<Result<Registry, String>> = OnceLock::new();
        BUILTIN
            .get_or_init(|| Registry::new(builtin_definitions()).map_err(|e| e.to_string()))
            .as_ref()
            .map_err(|e| ProtovizError::validation(e.clone()))
    }

    pub fn get(&self, id: &str) -> Option<&ProtocolDefinition> {
        self.index.get(id).map(|&i| &self.defs[i])
    }

    pub fn lookup<'a>(&'a self, id: &'a str) -> Lookup<'a> {
        match self.get(id) {
            Some(def) => Lookup::Found(def),
            None => Lookup::Unknown { requested: id },
        }
    }

    /// Like [`Registry::get`], failing with [`ProtovizError::UnknownProtocol`].
    pub fn require(&self, id: &str) -> ProtovizResult<&ProtocolDefinition> {
        self.get(id)
            .ok_or_else(|| ProtovizError::unknown_protocol(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProtocolDefinition> {
        self.defs.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.defs.iter().map(|d| d.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

/// All built-in protocols, in catalogue order.
pub fn builtin_definitions() -> Vec<ProtocolDefinition> {
    let mut defs = arq::definitions();
    defs.extend(transport::definitions());
    defs.push(application::http());
    defs.push(application::dns());
    defs.extend(network::definitions());
    defs.push(application::dhcp());
    defs.push(application::ftp());
    defs.push(application::smtp());
    defs.extend(security::definitions());
    defs
}

/// Assign ordinals 1..=n to `(title, description)` pairs.
fn steps(items: &[(&str, &str)]) -> Vec<ProtocolStep> {
    items
        .iter()
        .zip(1..)
        .map(|(&(title, description), ordinal)| ProtocolStep {
            ordinal,
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn definition(
    id: &str,
    name: &str,
    description: &str,
    category: Category,
    difficulty: Difficulty,
    step_items: &[(&str, &str)],
    scene: Scene,
) -> ProtocolDefinition {
    ProtocolDefinition {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        category,
        difficulty,
        steps: steps(step_items),
        scene,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/protocols/mod.rs"]
mod tests;

use indexmap::IndexMap;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Dependency name to version specifier, in manifest order
pub type DependencyMap = IndexMap<String, String>;

/// The two fields read from a `package.json`; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default, deserialize_with = "section")]
    pub dependencies: Option<DependencyMap>,
    #[serde(default, rename = "devDependencies", deserialize_with = "section")]
    pub dev_dependencies: Option<DependencyMap>,
}

/// Shape of a dependency section as found in the wild
#[derive(Deserialize)]
#[serde(untagged)]
enum RawSection {
    Entries(IndexMap<String, serde_json::Value>),
    Malformed(IgnoredAny),
}

/// Only the names are printed, so any value is accepted; a section that
/// is not an object reads as absent.
fn section<'de, D>(deserializer: D) -> Result<Option<DependencyMap>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawSection>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawSection::Entries(entries)) => Some(
            entries
                .into_iter()
                .map(|(name, version)| {
                    let version = match version {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (name, version)
                })
                .collect(),
        ),
        Some(RawSection::Malformed(_)) | None => None,
    })
}

/// Labelled groups of dependencies, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencySection {
    Development,
    Runtime,
}

impl DependencySection {
    pub fn label(&self) -> &'static str {
        match self {
            DependencySection::Development => "devDependencies",
            DependencySection::Runtime => "dependencies",
        }
    }
}

impl Manifest {
    pub fn new(dependencies: Option<DependencyMap>, dev_dependencies: Option<DependencyMap>) -> Self {
        Self {
            dependencies,
            dev_dependencies,
        }
    }

    pub fn from_json_str(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Non-empty sections, devDependencies first.
    pub fn sections(&self) -> Vec<(DependencySection, &DependencyMap)> {
        [
            (DependencySection::Development, self.dev_dependencies.as_ref()),
            (DependencySection::Runtime, self.dependencies.as_ref()),
        ]
        .into_iter()
        .filter_map(|(section, deps)| deps.filter(|d| !d.is_empty()).map(|d| (section, d)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.sections().is_empty()
    }
}

use crate::error::CatalogError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Stable identifier for a documentation entry (e.g., `vertx-grpc`).
///
/// The id doubles as the catalog key, so every lookup, edit and diff is
/// expressed in terms of it.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Release version a catalog is published for (e.g., `4.3.0`).
///
/// Components are compared numerically so `4.10.0` sorts after `4.9.0`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Version(Vec<u32>);

impl Version {
    pub fn new(components: &[u32]) -> Self {
        Self(components.to_vec())
    }

    pub fn components(&self) -> &[u32] {
        &self.0
    }
}

impl FromStr for Version {
    type Err = CatalogError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidVersion(raw.to_string()));
        }
        trimmed
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(CatalogError::InvalidVersion(raw.to_string()));
                }
                part.parse::<u32>()
                    .map_err(|_| CatalogError::InvalidVersion(raw.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Version)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(".");
        f.write_str(&joined)
    }
}

impl Serialize for Version {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Grouping tag the documentation site uses to build its navigation.
///
/// Known variants carry a fixed display rank; `Other` keeps catalogs that
/// introduce new categories loadable, and sorts after every known one.
/// Equality, hashing and ordering go through [`Category::as_str`], so
/// `Other("web")` is the same category as `Web`.
#[derive(Clone, Debug)]
pub enum Category {
    Core,
    Web,
    DataAccess,
    Reactive,
    Microservices,
    Mqtt,
    Authentication,
    Messaging,
    Integration,
    EventBusBridges,
    Devops,
    Testing,
    Clustering,
    Services,
    Cloud,
    Advanced,
    Other(String),
}

const KNOWN_CATEGORIES: &[Category] = &[
    Category::Core,
    Category::Web,
    Category::DataAccess,
    Category::Reactive,
    Category::Microservices,
    Category::Mqtt,
    Category::Authentication,
    Category::Messaging,
    Category::Integration,
    Category::EventBusBridges,
    Category::Devops,
    Category::Testing,
    Category::Clustering,
    Category::Services,
    Category::Cloud,
    Category::Advanced,
];

impl Category {
    pub fn as_str(&self) -> &str {
        match self {
            Category::Core => "core",
            Category::Web => "web",
            Category::DataAccess => "data-access",
            Category::Reactive => "reactive",
            Category::Microservices => "microservices",
            Category::Mqtt => "mqtt",
            Category::Authentication => "authentication-and-authorization",
            Category::Messaging => "messaging",
            Category::Integration => "integration",
            Category::EventBusBridges => "event-bus-bridges",
            Category::Devops => "devops",
            Category::Testing => "testing",
            Category::Clustering => "clustering",
            Category::Services => "services",
            Category::Cloud => "cloud",
            Category::Advanced => "advanced",
            Category::Other(value) => value.as_str(),
        }
    }

    /// Known names map to their variant; anything else becomes `Other`.
    pub fn parse(value: &str) -> Self {
        KNOWN_CATEGORIES
            .iter()
            .find(|known| known.as_str() == value)
            .cloned()
            .unwrap_or_else(|| Category::Other(value.to_string()))
    }

    /// Position in the site navigation; unknown categories share the last slot.
    pub fn rank(&self) -> usize {
        KNOWN_CATEGORIES
            .iter()
            .position(|known| known.as_str() == self.as_str())
            .unwrap_or(KNOWN_CATEGORIES.len())
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl Ord for Category {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.as_str().cmp(other.as_str()))
    }
}

impl PartialOrd for Category {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Special status shown next to an entry in the site navigation.
#[derive(Clone, Debug)]
pub enum Label {
    TechnicalPreview,
    Deprecated,
    Other(String),
}

impl Label {
    pub fn as_str(&self) -> &str {
        match self {
            Label::TechnicalPreview => "Technical Preview",
            Label::Deprecated => "Deprecated",
            Label::Other(value) => value.as_str(),
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "Technical Preview" => Label::TechnicalPreview,
            "Deprecated" => Label::Deprecated,
            other => Label::Other(other.to_string()),
        }
    }
}

impl PartialEq for Label {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Label {}

impl Hash for Label {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Label {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Label {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Error type for catalog construction and loading
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog entry {index}: missing {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("could not read catalog {path}: {source}")]
    ReadError {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse catalog {path}: {source}")]
    ParseError {
        path: std::path::PathBuf,
        source: toml::de::Error,
    },
}

/// One selectable item: a bus route or a rail line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub id: String,
    pub label: String,
    /// Subtitle or code shown dimmed next to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl Entity {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Entity {
            id: id.into(),
            label: label.into(),
            secondary: None,
        }
    }

    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Case-insensitive substring match on id or label. `needle` must already
    /// be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.id.to_lowercase().contains(needle) || self.label.to_lowercase().contains(needle)
    }
}

/// A catalog entry as read from an external source, before validation
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntity {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
}

/// Ordered, read-only list of entities. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entities: Vec<Entity>,
}

impl Catalog {
    /// Build a catalog, keeping the first occurrence of any duplicated id.
    pub fn new(entities: Vec<Entity>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(entities.len());
        for entity in entities {
            if seen.insert(entity.id.clone()) {
                kept.push(entity);
            } else {
                tracing::warn!(id = %entity.id, "dropping duplicate catalog entry");
            }
        }
        Catalog { entities: kept }
    }

    /// Validate raw entries. Any entry with a missing or blank id or label
    /// rejects the whole catalog.
    pub fn from_raw(raw: Vec<RawEntity>) -> Result<Self, CatalogError> {
        let mut entities = Vec::with_capacity(raw.len());
        for (index, entry) in raw.into_iter().enumerate() {
            let id = non_blank(entry.id).ok_or(CatalogError::MissingField { index, field: "id" })?;
            let label = non_blank(entry.label)
                .ok_or(CatalogError::MissingField { index, field: "label" })?;
            entities.push(Entity {
                id,
                label,
                secondary: non_blank(entry.secondary),
            });
        }
        Ok(Catalog::new(entities))
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entity> {
        self.entities.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display label for an id, falling back to the raw id for stale selections
    pub fn label_for<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|e| e.label.as_str()).unwrap_or(id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Entity;
    type IntoIter = std::slice::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(id: Option<&str>, label: Option<&str>) -> RawEntity {
        RawEntity {
            id: id.map(String::from),
            label: label.map(String::from),
            secondary: None,
        }
    }

    #[test]
    fn duplicate_ids_keep_first_occurrence() {
        let catalog = Catalog::new(vec![
            Entity::new("a", "First"),
            Entity::new("b", "Bee"),
            Entity::new("a", "Second"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.label_for("a"), "First");
    }

    #[test]
    fn label_falls_back_to_raw_id() {
        let catalog = Catalog::new(vec![Entity::new("001", "Malcolm X")]);
        assert_eq!(catalog.label_for("001"), "Malcolm X");
        assert_eq!(catalog.label_for("999"), "999");
    }

    #[test]
    fn from_raw_rejects_missing_label() {
        let err = Catalog::from_raw(vec![raw(Some("a"), Some("A")), raw(Some("b"), None)])
            .unwrap_err();
        match err {
            CatalogError::MissingField { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "label");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn from_raw_rejects_blank_id() {
        let err = Catalog::from_raw(vec![raw(Some("   "), Some("A"))]).unwrap_err();
        assert_eq!(err.to_string(), "catalog entry 0: missing id");
    }

    #[test]
    fn from_raw_trims_and_drops_blank_secondary() {
        let catalog = Catalog::from_raw(vec![RawEntity {
            id: Some(" 005 ".into()),
            label: Some("Love Field Shuttle".into()),
            secondary: Some("".into()),
        }])
        .unwrap();
        let entity = catalog.get("005").unwrap();
        assert_eq!(entity.label, "Love Field Shuttle");
        assert!(entity.secondary.is_none());
    }

    #[test]
    fn empty_catalog_is_fine() {
        let catalog = Catalog::from_raw(Vec::new()).unwrap();
        assert!(catalog.is_empty());
    }
}

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde_json::Value;
use std::fmt;

/// Decoded repository description, before any schema checks
///
/// Keeps the top-level `package -> entry` pairs in document order. Entries
/// stay generic decoded values so that `RepositoryModel::normalize` can
/// report a malformed entry against the package that owns it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRepository {
    entries: Vec<(String, Value)>,
}

impl RawRepository {
    pub fn new(entries: Vec<(String, Value)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<(String, Value)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'de> Deserialize<'de> for RawRepository {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RepositoryVisitor;

        impl<'de> Visitor<'de> for RepositoryVisitor {
            type Value = RawRepository;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a mapping from package names to package entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((package, entry)) = map.next_entry::<String, Value>()? {
                    entries.push((package, entry));
                }
                Ok(RawRepository { entries })
            }
        }

        deserializer.deserialize_map(RepositoryVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_keeps_document_order() {
        let raw: RawRepository = serde_json::from_str(
            r#"{"zeta": {"dependencies": []}, "alpha": {}, "mid": {"dependencies": ["zeta"]}}"#,
        )
        .unwrap();

        let keys: Vec<&str> = raw.entries().iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(raw.entries()[2].1, json!({"dependencies": ["zeta"]}));
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let raw: RawRepository = serde_yaml_ng::from_str(
            "app:\n  dependencies: [lib]\nlib:\n  dependencies: []\n",
        )
        .unwrap();

        assert_eq!(raw.len(), 2);
        assert_eq!(raw.entries()[0].0, "app");
        assert_eq!(raw.entries()[0].1, json!({"dependencies": ["lib"]}));
    }

    #[test]
    fn test_deserialize_rejects_non_mapping_document() {
        let result: Result<RawRepository, _> = serde_json::from_str(r#"["a", "b"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_document() {
        let raw: RawRepository = serde_json::from_str("{}").unwrap();
        assert!(raw.is_empty());
    }
}

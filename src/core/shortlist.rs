//! Shortlist of favourite colleges kept in browser storage

use serde::{Deserialize, Serialize};

/// localStorage key holding the JSON array of college ids
pub const SHORTLIST_STORAGE_KEY: &str = "bookmarks";

/// Ordered, duplicate-free set of college ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shortlist {
    ids: Vec<String>,
}

impl Shortlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse stored JSON; anything unreadable yields an empty shortlist
    pub fn from_json(raw: Option<&str>) -> Self {
        let mut shortlist = raw
            .and_then(|raw| serde_json::from_str::<Shortlist>(raw).ok())
            .unwrap_or_default();
        shortlist.dedup();
        shortlist
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.ids).unwrap_or_else(|_| "[]".to_string())
    }

    /// Add or remove `id`; returns true when it is now shortlisted
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|saved| saved == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|saved| saved == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    fn dedup(&mut self) {
        let mut seen = Vec::with_capacity(self.ids.len());
        self.ids.retain(|id| {
            if seen.contains(id) {
                false
            } else {
                seen.push(id.clone());
                true
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut shortlist = Shortlist::new();
        assert!(shortlist.toggle("c-1"));
        assert!(shortlist.contains("c-1"));
        assert!(!shortlist.toggle("c-1"));
        assert!(shortlist.is_empty());
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut shortlist = Shortlist::new();
        shortlist.toggle("b");
        shortlist.toggle("a");
        assert_eq!(shortlist.to_json(), r#"["b","a"]"#);
        assert_eq!(Shortlist::from_json(Some(&shortlist.to_json())), shortlist);
    }

    #[test]
    fn test_corrupt_storage_is_empty() {
        assert!(Shortlist::from_json(Some("{not json")).is_empty());
        assert!(Shortlist::from_json(Some(r#"{"a": 1}"#)).is_empty());
        assert!(Shortlist::from_json(None).is_empty());
    }

    #[test]
    fn test_stored_duplicates_collapse() {
        let shortlist = Shortlist::from_json(Some(r#"["x","y","x"]"#));
        assert_eq!(shortlist.ids(), &["x", "y"]);
    }
}

//! College directory: read-only college records plus the client-side
//! search, sort and compare operations used by the public pages.
//!
//! Filtering is a linear scan over the page of records returned by
//! `/colleges`. That is fine for the tens-to-hundreds of records the API
//! returns today; past a few hundred, search belongs on the server.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Maximum number of colleges in a side-by-side comparison
pub const MAX_COMPARE: usize = 3;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlacementStats {
    #[serde(default)]
    pub average_package: Option<String>,
    #[serde(default)]
    pub highest_package: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub placement_rate: Option<f64>,
    #[serde(default)]
    pub top_recruiters: Vec<String>,
}

/// College record as served by the API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct College {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub established_year: Option<f64>,
    #[serde(default)]
    pub affiliation: Option<String>,
    #[serde(default)]
    pub accreditation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fee_structure: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    #[serde(default)]
    pub courses: Vec<String>,
    #[serde(default)]
    pub placement: Option<PlacementStats>,
    #[serde(default)]
    pub gallery: Vec<String>,
}

impl College {
    /// "City, State" with whichever parts are known
    pub fn location(&self) -> String {
        [self.city.as_deref(), self.state.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.trim().is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn established(&self) -> Option<i32> {
        self.established_year.map(|year| year as i32)
    }

    /// Rating formatted as "4.5/5.0", or "N/A"
    pub fn rating_label(&self) -> String {
        match self.rating {
            Some(rating) if rating > 0.0 => format!("{:.1}/5.0", rating),
            _ => "N/A".to_string(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self
                .city
                .as_deref()
                .map(|city| city.to_lowercase().contains(needle))
                .unwrap_or(false)
    }
}

/// Colleges whose name or city contains `query`, case-insensitively
///
/// An empty query returns the input unchanged; order is preserved.
pub fn filter_colleges(colleges: &[College], query: &str) -> Vec<College> {
    if query.is_empty() {
        return colleges.to_vec();
    }
    let needle = query.to_lowercase();
    colleges
        .iter()
        .filter(|college| college.matches(&needle))
        .cloned()
        .collect()
}

/// Directory sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Order returned by the API
    #[default]
    Relevance,
    Name,
    /// Highest rated first; unrated last
    Rating,
    /// Oldest first; unknown last
    Established,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Relevance,
        SortKey::Name,
        SortKey::Rating,
        SortKey::Established,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::Name => "name",
            SortKey::Rating => "rating",
            SortKey::Established => "established",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Relevance",
            SortKey::Name => "Name (A-Z)",
            SortKey::Rating => "Top Rated",
            SortKey::Established => "Oldest First",
        }
    }

    pub fn parse(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == value)
            .unwrap_or_default()
    }
}

/// Stable sort in place
pub fn sort_colleges(colleges: &mut [College], key: SortKey) {
    match key {
        SortKey::Relevance => {}
        SortKey::Name => colleges.sort_by_key(|c| c.name.to_lowercase()),
        SortKey::Rating => colleges.sort_by(|a, b| {
            match (a.rating, b.rating) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }
        }),
        SortKey::Established => colleges.sort_by_key(|c| c.established().unwrap_or(i32::MAX)),
    }
}

pub fn find_college<'a>(colleges: &'a [College], id: &str) -> Option<&'a College> {
    colleges.iter().find(|college| college.id == id)
}

/// Result of toggling a college in the comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    /// Selection already holds `MAX_COMPARE` colleges; nothing changed
    LimitReached,
}

/// Colleges picked for comparison, in selection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompareSelection {
    ids: Vec<String>,
}

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, id: &str) -> ToggleOutcome {
        if let Some(pos) = self.ids.iter().position(|selected| selected == id) {
            self.ids.remove(pos);
            ToggleOutcome::Removed
        } else if self.ids.len() >= MAX_COMPARE {
            ToggleOutcome::LimitReached
        } else {
            self.ids.push(id.to_string());
            ToggleOutcome::Added
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|selected| selected == id)
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

    /// Number of empty comparison columns left
    pub fn open_slots(&self) -> usize {
        MAX_COMPARE - self.ids.len()
    }

    /// Selected colleges in selection order; ids not in `pool` are skipped
    pub fn resolve(&self, pool: &[College]) -> Vec<College> {
        self.ids
            .iter()
            .filter_map(|id| find_college(pool, id).cloned())
            .collect()
    }
}

/// Accept numbers, numeric strings, or null
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college(id: &str, name: &str, city: Option<&str>) -> College {
        College {
            id: id.to_string(),
            name: name.to_string(),
            city: city.map(str::to_string),
            ..College::default()
        }
    }

    fn sample() -> Vec<College> {
        vec![
            college("1", "IIT Bombay", Some("Mumbai")),
            college("2", "Delhi University", Some("Delhi")),
            college("3", "Christ University", None),
        ]
    }

    fn names(colleges: &[College]) -> Vec<&str> {
        colleges.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_filter_iit_scenario() {
        let result = filter_colleges(&sample()[..2], "IIT");
        assert_eq!(names(&result), vec!["IIT Bombay"]);
    }

    #[test]
    fn test_filter_matches_city_case_insensitive() {
        let result = filter_colleges(&sample(), "mUMBAI");
        assert_eq!(names(&result), vec!["IIT Bombay"]);
    }

    #[test]
    fn test_filter_empty_query_is_identity() {
        assert_eq!(filter_colleges(&sample(), ""), sample());
    }

    #[test]
    fn test_filter_is_idempotent() {
        for query in ["university", "del", "zzz", "i"] {
            let once = filter_colleges(&sample(), query);
            let twice = filter_colleges(&once, query);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_filter_skips_missing_city() {
        let result = filter_colleges(&sample(), "delhi");
        assert_eq!(names(&result), vec!["Delhi University"]);
    }

    #[test]
    fn test_sort_by_rating_puts_unrated_last() {
        let mut colleges = sample();
        colleges[0].rating = Some(4.2);
        colleges[2].rating = Some(4.8);
        sort_colleges(&mut colleges, SortKey::Rating);
        assert_eq!(
            names(&colleges),
            vec!["Christ University", "IIT Bombay", "Delhi University"]
        );
    }

    #[test]
    fn test_sort_by_name_and_established() {
        let mut colleges = sample();
        sort_colleges(&mut colleges, SortKey::Name);
        assert_eq!(
            names(&colleges),
            vec!["Christ University", "Delhi University", "IIT Bombay"]
        );

        colleges[2].established_year = Some(1958.0);
        colleges[1].established_year = Some(1922.0);
        sort_colleges(&mut colleges, SortKey::Established);
        assert_eq!(
            names(&colleges),
            vec!["Delhi University", "IIT Bombay", "Christ University"]
        );
    }

    #[test]
    fn test_sort_key_parse_defaults() {
        assert_eq!(SortKey::parse("rating"), SortKey::Rating);
        assert_eq!(SortKey::parse("bogus"), SortKey::Relevance);
    }

    #[test]
    fn test_compare_selection_limit() {
        let mut selection = CompareSelection::new();
        for id in ["a", "b", "c"] {
            assert_eq!(selection.toggle(id), ToggleOutcome::Added);
        }
        assert_eq!(selection.toggle("d"), ToggleOutcome::LimitReached);
        assert_eq!(selection.len(), MAX_COMPARE);
        assert!(!selection.contains("d"));

        assert_eq!(selection.toggle("b"), ToggleOutcome::Removed);
        assert_eq!(selection.open_slots(), 1);
        assert_eq!(selection.toggle("d"), ToggleOutcome::Added);
        assert_eq!(selection.ids(), &["a", "c", "d"]);
    }

    #[test]
    fn test_compare_resolve_keeps_selection_order() {
        let mut selection = CompareSelection::new();
        selection.toggle("3");
        selection.toggle("missing");
        selection.toggle("1");
        let resolved = selection.resolve(&sample());
        assert_eq!(names(&resolved), vec!["Christ University", "IIT Bombay"]);
    }

    #[test]
    fn test_lenient_numeric_fields() {
        let json = r#"{"id": "9", "name": "NIT", "rating": "4.3", "established_year": 1960, "type": "Public"}"#;
        let college: College = serde_json::from_str(json).unwrap();
        assert_eq!(college.rating, Some(4.3));
        assert_eq!(college.established(), Some(1960));
        assert_eq!(college.kind.as_deref(), Some("Public"));
        assert_eq!(college.rating_label(), "4.3/5.0");
    }

    #[test]
    fn test_location_label() {
        let mut c = college("1", "X", Some("Pune"));
        assert_eq!(c.location(), "Pune");
        c.state = Some("Maharashtra".into());
        assert_eq!(c.location(), "Pune, Maharashtra");
        c.city = None;
        assert_eq!(c.location(), "Maharashtra");
    }
}

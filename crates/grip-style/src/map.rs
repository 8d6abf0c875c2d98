use serde::Serialize;
use std::collections::btree_map::{self, BTreeMap};

/// Property/value pairs that passed the style policy.
///
/// Only the sanitizer can insert entries, so every key is allow-listed and
/// no value carries a forbidden token. Serializes as a plain JSON object,
/// the shape a DOM `style` prop expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeStyleMap(BTreeMap<String, String>);

impl SafeStyleMap {
    pub(crate) fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub(crate) fn insert(&mut self, name: String, value: String) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// Serialize back into declaration text: `name: value; name2: value2`.
    pub fn to_css_text(&self) -> String {
        self.0
            .iter()
            .map(|(name, value)| format!("{name}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl<'a> IntoIterator for &'a SafeStyleMap {
    type Item = (&'a String, &'a String);
    type IntoIter = btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SafeStyleMap {
        let mut map = SafeStyleMap::new();
        map.insert("font-size".into(), "12px".into());
        map.insert("color".into(), "red".into());
        map
    }

    #[test]
    fn css_text_is_sorted_by_name() {
        assert_eq!(sample().to_css_text(), "color: red; font-size: 12px");
    }

    #[test]
    fn empty_map_has_empty_css_text() {
        assert_eq!(SafeStyleMap::default().to_css_text(), "");
        assert!(SafeStyleMap::default().is_empty());
    }

    #[test]
    fn insert_replaces_existing() {
        let mut map = sample();
        map.insert("color".into(), "blue".into());
        assert_eq!(map.get("color"), Some("blue"));
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn serializes_as_object() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "color": "red", "font-size": "12px" })
        );
    }

    #[test]
    fn iterates_pairs() {
        let map = sample();
        let names: Vec<&str> = map.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["color", "font-size"]);
        assert_eq!((&map).into_iter().count(), 2);
    }
}

use std::collections::HashSet;

/// Parses a company's stored `tags_ids` into a set of tag identifiers.
///
/// The column is written inconsistently upstream: sometimes a JSON array of
/// strings, sometimes a comma-separated list. JSON is tried first; anything
/// that is not a JSON string array falls back to comma splitting. Identifier
/// shape is not validated, unknown identifiers simply never match.
pub fn resolve_tag_ids(raw: Option<&str>) -> HashSet<String> {
    let Some(raw) = raw else {
        return HashSet::new();
    };

    match serde_json::from_str::<Vec<String>>(raw) {
        Ok(ids) => ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect(),
        Err(_) => raw
            .split(',')
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(ids: &[&str]) -> HashSet<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_null_is_empty() {
        assert!(resolve_tag_ids(None).is_empty());
    }

    #[test]
    fn test_json_array() {
        assert_eq!(resolve_tag_ids(Some(r#"["t1","t2"]"#)), set(&["t1", "t2"]));
    }

    #[test]
    fn test_csv_fallback_trims_and_drops_empties() {
        assert_eq!(resolve_tag_ids(Some("a, b,c")), set(&["a", "b", "c"]));
        assert_eq!(resolve_tag_ids(Some(" a ,, ,b,")), set(&["a", "b"]));
    }

    #[test]
    fn test_single_bare_identifier() {
        assert_eq!(resolve_tag_ids(Some("t9")), set(&["t9"]));
    }

    #[test]
    fn test_empty_inputs_resolve_to_empty_set() {
        assert!(resolve_tag_ids(Some("")).is_empty());
        assert!(resolve_tag_ids(Some("[]")).is_empty());
        assert!(resolve_tag_ids(Some(" , ,")).is_empty());
    }

    #[test]
    fn test_json_of_wrong_shape_falls_back_to_csv() {
        // A JSON object is not a string array, so it is split on commas verbatim.
        let ids = resolve_tag_ids(Some(r#"{"a":1}"#));
        assert_eq!(ids, set(&[r#"{"a":1}"#]));
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(resolve_tag_ids(Some(r#"["t1","t1"]"#)), set(&["t1"]));
    }
}

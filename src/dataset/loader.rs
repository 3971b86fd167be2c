//! File loaders for command networks and numeric series

use crate::core::{Entity, Error, Relation, Result, ResultExt};
use crate::graph::AuthorityGraph;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// On-disk shape of a command network
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDocument {
    /// Known entities; inferred from relation endpoints when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<Entity>>,
    #[serde(default)]
    pub relations: Vec<Relation>,
}

impl NetworkDocument {
    pub fn from_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn into_graph(self) -> Result<AuthorityGraph> {
        match self.entities {
            Some(entities) => AuthorityGraph::new(entities, self.relations),
            None => AuthorityGraph::from_relations(self.relations),
        }
    }
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Load a network from `.toml`, or JSON for any other extension.
pub fn load_network(path: &Path) -> Result<AuthorityGraph> {
    let contents = fs::read_to_string(path)?;
    let document = if has_extension(path, "toml") {
        NetworkDocument::from_toml(&contents)
    } else {
        NetworkDocument::from_json(&contents)
    }
    .context(format!("Failed to load network {}", path.display()))?;

    debug!(
        path = %path.display(),
        relations = document.relations.len(),
        "Loaded network document"
    );
    document.into_graph()
}

/// Parse numbers separated by whitespace, commas or newlines.
///
/// Everything after `#` on a line is ignored. Values are returned as read;
/// validity is the auditor's concern.
pub fn parse_series_text(origin: &str, contents: &str) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    for (line_no, line) in contents.lines().enumerate() {
        let data = line.split('#').next().unwrap_or("");
        for token in data
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
        {
            let value = token.parse::<f64>().map_err(|e| {
                Error::parse(origin, line_no + 1, format!("'{}': {}", token, e))
            })?;
            values.push(value);
        }
    }
    Ok(values)
}

/// Load a series from a `.json` array, or delimited text for any other extension.
pub fn load_series(path: &Path) -> Result<Vec<f64>> {
    let contents = fs::read_to_string(path)?;
    let values = if has_extension(path, "json") {
        serde_json::from_str::<Vec<f64>>(&contents)
            .map_err(Error::from)
            .context(format!("Failed to load series {}", path.display()))?
    } else {
        parse_series_text(&path.display().to_string(), &contents)?
    };

    debug!(path = %path.display(), values = values.len(), "Loaded series");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_series_text_mixed_separators() {
        let text = indoc! {"
            # precinct totals
            120, 340 5600
            7.5	88   # trailing comment
        "};
        let values = parse_series_text("inline", text).unwrap();
        assert_eq!(values, vec![120.0, 340.0, 5600.0, 7.5, 88.0]);
    }

    #[test]
    fn test_parse_series_text_reports_line() {
        let text = "1\n2\nthree\n";
        match parse_series_text("totals.txt", text) {
            Err(Error::Parse { origin, line, .. }) => {
                assert_eq!(origin, "totals.txt");
                assert_eq!(line, 3);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_series_text_keeps_invalid_numbers() {
        let values = parse_series_text("inline", "0 -5 NaN").unwrap();
        assert_eq!(values.len(), 3);
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_network_document_accepts_capitalized_columns() {
        let json = r#"{"relations": [{"Source": "a", "Target": "b", "Type": "Control"}]}"#;
        let document = NetworkDocument::from_json(json).unwrap();
        assert_eq!(
            document.relations,
            vec![Relation::new("a", "b").with_kind("Control")]
        );
    }

    #[test]
    fn test_network_document_toml_with_entities() {
        let toml_content = indoc! {r#"
            [[entities]]
            id = "hq"
            label = "command"

            [[entities]]
            id = "unit"

            [[relations]]
            source = "hq"
            target = "unit"
        "#};
        let graph = NetworkDocument::from_toml(toml_content)
            .unwrap()
            .into_graph()
            .unwrap();
        assert_eq!(graph.entity_count(), 2);
        assert_eq!(graph.entity("hq").unwrap().label.as_deref(), Some("command"));
    }

    #[test]
    fn test_declared_entities_make_dangling_relations_malformed() {
        let json = r#"{
            "entities": [{"id": "a"}],
            "relations": [{"source": "a", "target": "b"}]
        }"#;
        let result = NetworkDocument::from_json(json).unwrap().into_graph();
        assert!(matches!(result, Err(Error::MalformedGraph { .. })));
    }

    #[test]
    fn test_load_series_json_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("series.json");
        std::fs::write(&path, "[1, 20, 300.5]").unwrap();
        assert_eq!(load_series(&path).unwrap(), vec![1.0, 20.0, 300.5]);
    }

    #[test]
    fn test_load_network_invalid_json_has_context() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_network(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to load network"));
    }
}

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fs;
use std::io::Read;

/// An item eligible for selection. Identity is `name`; any other fields are
/// carried along untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate {
    pub fn new(name: impl Into<String>) -> Self {
        Candidate {
            name: name.into(),
            extra: Map::new(),
        }
    }
}

// Build a candidate universe, keeping the first occurrence of every name.
pub fn dedup_by_name(items: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<String> = HashSet::new();
    items
        .into_iter()
        .filter(|c| {
            if seen.insert(c.name.clone()) {
                true
            } else {
                log::warn!("dropping duplicate candidate `{}`", c.name);
                false
            }
        })
        .collect()
}

fn candidate_from_value(index: usize, v: Value) -> Result<Candidate, LoadError> {
    match v {
        Value::String(s) if !s.trim().is_empty() => Ok(Candidate::new(s.trim())),
        Value::Object(mut obj) => match obj.remove("name") {
            Some(Value::String(name)) if !name.trim().is_empty() => Ok(Candidate {
                name: name.trim().to_string(),
                extra: obj,
            }),
            _ => Err(LoadError::MissingName { index }),
        },
        _ => Err(LoadError::MissingName { index }),
    }
}

/// Parse candidate text: a JSON array of objects/strings, a single JSON
/// object or string, or one name per line.
///
/// Bare JSON numbers, booleans and `null` are read as a one-line names file,
/// so a file holding just `2024` is the candidate "2024".
pub fn parse_items(text: &str) -> Result<Vec<Candidate>, LoadError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(values)) => values
            .into_iter()
            .enumerate()
            .map(|(i, v)| candidate_from_value(i, v))
            .collect(),
        Ok(v @ (Value::Object(_) | Value::String(_))) => Ok(vec![candidate_from_value(0, v)?]),
        _ => Ok(parse_lines(text)),
    }
}

fn parse_lines(text: &str) -> Vec<Candidate> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(Candidate::new)
        .collect()
}

// Read candidates from a file path, or stdin when the path is "-".
pub fn load_items(path: &str) -> Result<Vec<Candidate>, LoadError> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|err| LoadError::Io {
                source_name: "stdin".to_string(),
                err,
            })?;
        buf
    } else {
        fs::read_to_string(path).map_err(|err| LoadError::Io {
            source_name: path.to_string(),
            err,
        })?
    };
    let items = parse_items(&text)?;
    log::debug!("loaded {} candidates from {}", items.len(), path);
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[Candidate]) -> Vec<&str> {
        items.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_parse_json_objects_keeps_extra_fields() {
        let text = r#"[{"name":"Ethereum","chainId":1},{"name":"Solana"}]"#;
        let items = parse_items(text).unwrap();
        assert_eq!(names(&items), vec!["Ethereum", "Solana"]);
        assert_eq!(items[0].extra.get("chainId"), Some(&Value::from(1)));
        assert!(items[1].extra.is_empty());

        // opaque fields come back out when serialized
        let out = serde_json::to_value(&items[0]).unwrap();
        assert_eq!(out["name"], "Ethereum");
        assert_eq!(out["chainId"], 1);
    }

    #[test]
    fn test_parse_json_strings_and_missing_name() {
        let items = parse_items(r#"["a", "b"]"#).unwrap();
        assert_eq!(names(&items), vec!["a", "b"]);

        let err = parse_items(r#"[{"name":"ok"},{"title":"nope"}]"#).unwrap_err();
        assert!(matches!(err, LoadError::MissingName { index: 1 }));
        let err = parse_items(r#"[{"name":"  "}]"#).unwrap_err();
        assert!(matches!(err, LoadError::MissingName { index: 0 }));
    }

    #[test]
    fn test_parse_single_json_object_or_string() {
        let items = parse_items(r#"{"name":"Ethereum","chainId":1}"#).unwrap();
        assert_eq!(names(&items), vec!["Ethereum"]);
        assert_eq!(items[0].extra.get("chainId"), Some(&Value::from(1)));

        let items = parse_items(r#" "Solana" "#).unwrap();
        assert_eq!(names(&items), vec!["Solana"]);

        let err = parse_items(r#"{"chainId":1}"#).unwrap_err();
        assert!(matches!(err, LoadError::MissingName { index: 0 }));
        let err = parse_items(r#""""#).unwrap_err();
        assert!(matches!(err, LoadError::MissingName { index: 0 }));
    }

    #[test]
    fn test_parse_bare_scalar_is_a_name_line() {
        assert_eq!(names(&parse_items("2024\n").unwrap()), vec!["2024"]);
        assert_eq!(names(&parse_items("true").unwrap()), vec!["true"]);
    }

    #[test]
    fn test_parse_plain_lines() {
        let items = parse_items("Ethereum\n\n  Solana  \nPolygon\n").unwrap();
        assert_eq!(names(&items), vec!["Ethereum", "Solana", "Polygon"]);
    }

    #[test]
    fn test_dedup_first_occurrence_wins() {
        let mut first = Candidate::new("A");
        first.extra.insert("n".to_string(), Value::from(1));
        let mut second = Candidate::new("A");
        second.extra.insert("n".to_string(), Value::from(2));
        let out = dedup_by_name(vec![first.clone(), Candidate::new("B"), second]);
        assert_eq!(names(&out), vec!["A", "B"]);
        assert_eq!(out[0], first);
    }

    #[test]
    fn test_load_items_from_file_and_missing_file() {
        let path = std::env::temp_dir().join(format!("tagsel-items-{}.json", std::process::id()));
        fs::write(&path, r#"[{"name":"x"}]"#).unwrap();
        let items = load_items(path.to_str().unwrap()).unwrap();
        assert_eq!(names(&items), vec!["x"]);
        fs::remove_file(&path).unwrap();

        let err = load_items(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}

//! Dictionary file loading and glossary construction

use std::fs;
use std::path::Path;
use std::sync::Arc;

use lemmata_engine::Glossary;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// One dictionary entry: a canonical term, its definition, and any
/// aliases that should resolve to the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictEntry {
    /// The canonical term.
    pub term: String,
    /// The definition text.
    pub definition: String,
    /// Alternative spellings indexed alongside the term.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Loads a dictionary file: a JSON array of entries.
pub fn load_dictionary(path: &Path) -> Result<Vec<DictEntry>, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Dictionary {
        path: path.to_path_buf(),
        source,
    })
}

/// Builds a glossary from dictionary entries. The canonical term and
/// every alias become keys for the same shared entry.
pub fn build_glossary(entries: Vec<DictEntry>) -> Glossary<Arc<DictEntry>> {
    let count = entries.len();
    let mut glossary = Glossary::new();
    let pairs = entries.into_iter().flat_map(|entry| {
        let entry = Arc::new(entry);
        let mut keys = vec![(entry.term.clone(), Arc::clone(&entry))];
        keys.extend(
            entry
                .aliases
                .iter()
                .map(|alias| (alias.clone(), Arc::clone(&entry))),
        );
        keys
    });
    glossary.build(pairs, true);
    log::debug!("indexed {count} dictionary entries");
    glossary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(term: &str, definition: &str, aliases: &[&str]) -> DictEntry {
        DictEntry {
            term: term.to_owned(),
            definition: definition.to_owned(),
            aliases: aliases.iter().map(|&alias| alias.to_owned()).collect(),
        }
    }

    #[test]
    fn aliases_resolve_to_the_canonical_entry() {
        let glossary = build_glossary(vec![entry(
            "radix tree",
            "a compressed trie",
            &["patricia trie"],
        )]);
        let by_term = glossary.get("radix tree").expect("term indexed");
        let by_alias = glossary.get("Patricia Trie").expect("alias indexed");
        assert_eq!(by_term.term, "radix tree");
        assert!(Arc::ptr_eq(by_term, by_alias));
    }

    #[test]
    fn dictionary_json_round_trips() {
        let json = r#"[
            {"term": "trie", "definition": "a prefix tree"},
            {"term": "node", "definition": "a tree element", "aliases": ["vertex"]}
        ]"#;
        let entries: Vec<DictEntry> = serde_json::from_str(json).expect("valid JSON");
        assert_eq!(entries.len(), 2);
        assert!(entries[0].aliases.is_empty());
        assert_eq!(entries[1].aliases, ["vertex"]);
    }
}

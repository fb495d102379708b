//! JSON manifest generator for tooling outside Rust

use anyhow::Result;
use serde_json::{Map, Value};

use crate::model::IdTable;

/// Generate `{ "<module>": { "<NAME>": value, ... }, ... }`.
///
/// Only non-empty categories appear. Key order follows the table.
pub fn generate_json_manifest(table: &IdTable) -> Result<String> {
    let mut root = Map::new();

    for section in table.ordered_sections() {
        let entries: Map<String, Value> = section
            .entries
            .iter()
            .map(|e| (e.name.clone(), Value::from(e.value)))
            .collect();
        root.insert(
            section.category.module_name().to_string(),
            Value::Object(entries),
        );
    }

    let mut output = serde_json::to_string_pretty(&Value::Object(root))?;
    output.push('\n');
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, IdEntry};

    #[test]
    fn test_generate_manifest() {
        let mut table = IdTable::default();
        table.push(Category::Events, IdEntry::new("PLAY_B", 2));
        table.push(Category::Events, IdEntry::new("PLAY_A", 1));
        table.push(Category::AudioDevices, IdEntry::new("NO_OUTPUT", 2317455096));

        let json = generate_json_manifest(&table).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["events"]["PLAY_A"], 1);
        assert_eq!(value["audio_devices"]["NO_OUTPUT"], 2317455096u32);
        assert!(value.get("busses").is_none());
        assert!(json.find("PLAY_B").unwrap() < json.find("PLAY_A").unwrap());
        assert!(json.ends_with("}\n"));
    }
}

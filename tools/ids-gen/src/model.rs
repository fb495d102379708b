//! Intermediate representation for the identifier table

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier categories exported by the sound-design project, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Events,
    GameParameters,
    Busses,
    AuxBusses,
    AudioDevices,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Events,
        Category::GameParameters,
        Category::Busses,
        Category::AuxBusses,
        Category::AudioDevices,
    ];

    /// Namespace label used in the exported header
    pub fn namespace(self) -> &'static str {
        match self {
            Category::Events => "EVENTS",
            Category::GameParameters => "GAME_PARAMETERS",
            Category::Busses => "BUSSES",
            Category::AuxBusses => "AUX_BUSSES",
            Category::AudioDevices => "AUDIO_DEVICES",
        }
    }

    /// Module name used in the generated Rust table
    pub fn module_name(self) -> &'static str {
        match self {
            Category::Events => "events",
            Category::GameParameters => "game_parameters",
            Category::Busses => "busses",
            Category::AuxBusses => "aux_busses",
            Category::AudioDevices => "audio_devices",
        }
    }

    pub fn from_namespace(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.namespace() == name)
    }

    pub fn from_module_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.module_name() == name)
    }
}

/// Single named identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdEntry {
    pub name: String,
    pub value: u32,
}

impl IdEntry {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// All identifiers of one category, in export order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySection {
    pub category: Category,
    pub entries: Vec<IdEntry>,
}

/// Complete identifier table extracted from an export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdTable {
    pub sections: Vec<CategorySection>,
}

/// A single problem found while validating an [`IdTable`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate name {name} in {}", .category.namespace())]
    DuplicateName { category: Category, name: String },

    #[error("invalid identifier name {name:?} in {}", .category.namespace())]
    InvalidName { category: Category, name: String },

    #[error("name {name} in {} is reserved by the generated table", .category.namespace())]
    ReservedName { category: Category, name: String },

    #[error("category {} appears more than once", .0.namespace())]
    DuplicateCategory(Category),

    #[error("no events exported")]
    NoEvents,
}

impl IdTable {
    pub fn section(&self, category: Category) -> Option<&CategorySection> {
        self.sections.iter().find(|s| s.category == category)
    }

    /// Entries of a category, empty when the category was not exported
    pub fn entries(&self, category: Category) -> &[IdEntry] {
        self.section(category)
            .map(|s| s.entries.as_slice())
            .unwrap_or(&[])
    }

    /// Non-empty sections in canonical category order
    pub fn ordered_sections(&self) -> Vec<&CategorySection> {
        Category::ALL
            .into_iter()
            .filter_map(|c| self.section(c))
            .filter(|s| !s.entries.is_empty())
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }

    /// Append an entry, creating the category section on first use
    pub fn push(&mut self, category: Category, entry: IdEntry) {
        match self.sections.iter_mut().find(|s| s.category == category) {
            Some(section) => section.entries.push(entry),
            None => self.sections.push(CategorySection {
                category,
                entries: vec![entry],
            }),
        }
    }

    /// Collect every problem that would make the table unusable
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        let mut seen_categories = Vec::new();

        for section in &self.sections {
            if seen_categories.contains(&section.category) {
                errors.push(ValidationError::DuplicateCategory(section.category));
            }
            seen_categories.push(section.category);

            let mut seen_names: Vec<&str> = Vec::with_capacity(section.entries.len());
            for entry in &section.entries {
                if !is_valid_identifier(&entry.name) {
                    errors.push(ValidationError::InvalidName {
                        category: section.category,
                        name: entry.name.clone(),
                    });
                }
                if is_reserved_name(&entry.name) {
                    errors.push(ValidationError::ReservedName {
                        category: section.category,
                        name: entry.name.clone(),
                    });
                }
                if seen_names.contains(&entry.name.as_str()) {
                    errors.push(ValidationError::DuplicateName {
                        category: section.category,
                        name: entry.name.clone(),
                    });
                }
                seen_names.push(&entry.name);
            }
        }

        if self.entries(Category::Events).is_empty() {
            errors.push(ValidationError::NoEvents);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Names the generated Rust table declares itself in every category module
pub const RESERVED_NAMES: &[&str] = &["ENTRIES"];

pub fn is_reserved_name(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// `[A-Z_][A-Z0-9_]*`, usable as both a Rust and a C++ constant name
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_uppercase() || c == '_' => {}
        _ => return false,
    }
    if name == "_" {
        return false;
    }
    chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> IdTable {
        let mut table = IdTable::default();
        table.push(Category::Events, IdEntry::new("PLAY_SFX_BUNNYROLL_NL", 4212669292));
        table.push(Category::Busses, IdEntry::new("MAIN_AUDIO_BUS", 2246998526));
        table
    }

    #[test]
    fn test_namespace_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_namespace(category.namespace()), Some(category));
            assert_eq!(Category::from_module_name(category.module_name()), Some(category));
        }
        assert_eq!(Category::from_namespace("STATES"), None);
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("PLAY_MUS_4_4_100BPM_THEME_NL"));
        assert!(is_valid_identifier("_PRIVATE"));
        assert!(!is_valid_identifier("4_PLAY"));
        assert!(!is_valid_identifier("play"));
        assert!(!is_valid_identifier("PLAY-SFX"));
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("_"));
    }

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample().validate().is_ok());
        assert_eq!(sample().entry_count(), 2);
    }

    #[test]
    fn test_duplicate_names_rejected_within_category() {
        let mut table = sample();
        table.push(Category::Events, IdEntry::new("PLAY_SFX_BUNNYROLL_NL", 1));

        let errors = table.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateName {
                category: Category::Events,
                name: "PLAY_SFX_BUNNYROLL_NL".to_string(),
            }]
        );
    }

    #[test]
    fn test_same_name_allowed_across_categories() {
        let mut table = sample();
        table.push(Category::AudioDevices, IdEntry::new("MAIN_AUDIO_BUS", 7));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_reserved_name_rejected() {
        let mut table = sample();
        table.push(Category::Events, IdEntry::new("ENTRIES", 7));

        assert_eq!(
            table.validate().unwrap_err(),
            vec![ValidationError::ReservedName {
                category: Category::Events,
                name: "ENTRIES".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_events_rejected() {
        let mut table = IdTable::default();
        table.push(Category::Busses, IdEntry::new("MAIN_AUDIO_BUS", 2246998526));
        assert_eq!(table.validate().unwrap_err(), vec![ValidationError::NoEvents]);
    }

    #[test]
    fn test_ordered_sections_use_canonical_order() {
        let mut table = IdTable::default();
        table.push(Category::AudioDevices, IdEntry::new("SYSTEM", 3859886410));
        table.push(Category::Events, IdEntry::new("PLAY", 1));
        table.sections.push(CategorySection {
            category: Category::Busses,
            entries: vec![],
        });

        let order: Vec<_> = table.ordered_sections().iter().map(|s| s.category).collect();
        assert_eq!(order, vec![Category::Events, Category::AudioDevices]);
    }
}

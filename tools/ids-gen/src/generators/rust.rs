//! Rust table generator

use anyhow::Result;
use std::fmt::Write as FmtWrite;

use crate::model::{is_reserved_name, Category, IdTable};

/// Generate the Rust identifier table from an identifier table.
///
/// Every category gets a module, including empty ones, so the table crate's
/// `Category::entries` always has something to point at. Names that would
/// collide with the generated `ENTRIES` slice are refused.
pub fn generate_rust_table(table: &IdTable, source: &str) -> Result<String> {
    for category in Category::ALL {
        if let Some(entry) = table.entries(category).iter().find(|e| is_reserved_name(&e.name)) {
            anyhow::bail!(
                "{}::{} collides with a generated item",
                category.module_name(),
                entry.name
            );
        }
    }

    let mut output = String::new();

    writeln!(output, "// GENERATED FILE - DO NOT EDIT")?;
    writeln!(output, "// Source: {}", source.replace('\\', "/"))?;
    writeln!(output, "// Generator: tools/ids-gen")?;

    for category in Category::ALL {
        let entries = table.entries(category);

        writeln!(output)?;
        writeln!(
            output,
            "/// Identifiers from the `{}` namespace",
            category.namespace()
        )?;
        writeln!(output, "pub mod {} {{", category.module_name())?;

        if entries.is_empty() {
            writeln!(output, "    use crate::IdEntry;")?;
            writeln!(output)?;
            writeln!(output, "    pub const ENTRIES: &[IdEntry] = &[];")?;
            writeln!(output, "}}")?;
            continue;
        }

        writeln!(output, "    use crate::{{IdEntry, UniqueId}};")?;
        writeln!(output)?;
        for entry in entries {
            writeln!(
                output,
                "    pub const {}: UniqueId = {};",
                entry.name, entry.value
            )?;
        }
        writeln!(output)?;
        writeln!(output, "    pub const ENTRIES: &[IdEntry] = &[")?;
        for entry in entries {
            writeln!(
                output,
                "        IdEntry {{ name: \"{}\", value: {} }},",
                entry.name, entry.name
            )?;
        }
        writeln!(output, "    ];")?;
        writeln!(output, "}}")?;
    }

    Ok(output)
}

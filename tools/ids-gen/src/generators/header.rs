//! C++ header generator reproducing the authoring tool's `Wwise_IDs.h`

use anyhow::Result;
use std::fmt::Write as FmtWrite;

use crate::model::IdTable;

const BANNER_RULE: &str =
    "/////////////////////////////////////////////////////////////////////////////////////////////////////";

/// Generate the header from an identifier table.
///
/// Output matches the export byte for byte: LF line endings, one namespace
/// per non-empty category in canonical order, entries in table order.
pub fn generate_header(table: &IdTable) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "{}", BANNER_RULE)?;
    writeln!(output, "//")?;
    writeln!(output, "// Audiokinetic Wwise generated include file. Do not edit.")?;
    writeln!(output, "//")?;
    writeln!(output, "{}", BANNER_RULE)?;
    writeln!(output)?;

    writeln!(output, "#ifndef __WWISE_IDS_H__")?;
    writeln!(output, "#define __WWISE_IDS_H__")?;
    writeln!(output)?;
    writeln!(output, "#include <AK/SoundEngine/Common/AkTypes.h>")?;
    writeln!(output)?;

    writeln!(output, "namespace AK")?;
    writeln!(output, "{{")?;

    for section in table.ordered_sections() {
        let namespace = section.category.namespace();
        writeln!(output, "    namespace {}", namespace)?;
        writeln!(output, "    {{")?;
        for entry in &section.entries {
            writeln!(
                output,
                "        static const AkUniqueID {} = {}U;",
                entry.name, entry.value
            )?;
        }
        writeln!(output, "    }} // namespace {}", namespace)?;
        writeln!(output)?;
    }

    writeln!(output, "}}// namespace AK")?;
    writeln!(output)?;
    writeln!(output, "#endif // __WWISE_IDS_H__")?;

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, IdEntry};

    #[test]
    fn test_generate_simple_header() {
        let mut table = IdTable::default();
        table.push(Category::Events, IdEntry::new("PLAY_SFX_BUNNYROLL_NL", 4212669292));
        table.push(Category::GameParameters, IdEntry::new("VELOCITY", 3519441192));

        let header = generate_header(&table).unwrap();

        assert!(header.starts_with(BANNER_RULE));
        assert!(header.contains("#ifndef __WWISE_IDS_H__"));
        assert!(header.contains(
            "    namespace EVENTS\n    {\n        static const AkUniqueID PLAY_SFX_BUNNYROLL_NL = 4212669292U;\n    } // namespace EVENTS\n"
        ));
        assert!(header.contains("static const AkUniqueID VELOCITY = 3519441192U;"));
        assert!(!header.contains("BUSSES"));
        assert!(header.ends_with("}// namespace AK\n\n#endif // __WWISE_IDS_H__\n"));
    }

    #[test]
    fn test_banner_width() {
        assert_eq!(BANNER_RULE.len(), 101);
    }
}

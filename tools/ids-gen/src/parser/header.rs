//! Parser for the `Wwise_IDs.h` header written by the authoring tool

use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

use super::ParseError;
use crate::model::{Category, CategorySection, IdEntry, IdTable};

fn namespace_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^namespace\s+([A-Za-z_][A-Za-z0-9_]*)\s*(\{)?$").expect("valid regex")
    })
}

fn constant_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^static\s+const\s+AkUniqueID\s+([A-Za-z0-9_]+)\s*=\s*(0|[1-9][0-9]*)[uU]?\s*;$",
        )
        .expect("valid regex")
    })
}

/// What an open namespace contributes to the table
#[derive(Debug, Clone)]
enum Scope {
    /// Outer wrapper such as `namespace AK`
    Wrapper(String),
    /// One of the exported identifier categories
    Category(Category),
    /// A namespace this table does not carry (states, switches, banks, ...)
    Skipped(String),
}

impl Scope {
    fn name(&self) -> &str {
        match self {
            Scope::Wrapper(name) | Scope::Skipped(name) => name,
            Scope::Category(category) => category.namespace(),
        }
    }
}

/// Parse an exported header from disk
pub fn parse_header_file(path: impl AsRef<Path>) -> Result<IdTable> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse_header_source(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse exported header text.
///
/// Entries keep the order they have in the header. Namespaces outside the
/// fixed category set are skipped together with everything nested in them.
pub fn parse_header_source(source: &str) -> Result<IdTable, ParseError> {
    let mut table = IdTable::default();
    let mut stack: Vec<Scope> = Vec::new();
    let mut pending: Option<Scope> = None;

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_line_comment(raw).trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(caps) = namespace_re().captures(line) {
            // A namespace must open its block before the next one starts.
            if pending.is_some() {
                return Err(ParseError::Unrecognized {
                    line: line_no,
                    text: line.to_string(),
                });
            }
            let scope = open_scope(stack.last(), &caps[1]);
            if let Scope::Category(category) = scope {
                table.sections.push(CategorySection {
                    category,
                    entries: Vec::new(),
                });
            }
            if caps.get(2).is_some() {
                stack.push(scope);
            } else {
                pending = Some(scope);
            }
            continue;
        }

        if line == "{" {
            // An anonymous block only matters for brace balance.
            let scope = pending
                .take()
                .unwrap_or_else(|| Scope::Skipped(String::from("<block>")));
            stack.push(scope);
            continue;
        }

        if line == "}" || line == "};" {
            if stack.pop().is_none() {
                return Err(ParseError::UnbalancedClose { line: line_no });
            }
            continue;
        }

        if matches!(stack.last(), Some(Scope::Skipped(_))) {
            continue;
        }

        if let Some(caps) = constant_re().captures(line) {
            let name = caps[1].to_string();
            let value = caps[2]
                .parse::<u32>()
                .map_err(|_| ParseError::ValueOutOfRange {
                    line: line_no,
                    value: caps[2].to_string(),
                })?;

            match stack.last() {
                Some(Scope::Category(_)) => {
                    if let Some(section) = table.sections.last_mut() {
                        section.entries.push(IdEntry { name, value });
                    }
                }
                _ => return Err(ParseError::ConstantOutsideCategory { line: line_no, name }),
            }
            continue;
        }

        return Err(ParseError::Unrecognized {
            line: line_no,
            text: line.to_string(),
        });
    }

    if let Some(scope) = pending.or_else(|| stack.pop()) {
        return Err(ParseError::Unterminated(scope.name().to_string()));
    }

    tracing::debug!(
        "Parsed {} identifiers in {} categories",
        table.entry_count(),
        table.sections.len()
    );

    Ok(table)
}

fn open_scope(parent: Option<&Scope>, name: &str) -> Scope {
    match parent {
        None => match Category::from_namespace(name) {
            Some(category) => Scope::Category(category),
            None => Scope::Wrapper(name.to_string()),
        },
        Some(Scope::Wrapper(_)) => match Category::from_namespace(name) {
            Some(category) => Scope::Category(category),
            None => {
                tracing::warn!("Skipping unsupported namespace {}", name);
                Scope::Skipped(name.to_string())
            }
        },
        Some(Scope::Category(category)) => {
            tracing::warn!(
                "Skipping nested namespace {} inside {}",
                name,
                category.namespace()
            );
            Scope::Skipped(name.to_string())
        }
        Some(Scope::Skipped(_)) => Scope::Skipped(name.to_string()),
    }
}

/// Drop a trailing `// ...` comment
fn strip_line_comment(line: &str) -> &str {
    match line.find("//") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
#ifndef __WWISE_IDS_H__
#define __WWISE_IDS_H__

#include <AK/SoundEngine/Common/AkTypes.h>

namespace AK
{
    namespace EVENTS
    {
        static const AkUniqueID PLAY_SFX_BUNNYROLL_NL = 4212669292U;
        static const AkUniqueID PLAY_SFX_BUNNYMOVE_NL = 1400485278U;
    } // namespace EVENTS

    namespace AUDIO_DEVICES
    {
        static const AkUniqueID NO_OUTPUT = 2317455096U;
    } // namespace AUDIO_DEVICES

}// namespace AK

#endif // __WWISE_IDS_H__
"#;

    #[test]
    fn test_parse_categories_in_order() {
        let table = parse_header_source(SAMPLE).unwrap();
        assert_eq!(table.sections.len(), 2);

        let events = table.entries(Category::Events);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0], IdEntry::new("PLAY_SFX_BUNNYROLL_NL", 4212669292));
        assert_eq!(events[1].name, "PLAY_SFX_BUNNYMOVE_NL");

        assert_eq!(
            table.entries(Category::AudioDevices),
            &[IdEntry::new("NO_OUTPUT", 2317455096)]
        );
    }

    #[test]
    fn test_value_out_of_range() {
        let source = "namespace AK\n{\n namespace EVENTS\n {\n static const AkUniqueID BIG = 4294967296U;\n }\n}\n";
        match parse_header_source(source) {
            Err(ParseError::ValueOutOfRange { line, value }) => {
                assert_eq!(line, 5);
                assert_eq!(value, "4294967296");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_max_u32_accepted() {
        let source = "namespace AK {\nnamespace EVENTS {\nstatic const AkUniqueID MAX = 4294967295U;\n}\n}\n";
        let table = parse_header_source(source).unwrap();
        assert_eq!(table.entries(Category::Events)[0].value, u32::MAX);
    }

    #[test]
    fn test_unsupported_namespaces_skipped() {
        let source = r#"
namespace AK
{
    namespace STATES
    {
        namespace MUSIC_STATE
        {
            static const AkUniqueID GROUP = 1021618141U;
        } // namespace MUSIC_STATE
    } // namespace STATES

    namespace EVENTS
    {
        static const AkUniqueID PLAY = 1U;
    } // namespace EVENTS
}// namespace AK
"#;
        let table = parse_header_source(source).unwrap();
        assert_eq!(table.entry_count(), 1);
        assert_eq!(table.entries(Category::Events)[0].name, "PLAY");
    }

    #[test]
    fn test_constant_outside_category() {
        let source = "namespace AK\n{\n static const AkUniqueID LOOSE = 1U;\n}\n";
        assert!(matches!(
            parse_header_source(source),
            Err(ParseError::ConstantOutsideCategory { line: 3, .. })
        ));
    }

    #[test]
    fn test_unbalanced_braces() {
        assert!(matches!(
            parse_header_source("namespace AK\n{\n}\n}\n"),
            Err(ParseError::UnbalancedClose { line: 4 })
        ));
        assert!(matches!(
            parse_header_source("namespace AK\n{\n namespace EVENTS\n {\n"),
            Err(ParseError::Unterminated(name)) if name == "EVENTS"
        ));
    }

    #[test]
    fn test_unrecognized_line() {
        let source = "namespace AK\n{\n namespace EVENTS\n {\n int x = 3;\n }\n}\n";
        assert!(matches!(
            parse_header_source(source),
            Err(ParseError::Unrecognized { line: 5, .. })
        ));
    }

    #[test]
    fn test_leading_zero_value_rejected() {
        let source = "namespace AK {\nnamespace EVENTS {\nstatic const AkUniqueID OCTAL = 010U;\n}\n}\n";
        assert!(matches!(
            parse_header_source(source),
            Err(ParseError::Unrecognized { line: 3, .. })
        ));

        let source = "namespace AK {\nnamespace EVENTS {\nstatic const AkUniqueID ZERO = 0U;\n}\n}\n";
        assert_eq!(parse_header_source(source).unwrap().entries(Category::Events)[0].value, 0);
    }

    #[test]
    fn test_namespace_without_brace_before_next_namespace() {
        let source = "namespace AK\n{\n namespace EVENTS\n namespace BUSSES\n {\n }\n}\n";
        assert!(matches!(
            parse_header_source(source),
            Err(ParseError::Unrecognized { line: 4, .. })
        ));
    }

    #[test]
    fn test_repeated_category_kept_separate() {
        let source = "namespace AK {\nnamespace EVENTS {\nstatic const AkUniqueID A = 1U;\n}\nnamespace EVENTS {\nstatic const AkUniqueID B = 2U;\n}\n}\n";
        let table = parse_header_source(source).unwrap();
        assert_eq!(table.sections.len(), 2);
        assert!(table.validate().is_err());
    }
}

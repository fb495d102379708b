//! Audio identifier table generator library
//!
//! Reads the `Wwise_IDs.h` header exported by the sound-design project and
//! regenerates the compiled-in Rust table (plus optional header copy and JSON
//! manifest) from it. Generation is deterministic, so `check` can compare the
//! committed outputs against a fresh render byte for byte.

pub mod config;
pub mod generators;
pub mod model;
pub mod parser;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use config::{Config, CONFIG_FILE};
pub use model::{Category, IdEntry, IdTable, ValidationError};

/// A generated file and the contents it should have
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub path: PathBuf,
    pub contents: String,
}

/// Workspace root plus its configuration
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root: root.into(),
            config,
        }
    }

    /// Load the configuration found in `root`
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let config = Config::load(&root)?;
        Ok(Self { root, config })
    }

    /// Locate the workspace root from the current directory
    pub fn discover() -> Result<Self> {
        Self::load(find_workspace_root()?)
    }

    pub fn input_path(&self) -> PathBuf {
        self.root.join(&self.config.input)
    }

    /// Parse and validate the exported header
    pub fn load_table(&self) -> Result<IdTable> {
        let input = self.input_path();
        let table = parser::header::parse_header_file(&input)?;
        ensure_valid(&table).with_context(|| format!("Invalid export {}", input.display()))?;

        tracing::info!(
            "Parsed {} identifiers from {}",
            table.entry_count(),
            input.display()
        );
        for section in table.ordered_sections() {
            tracing::debug!(
                "  {}: {} entries",
                section.category.namespace(),
                section.entries.len()
            );
        }

        Ok(table)
    }

    /// Render every configured output for `table`
    pub fn render(&self, table: &IdTable) -> Result<Vec<Output>> {
        let mut outputs = Vec::new();

        let source_label = self.config.input.display().to_string();
        outputs.push(Output {
            path: self.root.join(&self.config.rust_output),
            contents: generators::rust::generate_rust_table(table, &source_label)
                .context("Failed to generate Rust table")?,
        });

        if let Some(header_output) = &self.config.header_output {
            outputs.push(Output {
                path: self.root.join(header_output),
                contents: generators::header::generate_header(table)
                    .context("Failed to generate header")?,
            });
        }

        if let Some(json_output) = &self.config.json_output {
            outputs.push(Output {
                path: self.root.join(json_output),
                contents: generators::json::generate_json_manifest(table)
                    .context("Failed to generate JSON manifest")?,
            });
        }

        Ok(outputs)
    }

    /// Regenerate and write every output
    pub fn generate(&self) -> Result<Vec<PathBuf>> {
        let table = self.load_table()?;
        let outputs = self.render(&table)?;

        let mut written = Vec::with_capacity(outputs.len());
        for output in outputs {
            if let Some(parent) = output.path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(&output.path, &output.contents)
                .with_context(|| format!("Failed to write {}", output.path.display()))?;
            tracing::info!("Generated {}", output.path.display());
            written.push(output.path);
        }

        Ok(written)
    }

    /// Check that every output on disk matches a fresh render
    pub fn check(&self) -> Result<bool> {
        let table = self.load_table()?;
        let outputs = self.render(&table)?;

        let mut in_sync = true;
        for output in &outputs {
            let existing = match std::fs::read_to_string(&output.path) {
                Ok(existing) => Some(existing),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
                Err(e) => {
                    return Err(e)
                        .with_context(|| format!("Failed to read {}", output.path.display()))
                }
            };

            match existing {
                Some(existing) if existing == output.contents => {
                    tracing::info!("In sync: {}", output.path.display());
                }
                Some(_) => {
                    tracing::warn!("Out of sync: {}", output.path.display());
                    in_sync = false;
                }
                None => {
                    tracing::warn!("Missing: {}", output.path.display());
                    in_sync = false;
                }
            }
        }

        Ok(in_sync)
    }
}

/// Turn validation problems into a single error listing all of them
pub fn ensure_valid(table: &IdTable) -> Result<()> {
    if let Err(errors) = table.validate() {
        let details: Vec<String> = errors.iter().map(|e| format!("  - {}", e)).collect();
        anyhow::bail!(
            "{} problem(s) in identifier table:\n{}",
            errors.len(),
            details.join("\n")
        );
    }
    Ok(())
}

/// Regenerate the exported header from a generated Rust table
pub fn header_from_rust(path: impl AsRef<Path>) -> Result<String> {
    let table = parser::rust::parse_table_file(path)?;
    ensure_valid(&table)?;
    generators::header::generate_header(&table)
}

/// Find the workspace root by looking for Cargo.toml next to ids-gen.toml
pub fn find_workspace_root() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;

    loop {
        if current.join("Cargo.toml").exists() && current.join(CONFIG_FILE).exists() {
            return Ok(current);
        }

        if !current.pop() {
            anyhow::bail!("Could not find workspace root (no {} found)", CONFIG_FILE);
        }
    }
}

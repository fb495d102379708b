//! Audio identifier table generator CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use ids_gen::Project;

#[derive(Parser)]
#[command(name = "ids-gen")]
#[command(about = "Generate the audio identifier table from the sound-design export", long_about = None)]
#[command(version)]
struct Cli {
    /// Workspace root (default: search upwards for ids-gen.toml)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Regenerate every configured output
    Generate,

    /// Check that generated outputs are in sync with the export
    Check,

    /// Print or write a regenerated header
    Header {
        /// Rebuild from a generated Rust table instead of the export
        #[arg(long)]
        from_rust: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the parsed identifier table
    Dump {
        #[arg(short, long, value_enum, default_value_t = DumpFormat::Text)]
        format: DumpFormat,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum DumpFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let root = cli.root.clone();
    let project = move || match &root {
        Some(root) => Project::load(root.clone()),
        None => Project::discover(),
    };

    match cli.command {
        Commands::Generate => {
            tracing::info!("Generating identifier table...");
            project()?.generate()?;
            tracing::info!("Done!");
        }
        Commands::Check => {
            tracing::info!("Checking identifier table is in sync...");
            if !project()?.check()? {
                anyhow::bail!("Identifier table is out of sync. Run 'ids-gen generate' to regenerate.");
            }
            tracing::info!("All outputs are in sync!");
        }
        Commands::Header { from_rust, output } => {
            let header = match from_rust {
                Some(path) => ids_gen::header_from_rust(&path)?,
                None => ids_gen::generators::header::generate_header(&project()?.load_table()?)?,
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, header)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    tracing::info!("Wrote {}", path.display());
                }
                None => print!("{}", header),
            }
        }
        Commands::Dump { format } => {
            let table = project()?.load_table()?;
            match format {
                DumpFormat::Json => {
                    print!("{}", ids_gen::generators::json::generate_json_manifest(&table)?)
                }
                DumpFormat::Text => {
                    for section in table.ordered_sections() {
                        println!("{}", section.category.namespace());
                        for entry in &section.entries {
                            println!("  {} = {}", entry.name, entry.value);
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

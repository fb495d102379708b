//! Audio identifier table commands

use anyhow::Result;
use clap::Subcommand;

use ids_gen::Project;

#[derive(Subcommand)]
pub enum IdsCommand {
    /// Regenerate the identifier table from the sound-design export
    Generate,

    /// Check that the identifier table is in sync with the export
    Check,

    /// Generate, then check
    All,
}

pub fn execute(command: IdsCommand) -> Result<()> {
    let project = Project::load(crate::project_root())?;

    match command {
        IdsCommand::Generate => generate(&project),
        IdsCommand::Check => check(&project),
        IdsCommand::All => {
            generate(&project)?;
            println!();
            check(&project)
        }
    }
}

fn generate(project: &Project) -> Result<()> {
    println!("Generating audio identifier table...");

    for path in project.generate()? {
        println!("  {}", path.display());
    }

    println!("✓ Done!");
    Ok(())
}

fn check(project: &Project) -> Result<()> {
    println!("Checking audio identifier table is in sync...");

    if project.check()? {
        println!("\n✓ Identifier table is in sync!");
        Ok(())
    } else {
        anyhow::bail!("Identifier table is out of sync. Run 'cargo xtask ids generate' to regenerate.")
    }
}

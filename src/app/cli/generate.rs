use std::path::PathBuf;

use clap::Args;

use crate::domain::AppError;
use crate::domain::output::package_name;

#[derive(Args)]
pub struct GenerateArgs {
    /// Path to the project config (.json, .yaml, .yml)
    pub config: PathBuf,
    /// Output directory (defaults to ./<package-name>)
    #[arg(short, long)]
    pub out: Option<PathBuf>,
    /// Write into a non-empty output directory
    #[arg(short, long)]
    pub force: bool,
    /// Print the generated project as JSON instead of writing files
    #[arg(long, conflicts_with_all = ["out", "force"])]
    pub json: bool,
}

pub fn run_generate(args: GenerateArgs) -> Result<(), AppError> {
    let config = crate::load_config(&args.config)?;
    let project = crate::generate(&config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&project)?);
        return Ok(());
    }

    let out = args.out.unwrap_or_else(|| PathBuf::from(package_name(&config.project_name)));
    let written = crate::write_project(&project, &out, args.force)?;

    println!("✅ Generated {} file(s) in {}", written, out.display());
    if !project.warnings.is_empty() {
        println!("⚠️  Warnings:");
        for warning in &project.warnings {
            println!("  • {}", warning);
        }
    }
    println!("\nNext steps:");
    for (i, step) in project.setup_instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    Ok(())
}

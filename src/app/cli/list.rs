use clap::ValueEnum;

use crate::app::commands::list::CatalogSection;
use crate::domain::AppError;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SectionArg {
    Templates,
    Integrations,
    Features,
}

impl From<SectionArg> for CatalogSection {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Templates => CatalogSection::Templates,
            SectionArg::Integrations => CatalogSection::Integrations,
            SectionArg::Features => CatalogSection::Features,
        }
    }
}

pub fn run_list(section: Option<SectionArg>, detail: Option<String>) -> Result<(), AppError> {
    if let Some(name) = detail {
        let info = crate::manifest_detail(&name)?;
        println!("{} {}: {}", info.name, info.version, info.description);
        if !info.requires.is_empty() {
            println!("\nRequires:");
            for requirement in &info.requires {
                println!("  • {}", requirement);
            }
        }
        if !info.files.is_empty() {
            println!("\nFiles:");
            for file in &info.files {
                println!("  • {}", file);
            }
        }
        if !info.packages.is_empty() || !info.dev_packages.is_empty() {
            println!("\nPackages:");
            for (name, version) in &info.packages {
                println!("  • {}@{}", name, version);
            }
            for (name, version) in &info.dev_packages {
                println!("  • {}@{} (dev)", name, version);
            }
        }
        if !info.env.is_empty() {
            println!("\nEnvironment Variables:");
            for env in &info.env {
                let flag = if env.required { " (required)" } else { "" };
                println!("  • {}{}", env.name, flag);
                if !env.description.is_empty() {
                    println!("    {}", env.description);
                }
            }
        }
        if !info.post_install.is_empty() {
            println!("\nPost-install:");
            for step in &info.post_install {
                println!("  • {}", step);
            }
        }
        return Ok(());
    }

    let sections: Vec<CatalogSection> = match section {
        Some(section) => vec![section.into()],
        None => CatalogSection::ALL.to_vec(),
    };
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("Available {}:", section);
        for entry in crate::list(*section)? {
            println!("  {} ({}) - {}", entry.name, entry.version, entry.description);
        }
    }
    Ok(())
}

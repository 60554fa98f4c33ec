//! CloudFormation model generator CLI
//!
//! Command-line interface for parsing CloudFormation resource
//! specification documents into typed resource models.

use anyhow::{Context, Result};
use cfn_model_generator_common::{Property, Resource, Specification};
use cfn_model_generator_parser::SpecificationParser;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cfn-model-generator")]
#[command(version, about = "Build typed resource models from CloudFormation specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a specification document and display a summary
    #[command(after_help = "EXAMPLES:\n  \
        # Summarize a specification document\n  \
        cfn-model-generator parse --spec CloudFormationResourceSpecification.json\n\n  \
        # Show one resource in detail\n  \
        cfn-model-generator parse --spec spec.json --resource AWS::S3::Bucket")]
    Parse {
        /// Path to the specification document
        #[arg(short, long)]
        spec: PathBuf,

        /// Show this resource type in detail
        #[arg(short, long)]
        resource: Option<String>,
    },

    /// Parse a specification document and dump the model as JSON
    #[command(after_help = "EXAMPLES:\n  \
        # Dump the typed model for downstream tooling\n  \
        cfn-model-generator dump --spec spec.json > model.json")]
    Dump {
        /// Path to the specification document
        #[arg(short, long)]
        spec: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { spec, resource } => {
            parse_command(spec.as_path(), resource.as_deref(), cli.verbose)?;
        }
        Commands::Dump { spec } => {
            dump_command(spec.as_path())?;
        }
    }

    Ok(())
}

fn parse_command(spec_path: &Path, resource_name: Option<&str>, verbose: bool) -> Result<()> {
    println!("{} Parsing specification: {}", "→".cyan(), spec_path.display());

    let specification = load_specification(spec_path)?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("\n{}", "Specification:".bold());
    println!(
        "  Version: {}",
        specification.resource_specification_version.yellow()
    );
    println!("  Resource types: {}", specification.resource_types.len());
    println!("  Property types: {}", specification.property_types.len());

    if let Some(name) = resource_name {
        let resource = specification
            .resource_types
            .get(name)
            .with_context(|| format!("Resource type '{}' not found in specification", name))?;
        print_resource(resource);
    } else if verbose {
        println!("\n{}", "Resource types:".bold());
        let mut names: Vec<&String> = specification.resource_types.keys().collect();
        names.sort();
        for name in names {
            let resource = &specification.resource_types[name];
            println!(
                "  • {} ({} attributes, {} properties)",
                name.cyan(),
                resource.attributes.len(),
                resource.properties.len()
            );
        }
    }

    Ok(())
}

fn dump_command(spec_path: &Path) -> Result<()> {
    let specification = load_specification(spec_path)?;

    let json = serde_json::to_string_pretty(&specification)
        .context("Failed to serialize specification model")?;
    println!("{}", json);

    Ok(())
}

fn load_specification(spec_path: &Path) -> Result<Specification> {
    let parser =
        SpecificationParser::from_file(spec_path).context("Failed to load specification")?;
    parser.parse().context("Failed to build specification model")
}

fn print_resource(resource: &Resource) {
    println!("\n{}", resource.name.bold());
    println!("  {}", resource.documentation);

    println!("\n  {}", "Attributes:".bold());
    let mut attr_names: Vec<&String> = resource.attributes.keys().collect();
    attr_names.sort();
    for name in attr_names {
        let attribute = &resource.attributes[name];
        match &attribute.value_type {
            Some(value_type) => println!("    • {}: {}", name.cyan(), value_type),
            None => println!("    • {}: {}", name.cyan(), "(untyped)".dimmed()),
        }
    }

    println!("\n  {}", "Properties:".bold());
    let mut prop_names: Vec<&String> = resource.properties.keys().collect();
    prop_names.sort();
    for name in prop_names {
        print_property(&resource.properties[name], 4);
    }
}

fn print_property(property: &Property, indent: usize) {
    let pad = " ".repeat(indent);
    match property {
        Property::Container { name, properties, .. } => {
            println!("{}• {} {}", pad, name.cyan(), "(container)".dimmed());
            let mut sub_names: Vec<&String> = properties.keys().collect();
            sub_names.sort();
            for sub_name in sub_names {
                print_property(&properties[sub_name], indent + 2);
            }
        }
        Property::Leaf {
            name,
            required,
            update_type,
            value_type,
            ..
        } => {
            let type_display = match value_type {
                Some(value_type) => value_type.to_string(),
                None => "(untyped)".to_string(),
            };
            let required_marker = if *required { " required".red().to_string() } else { String::new() };
            println!(
                "{}• {}: {} [{}{}]",
                pad,
                name.cyan(),
                type_display,
                update_type.to_string().yellow(),
                required_marker
            );
        }
    }
}

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use hl_app::{
    estimate_project_file, list_buildings, load_project_file, validate_project_file, AppResult,
};

#[derive(Parser)]
#[command(name = "hl-cli")]
#[command(about = "Heatload CLI - building heat-loss estimation tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate project file syntax and values
    Validate {
        /// Path to the project file (.yaml, .yml or .json)
        project_path: PathBuf,
    },
    /// List buildings in a project
    Buildings {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Estimate per-room and total heat loss
    Estimate {
        /// Path to the project file
        project_path: PathBuf,
    },
    /// Export per-room results as CSV
    Export {
        /// Path to the project file
        project_path: PathBuf,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { project_path } => cmd_validate(&project_path),
        Commands::Buildings { project_path } => cmd_buildings(&project_path),
        Commands::Estimate { project_path } => cmd_estimate(&project_path),
        Commands::Export {
            project_path,
            output,
        } => cmd_export(&project_path, output.as_deref()),
    }
}

fn cmd_validate(project_path: &Path) -> AppResult<()> {
    println!("Validating project: {}", project_path.display());
    let (file, warnings) = validate_project_file(project_path)?;
    println!("✓ Project '{}' is valid", file.name);
    if !warnings.is_empty() {
        println!("{} warning(s):", warnings.len());
        for warning in &warnings {
            println!("  ! {warning}");
        }
    }
    Ok(())
}

fn cmd_buildings(project_path: &Path) -> AppResult<()> {
    let file = load_project_file(project_path)?;
    let buildings = list_buildings(&file);

    if buildings.is_empty() {
        println!("No buildings found in project");
    } else {
        println!("Buildings in project '{}':", file.name);
        for b in buildings {
            println!(
                "  {} ({}) - design temp {:.1} °C, {} floor(s), {} room(s)",
                b.name, b.location, b.norm_outside_temp, b.floor_count, b.room_count
            );
        }
    }
    Ok(())
}

fn cmd_estimate(project_path: &Path) -> AppResult<()> {
    let (result, summary) = estimate_project_file(project_path)?;

    if result.is_empty() {
        println!("No rooms in project; total heat loss is 0.0");
        return Ok(());
    }

    println!(
        "{:<20} {:<20} {:<20} {:>12}",
        "Building", "Floor", "Room", "Heat loss"
    );
    for row in &result.results {
        println!(
            "{:<20} {:<20} {:<20} {:>12.1}",
            row.building, row.floor, row.room, row.heat_loss
        );
    }
    println!(
        "\nTotal heat loss over {} room(s) in {} building(s): {:.1}",
        summary.room_count, summary.building_count, summary.total_heat_loss
    );
    Ok(())
}

fn cmd_export(project_path: &Path, output: Option<&Path>) -> AppResult<()> {
    let (result, _) = estimate_project_file(project_path)?;

    let mut csv = String::from("building,floor,room,heat_loss\n");
    for row in &result.results {
        csv.push_str(&format!(
            "{},{},{},{}\n",
            csv_field(&row.building),
            csv_field(&row.floor),
            csv_field(&row.room),
            row.heat_loss
        ));
    }

    match output {
        Some(path) => {
            std::fs::write(path, csv)?;
            println!("✓ Exported {} row(s) to {}", result.results.len(), path.display());
        }
        None => {
            io::stdout().write_all(csv.as_bytes())?;
        }
    }
    Ok(())
}

/// Quote a CSV field when it holds a comma or quote.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("Living room"), "Living room");
        assert_eq!(csv_field("Hall, east"), "\"Hall, east\"");
        assert_eq!(csv_field("The \"den\""), "\"The \"\"den\"\"\"");
    }
}

//! Packlist CLI - packing-list to box-sticker conversion tool

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use packlist::prelude::*;
use packlist_core::locate_header;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "packlist")]
#[command(
    author,
    version,
    about = "Generate one formatted sticker per shipping box from a packing-list workbook"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a sticker workbook from a packing list
    #[command(alias = "gen")]
    Generate {
        /// Input packing-list workbook (.xlsx)
        input: PathBuf,

        /// Output workbook (default: box_stickers_<timestamp>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Packing list number printed on every sticker
        #[arg(long, default_value = "")]
        packing_list_no: String,

        /// Order number printed on every sticker
        #[arg(long, default_value = "")]
        order_no: String,

        /// Date of shipment, YYYY-MM-DD (default: today)
        #[arg(long)]
        ship_date: Option<NaiveDate>,

        /// Model designator printed on every sticker
        #[arg(long, default_value = "")]
        modele: String,

        /// Recipient address (use \n for line breaks)
        #[arg(long)]
        to_addr: Option<String>,

        /// File holding the multi-line recipient address
        #[arg(long, conflicts_with = "to_addr")]
        to_addr_file: Option<PathBuf>,

        /// File holding the multi-line sender address (default: built-in)
        #[arg(long)]
        from_addr_file: Option<PathBuf>,

        /// JSON file overriding the header-label catalog
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Lay output sheets out left-to-right instead of right-to-left
        #[arg(long)]
        ltr: bool,

        /// Blank rows between consecutive stickers
        #[arg(long, default_value = "1")]
        spacer_rows: u32,
    },

    /// Show what the parser sees in a packing list, without generating output
    Inspect {
        /// Input packing-list workbook (.xlsx)
        input: PathBuf,

        /// JSON file overriding the header-label catalog
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            packing_list_no,
            order_no,
            ship_date,
            modele,
            to_addr,
            to_addr_file,
            from_addr_file,
            catalog,
            ltr,
            spacer_rows,
        } => {
            let defaults = ShipmentDetails::default();
            let to_addr = match (to_addr, to_addr_file) {
                (Some(text), _) => expand_newlines(&text),
                (None, Some(path)) => read_file(&path)?,
                (None, None) => defaults.to_addr,
            };
            let from_addr = match from_addr_file {
                Some(path) => read_file(&path)?,
                None => defaults.from_addr,
            };
            let details = ShipmentDetails {
                packing_list_no: packing_list_no.trim().to_string(),
                order_no: order_no.trim().to_string(),
                ship_date: ship_date.unwrap_or(defaults.ship_date),
                modele: modele.trim().to_string(),
                from_addr,
                to_addr,
            };
            let options = RenderOptions {
                right_to_left: !ltr,
                spacer_rows,
            };
            generate(&input, output, load_catalog(catalog.as_deref())?, details, options)
        }
        Commands::Inspect { input, catalog } => {
            inspect(&input, load_catalog(catalog.as_deref())?)
        }
    }
}

fn generate(
    input: &Path,
    output: Option<PathBuf>,
    catalog: FieldCatalog,
    details: ShipmentDetails,
    options: RenderOptions,
) -> Result<()> {
    let grids = packlist::read_grids(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    let (mut workbook, report) = generate_stickers(
        &grids,
        &catalog,
        &details,
        StickerStyle::default(),
        options,
    )
    .context("Failed to render stickers")?;

    let output = output.unwrap_or_else(default_output_name);
    workbook
        .save(&output)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!(
        "Generated {} sticker(s) across {} sheet(s) into '{}'",
        report.stickers,
        report.sheets_rendered,
        output.display()
    );
    for (sheet, err) in &report.failures {
        eprintln!("Warning: sheet '{}' skipped: {}", sheet, err);
    }
    if report.hidden_skipped > 0 {
        eprintln!("Skipped {} hidden sheet(s)", report.hidden_skipped);
    }

    Ok(())
}

fn inspect(input: &Path, catalog: FieldCatalog) -> Result<()> {
    let grids = packlist::read_grids(input)
        .with_context(|| format!("Failed to open '{}'", input.display()))?;

    println!("File: {}", input.display());
    println!("Sheets: {}", grids.len());

    for grid in &grids {
        println!();
        println!(
            "  Sheet \"{}\"{}",
            grid.name(),
            if grid.is_visible() { "" } else { " (hidden)" }
        );

        match locate_header(grid, &catalog) {
            Some(header) => {
                println!("    Header row: {}", header.row);
                println!("    Matched fields: {}", header.columns.len());
                match parse_grid(grid, &catalog) {
                    Ok(boxes) => {
                        let items: usize = boxes.iter().map(|b| b.items.len()).sum();
                        println!("    Boxes: {} ({} component(s))", boxes.len(), items);
                    }
                    Err(err) => println!("    {}", err),
                }
            }
            None => println!("    Header row: not detected"),
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<FieldCatalog> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog '{}'", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("Invalid catalog file '{}'", path.display()))
        }
        None => Ok(FieldCatalog::default()),
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read '{}'", path.display()))
}

fn default_output_name() -> PathBuf {
    PathBuf::from(format!(
        "box_stickers_{}.xlsx",
        Local::now().format("%Y%m%d_%H%M")
    ))
}

/// Shells pass `\n` through literally, so turn the escape into a real
/// line break for multi-line addresses given on the command line.
fn expand_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_newlines() {
        assert_eq!(
            expand_newlines("Cairo Warehouse\\nDock 4\\nEgypt"),
            "Cairo Warehouse\nDock 4\nEgypt"
        );
        assert_eq!(expand_newlines("single line"), "single line");
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use rental_helper::browse::BrowseCommand;
use rental_helper::catalog::Catalog;
use rental_helper::core::filter::{self, FilterCriteria};
use rental_helper::logging;

#[derive(Parser)]
#[command(name = "rental")]
#[command(author = "Rental Helper Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Rental Helper - Browse and book rental properties", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(
        short,
        long,
        help = "Path to a JSON catalog file (defaults to the built-in demo catalog)",
        global = true
    )]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Browse listings interactively")]
    Browse,

    #[command(about = "List catalog entries matching the given filters")]
    List {
        #[arg(long, help = "Only listings whose location contains this text")]
        location: Option<String>,

        #[arg(long, help = "Only listings priced at or below this amount")]
        max_price: Option<f64>,

        #[arg(long, help = "Only listings with exactly this many bedrooms")]
        bedrooms: Option<u32>,

        #[arg(long, help = "Only listings offering this amenity")]
        amenity: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose)?;
    if cli.verbose {
        eprintln!("{}", "Verbose mode enabled".dimmed());
    }

    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::Browse => {
            let mut browse = BrowseCommand::new(catalog, cli.verbose);
            browse.execute()?;
        }
        Commands::List {
            location,
            max_price,
            bedrooms,
            amenity,
        } => {
            let criteria = FilterCriteria {
                location,
                max_price,
                bedrooms,
                amenity,
            };
            list_listings(&catalog, &criteria);
        }
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let catalog = match path {
        Some(path) => {
            let catalog = Catalog::from_json_file(path)?;
            logging::log_catalog_loaded(&path.display().to_string(), catalog.len());
            catalog
        }
        None => {
            let catalog = Catalog::builtin();
            logging::log_catalog_loaded("builtin", catalog.len());
            catalog
        }
    };
    Ok(catalog)
}

fn list_listings(catalog: &Catalog, criteria: &FilterCriteria) {
    let matches = filter::apply(catalog.listings(), criteria);
    if matches.is_empty() {
        println!("{}", "No listings match the given filters".yellow());
        return;
    }

    for listing in &matches {
        println!(
            "{}  {} — ${} · {} bedroom(s) · {}",
            format!("#{}", listing.id).dimmed(),
            listing.title.cyan(),
            listing.price,
            listing.bedrooms,
            listing.location
        );
        if !listing.amenities.is_empty() {
            println!("     {}", listing.amenities.join(", ").dimmed());
        }
    }
    println!(
        "\n{} {} of {} listing(s) match",
        "ℹ".blue(),
        matches.len(),
        catalog.len()
    );
}

//! Pharmacy Stock CLI
//!
//! Scans medicine packaging photos into the demo inventory and browses the
//! demo marketplace listing.

use clap::{Parser, Subcommand};
use pharmacy_stock::{demo, Catalog, GeminiApi, Medicine, Result};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

const DEMO_CHEMIST_ID: &str = "c1";
const DEMO_CHEMIST_NAME: &str = "My Chemist";

/// Pharmacy marketplace tool - scan medicine packaging and manage stock
#[derive(Parser, Debug)]
#[command(name = "pharmacy_stock")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a medicine packaging photo and add it to the inventory
    Scan {
        /// Path to the packaging photo (JPEG)
        image: PathBuf,

        /// Gemini API key (falls back to the GEMINI_API_KEY environment variable)
        #[arg(long)]
        api_key: Option<String>,

        /// Request timeout in seconds
        #[arg(long, default_value_t = 30)]
        timeout_secs: u64,

        /// Add the scanned medicine without asking for confirmation
        #[arg(long, default_value_t = false)]
        yes: bool,
    },

    /// Show the demo chemist inventory with stock and expiry overview
    Inventory,

    /// Browse the marketplace listing
    Browse {
        /// Filter by name or category (case-insensitive substring)
        #[arg(long, default_value = "")]
        search: String,

        /// Filter by exact category
        #[arg(long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match args.command {
        Command::Scan {
            image,
            api_key,
            timeout_secs,
            yes,
        } => {
            if let Err(e) = run_scan(&image, api_key, timeout_secs, yes).await {
                log::error!("Scan failed: {}", e);
                eprintln!("Scan failed: {}. Try again with a clearer photo.", e);
                std::process::exit(1);
            }
        }
        Command::Inventory => run_inventory(),
        Command::Browse { search, category } => run_browse(&search, category.as_deref()),
    }
}

/// Scan flow: extract details, review, then commit or discard
async fn run_scan(image: &PathBuf, api_key: Option<String>, timeout_secs: u64, yes: bool) -> Result<()> {
    let api_key = match api_key.or_else(|| std::env::var("GEMINI_API_KEY").ok()) {
        Some(key) => key,
        None => {
            log::error!("No API key: pass --api-key or set GEMINI_API_KEY");
            std::process::exit(1);
        }
    };

    let image_bytes = std::fs::read(image)?;

    let api = GeminiApi::with_timeout(api_key, Duration::from_secs(timeout_secs));
    let details = api.parse_medicine_image(&image_bytes).await?;

    println!("Details extracted:");
    println!("  Name:     {}", details.name);
    println!("  Dosage:   {}", details.dosage);
    println!("  Price:    ${:.2}", details.price);
    println!("  Stock:    {} units", details.stock);
    println!("  Expiry:   {}", details.expiry_date);
    println!("  Category: {}", details.category);

    if !yes && !confirm("Add to inventory? [y/N] ") {
        println!("Discarded - inventory unchanged.");
        return Ok(());
    }

    let mut inventory = demo::chemist_inventory();
    let record = inventory.commit(&details, DEMO_CHEMIST_ID, DEMO_CHEMIST_NAME);
    println!();
    println!("Added '{}' (id: {})", record.name, record.id);
    print_inventory(&inventory);
    Ok(())
}

/// Reads a yes/no answer from stdin
fn confirm(prompt: &str) -> bool {
    print!("{}", prompt);
    let _ = std::io::stdout().flush();
    let mut answer = String::new();
    if std::io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

fn run_inventory() {
    let inventory = demo::chemist_inventory();
    print_inventory(&inventory);

    let today = chrono::Local::now().date_naive();
    let near = inventory.near_expiry(today);
    if near.is_empty() {
        println!("\nNo items expiring in the next 5 months.");
    } else {
        println!("\nPeer trade candidates (near expiry):");
        for med in near {
            println!(
                "  {} ({}) - expires {}, ${:.2} -> ${:.2}",
                med.name,
                med.dosage,
                med.expiry_date,
                med.price,
                med.peer_price()
            );
        }
    }
}

fn print_inventory(inventory: &Catalog) {
    let today = chrono::Local::now().date_naive();
    println!(
        "Inventory: {} SKUs, {} low stock, {} near expiry",
        inventory.len(),
        inventory.low_stock_count(),
        inventory.near_expiry(today).len()
    );
    println!(
        "{:<22} {:<14} {:>6} {:>9}  {:<12} {}",
        "Medicine", "Dosage", "Qty", "Price", "Expiry", "Category"
    );
    for med in inventory.iter() {
        println!(
            "{:<22} {:<14} {:>6} {:>9}  {:<12} {}",
            med.name,
            med.dosage,
            med.stock,
            format!("${:.2}", med.price),
            med.expiry_date.to_string(),
            med.category
        );
    }
}

fn run_browse(search: &str, category: Option<&str>) {
    let marketplace = demo::marketplace();

    let categories = marketplace.categories();
    println!("Categories: {}", categories.join(", "));
    println!();

    let results = marketplace.search(search, category);
    if results.is_empty() {
        println!("No medicines match.");
        return;
    }

    for med in results {
        print_listing(med);
    }
}

fn print_listing(med: &Medicine) {
    match med.near_expiry_discount {
        Some(pct) => println!(
            "{} {} - ${:.2} ({}% off: ${:.2}) | {} | {}",
            med.name,
            med.dosage,
            med.price,
            pct,
            med.discounted_price(),
            med.category,
            med.chemist_name
        ),
        None => println!(
            "{} {} - ${:.2} | {} | {}",
            med.name, med.dosage, med.price, med.category, med.chemist_name
        ),
    }
}

//! Categories command - inspect the saved category store.

use std::path::Path;

use clap::Args;
use console::style;

use ebon_core::CategoryStore;

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// Print the raw JSON records instead of the listing
    #[arg(long)]
    json: bool,
}

pub fn run(args: CategoriesArgs, store_path: &Path) -> anyhow::Result<()> {
    let store = CategoryStore::load(store_path)?;

    if store.is_empty() {
        println!(
            "{} no categories saved at {}",
            style("ℹ").blue(),
            store_path.display()
        );
        return Ok(());
    }

    if args.json {
        let records: Vec<_> = store.iter().collect();
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    for (index, category) in store.iter().enumerate() {
        let learned = category
            .assigned_products
            .as_ref()
            .map_or(0, |products| products.len());
        println!(
            "[{index:>3}] {:<15} {} learned",
            category.name,
            style(learned).cyan()
        );
        if let Some(products) = &category.assigned_products {
            for product in products {
                println!("      - {product}");
            }
        }
    }

    Ok(())
}

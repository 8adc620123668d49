//! Process command - run one interactive categorization session over a receipt.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use console::{style, Term};
use serde::Serialize;
use tracing::{debug, info};

use ebon_core::{BoughtItem, CategoryStore, Decimal, Session};

use crate::display;
use crate::prompt;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input receipt file (PDF or plain text); prompted for when omitted
    input: Option<PathBuf>,

    /// Write the classified items to a file after the session
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub fn run(args: ProcessArgs, store_path: &Path) -> anyhow::Result<()> {
    println!("loading configuration...");
    let store = CategoryStore::load(store_path)?;

    let mut session = Session {
        items: Vec::new(),
        store,
    };

    // The store is written back however the session ends, so associations
    // learned before a fatal error survive.
    let outcome = drive(&mut session, &args);

    println!("saving configuration...");
    session.store.save(store_path)?;
    outcome
}

fn drive(session: &mut Session, args: &ProcessArgs) -> anyhow::Result<()> {
    let input = match &args.input {
        Some(path) => path.clone(),
        None => {
            let answer = prompt::ask("which file should be processed? (PDF)")?;
            // pasted paths often come wrapped in quotes
            PathBuf::from(answer.replace('"', ""))
        }
    };

    session.parse_receipt(&input)?;
    info!(
        "parsed {} items from {}",
        session.items.len(),
        input.display()
    );

    let term = Term::stdout();
    loop {
        term.clear_screen().ok();
        print!("{}", display::render_items(session));
        println!("\n------------------------\n");
        print!("{}", display::render_summary(session));

        if !prompt::confirm("\n\ndo you want to edit the current category assignment? Y/N")? {
            break;
        }

        edit_mode(session)?;
    }

    if let Some(output) = &args.output {
        let rendered = format_items(&session.items, &session.store, args.format)?;
        fs::write(output, rendered)?;
        println!(
            "{} output written to {}",
            style("✓").green(),
            output.display()
        );
    }

    Ok(())
}

/// One edit interaction: pick an item, pick an action, pick a category.
///
/// Cancel tokens and bad indices abort the current edit and return to the
/// item list; only I/O failures propagate.
fn edit_mode(session: &mut Session) -> anyhow::Result<()> {
    let answer = prompt::ask("which item do you want to change? use \"c\" to cancel")?;
    if prompt::is_cancel(&answer) {
        return Ok(());
    }

    let item_index: usize = match answer.parse() {
        Ok(index) => index,
        Err(_) => {
            println!("{} \"{answer}\" is not an item index", style("!").yellow());
            return Ok(());
        }
    };
    let item = match session.item(item_index) {
        Ok(item) => item,
        Err(err) => {
            println!("{} {err}", style("!").yellow());
            return Ok(());
        }
    };

    println!(
        "item to edit: \"{}\", with the current category \"{}\"",
        item.name,
        session.store.category_name(item.category_id)
    );
    println!();
    println!("you can (use \"c\" to cancel):");
    println!("\"e\":  edit category");
    println!("\"es\": edit category and save decision to the configuration");

    let action = prompt::answer()?;
    if action.eq_ignore_ascii_case("e") {
        choose_category(session, item_index, false)
    } else if action.eq_ignore_ascii_case("es") {
        choose_category(session, item_index, true)
    } else {
        // cancel, or anything unrecognized
        Ok(())
    }
}

fn choose_category(
    session: &mut Session,
    item_index: usize,
    remember: bool,
) -> anyhow::Result<()> {
    println!();
    println!("you can cancel (\"c\"), you can add a new category (\"a\") and you can choose one of the already existing categories:");
    for (index, category) in session.store.iter().enumerate() {
        println!("[{index:>3}] {:<15}", category.name);
    }
    println!();

    let answer = prompt::answer()?;
    if prompt::is_cancel(&answer) {
        return Ok(());
    }

    let category_id = if answer.eq_ignore_ascii_case("a") {
        let name = prompt::ask("what should the new category be called?")?;
        let id = session.store.add_category(name);
        debug!("added category {id}");
        id
    } else {
        match answer.parse() {
            Ok(id) => id,
            Err(_) => {
                println!(
                    "{} \"{answer}\" is not a category index",
                    style("!").yellow()
                );
                return Ok(());
            }
        }
    };

    if let Err(err) = session.assign(item_index, category_id, remember) {
        println!("{} {err}", style("!").yellow());
    }
    Ok(())
}

#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    category: &'a str,
    price: Decimal,
}

fn format_items(
    items: &[BoughtItem],
    store: &CategoryStore,
    format: OutputFormat,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<ExportRow> = items
                .iter()
                .map(|item| ExportRow {
                    name: &item.name,
                    category: store.category_name(item.category_id),
                    price: item.price,
                })
                .collect();
            Ok(serde_json::to_string_pretty(&rows)?)
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(["name", "category", "price"])?;
            for item in items {
                wtr.write_record([
                    item.name.as_str(),
                    store.category_name(item.category_id),
                    &format!("{:.2}", item.price),
                ])?;
            }
            let data = String::from_utf8(wtr.into_inner()?)?;
            Ok(data)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (Vec<BoughtItem>, CategoryStore) {
        let mut store = CategoryStore::default();
        store.add_category("Groceries");
        let items = vec![
            BoughtItem {
                name: "Milk".to_string(),
                price: Decimal::new(250, 2),
                category_id: Some(0),
            },
            BoughtItem {
                name: "Mystery".to_string(),
                price: Decimal::new(77, 2),
                category_id: None,
            },
        ];
        (items, store)
    }

    #[test]
    fn csv_export_has_header_and_category_names() {
        let (items, store) = sample();
        let csv = format_items(&items, &store, OutputFormat::Csv).unwrap();

        assert_eq!(
            csv,
            "name,category,price\nMilk,Groceries,2.50\nMystery,Unknown,0.77\n"
        );
    }

    #[test]
    fn json_export_resolves_category_names() {
        let (items, store) = sample();
        let json = format_items(&items, &store, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["category"], "Groceries");
        assert_eq!(value[1]["category"], "Unknown");
        assert_eq!(value[0]["price"], serde_json::json!("2.50"));
    }
}

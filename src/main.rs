//! Shopfront - headless driver for the catalog view-state controller
//!
//! Reads commands from stdin, feeds them through the engine, and prints a
//! snapshot of the resulting view state after each one.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use shopfront_app::{Engine, EngineHandle, MemoryQueryStore, NoopScroll, Settings, Snapshot};
use shopfront_core::prelude::*;
use shopfront_core::{builtin_catalog, QueryParams};

/// Shopfront - catalog filtering, pagination and query-string state
#[derive(Parser, Debug)]
#[command(name = "shopfront")]
#[command(about = "Headless catalog view-state controller", long_about = None)]
struct Args {
    /// Initial query string, e.g. "category=Police&page=2"
    #[arg(long, default_value = "")]
    query: String,

    /// Project directory holding .shopfront/config.toml
    #[arg(long, value_name = "PATH")]
    config_dir: Option<PathBuf>,

    /// Emit snapshots as JSON instead of a human-readable summary
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    shopfront_core::logging::init()?;

    let config_dir = args
        .config_dir
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let settings = Settings::load(&config_dir)?;

    let engine = Engine::new(
        Arc::new(builtin_catalog()),
        Box::new(MemoryQueryStore::from_query_string(&args.query)),
        Box::new(NoopScroll),
        settings.timing,
    );
    let mut handle = engine.handle();
    tokio::spawn(engine.run());

    print_snapshot(&handle.snapshot(), args.json);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(' ') {
            Some((c, r)) => (c, r.trim()),
            None => (line, ""),
        };

        match command {
            "category" => handle.set_category(rest)?,
            "subcategory" => handle.set_subcategory(rest)?,
            "search" => handle.submit_search(rest)?,
            "input" => handle.search_input_changed(rest)?,
            "expand" => handle.toggle_category_expansion(rest)?,
            "page" => match rest.parse::<u32>() {
                Ok(page) if page >= 1 => handle.change_page(page)?,
                _ => {
                    eprintln!("page wants a positive number, got {rest:?}");
                    continue;
                }
            },
            "navigate" => handle.navigated(QueryParams::parse(rest))?,
            "show" => {
                print_snapshot(&handle.snapshot(), args.json);
                continue;
            }
            "quit" => break,
            _ => {
                eprintln!(
                    "unknown command {command:?}; one of: category, subcategory, search, \
                     input, expand, page, navigate, show, quit"
                );
                continue;
            }
        }

        let snap = handle.next_snapshot().await?;
        print_snapshot(&snap, args.json);
    }

    shutdown(&handle);
    Ok(())
}

fn shutdown(handle: &EngineHandle) {
    if let Err(e) = handle.teardown() {
        warn!("Teardown failed: {}", e);
    }
}

fn print_snapshot(snap: &Snapshot, json: bool) {
    if json {
        match serde_json::to_string(snap) {
            Ok(out) => println!("{out}"),
            Err(e) => error!("Snapshot serialization failed: {}", e),
        }
        return;
    }

    println!("?{}", snap.query);
    if snap.initial_loading || snap.filter_loading {
        println!("  loading...");
        return;
    }
    if snap.no_items {
        println!("  No items found");
        return;
    }
    println!(
        "  {} matching, page {}/{}",
        snap.filtered_count, snap.page, snap.total_pages
    );
    for item in &snap.items {
        println!("    [{}] {}", item.id, item.name);
    }
    if let Some(p) = &snap.pagination {
        println!(
            "  pages {:?}  prev:{} next:{}",
            p.pages, p.show_prev, p.show_next
        );
    }
}

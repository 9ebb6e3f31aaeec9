//! Command-line front end over the site logic.
//!
//! Examples:
//!   dreamknot-cli catalog
//!   dreamknot-cli catalog --type beach
//!   dreamknot-cli search goa
//!   dreamknot-cli search "" --type palace
//!   dreamknot-cli validate email guest@example.com
//!   dreamknot-cli price 25
//!   dreamknot-cli currency 1234567
//!   dreamknot-cli date 2026-10-19
//!   dreamknot-cli carousel
//!   dreamknot-cli --config site.json config
//!
//! `--config <path>` loads a site config JSON file; defaults apply otherwise.

use std::process;

use dreamknot::prelude::*;
use dreamknot::{format, modal, validation};

fn usage() -> ! {
    eprintln!("dreamknot-cli (site logic without a browser)");
    eprintln!("Usage: dreamknot-cli [--config path] <command> [args]\n");
    eprintln!("Commands:");
    eprintln!("  catalog [--type <kind>]           List destinations");
    eprintln!("  search <query> [--type <kind>]    Resolve a hero search");
    eprintln!("  validate <text|email|tel> <value> Check one required field");
    eprintln!("  price <value>                     Venue modal price label");
    eprintln!("  currency <amount>                 Whole-rupee currency format");
    eprintln!("  date <YYYY-MM-DD>                 Long date format");
    eprintln!("  carousel                          Slider options as JSON");
    eprintln!("  config                            Show the effective config");
    process::exit(1);
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("Error: {msg}");
    process::exit(1);
}

fn parse_args() -> (Option<String>, Vec<String>) {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
    }

    let mut config_path = None;
    if args.len() >= 2 && args[0] == "--config" {
        config_path = Some(args[1].clone());
        args.drain(0..2);
    }

    if args.is_empty() {
        usage();
    }

    (config_path, args)
}

fn load_config(path: Option<&str>) -> Result<SiteConfig, String> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let raw = std::fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))?;
    SiteConfig::from_json(&raw).map_err(|e| format!("{path}: {e}"))
}

/// Pulls `--type <kind>` out of `args`, wherever it appears.
fn take_type_flag(args: &mut Vec<String>) -> Option<String> {
    let pos = args.iter().position(|a| a == "--type")?;
    if pos + 1 >= args.len() {
        usage();
    }
    let value = args.remove(pos + 1);
    args.remove(pos);
    Some(value)
}

fn print_record(rec: &DestinationRecord) {
    println!(
        "{:<10} {:<20} {:<14} {:<7} rating={:<4} venues={:<4} {}",
        rec.id,
        rec.title,
        rec.kind.as_str(),
        rec.budget.as_str(),
        rec.rating,
        rec.venue_count,
        rec.location,
    );
}

fn main() {
    let (config_path, mut args) = parse_args();
    let config = load_config(config_path.as_deref()).unwrap_or_else(|e| fail(e));

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .with_target(false)
        .init();

    let catalog = Catalog::builtin();
    let cmd = args.remove(0);

    match cmd.as_str() {
        "catalog" => {
            let filter = take_type_flag(&mut args);
            match filter {
                Some(kind) => {
                    let kind: DestinationKind = kind.parse().unwrap_or_else(|e| fail(e));
                    catalog.by_kind(kind).for_each(print_record);
                }
                None => catalog.iter().for_each(print_record),
            }
        }
        "search" => {
            let filter = take_type_flag(&mut args);
            let mut input = SearchInput::query(args.join(" "));
            if let Some(kind) = filter {
                input = input.with_type_filter(kind);
            }
            let outcome = search::resolve(&catalog, &input);
            if let Some(route) = outcome.route() {
                println!("{}", route.href());
            } else if let Some(message) = outcome.not_found_message() {
                println!("{message}");
                println!("-> {}", Route::Contact.href());
            } else {
                println!("(nothing to do)");
            }
        }
        "validate" => {
            if args.len() < 2 {
                usage();
            }
            let kind = validation::FieldKind::from_type_attr(&args[0]);
            let field = FieldInput::required(&args[0], kind, &args[1]);
            match validation::validate_field(&field) {
                Ok(()) => println!("ok"),
                Err(e) => fail(e),
            }
        }
        "price" => {
            if args.is_empty() {
                usage();
            }
            println!("{}", modal::price_label(&args[0]));
        }
        "currency" => {
            if args.is_empty() {
                usage();
            }
            let amount: f64 = args[0]
                .parse()
                .unwrap_or_else(|_| fail("currency amount must be a number"));
            println!("{}", format::format_currency(amount));
        }
        "date" => {
            if args.is_empty() {
                usage();
            }
            match format::format_date(&args[0]) {
                Ok(s) => println!("{s}"),
                Err(e) => fail(e),
            }
        }
        "carousel" => match config.carousel.to_json() {
            Ok(json) => println!("{json}"),
            Err(e) => fail(e),
        },
        "config" => {
            if let Err(e) = config.validate() {
                fail(e);
            }
            if let Err(e) = catalog.validate() {
                fail(e);
            }
            match serde_json::to_string_pretty(&config) {
                Ok(json) => println!("{json}"),
                Err(e) => fail(e),
            }
        }
        _ => usage(),
    }
}

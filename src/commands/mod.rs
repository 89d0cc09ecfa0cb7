//! Command-line surface of the till.
//!
//! `add` saves one completed service, `list` shows the (optionally filtered)
//! records table with its running total, `prices` shows the quick-select
//! tiers for a service, `export` writes the income report and offers to
//! clear the day, and `clear` is the bulk wipe. User-facing strings keep the
//! shop's wording; errors bubble up to `main` for reporting.

use crate::config::AppConfig;
use crate::core::filter::{self, BarberFilter};
use crate::core::form::EntryForm;
use crate::core::report::build_report;
use crate::core::store::RecordStore;
use crate::errors::Result;
use crate::render::{CsvRenderer, DocumentRenderer, TextRenderer, write_report};
use crate::storage::archive::RecordArchive;
use crate::storage::kv::FileStore;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{BufRead, Write as _};
use std::path::PathBuf;

/// Point-of-sale till and daily income reporting for a barber shop.
#[derive(Debug, Parser)]
#[command(name = "berber-kasa", version, about)]
pub struct Cli {
    /// Path to the configuration file (default: ./config.toml when present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory the record archive lives in.
    #[arg(long, global = true, env = "BERBER_KASA_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// The command to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Record a completed service.
    Add {
        /// Barber who performed the service.
        #[arg(short, long)]
        barber: Option<String>,

        /// Name of the service.
        #[arg(short, long)]
        service: Option<String>,

        /// Price, without currency suffix.
        #[arg(short, long)]
        price: Option<String>,

        /// Use the Nth suggested price tier for the service instead (1-3).
        #[arg(short, long, conflicts_with = "price")]
        tier: Option<usize>,
    },

    /// List the day's records, optionally for one barber.
    List {
        /// Barber to filter by, or `all`.
        #[arg(short, long)]
        barber: Option<String>,
    },

    /// Show the suggested price tiers for a service.
    Prices {
        /// Name of the service.
        service: String,
    },

    /// Export the income report to a document file.
    Export {
        /// Barber to filter by, or `all`.
        #[arg(short, long)]
        barber: Option<String>,

        /// Output document format.
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
        format: ExportFormat,

        /// Directory the report is written to.
        #[arg(short, long, default_value = "reports")]
        output: PathBuf,

        /// Clear all records after the export without asking.
        #[arg(long, conflicts_with = "keep")]
        clear: bool,

        /// Keep all records after the export without asking.
        #[arg(long)]
        keep: bool,
    },

    /// Delete every saved record.
    Clear {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

/// Output format of the exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Paginated plain-text grid
    Text,
    /// Flat CSV table
    Csv,
}

/// Opens the record store and dispatches the parsed command.
pub fn run(cli: Cli, config: &AppConfig) -> Result<()> {
    let backend = FileStore::open(&cli.data_dir)?;
    let mut store = RecordStore::open(RecordArchive::new(Box::new(backend)));

    match cli.command {
        Commands::Add {
            barber,
            service,
            price,
            tier,
        } => run_add(config, &mut store, barber, service, price, tier),
        Commands::List { barber } => run_list(config, &store, barber),
        Commands::Prices { service } => run_prices(config, &service),
        Commands::Export {
            barber,
            format,
            output,
            clear,
            keep,
        } => run_export(config, &mut store, barber, format, &output, clear, keep),
        Commands::Clear { yes } => run_clear(&mut store, yes),
    }
}

fn run_add(
    config: &AppConfig,
    store: &mut RecordStore,
    barber: Option<String>,
    service: Option<String>,
    price: Option<String>,
    tier: Option<usize>,
) -> Result<()> {
    let mut form = EntryForm::new(&config.catalog);
    if let Some(barber) = barber {
        form.set_barber(barber);
    }
    if let Some(service) = service {
        form.set_service(service);
    }
    if let Some(price) = price {
        form.set_price(price);
    }
    if let Some(tier) = tier {
        form.select_tier(tier)?;
    }

    let record = form.save(store)?;
    println!("Hizmet kaydı başarıyla eklendi.");
    println!(
        "  {} | {} | {} | {}₺",
        record.barber, record.time, record.service, record.price
    );
    Ok(())
}

fn run_list(config: &AppConfig, store: &RecordStore, barber: Option<String>) -> Result<()> {
    if store.is_empty() {
        println!("Henüz kayıt yok. Hizmet eklemek için `add` komutunu kullanın.");
        return Ok(());
    }

    let selection = BarberFilter::from_arg(barber);
    let subset = filter::filtered(store.records(), &selection);
    let total = filter::format_total(filter::total(&subset));

    let columns = &config.report.columns;
    println!("{} | {} | {} | {}", columns[0], columns[1], columns[2], columns[3]);
    for record in &subset {
        println!(
            "{} | {} | {} | {}₺",
            record.barber, record.time, record.service, record.price
        );
    }

    let label = match &selection {
        BarberFilter::All => "Toplam Günlük Gelir:".to_string(),
        BarberFilter::Barber(name) => format!("{name} Toplam Gelir:"),
    };
    println!("{label} {total}₺");
    Ok(())
}

fn run_prices(config: &AppConfig, service: &str) -> Result<()> {
    let tiers = config
        .catalog
        .price_suggestions(service)
        .ok_or_else(|| crate::errors::Error::UnknownService {
            name: service.to_string(),
        })?;

    for (index, price) in tiers.iter().enumerate() {
        println!("{}. {price}₺", index + 1);
    }
    Ok(())
}

fn run_export(
    config: &AppConfig,
    store: &mut RecordStore,
    barber: Option<String>,
    format: ExportFormat,
    output: &std::path::Path,
    clear: bool,
    keep: bool,
) -> Result<()> {
    let selection = BarberFilter::from_arg(barber);
    let subset = filter::filtered(store.records(), &selection);
    let total = filter::total(&subset);
    let today = Local::now().date_naive();

    let report = build_report(&subset, total, &selection, today, &config.report)?;
    let renderer: Box<dyn DocumentRenderer> = match format {
        ExportFormat::Text => Box::new(TextRenderer::default()),
        ExportFormat::Csv => Box::new(CsvRenderer),
    };
    let path = write_report(renderer.as_ref(), &report, output)?;
    println!("Rapor kaydedildi: {}", path.display());

    let wipe = if clear {
        true
    } else if keep {
        false
    } else {
        confirm("Kayıtları temizlemek istiyor musunuz?")?
    };
    if wipe {
        store.clear();
        println!("Tüm kayıtlar temizlendi.");
    }
    Ok(())
}

fn run_clear(store: &mut RecordStore, yes: bool) -> Result<()> {
    if !yes && !confirm("Tüm kayıtlar silinecek. Emin misiniz?")? {
        return Ok(());
    }
    store.clear();
    println!("Tüm kayıtlar temizlendi.");
    Ok(())
}

/// Asks a yes/no question on stdin; `e`/`evet` confirm, anything else
/// declines.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [e/H] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("e") || answer.eq_ignore_ascii_case("evet"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_tier() {
        let cli = Cli::parse_from([
            "berber-kasa",
            "add",
            "--barber",
            "Berber 1",
            "--service",
            "Tıraş",
            "--tier",
            "2",
        ]);
        match cli.command {
            Commands::Add { tier, price, .. } => {
                assert_eq!(tier, Some(2));
                assert_eq!(price, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_tier_conflicts_with_price() {
        let result = Cli::try_parse_from([
            "berber-kasa",
            "add",
            "--price",
            "250",
            "--tier",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_export_defaults() {
        let cli = Cli::parse_from(["berber-kasa", "export"]);
        match cli.command {
            Commands::Export {
                format,
                output,
                clear,
                keep,
                ..
            } => {
                assert_eq!(format, ExportFormat::Text);
                assert_eq!(output, PathBuf::from("reports"));
                assert!(!clear);
                assert!(!keep);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}

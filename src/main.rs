use clap::Parser;
use rupee_converter::core::action::{Action, Effect, update};
use rupee_converter::core::config::{self, ResolvedConfig, StartupNotes};
use rupee_converter::core::rates::RateTable;
use rupee_converter::core::state::App;
use rupee_converter::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "rupee", about = "Convert Indian rupees into other currencies")]
struct Args {
    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the rate table and exit
    #[arg(long, conflicts_with_all = ["amount", "to"])]
    list: bool,

    /// Amount in rupees for a one-shot conversion
    #[arg(long, requires = "to")]
    amount: Option<String>,

    /// Currency name to convert into (see --list)
    #[arg(long, requires = "amount")]
    to: Option<String>,
}

fn init_logging(config: &ResolvedConfig) {
    let level = config.log_level.parse::<LevelFilter>().unwrap_or_else(|_| {
        eprintln!("Unknown log level {:?}, using info", config.log_level);
        LevelFilter::Info
    });

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(level, log_config, log_file);
    }
}

fn print_rates(rates: &RateTable) {
    for record in rates.iter() {
        println!("{} {:<12} {:<3} {}", record.flag, record.name, record.symbol, record.value);
    }
}

/// Runs a single conversion through the same state machine the TUI drives.
fn convert_once(rates: RateTable, amount: String, to: String) -> ExitCode {
    if rates.lookup(&to).is_none() {
        eprintln!("Unknown currency '{to}'. Run with --list to see the options.");
        return ExitCode::from(2);
    }

    let mut app = App::new(rates);
    for action in [Action::TextChanged(amount), Action::ButtonPressed(to)] {
        if let Effect::Notify(notification) = update(&mut app, action) {
            eprintln!("{}", notification.text);
            return ExitCode::FAILURE;
        }
    }

    match app.result_text {
        Some(result) => {
            println!("{result}");
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    }
}

fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let mut notes = StartupNotes::default();
    let file_config = config::load_config(&mut notes).unwrap_or_else(|e| {
        eprintln!("{e}; using defaults");
        config::RupeeConfig::default()
    });
    let resolved = config::resolve(&file_config, args.log_level.as_deref(), &mut notes);

    init_logging(&resolved);
    log::info!("Rupee converter starting up");
    notes.flush();
    log::debug!("Resolved config: {:?}", resolved);

    let rates = RateTable::default();

    if args.list {
        print_rates(&rates);
        return Ok(ExitCode::SUCCESS);
    }

    if let (Some(amount), Some(to)) = (args.amount, args.to) {
        return Ok(convert_once(rates, amount, to));
    }

    tui::run(&resolved, rates)?;
    Ok(ExitCode::SUCCESS)
}

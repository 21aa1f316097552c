use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;

use ductulator::config::{self, CONFIG_FILE};
use ductulator::i18n::{self, Translator};
use ductulator::units::AirflowUnit;
use ductulator::app;

#[derive(Parser)]
#[command(name = "ductulator")]
#[command(about = "Fabric duct sizing calculator", long_about = None)]
struct Cli {
    /// Display language (ko, en)
    #[arg(long, global = true)]
    lang: Option<String>,
    /// Path to the config file
    #[arg(long, global = true, default_value = CONFIG_FILE)]
    config: PathBuf,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    Cfm,
    Tonnage,
}

impl From<UnitArg> for AirflowUnit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Cfm => AirflowUnit::Cfm,
            UnitArg::Tonnage => AirflowUnit::Tonnage,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend duct diameters for an airflow
    Size {
        /// Airflow amount (CFM, or tons with --tonnage)
        amount: f64,
        /// Treat the amount as HVAC tonnage
        #[arg(long)]
        tonnage: bool,
    },
    /// Convert between CFM and tonnage
    Convert {
        /// Airflow amount in the other unit
        amount: f64,
        /// Target unit
        #[arg(long, value_enum, default_value = "tonnage")]
        to: UnitArg,
    },
    /// Print a quote inquiry email draft
    Contact {
        /// Prefill the CFM job detail
        #[arg(long)]
        cfm: Option<f64>,
    },
    /// Interactive calculator (default)
    Interactive,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut cfg = match config::load_from(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(cli.verbose, &cfg.log_level);

    let lang = i18n::resolve_language(cli.lang.as_deref(), cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, None);

    let result = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Size { amount, tonnage } => {
            let unit = if tonnage {
                AirflowUnit::Tonnage
            } else {
                AirflowUnit::Cfm
            };
            app::print_sizes(&cfg, &tr, amount, unit);
            Ok(())
        }
        Commands::Convert { amount, to } => {
            app::print_conversion(amount, to.into());
            Ok(())
        }
        Commands::Contact { cfm } => app::print_quote(&cfg, cfm),
        Commands::Interactive => app::run(&mut cfg, &cli.config, &tr),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8, configured: &str) {
    let level = match verbose {
        0 => configured.parse::<Level>().unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

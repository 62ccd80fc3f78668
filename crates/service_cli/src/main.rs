//! carry-pricer CLI - Command Line Operations for Cost-of-Carry Option Pricing
//!
//! This is the operational entry point for the pricing workspace.
//!
//! # Commands
//!
//! - `carry-pricer price` - Price one contract with closed-form greeks
//! - `carry-pricer sweep <factor> <start> <end> <step>` - Evaluate across a factor range
//! - `carry-pricer approx <delta|gamma>` - Finite-difference sensitivities
//! - `carry-pricer parity` - Put-call parity counterpart or check
//! - `carry-pricer batch <file>` - Evaluate a TOML list of contracts
//! - `carry-pricer demo` - Walk through both option families
//!
//! # Architecture
//!
//! As part of the service layer, this crate orchestrates `pricer_core`,
//! `pricer_models` and `pricer_risk`. The contract in the configuration
//! file supplies every factor the command line does not override.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pricer_models::instruments::OptionFamily;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

use commands::approx::Sensitivity;
use commands::parity::ParityRequest;
use commands::sweep::SweepRequest;
use commands::{ContractArgs, Quantity};
use config::{CliConfig, DEFAULT_CONFIG_FILE};

pub use error::{CliError, Result};

/// Cost-of-carry option pricer
#[derive(Parser)]
#[command(name = "carry-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one contract
    Price {
        /// Option family (european, perpetual)
        #[arg(long, default_value = "european")]
        family: OptionFamily,

        #[command(flatten)]
        contract: ContractArgs,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Evaluate a quantity while one factor walks a range
    #[command(allow_negative_numbers = true)]
    Sweep {
        /// Factor to sweep (T, K, sig, r, b, S)
        factor: String,

        /// First value
        start: f64,

        /// Last value (included if reached by repeated addition of step)
        end: f64,

        /// Increment, signed in the direction of travel
        step: f64,

        /// Quantity to compute
        #[arg(short, long, value_enum, default_value = "price")]
        quantity: Quantity,

        /// Option family (european, perpetual)
        #[arg(long, default_value = "european")]
        family: OptionFamily,

        #[command(flatten)]
        contract: ContractArgs,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Approximate delta or gamma by central differences (European only)
    Approx {
        /// Sensitivity to approximate
        #[arg(value_enum)]
        sensitivity: Sensitivity,

        /// Spot at which to evaluate (defaults to the contract spot)
        #[arg(long)]
        at: Option<f64>,

        /// Spot bump (defaults to finite_difference.bump)
        #[arg(long)]
        bump: Option<f64>,

        #[command(flatten)]
        contract: ContractArgs,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Put-call parity counterpart of a price, or a check of a call/put pair
    Parity {
        /// Quoted price whose counterpart is wanted
        #[arg(long, conflicts_with_all = ["call", "put"])]
        price: Option<f64>,

        /// Type token of the quoted price (C or P)
        #[arg(long, requires = "price")]
        price_type: Option<String>,

        /// Call price to check
        #[arg(long, requires = "put")]
        call: Option<f64>,

        /// Put price to check
        #[arg(long, requires = "call")]
        put: Option<f64>,

        #[command(flatten)]
        contract: ContractArgs,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Evaluate every contract in a TOML batch file
    Batch {
        /// Path to the batch file
        file: PathBuf,

        /// Option family (european, perpetual)
        #[arg(long, default_value = "european")]
        family: OptionFamily,

        /// Quantity to compute
        #[arg(short, long, value_enum, default_value = "price")]
        quantity: Quantity,

        /// Output format (json, csv, table)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Run the walkthrough of both option families
    Demo,
}

fn init_tracing(verbose: bool, config: &CliConfig) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)?;
    init_tracing(cli.verbose, &config);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(config = %cli.config.display(), "Configuration loaded");

    match cli.command {
        Commands::Price {
            family,
            contract,
            format,
        } => commands::price::run(&config, family, &contract, &format),
        Commands::Sweep {
            factor,
            start,
            end,
            step,
            quantity,
            family,
            contract,
            format,
        } => {
            let request = SweepRequest {
                family,
                quantity,
                factor,
                start,
                end,
                step,
            };
            commands::sweep::run(&config, &request, &contract, &format)
        }
        Commands::Approx {
            sensitivity,
            at,
            bump,
            contract,
            format,
        } => commands::approx::run(&config, sensitivity, at, bump, &contract, &format),
        Commands::Parity {
            price,
            price_type,
            call,
            put,
            contract,
            format,
        } => {
            let request = ParityRequest::from_options(price, price_type, call, put)?;
            commands::parity::run(&config, &request, &contract, &format)
        }
        Commands::Batch {
            file,
            family,
            quantity,
            format,
        } => commands::batch::run(&config, &file, family, quantity, &format),
        Commands::Demo => commands::demo::run(&config),
    }
}

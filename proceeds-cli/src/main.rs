use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use proceeds_core::{ClosingCostsMode, CostField};
use tracing::{debug, info};

use proceeds_cli::{
    Config, InputOverrides, OutputFormat, Palette, Theme, app, logging, report, session,
};

// --- CLI definition ---

/// Seller net proceeds estimator.
///
/// Estimates the cash a seller takes home from a property sale after
/// commissions, closing costs and debt payoff.
#[derive(Debug, Parser)]
#[command(name = "net-proceeds", version, about)]
struct Cli {
    /// TOML file with starting values and display settings.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    /// Color theme (overrides the config file).
    #[arg(long, value_enum, global = true)]
    theme: Option<Theme>,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Also append log output to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the take-home estimate with summary figures and ratios.
    Estimate(InputArgs),

    /// Print the full line-item net recovery sheet.
    Audit(InputArgs),

    /// Edit the inputs field by field and watch the estimate change.
    Interactive(ModeArg),

    /// List the editable fields and their starting values.
    Fields(ModeArg),
}

/// Values accept free-form text such as `$525,000` or `3%`.
#[derive(Debug, Args)]
struct InputArgs {
    /// Gross contracted sale price.
    #[arg(long)]
    sale_price: Option<String>,

    /// Original purchase price.
    #[arg(long)]
    purchase_price: Option<String>,

    /// Outstanding mortgage balance.
    #[arg(long)]
    mortgage_payoff: Option<String>,

    /// Other recorded liens.
    #[arg(long)]
    other_liens: Option<String>,

    /// Listing agent commission, in percent.
    #[arg(long)]
    listing_commission: Option<String>,

    /// Buyer agent commission, in percent.
    #[arg(long)]
    buyer_commission: Option<String>,

    /// Title and closing costs: a percent of sale, or a flat amount with
    /// `--closing-mode currency`.
    #[arg(long)]
    closing_costs: Option<String>,

    /// Prorated property taxes owed at closing.
    #[arg(long)]
    property_taxes: Option<String>,

    /// Repair credits given to the buyer.
    #[arg(long)]
    repair_credits: Option<String>,

    /// Other fees.
    #[arg(long)]
    other_fees: Option<String>,

    #[command(flatten)]
    mode: ModeArg,
}

#[derive(Debug, Args)]
struct ModeArg {
    /// How to read the closing costs value: percent or currency.
    #[arg(long, value_parser = parse_mode)]
    closing_mode: Option<ClosingCostsMode>,
}

fn parse_mode(s: &str) -> Result<ClosingCostsMode, String> {
    ClosingCostsMode::parse(s).ok_or_else(|| format!("'{s}' is not percent or currency"))
}

impl InputArgs {
    fn into_overrides(self) -> InputOverrides {
        let mut overrides = InputOverrides {
            mode: self.mode.closing_mode,
            ..Default::default()
        };
        overrides.push(CostField::SalePrice, self.sale_price);
        overrides.push(CostField::PurchasePrice, self.purchase_price);
        overrides.push(CostField::MortgagePayoff, self.mortgage_payoff);
        overrides.push(CostField::OtherLiens, self.other_liens);
        overrides.push(CostField::AgentCommissionPercent, self.listing_commission);
        overrides.push(CostField::BuyerAgentCommissionPercent, self.buyer_commission);
        overrides.push(CostField::ClosingCostsPercent, self.closing_costs);
        overrides.push(CostField::ProratedPropertyTaxes, self.property_taxes);
        overrides.push(CostField::RepairCredits, self.repair_credits);
        overrides.push(CostField::OtherFees, self.other_fees);
        overrides
    }
}

// --- Entry point ---

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => {
            debug!("loading config from {}", path.display());
            Config::load(path).with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => Config::default(),
    };

    let theme = cli.theme.unwrap_or(config.display.theme);
    let palette = Palette::new(theme, config.display.color && !cli.no_color);

    let mut stdout = io::stdout().lock();
    match cli.command {
        Command::Estimate(args) => {
            let state = app::build_state(&config, &args.into_overrides())?;
            write!(stdout, "{}", app::estimate_report(&state, cli.format, &palette)?)?;
        }
        Command::Audit(args) => {
            let state = app::build_state(&config, &args.into_overrides())?;
            write!(stdout, "{}", app::audit_report(&state, cli.format, &palette)?)?;
        }
        Command::Interactive(mode) => {
            let overrides = InputOverrides {
                mode: mode.closing_mode,
                ..Default::default()
            };
            let mut state = app::build_state(&config, &overrides)?;
            session::run(&mut state, io::stdin().lock(), &mut stdout, &palette)?;
        }
        Command::Fields(mode) => {
            let overrides = InputOverrides {
                mode: mode.closing_mode,
                ..Default::default()
            };
            let state = app::build_state(&config, &overrides)?;
            write!(stdout, "{}", report::render_fields(&state))?;
        }
    }
    stdout.flush()?;

    info!("done");
    Ok(())
}

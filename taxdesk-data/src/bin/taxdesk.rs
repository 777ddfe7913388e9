use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use taxdesk_core::calculations::{HraInput, Section80CInput, Section80DInput};
use taxdesk_data::{AppConfig, RecordLoader, RecordLoaderError};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Deduction calculator and practice dashboard statistics.
///
/// Amounts are entered and printed in rupees without formatting.
#[derive(Debug, Parser)]
#[command(name = "taxdesk")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file overriding statutory limits or the upcoming window.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dashboard counters computed from CSV record exports.
    Stats(StatsArgs),

    /// House Rent Allowance exemption.
    Hra {
        #[arg(long)]
        basic_salary: Decimal,
        #[arg(long)]
        hra_received: Decimal,
        #[arg(long)]
        rent_paid: Decimal,
        /// Residence is in a metro city.
        #[arg(long, default_value_t = false)]
        metro: bool,
    },

    /// Section 80C investments (aggregate limit).
    #[command(name = "80c")]
    Section80C(Section80CArgs),

    /// Section 80D medical insurance (per-category limits).
    #[command(name = "80d")]
    Section80D(Section80DArgs),

    /// Interest on a self-occupied home loan.
    HomeLoan {
        #[arg(long)]
        interest: Decimal,
    },

    /// Savings and deposit interest (80TTA / 80TTB).
    SavingsInterest {
        #[arg(long)]
        interest: Decimal,
        #[arg(long)]
        age: u32,
    },

    /// Interest on an education loan.
    EducationLoan {
        #[arg(long)]
        interest: Decimal,
    },

    /// Additional NPS contribution (80CCD(1B)).
    Nps {
        #[arg(long)]
        contribution: Decimal,
    },
}

#[derive(Debug, Args)]
struct StatsArgs {
    #[arg(long)]
    clients: Option<PathBuf>,
    #[arg(long)]
    tasks: Option<PathBuf>,
    #[arg(long)]
    compliance: Option<PathBuf>,
    #[arg(long)]
    notices: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,
}

#[derive(Debug, Args)]
struct Section80CArgs {
    #[arg(long, default_value_t = Decimal::ZERO)]
    ppf: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    elss: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    lic: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    nsc: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    tax_saver_fd: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    tuition_fees: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    home_loan_principal: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    sukanya_samriddhi: Decimal,
}

impl From<Section80CArgs> for Section80CInput {
    fn from(args: Section80CArgs) -> Self {
        Self {
            ppf: args.ppf,
            elss: args.elss,
            lic: args.lic,
            nsc: args.nsc,
            tax_saver_fd: args.tax_saver_fd,
            tuition_fees: args.tuition_fees,
            home_loan_principal: args.home_loan_principal,
            sukanya_samriddhi: args.sukanya_samriddhi,
        }
    }
}

#[derive(Debug, Args)]
struct Section80DArgs {
    #[arg(long, default_value_t = Decimal::ZERO)]
    self_and_family: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    parents: Decimal,
    #[arg(long, default_value_t = Decimal::ZERO)]
    preventive_health_checkup: Decimal,
    #[arg(long, default_value_t = false)]
    parent_senior: bool,
    #[arg(long, default_value_t = false)]
    self_senior: bool,
}

impl From<Section80DArgs> for Section80DInput {
    fn from(args: Section80DArgs) -> Self {
        Self {
            self_and_family: args.self_and_family,
            parents: args.parents,
            preventive_health_checkup: args.preventive_health_checkup,
            is_parent_senior: args.parent_senior,
            is_self_senior: args.self_senior,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Writes to stderr so results on stdout stay pipeable.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── helpers ─────────────────────────────────────────────────────────────────

/// Loads an optional record file; an omitted path is an empty collection.
fn load_optional<T>(
    path: Option<&Path>,
    load: fn(&Path) -> Result<Vec<T>, RecordLoaderError>,
) -> Result<Vec<T>> {
    match path {
        Some(path) => {
            let records =
                load(path).with_context(|| format!("Failed to load: {}", path.display()))?;
            debug!(path = %path.display(), count = records.len(), "loaded records");
            Ok(records)
        }
        None => Ok(Vec::new()),
    }
}

fn print_amount(
    name: &str,
    amount: Decimal,
) {
    println!("{name}: {amount}");
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AppConfig::default(),
    };
    let engine = config.engine().context("Invalid deduction limits")?;

    match cli.command {
        Command::Stats(args) => {
            let clients = load_optional(args.clients.as_deref(), RecordLoader::load_clients)?;
            let tasks = load_optional(args.tasks.as_deref(), RecordLoader::load_tasks)?;
            let compliance = load_optional(
                args.compliance.as_deref(),
                RecordLoader::load_compliance_items,
            )?;
            let notices = load_optional(args.notices.as_deref(), RecordLoader::load_notices)?;
            let today = args.today.unwrap_or_else(|| Local::now().date_naive());

            info!(%today, "computing dashboard statistics");
            let snapshot = config
                .aggregator()
                .compute(&clients, &tasks, &compliance, &notices, today);

            println!("total_clients: {}", snapshot.total_clients);
            println!("pending_tasks: {}", snapshot.pending_tasks);
            println!("upcoming_deadlines: {}", snapshot.upcoming_deadlines);
            println!("completed_returns: {}", snapshot.completed_returns);
            println!("pending_notices: {}", snapshot.pending_notices);
            println!("overdue_compliances: {}", snapshot.overdue_compliances);
        }
        Command::Hra {
            basic_salary,
            hra_received,
            rent_paid,
            metro,
        } => {
            let result = engine.hra_breakdown(&HraInput {
                basic_salary,
                hra_received,
                rent_paid,
                is_metro_city: metro,
            });
            print_amount("hra_received", result.hra_received);
            print_amount("salary_share", result.salary_share);
            print_amount("excess_rent", result.excess_rent);
            print_amount("exemption", result.exemption);
            print_amount("taxable_hra", result.taxable_hra);
        }
        Command::Section80C(args) => {
            let result = engine.section_80c(&args.into());
            print_amount("total", result.total);
            print_amount("limit", result.limit);
            print_amount("remaining", result.remaining());
            println!("max_reached: {}", result.max_reached);
        }
        Command::Section80D(args) => {
            let result = engine.section_80d(&args.into());
            print_amount("self_and_family", result.breakdown.self_and_family);
            print_amount("self_and_family_limit", result.limits.self_and_family);
            print_amount("parents", result.breakdown.parents);
            print_amount("parents_limit", result.limits.parents);
            print_amount(
                "preventive_health_checkup",
                result.breakdown.preventive_health_checkup,
            );
            print_amount(
                "preventive_health_checkup_limit",
                result.limits.preventive_health_checkup,
            );
            print_amount("total", result.total);
        }
        Command::HomeLoan { interest } => {
            print_amount("deduction", engine.home_loan_interest(interest));
        }
        Command::SavingsInterest { interest, age } => {
            print_amount("deduction", engine.savings_interest(interest, age));
        }
        Command::EducationLoan { interest } => {
            print_amount("deduction", engine.education_loan_interest(interest));
        }
        Command::Nps { contribution } => {
            print_amount("deduction", engine.nps_contribution(contribution));
        }
    }

    Ok(())
}

//! `harmonic` — exact optimum of the harmonic integer program.
//!
//! **Usage:**
//! ```text
//! harmonic compute <K> <MU> [--debug]
//! harmonic table <KMAX> <csv|tex> [--use-float] [--labels lee,capr,eku] [--debug]
//! ```
//!
//! Diagnostics go to stderr through `tracing`. `--debug` enables the search
//! trace; otherwise `RUST_LOG` applies (default `warn`).

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;
use tracing_subscriber::EnvFilter;
use u_harmonic::error::HarmonicError;
use u_harmonic::rational::{float_str, is_negative, parse_rational, Rational};
use u_harmonic::solve::{IpRunner, SolveConfig};
use u_harmonic::table::{render_table, MuLabel, TableFormat};

/// Exact solver for the parameterized harmonic integer program.
#[derive(Parser)]
#[command(name = "harmonic", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Computes the optimal value for one k and mu.
    Compute {
        /// Problem size (>= 1).
        #[arg(allow_hyphen_values = true)]
        k: i64,

        /// Weight (>= 0), as an integer, fraction, or decimal.
        #[arg(allow_hyphen_values = true, value_parser = parse_rational)]
        mu: Rational,

        /// Print the search trace to stderr.
        #[arg(short, long)]
        debug: bool,
    },

    /// Prints optimal values for k = 2..=KMAX, one column per mu family.
    Table {
        /// Largest k (>= 1).
        #[arg(allow_hyphen_values = true)]
        kmax: i64,

        /// Output format: csv or tex.
        fmt: TableFormat,

        /// Show floats in CSV and only floats in TeX.
        #[arg(long)]
        use_float: bool,

        /// Mu families to tabulate (one, lee, capr, eku).
        #[arg(long, value_delimiter = ',', default_value = "lee,capr,eku")]
        labels: Vec<MuLabel>,

        /// Print the search trace to stderr.
        #[arg(short, long)]
        debug: bool,
    },
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Accepts `1 <= k <= config.max_k`.
fn checked_k(k: i64, config: &SolveConfig) -> Result<usize, HarmonicError> {
    let k = usize::try_from(k)
        .ok()
        .filter(|&k| k >= 1)
        .ok_or(HarmonicError::InvalidK { k })?;
    if k > config.max_k {
        return Err(HarmonicError::KTooLarge {
            k,
            max_k: config.max_k,
        });
    }
    Ok(k)
}

fn non_negative_mu(mu: Rational) -> Result<Rational, HarmonicError> {
    if is_negative(&mu) {
        return Err(HarmonicError::NegativeMu { mu: mu.to_string() });
    }
    Ok(mu)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Compute { k, mu, debug } => {
            init_tracing(debug);
            let config = SolveConfig::default().with_trace(debug);
            let k = checked_k(k, &config)?;
            let mu = non_negative_mu(mu)?;
            let best = IpRunner::run(k, &[Some(mu)], &config)?.best_scores();
            if let Some(Some(score)) = best.first() {
                println!("{} = {}", score, float_str(score));
            }
        }
        Command::Table {
            kmax,
            fmt,
            use_float,
            labels,
            debug,
        } => {
            init_tracing(debug);
            let config = SolveConfig::default().with_trace(debug);
            let kmax = checked_k(kmax, &config)?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            render_table(2..=kmax, &labels, fmt, use_float, &config, &mut out)?;
            out.flush()?;
        }
    }
    Ok(())
}

//! Impactor - Asteroid Impact Estimates
//!
//! Command-line front end for the impact estimator, the catalog proxy and
//! the catalog harvesting workflows.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use impactor::catalog::{self, CatalogClient, UpstreamResponse};
use impactor::config::Config;
use impactor::demo;
use impactor::impact::{ImpactInput, InvalidInput};
use impactor::logging;
use impactor::request::{self, ErrorResponse, EstimateRequest, EstimateResponse};

/// Exit status for rejected estimator input.
const EXIT_INVALID_INPUT: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "impactor",
    version,
    about = "Asteroid impact estimates and near-Earth-object catalog access"
)]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[arg(
        long,
        global = true,
        help = "Catalog API key (falls back to NASA_API_KEY)"
    )]
    api_key: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Catalog base URL (falls back to NEO_BASE_URL)"
    )]
    base_url: Option<String>,
    #[arg(
        long,
        global = true,
        help = "Upstream timeout in seconds (falls back to NEO_TIMEOUT_SECS, default 20)"
    )]
    timeout_secs: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate impact effects and deflection delta-v.
    Estimate(EstimateArgs),
    /// Browse the catalog and print the upstream body.
    Browse {
        #[arg(long, default_value = "0")]
        page: String,
        #[arg(long, default_value = "20")]
        size: String,
    },
    /// Look up one catalog object and print the upstream body.
    Lookup { id: String },
    /// Collect roughly COUNT objects sampled across the catalog.
    Sample {
        count: usize,
        #[arg(short, long, default_value = "output.json")]
        output: PathBuf,
    },
    /// Collect full records of objects in the close-approach feed.
    Approaches {
        #[arg(long, help = "Feed start date (YYYY-MM-DD), defaults to today")]
        start_date: Option<NaiveDate>,
        #[arg(short, long, default_value = "output.json")]
        output: PathBuf,
    },
    /// Print the demo impactor fixture.
    Demo,
}

#[derive(Args, Debug)]
struct EstimateArgs {
    #[arg(long, help = "JSON request body file, or - for stdin")]
    input: Option<PathBuf>,
    #[arg(long, allow_negative_numbers = true)]
    diameter_m: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    speed_kms: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    density: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    angle_deg: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    imp_mass_kg: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    imp_vel_kms: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    beta: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    tractor_mass_kg: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    stand_off_m: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    tug_days: Option<f64>,
}

impl EstimateArgs {
    fn read_body(&self) -> Result<String> {
        match &self.input {
            None => Ok(String::new()),
            Some(path) if path.as_os_str() == "-" => {
                let mut body = String::new();
                std::io::stdin()
                    .read_to_string(&mut body)
                    .context("failed to read request body from stdin")?;
                Ok(body)
            }
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read request body from {}", path.display())),
        }
    }

    /// Apply command-line flags on top of the decoded body.
    fn apply_overrides(&self, request: &mut EstimateRequest) -> Result<(), InvalidInput> {
        let overrides = [
            ("diameter_m", self.diameter_m, &mut request.diameter_m),
            ("speed_kms", self.speed_kms, &mut request.speed_kms),
            ("density", self.density, &mut request.density),
            ("angle_deg", self.angle_deg, &mut request.angle_deg),
            ("imp_mass_kg", self.imp_mass_kg, &mut request.imp_mass_kg),
            ("imp_vel_kms", self.imp_vel_kms, &mut request.imp_vel_kms),
            ("beta", self.beta, &mut request.beta),
            ("tractor_mass_kg", self.tractor_mass_kg, &mut request.tractor_mass_kg),
            ("stand_off_m", self.stand_off_m, &mut request.stand_off_m),
            ("tug_days", self.tug_days, &mut request.tug_days),
        ];
        for (field, value, slot) in overrides {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(InvalidInput::new(
                        field,
                        format!("expected a finite number, got {value}"),
                    ));
                }
                *slot = value;
            }
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup_logging(logging::level_for(cli.verbose));

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    match &cli.command {
        Commands::Estimate(args) => run_estimate(args, cli.json),
        Commands::Demo => {
            println!("{}", serde_json::to_string_pretty(&demo::impactor_2025())?);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Browse { page, size } => {
            let client = catalog_client(&cli)?;
            relay(client.browse(page, size)?)
        }
        Commands::Lookup { id } => {
            let client = catalog_client(&cli)?;
            relay(client.lookup(id)?)
        }
        Commands::Sample { count, output } => {
            let client = catalog_client(&cli)?;
            let progress = ProgressBar::new(0);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("[{bar:50}] {percent}% ({pos}/{len})")?
                    .progress_chars("=>-"),
            );
            let objects = catalog::sample_catalog(&client, *count, &progress)?;
            catalog::write_objects(output, &objects)?;
            eprintln!("Wrote {} objects to {}", objects.len(), output.display());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Approaches { start_date, output } => {
            let client = catalog_client(&cli)?;
            let start = start_date.unwrap_or_else(|| Local::now().date_naive());
            let objects = catalog::upcoming_approaches(&client, start)?;
            catalog::write_objects(output, &objects)?;
            eprintln!("Wrote {} objects to {}", objects.len(), output.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn catalog_client(cli: &Cli) -> Result<CatalogClient> {
    let config = Config::resolve(
        cli.api_key.clone(),
        cli.base_url.clone(),
        cli.timeout_secs.clone(),
    )?;
    Ok(CatalogClient::new(config)?)
}

/// Print the upstream body unchanged; non-success statuses fail the command.
fn relay(response: UpstreamResponse) -> Result<ExitCode> {
    println!("{}", response.body);
    if response.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        warn!(status = response.status, "catalog returned an error status");
        Ok(ExitCode::FAILURE)
    }
}

fn run_estimate(args: &EstimateArgs, json: bool) -> Result<ExitCode> {
    let body = args.read_body()?;
    let estimated = EstimateRequest::from_body(&body).and_then(|mut request| {
        args.apply_overrides(&mut request)?;
        let response = request::respond(&request)?;
        Ok((request, response))
    });

    let (request, response) = match estimated {
        Ok(estimated) => estimated,
        Err(err) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&ErrorResponse::from(&err))?);
            } else {
                eprintln!("error: {err}");
            }
            return Ok(ExitCode::from(EXIT_INVALID_INPUT));
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_estimate(&request.impact_input(), &response);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_estimate(input: &ImpactInput, response: &EstimateResponse) {
    let d = &response.derived;
    println!("Impact estimate");
    println!("  Mass:                {:.3e} kg", d.mass_kg);
    println!("  Velocity:            {:.0} m/s", d.velocity_mps);
    println!("  Kinetic energy:      {:.3e} J", d.energy_j);
    println!("  TNT equivalent:      {:.3e} t", d.tnt_tons);
    println!("  Crater diameter:     {:.0} m", d.crater_diameter_m);
    println!("  Seismic magnitude:   Mw {:.2}", d.seismic_mw);
    println!("  Tsunami height:      {:.2} m", d.tsunami_height_m);
    println!("Deflection");
    println!("  {}", input.kinetic_deflector().description());
    println!("    delta-v:           {:.3e} m/s", d.delta_v_kinetic_mps);
    println!("  {}", input.gravity_tractor().description());
    println!("    delta-v:           {:.3e} m/s", d.delta_v_tractor_mps);
    println!();
    println!("{}", response.disclaimer);
}

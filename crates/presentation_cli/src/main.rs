//! SkyCast command line interface
//!
//! Looks up current conditions and a five-day forecast for a city via
//! OpenWeatherMap and renders them as text cards plus an ASCII
//! temperature chart.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod chart;
mod render;

use std::sync::Arc;

use anyhow::Context;
use application::LookupService;
use clap::Parser;
use domain::value_objects::UnitSystem;
use infrastructure::{AppConfig, WeatherAdapter, init_telemetry};

const CHART_HEIGHT: usize = 8;

#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Weather lookup for your terminal")]
struct Cli {
    /// City to look up
    city: String,

    /// Unit system: metric (celsius) or imperial (fahrenheit)
    #[arg(short, long)]
    units: Option<UnitSystem>,

    /// Skip the temperature chart
    #[arg(long)]
    no_chart: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Latitude for coordinate-based lookup (requires --longitude)
    #[arg(long, requires = "longitude")]
    latitude: Option<f64>,

    /// Longitude for coordinate-based lookup (requires --latitude)
    #[arg(long, requires = "latitude")]
    longitude: Option<f64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_telemetry(cli.verbose);

    if let (Some(lat), Some(lon)) = (cli.latitude, cli.longitude) {
        tracing::debug!(lat, lon, "reverse geocoding is not wired up; coordinates ignored");
    }

    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate()?;
    let units = cli.units.unwrap_or(config.units);

    let adapter = WeatherAdapter::new(config.provider)?;
    let service = LookupService::new(Arc::new(adapter));

    match service.lookup(&cli.city, units).await {
        Ok(report) => {
            print!("{}", render::render_report(&report));
            if !cli.no_chart && report.daily.len() > 1 {
                let points: Vec<(String, f64)> = report
                    .daily
                    .iter()
                    .map(|day| (day.date.clone(), day.sample.temperature.value()))
                    .collect();
                println!("\n{}", chart::render_chart(&points, CHART_HEIGHT));
            }
            Ok(())
        }
        Err(err) if err.is_fetch_failure() => {
            tracing::warn!(error = %err, city = %cli.city, "lookup failed");
            eprintln!("{}", err.user_message());
            std::process::exit(1);
        }
        Err(err) => Err(err.into()),
    }
}

use chrono::Utc;
use clap::Parser;
use log::{info, LevelFilter};

use yearcal::astro::astro_events;
use yearcal::config::OutputArgs;
use yearcal::ephemeris::AnalyticEphemeris;
use yearcal::IcsCalendar;

/// Create a calendar of astronomical events
#[derive(Debug, Parser)]
#[command(name = "astro")]
#[command(about = "Create an astronomical event calendar", long_about = None)]
struct Cli {
    /// Calendar year
    #[arg(long, short = 'y', value_name = "YEAR")]
    year: i32,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();
    let settings = cli.output.settings()?;

    info!("Generating astronomical calendar for {}", cli.year);
    let events = astro_events(cli.year, &AnalyticEphemeris)?;

    let mut calendar = IcsCalendar::new(&settings, cli.year, Utc::now().naive_utc());
    calendar.add_section("astro", 3, &events);
    calendar.write_file(&settings.output_dir, "astro")?;
    Ok(())
}

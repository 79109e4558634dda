use chrono::{Datelike, Utc};
use clap::Parser;
use log::{info, warn, LevelFilter};

use yearcal::calendar::check_year;
use yearcal::church_year::{commemorations, lesser_festivals, sunday_labels, FIRST_YEAR};
use yearcal::config::OutputArgs;
use yearcal::IcsCalendar;

/// Create an ELCA liturgical calendar
#[derive(Debug, Parser)]
#[command(name = "elca")]
#[command(about = "Create an ELCA liturgical calendar", long_about = None)]
struct Cli {
    /// Calendar year [default: current year]
    #[arg(long, short = 'y', value_name = "YEAR")]
    year: Option<i32>,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();

    let year = cli.year.unwrap_or_else(|| Utc::now().year());
    if let Err(err) = check_year(year, FIRST_YEAR) {
        warn!("{}, nothing to do", err);
        return Ok(());
    }
    let settings = cli.output.settings()?;

    info!("Generating liturgical calendar for {}", year);
    let sundays = sunday_labels(year)?.events();
    let lesser = lesser_festivals(year)?;
    let commemorations = commemorations(year)?;

    let mut calendar = IcsCalendar::new(&settings, year, Utc::now().naive_utc());
    calendar.add_section("elcasundays", 3, &sundays);
    calendar.add_section("elcalesser", 3, &lesser);
    calendar.add_section("elcacommemorations", 3, &commemorations);
    calendar.write_file(&settings.output_dir, "elca")?;
    Ok(())
}

use chrono::Utc;
use clap::Parser;
use log::{error, info, LevelFilter};

use yearcal::calendar::check_year;
use yearcal::config::OutputArgs;
use yearcal::us_holidays::{UsHolidays, FIRST_YEAR};
use yearcal::IcsCalendar;

/// Create a calendar of US holidays
#[derive(Debug, Parser)]
#[command(name = "holidays")]
#[command(about = "Create a calendar of US federal holidays and observances", long_about = None)]
struct Cli {
    /// Calendar year
    #[arg(long, short = 'y', value_name = "YEAR")]
    year: i32,

    /// Include weeks recognized by presidential proclamation
    #[arg(long, short = 'w')]
    weeks: bool,

    /// Include days recognized by presidential proclamation and unofficial observances
    #[arg(long, short = 'd')]
    days: bool,

    #[command(flatten)]
    output: OutputArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();
    let cli = Cli::parse();

    if let Err(err) = check_year(cli.year, FIRST_YEAR) {
        error!("{}", err);
        std::process::exit(1);
    }
    let settings = cli.output.settings()?;

    info!("Generating holiday calendar for {}", cli.year);
    if cli.weeks {
        info!("Including proclamation weeks");
    } else {
        info!("NOT including proclamation weeks");
    }
    if cli.days {
        info!("Including proclamation days");
    } else {
        info!("NOT including proclamation days");
    }
    let holidays = UsHolidays::new(cli.year)?;

    let mut calendar = IcsCalendar::new(&settings, cli.year, Utc::now().naive_utc());
    if cli.weeks {
        calendar.add_section("usweeks", 2, &holidays.weeks);
    }
    calendar.add_section("usfederal", 2, &holidays.federal);
    if cli.days {
        calendar.add_section("usdays", 2, &holidays.days);
    }
    calendar.write_file(&settings.output_dir, "holidays")?;
    Ok(())
}

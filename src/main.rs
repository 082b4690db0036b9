use clap::{Parser, ValueEnum};
use ifc_date::{GregorianDate, IfcDate, MAX_OFFSET_MINUTES, today_ifc};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Print a date in the International Fixed Calendar
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Timezone shift from UTC in minutes, applied to the clock reading
    #[arg(
        short,
        long,
        default_value_t = 0,
        allow_negative_numbers = true,
        value_parser = clap::value_parser!(i32).range(-i64::from(MAX_OFFSET_MINUTES)..=i64::from(MAX_OFFSET_MINUTES)),
    )]
    offset: i32,

    /// Convert this Gregorian date (YYYY-MM-DD) instead of today
    #[arg(short, long)]
    date: Option<GregorianDate>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Sentence)]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Esperanto sentence
    Sentence,
    /// Year, month and day as numbers
    Numeric,
    /// Year, month name and day
    Strings,
    /// JSON record
    Json,
}

fn render(date: &IfcDate, format: Format) -> Result<String, serde_json::Error> {
    Ok(match format {
        Format::Sentence => date.describe(),
        Format::Numeric => {
            let (year, month, day) = date.to_numeric();
            format!("{year} {month} {day}")
        }
        Format::Strings => {
            let (year, month, day) = date.to_strings();
            format!("{year} {month} {day}")
        }
        Format::Json => serde_json::to_string(&date.to_record())?,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let date = match args.date {
        Some(gregorian) => {
            debug!(%gregorian, "converting given date");
            IfcDate::from_gregorian(gregorian)
        }
        None => today_ifc(args.offset)?,
    };

    println!("{}", render(&date, args.format)?);
    Ok(())
}

use std::io;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Parser;

use create_release_notes::config::{self, Config};
use create_release_notes::error::ReleaseNotesError;
use create_release_notes::notes::{self, NotesRequest};
use create_release_notes::version::Version;

#[derive(clap::Parser)]
#[command(
    name = "create-release-notes",
    about = "Generate a versioned release notes document from the changelog"
)]
struct Args {
    #[arg(short = 'v', long, help = "The version to create the release notes for (X.Y.Z)")]
    version: String,

    #[arg(short, long, help = "The minimum required version to upgrade to this version")]
    minimum: String,

    #[arg(short, long, help = "Release date (YYYY/MM/DD). Default is today.")]
    date: Option<String>,

    #[arg(
        short,
        long,
        default_value = config::DEFAULT_CHANGELOG,
        help = "The changelogs file from the repository root"
    )]
    file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    match run(args) {
        Err(err) if is_expected_termination(&err) => Ok(()),
        other => other,
    }
}

fn run(args: Args) -> Result<()> {
    // Both versions are validated before any file is touched.
    let version = Version::parse(&args.version)?;
    let minimum = Version::parse(&args.minimum)?;
    let release_date = resolve_release_date(args.date.as_deref())?;

    let config = Config::discover()?;
    let request = NotesRequest {
        version,
        minimum,
        release_date,
        changelog: args.file,
    };

    let stdout = io::stdout();
    notes::create_release_notes(&request, &config, &mut stdout.lock())?;
    Ok(())
}

fn resolve_release_date(date: Option<&str>) -> Result<NaiveDate, ReleaseNotesError> {
    match date {
        Some(value) => NaiveDate::parse_from_str(value, config::DATE_FORMAT).map_err(|_| {
            ReleaseNotesError::date(format!("'{}' does not match YYYY/MM/DD", value))
        }),
        None => Ok(Local::now().date_naive()),
    }
}

/// A closed output pipe or an interrupted read/write ends the run quietly;
/// every other failure propagates with the stock diagnostic and a non-zero
/// exit.
fn is_expected_termination(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause.downcast_ref::<io::Error>().is_some_and(|io_err| {
            matches!(
                io_err.kind(),
                io::ErrorKind::BrokenPipe | io::ErrorKind::Interrupted
            )
        })
    })
}

extern crate barren_land as land;
extern crate clap;
extern crate failure;
extern crate itertools;
extern crate tracing;
extern crate tracing_subscriber;

use clap::Parser;
use failure::Error;
use itertools::Itertools;
use land::grid::Grid;
use land::input::{self, InputError};
use land::scan::analyze;
use std::io::{self, Write};
use std::process::exit;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Print the areas of fertile land, smallest first, that remain once the
/// given rectangles of barren land are removed from the field.
#[derive(Parser)]
#[command(name = "barren-land")]
struct Args {
    /// Barren rectangles, four integers each: x1 y1 x2 y2, lower-left corner
    /// first. Braces, quotes and commas between them are ignored.
    #[arg(required = true, value_name = "BARREN_LAND")]
    barren_land: Vec<String>,

    /// Width of the field
    #[arg(long, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Height of the field
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Draw the field on stderr before measuring it
    #[arg(long)]
    show_map: bool,

    /// Log each rectangle and area found
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let fallback = if verbose { "barren_land=debug" } else { "barren_land=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Format `areas` as the program's single line of output.
fn render(areas: &[usize]) -> String {
    format!("{}\n", areas.iter().join(" "))
}

/// Rejected input exits with status 2; anything else that goes wrong, 1.
fn exit_status(err: &Error) -> i32 {
    if err.downcast_ref::<InputError>().is_some() {
        2
    } else {
        1
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let width = args.width as usize;
    let height = args.height as usize;
    input::check_size(width, height)?;

    let rects = input::parse_rects(&args.barren_land[..])?;
    input::validate(&rects, width, height)?;

    if args.show_map {
        eprint!("{}", Grid::with_barren(width, height, &rects));
    }

    let areas = analyze(width, height, &rects);
    info!(rects = rects.len(), areas = areas.len(), "done");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    out.write_all(render(&areas).as_bytes())?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        exit(exit_status(&err));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(render(&[116800, 116800]), "116800 116800\n");
        assert_eq!(render(&[22816, 192608]), "22816 192608\n");
        assert_eq!(render(&[0]), "0\n");
    }

    #[test]
    fn test_exit_status() {
        let inverted = Error::from(InputError::Inverted {
            x1: 10,
            y1: 0,
            x2: 9,
            y2: 0,
        });
        assert_eq!(exit_status(&inverted), 2);
        assert_eq!(exit_status(&Error::from(InputError::NotNumeric)), 2);

        let broken_pipe = Error::from(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        assert_eq!(exit_status(&broken_pipe), 1);
    }

    #[test]
    fn test_run_rejects_input() {
        let args = Args::parse_from(vec!["barren-land", "10 0 9 0"]);
        let err = run(&args).unwrap_err();
        assert_eq!(exit_status(&err), 2);
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::Inverted {
                x1: 10,
                y1: 0,
                x2: 9,
                y2: 0
            })
        );

        let args = Args::parse_from(vec!["barren-land", "1 2 3"]);
        assert_eq!(exit_status(&run(&args).unwrap_err()), 2);

        let args = Args::parse_from(vec!["barren-land", "--width", "3000000000", "--height", "3000000000", "{}"]);
        assert_eq!(exit_status(&run(&args).unwrap_err()), 2);
    }

    #[test]
    fn test_args() {
        let args = Args::parse_from(vec!["barren-land", "{\"0 292 399 307\"}"]);
        assert_eq!((args.width, args.height), (400, 600));
        assert!(!args.show_map);
        assert_eq!(args.barren_land, vec!["{\"0 292 399 307\"}".to_string()]);

        let args = Args::parse_from(vec!["barren-land", "--width", "5", "--height", "4", "--show-map", "1", "1", "2", "2"]);
        assert_eq!((args.width, args.height), (5, 4));
        assert!(args.show_map);
        assert_eq!(args.barren_land.len(), 4);

        assert!(Args::try_parse_from(vec!["barren-land", "--width", "0", "1 1 2 2"]).is_err());
        assert!(Args::try_parse_from(vec!["barren-land"]).is_err());
    }
}

//! Command-line image search.
//!
//! Results go to stdout as JSON (or plain URLs); logs go to stderr and are
//! controlled with `RUST_LOG`.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use rs_imagesearch::{encoding, extract_report, Error, Filter, ImageSearch, Options};

#[derive(Parser)]
#[command(name = "imagesearch")]
#[command(about = "Search images and extract result metadata")]
#[command(version)]
struct Cli {
    /// Client identifier sent with requests
    #[arg(long, global = true)]
    user_agent: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and print results as JSON
    Search {
        query: String,

        /// Maximum number of results (0 = all)
        #[arg(short = 'n', long, default_value_t = 0)]
        limit: usize,

        /// Filter as category:option, e.g. color:red or license:creative-commons
        #[arg(short, long = "filter")]
        filters: Vec<Filter>,

        /// Print only image URLs, one per line
        #[arg(long)]
        urls: bool,
    },

    /// Search and download images into a directory
    Download {
        query: String,

        /// Number of images to download (0 = all)
        #[arg(short = 'n', long)]
        limit: usize,

        /// Target directory
        #[arg(short, long, default_value = ".")]
        out: PathBuf,

        /// Filter as category:option
        #[arg(short, long = "filter")]
        filters: Vec<Filter>,
    },

    /// Extract results from a saved page (stdin when no file is given)
    Extract {
        file: Option<PathBuf>,

        /// Maximum number of results (0 = all)
        #[arg(short = 'n', long, default_value_t = 0)]
        limit: usize,
    },
}

fn options(cli: &Cli) -> Options {
    let mut options = Options {
        timeout: Duration::from_secs(cli.timeout),
        ..Options::default()
    };
    if let Some(user_agent) = &cli.user_agent {
        options.user_agent.clone_from(user_agent);
    }
    options
}

/// Saved pages are decoded the same way fetched pages are, minus the header.
fn read_page(file: Option<&PathBuf>) -> Result<String, Error> {
    let bytes = match file {
        Some(path) => fs::read(path)?,
        None => {
            let mut bytes = Vec::new();
            io::stdin().read_to_end(&mut bytes)?;
            bytes
        }
    };
    Ok(encoding::transcode_to_utf8(&bytes, None))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    println!("{json}");
    Ok(())
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = options(cli);

    match &cli.command {
        Commands::Search {
            query,
            limit,
            filters,
            urls,
        } => {
            let search = ImageSearch::new(options)?;
            if *urls {
                for url in search.urls(query, *limit, filters)? {
                    println!("{url}");
                }
            } else {
                print_json(&search.images(query, *limit, filters)?)?;
            }
        }
        Commands::Download {
            query,
            limit,
            out,
            filters,
        } => {
            let search = ImageSearch::new(options)?;
            let report = search.download(query, *limit, out, filters)?;
            for path in &report.paths {
                println!("{}", path.display());
            }
            if report.missing > 0 {
                eprintln!(
                    "{} of {} requested images could not be downloaded",
                    report.missing,
                    report.paths.len() + report.missing
                );
            }
        }
        Commands::Extract { file, limit } => {
            let page = read_page(file.as_ref())?;
            let extraction = extract_report(&page, *limit, &options)?;
            if extraction.empty_slots + extraction.malformed > 0 {
                eprintln!(
                    "{} candidates: {} empty, {} malformed",
                    extraction.candidates, extraction.empty_slots, extraction.malformed
                );
            }

            print_json(&extraction.records)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_format_error() => {
            eprintln!("The results page layout was not recognised; upstream may have changed.");
            eprintln!("{e}");
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn saved_page_honours_meta_charset() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("page.html");
        fs::write(&path, b"<meta charset=\"windows-1252\"><p>Caf\xE9</p>").expect("write");

        let page = read_page(Some(&path)).expect("read");
        assert!(page.contains("Caf\u{e9}"));
    }

    #[test]
    fn output_serialization_failure_is_not_a_decode_error() {
        let mut unserializable = BTreeMap::new();
        unserializable.insert(vec![1u8], 1);

        let err = print_json(&unserializable).expect_err("non-string keys");
        assert!(matches!(err, Error::IoError(_)));
        assert!(!err.to_string().contains("Embedded data"));
    }
}

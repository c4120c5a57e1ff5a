//! mtinfo
//!
//! Prints the summary of every path given on the command line.
//! - Files starting with the `ID` signature get the audio summary (tags, duration)
//! - Everything else gets the plain file summary
//!
//! Env:
//! - `MTINFO_LOG`: log level for diagnostics on stderr (default `warn`)
//! - `MTINFO_STRICT`: when truthy, a path that fails to read is reported and skipped

use std::path::PathBuf;
use std::process::ExitCode;

use log::error;
use mtinfo::{AudioFileInfo, FileInfo, InfoOptions, is_valid_mp3, logging};

fn main() -> ExitCode {
    if let Err(e) = logging::init() {
        eprintln!("logger init failed: {e}");
    }

    let paths: Vec<PathBuf> = std::env::args_os().skip(1).map(PathBuf::from).collect();
    if paths.is_empty() {
        eprintln!("usage: mtinfo <path>...");
        return ExitCode::from(2);
    }

    let options = InfoOptions::from_env();
    let mut failures = 0usize;

    for (i, path) in paths.into_iter().enumerate() {
        if i > 0 {
            println!();
        }

        let summary = if is_valid_mp3(&path) {
            AudioFileInfo::with_options(path, &options).map(|info| info.to_string())
        } else {
            FileInfo::with_options(path, &options).map(|info| info.to_string())
        };

        match summary {
            Ok(s) => print!("{s}"),
            Err(e) => {
                error!("{e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

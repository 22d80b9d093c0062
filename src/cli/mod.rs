//! # CLI Module
//!
//! This module is the interactive layer of Datify. It asks the user what to
//! look for, drives the Spotify query client and the normalizer through one
//! session, prints the numbered result list and hands the matching chart to
//! the renderer.
//!
//! ## Session Flow
//!
//! ```text
//! Start → Mode (A/G) → Query → Token → [Artist lookup] → Result type → Fetch → Display → End
//! ```
//!
//! - **Mode**: `A` searches by artist, `G` by genre tag. Any other letter ends
//!   the session with an invalid-input message before any request is sent.
//! - **Artist lookup** (mode `A` only): the query is resolved to the single
//!   best-matching artist; no match ends the session with a warning.
//! - **Result type**: `songs`, `albums` or `related` for artists, `songs`,
//!   `albums` or `artists` for genres. Unknown types are reported as invalid
//!   input instead of being ignored.
//! - **Display**: a 1-indexed list, then a bar chart (genre albums are listed
//!   without a chart).
//!
//! A session runs once and the program ends; there is no loop back to the
//! start.
//!
//! ## Answers
//!
//! Every question can be answered up front on the command line (`--mode`,
//! `--query`, `--view`). Questions without a preset answer are asked in the terminal with `dialoguer`.
//!
//! ## Error Handling
//!
//! - Searches that match nothing are warnings, the program exits normally
//! - Invalid input, authentication failures, empty result lists and request
//!   failures are printed as errors and the program exits with status 1
//! - A chart that cannot be shown is a warning; the list was already printed

mod prompt;
mod session;

pub use prompt::{ConsolePrompt, Field, Prompt};
pub use session::{
    ArtistView, GenreView, Mode, Outcome, Report, artist_report, genre_report, run,
};

use crate::{
    chart::{self, ChartTarget},
    config::{Credentials, Endpoints},
    error, info, warning,
};

/// Runs one interactive session and prints its result.
///
/// Credentials and endpoints are read from the environment. Fatal errors
/// terminate the program with exit code 1.
pub async fn explore(mut prompt: ConsolePrompt, target: ChartTarget) {
    let credentials = match Credentials::from_env() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    match run(&mut prompt, Endpoints::from_env(), &credentials).await {
        Ok(Outcome::Report(report)) => {
            print_report(&report);
            if let Some(bar_chart) = &report.chart {
                if let Err(e) = chart::show(bar_chart, target).await {
                    warning!("{}", e);
                }
            }
        }
        Ok(Outcome::NotFound(message)) => warning!("{}", message),
        Err(e) => error!("{}", e),
    }
}

/// Prints the heading and the numbered lines of a report.
pub fn print_report(report: &Report) {
    println!();
    info!("{}", report.heading);
    for line in &report.lines {
        println!("{line}");
    }
}

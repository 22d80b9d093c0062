//! Datify library
//!
//! This library explores the Spotify catalog from the command line. It obtains
//! an app token with the client-credentials grant, queries artists, top songs,
//! albums, related artists and genre rankings, reshapes the answers into flat
//! records and renders them as bar charts.
//!
//! # Modules
//!
//! - `chart` - Bar chart rendering for the terminal and the browser
//! - `cli` - Interactive session driver
//! - `config` - Configuration management and environment variables
//! - `error` - Error type shared by all modules
//! - `normalize` - Reshaping of API responses into display records
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//!
//! # Example
//!
//! ```
//! use datify::{chart::ChartTarget, cli, config};
//!
//! #[tokio::main]
//! async fn main() {
//!     config::load_env().await.ok();
//!     cli::explore(cli::ConsolePrompt::new(), ChartTarget::Terminal).await;
//! }
//! ```

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod normalize;
pub mod spotify;
pub mod types;

/// Prints an informational line with a blue `o` marker.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Here are the top songs by {}:", artist.name);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success line with a green checkmark.
///
/// Accepts the same arguments as `println!`.
///
/// # Example
///
/// ```
/// success!("Chart opened in your browser ({})", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error line with a red `!` marker to stderr and exits the program.
///
/// The process terminates with exit code 1 right after the message, so the
/// macro can be used wherever a value is expected, e.g. in a `match` arm. Only
/// use it for fatal errors at the edge of the program; library code returns
/// [`error::DatifyError`] instead.
///
/// # Example
///
/// ```
/// let credentials = match Credentials::from_env() {
///     Ok(c) => c,
///     Err(e) => error!("{}", e),
/// };
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning line with a yellow `!` marker.
///
/// Used for outcomes the user should notice that do not stop the program,
/// such as a search without matches.
///
/// # Example
///
/// ```
/// warning!("No artists with this name exists...");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

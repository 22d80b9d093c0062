use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use datify::{
    chart::ChartTarget,
    cli::{self, ConsolePrompt, Field},
    config, error,
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
  args_conflicts_with_subcommands = true // disallow mixing session flags with `completions`
)]
struct Cli {
    /// Search by artist (A) or genre (G); asked interactively when omitted
    #[clap(long)]
    mode: Option<String>,

    /// Artist name or genre to search for; asked interactively when omitted
    #[clap(long)]
    query: Option<String>,

    /// Result type: songs, albums, related (artist) or songs, albums, artists (genre)
    #[clap(long)]
    view: Option<String>,

    /// Where to show the chart
    #[clap(long, value_enum, default_value_t = ChartTarget::Terminal)]
    chart: ChartTarget,

    #[clap(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Some(Command::Completions(opt)) = cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let prompt = ConsolePrompt::new()
        .preset(Field::Mode, cli.mode)
        .preset(Field::Query, cli.query)
        .preset(Field::View, cli.view);

    cli::explore(prompt, cli.chart).await;
}

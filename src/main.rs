use clap::{Parser, Subcommand};
use relgraph::commands;
use relgraph::core::error::{GraphError, print_error};
use std::path::PathBuf;

/// Build deterministic release job graphs for localized builds
#[derive(Parser)]
#[command(name = "relgraph")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(styles = get_styles())]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build the job graph from a release config
  Build {
    /// Path to the release config (TOML)
    #[arg(long)]
    config: PathBuf,
    /// Restrict the graph to one configured platform
    #[arg(long)]
    platform: Option<String>,
    /// Output the graph in JSON format
    #[arg(long)]
    json: bool,
    /// Output the graph in Graphviz DOT format
    #[arg(long, conflicts_with = "json")]
    dot: bool,
  },

  /// Show a single job by its constructed name
  Show {
    /// Name of the job to show
    job_name: String,
    /// Path to the release config (TOML)
    #[arg(long)]
    config: PathBuf,
    /// Output the job in JSON format
    #[arg(long)]
    json: bool,
  },

  /// Validate a release config without printing the graph
  Validate {
    /// Path to the release config (TOML)
    #[arg(long)]
    config: PathBuf,
  },
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let result = match cli.command {
    Commands::Build { config, platform, json, dot } => {
      commands::run_build(&config, platform.as_deref(), json, dot)
    }
    Commands::Show { job_name, config, json } => commands::run_show(&config, &job_name, json),
    Commands::Validate { config } => commands::run_validate(&config),
  };

  if let Err(e) = result {
    handle_error(e);
  }
}

fn handle_error(error: GraphError) -> ! {
  print_error(&error);
  std::process::exit(error.exit_code().as_i32());
}

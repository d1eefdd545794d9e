mod input;
mod render;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args, Parser, Subcommand};
use planmatch::{PlanMatcher, RuleBreakdown};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use render::Palette;

#[derive(Debug, Parser)]
#[command(
    name = "planmatch",
    version,
    about = "Rank training plans against questionnaire answers."
)]
struct Cli {
    /// Raise the default log level (-v debug, -vv trace). RUST_LOG directives still apply; without it the default is warn.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Disable colored text output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Show the best plan and a few runners-up.
    Rank(RankArgs),
    /// Show the per-rule breakdown for every plan, best first.
    Explain(ExplainArgs),
}

#[derive(Debug, Args)]
struct InputArgs {
    /// Plan catalog (JSON array of plan summaries).
    #[arg(long)]
    plans: PathBuf,

    /// Questionnaire answers (.json or .toml).
    #[arg(long)]
    answers: PathBuf,

    /// Matcher configuration (.toml, .yaml or .yml). Default: ./planmatch.toml if present.
    #[arg(long, env = "PLANMATCH_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct RankArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Number of runners-up shown after the top plan (text output).
    #[arg(long, default_value_t = 3)]
    runners_up: usize,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Args)]
struct ExplainArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format (text, json).
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        error!("{:?}", e);
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let palette = if cli.no_color {
        Palette::PLAIN
    } else {
        Palette::detect()
    };
    match cli.cmd {
        Command::Rank(args) => cmd_rank(args, palette),
        Command::Explain(args) => cmd_explain(args, palette),
    }
}

fn init_tracing(verbose: u8) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// Builds the filter from `RUST_LOG` (or `warn`), then lifts the default level for `-v`.
fn log_filter(verbose: u8, env: Option<&str>) -> EnvFilter {
    let filter = env
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    match verbose {
        0 => filter,
        1 => filter.add_directive(LevelFilter::DEBUG.into()),
        _ => filter.add_directive(LevelFilter::TRACE.into()),
    }
}

fn cmd_rank(args: RankArgs, palette: Palette) -> anyhow::Result<()> {
    let loaded = input::load(&args.input)?;
    let matcher = PlanMatcher::from_config(&loaded.config);
    let ranking = matcher.rank(&loaded.plans, &loaded.answers);

    info!(
        event = "rank_done",
        plans = ranking.len(),
        top = ?ranking.top().map(|s| s.plan.id.as_str()),
    );

    match args.format {
        OutputFormat::Text => {
            print!(
                "{}",
                render::ranking_text(&ranking, args.runners_up, palette)
            );
        }
        OutputFormat::Json => {
            let view = render::RankingView::new(&ranking);
            render::write_json(&view)?;
        }
    }
    Ok(())
}

fn cmd_explain(args: ExplainArgs, palette: Palette) -> anyhow::Result<()> {
    let loaded = input::load(&args.input)?;
    let matcher = PlanMatcher::from_config(&loaded.config);
    let explanations = matcher.explain_all(&loaded.plans, &loaded.answers);
    let breakdown = RuleBreakdown::summarize(&explanations);

    info!(event = "explain_done", plans = explanations.len());

    match args.format {
        OutputFormat::Text => {
            print!(
                "{}",
                render::explanations_text(&explanations, &breakdown, palette)
            );
        }
        OutputFormat::Json => {
            let view = render::ExplainView::new(&explanations, &breakdown);
            render::write_json(&view)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_filter_defaults_to_warn() {
        assert_eq!(log_filter(0, None).to_string(), "warn");
        assert_eq!(log_filter(0, Some("  ")).to_string(), "warn");
        assert_eq!(log_filter(0, Some("info")).to_string(), "info");
    }

    #[test]
    fn test_verbose_keeps_env_directives() {
        let filter = log_filter(1, Some("planmatch_scoring=trace")).to_string();
        assert!(filter.contains("planmatch_scoring=trace"), "{filter}");
        assert!(filter.contains("debug"), "{filter}");

        let filter = log_filter(2, Some("planmatch_cli=info")).to_string();
        assert!(filter.contains("planmatch_cli=info"), "{filter}");
        assert!(filter.contains("trace"), "{filter}");
    }
}

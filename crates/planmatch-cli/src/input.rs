//! Input file loading for the planmatch binary.
//!
//! Reads the plan catalog, the questionnaire answers, and the matcher
//! configuration. When `--config` is absent, `planmatch.toml` in the current
//! directory is used if present, stock settings otherwise.

use std::fs;
use std::path::Path;

use anyhow::Context;
use planmatch::{Answers, MatcherConfig, PlanSummary};
use tracing::debug;

use crate::InputArgs;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "planmatch.toml";

/// Everything a subcommand needs to run the matcher.
#[derive(Debug)]
pub struct Loaded {
    pub plans: Vec<PlanSummary>,
    pub answers: Answers,
    pub config: MatcherConfig,
}

pub fn load(args: &InputArgs) -> anyhow::Result<Loaded> {
    let plans = load_plans(&args.plans)?;
    let answers = load_answers(&args.answers)?;
    let config = match &args.config {
        Some(path) => MatcherConfig::from_file(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => discover_config()?,
    };
    Ok(Loaded {
        plans,
        answers,
        config,
    })
}

pub fn load_plans(path: &Path) -> anyhow::Result<Vec<PlanSummary>> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read plan catalog {}", path.display()))?;
    let plans: Vec<PlanSummary> = serde_json::from_str(&text)
        .with_context(|| format!("parse plan catalog {}", path.display()))?;
    debug!(event = "catalog_loaded", path = %path.display(), plans = plans.len());
    Ok(plans)
}

pub fn load_answers(path: &Path) -> anyhow::Result<Answers> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read answers {}", path.display()))?;
    let answers: Answers = if has_extension(path, "toml") {
        toml::from_str(&text).with_context(|| format!("parse answers {}", path.display()))?
    } else {
        serde_json::from_str(&text).with_context(|| format!("parse answers {}", path.display()))?
    };
    debug!(
        event = "answers_loaded",
        path = %path.display(),
        goal = %answers.goal,
        experience = %answers.experience,
    );
    Ok(answers)
}

// A missing default file means stock settings; a broken one is still an error.
fn discover_config() -> anyhow::Result<MatcherConfig> {
    let path = Path::new(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!(event = "config_default", "no {} found, using defaults", CONFIG_FILE_NAME);
        return Ok(MatcherConfig::default());
    }
    MatcherConfig::load(path).with_context(|| format!("load config {}", path.display()))
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

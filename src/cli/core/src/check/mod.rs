/* src/cli/core/src/check/mod.rs */

// Project-wide check: discover modules under `app_dir`, parse them with the
// configured parser, validate on a worker pool, report in path order.

mod discover;
mod report;


use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use route_contract::{Diagnostic, Module};
use tokio::task::JoinSet;

pub use report::{OutputFormat, report_diagnostic};

use crate::config::ContractConfig;
use crate::manifest::RouteClassifier;
use crate::shell::run_parser;
use crate::ui::{self, DIM, RESET};

/// A discovered module that needs parsing.
struct Candidate {
  /// Relative to the project root; handed to the parser and shown in diagnostics.
  display_path: PathBuf,
  source: String,
  is_route_module: bool,
}

#[derive(Debug, Default)]
pub struct CheckSummary {
  pub discovered: usize,
  pub skipped: usize,
  pub checked: usize,
  pub diagnostics: Vec<Diagnostic>,
}

impl CheckSummary {
  pub fn has_errors(&self) -> bool {
    !self.diagnostics.is_empty()
  }
}

pub async fn run_check(
  config: &ContractConfig,
  base_dir: &Path,
  format: OutputFormat,
) -> Result<CheckSummary> {
  let pretty = format == OutputFormat::Pretty;
  let app_dir = base_dir.join(&config.routes.app_dir);
  if !app_dir.is_dir() {
    bail!("routes.app_dir {} is not a directory", app_dir.display());
  }

  if pretty {
    ui::banner("check", &config.project.name);
    ui::step(1, 3, "Discovering modules");
  }
  let classifier = RouteClassifier::from_config(&config.routes, base_dir)?;
  let files = discover::discover_modules(&app_dir, &config.check.extensions)?;

  let mut summary = CheckSummary { discovered: files.len(), ..CheckSummary::default() };
  let mut candidates = Vec::with_capacity(files.len());
  for path in files {
    let rel = path.strip_prefix(&app_dir).unwrap_or(&path);
    let is_route_module = classifier.is_route_module(rel);
    let source = std::fs::read_to_string(&path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    if config.check.prefilter
      && !is_route_module
      && !route_contract::may_reference_define_route(&source)
    {
      summary.skipped += 1;
      continue;
    }
    let display_path = path.strip_prefix(base_dir).unwrap_or(&path).to_path_buf();
    candidates.push(Candidate { display_path, source, is_route_module });
  }
  if pretty {
    ui::detail(&format!(
      "{} found, {} skipped by prefilter",
      ui::plural(summary.discovered, "module"),
      summary.skipped
    ));
    if candidates.is_empty() {
      ui::warn(&format!("no modules to check under {}", app_dir.display()));
    }
    ui::step(2, 3, &format!("Validating {}", ui::plural(candidates.len(), "module")));
    ui::detail(&format!("{DIM}{}{RESET}", config.parser.command));
  }

  summary.checked = candidates.len();
  let outcomes = validate_all(config, base_dir, candidates).await?;
  summary.diagnostics = outcomes.into_iter().flatten().collect();

  if pretty {
    ui::step(3, 3, "Reporting");
  }
  for diagnostic in &summary.diagnostics {
    report_diagnostic(diagnostic, format)?;
  }
  if pretty {
    ui::blank();
    if summary.has_errors() {
      ui::fail(&format!(
        "{} in {}",
        ui::plural(summary.diagnostics.len(), "violation"),
        ui::plural(summary.checked, "module")
      ));
    } else {
      ui::ok(&format!("{} passed", ui::plural(summary.checked, "module")));
    }
    ui::blank();
  }
  Ok(summary)
}

/// Parse and validate candidates as blocking tasks, at most `check.jobs`
/// in flight. Results come back in candidate order; the first error by
/// that order wins.
async fn validate_all(
  config: &ContractConfig,
  base_dir: &Path,
  candidates: Vec<Candidate>,
) -> Result<Vec<Option<Diagnostic>>> {
  let workers = config.worker_count();
  let command: Arc<str> = Arc::from(config.parser.command.as_str());
  let base_dir: Arc<Path> = Arc::from(base_dir);
  let mut slots: Vec<Option<Result<Option<Diagnostic>>>> =
    (0..candidates.len()).map(|_| None).collect();
  let mut queue = candidates.into_iter().enumerate();
  let mut join_set = JoinSet::new();

  loop {
    while join_set.len() < workers {
      let Some((index, candidate)) = queue.next() else { break };
      let command = Arc::clone(&command);
      let base_dir = Arc::clone(&base_dir);
      join_set
        .spawn_blocking(move || (index, validate_candidate(&command, &base_dir, &candidate)));
    }
    let Some(joined) = join_set.join_next().await else { break };
    let (index, outcome) = joined.context("validation task panicked")?;
    slots[index] = Some(outcome);
  }

  slots.into_iter().flatten().collect()
}

fn validate_candidate(
  command: &str,
  base_dir: &Path,
  candidate: &Candidate,
) -> Result<Option<Diagnostic>> {
  let json = run_parser(base_dir, command, &candidate.display_path)?;
  let program = route_contract::parse_program_json(&json)
    .with_context(|| format!("failed to read AST for {}", candidate.display_path.display()))?;
  let module = Module {
    file_path: &candidate.display_path,
    source_text: &candidate.source,
    program: &program,
    is_route_module: candidate.is_route_module,
  };
  Ok(route_contract::check(&module))
}

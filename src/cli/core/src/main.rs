/* src/cli/core/src/main.rs */

mod check;
mod config;
mod manifest;
mod shell;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use check::OutputFormat;
use config::{ContractConfig, find_contract_config, load_contract_config};

#[derive(Parser)]
#[command(name = "route-contract", about = "Check the defineRoute contract of route modules")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Check every module under the configured app directory
  Check {
    /// Path to route-contract.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
  },
  /// Check one module whose AST was produced elsewhere
  File {
    /// Module source file
    source: PathBuf,
    /// Babel-compatible JSON AST of SOURCE
    #[arg(long)]
    ast: PathBuf,
    /// Treat SOURCE as a route module
    #[arg(long)]
    route: bool,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Pretty)]
    format: OutputFormat,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, ContractConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_contract_config(&cwd)?
    }
  };
  let config = load_contract_config(&path)?;
  Ok((path, config))
}

fn check_file(source: &Path, ast: &Path, route: bool, format: OutputFormat) -> Result<bool> {
  let source_text = std::fs::read_to_string(source)
    .with_context(|| format!("failed to read {}", source.display()))?;
  let json =
    std::fs::read_to_string(ast).with_context(|| format!("failed to read {}", ast.display()))?;
  let program = route_contract::parse_program_json(&json)
    .with_context(|| format!("failed to read AST {}", ast.display()))?;
  let module = route_contract::Module {
    file_path: source,
    source_text: &source_text,
    program: &program,
    is_route_module: route,
  };
  match route_contract::check(&module) {
    Some(diagnostic) => {
      check::report_diagnostic(&diagnostic, format)?;
      Ok(false)
    }
    None => {
      if format == OutputFormat::Pretty {
        ui::ok(&format!("{} passed", source.display()));
      }
      Ok(true)
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let passed = match cli.command {
    Command::Check { config, format } => {
      let (config_path, contract_config) = resolve_config(config)?;
      let base_dir =
        config_path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or(Path::new("."));
      let summary = check::run_check(&contract_config, base_dir, format).await?;
      !summary.has_errors()
    }
    Command::File { source, ast, route, format } => check_file(&source, &ast, route, format)?,
  };

  if !passed {
    std::process::exit(1);
  }
  Ok(())
}

// crates/legal-router-cli/src/main.rs
// ============================================================================
// Module: Legal Router CLI Entry Point
// Description: Command dispatcher for routing, coverage, and rule diagnostics.
// Purpose: Provide an offline front end over the routing engine.
// Dependencies: clap, legal-router-core, legal-router-config, serde, thiserror.
// ============================================================================

//! ## Overview
//! The Legal Router CLI loads a rule snapshot and request records from JSON
//! files, runs the routing engine, and prints canonical JSON results. All
//! inputs are untrusted: files are read with a size cap from configuration and
//! rule sets are validated before use.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use legal_router_cli::audit::JsonlDecisionLog;
use legal_router_cli::input::load_info;
use legal_router_cli::input::load_rules;
use legal_router_cli::render::coverage_text;
use legal_router_config::RouterConfig;
use legal_router_core::DecisionSink;
use legal_router_core::NoopDecisionSink;
use legal_router_core::RoutingEngine;
use legal_router_core::RuleSet;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "legal-router", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Config file path (defaults to legal-router.toml or `LEGAL_ROUTER_CONFIG`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Route one extracted-info record against a rule snapshot.
    Route(RouteCommand),
    /// Analyze request-type x location coverage of a rule snapshot.
    Coverage(CoverageCommand),
    /// Explain whether one rule matches a record under strict evaluation.
    TestRule(TestRuleCommand),
    /// Rule snapshot utilities.
    Rules {
        /// Selected rules subcommand.
        #[command(subcommand)]
        command: RulesCommand,
    },
    /// Configuration utilities.
    Config {
        /// Selected config subcommand.
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

/// Rules subcommands.
#[derive(Subcommand, Debug)]
enum RulesCommand {
    /// Validate a rule snapshot and print its canonical digest.
    Validate(RulesValidateCommand),
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Validate a Legal Router configuration file.
    Validate,
}

/// Arguments for routing.
#[derive(Args, Debug)]
struct RouteCommand {
    /// Rules file (JSON array or `{ "rules": [...] }`).
    #[arg(long, value_name = "PATH")]
    rules: PathBuf,
    /// Extracted-info record (JSON object).
    #[arg(long, value_name = "PATH")]
    info: PathBuf,
}

/// Arguments for coverage analysis.
#[derive(Args, Debug)]
struct CoverageCommand {
    /// Rules file (JSON array or `{ "rules": [...] }`).
    #[arg(long, value_name = "PATH")]
    rules: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = CoverageFormat::Json)]
    format: CoverageFormat,
}

/// Arguments for a single-rule test.
#[derive(Args, Debug)]
struct TestRuleCommand {
    /// Rules file (JSON array or `{ "rules": [...] }`).
    #[arg(long, value_name = "PATH")]
    rules: PathBuf,
    /// Identifier of the rule to test.
    #[arg(long, value_name = "ID")]
    rule_id: String,
    /// Extracted-info record (JSON object).
    #[arg(long, value_name = "PATH")]
    info: PathBuf,
}

/// Arguments for rule-set validation.
#[derive(Args, Debug)]
struct RulesValidateCommand {
    /// Rules file (JSON array or `{ "rules": [...] }`).
    #[arg(long, value_name = "PATH")]
    rules: PathBuf,
}

/// Coverage output formats.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum CoverageFormat {
    /// Canonical JSON report.
    Json,
    /// Plain-text matrix summary.
    Text,
}

/// Summary printed by `rules validate`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RulesValidationSummary {
    /// Always true; invalid snapshots fail the command.
    valid: bool,
    /// Number of rules in the snapshot.
    rule_count: usize,
    /// Number of enabled rules.
    enabled_count: usize,
    /// Canonical snapshot digest (`sha256:<hex>`).
    digest: String,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for user-facing messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&format!("legal-router {version}"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    let config = RouterConfig::load(cli.config.as_deref())
        .map_err(|err| CliError::new(format!("failed to load config: {err}")))?;

    match command {
        Commands::Route(command) => command_route(&command, &config),
        Commands::Coverage(command) => command_coverage(&command, &config),
        Commands::TestRule(command) => command_test_rule(&command, &config),
        Commands::Rules {
            command,
        } => match command {
            RulesCommand::Validate(command) => command_rules_validate(&command, &config),
        },
        Commands::Config {
            command,
        } => match command {
            ConfigCommand::Validate => command_config_validate(),
        },
    }
}

/// Prints the top-level help text.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    let help = command.render_help().to_string();
    write_stdout_line(help.trim_end()).map_err(|err| CliError::new(output_error("stdout", &err)))
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Executes the route command.
fn command_route(command: &RouteCommand, config: &RouterConfig) -> CliResult<ExitCode> {
    let rules = load_rule_set(&command.rules, config)?;
    let info = load_info(&command.info, config.limits.max_input_bytes)
        .map_err(|err| CliError::new(err.to_string()))?;
    let engine = build_engine(config)?;
    let decision = engine
        .route(&info, rules.as_slice())
        .map_err(|err| CliError::new(format!("failed to record decision: {err}")))?;
    write_canonical_json(&decision)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the coverage command.
fn command_coverage(command: &CoverageCommand, config: &RouterConfig) -> CliResult<ExitCode> {
    let rules = load_rule_set(&command.rules, config)?;
    let engine = build_engine(config)?;
    let report = engine
        .analyze_coverage(rules.as_slice())
        .map_err(|err| CliError::new(format!("failed to record coverage report: {err}")))?;
    match command.format {
        CoverageFormat::Json => write_canonical_json(&report)?,
        CoverageFormat::Text => {
            let text = coverage_text(&report, &engine.config().taxonomy);
            write_stdout_line(text.trim_end())
                .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the single-rule test command.
fn command_test_rule(command: &TestRuleCommand, config: &RouterConfig) -> CliResult<ExitCode> {
    let rules = load_rule_set(&command.rules, config)?;
    let info = load_info(&command.info, config.limits.max_input_bytes)
        .map_err(|err| CliError::new(err.to_string()))?;
    let rule = rules
        .as_slice()
        .iter()
        .find(|rule| rule.id.as_str() == command.rule_id)
        .ok_or_else(|| CliError::new(format!("rule not found: {}", command.rule_id)))?;
    let result = RoutingEngine::new(config.engine_config()).test_rule(rule, &info);
    write_canonical_json(&result)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the rule-set validation command.
fn command_rules_validate(
    command: &RulesValidateCommand,
    config: &RouterConfig,
) -> CliResult<ExitCode> {
    let rules = load_rule_set(&command.rules, config)?;
    let digest = rules
        .canonical_hash()
        .map_err(|err| CliError::new(format!("failed to hash rule set: {err}")))?;
    let summary = RulesValidationSummary {
        valid: true,
        rule_count: rules.rules.len(),
        enabled_count: rules.rules.iter().filter(|rule| rule.enabled).count(),
        digest: digest.to_string(),
    };
    write_canonical_json(&summary)?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the config validation command.
fn command_config_validate() -> CliResult<ExitCode> {
    write_stdout_line("config ok").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Engine Setup
// ============================================================================

/// Loads and validates a rule snapshot using configured limits.
fn load_rule_set(path: &Path, config: &RouterConfig) -> CliResult<RuleSet> {
    let rules = load_rules(path, config.limits.max_input_bytes)
        .map_err(|err| CliError::new(err.to_string()))?;
    rules
        .validate(&config.rule_set_limits())
        .map_err(|err| CliError::new(format!("invalid rule set {}: {err}", path.display())))?;
    Ok(rules)
}

/// Builds the routing engine with the configured decision sink.
fn build_engine(config: &RouterConfig) -> CliResult<RoutingEngine> {
    let sink: Arc<dyn DecisionSink> = match (&config.audit.path, config.audit.enabled) {
        (Some(path), true) => {
            let log = JsonlDecisionLog::open(Path::new(path.trim())).map_err(|err| {
                CliError::new(format!("failed to open decision log {path}: {err}"))
            })?;
            Arc::new(log)
        }
        _ => Arc::new(NoopDecisionSink),
    };
    Ok(RoutingEngine::with_sink(config.engine_config(), sink))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes canonical JSON to stdout with a trailing newline.
fn write_canonical_json<T: Serialize>(value: &T) -> CliResult<()> {
    let mut bytes = serde_jcs::to_vec(value)
        .map_err(|err| CliError::new(format!("failed to serialize output: {err}")))?;
    bytes.push(b'\n');
    let mut stdout = std::io::stdout();
    stdout.write_all(&bytes).map_err(|err| CliError::new(output_error("stdout", &err)))
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats an output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    format!("failed to write to {stream}: {error}")
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}

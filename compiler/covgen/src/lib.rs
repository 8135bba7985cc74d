//! covgen command-line front end.
//!
//! Parses arguments, loads the fixed test block, runs the generator over the
//! Stanford catalog and hands back the finished program text. Nothing is
//! written until generation has fully succeeded.

use std::path::PathBuf;
use std::sync::Once;

use covgen_codegen::{
    AssembleOptions, BreakpointPlacement, FixedBlock, ProgramAssembler, DEFAULT_ENTRY,
    DEFAULT_FIXED_PATH,
};
use covgen_ir::{CoverageConfig, CoverageError};

/// Options for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliOptions {
    /// Fixed test block to append.
    pub fixed_path: PathBuf,
    /// Entry function defined by the fixed block.
    pub entry: String,
    /// Breakpoint layout.
    pub breakpoints: BreakpointPlacement,
    /// Output file; stdout when absent.
    pub output: Option<PathBuf>,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            fixed_path: PathBuf::from(DEFAULT_FIXED_PATH),
            entry: DEFAULT_ENTRY.to_string(),
            breakpoints: BreakpointPlacement::default(),
            output: None,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Generate(CliOptions),
    Help,
}

/// Parse arguments (excluding the program name).
pub fn parse_args(args: &[String]) -> Result<Command, String> {
    let mut options = CliOptions::default();
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        if arg == "-h" || arg == "--help" {
            return Ok(Command::Help);
        } else if arg == "-o" {
            let Some(path) = args.get(i + 1) else {
                return Err("-o requires a path".to_string());
            };
            options.output = Some(PathBuf::from(path));
            i += 1;
        } else if let Some(path) = arg.strip_prefix("--fixed=") {
            options.fixed_path = PathBuf::from(path);
        } else if let Some(entry) = arg.strip_prefix("--entry=") {
            if entry.is_empty() {
                return Err("--entry requires a function name".to_string());
            }
            options.entry = entry.to_string();
        } else if let Some(mode) = arg.strip_prefix("--breakpoints=") {
            options.breakpoints = match mode {
                "each" => BreakpointPlacement::EachDeclaration,
                "scope" => BreakpointPlacement::EachScope,
                other => return Err(format!("unknown breakpoint placement `{other}`")),
            };
        } else {
            return Err(format!("unknown argument `{arg}`"));
        }
        i += 1;
    }
    Ok(Command::Generate(options))
}

/// Usage text.
pub fn usage() -> &'static str {
    "\
Usage: covgen [options]

Options:
  --fixed=<path>               Fixed test block to append (default: fixed_tests)
  --entry=<name>               Entry function of the fixed block (default: fixed_tests)
  --breakpoints=<each|scope>   Break after each declaration (default) or each scope
  -o <path>                    Write to a file instead of stdout
  -h, --help                   Show this help"
}

/// Generate the program text for `options`.
///
/// The fixed block is read before anything is generated, so a missing
/// resource fails without producing partial output.
pub fn generate(options: &CliOptions) -> Result<String, CoverageError> {
    let fixed = FixedBlock::load(&options.fixed_path, options.entry.as_str())?;
    tracing::info!(entry = %fixed.entry, breakpoints = ?options.breakpoints, "generating program");
    generate_with(&CoverageConfig::stanford()?, options, &fixed)
}

/// Generate from an explicit configuration and fixed block.
pub fn generate_with(
    config: &CoverageConfig,
    options: &CliOptions,
    fixed: &FixedBlock,
) -> Result<String, CoverageError> {
    ProgramAssembler::new(config)
        .with_options(AssembleOptions {
            breakpoints: options.breakpoints,
        })
        .assemble(fixed)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=covgen_codegen=debug`
/// or `RUST_LOG=trace`. Logs go to stderr; stdout carries the program.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

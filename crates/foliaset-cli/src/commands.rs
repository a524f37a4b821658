//! CLI command definitions and handlers

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use foliaset::{Format, LoadOptions, LoaderConfig, SetDefinition};
use std::path::PathBuf;
use tracing::info;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "foliaset")]
#[command(about = "Load FoLiA set definitions and convert them to JSON or RDF")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Load a set definition and print it
    Convert {
        /// Local path (starting with / or .) or URL
        location: String,

        /// Input format (MIME type or short name); inferred from the suffix by default
        #[arg(short, long)]
        format: Option<Format>,

        /// Namespace context for generated triples
        #[arg(short, long)]
        basens: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "json-pretty")]
        output: OutputFormat,

        /// Write to a file instead of stdout
        #[arg(long)]
        output_file: Option<PathBuf>,

        /// Remote fetch timeout in milliseconds
        #[arg(long)]
        timeout_ms: Option<u64>,
    },

    /// Show a summary of a set definition
    Info {
        /// Local path (starting with / or .) or URL
        location: String,

        /// Input format (MIME type or short name)
        #[arg(short, long)]
        format: Option<Format>,
    },
}

/// Output format options
#[derive(Clone, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    JsonPretty,
    Ntriples,
}

/// Command execution result
pub struct CommandResult {
    /// Text destined for stdout
    pub output: String,
}

/// Execute CLI commands
#[derive(Default)]
pub struct CommandExecutor {
    config: LoaderConfig,
}

impl CommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Execute a CLI command
    pub fn execute(&self, command: Commands) -> Result<CommandResult> {
        match command {
            Commands::Convert { location, format, basens, output, output_file, timeout_ms } => {
                self.execute_convert(&location, format, basens, output, output_file, timeout_ms)
            }
            Commands::Info { location, format } => self.execute_info(&location, format),
        }
    }

    fn load(&self, location: &str, format: Option<Format>, basens: Option<String>, timeout_ms: Option<u64>) -> Result<SetDefinition> {
        let mut config = self.config.clone();
        if timeout_ms.is_some() {
            config.timeout_ms = timeout_ms;
        }
        let mut options = LoadOptions::new().with_config(config);
        if let Some(format) = format {
            options = options.with_format(format);
        }
        if let Some(basens) = basens {
            options = options.with_basens(basens);
        }
        SetDefinition::load(location, options).with_context(|| format!("Failed to load {}", location))
    }

    fn execute_convert(
        &self,
        location: &str,
        format: Option<Format>,
        basens: Option<String>,
        output: OutputFormat,
        output_file: Option<PathBuf>,
        timeout_ms: Option<u64>,
    ) -> Result<CommandResult> {
        let definition = self.load(location, format, basens, timeout_ms)?;

        let mut rendered = match output {
            OutputFormat::Json => serde_json::to_string(&definition.to_json()?)?,
            OutputFormat::JsonPretty => serde_json::to_string_pretty(&definition.to_json()?)?,
            OutputFormat::Ntriples => definition.graph().to_ntriples()?,
        };
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }

        let output = match output_file {
            Some(path) => {
                std::fs::write(&path, &rendered).with_context(|| format!("Failed to write {}", path.display()))?;
                info!("Wrote {}", path.display());
                String::new()
            }
            None => rendered,
        };

        info!("Converted {}", location);
        Ok(CommandResult { output })
    }

    fn execute_info(&self, location: &str, format: Option<Format>) -> Result<CommandResult> {
        let definition = self.load(location, format, None, None)?;

        let mut output = format!("Location: {}\n", location);
        output.push_str(&format!("Format: {}\n", definition.format()));
        output.push_str(&format!("Namespace: {}\n", definition.basens().unwrap_or("(none)")));
        output.push_str(&format!("Triples: {}\n", definition.graph().len()));
        if let Some(set) = definition.legacy_set() {
            output.push_str(&format!("Set: {} ({})\n", set.id, set.set_type));
            output.push_str(&format!("Classes: {}\n", set.class_count()));
            output.push_str(&format!("Subsets: {}\n", set.subsets.len()));
        }

        Ok(CommandResult { output })
    }
}

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::generator::{
    generate_resource, resolve_defaults_config, write_artifacts, ResourceArtifacts,
    ResourceOptions, TransportStyle, WriteOptions,
};

/// Command-line interface for resgen
///
/// Scaffolds the boilerplate for one resource in any of five transport
/// styles.
#[derive(Parser, Debug)]
#[command(name = "resgen")]
#[command(about = "Resource scaffolding generator", long_about = None, version)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available resgen commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a resource and write it to disk
    Generate {
        #[command(flatten)]
        resource: ResourceArgs,

        /// Output directory (default: `output` from resgen.toml, else the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without touching the filesystem
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Print the artifacts a resource would produce without writing them
    Plan {
        #[command(flatten)]
        resource: ResourceArgs,

        /// Emit the full artifact set (paths and contents) as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the supported transport styles
    Styles,
}

/// Transport style as accepted on the command line
///
/// Legacy short names are accepted as aliases.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    /// Synchronous request/response controller
    #[value(alias = "rest")]
    RequestResponse,
    /// Asynchronous message-pattern controller
    #[value(alias = "microservice")]
    AsyncMessage,
    /// Push-channel gateway
    #[value(alias = "ws")]
    PushChannel,
    /// Typed query resolver, types declared in code
    #[value(alias = "graphql-code-first")]
    TypedQueryCodeFirst,
    /// Typed query resolver, types declared in a schema file
    #[value(alias = "graphql-schema-first")]
    TypedQuerySchemaFirst,
}

impl From<StyleArg> for TransportStyle {
    fn from(arg: StyleArg) -> Self {
        match arg {
            StyleArg::RequestResponse => TransportStyle::RequestResponse,
            StyleArg::AsyncMessage => TransportStyle::AsyncMessage,
            StyleArg::PushChannel => TransportStyle::PushChannel,
            StyleArg::TypedQueryCodeFirst => TransportStyle::TypedQueryCodeFirst,
            StyleArg::TypedQuerySchemaFirst => TransportStyle::TypedQuerySchemaFirst,
        }
    }
}

/// Options shared by `generate` and `plan`
///
/// Every boolean comes as a `--x` / `--no-x` pair; the last one given wins.
/// Anything left unset falls back to the project config, then to the
/// built-in default.
#[derive(Args, Debug, Clone, Default)]
pub struct ResourceArgs {
    /// Resource name (e.g. users, _users, blogPosts)
    pub name: String,

    /// Transport style
    #[arg(short, long, value_enum)]
    pub style: Option<StyleArg>,

    /// Generate CRUD operations, entity and input artifacts
    #[arg(long, overrides_with = "no_crud")]
    pub crud: bool,

    /// Skip CRUD operations, entity and input artifacts
    #[arg(long, overrides_with = "crud")]
    pub no_crud: bool,

    /// Generate test stubs
    #[arg(long, overrides_with = "no_spec")]
    pub spec: bool,

    /// Skip test stubs
    #[arg(long, overrides_with = "spec")]
    pub no_spec: bool,

    /// Do not create a directory for the resource
    #[arg(long, overrides_with = "no_flat")]
    pub flat: bool,

    /// Create a directory for the resource
    #[arg(long, overrides_with = "flat")]
    pub no_flat: bool,

    /// Suffix for test-stub files (default: spec)
    #[arg(long)]
    pub spec_file_suffix: Option<String>,

    /// Register the data-access client provider in the module and test stubs
    #[arg(long, overrides_with = "no_orm")]
    pub orm: bool,

    /// Do not register the data-access client provider
    #[arg(long, overrides_with = "orm")]
    pub no_orm: bool,

    /// Import the partial-type helper from the API-docs package
    #[arg(long, overrides_with = "no_validation_decorators")]
    pub validation_decorators: bool,

    /// Import the partial-type helper from the mapped-types package
    #[arg(long, overrides_with = "validation_decorators")]
    pub no_validation_decorators: bool,

    /// Path to resgen.toml / resgen.yaml
    /// If not provided, will auto-detect in the current directory
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl ResourceArgs {
    /// Resolve the effective options: flags > config defaults > built-ins.
    ///
    /// Also returns the config's `output` directory, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config is missing or any config
    /// file fails to parse.
    pub fn resolve(&self, project_dir: &Path) -> anyhow::Result<(ResourceOptions, Option<PathBuf>)> {
        let config = resolve_defaults_config(self.config.as_deref(), project_dir)?;
        let (mut options, output) = match config {
            Some(config) => (config.resource_options(&self.name), config.output),
            None => (ResourceOptions::new(&self.name), None),
        };

        if let Some(style) = self.style {
            options.transport_style = style.into();
        }
        if let Some(crud) = flag_pair(self.crud, self.no_crud) {
            options.crud = crud;
        }
        if let Some(stubs) = flag_pair(self.spec, self.no_spec) {
            options.generate_test_stubs = stubs;
        }
        if let Some(flat) = flag_pair(self.flat, self.no_flat) {
            options.flat = flat;
        }
        if let Some(suffix) = &self.spec_file_suffix {
            options.test_stub_suffix = suffix.clone();
        }
        if let Some(orm) = flag_pair(self.orm, self.no_orm) {
            options.orm_integration_available = orm;
        }
        if let Some(validation) =
            flag_pair(self.validation_decorators, self.no_validation_decorators)
        {
            options.validation_decorators_available = validation;
        }

        Ok((options, output))
    }
}

/// `--x` / `--no-x`: whichever was given last, or `None` to defer to config
fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// One line per artifact: path and size
pub fn plan_lines(artifacts: &ResourceArtifacts) -> Vec<String> {
    let width = artifacts.paths().map(str::len).max().unwrap_or(0);
    artifacts
        .artifacts
        .iter()
        .map(|a| format!("{:<width$}  {:>6} bytes", a.path, a.content.len()))
        .collect()
}

/// One line per transport style: canonical name and alias
pub fn style_lines() -> Vec<String> {
    TransportStyle::ALL
        .iter()
        .map(|style| format!("{:<26} (alias: {})", style.as_str(), style.alias()))
        .collect()
}

/// Parse the process arguments and execute the command
///
/// # Errors
///
/// See [`execute`].
pub fn run_cli() -> anyhow::Result<()> {
    execute(Cli::parse())
}

/// Execute a parsed command
///
/// # Errors
///
/// Returns an error if:
/// - The config file cannot be read or parsed
/// - Generation fails (invalid name or suffix)
/// - Writing an artifact fails
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    match cli.command {
        Commands::Generate {
            resource,
            output,
            force,
            dry_run,
        } => {
            let (options, config_output) = resource.resolve(&cwd)?;
            let artifacts = generate_resource(&options)
                .with_context(|| format!("Failed to generate resource '{}'", options.name))?;
            let out_dir = output.or(config_output).unwrap_or(cwd);
            println!(
                "🛠️  Generating {} ({}) into {:?}",
                artifacts.names.classified, options.transport_style, out_dir
            );
            let summary = write_artifacts(&out_dir, &artifacts, WriteOptions { force, dry_run })?;
            println!(
                "✨ {} written, {} skipped",
                summary.written.len(),
                summary.skipped.len()
            );
            if !summary.skipped.is_empty() && !force {
                println!("ℹ️  Use --force to overwrite existing files");
            }
            Ok(())
        }
        Commands::Plan { resource, json } => {
            let (options, _) = resource.resolve(&cwd)?;
            let artifacts = generate_resource(&options)
                .with_context(|| format!("Failed to generate resource '{}'", options.name))?;
            if json {
                let rendered = serde_json::to_string_pretty(&artifacts)
                    .context("Failed to serialize artifact plan")?;
                println!("{rendered}");
            } else {
                for line in plan_lines(&artifacts) {
                    println!("{line}");
                }
            }
            Ok(())
        }
        Commands::Styles => {
            for line in style_lines() {
                println!("{line}");
            }
            Ok(())
        }
    }
}

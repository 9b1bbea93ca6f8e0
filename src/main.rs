//! family-memories: command-line client for a family memories archive
//!
//! Browse vignettes and files, upload and download files, and manage
//! entries on the memories backend.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use family_memories::{
    cli,
    config::{self, AppConfig, ConfigOverrides, Validatable, API_URL_ENV, TOKEN_ENV},
    model::{SortMode, VignetteDraft},
    pipeline::{connect_backend, exit_codes, OutputTarget},
    reports::OutputFormat,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "family-memories")]
#[command(version)]
#[command(about = "Preserve family stories: vignettes, files and photos", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Some files of an upload failed
    3  Error occurred

EXAMPLES:
    # Counts and recent vignettes
    family-memories dashboard

    # Everything, alphabetically
    family-memories feed --sort title-asc

    # Upload scans, then list them as JSON
    family-memories file upload scans/*.pdf
    family-memories feed -o json

    # Remove a file without prompting (admin only)
    family-memories --admin --yes file delete 42")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Backend origin
    #[arg(long, global = true, env = API_URL_ENV)]
    api_url: Option<String>,

    /// Bearer token from the session provider
    #[arg(long, global = true, env = TOKEN_ENV, hide_env_values = true)]
    token: Option<String>,

    /// Act as an admin session (offers edit and delete)
    #[arg(long, global = true)]
    admin: bool,

    /// Output format
    #[arg(short, long, global = true)]
    output: Option<OutputFormat>,

    /// Write reports to a file instead of stdout
    #[arg(long, global = true)]
    output_file: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    yes: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show collection counts and recent vignettes
    Dashboard,

    /// List vignettes and files together
    Feed {
        /// Sort order (defaults to the configured order, newest first)
        #[arg(short, long)]
        sort: Option<SortMode>,
    },

    /// Work with vignettes
    Vignette {
        #[command(subcommand)]
        action: VignetteAction,
    },

    /// Work with uploaded files
    File {
        #[command(subcommand)]
        action: FileAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to this file instead of stdout
        path: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum VignetteAction {
    /// Print a vignette in full
    View {
        id: i64,
    },
    /// Write a new vignette
    Create {
        /// Title of the vignette
        #[arg(long)]
        title: String,
        /// Body text
        #[arg(long)]
        content: Option<String>,
    },
    /// Change an existing vignette (admin only)
    Update {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// Delete a vignette (admin only)
    Delete {
        id: i64,
    },
}

#[derive(Subcommand)]
enum FileAction {
    /// Upload one or more local files, in order
    Upload {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },
    /// Save a file locally
    Download {
        id: i64,
        /// Target file or directory (defaults to the download directory)
        #[arg(short = 'O', long)]
        output_path: Option<PathBuf>,
    },
    /// Preview an image, PDF or text file
    View {
        id: i64,
    },
    /// Change a file's title or description (admin only)
    Edit {
        id: i64,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a file (admin only)
    Delete {
        id: i64,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .family-memories.yaml in the current directory
    Init,
}

impl Cli {
    /// Global flags as a layer over the config file.
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            api_url: self.api_url.clone(),
            token: self.token.clone(),
            admin: config::flag(self.admin),
            output_format: self.output,
            no_color: config::flag(self.no_color),
            quiet: config::flag(self.quiet),
            assume_yes: config::flag(self.yes),
            ..ConfigOverrides::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let (app_config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &cli.overrides());
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let target = OutputTarget::from_option(cli.output_file.clone());

    match cli.command {
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "family-memories", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::ConfigSchema { path } => {
            let schema = config::generate_json_schema();
            match path {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => run_config(action, cli.config.as_deref()),

        command => {
            let errors = app_config.validate();
            if !errors.is_empty() {
                let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
                anyhow::bail!("Invalid configuration:\n  {}", details.join("\n  "));
            }

            let backend = connect_backend(&app_config)?;
            let mut confirm = cli::confirmer(&app_config);

            match command {
                Commands::Dashboard => cli::run_dashboard(&backend, &app_config, &target),
                Commands::Feed { sort } => cli::run_feed(&backend, &app_config, sort, &target),
                Commands::Vignette { action } => match action {
                    VignetteAction::View { id } => {
                        cli::run_vignette_view(&backend, &app_config, id, &target)
                    }
                    VignetteAction::Create { title, content } => cli::run_vignette_create(
                        &backend,
                        &app_config,
                        VignetteDraft::new(title, content),
                        &target,
                    ),
                    VignetteAction::Update { id, title, content } => cli::run_vignette_update(
                        &backend,
                        &app_config,
                        id,
                        title,
                        content,
                        &target,
                    ),
                    VignetteAction::Delete { id } => cli::run_vignette_delete(
                        &backend,
                        &app_config,
                        id,
                        confirm.as_mut(),
                        &target,
                    ),
                },
                Commands::File { action } => match action {
                    FileAction::Upload { paths } => {
                        cli::run_file_upload(&backend, &app_config, &paths, &target)
                    }
                    FileAction::Download { id, output_path } => cli::run_file_download(
                        &backend,
                        &app_config,
                        id,
                        output_path.as_deref(),
                        &target,
                    ),
                    FileAction::View { id } => {
                        let hold_open = io::stdin().is_terminal()
                            && !app_config.behavior.quiet
                            && app_config.output.format == OutputFormat::Text;
                        cli::run_file_view(&backend, &app_config, id, hold_open, &target)
                    }
                    FileAction::Edit {
                        id,
                        title,
                        description,
                    } => cli::run_file_edit(
                        &backend,
                        &app_config,
                        id,
                        title,
                        description,
                        &target,
                    ),
                    FileAction::Delete { id } => cli::run_file_delete(
                        &backend,
                        &app_config,
                        id,
                        confirm.as_mut(),
                        &target,
                    ),
                },
                Commands::Completions { .. }
                | Commands::ConfigSchema { .. }
                | Commands::Config { .. } => Ok(exit_codes::SUCCESS),
            }
        }
    }
}

fn run_config(action: ConfigAction, explicit: Option<&std::path::Path>) -> Result<i32> {
    match action {
        ConfigAction::Show => {
            let (config, loaded_from) = config::load_or_default(explicit);
            if let Some(path) = &loaded_from {
                eprintln!("# Loaded from: {}", path.display());
            } else {
                eprintln!("# No config file found; showing defaults");
            }
            let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
            print!("{yaml}");
        }
        ConfigAction::Path => {
            eprintln!("Config file search paths (in order):");
            for dir in config::search_dirs() {
                eprintln!("  {}", dir.display());
            }
            eprintln!();
            eprintln!("Recognized file names:");
            for name in config::file::CONFIG_FILE_NAMES {
                eprintln!("  {name}");
            }
            eprintln!();
            match config::discover_config_file(explicit) {
                Some(path) => eprintln!("Active config file: {}", path.display()),
                None => eprintln!("No config file found."),
            }
        }
        ConfigAction::Init => {
            let target = std::env::current_dir()
                .context("cannot determine current directory")?
                .join(".family-memories.yaml");
            if target.exists() {
                anyhow::bail!(
                    "{} already exists. Remove it first to re-initialize.",
                    target.display()
                );
            }
            let content = config::generate_full_example_config();
            std::fs::write(&target, content)
                .with_context(|| format!("failed to write {}", target.display()))?;
            eprintln!("Created {}", target.display());
        }
    }
    Ok(exit_codes::SUCCESS)
}

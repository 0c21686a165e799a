//! Taskboard CLI - input validation checks and batch board rendering
//!
//! The store is memory-only, so every invocation starts from an empty
//! board: `check` validates one submission, `board` replays a JSON file
//! of submissions into a fresh store and prints the resulting lists.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::{Parser, Subcommand};
use tracing::debug;

use taskboard_core::intake::{self, ALERT_INVALID_INPUT, RawProjectInput};
use taskboard_core::prelude::{Config, Project, ProjectStatus, ProjectStore};

#[derive(Parser)]
#[command(name = "taskboard")]
#[command(author, version, about = "Terminal project board", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one project submission
    Check {
        /// Project title
        #[arg(short, long)]
        title: String,
        /// People count (raw field string)
        #[arg(short, long)]
        people: String,
        /// Project description
        #[arg(short, long)]
        description: String,
    },

    /// Replay a JSON file of submissions and print the board
    Board {
        /// Path to a JSON array of {title, people, description} entries
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("taskboard=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Check {
            title,
            people,
            description,
        } => cmd_check(&config, title, people, description, cli.format, cli.quiet),

        Commands::Board { input } => cmd_board(&config, &input, cli.format, cli.quiet),

        Commands::Config { action } => cmd_config(&config, action),
    }
}

fn cmd_check(
    config: &Config,
    title: String,
    people: String,
    description: String,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let input = RawProjectInput {
        title,
        people,
        description,
    };
    let accepted = intake::validate(&input, &config.form).is_some();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "valid": accepted }));
        }
        OutputFormat::Text if !quiet => {
            if accepted {
                println!("Input accepted");
            } else {
                println!("{ALERT_INVALID_INPUT}");
            }
        }
        OutputFormat::Text => {}
    }

    if !accepted {
        std::process::exit(1);
    }
    Ok(())
}

fn cmd_board(
    config: &Config,
    input: &Path,
    format: OutputFormat,
    quiet: bool,
) -> anyhow::Result<()> {
    let raw = fs::read_to_string(input)?;
    let entries: Vec<RawProjectInput> = serde_json::from_str(&raw)?;

    let mut store = ProjectStore::new();
    let active = register_status_list(&mut store, ProjectStatus::Active);
    let finished = register_status_list(&mut store, ProjectStatus::Finished);

    // Each entry is an independent submission: invalid ones are reported
    // and skipped, the rest still land on the board.
    let mut rejected = 0usize;
    for (index, entry) in entries.iter().enumerate() {
        match intake::validate(entry, &config.form) {
            Some(draft) => {
                store.add_project(draft.title, draft.description, draft.people);
            }
            None => {
                rejected += 1;
                debug!(index, "entry rejected");
                if !quiet {
                    eprintln!("entry {index}: {ALERT_INVALID_INPUT}");
                }
            }
        }
    }

    match format {
        OutputFormat::Json => {
            let board = serde_json::json!({
                "active": &*active.borrow(),
                "finished": &*finished.borrow(),
                "rejected": rejected,
            });
            println!("{}", serde_json::to_string_pretty(&board)?);
        }
        OutputFormat::Text => {
            print_status_list("ACTIVE PROJECTS", &active.borrow());
            print_status_list("FINISHED PROJECTS", &finished.borrow());
            if !quiet {
                println!(
                    "{} added, {} rejected",
                    store.len(),
                    rejected
                );
            }
        }
    }
    Ok(())
}

/// Register a listener that keeps one status category's list current
fn register_status_list(
    store: &mut ProjectStore,
    status: ProjectStatus,
) -> Rc<RefCell<Vec<Project>>> {
    let list = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&list);
    store.add_listener(move |snapshot| {
        *sink.borrow_mut() = snapshot
            .into_iter()
            .filter(|project| project.status == status)
            .collect();
    });
    list
}

fn print_status_list(heading: &str, projects: &[Project]) {
    println!("{heading}");
    if projects.is_empty() {
        println!("  (none)");
    }
    for project in projects {
        println!(
            "  {} ({} people) - {}",
            project.title, project.people, project.description
        );
    }
}

fn cmd_config(config: &Config, action: ConfigAction) -> anyhow::Result<()> {
    match action {
        ConfigAction::Show => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        ConfigAction::Path => match Config::config_path() {
            Some(path) => println!("{}", path.display()),
            None => println!("(no config directory)"),
        },
    }
    Ok(())
}

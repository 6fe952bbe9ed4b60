use anyhow::Result;
use clap::{Parser, Subcommand};
use lecture_planner::OutputFormat;
use lecture_planner::catalog::Catalog;
use lecture_planner::commands;
use lecture_planner::config::{self, Config};
use lecture_planner::platform;
use lecture_planner::prompt::Prompter;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lectime")]
#[command(about = "Plan study sessions from a cached course curriculum export")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "Path to the curriculum export (autosave.json)")]
    catalog: Option<PathBuf>,
    #[arg(short, long, global = true, help = "Enable debug logging")]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive task menu (default)
    Menu,
    /// List courses in the export
    Courses {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List a course's sections
    Sections {
        #[arg(help = "Course id or 1-based position")]
        course: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List a section's lectures
    Lectures {
        #[arg(help = "Course id or 1-based position")]
        course: String,
        #[arg(help = "1-based section number")]
        section: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show a course as a tree of sections and lectures
    Outline {
        #[arg(help = "Course id or 1-based position")]
        course: String,
    },
    /// Split a section's lectures into study chunks
    Split {
        #[arg(help = "Course id or 1-based position")]
        course: String,
        #[arg(help = "1-based section number")]
        section: usize,
        #[arg(long, help = "Chunk length in minutes (defaults to planner.default_chunk_minutes)")]
        minutes: Option<u32>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Total and average runtime of a lecture range
    Sum {
        #[arg(help = "Course id or 1-based position")]
        course: String,
        #[arg(help = "1-based section number")]
        section: usize,
        #[arg(long, help = "First lecture (1-based)")]
        start: usize,
        #[arg(long, help = "Last lecture (1-based, inclusive)")]
        end: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show configuration
    #[command(subcommand)]
    Config(ConfigAction),
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Get { key: String },
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("lecture_planner=debug,lectime=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(cli: &Cli, config: &Config) -> Result<Catalog> {
    let path =
        platform::resolve_catalog_path(cli.catalog.as_deref(), config.catalog.path.as_deref())?;
    Ok(Catalog::load(&path, &config.catalog.root_key)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = config::load().unwrap_or_else(|e| {
        tracing::warn!("Ignoring config: {:#}", e);
        Config::default()
    });

    match &cli.command {
        Some(Commands::Config(action)) => match action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
        None | Some(Commands::Menu) => {
            let catalog = load_catalog(&cli, &config)?;
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
            commands::menu::run(&catalog, &mut prompter)?;
        }
        Some(Commands::Courses { format }) => {
            let catalog = load_catalog(&cli, &config)?;
            commands::browse::courses(&catalog, *format)?;
        }
        Some(Commands::Sections { course, format }) => {
            let catalog = load_catalog(&cli, &config)?;
            commands::browse::sections(&catalog, course, *format)?;
        }
        Some(Commands::Lectures {
            course,
            section,
            format,
        }) => {
            let catalog = load_catalog(&cli, &config)?;
            commands::browse::lectures(&catalog, course, *section, *format)?;
        }
        Some(Commands::Outline { course }) => {
            let catalog = load_catalog(&cli, &config)?;
            commands::browse::outline(&catalog, course)?;
        }
        Some(Commands::Split {
            course,
            section,
            minutes,
            format,
        }) => {
            let catalog = load_catalog(&cli, &config)?;
            let minutes = minutes.unwrap_or(config.planner.default_chunk_minutes);
            commands::split::split(&catalog, course, *section, minutes, *format)?;
        }
        Some(Commands::Sum {
            course,
            section,
            start,
            end,
            format,
        }) => {
            let catalog = load_catalog(&cli, &config)?;
            commands::sum::sum(&catalog, course, *section, *start, *end, *format)?;
        }
    }

    Ok(())
}

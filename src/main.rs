use anyhow::Result;
use backfill::areas::git::GitCli;
use backfill::areas::provider::ContentProvider;
use backfill::areas::repository::Repository;
use backfill::artifacts::schedule::date_range::parse_date;
use backfill::config::{InitialCommitSettings, Settings};
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "backfill",
    version = "0.1.0",
    about = "Synthesize a backdated commit history",
    long_about = "Walks a calendar date range and, for each day, commits a few placeholder \
    source files with backdated timestamps. Without a subcommand it runs `generate` \
    with the configured (or default) settings.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        long,
        global = true,
        help = "The repository to write into (defaults to the current directory)"
    )]
    repo: Option<PathBuf>,
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "generate",
        about = "Commit placeholder files for every day of a date range",
        long_about = "This command walks the date range day by day, schedules one to five \
        commits per day and commits a generated file at each scheduled timestamp."
    )]
    Generate(GenerateArgs),
    #[command(
        name = "initialize",
        about = "Commit the whole working tree at a given date",
        long_about = "This command stages every file and creates a single commit dated \
        on the given day, at a random time of day."
    )]
    Initialize {
        #[arg(short, long, help = "The commit message")]
        message: Option<String>,
        #[arg(short, long, help = "The commit date (YYYY-MM-DD)")]
        date: Option<String>,
    },
}

#[derive(Args, Default)]
struct GenerateArgs {
    #[arg(long, help = "First day of the range (YYYY-MM-DD)")]
    start: Option<String>,
    #[arg(long, help = "Last day of the range, inclusive (YYYY-MM-DD)")]
    end: Option<String>,
    #[arg(long, help = "Message of an initial commit made before the range")]
    initial_message: Option<String>,
    #[arg(long, help = "Date of an initial commit made before the range (YYYY-MM-DD)")]
    initial_date: Option<String>,
    #[arg(long, help = "Seed for a reproducible schedule")]
    seed: Option<u64>,
    #[arg(long, help = "Use generated lorem ipsum instead of fetching content")]
    offline: bool,
    #[arg(long, help = "Do not push after each commit")]
    no_push: bool,
}

impl GenerateArgs {
    fn apply(self, settings: &mut Settings) {
        if let Some(start) = self.start {
            settings.start = start;
        }
        if let Some(end) = self.end {
            settings.end = end;
        }
        if self.initial_message.is_some() || self.initial_date.is_some() {
            let initial = settings.initial.get_or_insert_with(InitialCommitSettings::default);
            if let Some(message) = self.initial_message {
                initial.message = message;
            }
            if let Some(date) = self.initial_date {
                initial.date = date;
            }
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if self.offline {
            settings.content.offline = true;
        }
        if self.no_push {
            settings.push.enabled = false;
        }
    }
}

fn open_repository<P: ContentProvider>(
    path: &Path,
    settings: &Settings,
    provider: P,
) -> Result<Repository<GitCli, P>> {
    Ok(
        Repository::open(path, Box::new(std::io::stdout()), provider)?
            .with_output_dir(&settings.output_dir)
            .with_push_target(settings.push_target()),
    )
}

async fn generate(path: &Path, settings: Settings) -> Result<()> {
    // validate everything before touching the disk
    let range = settings.date_range()?;
    let initial = settings.initial_commit()?;
    let mut rng = settings.rng();
    let repository = open_repository(path, &settings, settings.provider()?)?;

    if let Some(initial) = initial {
        if let Err(e) = repository
            .initialize(&initial.message, initial.date, &mut rng)
            .await
        {
            let error = format!("{e:#}");
            tracing::warn!(%error, "initial commit failed");
        }
    }

    let summary = repository.generate(&range, &mut rng).await?;
    repository.report(&summary)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let path = match cli.repo {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let mut settings = Settings::discover(&path, cli.config.as_deref())?;

    match cli.command {
        None => generate(&path, settings).await?,
        Some(Commands::Generate(args)) => {
            args.apply(&mut settings);
            generate(&path, settings).await?
        }
        Some(Commands::Initialize { message, date }) => {
            let defaults = settings.initial.clone().unwrap_or_default();
            let message = message.unwrap_or(defaults.message);
            let date = parse_date(&date.unwrap_or(defaults.date))?;
            let mut rng = settings.rng();
            let repository = open_repository(&path, &settings, settings.provider()?)?;

            repository.initialize(&message, date, &mut rng).await?;
        }
    }

    Ok(())
}

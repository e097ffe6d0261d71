use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub mod seed;

#[derive(Parser)]
#[command(name = "holocron-server")]
#[command(about = "Holocron API server")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run database migrations
    Migrate,
    /// Print OpenAPI spec (optionally to a file)
    Openapi(OpenApiArgs),
    /// Insert a demo user and sample people and planets
    Seed(seed::SeedArgs),
}

#[derive(Args)]
struct OpenApiArgs {
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub enum RunMode {
    Server,
    Migrate,
    OpenApi { out: Option<PathBuf> },
    Seed(seed::SeedArgs),
}

impl From<Cli> for RunMode {
    fn from(cli: Cli) -> Self {
        match cli.command {
            None => Self::Server,
            Some(Command::Migrate) => Self::Migrate,
            Some(Command::Openapi(args)) => Self::OpenApi { out: args.out },
            Some(Command::Seed(args)) => Self::Seed(args),
        }
    }
}

pub fn parse_args() -> RunMode {
    Cli::parse().into()
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use inkwell_backend::api;
use inkwell_backend::cache;
use inkwell_backend::config::InkwellConfig;
use inkwell_backend::database::repositories::GroupRepository;
use inkwell_backend::database::Database;
use inkwell_backend::telemetry;

#[derive(Parser)]
#[command(author, version, about = "Inkwell feed engine daemon and admin CLI")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (Axum) for REST/API access
    Serve,
    /// Create a thematic group. Groups are administered here, never through
    /// the engine's own surface.
    AddGroup {
        slug: String,
        title: String,
        #[arg(default_value = "")]
        description: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing();

    let args = Args::parse();

    let config = InkwellConfig::from_env()?;
    let database = Database::connect(&config.paths)?;
    if database.ensure_migrations()? {
        tracing::info!(db = %config.paths.db_path.display(), "created fresh database");
    }

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => api::serve_http(config, database, cache::log_only()).await,
        Command::AddGroup {
            slug,
            title,
            description,
        } => {
            let group = database
                .with_repositories(|repos| repos.groups().create(&slug, &title, &description))?;
            println!("created group '{}' with id {}", group.slug, group.id);
            Ok(())
        }
    }
}

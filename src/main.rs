// btree-notes - notes that live in a B-Tree behind an HTTP endpoint
//
// This is the main entry point. Parses CLI args and dispatches to handlers.

use btree_notes_lib::{
    logging,
    ui::{HtmlPage, TerminalSurface},
    Config, Database, Result, Session,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "btree-notes",
    version,
    about = "Notes that live in a B-Tree database on the other side of an HTTP endpoint"
)]
struct Cli {
    /// Query endpoint (default http://localhost:8081/query)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Table holding the notes
    #[arg(long, global = true)]
    table: Option<String>,

    /// Config file (default ~/.btree-notes/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Create the notes table and list notes
    Init,
    /// List all notes
    List,
    /// Add a note
    Add {
        #[arg(long, default_value = "")]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
    },
    /// Delete a note by id
    Delete {
        id: i64,
        /// Don't ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
    /// Write the notes page as HTML
    Render {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Send a raw SQL statement and print the response
    Sql {
        #[arg(required = true, num_args = 1..)]
        statement: Vec<String>,
    },
    /// Interactive session (default)
    Shell,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_overrides(cli.endpoint.as_deref(), cli.table.as_deref())?;
    tracing::debug!(endpoint = %config.endpoint, table = %config.table, "using config");

    let db = Database::new(&config)?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Init => handle_init(db).await,
        Command::List => handle_list(db).await,
        Command::Add { title, content } => handle_add(db, &title, &content).await,
        Command::Delete { id, yes } => handle_delete(db, id, yes).await,
        Command::Render { output } => handle_render(db, output).await,
        Command::Sql { statement } => handle_sql(db, &statement.join(" ")).await,
        Command::Shell => handle_shell(db).await,
    }
}

async fn handle_init(db: Database) -> Result<ExitCode> {
    let mut session = Session::new(db, TerminalSurface::stdio());
    session.start().await?;
    Ok(ExitCode::SUCCESS)
}

async fn handle_list(db: Database) -> Result<ExitCode> {
    let mut session = Session::new(db, TerminalSurface::stdio());
    session.refresh().await?;
    Ok(ExitCode::SUCCESS)
}

async fn handle_add(db: Database, title: &str, content: &str) -> Result<ExitCode> {
    let mut session = Session::new(db, TerminalSurface::stdio());
    let created = session.create(title, content).await?;
    Ok(exit_for(created))
}

async fn handle_delete(db: Database, id: i64, yes: bool) -> Result<ExitCode> {
    let mut session = Session::new(db, TerminalSurface::stdio().assume_yes(yes));
    if !session.delete(id).await? {
        println!("Nothing deleted.");
    }
    Ok(ExitCode::SUCCESS)
}

async fn handle_render(db: Database, output: Option<PathBuf>) -> Result<ExitCode> {
    let mut session = Session::new(db, HtmlPage::new());
    session.refresh().await?;
    let html = session.surface().render(session.form());

    match output {
        Some(path) => {
            std::fs::write(&path, html)?;
            eprintln!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(ExitCode::SUCCESS)
}

async fn handle_sql(db: Database, sql: &str) -> Result<ExitCode> {
    let mut session = Session::new(db, TerminalSurface::stdio());
    let result = session.run_sql(sql).await?;
    session.surface_mut().show_result(&result)?;

    Ok(exit_for(!result.is_error()))
}

async fn handle_shell(db: Database) -> Result<ExitCode> {
    let mut session = Session::new(db, TerminalSurface::stdio());
    session.run_shell().await?;
    Ok(ExitCode::SUCCESS)
}

// Rejected statements exit non-zero so scripts can tell
fn exit_for(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

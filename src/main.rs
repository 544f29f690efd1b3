use clap::Parser;
use notes_app::cli::Cli;
use notes_app::logging::init_tracing;
use notes_app::output::format_note;
use notes_app::{DatabaseConfig, NoteAccessor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug)?;

    let config = DatabaseConfig::load(cli.config.as_deref())?;
    let accessor = NoteAccessor::connect(&config)?;

    let note = accessor.fetch_note_by_id(cli.id).await;
    accessor.close().await;

    println!("{}", format_note(note?.as_ref())?);
    Ok(())
}

//! CLI definition

use clap::Parser;
use std::convert::Infallible;
use std::path::PathBuf;

use crate::models::note::NoteId;

#[derive(Parser, Debug)]
#[command(name = "notes-app")]
#[command(about = "Fetch a note from the notes datastore by id", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Id of the note to fetch
    #[arg(value_name = "ID", default_value = "2", value_parser = parse_note_id)]
    pub id: NoteId,

    /// TOML file with datastore settings
    #[arg(long, env = "NOTES_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

/// Integers must reach the query as `NoteId::Integer`; clap would otherwise
/// build the id through `From<String>`.
fn parse_note_id(s: &str) -> Result<NoteId, Infallible> {
    s.parse()
}

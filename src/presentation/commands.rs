use std::path::{Path, PathBuf};
use std::process::ExitCode;

use thiserror::Error;
use tracing::{debug, error, info};

use crate::application::{AppContext, PasteOutcome};
use crate::domain::entities::Position;
use crate::domain::errors::{EditorError, PasteError};
use crate::infrastructure::FileDocument;
use crate::infrastructure::config::Command;

/// Converts 1-based CLI coordinates into a document position.
///
/// `None` places the cursor at the end of the document.
#[must_use]
pub fn cursor_from_args(line: Option<u32>, column: Option<u32>) -> Option<Position> {
    let line = usize::try_from(line?).ok()?;
    let column = usize::try_from(column.unwrap_or(1)).ok()?;
    Some(Position::new(line.saturating_sub(1), column.saturating_sub(1)))
}

/// Paste command failure.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum PasteCommandError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: EditorError,
    },

    #[error(transparent)]
    Paste(#[from] PasteError),
}

/// Opens `file` and runs the paste command against it.
///
/// # Errors
/// Returns error if the document cannot be opened or nothing was inserted.
pub async fn paste(
    context: &AppContext,
    file: &Path,
    cursor: Option<Position>,
) -> Result<PasteOutcome, PasteCommandError> {
    let document =
        FileDocument::open(file, cursor)
            .await
            .map_err(|source| PasteCommandError::Open {
                path: file.to_path_buf(),
                source,
            })?;
    Ok(context.paste_image(Some(&document)).await?)
}

/// Runs `command` and reports its result on the console.
pub async fn execute(command: Command, context: &AppContext, config_path: &Path) -> ExitCode {
    match command {
        Command::Paste { file, line, column } => {
            let cursor = cursor_from_args(line, column);
            match paste(context, &file, cursor).await {
                Ok(outcome) => {
                    info!(
                        path = %file.display(),
                        position = %outcome.position,
                        link = %outcome.image.link,
                        "Image link inserted"
                    );
                    println!("{}", outcome.image.link);
                    ExitCode::SUCCESS
                }
                Err(e @ PasteCommandError::Open { .. }) => {
                    error!(error = %e, "Failed to open document");
                    eprintln!("error: {e}");
                    ExitCode::FAILURE
                }
                Err(PasteCommandError::Paste(PasteError::Editor(e))) => {
                    error!(path = %file.display(), error = %e, "Failed to edit document");
                    eprintln!("error: {}: {e}", file.display());
                    ExitCode::FAILURE
                }
                Err(PasteCommandError::Paste(e)) if e.is_informational() => {
                    debug!(reason = %e, "Paste skipped");
                    ExitCode::FAILURE
                }
                Err(PasteCommandError::Paste(e)) => {
                    error!(error = %e, "Paste failed");
                    ExitCode::FAILURE
                }
            }
        }
        Command::Logout => match context.logout().await {
            Ok(()) => {
                eprintln!("Stored Imgur tokens removed.");
                ExitCode::SUCCESS
            }
            Err(e) => {
                error!(error = %e, "Logout failed");
                eprintln!("error: {e}");
                ExitCode::FAILURE
            }
        },
        Command::ConfigPath => {
            println!("{}", config_path.display());
            ExitCode::SUCCESS
        }
    }
}

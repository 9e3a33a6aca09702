//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Answer confirmation requests from the view models, either by prompting
//!   on the terminal or by accepting everything (`--force`).
//!
//! Does NOT handle:
//! - Deciding which operations need confirmation (the view models ask).

use niord_admin::Confirm;

/// How destructive operations are confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePrompt {
    /// Accept without asking
    Force,
    /// Ask on the terminal, defaulting to "no"
    Ask,
}

impl DeletePrompt {
    pub fn from_force(force: bool) -> Self {
        if force { Self::Force } else { Self::Ask }
    }
}

impl Confirm for DeletePrompt {
    async fn confirm(&self, title: &str, message: &str) -> bool {
        match self {
            Self::Force => true,
            Self::Ask => {
                let prompt = message.to_string();
                eprintln!("{}", title);
                let answer = tokio::task::spawn_blocking(move || {
                    dialoguer::Confirm::new()
                        .with_prompt(prompt)
                        .default(false)
                        .interact()
                })
                .await;
                match answer {
                    Ok(Ok(confirmed)) => confirmed,
                    Ok(Err(e)) => {
                        tracing::debug!(error = %e, "Confirmation prompt failed");
                        false
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, "Confirmation task failed");
                        false
                    }
                }
            }
        }
    }
}

//! Clipboard helper — copies a generated post to the system clipboard.
//!
//! The system backend pipes text into the platform's copy command
//! (`pbcopy`, `clip`, `wl-copy`, `xclip`, `xsel`), trying each candidate in order.

pub mod handlers;

use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard command available")]
    Unavailable,

    #[error("clipboard command `{program}` failed: {reason}")]
    Command { program: String, reason: String },
}

#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A copy command and its arguments.
#[derive(Debug, Clone)]
pub struct CopyCommand {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

#[cfg(target_os = "macos")]
const CANDIDATES: &[CopyCommand] = &[CopyCommand {
    program: "pbcopy",
    args: &[],
}];

#[cfg(target_os = "windows")]
const CANDIDATES: &[CopyCommand] = &[CopyCommand {
    program: "clip",
    args: &[],
}];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const CANDIDATES: &[CopyCommand] = &[
    CopyCommand {
        program: "wl-copy",
        args: &[],
    },
    CopyCommand {
        program: "xclip",
        args: &["-selection", "clipboard"],
    },
    CopyCommand {
        program: "xsel",
        args: &["--clipboard", "--input"],
    },
];

pub struct SystemClipboard {
    candidates: Vec<CopyCommand>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self {
            candidates: CANDIDATES.to_vec(),
        }
    }
}

impl SystemClipboard {
    #[cfg(test)]
    pub fn with_commands(candidates: Vec<CopyCommand>) -> Self {
        Self { candidates }
    }

    async fn run(command: &CopyCommand, text: &str) -> Result<(), ClipboardError> {
        let failed = |reason: String| ClipboardError::Command {
            program: command.program.to_string(),
            reason,
        };

        let mut child = Command::new(command.program)
            .args(command.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| failed(e.to_string()))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| failed(e.to_string()))?;
        }

        let status = child.wait().await.map_err(|e| failed(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(failed(format!("exited with {status}")))
        }
    }
}

#[async_trait]
impl Clipboard for SystemClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_error = ClipboardError::Unavailable;
        for command in &self.candidates {
            match Self::run(command, text).await {
                Ok(()) => {
                    debug!("Copied {} bytes via {}", text.len(), command.program);
                    return Ok(());
                }
                Err(e) => last_error = e,
            }
        }
        Err(last_error)
    }
}

#[cfg(test)]
pub mod testing {
    use std::sync::Mutex;

    use super::*;

    /// Records copied text; optionally fails every write.
    #[derive(Default)]
    pub struct RecordingClipboard {
        pub copied: Mutex<Vec<String>>,
        pub fail: bool,
    }

    impl RecordingClipboard {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl Clipboard for RecordingClipboard {
        async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            if self.fail {
                return Err(ClipboardError::Unavailable);
            }
            self.copied.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }
}

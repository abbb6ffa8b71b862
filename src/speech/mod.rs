//! # Speech
//!
//! Reads headwords aloud. The caller never learns whether it worked:
//! `speak()` returns immediately and failures only reach the log.
//!
//! Playback is delegated to an external program (`espeak-ng`, `say`, ...)
//! with the word appended as the last argument. Voices are always U.S.
//! English.

use std::process::Stdio;

use log::{debug, info, warn};

/// Language tag used for all playback.
pub const SPEECH_LANGUAGE: &str = "en-US";

pub trait SpeechEngine: Send + Sync {
    fn name(&self) -> &str;

    /// Start speaking `text`. Fire-and-forget.
    fn speak(&self, text: &str);
}

/// Runs a text-to-speech program as a detached child process.
pub struct CommandSpeech {
    program: String,
    args: Vec<String>,
}

impl CommandSpeech {
    pub fn new(program: String, args: Vec<String>) -> Self {
        Self { program, args }
    }

    /// Full argument list for one utterance.
    fn command_args(&self, text: &str) -> Vec<String> {
        let mut args = self.args.clone();
        args.push(text.to_string());
        args
    }
}

impl SpeechEngine for CommandSpeech {
    fn name(&self) -> &str {
        &self.program
    }

    fn speak(&self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        info!("Speaking '{}' via {} ({})", text, self.program, SPEECH_LANGUAGE);

        let mut command = tokio::process::Command::new(&self.program);
        command
            .args(self.command_args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => {
                warn!("Failed to start speech program '{}': {}", self.program, e);
                return;
            }
        };

        // Reap the child so it does not linger as a zombie
        let program = self.program.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if status.success() => debug!("{} finished", program),
                Ok(status) => warn!("{} exited with {}", program, status),
                Err(e) => warn!("Failed to wait for {}: {}", program, e),
            }
        });
    }
}

/// Speech disabled.
pub struct SilentSpeech;

impl SpeechEngine for SilentSpeech {
    fn name(&self) -> &str {
        "silent"
    }

    fn speak(&self, text: &str) {
        debug!("Speech disabled, not speaking '{}'", text);
    }
}

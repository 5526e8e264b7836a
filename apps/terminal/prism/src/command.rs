//! Line commands typed at the prompt and how each one drives the shell.

use client_core::shell::{IgnoreReason, SubmitOutcome};
use client_core::ShellHandle;

use models::{ModelTier, TargetLanguage};

use std::path::PathBuf;
use std::str::FromStr;

use log::debug;

pub const HELP_TEXT: &str = "\
<text>            set the input and translate it
:send             translate the current input or attachment
:lang             switch page language (VI/EN)
:targets          show or hide the target-language list
:target <code>    choose the target language (vi, en, zh, ja, ko, fr, de, es, th)
:model            show or hide the model list
:model <tier>     choose standard or advanced
:attach <path>    attach a .txt, .pdf or .docx file
:detach           remove the attachment
:clear            clear the input
:help             show this help
:quit             exit";

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Translate(String),
    Send,
    ToggleUiLanguage,
    ToggleTargets,
    Target(String),
    ToggleModels,
    Model(String),
    Attach(PathBuf),
    Detach,
    Clear,
    Help,
    Quit,
    Unknown(String),
}

/// What the prompt loop should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    /// Re-render, optionally printing a one-off line first.
    Continue(Option<String>),
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return None;
        }

        let Some(rest) = line.trim_start().strip_prefix(':') else {
            return Some(Command::Translate(line.to_string()));
        };

        let (name, argument) = match rest.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (rest, ""),
        };

        let command = match (name, argument.is_empty()) {
            ("send", _) => Command::Send,
            ("lang", _) => Command::ToggleUiLanguage,
            ("targets", _) => Command::ToggleTargets,
            ("target", false) => Command::Target(argument.to_string()),
            ("target", true) => Command::ToggleTargets,
            ("model", true) => Command::ToggleModels,
            ("model", false) => Command::Model(argument.to_string()),
            ("attach", false) => Command::Attach(PathBuf::from(argument)),
            ("detach", _) => Command::Detach,
            ("clear", _) => Command::Clear,
            ("help" | "h" | "?", _) => Command::Help,
            ("quit" | "q" | "exit", _) => Command::Quit,
            _ => Command::Unknown(line.trim().to_string()),
        };

        Some(command)
    }
}

/// Apply a command to the shell, sending a request when it asks for one.
pub async fn execute(handle: &ShellHandle, command: Command) -> Flow {
    debug!("Executing {command:?}");

    match command {
        Command::Translate(text) => {
            handle.update(|shell| shell.set_input(text)).await;
            submit(handle).await
        }
        Command::Send => submit(handle).await,
        Command::ToggleUiLanguage => {
            handle.update(|shell| shell.toggle_ui_language()).await;
            Flow::Continue(None)
        }
        Command::ToggleTargets => {
            handle.update(|shell| shell.toggle_language_dropdown()).await;
            Flow::Continue(None)
        }
        Command::Target(code) => match TargetLanguage::from_str(&code) {
            Ok(language) => {
                handle
                    .update(|shell| shell.select_target_language(language))
                    .await;
                Flow::Continue(None)
            }
            Err(_) => Flow::Continue(Some(format!("Unknown language code: {code}"))),
        },
        Command::ToggleModels => {
            handle.update(|shell| shell.toggle_model_dropdown()).await;
            Flow::Continue(None)
        }
        Command::Model(name) => match ModelTier::from_str(&name) {
            Ok(tier) => {
                handle.update(|shell| shell.select_model(tier)).await;
                Flow::Continue(None)
            }
            Err(_) => Flow::Continue(Some(format!("Unknown model tier: {name}"))),
        },
        Command::Attach(path) => {
            handle.attach_path(&path).await;
            Flow::Continue(None)
        }
        Command::Detach => {
            handle.update(|shell| shell.remove_attachment()).await;
            Flow::Continue(None)
        }
        Command::Clear => {
            handle.update(|shell| shell.clear_input()).await;
            Flow::Continue(None)
        }
        Command::Help => Flow::Continue(Some(HELP_TEXT.to_string())),
        Command::Quit => Flow::Quit,
        Command::Unknown(line) => Flow::Continue(Some(format!(
            "Unknown command: {line} (type :help)"
        ))),
    }
}

async fn submit(handle: &ShellHandle) -> Flow {
    match handle.submit().await {
        SubmitOutcome::Ignored(IgnoreReason::EmptyInput) => {
            let strings = handle.snapshot().await.strings();
            Flow::Continue(Some(strings.messages.empty_input.to_string()))
        }
        _ => Flow::Continue(None),
    }
}

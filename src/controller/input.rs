//! Key event handling

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::{Catalog, Playback};
use crate::view::Presenter;
use super::AppController;

/// What a key press outside the command line asks for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Run a command line
    Dispatch(String),
    /// Open the command line pre-filled with the given text
    OpenCommandLine(&'static str),
}

/// Map a key to its command. Unbound keys give `None`.
pub fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    let command = match key.code {
        KeyCode::Char(':') => return Some(KeyAction::OpenCommandLine("")),
        KeyCode::Char('s') => return Some(KeyAction::OpenCommandLine("search ")),
        KeyCode::Char(c) if c.is_ascii_digit() => return Some(KeyAction::Dispatch(format!("pi {}", c))),
        KeyCode::Char('p') => "pp",
        KeyCode::Char('P') => "pl",
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => "q",
        KeyCode::Char('c') => "s",
        KeyCode::Char('x') => "cq",
        KeyCode::Char('f') => "pn",
        KeyCode::Char('b') => "b",
        KeyCode::Char('r') => "r",
        KeyCode::Char('q') => "q",
        KeyCode::Char('j') | KeyCode::Down => "sd",
        KeyCode::Char('k') | KeyCode::Up => "su",
        KeyCode::Char('l') => "os",
        KeyCode::Char('a') => "aap",
        KeyCode::Char('=') | KeyCode::Char('+') => "vu",
        KeyCode::Char('-') => "vd",
        KeyCode::Esc => "c",
        KeyCode::Enter => "asp",
        KeyCode::Left => "sl",
        KeyCode::Right => "sr",
        KeyCode::Tab => "tqf",
        KeyCode::Backspace => "rfq",
        _ => return None,
    };
    Some(KeyAction::Dispatch(command.to_string()))
}

impl<C: Catalog, P: Playback, Pr: Presenter> AppController<C, P, Pr> {
    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // The command line takes every key while open
        if let Some(line) = self.command_line.as_mut() {
            match key.code {
                KeyCode::Enter => {
                    let line = std::mem::take(line);
                    self.command_line = None;
                    self.dispatch(&line).await;
                }
                KeyCode::Esc => {
                    self.command_line = None;
                }
                KeyCode::Backspace => {
                    line.pop();
                }
                KeyCode::Char(c) => {
                    line.push(c);
                }
                _ => {}
            }
            return;
        }

        match key_action(&key) {
            Some(KeyAction::Dispatch(line)) => self.dispatch(&line).await,
            Some(KeyAction::OpenCommandLine(prefill)) => {
                self.command_line = Some(prefill.to_string());
            }
            None => {}
        }
    }
}

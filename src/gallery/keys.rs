//! Keyboard shortcuts.

use crate::models::{handle::ObjectStore, view::Status, CardId};

use super::GalleryController;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Delete,
    Backspace,
    Char(char),
}

/// Where keyboard focus was when the key went down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    /// The user is typing in the URL field.
    UrlInput,
    Card(CardId),
    #[default]
    Elsewhere,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    /// Whether Ctrl was held.
    pub ctrl: bool,
    pub focus: Focus,
}

impl KeyPress {
    pub fn new(key: Key, focus: Focus) -> Self {
        Self {
            key,
            ctrl: false,
            focus,
        }
    }

    pub fn with_ctrl(key: Key, focus: Focus) -> Self {
        Self {
            key,
            ctrl: true,
            focus,
        }
    }
}

/// What the host should do after a key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The controller took care of it.
    Handled,
    /// The host should open its file chooser (and swallow the key).
    OpenFilePicker,
    Ignored,
}

impl<S: ObjectStore> GalleryController<S> {
    /// Dispatches a key press.
    ///
    /// Failures are only ever reported through the status line.
    #[tracing::instrument(skip(self))]
    pub async fn handle_key(&mut self, press: KeyPress) -> KeyOutcome {
        let typing = press.focus == Focus::UrlInput;

        match press.key {
            Key::Char('o' | 'O') if press.ctrl => KeyOutcome::OpenFilePicker,

            Key::Enter => match press.focus {
                Focus::UrlInput => {
                    if let Err(e) = self.submit_url_input() {
                        tracing::debug!("enter didn't add an image: {e}");
                    }
                    KeyOutcome::Handled
                }
                Focus::Card(id) => {
                    if let Err(e) = self.select(id) {
                        tracing::warn!("enter on a card that can't be selected: {e}");
                    }
                    KeyOutcome::Handled
                }
                Focus::Elsewhere => KeyOutcome::Ignored,
            },

            Key::Escape => {
                self.clear_selection();
                self.status = Status::info("Selection cleared (Esc).");
                KeyOutcome::Handled
            }

            // backspace is for editing while typing
            Key::Backspace if typing => KeyOutcome::Ignored,
            Key::Delete | Key::Backspace => {
                self.delete_selected().await;
                KeyOutcome::Handled
            }

            Key::Char(_) => KeyOutcome::Ignored,
        }
    }
}

//! What a renderer needs to draw the gallery.

use super::{
    card::{Card, CardState},
    CardId,
};

/// A description of one card, ready to be drawn.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CardView {
    pub id: CardId,
    /// The image to show. After a load failure, this is the placeholder.
    pub src: String,
    pub caption: String,
    pub selected: bool,
    pub state: CardState,
}

impl CardView {
    pub(crate) fn new(card: &Card, placeholder: &str) -> Self {
        let src = match card.state() {
            CardState::LoadFailed => placeholder.to_string(),
            _ => card.source().to_string(),
        };

        Self {
            id: card.id(),
            src,
            caption: card.caption().to_string(),
            selected: card.is_selected(),
            state: card.state(),
        }
    }
}

/// How bad a status message is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub enum StatusLevel {
    #[default]
    Info,
    Error,
}

/// The line of text telling the user what just happened.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Status {
    pub message: String,
    pub level: StatusLevel,
}

impl Status {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Info,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: StatusLevel::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}

use core::fmt;

use super::{handle::LocalHandle, CardId};

pub const CAPTION_IDLE: &str = "Click to select";
pub const CAPTION_LOAD_FAILED: &str = "Could not load (blocked or invalid URL)";

/// Where a card is in its life.
///
/// Cards only ever move forward:
/// `Adding -> Displayed -> (LoadFailed) -> Removing -> Discarded`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum CardState {
    /// Just inserted. The entry transition is still playing.
    Adding,
    Displayed,
    /// The image couldn't be fetched, so a placeholder is shown instead.
    LoadFailed,
    /// Deletion has started. The card is about to go away.
    Removing,
    Discarded,
}

impl CardState {
    /// Whether a card in this state may move to `next`.
    pub const fn can_become(self, next: CardState) -> bool {
        use CardState::*;

        matches!(
            (self, next),
            (Adding, Displayed)
                | (Displayed, LoadFailed)
                | (Displayed, Removing)
                | (LoadFailed, Removing)
                | (Removing, Discarded)
        )
    }

    /// Cards that are leaving (or gone) can't be interacted with anymore.
    pub const fn is_leaving(self) -> bool {
        matches!(self, CardState::Removing | CardState::Discarded)
    }
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardState::Adding => write!(f, "adding"),
            CardState::Displayed => write!(f, "displayed"),
            CardState::LoadFailed => write!(f, "load-failed"),
            CardState::Removing => write!(f, "removing"),
            CardState::Discarded => write!(f, "discarded"),
        }
    }
}

/// One image entry in the gallery.
#[derive(Debug)]
pub struct Card {
    id: CardId,

    /// The locator the image is displayed from. For uploaded files, this is
    /// the handle's `blob:` locator.
    source: String,

    /// Present only for uploaded files. Released when the card is discarded.
    handle: Option<LocalHandle>,

    /// Name of the uploaded file, if the card came from one.
    file_name: Option<String>,

    caption: String,
    selected: bool,
    state: CardState,
}

impl Card {
    /// Creates a card for an external locator.
    pub fn remote(source: impl Into<String>) -> Self {
        Self::new(source.into(), None, None)
    }

    /// Creates a card that owns a local handle.
    pub fn local(handle: LocalHandle, file_name: impl Into<String>) -> Self {
        let source = handle.locator().to_string();
        Self::new(source, Some(handle), Some(file_name.into()))
    }

    fn new(source: String, handle: Option<LocalHandle>, file_name: Option<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            source,
            handle,
            file_name,
            caption: CAPTION_IDLE.to_string(),
            selected: false,
            state: CardState::Adding,
        }
    }

    pub fn id(&self) -> CardId {
        self.id
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    /// Whether this card owns a local handle that hasn't been released yet.
    pub fn has_local_handle(&self) -> bool {
        self.handle.is_some()
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub(crate) fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Moves the card to `next`, refusing any edge that isn't allowed.
    pub(crate) fn advance(&mut self, next: CardState) -> Result<(), (CardState, CardState)> {
        if !self.state.can_become(next) {
            return Err((self.state, next));
        }

        tracing::trace!("card `{}`: {} -> {next}", self.id, self.state);
        self.state = next;
        Ok(())
    }

    /// Hands the local handle over for release.
    ///
    /// Only possible while removing, so the handle can't go away early.
    pub(crate) fn take_handle(&mut self) -> Option<LocalHandle> {
        if self.state != CardState::Removing {
            return None;
        }
        self.handle.take()
    }
}

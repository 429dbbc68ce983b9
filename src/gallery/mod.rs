//! The gallery controller.
//!
//! It owns every card, the selection, the URL field's text and the status
//! line. Hosts forward UI events to it and draw whatever [`views`] returns.
//!
//! [`views`]: GalleryController::views

use crate::{
    config::Config,
    error::{GalleryError, ValidationError},
    models::{
        card::{Card, CardState, CAPTION_LOAD_FAILED},
        file::LocalFile,
        handle::{MemoryObjectStore, ObjectStore},
        view::{CardView, Status},
        CardId,
    },
};

pub mod keys;
pub mod locator;

/// Manages the cards inside one gallery container.
#[derive(Debug)]
pub struct GalleryController<S: ObjectStore = MemoryObjectStore> {
    config: Config,
    store: S,

    /// Newest first.
    cards: Vec<Card>,

    /// Not an owner. Always cleared when the card it points at goes away.
    selection: Option<CardId>,

    /// Mirror of the URL text field.
    url_input: String,

    status: Status,
}

impl GalleryController<MemoryObjectStore> {
    /// Creates a controller that keeps uploaded files in memory.
    pub fn new(config: Config) -> Self {
        Self::with_store(config, MemoryObjectStore::new())
    }
}

impl<S: ObjectStore> GalleryController<S> {
    /// Creates a controller and seeds it with the configured default images.
    #[tracing::instrument(skip_all)]
    pub fn with_store(config: Config, store: S) -> Self {
        let cards = config
            .default_images
            .iter()
            .map(|locator| Card::remote(locator.as_str()))
            .collect::<Vec<_>>();
        tracing::debug!("seeded gallery with {} default images", cards.len());

        Self {
            config,
            store,
            cards,
            selection: None,
            url_input: String::new(),
            status: Status::info("Ready. Click an image to select it."),
        }
    }

    /// Adds a card for the image at `raw`, at the front of the gallery.
    #[tracing::instrument(skip(self))]
    pub fn add_from_url(&mut self, raw: &str) -> Result<CardId, ValidationError> {
        let locator = locator::validate(raw)
            .inspect_err(|e| self.status = Status::error(e.to_string()))?;

        let id = self.insert(Card::remote(locator));
        self.status = Status::info("Image added.");
        Ok(id)
    }

    /// Adds a card for an uploaded file, at the front of the gallery.
    ///
    /// The file's bytes are kept in the store until the card is deleted.
    #[tracing::instrument(skip(self, file), fields(name = file.name()))]
    pub fn add_from_file(&mut self, file: &LocalFile) -> Result<CardId, ValidationError> {
        if !file.is_image() {
            let e = ValidationError::NotAnImage {
                name: file.name().to_string(),
                media_type: file.media_type().unwrap_or("unknown").to_string(),
            };
            tracing::debug!("refusing upload: {e}");
            self.status = Status::error(e.to_string());
            return Err(e);
        }

        let handle = self.store.create(file);
        let id = self.insert(Card::local(handle, file.name()));
        self.status = Status::info(format!("Local image added ({}).", file.name()));
        Ok(id)
    }

    fn insert(&mut self, card: Card) -> CardId {
        let id = card.id();
        self.cards.insert(0, card);
        tracing::debug!("inserted card `{id}`. count: {}", self.cards.len());
        id
    }

    /// Selects `id`, unselecting whatever was selected before.
    #[tracing::instrument(skip(self))]
    pub fn select(&mut self, id: CardId) -> Result<(), GalleryError> {
        let idx = self
            .position(id)
            .filter(|&i| !self.cards[i].state().is_leaving())
            .ok_or(GalleryError::UnknownCard(id))?;

        if let Some(prev) = self.selection.take() {
            if let Some(card) = self.card_mut(prev) {
                card.set_selected(false);
            }
        }

        self.cards[idx].set_selected(true);
        self.selection = Some(id);
        Ok(())
    }

    /// Unselects the current selection, if there is one.
    pub fn clear_selection(&mut self) {
        if let Some(prev) = self.selection.take() {
            tracing::debug!("cleared selection of `{prev}`");
            if let Some(card) = self.card_mut(prev) {
                card.set_selected(false);
            }
        }
    }

    /// Deletes the selected card.
    ///
    /// The removal transition plays for the configured delay before the card
    /// is discarded. Its local handle, if any, is released right before that.
    /// Returns the id of the removed card, or `None` if nothing was selected.
    ///
    /// If an earlier call was dropped mid-transition, its card is still
    /// `Removing`. Those cards are discarded first, without waiting again.
    #[tracing::instrument(skip(self))]
    pub async fn delete_selected(&mut self) -> Option<CardId> {
        let finished = self.finish_removals();
        if let Some(id) = self.selection.filter(|id| finished.contains(id)) {
            self.selection = None;
            self.status = Status::info("Image deleted.");
            return Some(id);
        }

        let Some(id) = self.selection else {
            self.status = Status::info("No image is selected.");
            return None;
        };

        let Some(idx) = self.position(id) else {
            tracing::warn!("selection pointed at a missing card `{id}`");
            self.selection = None;
            self.status = Status::info("No image is selected.");
            return None;
        };

        {
            let card = &mut self.cards[idx];

            // the entry transition might still be playing. it ends here.
            if card.state() == CardState::Adding {
                let _ = card.advance(CardState::Displayed);
            }
            if let Err((from, to)) = card.advance(CardState::Removing) {
                tracing::warn!("card `{id}` can't be removed from `{from}` (to `{to}`)");
                self.status = Status::error("The selected image can't be deleted.");
                return None;
            }
        }

        tokio::time::sleep(self.config.removal_delay()).await;

        self.finish_removals();
        self.selection = None;
        self.status = Status::info("Image deleted.");
        tracing::debug!("discarded card `{id}`. count: {}", self.cards.len());

        Some(id)
    }

    /// Discards every card that's `Removing`, releasing its local handle.
    ///
    /// Returns the ids that were discarded.
    fn finish_removals(&mut self) -> Vec<CardId> {
        let mut finished = Vec::new();

        while let Some(idx) = self
            .cards
            .iter()
            .position(|c| c.state() == CardState::Removing)
        {
            let mut card = self.cards.remove(idx);
            if let Some(handle) = card.take_handle() {
                self.store.revoke(handle);
            }
            let _ = card.advance(CardState::Discarded);

            tracing::debug!("finished removing card `{}`", card.id());
            finished.push(card.id());
        }

        finished
    }

    /// The host finished playing a card's entry transition.
    ///
    /// Hosts schedule this for [`Config::adding_delay`] after the card shows
    /// up in [`views`](Self::views).
    pub fn mark_displayed(&mut self, id: CardId) -> Result<(), GalleryError> {
        let card = self.card_mut(id).ok_or(GalleryError::UnknownCard(id))?;
        card.advance(CardState::Displayed)
            .map_err(|(from, to)| GalleryError::InvalidTransition { id, from, to })
    }

    /// The host couldn't fetch a card's image.
    ///
    /// The card falls back to the placeholder and the status explains why.
    /// Nothing is retried.
    #[tracing::instrument(skip(self))]
    pub fn report_load_failure(&mut self, id: CardId) -> Result<(), GalleryError> {
        let card = self.card_mut(id).ok_or(GalleryError::UnknownCard(id))?;

        // images can fail before the entry transition is over
        if card.state() == CardState::Adding {
            let _ = card.advance(CardState::Displayed);
        }
        card.advance(CardState::LoadFailed)
            .map_err(|(from, to)| GalleryError::InvalidTransition { id, from, to })?;
        card.set_caption(CAPTION_LOAD_FAILED);

        tracing::info!("image for card `{id}` failed to load");
        self.status = Status::error(
            "Could not load the image. Some sites block hotlinking. \
             Try another URL or upload a local file.",
        );
        Ok(())
    }

    /// Mirrors the URL field and gives soft feedback as the user types.
    pub fn set_url_input(&mut self, text: impl Into<String>) {
        self.url_input = text.into();
        let locator = locator::normalize(&self.url_input);

        self.status = if locator.is_empty() {
            Status::default()
        } else if !locator::is_http_url(&locator) {
            Status::error("The URL looks invalid (it must be http/https).")
        } else {
            Status::info("Valid URL (press Enter to add).")
        };
    }

    /// Adds whatever is in the URL field, clearing it on success.
    pub fn submit_url_input(&mut self) -> Result<CardId, ValidationError> {
        let raw = std::mem::take(&mut self.url_input);
        self.add_from_url(&raw)
            .inspect_err(|_| self.url_input = raw.clone())
    }

    pub fn clear_url_input(&mut self) {
        self.url_input.clear();
        self.status = Status::info("Field cleared.");
    }

    /// A click landed outside every card and control panel.
    pub fn click_outside(&mut self) {
        self.clear_selection();
    }
}

// read side
impl<S: ObjectStore> GalleryController<S> {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The count, as shown next to the gallery.
    pub fn count_label(&self) -> String {
        match self.cards.len() {
            1 => "1 image".to_string(),
            n => format!("{n} images"),
        }
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn selection(&self) -> Option<CardId> {
        self.selection
    }

    /// Deleting only makes sense with something selected.
    pub fn delete_enabled(&self) -> bool {
        self.selection.is_some()
    }

    pub fn url_input(&self) -> &str {
        &self.url_input
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id() == id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Every card, newest first, ready to be drawn.
    pub fn views(&self) -> Vec<CardView> {
        self.cards
            .iter()
            .map(|c| CardView::new(c, &self.config.placeholder_url))
            .collect()
    }

    fn position(&self, id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id() == id)
    }

    fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| c.id() == id)
    }
}

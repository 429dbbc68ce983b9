//! Types that are really the bedrock of the gallery.

pub mod card;
pub mod file;
pub mod handle;
pub mod view;

/// Identifies a card for as long as it lives in the gallery.
pub type CardId = uuid::Uuid;

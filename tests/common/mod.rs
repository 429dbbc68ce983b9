//! The parent of the other tests.
//!
//! Mostly to import the setup stuff below.

use showcase::{
    config::Config,
    gallery::GalleryController,
    models::{file::LocalFile, handle::MemoryObjectStore},
};

/// call this at the top of any new test func! :)
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn setup() {
    // every test in a binary shares one subscriber, so later inits just fail
    _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// A config without the default images, so galleries start out empty.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn empty_config() -> Config {
    let mut conf = Config::default();
    conf.default_images.clear();
    conf
}

#[allow(dead_code, reason = "it's used in the other tests")]
pub fn empty_gallery() -> GalleryController<MemoryObjectStore> {
    setup();
    GalleryController::new(empty_config())
}

/// A tiny "PNG" upload. The bytes don't matter, only the declared type.
#[allow(dead_code, reason = "it's used in the other tests")]
pub fn png_file(name: &str) -> LocalFile {
    LocalFile::new(name, Some("image/png"), vec![0x89, b'P', b'N', b'G'])
}

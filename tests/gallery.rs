//! Tests the gallery controller, from adding cards all the way to discarding
//! them.

mod common;

#[cfg(test)]
mod tests {
    use showcase::{
        config::Config,
        error::{GalleryError, ValidationError},
        gallery::GalleryController,
        models::{
            card::{CardState, CAPTION_LOAD_FAILED},
            file::LocalFile,
            view::StatusLevel,
        },
    };

    use crate::common::{empty_gallery, png_file, setup};

    /// Walks through the whole add/select/delete story.
    #[tokio::test(start_paused = true)]
    async fn add_select_delete_scenario() {
        let mut gallery = empty_gallery();

        // add from a url
        let url_id = gallery
            .add_from_url("https://example.com/a.png")
            .expect("url should be accepted");
        assert_eq!(gallery.count(), 1);
        assert_eq!(gallery.cards()[0].source(), "https://example.com/a.png");
        assert_eq!(gallery.cards()[0].id(), url_id);

        // then from a file. it goes in front
        let file_id = gallery
            .add_from_file(&png_file("cat.png"))
            .expect("png should be accepted");
        assert_eq!(gallery.count(), 2);
        assert_eq!(gallery.cards()[0].id(), file_id, "newest first");

        let blob = gallery.cards()[0].source().to_string();
        assert!(blob.starts_with("blob:"), "file cards show their handle");
        assert!(gallery.store().is_live(&blob));

        // select + delete it
        gallery.select(file_id).unwrap();
        assert!(gallery.delete_enabled());

        let removed = gallery.delete_selected().await;
        assert_eq!(removed, Some(file_id));
        assert_eq!(gallery.count(), 1);
        assert_eq!(gallery.selection(), None);
        assert!(!gallery.delete_enabled());

        // the handle is gone, exactly once
        assert!(!gallery.store().is_live(&blob));
        assert_eq!(gallery.store().revocations(&blob), 1);
        assert_eq!(gallery.cards()[0].id(), url_id);
        assert_eq!(gallery.status().message, "Image deleted.");
    }

    #[test]
    fn good_urls_go_in_front() {
        let mut gallery = empty_gallery();

        for (i, url) in [
            "http://example.com",
            "https://example.com/a.png",
            "  https://picsum.photos/800/500  ",
            "https://example.com/with\u{00A0}nbsp.jpg",
        ]
        .into_iter()
        .enumerate()
        {
            let id = gallery.add_from_url(url).expect("should be accepted");
            assert_eq!(gallery.count(), i + 1, "count grows by one: {url}");
            assert_eq!(gallery.cards()[0].id(), id, "new card is first: {url}");
            assert_eq!(gallery.status().level, StatusLevel::Info);
        }

        assert_eq!(
            gallery.cards()[0].source(),
            "https://example.com/withnbsp.jpg"
        );
        assert_eq!(gallery.cards()[1].source(), "https://picsum.photos/800/500");
    }

    #[test]
    fn bad_urls_change_nothing() {
        let mut gallery = empty_gallery();
        gallery.add_from_url("https://example.com/keep.png").unwrap();

        for url in ["", "   ", "\u{00A0}", "example.com", "ftp://x.org/a.png", "https://"] {
            let res = gallery.add_from_url(url);
            assert!(res.is_err(), "`{url}` should be refused");
            assert_eq!(gallery.count(), 1, "count unchanged: `{url}`");
            assert!(gallery.status().is_error(), "error status: `{url}`");
        }

        assert!(matches!(
            gallery.add_from_url(" "),
            Err(ValidationError::EmptyLocator)
        ));
        assert!(matches!(
            gallery.add_from_url("nope"),
            Err(ValidationError::MalformedLocator(_))
        ));
    }

    #[test]
    fn non_images_are_refused() {
        let mut gallery = empty_gallery();

        let pdf = LocalFile::new("notes.pdf", Some("application/pdf"), vec![1, 2]);
        let untyped = LocalFile::new("mystery", None, vec![1, 2]);

        for file in [pdf, untyped] {
            let res = gallery.add_from_file(&file);
            assert!(matches!(res, Err(ValidationError::NotAnImage { .. })));
        }

        assert_eq!(gallery.count(), 0);
        assert_eq!(gallery.store().live_count(), 0, "no handles were minted");
        assert!(gallery.status().is_error());
    }

    #[test]
    fn file_status_mentions_name() {
        let mut gallery = empty_gallery();
        gallery.add_from_file(&png_file("holiday.png")).unwrap();

        assert!(gallery.status().message.contains("holiday.png"));
        assert_eq!(gallery.cards()[0].file_name(), Some("holiday.png"));
        assert!(gallery.cards()[0].has_local_handle());
    }

    #[test]
    fn only_one_selection() {
        let mut gallery = empty_gallery();
        let a = gallery.add_from_url("https://example.com/a.png").unwrap();
        let b = gallery.add_from_url("https://example.com/b.png").unwrap();

        gallery.select(a).unwrap();
        gallery.select(b).unwrap();

        let selected = gallery
            .cards()
            .iter()
            .filter(|c| c.is_selected())
            .map(|c| c.id())
            .collect::<Vec<_>>();
        assert_eq!(selected, vec![b]);
        assert_eq!(gallery.selection(), Some(b));

        gallery.clear_selection();
        assert!(gallery.cards().iter().all(|c| !c.is_selected()));
        assert!(!gallery.delete_enabled());
    }

    #[test]
    fn selecting_unknown_cards_fails() {
        let mut gallery = empty_gallery();
        let ghost = uuid::Uuid::new_v4();

        assert!(matches!(
            gallery.select(ghost),
            Err(GalleryError::UnknownCard(id)) if id == ghost
        ));
        assert_eq!(gallery.selection(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn delete_without_selection_is_informational() {
        let mut gallery = empty_gallery();
        gallery.add_from_url("https://example.com/a.png").unwrap();

        assert_eq!(gallery.delete_selected().await, None);
        assert_eq!(gallery.count(), 1);
        assert_eq!(gallery.status().level, StatusLevel::Info);
        assert_eq!(gallery.status().message, "No image is selected.");
    }

    #[tokio::test(start_paused = true)]
    async fn delete_waits_for_the_transition() {
        let mut gallery = empty_gallery();
        let id = gallery.add_from_url("https://example.com/a.png").unwrap();
        gallery.select(id).unwrap();

        let start = tokio::time::Instant::now();
        gallery.delete_selected().await;

        assert!(start.elapsed() >= gallery.config().removal_delay());
        assert_eq!(gallery.count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_delete_finishes_on_retry() {
        let mut gallery = empty_gallery();
        let keep = gallery.add_from_url("https://example.com/keep.png").unwrap();
        let id = gallery.add_from_file(&png_file("cat.png")).unwrap();
        gallery.mark_displayed(id).unwrap();
        let blob = gallery.cards()[0].source().to_string();
        gallery.select(id).unwrap();

        // the host gives up before the removal transition is over
        let res = tokio::time::timeout(
            std::time::Duration::from_millis(10),
            gallery.delete_selected(),
        )
        .await;
        assert!(res.is_err(), "the delete should've been cut short");
        assert_eq!(gallery.card(id).map(|c| c.state()), Some(CardState::Removing));

        gallery.set_url_input("not a url");

        // trying again discards it, without waiting a second time
        let start = tokio::time::Instant::now();
        assert_eq!(gallery.delete_selected().await, Some(id));
        assert_eq!(start.elapsed(), std::time::Duration::ZERO);

        assert_eq!(gallery.count(), 1);
        assert_eq!(gallery.cards()[0].id(), keep);
        assert_eq!(gallery.selection(), None);
        assert!(!gallery.store().is_live(&blob));
        assert_eq!(gallery.store().revocations(&blob), 1);
        assert_eq!(gallery.status().message, "Image deleted.");
        assert_eq!(gallery.status().level, StatusLevel::Info);
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_delete_finishes_after_escape() {
        let mut gallery = empty_gallery();
        let id = gallery.add_from_file(&png_file("cat.png")).unwrap();
        let blob = gallery.cards()[0].source().to_string();
        gallery.select(id).unwrap();

        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(10),
            gallery.delete_selected(),
        )
        .await;
        gallery.clear_selection();

        // nothing selected anymore, but the stranded card still goes away
        assert_eq!(gallery.delete_selected().await, None);
        assert_eq!(gallery.count(), 0);
        assert_eq!(gallery.store().revocations(&blob), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn remote_cards_release_nothing() {
        let mut gallery = empty_gallery();
        let local = gallery.add_from_file(&png_file("keep.png")).unwrap();
        let remote = gallery.add_from_url("https://example.com/a.png").unwrap();

        gallery.select(remote).unwrap();
        gallery.delete_selected().await;

        assert_eq!(gallery.store().live_count(), 1, "the local one is untouched");
        assert!(gallery.card(local).is_some_and(|c| c.has_local_handle()));
    }

    #[test]
    fn load_failure_shows_placeholder() {
        let mut gallery = empty_gallery();
        let id = gallery.add_from_url("https://i.imgur.com/blocked.png").unwrap();

        gallery.report_load_failure(id).unwrap();

        let view = &gallery.views()[0];
        assert_eq!(view.state, CardState::LoadFailed);
        assert_eq!(view.src, gallery.config().placeholder_url);
        assert_eq!(view.caption, CAPTION_LOAD_FAILED);
        assert!(gallery.status().is_error());

        // the card still knows where it came from
        assert_eq!(gallery.cards()[0].source(), "https://i.imgur.com/blocked.png");

        // failing again isn't a thing
        assert!(matches!(
            gallery.report_load_failure(id),
            Err(GalleryError::InvalidTransition { .. })
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn failed_cards_can_still_be_deleted() {
        let mut gallery = empty_gallery();
        let id = gallery.add_from_url("https://example.com/404.png").unwrap();
        gallery.mark_displayed(id).unwrap();
        gallery.report_load_failure(id).unwrap();

        gallery.select(id).unwrap();
        assert_eq!(gallery.delete_selected().await, Some(id));
        assert_eq!(gallery.count(), 0);
    }

    #[test]
    fn mark_displayed_only_once() {
        let mut gallery = empty_gallery();
        let id = gallery.add_from_url("https://example.com/a.png").unwrap();
        assert_eq!(gallery.cards()[0].state(), CardState::Adding);

        gallery.mark_displayed(id).unwrap();
        assert_eq!(gallery.cards()[0].state(), CardState::Displayed);
        assert!(gallery.mark_displayed(id).is_err());
    }

    #[test]
    fn seeds_default_images_in_order() {
        setup();
        let conf = Config::default();
        let gallery = GalleryController::new(conf.clone());

        assert_eq!(gallery.count(), conf.default_images.len());
        assert_eq!(gallery.count_label(), "3 images");

        let sources = gallery
            .cards()
            .iter()
            .map(|c| c.source().to_string())
            .collect::<Vec<_>>();
        assert_eq!(sources, conf.default_images);
        assert!(!gallery.status().is_error());
    }

    #[test]
    fn count_label_pluralizes() {
        let mut gallery = empty_gallery();
        assert_eq!(gallery.count_label(), "0 images");

        gallery.add_from_url("https://example.com/a.png").unwrap();
        assert_eq!(gallery.count_label(), "1 image");
    }

    #[test]
    fn url_field_feedback() {
        let mut gallery = empty_gallery();

        gallery.set_url_input("htp:/nope");
        assert!(gallery.status().is_error());

        gallery.set_url_input("https://example.com/a.png");
        assert_eq!(gallery.status().level, StatusLevel::Info);
        assert!(gallery.status().message.contains("Enter"));

        gallery.set_url_input("   ");
        assert_eq!(gallery.status().message, "");

        // submitting keeps bad input around, and clears good input
        gallery.set_url_input("bad");
        assert!(gallery.submit_url_input().is_err());
        assert_eq!(gallery.url_input(), "bad");

        gallery.set_url_input("https://example.com/a.png");
        gallery.submit_url_input().unwrap();
        assert_eq!(gallery.url_input(), "");
        assert_eq!(gallery.count(), 1);

        gallery.set_url_input("leftover");
        gallery.clear_url_input();
        assert_eq!(gallery.url_input(), "");
        assert_eq!(gallery.status().message, "Field cleared.");
    }

    #[test]
    fn clicking_outside_clears_selection() {
        let mut gallery = empty_gallery();
        let id = gallery.add_from_url("https://example.com/a.png").unwrap();
        gallery.select(id).unwrap();

        gallery.click_outside();
        assert_eq!(gallery.selection(), None);
    }

    #[test]
    fn views_follow_cards() {
        let mut gallery = empty_gallery();
        let a = gallery.add_from_url("https://example.com/a.png").unwrap();
        let b = gallery.add_from_url("https://example.com/b.png").unwrap();
        gallery.select(a).unwrap();

        let views = gallery.views();
        assert_eq!(views.len(), 2);
        assert_eq!(views[0].id, b);
        assert!(!views[0].selected);
        assert_eq!(views[1].id, a);
        assert!(views[1].selected);
        assert_eq!(views[1].src, "https://example.com/a.png");
    }
}

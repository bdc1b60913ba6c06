#![forbid(unsafe_code)]

//! Property tests over arbitrary binding counts and click sequences.

use proptest::prelude::*;
use reveal_core::{Dom, Selector};
use reveal_harness::fixtures::{disclosure_page, modal_page};
use reveal_widgets::classes;

#[derive(Debug, Clone, Copy)]
enum Action {
    Link(usize),
    Background(usize),
    Inside(usize),
    Close(usize),
}

fn action(modals: usize) -> impl Strategy<Value = Action> {
    prop_oneof![
        (0..modals).prop_map(Action::Link),
        (0..modals).prop_map(Action::Background),
        (0..modals).prop_map(Action::Inside),
        (0..modals).prop_map(Action::Close),
    ]
}

const IDS: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

proptest! {
    #[test]
    fn n_modals_yield_one_overlay(n in 1usize..=6) {
        let (page, _) = modal_page(&IDS[..n]);
        prop_assert_eq!(page.dom().count(&Selector::class(classes::OVERLAY)), 1);
        prop_assert_eq!(page.dom().count(&Selector::class(classes::CONTAINER)), n);
        prop_assert_eq!(page.dom().count(&Selector::class(classes::CLOSE_CONTROL)), n);
    }

    #[test]
    fn disclosure_marker_tracks_visibility(hidden in any::<bool>(), clicks in 1usize..20) {
        let (mut page, d) = disclosure_page(hidden);
        for _ in 0..clicks {
            page.click(d.trigger);
            let visible = page.dom().is_visible(d.target);
            prop_assert_eq!(page.dom().has_class(d.trigger, classes::OPEN), visible);
            prop_assert_eq!(page.dom().has_class(d.trigger, classes::CLOSED), !visible);
        }
        let expected = if clicks % 2 == 0 { !hidden } else { hidden };
        prop_assert_eq!(page.dom().is_visible(d.target), expected);
    }

    #[test]
    fn modal_listeners_follow_open_state(actions in proptest::collection::vec(action(3), 0..40)) {
        let (mut page, modals) = modal_page(&IDS[..3]);
        let containers: Vec<_> = modals
            .iter()
            .map(|m| page.modal(m.panel).unwrap().container())
            .collect();
        let overlay = page.registry().chrome().overlay().unwrap();

        for action in actions {
            match action {
                Action::Link(i) => { page.click(modals[i].link); }
                Action::Background(i) => { page.click(containers[i]); }
                Action::Inside(i) => { page.click(modals[i].content); }
                Action::Close(i) => { page.click(modals[i].nested_close); }
            }

            let mut any_open = false;
            for (m, &container) in modals.iter().zip(&containers) {
                let open = page.is_open(m.id).unwrap();
                any_open |= open;
                let expected = usize::from(open);
                prop_assert_eq!(page.dom().click_handlers(container).len(), expected);
            }

            let body = page.dom().body();
            let locked = page.dom().inline_style(body, "overflow").as_deref() == Some("hidden");
            prop_assert_eq!(locked, page.registry().chrome().scroll_lock().is_locked());
            if !any_open {
                prop_assert!(!page.dom().has_class(overlay, classes::VISIBLE));
                prop_assert!(!locked);
            }
        }
    }
}

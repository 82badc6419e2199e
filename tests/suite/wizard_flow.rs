//! End-to-end navigation through key events.

use crossterm::event::KeyCode;

use kivaw_engine::{Focus, Screen, State, lookup};

use crate::common::{digit, still_app, type_keys};

fn state_key(state: State) -> KeyCode {
    digit(u8::try_from(state.index() + 1).unwrap())
}

fn focus_key(focus: Focus) -> KeyCode {
    digit(u8::try_from(focus.index() + 1).unwrap())
}

#[test]
fn minimizer_logic_walkthrough() {
    let mut app = still_app();
    assert_eq!(app.screen(), Screen::Home);
    assert!(app.selection().is_unset());

    type_keys(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.screen(), Screen::ChooseState);

    type_keys(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.screen(), Screen::ChooseFocus);

    type_keys(&mut app, &[KeyCode::Down, KeyCode::Enter]);
    assert_eq!(app.screen(), Screen::Result);
    assert_eq!(app.selection().state, Some(State::Minimizer));
    assert_eq!(app.selection().focus, Some(Focus::Logic));
    assert_eq!(
        app.recommendation(),
        Some(lookup(State::Minimizer, Focus::Logic))
    );
}

#[test]
fn every_pair_is_reachable_by_shortcuts() {
    for state in State::ALL {
        for focus in Focus::ALL {
            let mut app = still_app();
            type_keys(&mut app, &[digit(1), state_key(state), focus_key(focus)]);
            assert_eq!(app.screen(), Screen::Result);
            assert_eq!(app.recommendation(), Some(lookup(state, focus)));
        }
    }
}

#[test]
fn home_from_result_resets_everything() {
    for state in State::ALL {
        let mut app = still_app();
        type_keys(&mut app, &[digit(1), state_key(state), digit(6)]);
        assert_eq!(app.screen(), Screen::Result);

        // Second button on the result screen is Home.
        type_keys(&mut app, &[digit(2)]);
        assert_eq!(app.screen(), Screen::Home);
        assert!(app.selection().is_unset());
        assert_eq!(app.recommendation(), None);
    }
}

#[test]
fn back_from_result_keeps_state_and_focus() {
    let mut app = still_app();
    type_keys(&mut app, &[digit(1), digit(2), digit(4)]);
    assert_eq!(app.selection().focus, Some(Focus::Faith));

    type_keys(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.screen(), Screen::ChooseFocus);
    assert_eq!(app.selection().state, Some(State::Destructivist));
    assert_eq!(app.selection().focus, Some(Focus::Faith));
    assert_eq!(app.recommendation(), None);

    type_keys(&mut app, &[digit(5)]);
    assert_eq!(app.selection().focus, Some(Focus::Movement));
    assert_eq!(app.recommendation(), Some("Strong physical release."));
}

#[test]
fn change_focus_keeps_previous_focus_until_new_pick() {
    let mut app = still_app();
    type_keys(&mut app, &[digit(1), digit(3), digit(3)]);
    assert_eq!(app.recommendation(), Some("Bold colors and expressive visuals."));

    // Try Another Focus is the first result button.
    type_keys(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.screen(), Screen::ChooseFocus);
    assert_eq!(app.selection().focus, Some(Focus::Art));
    assert_eq!(app.selected_index(), 0);

    type_keys(&mut app, &[KeyCode::Enter]);
    assert_eq!(app.selection().focus, Some(Focus::Music));
    assert_eq!(app.recommendation(), Some("Energetic or atmospheric sound."));
}

#[test]
fn back_chain_to_home_keeps_state() {
    let mut app = still_app();
    type_keys(&mut app, &[digit(1), digit(4)]);
    type_keys(&mut app, &[KeyCode::Left, KeyCode::Char('h')]);
    assert_eq!(app.screen(), Screen::Home);
    assert_eq!(app.selection().state, Some(State::Blank));

    // A fresh pick overwrites the retained state.
    type_keys(&mut app, &[digit(1), digit(2), digit(1)]);
    assert_eq!(app.selection().state, Some(State::Destructivist));
    assert_eq!(app.recommendation(), Some("Cathartic or intense sound."));
}

#[test]
fn quitting_works_on_every_screen() {
    let walks: [&[KeyCode]; 4] = [
        &[],
        &[digit(1)],
        &[digit(1), digit(1)],
        &[digit(1), digit(1), digit(1)],
    ];
    for walk in walks {
        let mut app = still_app();
        type_keys(&mut app, walk);
        assert!(!app.should_quit());
        type_keys(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit());
    }
}

// Host-side tests for the hero typing loop.

use std::time::Duration;

use folio_core::{TypingLoop, DELETE_DELAY_MS, TYPE_DELAY_MS, TYPING_PAUSE_MS};

fn texts(lp: &mut TypingLoop, n: usize) -> Vec<String> {
    (0..n).map(|_| lp.tick().text).collect()
}

#[test]
fn empty_phrase_lists_do_not_start() {
    assert!(TypingLoop::with_default_pause(Vec::<&str>::new()).is_none());
    assert!(TypingLoop::with_default_pause(["", ""]).is_none());
}

#[test]
fn types_holds_deletes_and_advances() {
    let mut lp = TypingLoop::new(["Hi", "Yo"], Duration::from_millis(500)).unwrap();
    assert_eq!(
        texts(&mut lp, 8),
        vec!["H", "Hi", "H", "", "Y", "Yo", "Y", ""]
    );
    // wraps around to the first phrase
    assert_eq!(lp.tick().text, "H");
    assert_eq!(lp.phrase_index(), 0);
}

#[test]
fn delays_follow_the_phase() {
    let mut lp = TypingLoop::with_default_pause(["abc"]).unwrap();
    let delays: Vec<_> = (0..6).map(|_| lp.tick().delay).collect();
    let ty = Duration::from_millis(TYPE_DELAY_MS);
    let del = Duration::from_millis(DELETE_DELAY_MS);
    let pause = Duration::from_millis(TYPING_PAUSE_MS);
    assert_eq!(delays, vec![ty, ty, pause, del, del, del]);
}

#[test]
fn counts_characters_not_bytes() {
    let mut lp = TypingLoop::new(["héé"], Duration::from_millis(1)).unwrap();
    assert_eq!(texts(&mut lp, 3), vec!["h", "hé", "héé"]);
}

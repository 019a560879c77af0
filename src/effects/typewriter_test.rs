use super::*;
use crate::state::prefs::Preference;

#[test]
fn yields_growing_prefixes() {
    let frames: Vec<String> = Typewriter::new("ls -la").collect();
    assert_eq!(frames, ["l", "ls", "ls ", "ls -", "ls -l", "ls -la"]);
}

#[test]
fn counts_unicode_scalars_not_bytes() {
    let frames: Vec<String> = Typewriter::new("é→✓").collect();
    assert_eq!(frames, ["é", "é→", "é→✓"]);
}

#[test]
fn empty_text_is_done_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_done());
    assert_eq!(tw.next(), None);
}

#[test]
fn size_hint_tracks_remaining_steps() {
    let mut tw = Typewriter::new("abc");
    assert_eq!(tw.size_hint(), (3, Some(3)));
    tw.next();
    assert_eq!(tw.len(), 2);
}

#[test]
fn default_jobs_match_page_timings() {
    let prefs = PreferenceSet::default();
    assert_eq!(TypingJob::command(0, &prefs), TypingJob { delay_ms: 0, tick_ms: 100 });
    assert_eq!(TypingJob::command(2, &prefs), TypingJob { delay_ms: 2000, tick_ms: 100 });
    assert_eq!(TypingJob::output(0, &prefs), TypingJob { delay_ms: 500, tick_ms: 50 });
    assert_eq!(TypingJob::output(3, &prefs), TypingJob { delay_ms: 3500, tick_ms: 50 });
    assert_eq!(TypingJob::tagline(), TypingJob { delay_ms: 500, tick_ms: 50 });
}

#[test]
fn jobs_follow_speed_preference() {
    let mut prefs = PreferenceSet::default();
    prefs.apply(&Preference::TypewriterSpeedMs(30));
    assert_eq!(TypingJob::command(1, &prefs).tick_ms, 30);
    assert_eq!(TypingJob::output(1, &prefs).tick_ms, 15);
}

#[test]
fn huge_index_saturates() {
    let prefs = PreferenceSet::default();
    assert_eq!(TypingJob::output(usize::MAX, &prefs).delay_ms, u32::MAX);
}

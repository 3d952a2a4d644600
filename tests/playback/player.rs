//! Player driven by simulated ticks

use algotrace_builders::sortedness;
use algotrace_playback::{PlaybackConfig, Player, TickOutcome};

#[test]
fn ticks_play_a_trace_to_its_terminal_step() {
    let trace = sortedness::build(&[1, 2, 3, 4]).unwrap();
    let mut player = Player::new(trace.len(), PlaybackConfig::fast());

    let mut shown = vec![player.index()];
    loop {
        match player.tick() {
            TickOutcome::Advanced(i) => shown.push(i),
            TickOutcome::Finished(i) => {
                shown.push(i);
                break;
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    assert_eq!(shown, (0..trace.len()).collect::<Vec<_>>());
    assert!(trace.get(player.index()).unwrap().is_terminal());
    assert!(!player.is_playing());
}

#[test]
fn stopping_ticks_cancels_playback() {
    let mut player = Player::new(10, PlaybackConfig::fast());
    player.tick();
    player.tick();
    player.pause();
    for _ in 0..5 {
        assert_eq!(player.tick(), TickOutcome::Paused);
    }
    assert_eq!(player.index(), 2);
}

#[test]
fn loading_a_new_trace_rewinds() {
    let first = sortedness::build(&[3, 2, 1]).unwrap();
    let second = sortedness::build(&[1, 2, 3, 4, 5]).unwrap();

    let mut player = Player::new(first.len(), PlaybackConfig::default());
    player.seek(first.last_index());
    player.load(second.len());

    assert_eq!(player.index(), 0);
    assert_eq!(player.cursor().len(), second.len());
}

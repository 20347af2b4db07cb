//! Easter-egg matchers driven through the public input stream

use std::f64::consts::TAU;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyModifiers};
use folio::triggers::gesture::GESTURE_SAMPLES;
use folio::triggers::sequence::KONAMI;
use folio::triggers::set::LOGO_TARGET;
use folio::triggers::{
    CircleGestureMatcher, Effect, EffectQueue, InputEvent, KeySequenceMatcher, Point,
    SecretWordMatcher, TriggerSet,
};

fn key(code: KeyCode) -> InputEvent {
    InputEvent::Key {
        code,
        modifiers: KeyModifiers::NONE,
    }
}

fn circle(radius: f64) -> Vec<Point> {
    (0..GESTURE_SAMPLES)
        .map(|i| {
            let angle = TAU * i as f64 / GESTURE_SAMPLES as f64;
            Point::new(500.0 + radius * angle.cos(), 400.0 + radius * angle.sin())
        })
        .collect()
}

#[test]
fn konami_fires_exactly_once() {
    let mut matcher = KeySequenceMatcher::konami();
    let fired: Vec<Effect> = KONAMI.iter().filter_map(|k| matcher.push(*k)).collect();
    assert_eq!(fired, vec![Effect::Konami]);
}

#[test]
fn konami_with_one_wrong_key_never_fires() {
    let wrong = [KeyCode::Enter, KeyCode::Char('c'), KeyCode::Esc];
    for position in 0..KONAMI.len() {
        for replacement in wrong {
            let mut keys = KONAMI;
            keys[position] = replacement;
            let mut matcher = KeySequenceMatcher::konami();
            assert!(
                keys.iter().all(|k| matcher.push(*k).is_none()),
                "position {position} replaced by {replacement:?}"
            );
        }
    }
}

#[test]
fn matrix_word_fires_once_and_empties_buffer() {
    let mut matcher = SecretWordMatcher::new();
    let fired: Vec<Effect> = "ohmatrixyes".chars().filter_map(|c| matcher.push(c)).collect();

    assert_eq!(fired, vec![Effect::MatrixRain { glyphs: 50 }]);
    assert_eq!(matcher.window(), "yes");
}

#[test]
fn buffer_is_empty_right_after_match() {
    let mut matcher = SecretWordMatcher::new();
    for c in "matri".chars() {
        assert_eq!(matcher.push(c), None);
    }
    assert!(matcher.push('x').is_some());
    assert_eq!(matcher.window(), "");
}

#[test]
fn circle_of_radius_sixty_fires() {
    let mut matcher = CircleGestureMatcher::new();
    let fired: Vec<Effect> = circle(60.0).into_iter().filter_map(|p| matcher.push(p)).collect();
    assert_eq!(fired, vec![Effect::Sparkles { count: 20 }]);
}

#[test]
fn straight_line_never_fires() {
    let mut matcher = CircleGestureMatcher::new();
    for i in 0..200 {
        let p = Point::new(3.0 * i as f64, 100.0);
        assert_eq!(matcher.push(p), None, "sample {i}");
    }
}

#[test]
fn trigger_set_fans_out_one_stream() {
    let mut triggers = TriggerSet::default();
    let mut fired = Vec::new();

    for code in KONAMI {
        fired.extend(triggers.handle(&key(code)));
    }
    for c in "code".chars() {
        fired.extend(triggers.handle(&key(KeyCode::Char(c))));
    }
    for p in circle(80.0) {
        fired.extend(triggers.handle(&InputEvent::PointerMove(p)));
    }
    for ms in [0, 100, 200] {
        fired.extend(triggers.handle(&InputEvent::Click {
            target: "name".to_string(),
            at: Duration::from_millis(ms),
            modifiers: KeyModifiers::NONE,
        }));
    }

    assert_eq!(
        fired,
        vec![
            Effect::Konami,
            Effect::CodeSnippets,
            Effect::Sparkles { count: 20 },
            Effect::SecretFound {
                name: "Name Clicker"
            },
        ]
    );
}

#[test]
fn matrix_chord_does_not_feed_word_buffer() {
    let mut triggers = TriggerSet::default();
    let chord = InputEvent::Key {
        code: KeyCode::Char('m'),
        modifiers: KeyModifiers::CONTROL | KeyModifiers::ALT,
    };

    assert_eq!(
        triggers.handle(&chord),
        vec![Effect::MatrixMode { enabled: true }]
    );
    assert!(triggers.matrix_mode_enabled());

    // "atrix" alone must not complete "matrix"
    let fired: Vec<Effect> = "atrix"
        .chars()
        .flat_map(|c| triggers.handle(&key(KeyCode::Char(c))))
        .collect();
    assert!(fired.is_empty());
}

#[test]
fn effects_expire_after_their_duration() {
    let mut queue = EffectQueue::new();
    queue.push(Effect::JsParticles { count: 15 });
    queue.push(Effect::Konami);
    assert_eq!(queue.len(), 2);

    assert!(queue.advance(Duration::from_millis(1999)).is_empty());
    assert_eq!(
        queue.advance(Duration::from_millis(1)),
        vec![Effect::JsParticles { count: 15 }]
    );
    assert_eq!(
        queue.advance(Duration::from_secs(3)),
        vec![Effect::Konami]
    );
    assert!(queue.is_empty());
}

#[test]
fn expired_matrix_mode_resyncs_toggle() {
    let mut triggers = TriggerSet::default();
    let mut queue = EffectQueue::new();
    let chord = InputEvent::Key {
        code: KeyCode::Char('m'),
        modifiers: KeyModifiers::CONTROL | KeyModifiers::ALT,
    };

    for effect in triggers.handle(&chord) {
        queue.push(effect);
    }
    for effect in queue.advance(Duration::from_secs(10)) {
        triggers.effect_expired(&effect);
    }

    assert!(queue.is_empty());
    assert!(!triggers.matrix_mode_enabled());
}

fn click(target: &str, ms: u64, modifiers: KeyModifiers) -> InputEvent {
    InputEvent::Click {
        target: target.to_string(),
        at: Duration::from_millis(ms),
        modifiers,
    }
}

#[test]
fn logo_double_click_floats_emoji_for_three_seconds() {
    let mut triggers = TriggerSet::default();
    let mut queue = EffectQueue::new();

    for ms in [0, 250] {
        for effect in triggers.handle(&click(LOGO_TARGET, ms, KeyModifiers::NONE)) {
            queue.push(effect);
        }
    }
    assert_eq!(
        queue.active().cloned().collect::<Vec<_>>(),
        vec![Effect::FloatingEmoji { count: 20 }]
    );

    assert!(queue.advance(Duration::from_millis(2999)).is_empty());
    assert_eq!(queue.advance(Duration::from_millis(1)).len(), 1);
}

#[test]
fn logo_clicks_far_apart_do_nothing() {
    let mut triggers = TriggerSet::default();
    let fired: Vec<Effect> = [0, 800, 1600]
        .into_iter()
        .flat_map(|ms| triggers.handle(&click(LOGO_TARGET, ms, KeyModifiers::NONE)))
        .collect();
    assert!(fired.is_empty());
}

#[test]
fn glass_detective_needs_shift_and_fires_once() {
    let mut triggers = TriggerSet::default();

    assert!(triggers
        .handle(&click("glass:about", 0, KeyModifiers::NONE))
        .is_empty());
    assert_eq!(
        triggers.handle(&click("glass:about", 100, KeyModifiers::SHIFT)),
        vec![Effect::SecretFound {
            name: "Glass Detective"
        }]
    );
    assert!(triggers
        .handle(&click("glass:projects", 5000, KeyModifiers::SHIFT))
        .is_empty());
}

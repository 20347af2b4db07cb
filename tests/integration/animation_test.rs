//! Behavioural tests for the animation layer

use std::time::Duration;

use folio::animation::{
    intersection_ratio, AnimatedSection, IntersectionWatcher, LetterReveal, ManualViewport,
    NoViewport, Rect, TypewriterEngine, TypewriterEvent, TypingProfile,
};

const FOREVER: Duration = Duration::from_secs(3600);

const SAMPLES: &[&str] = &[
    "",
    "a",
    "Ian Iglipa",
    "Full-Stack Developer & Game Creator",
    "function greet(name) {\n  return `Hello, ${name}!`;\n}",
    "héllo wörld, ünïcode; fine.",
    "    ",
];

fn run_to_end(engine: &mut TypewriterEngine) -> Vec<TypewriterEvent> {
    engine.advance(FOREVER)
}

// ============================================================================
// Typewriter
// ============================================================================

#[test]
fn final_buffer_equals_source_with_typos() {
    for profile in [TypingProfile::Name, TypingProfile::Code] {
        for seed in 0..20 {
            for text in SAMPLES {
                let mut engine = TypewriterEngine::with_seed(profile, seed).typo_probability(0.5);
                engine.start(text);
                let events = run_to_end(&mut engine);

                assert_eq!(engine.visible(), *text, "seed {seed} {profile:?}");
                assert_eq!(
                    events.iter().filter(|e| **e == TypewriterEvent::Finished).count(),
                    1
                );
                assert!(engine.is_finished());
                assert!(!engine.is_running());
            }
        }
    }
}

#[test]
fn name_without_typos_finishes_exactly_once() {
    let mut engine = TypewriterEngine::with_seed(TypingProfile::Name, 3).typo_probability(0.0);
    engine.start("Ian Iglipa");
    let events = run_to_end(&mut engine);

    assert_eq!(engine.visible(), "Ian Iglipa");
    assert_eq!(events.last(), Some(&TypewriterEvent::Finished));
    assert_eq!(
        events.iter().filter(|e| **e == TypewriterEvent::Finished).count(),
        1
    );
    assert!(events
        .iter()
        .all(|e| matches!(e, TypewriterEvent::Typed(_) | TypewriterEvent::Finished)));
}

#[test]
fn typos_are_always_corrected_before_moving_on() {
    let mut engine = TypewriterEngine::with_seed(TypingProfile::Name, 99).typo_probability(1.0);
    engine.start("abc");
    let events = run_to_end(&mut engine);

    let mut pending_typo = false;
    for event in &events {
        match event {
            TypewriterEvent::Typo(_) => {
                assert!(!pending_typo);
                pending_typo = true;
            }
            TypewriterEvent::Backspace => {
                assert!(pending_typo);
                pending_typo = false;
            }
            TypewriterEvent::Typed(_) => assert!(!pending_typo),
            TypewriterEvent::Finished => {}
        }
    }
    assert_eq!(
        events.iter().filter(|e| matches!(e, TypewriterEvent::Typo(_))).count(),
        3
    );
}

#[test]
fn typo_is_held_then_removed() {
    let mut engine = TypewriterEngine::with_seed(TypingProfile::Name, 5).typo_probability(1.0);
    engine.start("x");

    let first = engine.advance(Duration::ZERO);
    assert!(matches!(first.as_slice(), [TypewriterEvent::Typo(_)]));
    assert_eq!(engine.visible().chars().count(), 1);
    assert_ne!(engine.visible(), "x");

    assert!(engine.advance(Duration::from_millis(199)).is_empty());
    assert_eq!(
        engine.advance(Duration::from_millis(1)),
        vec![TypewriterEvent::Backspace]
    );
    assert_eq!(engine.visible(), "");

    assert_eq!(
        engine.advance(Duration::from_millis(100)),
        vec![TypewriterEvent::Typed('x'), TypewriterEvent::Finished]
    );
}

#[test]
fn no_mutation_after_stop() {
    let mut engine = TypewriterEngine::with_seed(TypingProfile::Name, 1).typo_probability(0.3);
    engine.start("Ian Iglipa");
    engine.advance(Duration::from_millis(250));
    let snapshot = engine.visible().to_string();

    engine.stop();
    assert!(engine.advance(FOREVER).is_empty());
    assert_eq!(engine.visible(), snapshot);
}

#[test]
fn replay_yields_identical_final_buffer() {
    let mut engine = TypewriterEngine::with_seed(TypingProfile::Code, 4).typo_probability(0.2);
    engine.start("let x = 1;");
    run_to_end(&mut engine);
    let first = engine.visible().to_string();

    engine.replay();
    assert_eq!(engine.visible(), "");
    let events = run_to_end(&mut engine);

    assert_eq!(engine.visible(), first);
    assert!(events.contains(&TypewriterEvent::Finished));
}

#[test]
fn starting_again_cancels_previous_run() {
    let mut engine = TypewriterEngine::with_seed(TypingProfile::Name, 8).typo_probability(0.0);
    engine.start("first text");
    engine.advance(Duration::from_millis(300));

    engine.start("second");
    run_to_end(&mut engine);
    assert_eq!(engine.visible(), "second");
}

#[test]
fn skip_to_end_reports_finished_once() {
    let mut engine = TypewriterEngine::with_seed(TypingProfile::Name, 2);
    engine.start("Ian Iglipa");
    assert_eq!(engine.finish(), Some(TypewriterEvent::Finished));
    assert_eq!(engine.visible(), "Ian Iglipa");
    assert_eq!(engine.finish(), None);
    assert!(engine.advance(FOREVER).is_empty());
}

// ============================================================================
// Letter reveal
// ============================================================================

#[test]
fn reveal_length_matches_chars_and_completes() {
    for text in SAMPLES {
        let mut reveal = LetterReveal::default();
        reveal.start(text);
        assert_eq!(reveal.shown().len(), text.chars().count());

        reveal.advance(FOREVER);
        assert!(reveal.is_complete());
    }
}

#[test]
fn reveal_stop_freezes_flags() {
    let mut reveal = LetterReveal::new(Duration::ZERO, Duration::from_millis(10));
    reveal.start("abcdef");
    reveal.advance(Duration::from_millis(15));
    assert_eq!(reveal.shown_count(), 2);

    reveal.stop();
    reveal.advance(FOREVER);
    assert_eq!(reveal.shown_count(), 2);
}

// ============================================================================
// Intersection watcher
// ============================================================================

#[test]
fn watcher_crosses_threshold_both_ways() {
    let mut watcher = IntersectionWatcher::new(ManualViewport::new());
    assert!(watcher.observe("about", 0.1));

    assert_eq!(watcher.report("about", 0.05), None);
    assert_eq!(watcher.report("about", 0.1), Some(true));
    assert_eq!(watcher.report("about", 0.8), None);
    assert_eq!(watcher.report("about", 0.0), Some(false));
    assert!(!watcher.is_visible("about"));
}

#[test]
fn watcher_registers_once_per_element() {
    let mut watcher = IntersectionWatcher::new(ManualViewport::new());
    assert!(watcher.observe("hero", 0.1));
    assert!(!watcher.observe("hero", 0.9));

    assert_eq!(watcher.observer().observed().len(), 1);
    // First threshold still applies
    assert_eq!(watcher.report("hero", 0.2), Some(true));
}

#[test]
fn watcher_fails_open_without_observer() {
    let mut watcher = IntersectionWatcher::new(NoViewport);
    watcher.observe("projects", 0.1);

    assert!(watcher.is_visible("projects"));
    assert_eq!(watcher.report("projects", 0.0), None);
    assert!(watcher.is_visible("projects"));
}

#[test]
fn ratio_from_geometry_drives_section() {
    let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
    let element = Rect::new(0.0, 95.0, 100.0, 50.0);
    let ratio = intersection_ratio(element, viewport);
    assert!((ratio - 0.1).abs() < 1e-9);

    let mut watcher = IntersectionWatcher::new(ManualViewport::new());
    watcher.observe("hero", 0.1);
    let engine = TypewriterEngine::with_seed(TypingProfile::Name, 0).typo_probability(0.0);
    let mut section = AnimatedSection::typewriter("hero", "Ian", engine);

    if let Some(visible) = watcher.report("hero", ratio) {
        section.on_visibility(visible);
    }
    section.advance(FOREVER);
    assert_eq!(section.visible_text(), "Ian");
}

#[test]
fn section_keeps_running_after_leaving_view() {
    let engine = TypewriterEngine::with_seed(TypingProfile::Name, 0).typo_probability(0.0);
    let mut section = AnimatedSection::typewriter("hero", "Ian Iglipa", engine);

    section.on_visibility(true);
    section.advance(Duration::from_millis(200));
    section.on_visibility(false);
    section.advance(FOREVER);

    assert_eq!(section.visible_text(), "Ian Iglipa");
    assert!(section.is_finished());
}

use std::io::Write;

use portty::anim::{Clock, ConfigError, ManualClock, Mode};
use portty::config::Config;
use portty::page::Landing;

fn config_with(phrases: &[&str], captions: &[&str], caption_interval_ms: i64) -> Config {
    let mut config = Config::default();
    config.typewriter.phrases = phrases.iter().map(|s| s.to_string()).collect();
    config.typewriter.pause_ms = 2000;
    config.captions.items = captions.iter().map(|s| s.to_string()).collect();
    config.captions.interval_ms = caption_interval_ms;
    config
}

#[test]
fn test_caption_rotator_scenario() {
    let clock = ManualClock::new(0);
    let mut landing =
        Landing::from_config(&config_with(&["Hi"], &["A", "B", "C"], 1000)).unwrap();
    landing.mount(clock.now_ms());

    clock.advance(2500);
    landing.advance_to(clock.now_ms());

    assert_eq!(landing.hero.captions.active_index(), 2);
    assert_eq!(landing.hero.captions.current(), "C");
}

#[test]
fn test_animations_run_on_independent_clocks() {
    let clock = ManualClock::new(0);
    let mut landing =
        Landing::from_config(&config_with(&["Hi", "Yo"], &["A", "B"], 150)).unwrap();
    landing.mount(clock.now_ms());

    clock.set(200);
    // typewriter: 2 chars; rotator: 1 rotation
    assert_eq!(landing.advance_to(clock.now_ms()), 3);
    assert_eq!(landing.hero.typewriter.text(), "Hi");
    assert_eq!(landing.hero.typewriter.mode(), Mode::Waiting);
    assert_eq!(landing.hero.captions.current(), "B");
}

#[test]
fn test_empty_lists_idle_with_fallbacks() {
    let mut config = config_with(&[], &[], 1000);
    config.captions.fallback = "Coming soon".to_string();
    let mut landing = Landing::from_config(&config).unwrap();
    landing.mount(0);

    assert_eq!(landing.next_deadline(), None);
    assert_eq!(landing.advance_to(100_000), 0);
    assert_eq!(landing.hero.typewriter.display_text(), "Loading...");
    assert_eq!(landing.hero.captions.current(), "Coming soon");
}

#[test]
fn test_invalid_timing_rejects_landing() {
    let mut config = Config::default();
    config.captions.interval_ms = 0;
    let err = Landing::from_config(&config).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidConfiguration {
            field: "interval_ms",
            value: 0
        }
    );

    let mut config = Config::default();
    config.typewriter.typing_interval_ms = -100;
    assert!(Landing::from_config(&config).is_err());
}

#[test]
fn test_teardown_stops_everything() {
    let clock = ManualClock::new(0);
    let mut landing =
        Landing::from_config(&config_with(&["Hello"], &["A", "B"], 1000)).unwrap();
    landing.mount(clock.now_ms());

    clock.advance(1200);
    landing.advance_to(clock.now_ms());
    let text = landing.hero.typewriter.text().to_string();
    let caption = landing.hero.captions.current().to_string();

    landing.unmount();
    landing.unmount();

    for _ in 0..100 {
        clock.advance(777);
        assert_eq!(landing.advance_to(clock.now_ms()), 0);
    }
    assert_eq!(landing.hero.typewriter.text(), text);
    assert_eq!(landing.hero.captions.current(), caption);
    assert!(landing.hero.typewriter.is_cancelled());
    assert!(landing.hero.captions.is_cancelled());
}

#[test]
fn test_scroll_tracks_active_section() {
    let mut landing = Landing::from_config(&Config::default()).unwrap();
    landing.resize(24);
    assert_eq!(landing.active_id(), "home");

    // Reference line is row 3: home still straddles it at offset 21
    landing.scroll_to(21);
    assert_eq!(landing.active_id(), "home");
    landing.scroll_to(22);
    assert_eq!(landing.active_id(), "about");

    assert!(landing.jump_to("contact"));
    assert_eq!(landing.scroll_offset(), 72);
    assert_eq!(landing.active_nav(), Some(3));

    assert!(landing.jump_to("#home"));
    assert_eq!(landing.scroll_offset(), 0);
    assert!(!landing.is_header_scrolled());
}

#[test]
fn test_landing_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[typewriter]
phrases = ["Hi", "Yo"]
pause_ms = 2000

[captions]
items = ["A", "B", "C"]
interval_ms = 1000

[[sections]]
id = "blog"
title = "Blog"
"#
    )
    .unwrap();

    let config = Config::load_from(file.path()).unwrap();
    let mut landing = Landing::from_config(&config).unwrap();
    landing.resize(10);
    landing.mount(0);
    landing.advance_to(200);

    assert_eq!(landing.hero.typewriter.text(), "Hi");
    assert_eq!(landing.section_count(), 2);
    assert!(landing.jump_to("blog"));
    assert_eq!(landing.active_id(), "blog");
    // nav still points at the default anchors, none of which is "blog"
    assert_eq!(landing.active_nav(), None);
}

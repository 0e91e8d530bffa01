//! Config parsing into rendering options, end to end through `App::new`.

use std::time::Duration;

use smitten_engine::{App, SmittenConfig};

fn parse(toml_src: &str) -> SmittenConfig {
    toml::from_str(toml_src).expect("config parses")
}

#[test]
fn defaults_apply_with_no_config_at_all() {
    let app = App::new(None);
    let options = app.ui_options();
    assert!(!options.ascii_only);
    assert!(!options.high_contrast);
    assert!(!options.reduced_motion);
    assert!(!app.entrance().is_finished());
}

#[test]
fn app_section_flows_into_ui_options() {
    let config = parse("[app]\nascii_only = true\nhigh_contrast = true\n");
    let app = App::new(Some(&config));
    let options = app.ui_options();
    assert!(options.ascii_only);
    assert!(options.high_contrast);
    assert!(!options.reduced_motion);
}

#[test]
fn reduced_motion_collapses_entrance_and_freezes_pulse() {
    let config = parse("[app]\nreduced_motion = true\n");
    let mut app = App::new(Some(&config));
    assert!(app.entrance().is_finished());

    app.advance_animations(Duration::from_secs(10));
    assert!((app.pulse().scale() - 1.0).abs() < f32::EPSILON);
    assert!((app.decor().clock() - 0.0).abs() < f32::EPSILON);
}

#[test]
fn motion_advances_normally_without_reduced_motion() {
    let mut app = App::new(None);
    app.advance_animations(Duration::from_millis(1600));
    assert!(app.entrance().is_finished());
    assert!(app.decor().clock() > 1.0);
}

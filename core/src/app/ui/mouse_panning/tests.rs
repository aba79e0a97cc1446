//! Tests for the mouse panning dialog and its egui adapter

use super::*;
use crate::app::config::Config;
use crate::app::input::{MousePanningConfig, StickCalibration};

fn custom_settings() -> MousePanningConfig {
    MousePanningConfig {
        enabled: true,
        x_sensitivity: 72.0,
        y_sensitivity: 33.0,
        deadzone_x_counterweight: 5.0,
        deadzone_y_counterweight: 60.0,
        decay_strength: 40.0,
        min_decay: 12.0,
    }
}

/// Mirrors what the frontend does with an outcome.
fn apply(config: &mut Config, outcome: DialogOutcome) {
    if let DialogOutcome::Accepted(settings) = outcome {
        config.input.mouse_panning = settings;
    }
}

// =============================================================
// Open / close
// =============================================================

#[test]
fn test_open_copies_current_values() {
    let settings = custom_settings();
    let dialog = MousePanningDialog::open(&settings, &StickCalibration::default());

    assert_eq!(dialog.fields(), &settings);
    assert_eq!(dialog.phase(), DialogPhase::Editing);
    assert!(dialog.is_open());
}

#[test]
fn test_reject_leaves_store_unchanged() {
    let mut config = Config::default();
    config.input.mouse_panning = custom_settings();
    let before = config.clone();

    let mut dialog =
        MousePanningDialog::open(&config.input.mouse_panning, &config.input.right_stick);
    dialog
        .edit(|fields| fields.x_sensitivity = 1.0)
        .unwrap();
    let outcome = dialog.dispatch(DialogCommand::Reject).unwrap();
    apply(&mut config, outcome);

    assert_eq!(outcome, DialogOutcome::Rejected);
    assert_eq!(config, before);
    assert!(!dialog.is_open());
}

#[test]
fn test_accept_without_edits_is_noop() {
    let mut config = Config::default();
    config.input.mouse_panning = custom_settings();
    let before = config.clone();

    let mut dialog =
        MousePanningDialog::open(&config.input.mouse_panning, &config.input.right_stick);
    let outcome = dialog.dispatch(DialogCommand::Accept).unwrap();
    apply(&mut config, outcome);

    assert_eq!(config, before);
    assert_eq!(dialog.phase(), DialogPhase::Accepted);
}

#[test]
fn test_accept_writes_edits() {
    let mut config = Config::default();
    let mut dialog =
        MousePanningDialog::open(&config.input.mouse_panning, &config.input.right_stick);

    dialog
        .edit(|fields| {
            fields.y_sensitivity = 90.0;
            fields.min_decay = 0.0;
        })
        .unwrap();
    let outcome = dialog.dispatch(DialogCommand::Accept).unwrap();
    apply(&mut config, outcome);

    let panning = &config.input.mouse_panning;
    assert!((panning.y_sensitivity - 90.0).abs() < f32::EPSILON);
    assert!(panning.min_decay.abs() < f32::EPSILON);
    // untouched fields keep their values, including the toggle
    assert!(!panning.enabled);
    assert!((panning.x_sensitivity - 50.0).abs() < f32::EPSILON);
}

#[test]
fn test_accept_writes_enabled_toggle() {
    let mut config = Config::default();
    let mut dialog =
        MousePanningDialog::open(&config.input.mouse_panning, &config.input.right_stick);

    dialog.edit(|fields| fields.enabled = true).unwrap();
    apply(&mut config, dialog.dispatch(DialogCommand::Accept).unwrap());

    assert!(config.input.mouse_panning.enabled);
}

// =============================================================
// Restore defaults
// =============================================================

#[test]
fn test_reset_restores_defaults_except_enabled() {
    let settings = custom_settings();
    let mut dialog = MousePanningDialog::open(&settings, &StickCalibration::default());

    let outcome = dialog.dispatch(DialogCommand::ResetToDefaults).unwrap();

    assert_eq!(outcome, DialogOutcome::Pending);
    assert_eq!(dialog.phase(), DialogPhase::DefaultsApplied);
    assert_eq!(
        dialog.fields(),
        &MousePanningConfig {
            enabled: true,
            ..MousePanningConfig::default()
        }
    );
}

#[test]
fn test_reset_does_not_touch_store_until_accept() {
    let mut config = Config::default();
    config.input.mouse_panning = custom_settings();
    let before = config.clone();

    let mut dialog =
        MousePanningDialog::open(&config.input.mouse_panning, &config.input.right_stick);
    dialog.dispatch(DialogCommand::ResetToDefaults).unwrap();
    assert_eq!(config, before);

    apply(&mut config, dialog.dispatch(DialogCommand::Reject).unwrap());
    assert_eq!(config, before);
}

#[test]
fn test_reset_then_accept_uses_dialog_defaults() {
    let mut config = Config::default();
    config.input.mouse_panning.x_sensitivity = 50.0;
    let defaults = MousePanningConfig {
        x_sensitivity: 100.0,
        ..MousePanningConfig::default()
    };

    let mut dialog = MousePanningDialog::open_with_defaults(
        &config.input.mouse_panning,
        &defaults,
        &config.input.right_stick,
    );
    dialog.dispatch(DialogCommand::ResetToDefaults).unwrap();
    assert!((dialog.fields().x_sensitivity - 100.0).abs() < f32::EPSILON);

    apply(&mut config, dialog.dispatch(DialogCommand::Accept).unwrap());
    assert!((config.input.mouse_panning.x_sensitivity - 100.0).abs() < f32::EPSILON);
}

#[test]
fn test_edit_after_reset_returns_to_editing() {
    let mut dialog =
        MousePanningDialog::open(&custom_settings(), &StickCalibration::default());
    dialog.dispatch(DialogCommand::ResetToDefaults).unwrap();

    // an edit that changes nothing keeps the phase
    dialog.edit(|_| {}).unwrap();
    assert_eq!(dialog.phase(), DialogPhase::DefaultsApplied);

    dialog.edit(|fields| fields.decay_strength = 99.0).unwrap();
    assert_eq!(dialog.phase(), DialogPhase::Editing);
}

// =============================================================
// Closed dialog
// =============================================================

#[test]
fn test_commands_after_close_are_refused() {
    let settings = custom_settings();
    let mut dialog = MousePanningDialog::open(&settings, &StickCalibration::default());
    dialog.dispatch(DialogCommand::Accept).unwrap();

    assert_eq!(
        dialog.dispatch(DialogCommand::ResetToDefaults),
        Err(DialogError::Closed)
    );
    assert_eq!(dialog.dispatch(DialogCommand::Reject), Err(DialogError::Closed));
    assert_eq!(
        dialog.edit(|fields| fields.enabled = false),
        Err(DialogError::Closed)
    );
    assert_eq!(dialog.fields(), &settings);
    assert_eq!(dialog.phase(), DialogPhase::Accepted);
}

#[test]
fn test_transition_table() {
    use DialogCommand::*;
    use DialogPhase::*;

    for phase in [Editing, DefaultsApplied] {
        assert_eq!(transition(phase, ResetToDefaults), Ok(DefaultsApplied));
        assert_eq!(transition(phase, Accept), Ok(Accepted));
        assert_eq!(transition(phase, Reject), Ok(Rejected));
    }
    for phase in [Accepted, Rejected] {
        for command in [ResetToDefaults, Accept, Reject] {
            assert_eq!(transition(phase, command), Err(DialogError::Closed));
        }
    }
}

// =============================================================
// Advisory
// =============================================================

#[test]
fn test_advisory_hidden_for_neutral_stick() {
    let calibration = StickCalibration {
        deadzone: 0.0,
        range: 1.0,
    };
    assert_eq!(advisory_message(&calibration), None);

    let dialog = MousePanningDialog::open(&MousePanningConfig::default(), &calibration);
    assert_eq!(dialog.advisory(), None);
}

#[test]
fn test_advisory_shows_current_percentages() {
    let calibration = StickCalibration {
        deadzone: 0.1,
        range: 0.9,
    };
    let dialog = MousePanningDialog::open(&MousePanningConfig::default(), &calibration);

    let text = dialog.advisory().expect("advisory should be shown");
    assert!(text.contains("10%"), "{}", text);
    assert!(text.contains("90%"), "{}", text);
    assert!(text.starts_with("Mouse panning works better with a deadzone of 0%"));
}

#[test]
fn test_advisory_for_range_only() {
    let text = advisory_message(&StickCalibration {
        deadzone: 0.0,
        range: 1.25,
    })
    .unwrap();
    assert!(text.ends_with("Current values are 0% and 125% respectively."));
}

// =============================================================
// egui adapter
// =============================================================

/// Render one headless frame with no user input.
fn render_frame(dialog: &mut MousePanningDialog) -> MousePanningAction {
    let ctx = egui::Context::default();
    let mut action = MousePanningAction::None;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        action = dialog.show(ctx);
    });
    action
}

#[test]
fn test_buttons_map_to_actions() {
    let settings = custom_settings();

    let mut dialog = MousePanningDialog::open(&settings, &StickCalibration::default());
    assert_eq!(
        dialog.run_command(DialogCommand::ResetToDefaults),
        MousePanningAction::None
    );
    assert_eq!(
        dialog.run_command(DialogCommand::Accept),
        MousePanningAction::Apply(MousePanningConfig {
            enabled: true,
            ..MousePanningConfig::default()
        })
    );
    // closed dialogs produce nothing
    assert_eq!(
        dialog.run_command(DialogCommand::Reject),
        MousePanningAction::None
    );

    let mut dialog = MousePanningDialog::open(&settings, &StickCalibration::default());
    assert_eq!(
        dialog.run_command(DialogCommand::Reject),
        MousePanningAction::Cancel
    );
    assert_eq!(dialog.phase(), DialogPhase::Rejected);
}

#[test]
fn test_window_close_button_rejects() {
    let mut dialog =
        MousePanningDialog::open(&custom_settings(), &StickCalibration::default());
    dialog.edit(|fields| fields.x_sensitivity = 3.0).unwrap();

    let action = dialog.finish_frame(false, MousePanningAction::None);

    assert_eq!(action, MousePanningAction::Cancel);
    assert_eq!(dialog.phase(), DialogPhase::Rejected);
}

#[test]
fn test_window_open_keeps_frame_action() {
    let settings = custom_settings();
    let mut dialog = MousePanningDialog::open(&settings, &StickCalibration::default());

    assert_eq!(
        dialog.finish_frame(true, MousePanningAction::None),
        MousePanningAction::None
    );
    assert!(dialog.is_open());

    // OK pressed in the same frame the window closed
    let action = dialog.run_command(DialogCommand::Accept);
    assert_eq!(
        dialog.finish_frame(false, action),
        MousePanningAction::Apply(settings)
    );
    assert_eq!(dialog.phase(), DialogPhase::Accepted);
}

#[test]
fn test_show_open_dialog_without_input() {
    let settings = custom_settings();
    let mut dialog = MousePanningDialog::open(
        &settings,
        &StickCalibration {
            deadzone: 0.1,
            range: 0.9,
        },
    );

    assert_eq!(render_frame(&mut dialog), MousePanningAction::None);
    assert_eq!(dialog.fields(), &settings);
    assert_eq!(dialog.phase(), DialogPhase::Editing);
}

#[test]
fn test_show_closed_dialog_does_nothing() {
    let mut dialog =
        MousePanningDialog::open(&custom_settings(), &StickCalibration::default());
    dialog.dispatch(DialogCommand::Reject).unwrap();

    assert_eq!(render_frame(&mut dialog), MousePanningAction::None);
    assert_eq!(dialog.phase(), DialogPhase::Rejected);
}

#[test]
fn test_show_keeps_out_of_range_values() {
    // e.g. from a hand-edited config.toml
    let settings = MousePanningConfig {
        x_sensitivity: 0.0,
        min_decay: 140.0,
        ..MousePanningConfig::default()
    };
    let mut dialog = MousePanningDialog::open(&settings, &StickCalibration::default());

    render_frame(&mut dialog);
    assert_eq!(dialog.fields(), &settings);
    assert_eq!(dialog.phase(), DialogPhase::Editing);

    // accepting without edits hands back exactly what was stored
    assert_eq!(
        dialog.run_command(DialogCommand::Accept),
        MousePanningAction::Apply(settings)
    );
}

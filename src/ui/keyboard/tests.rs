use super::*;

fn collect_with_key_event(event: egui::Event) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui);
        });
    });

    events
}

fn key(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

fn ctrl() -> egui::Modifiers {
    egui::Modifiers {
        ctrl: true,
        command: true,
        ..Default::default()
    }
}

#[test]
fn test_ctrl_z_emits_undo_only() {
    let events = collect_with_key_event(key(egui::Key::Z, ctrl()));

    assert_eq!(events.len(), 1);
    assert!(matches!(events[0], AppIntent::UndoRequested));
}

#[test]
fn test_ctrl_shift_z_and_ctrl_y_emit_redo() {
    let ctrl_shift = egui::Modifiers {
        shift: true,
        ..ctrl()
    };

    for event in [
        key(egui::Key::Z, ctrl_shift),
        key(egui::Key::Y, ctrl()),
    ] {
        let events = collect_with_key_event(event);
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], AppIntent::RedoRequested));
    }
}

#[test]
fn test_plain_z_toggles_axis_instead_of_undo() {
    let events = collect_with_key_event(key(egui::Key::Z, egui::Modifiers::default()));

    assert_eq!(events.len(), 1);
    assert!(matches!(
        events[0],
        AppIntent::AxisToggleRequested { axis: AxisMask::Z }
    ));
}

#[test]
fn test_mode_hotkeys() {
    for (k, expected) in [
        (egui::Key::W, GizmoMode::Translate),
        (egui::Key::E, GizmoMode::Rotate),
        (egui::Key::R, GizmoMode::Scale),
    ] {
        let events = collect_with_key_event(key(k, egui::Modifiers::default()));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, AppIntent::GizmoModeRequested { mode } if *mode == expected)),
            "{k:?} muss {expected:?} auslösen"
        );
    }
}

#[test]
fn test_escape_emits_cancel() {
    let events = collect_with_key_event(key(egui::Key::Escape, egui::Modifiers::default()));

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::CancelRequested)));
}

#[test]
fn test_space_toggles_transform_space() {
    let events = collect_with_key_event(key(egui::Key::Space, egui::Modifiers::default()));

    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::TransformSpaceToggleRequested)));
}

#[test]
fn test_ctrl_s_marks_checkpoint_and_ctrl_a_selects_all() {
    let events = collect_with_key_event(key(egui::Key::S, ctrl()));
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::SaveCheckpointRequested)));

    let events = collect_with_key_event(key(egui::Key::A, ctrl()));
    assert!(events
        .iter()
        .any(|event| matches!(event, AppIntent::SelectAllRequested)));
}

#[test]
fn test_ctrl_w_does_not_switch_mode() {
    let events = collect_with_key_event(key(egui::Key::W, ctrl()));

    assert!(events.is_empty());
}

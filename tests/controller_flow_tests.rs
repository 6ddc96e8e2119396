use agent_network_viz::app::handlers;
use agent_network_viz::persistence::{LAYOUT_MODE_KEY, LAYOUT_POSITIONS_KEY};
use agent_network_viz::{
    default_catalog, ActivityEntry, LayoutMode, LayoutPersistence, MemoryStore, VizCommand,
    VizController, VizIntent, VizOptions, VizState,
};
use chrono::{TimeZone, Utc};
use glam::Vec2;
use std::time::Duration;

fn make_state(store: MemoryStore) -> (VizController, VizState) {
    let options = VizOptions {
        rng_seed: Some(11),
        ..VizOptions::default()
    };
    let mut controller = VizController::new();
    let mut state = VizState::new(options, default_catalog(), LayoutPersistence::new(store));
    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeRequested {
                mode: LayoutMode::Circular,
            },
        )
        .expect("Kreis-Layout sollte ohne Fehler durchlaufen");
    (controller, state)
}

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn drag(controller: &mut VizController, state: &mut VizState, from: Vec2, to: Vec2) {
    for intent in [
        VizIntent::PointerDown { pos: from, at: ms(0) },
        VizIntent::PointerMoved {
            pos: from.lerp(to, 0.5),
        },
        VizIntent::PointerMoved { pos: to },
        VizIntent::PointerUp { pos: to, at: ms(400) },
    ] {
        controller
            .handle_intent(state, intent)
            .expect("Drag-Intent sollte ohne Fehler durchlaufen");
    }
}

#[test]
fn test_drag_commits_custom_layout_and_persists_positions() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let start = state.positions["coordinator"];
    let target = start + Vec2::new(50.0, 50.0);

    drag(&mut controller, &mut state, start, target);

    assert_eq!(state.layout_mode, LayoutMode::Custom);
    assert_eq!(state.positions["coordinator"], target);
    assert_eq!(state.selected_node_id, None);
    assert_eq!(state.persistence.load_mode(), Some(LayoutMode::Custom));

    let saved = state
        .persistence
        .load_positions()
        .expect("Positionen sollten gespeichert sein");
    assert_eq!(saved.len(), state.node_count());
    assert_eq!(saved["coordinator"], target);

    match state.command_log.entries().last() {
        Some(VizCommand::ReleaseDrag { at: Some(at) }) => assert_eq!(*at, ms(400)),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_drag_after_partial_hierarchy_saves_complete_custom_layout() {
    let options = VizOptions {
        rng_seed: Some(11),
        hierarchy_levels: vec![
            vec!["coordinator".into()],
            vec!["symptom".into(), "diagnosis".into()],
        ],
        ..VizOptions::default()
    };
    let mut controller = VizController::new();
    let mut state = VizState::new(
        options,
        default_catalog(),
        LayoutPersistence::new(MemoryStore::new()),
    );
    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeRequested {
                mode: LayoutMode::Hierarchical,
            },
        )
        .expect("Hierarchisch");
    assert_eq!(state.positions.len(), 3);

    let start = state.positions["coordinator"];
    let target = start + Vec2::new(50.0, 50.0);
    drag(&mut controller, &mut state, start, target);

    assert_eq!(state.layout_mode, LayoutMode::Custom);
    assert_eq!(state.positions.len(), state.node_count());
    let saved = state
        .persistence
        .load_positions()
        .expect("Positionen sollten gespeichert sein");
    assert_eq!(saved.len(), state.node_count());
    assert_eq!(saved["coordinator"], target);
    assert_eq!(saved["symptom"], state.positions["symptom"]);

    // Erneutes Anwenden stellt das gespeicherte Layout ohne Fallback her
    let committed = state.positions.clone();
    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeRequested {
                mode: LayoutMode::Custom,
            },
        )
        .expect("Custom");
    assert_eq!(state.layout_mode, LayoutMode::Custom);
    assert_eq!(state.positions, committed);
}

#[test]
fn test_drag_is_clamped_to_drag_margin() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let start = state.positions["coordinator"];

    drag(&mut controller, &mut state, start, Vec2::new(-300.0, 2000.0));

    let margin = state.options.drag_margin;
    assert_eq!(
        state.positions["coordinator"],
        Vec2::new(margin, state.options.canvas_height - margin)
    );
}

#[test]
fn test_click_selects_without_saving() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let pos = state.positions["diagnosis"];

    controller
        .handle_intent(&mut state, VizIntent::PointerDown { pos, at: ms(0) })
        .expect("PointerDown");
    controller
        .handle_intent(
            &mut state,
            VizIntent::PointerMoved {
                pos: pos + Vec2::new(1.0, 1.0),
            },
        )
        .expect("PointerMoved");
    controller
        .handle_intent(&mut state, VizIntent::PointerUp { pos, at: ms(80) })
        .expect("PointerUp");

    assert_eq!(state.selected_node_id.as_deref(), Some("diagnosis"));
    assert_eq!(state.positions["diagnosis"], pos);
    assert_eq!(state.layout_mode, LayoutMode::Circular);
    assert!(state.persistence.load_positions().is_none());
    assert!(state.pending_navigation.is_empty());
}

#[test]
fn test_pointer_down_on_empty_canvas_clears_selection() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    state.selected_node_id = Some("records".into());
    let center = state.options.canvas().center();

    controller
        .handle_intent(
            &mut state,
            VizIntent::PointerDown {
                pos: center,
                at: ms(0),
            },
        )
        .expect("PointerDown");

    assert_eq!(state.selected_node_id, None);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(VizCommand::ClearSelection)
    ));
}

#[test]
fn test_pointer_leave_without_move_cancels_drag() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let pos = state.positions["records"];

    controller
        .handle_intent(&mut state, VizIntent::PointerDown { pos, at: ms(0) })
        .expect("PointerDown");
    controller
        .handle_intent(&mut state, VizIntent::PointerLeft)
        .expect("PointerLeft");

    assert_eq!(state.drag.dragging_node_id(), None);
    assert_eq!(state.selected_node_id, None);
    assert_eq!(state.layout_mode, LayoutMode::Circular);
}

#[test]
fn test_pointer_leave_after_move_commits() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let pos = state.positions["records"];

    controller
        .handle_intent(&mut state, VizIntent::PointerDown { pos, at: ms(0) })
        .expect("PointerDown");
    controller
        .handle_intent(
            &mut state,
            VizIntent::PointerMoved {
                pos: pos + Vec2::new(30.0, 0.0),
            },
        )
        .expect("PointerMoved");
    controller
        .handle_intent(&mut state, VizIntent::PointerLeft)
        .expect("PointerLeft");

    assert_eq!(state.layout_mode, LayoutMode::Custom);
    let saved = state.persistence.load_positions().expect("gespeichert");
    assert_eq!(saved["records"], pos + Vec2::new(30.0, 0.0));
}

#[test]
fn test_reset_layout_restores_circular_and_forgets_custom() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let circular = state.positions.clone();
    let start = circular["coordinator"];
    drag(&mut controller, &mut state, start, start + Vec2::new(40.0, 40.0));

    controller
        .handle_intent(&mut state, VizIntent::ResetLayoutRequested)
        .expect("Reset");

    assert_eq!(state.layout_mode, LayoutMode::Circular);
    assert_eq!(state.positions, circular);
    assert!(state.persistence.load_positions().is_none());
    assert_eq!(state.persistence.load_mode(), Some(LayoutMode::Circular));
}

#[test]
fn test_custom_with_invalid_json_falls_back_to_circular() {
    let store = MemoryStore::with_entries([
        (LAYOUT_MODE_KEY, "star"),
        (LAYOUT_POSITIONS_KEY, "{kaputt"),
    ]);
    let mut controller = VizController::new();
    let mut state = VizState::new(
        VizOptions::default(),
        default_catalog(),
        LayoutPersistence::new(store),
    );

    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeRequested {
                mode: LayoutMode::Custom,
            },
        )
        .expect("Custom-Anfrage");

    assert_eq!(state.layout_mode, LayoutMode::Circular);
    assert_eq!(state.positions.len(), state.node_count());
    assert!(state.positions["coordinator"].distance(Vec2::new(400.0, 100.0)) < 1e-3);
    // Fallback überschreibt den gespeicherten Modus nicht
    assert_eq!(state.persistence.load_mode(), Some(LayoutMode::Star));
}

#[test]
fn test_custom_restores_saved_positions_verbatim() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let start = state.positions["wellness"];
    drag(&mut controller, &mut state, start, Vec2::new(123.0, 456.0));
    let custom = state.positions.clone();

    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeNameRequested {
                name: "star".into(),
            },
        )
        .expect("Stern");
    assert_eq!(state.layout_mode, LayoutMode::Star);
    assert_eq!(state.positions["coordinator"], state.options.canvas().center());

    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeNameRequested {
                name: "custom".into(),
            },
        )
        .expect("Custom");
    assert_eq!(state.layout_mode, LayoutMode::Custom);
    assert_eq!(state.positions, custom);
}

#[test]
fn test_unknown_layout_name_applies_circular() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let circular = state.positions.clone();
    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeRequested {
                mode: LayoutMode::Hierarchical,
            },
        )
        .expect("Hierarchisch");

    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeNameRequested {
                name: "spiral".into(),
            },
        )
        .expect("Unbekannter Modus");

    assert_eq!(state.layout_mode, LayoutMode::Circular);
    assert_eq!(state.positions, circular);
}

#[test]
fn test_layout_change_during_drag_keeps_dragged_node() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let start = state.positions["symptom"];
    let live = start + Vec2::new(60.0, 10.0);

    controller
        .handle_intent(&mut state, VizIntent::PointerDown { pos: start, at: ms(0) })
        .expect("PointerDown");
    controller
        .handle_intent(&mut state, VizIntent::PointerMoved { pos: live })
        .expect("PointerMoved");
    controller
        .handle_intent(
            &mut state,
            VizIntent::LayoutModeRequested {
                mode: LayoutMode::Hierarchical,
            },
        )
        .expect("Layout-Wechsel");

    assert_eq!(state.layout_mode, LayoutMode::Hierarchical);
    assert_eq!(state.positions["symptom"], live);
    assert_eq!(state.positions["coordinator"].y, state.options.hierarchy_top);
    assert_eq!(state.drag.dragging_node_id(), Some("symptom"));
}

#[test]
fn test_commit_for_unknown_node_is_noop() {
    let (_controller, mut state) = make_state(MemoryStore::new());
    let before = state.positions.clone();

    handlers::drag::commit(&mut state, "ghost").expect("No-op sollte Ok liefern");

    assert_eq!(state.layout_mode, LayoutMode::Circular);
    assert_eq!(state.positions, before);
    assert!(state.persistence.load_positions().is_none());
}

#[test]
fn test_ticks_never_touch_positions() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let before = state.positions.clone();

    for _ in 0..5 {
        controller
            .handle_intent(&mut state, VizIntent::CoarseTickElapsed)
            .expect("CoarseTick");
        for _ in 0..12 {
            controller
                .handle_intent(&mut state, VizIntent::FineTickElapsed)
                .expect("FineTick");
        }
    }

    assert_eq!(state.positions, before);
    assert_eq!(state.statuses.len(), state.node_count());
}

#[test]
fn test_activity_feed_is_sorted_and_capped() {
    let (mut controller, mut state) = make_state(MemoryStore::new());
    let entries: Vec<ActivityEntry> = (0..15)
        .map(|minute| ActivityEntry {
            agent_name: format!("Agent {minute}"),
            action: "Analyse".into(),
            confidence_score: Some(0.9),
            timestamp: Utc
                .with_ymd_and_hms(2024, 5, 1, 12, minute, 0)
                .single()
                .expect("gültiges Datum"),
        })
        .collect();

    controller
        .handle_intent(&mut state, VizIntent::ActivityFeedUpdated { entries })
        .expect("Feed");

    assert_eq!(state.activity.len(), state.options.activity_limit);
    assert_eq!(state.activity[0].agent_name, "Agent 14");
    assert!(state
        .activity
        .windows(2)
        .all(|pair| pair[0].timestamp >= pair[1].timestamp));
}

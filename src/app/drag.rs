//! Drag-Zustandsmaschine für das Verschieben einzelner Nodes.
//!
//! `Idle → Dragging` bei Pointer-Down auf einem Node, `Dragging → Idle` bei
//! Pointer-Up oder Pointer-Leave. Bewegungen innerhalb der Klick-Schwelle
//! verschieben nichts; ein Loslassen ohne Bewegung ist ein Klick.

use crate::core::CanvasBounds;
use glam::Vec2;
use std::time::Duration;

/// Zustand der Drag-Interaktion
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// Kein Node gegriffen
    #[default]
    Idle,
    /// Ein Node ist gegriffen
    Dragging {
        /// Gegriffener Node
        node_id: String,
        /// Zeiger minus Node-Position zum Greifzeitpunkt
        offset: Vec2,
        /// Zeigerposition beim Greifen
        origin: Vec2,
        /// Klick-Schwelle wurde überschritten
        moved: bool,
    },
}

/// Ergebnis beim Beenden eines Drags
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragRelease {
    /// Es war nichts gegriffen
    Ignored,
    /// Zeiger hat die Fläche ohne Bewegung verlassen
    Cancelled { node_id: String },
    /// Klick ohne Bewegung; `double` bei zweitem Klick im Doppelklick-Fenster
    Click { node_id: String, double: bool },
    /// Node wurde verschoben und abgelegt
    Dropped { node_id: String },
}

/// Zustandsmaschine einer Visualisierungs-Sitzung (höchstens ein gezogener Node)
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    click_threshold: f32,
    double_click_window: Duration,
    last_click: Option<(String, Duration)>,
}

impl DragController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new(click_threshold: f32, double_click_window: Duration) -> Self {
        Self {
            state: DragState::Idle,
            click_threshold: click_threshold.max(0.0),
            double_click_window,
            last_click: None,
        }
    }

    /// Aktueller Zustand
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// ID des gegriffenen Nodes, falls vorhanden.
    pub fn dragging_node_id(&self) -> Option<&str> {
        match &self.state {
            DragState::Dragging { node_id, .. } => Some(node_id),
            DragState::Idle => None,
        }
    }

    /// Greift einen Node. Liefert `false`, wenn bereits ein Node gegriffen ist.
    pub fn press(&mut self, node_id: String, node_pos: Vec2, pointer: Vec2) -> bool {
        if !matches!(self.state, DragState::Idle) {
            return false;
        }
        self.state = DragState::Dragging {
            node_id,
            offset: pointer - node_pos,
            origin: pointer,
            moved: false,
        };
        true
    }

    /// Führt den gegriffenen Node dem Zeiger nach.
    ///
    /// Liefert die neue, auf `margin` geklemmte Position, sobald die Klick-Schwelle
    /// einmal überschritten wurde.
    pub fn drag_to(
        &mut self,
        pointer: Vec2,
        canvas: &CanvasBounds,
        margin: f32,
    ) -> Option<(String, Vec2)> {
        let DragState::Dragging {
            node_id,
            offset,
            origin,
            moved,
        } = &mut self.state
        else {
            return None;
        };

        if !*moved && pointer.distance(*origin) <= self.click_threshold {
            return None;
        }
        *moved = true;
        Some((node_id.clone(), canvas.clamp(pointer - *offset, margin)))
    }

    /// Beendet die Interaktion. `at = None` steht für Pointer-Leave.
    pub fn release(&mut self, at: Option<Duration>) -> DragRelease {
        let DragState::Dragging { node_id, moved, .. } = std::mem::take(&mut self.state) else {
            return DragRelease::Ignored;
        };

        if moved {
            self.last_click = None;
            return DragRelease::Dropped { node_id };
        }

        let Some(at) = at else {
            return DragRelease::Cancelled { node_id };
        };

        let double = self.last_click.as_ref().is_some_and(|(last_id, last_at)| {
            *last_id == node_id && at.saturating_sub(*last_at) <= self.double_click_window
        });
        self.last_click = if double {
            None
        } else {
            Some((node_id.clone(), at))
        };
        DragRelease::Click { node_id, double }
    }

    /// Bricht einen laufenden Drag ohne Commit ab.
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> DragController {
        DragController::new(4.0, Duration::from_millis(300))
    }

    fn canvas() -> CanvasBounds {
        CanvasBounds::new(800.0, 600.0)
    }

    #[test]
    fn press_keeps_grab_offset_under_cursor() {
        let mut drag = controller();
        assert!(drag.press("a".into(), Vec2::new(200.0, 200.0), Vec2::new(210.0, 195.0)));

        let moved = drag.drag_to(Vec2::new(310.0, 295.0), &canvas(), 60.0);
        assert_eq!(moved, Some(("a".to_string(), Vec2::new(300.0, 300.0))));
    }

    #[test]
    fn second_press_while_dragging_is_rejected() {
        let mut drag = controller();
        assert!(drag.press("a".into(), Vec2::ZERO, Vec2::ZERO));
        assert!(!drag.press("b".into(), Vec2::ZERO, Vec2::ZERO));
        assert_eq!(drag.dragging_node_id(), Some("a"));
    }

    #[test]
    fn move_within_threshold_does_not_drag() {
        let mut drag = controller();
        drag.press("a".into(), Vec2::new(200.0, 200.0), Vec2::new(200.0, 200.0));
        assert_eq!(drag.drag_to(Vec2::new(202.0, 202.0), &canvas(), 60.0), None);
        assert_eq!(
            drag.release(Some(Duration::from_millis(100))),
            DragRelease::Click {
                node_id: "a".into(),
                double: false
            }
        );
        assert_eq!(drag.state(), &DragState::Idle);
    }

    #[test]
    fn drag_is_clamped_to_margin() {
        let mut drag = controller();
        drag.press("a".into(), Vec2::new(100.0, 100.0), Vec2::new(100.0, 100.0));
        let (_, pos) = drag
            .drag_to(Vec2::new(-500.0, 5000.0), &canvas(), 60.0)
            .expect("Drag erwartet");
        assert_eq!(pos, Vec2::new(60.0, 540.0));
        assert_eq!(
            drag.release(None),
            DragRelease::Dropped {
                node_id: "a".into()
            }
        );
    }

    #[test]
    fn returning_to_origin_after_move_is_still_a_drag() {
        let mut drag = controller();
        drag.press("a".into(), Vec2::new(200.0, 200.0), Vec2::new(200.0, 200.0));
        drag.drag_to(Vec2::new(250.0, 200.0), &canvas(), 60.0);
        let back = drag.drag_to(Vec2::new(200.0, 200.0), &canvas(), 60.0);
        assert_eq!(back, Some(("a".to_string(), Vec2::new(200.0, 200.0))));
        assert!(matches!(
            drag.release(Some(Duration::ZERO)),
            DragRelease::Dropped { .. }
        ));
    }

    #[test]
    fn leave_without_move_cancels() {
        let mut drag = controller();
        drag.press("a".into(), Vec2::ZERO, Vec2::ZERO);
        assert_eq!(
            drag.release(None),
            DragRelease::Cancelled {
                node_id: "a".into()
            }
        );
        assert_eq!(drag.release(None), DragRelease::Ignored);
    }

    #[test]
    fn double_click_detection() {
        let mut drag = controller();
        let click = |drag: &mut DragController, id: &str, ms: u64| {
            drag.press(id.into(), Vec2::ZERO, Vec2::ZERO);
            drag.release(Some(Duration::from_millis(ms)))
        };

        assert_eq!(
            click(&mut drag, "a", 1000),
            DragRelease::Click {
                node_id: "a".into(),
                double: false
            }
        );
        assert_eq!(
            click(&mut drag, "a", 1200),
            DragRelease::Click {
                node_id: "a".into(),
                double: true
            }
        );
        // Dritter Klick beginnt eine neue Serie
        assert_eq!(
            click(&mut drag, "a", 1300),
            DragRelease::Click {
                node_id: "a".into(),
                double: false
            }
        );
        // Anderer Node oder zu spät → kein Doppelklick
        assert_eq!(
            click(&mut drag, "b", 1350),
            DragRelease::Click {
                node_id: "b".into(),
                double: false
            }
        );
        assert_eq!(
            click(&mut drag, "b", 2000),
            DragRelease::Click {
                node_id: "b".into(),
                double: false
            }
        );
    }
}

//! Zeichenfläche der Visualisierung (Canvas-Koordinaten in Pixeln).

use glam::Vec2;

/// Abmessungen der Zeichenfläche. Ursprung oben links, Y wächst nach unten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    /// Breite in Pixeln
    pub width: f32,
    /// Höhe in Pixeln
    pub height: f32,
}

impl CanvasBounds {
    /// Erstellt eine neue Zeichenfläche.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    /// Mittelpunkt der Zeichenfläche
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Innerer Bereich `(min, max)` mit Mindestabstand `margin` zum Rand.
    ///
    /// Ist die Fläche schmaler als `2 * margin`, schrumpft der Rand auf die halbe
    /// Abmessung; es gilt immer `min <= max`.
    pub fn inner_rect(&self, margin: f32) -> (Vec2, Vec2) {
        let margin = margin.max(0.0);
        let min = Vec2::new(margin.min(self.width * 0.5), margin.min(self.height * 0.5));
        let max = Vec2::new(
            (self.width - margin).max(min.x),
            (self.height - margin).max(min.y),
        );
        (min, max)
    }

    /// Klemmt eine Position in den inneren Bereich mit Rand `margin`.
    /// Nicht-endliche Koordinaten landen auf dem Mittelpunkt.
    pub fn clamp(&self, pos: Vec2, margin: f32) -> Vec2 {
        let (min, max) = self.inner_rect(margin);
        let center = self.center();
        let axis = |value: f32, lo: f32, hi: f32, fallback: f32| {
            if value.is_finite() {
                value.clamp(lo, hi)
            } else {
                fallback
            }
        };
        Vec2::new(
            axis(pos.x, min.x, max.x, center.x),
            axis(pos.y, min.y, max.y, center.y),
        )
    }

    /// Prüft ob eine Position in der Zeichenfläche liegt (Rand inklusive).
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.x <= self.width && pos.y >= 0.0 && pos.y <= self.height
    }
}

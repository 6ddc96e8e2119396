//! Kreis-Verteilung (auch Ring des Stern-Layouts).

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Verteilt `count` Punkte gleichmäßig auf einem Kreis; der erste liegt oben.
pub(super) fn ring_positions(count: usize, center: Vec2, radius: f32) -> Vec<Vec2> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f32;
    (0..count)
        .map(|i| {
            let angle = -FRAC_PI_2 + i as f32 * step;
            center + Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}

//! Force-Directed-Relaxation mit fester Iterationszahl.
//!
//! Abstoßung zwischen allen Paaren (`k / d²`), Anziehung entlang jeder
//! aufgelösten Kante (`d · c`). Keine Konvergenz-Schleife: die Laufzeit ist
//! durch `iterations` begrenzt.

use super::{ForceParams, NodePositions};
use crate::core::{AgentGraph, CanvasBounds};
use glam::Vec2;
use rand::Rng;
use std::f32::consts::TAU;

/// Untergrenze des Abstands in der Abstoßungsformel.
pub const MIN_FORCE_DISTANCE: f32 = 1.0;

pub(super) fn layout<R: Rng + ?Sized>(
    graph: &AgentGraph,
    canvas: CanvasBounds,
    params: &ForceParams,
    rng: &mut R,
) -> NodePositions {
    let ids: Vec<&str> = graph.node_ids().collect();
    let count = ids.len();

    let (min, max) = canvas.inner_rect(params.margin);
    let mut positions: Vec<Vec2> = (0..count)
        .map(|_| Vec2::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y)))
        .collect();

    // Kanten als Index-Paare; Selbst-Kanten tragen keine Kraft
    let edges: Vec<(usize, usize)> = graph
        .edges()
        .filter_map(|edge| Some((graph.index_of(edge.from)?, graph.index_of(edge.to)?)))
        .filter(|(a, b)| a != b)
        .collect();

    let mut forces = vec![Vec2::ZERO; count];
    for _ in 0..params.iterations {
        forces.iter_mut().for_each(|f| *f = Vec2::ZERO);

        for i in 0..count {
            for j in (i + 1)..count {
                let delta = positions[i] - positions[j];
                let distance = delta.length();
                let direction = if distance > f32::EPSILON {
                    delta / distance
                } else {
                    separation_direction(i, j)
                };
                let clamped = distance.max(MIN_FORCE_DISTANCE);
                let push = direction * (params.repulsion / (clamped * clamped));
                forces[i] += push;
                forces[j] -= push;
            }
        }

        for &(a, b) in &edges {
            let delta = positions[b] - positions[a];
            let distance = delta.length();
            if distance <= f32::EPSILON {
                continue;
            }
            let pull = delta / distance * (distance * params.attraction);
            forces[a] += pull;
            forces[b] -= pull;
        }

        for (pos, force) in positions.iter_mut().zip(&forces) {
            *pos = canvas.clamp(*pos + *force * params.damping, params.margin);
        }
    }

    ids.into_iter()
        .map(String::from)
        .zip(positions)
        .collect()
}

/// Deterministische Trennrichtung für exakt übereinanderliegende Nodes.
fn separation_direction(i: usize, j: usize) -> Vec2 {
    let angle = ((i * 31 + j * 17) % 360) as f32 / 360.0 * TAU;
    Vec2::new(angle.cos(), angle.sin())
}

// Rust guideline compliant 2026-02-06

//! Force-directed 2D layout for the automaton graph.
//!
//! Implements a seeded Fruchterman-Reingold spring layout: node positions
//! start at seeded-random coordinates and are relaxed under pairwise
//! repulsion and per-edge attraction with a linearly cooling temperature.
//! The same graph and seed always produce the same coordinates.

use crate::AutomatonGraph;

/// Minimum pair distance used when computing forces, to keep coincident
/// nodes from producing unbounded displacements.
const MIN_DISTANCE: f64 = 1e-2;

/// Computes node positions for the graph.
///
/// Positions are indexed by `NodeIndex::index()`. Output is centered on the
/// origin and scaled so the largest absolute coordinate is 1.0; the caller
/// maps this square onto page space.
///
/// # Arguments
///
/// * `graph` - The automaton graph to lay out
/// * `iterations` - Number of relaxation iterations
/// * `seed` - RNG seed for the initial positions
///
/// # Returns
///
/// One (x, y) pair per node. Empty for an empty graph; a single node sits
/// at the origin.
pub fn spring_layout(graph: &AutomatonGraph, iterations: usize, seed: u64) -> Vec<(f64, f64)> {
    let n = graph.node_count();
    if n == 0 {
        return Vec::new();
    }
    if n == 1 {
        return vec![(0.0, 0.0)];
    }

    let mut rng = fastrand::Rng::with_seed(seed);
    let mut pos: Vec<(f64, f64)> = (0..n).map(|_| (rng.f64(), rng.f64())).collect();

    let edges: Vec<(usize, usize)> = graph
        .edges()
        .map(|(from, to, _)| (from.index(), to.index()))
        .collect();

    // Optimal pairwise distance for a unit-area domain.
    let k = (1.0 / n as f64).sqrt();

    let mut temperature = 0.1;
    let cooling = temperature / (iterations + 1) as f64;

    for _ in 0..iterations {
        let mut disp = vec![(0.0_f64, 0.0_f64); n];

        // Repulsion between every node pair.
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = pos[i].0 - pos[j].0;
                let dy = pos[i].1 - pos[j].1;
                let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
                let force = k * k / dist;
                let fx = dx / dist * force;
                let fy = dy / dist * force;
                disp[i].0 += fx;
                disp[i].1 += fy;
                disp[j].0 -= fx;
                disp[j].1 -= fy;
            }
        }

        // Attraction along edges; self-loops exert no pull.
        for &(a, b) in &edges {
            if a == b {
                continue;
            }
            let dx = pos[a].0 - pos[b].0;
            let dy = pos[a].1 - pos[b].1;
            let dist = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let force = dist * dist / k;
            let fx = dx / dist * force;
            let fy = dy / dist * force;
            disp[a].0 -= fx;
            disp[a].1 -= fy;
            disp[b].0 += fx;
            disp[b].1 += fy;
        }

        // Move each node, capped by the current temperature.
        for i in 0..n {
            let (dx, dy) = disp[i];
            let length = (dx * dx + dy * dy).sqrt().max(MIN_DISTANCE);
            let limited = length.min(temperature);
            pos[i].0 += dx / length * limited;
            pos[i].1 += dy / length * limited;
        }

        temperature -= cooling;
    }

    rescale(&mut pos);
    pos
}

/// Centers positions on the origin and scales the largest absolute
/// coordinate to 1.0. Leaves a degenerate (all-coincident) layout centered
/// but unscaled.
fn rescale(pos: &mut [(f64, f64)]) {
    let n = pos.len() as f64;
    let mean_x = pos.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pos.iter().map(|p| p.1).sum::<f64>() / n;

    let mut limit = 0.0_f64;
    for p in pos.iter_mut() {
        p.0 -= mean_x;
        p.1 -= mean_y;
        limit = limit.max(p.0.abs()).max(p.1.abs());
    }

    if limit > 0.0 {
        for p in pos.iter_mut() {
            p.0 /= limit;
            p.1 /= limit;
        }
    }
}

use super::types::{Edge, GraphNode};

/// Link every pair of nodes closer than `threshold`.
///
/// Strength falls off linearly from 1 at distance 0 to 0 at the threshold;
/// pairs at or beyond the threshold are not linked. Each unordered pair is
/// visited once, so this is O(n²) per call. Node counts are bounded by what
/// a user creates by hand, so no spatial index is kept.
pub fn compute_edges(nodes: &[GraphNode], threshold: f64) -> Vec<Edge> {
	let mut edges = Vec::new();
	for (i, a) in nodes.iter().enumerate() {
		for (j, b) in nodes.iter().enumerate().skip(i + 1) {
			let (dx, dy) = (a.x - b.x, a.y - b.y);
			let dist = (dx * dx + dy * dy).sqrt();
			if dist < threshold {
				edges.push(Edge {
					source: i,
					target: j,
					strength: 1.0 - dist / threshold,
				});
			}
		}
	}
	edges
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	use super::*;
	use crate::components::galaxy_view::types::Origin;

	fn node(id: &str, x: f64, y: f64) -> GraphNode {
		GraphNode {
			id: id.into(),
			x,
			y,
			content: String::new(),
			origin: Origin::User,
		}
	}

	#[test]
	fn fifty_pixels_apart_gives_three_quarter_strength() {
		let nodes = [node("a", 300.0, 300.0), node("b", 350.0, 300.0)];
		let edges = compute_edges(&nodes, 200.0);
		assert_eq!(edges.len(), 1);
		assert_eq!((edges[0].source, edges[0].target), (0, 1));
		assert!((edges[0].strength - 0.75).abs() < 1e-12);
	}

	#[test]
	fn threshold_is_exclusive() {
		let nodes = [node("a", 0.0, 0.0), node("b", 120.0, 160.0)];
		assert!(compute_edges(&nodes, 200.0).is_empty());
	}

	#[test]
	fn coincident_nodes_link_at_full_strength() {
		let nodes = [node("a", 10.0, 10.0), node("b", 10.0, 10.0)];
		let edges = compute_edges(&nodes, 200.0);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].strength, 1.0);
	}

	#[test]
	fn no_nodes_or_single_node_gives_no_edges() {
		assert!(compute_edges(&[], 200.0).is_empty());
		assert!(compute_edges(&[node("a", 1.0, 1.0)], 200.0).is_empty());
	}

	#[test]
	fn random_scatter_matches_pairwise_distances() {
		let mut rng = StdRng::seed_from_u64(42);
		let nodes: Vec<GraphNode> = (0..30)
			.map(|i| node(&format!("n{i}"), rng.gen_range(0.0..600.0), rng.gen_range(0.0..600.0)))
			.collect();
		let edges = compute_edges(&nodes, 200.0);

		let mut seen = HashSet::new();
		for edge in &edges {
			assert!(edge.source < edge.target, "self or reversed pair");
			assert!(seen.insert((edge.source, edge.target)), "duplicate pair");
			assert!(edge.strength > 0.0 && edge.strength <= 1.0);
		}

		for i in 0..nodes.len() {
			for j in (i + 1)..nodes.len() {
				let d = ((nodes[i].x - nodes[j].x).powi(2) + (nodes[i].y - nodes[j].y).powi(2)).sqrt();
				let found = edges.iter().find(|e| e.source == i && e.target == j);
				if d < 200.0 {
					let edge = found.expect("close pair must be linked");
					assert!((edge.strength - (1.0 - d / 200.0)).abs() < 1e-9);
				} else {
					assert!(found.is_none());
				}
			}
		}
	}
}

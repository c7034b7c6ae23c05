use std::ops::Range;

use rand::Rng;

use super::types::{Bounds, GraphNode, IdeaRecord};

/// Placement range along one axis, at least one pixel wide.
fn axis_range(extent: f64, margin: f64) -> Range<f64> {
	let low = margin;
	let high = (extent - margin).max(low + 1.0);
	low..high
}

/// Scatter one node per record uniformly inside the margin-inset bounds.
///
/// There is no force model: every call re-randomizes every position, so
/// nodes jump whenever the record set changes.
pub fn layout<R: Rng + ?Sized>(
	records: &[IdeaRecord],
	bounds: Bounds,
	margin: f64,
	rng: &mut R,
) -> Vec<GraphNode> {
	let (xs, ys) = (
		axis_range(bounds.width, margin),
		axis_range(bounds.height, margin),
	);

	records
		.iter()
		.map(|record| GraphNode {
			id: record.id.clone(),
			x: rng.gen_range(xs.clone()),
			y: rng.gen_range(ys.clone()),
			content: record.content.clone(),
			origin: record.origin,
		})
		.collect()
}

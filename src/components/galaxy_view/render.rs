use std::borrow::Cow;

use super::config::GalaxyConfig;
use super::error::GalaxyError;
use super::particles;
use super::surface::Surface;
use super::types::{Bounds, Edge, FrameStats, GraphNode, Particle};

const ELLIPSIS: &str = "...";

/// Cut `content` to `max_chars` characters, appending an ellipsis if anything was dropped.
pub fn truncate_label(content: &str, max_chars: usize) -> Cow<'_, str> {
	match content.char_indices().nth(max_chars) {
		Some((cut, _)) => Cow::Owned(format!("{}{ELLIPSIS}", &content[..cut])),
		None => Cow::Borrowed(content),
	}
}

/// Paint one frame: fade, particles, edges, nodes, labels.
///
/// Particles are advanced against `bounds` right before each is drawn. A
/// surface with no area yields an empty frame and leaves particles untouched.
pub fn render_frame<S: Surface + ?Sized>(
	surface: &mut S,
	config: &GalaxyConfig,
	bounds: Bounds,
	particles: &mut [Particle],
	nodes: &[GraphNode],
	edges: &[Edge],
) -> Result<FrameStats, GalaxyError> {
	let size = surface.size();
	if !size.is_valid() {
		return Ok(FrameStats::default());
	}

	surface.fill_rect(0.0, 0.0, size.width, size.height, config.fade)?;
	draw_particles(surface, config, bounds, particles)?;
	draw_edges(surface, config, nodes, edges)?;
	draw_nodes(surface, config, nodes)?;

	Ok(FrameStats {
		particles: particles.len(),
		nodes: nodes.len(),
		edges: edges.len(),
	})
}

fn draw_particles<S: Surface + ?Sized>(
	surface: &mut S,
	config: &GalaxyConfig,
	bounds: Bounds,
	particles: &mut [Particle],
) -> Result<(), GalaxyError> {
	for particle in particles.iter_mut() {
		particles::advance(particle, bounds);
		surface.fill_circle(
			particle.x,
			particle.y,
			config.particle_radius,
			config.accent.with_alpha(particle.opacity),
		)?;
	}
	Ok(())
}

fn draw_edges<S: Surface + ?Sized>(
	surface: &mut S,
	config: &GalaxyConfig,
	nodes: &[GraphNode],
	edges: &[Edge],
) -> Result<(), GalaxyError> {
	for edge in edges {
		let (a, b) = (&nodes[edge.source], &nodes[edge.target]);
		surface.stroke_line(
			(a.x, a.y),
			(b.x, b.y),
			config.link_width,
			config.accent.with_alpha(edge.strength * config.link_max_alpha),
		)?;
	}
	Ok(())
}

fn draw_nodes<S: Surface + ?Sized>(
	surface: &mut S,
	config: &GalaxyConfig,
	nodes: &[GraphNode],
) -> Result<(), GalaxyError> {
	for node in nodes {
		let palette = config.palette(node.origin);
		surface.fill_circle(node.x, node.y, config.node_radius, palette.fill)?;
		surface.stroke_circle(node.x, node.y, config.halo_radius, config.halo_width, palette.halo)?;

		let label = truncate_label(&node.content, config.label_max_chars);
		surface.fill_text(
			&label,
			node.x,
			node.y + config.label_offset,
			&config.label_font,
			config.label_color,
		)?;
	}
	Ok(())
}

use log::debug;
use rand::Rng;

use super::config::GalaxyConfig;
use super::error::GalaxyError;
use super::layout::layout;
use super::linker::compute_edges;
use super::particles;
use super::render::render_frame;
use super::surface::Surface;
use super::types::{Bounds, FrameStats, GraphNode, IdeaRecord, Particle};

/// Everything one open galaxy view owns: the scattered nodes and the particle field.
///
/// Built by [`GalaxyState::open`] and dropped when the view closes. Nothing
/// here survives a close, so a reopen lays the nodes out again.
#[derive(Clone, Debug)]
pub struct GalaxyState {
	pub config: GalaxyConfig,
	pub bounds: Bounds,
	pub nodes: Vec<GraphNode>,
	pub particles: Vec<Particle>,
}

fn check_bounds(bounds: Bounds) -> Result<(), GalaxyError> {
	if bounds.is_valid() {
		Ok(())
	} else {
		Err(GalaxyError::InvalidBounds {
			width: bounds.width,
			height: bounds.height,
		})
	}
}

impl GalaxyState {
	pub fn open<R: Rng + ?Sized>(
		records: &[IdeaRecord],
		bounds: Bounds,
		config: GalaxyConfig,
		rng: &mut R,
	) -> Result<Self, GalaxyError> {
		check_bounds(bounds)?;
		let nodes = layout(records, bounds, config.layout_margin, rng);
		let particles = particles::initialize(config.particle_count, bounds, &config, rng);
		debug!(
			"galaxy opened: {} nodes, {} particles, {}x{}",
			nodes.len(),
			particles.len(),
			bounds.width,
			bounds.height
		);

		Ok(Self {
			config,
			bounds,
			nodes,
			particles,
		})
	}

	/// Track a new viewport size. Nodes keep their positions.
	///
	/// Particles left outside a shrunken viewport are pulled back onto its
	/// edge, otherwise they would flip velocity every tick without re-entering.
	pub fn resize(&mut self, bounds: Bounds) -> Result<(), GalaxyError> {
		check_bounds(bounds)?;
		self.bounds = bounds;
		for particle in &mut self.particles {
			particle.x = particle.x.clamp(0.0, bounds.width);
			particle.y = particle.y.clamp(0.0, bounds.height);
		}
		Ok(())
	}

	/// Link the nodes for this frame and paint it.
	pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> Result<FrameStats, GalaxyError> {
		let edges = compute_edges(&self.nodes, self.config.link_threshold);
		render_frame(
			surface,
			&self.config,
			self.bounds,
			&mut self.particles,
			&self.nodes,
			&edges,
		)
	}
}

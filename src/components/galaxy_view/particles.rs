use rand::Rng;

use super::config::GalaxyConfig;
use super::types::{Bounds, Particle};

/// Seed the decorative particle field.
///
/// Positions are uniform over `bounds`, each velocity component is uniform in
/// `[-particle_max_speed, particle_max_speed]` and opacity is uniform in the
/// configured range. `bounds` must be valid.
pub fn initialize<R: Rng + ?Sized>(
	count: usize,
	bounds: Bounds,
	config: &GalaxyConfig,
	rng: &mut R,
) -> Vec<Particle> {
	let speed = config.particle_max_speed.abs();
	(0..count)
		.map(|_| Particle {
			x: rng.gen_range(0.0..=bounds.width),
			y: rng.gen_range(0.0..=bounds.height),
			vx: rng.gen_range(-speed..=speed),
			vy: rng.gen_range(-speed..=speed),
			opacity: rng.gen_range(config.particle_opacity_min..=config.particle_opacity_max),
		})
		.collect()
}

/// Move one particle by its velocity and bounce it off the walls.
///
/// Each axis is checked on its own, so a corner crossing flips both
/// components in the same tick. The position itself is not clamped.
pub fn advance(particle: &mut Particle, bounds: Bounds) {
	particle.x += particle.vx;
	particle.y += particle.vy;

	if particle.x < 0.0 || particle.x > bounds.width {
		particle.vx = -particle.vx;
	}
	if particle.y < 0.0 || particle.y > bounds.height {
		particle.vy = -particle.vy;
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	const BOUNDS: Bounds = Bounds {
		width: 800.0,
		height: 600.0,
	};

	fn particle(x: f64, y: f64, vx: f64, vy: f64) -> Particle {
		Particle {
			x,
			y,
			vx,
			vy,
			opacity: 0.5,
		}
	}

	#[test]
	fn initialize_respects_ranges() {
		let mut rng = StdRng::seed_from_u64(7);
		let field = initialize(50, BOUNDS, &GalaxyConfig::default(), &mut rng);
		assert_eq!(field.len(), 50);
		for p in &field {
			assert!((0.0..=800.0).contains(&p.x));
			assert!((0.0..=600.0).contains(&p.y));
			assert!(p.vx.abs() <= 0.25 && p.vy.abs() <= 0.25);
			assert!((0.2..=0.7).contains(&p.opacity));
		}
	}

	#[test]
	fn zero_velocity_never_moves() {
		let mut p = particle(10.0, 20.0, 0.0, 0.0);
		for _ in 0..100 {
			advance(&mut p, BOUNDS);
		}
		assert_eq!((p.x, p.y), (10.0, 20.0));
	}

	#[test]
	fn one_tick_adds_velocity_inside_bounds() {
		let mut p = particle(100.0, 100.0, 0.2, -0.1);
		advance(&mut p, BOUNDS);
		assert!((p.x - 100.2).abs() < 1e-12);
		assert!((p.y - 99.9).abs() < 1e-12);
		assert_eq!((p.vx, p.vy), (0.2, -0.1));
	}

	#[test]
	fn crossing_a_wall_flips_only_that_axis() {
		let mut p = particle(799.9, 300.0, 0.25, 0.1);
		advance(&mut p, BOUNDS);
		assert_eq!(p.vx, -0.25);
		assert_eq!(p.vy, 0.1);

		// Stays reflected on the following ticks.
		advance(&mut p, BOUNDS);
		assert_eq!(p.vx, -0.25);
		assert!(p.x < 800.0);
	}

	#[test]
	fn corner_crossing_flips_both_axes() {
		let mut p = particle(0.1, 0.1, -0.2, -0.2);
		advance(&mut p, BOUNDS);
		assert_eq!((p.vx, p.vy), (0.2, 0.2));
	}
}

use super::types::Origin;

/// An sRGB colour with straight alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Opacity in `0.0..=1.0`.
	pub a: f64,
}

impl Rgba {
	/// Opaque white.
	pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

	/// Opaque colour.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Colour with explicit opacity.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same colour at opacity `a`, clamped to `0.0..=1.0`.
	pub fn with_alpha(self, a: f64) -> Self {
		Self {
			a: a.clamp(0.0, 1.0),
			..self
		}
	}

	/// CSS colour string accepted by the canvas 2D context.
	pub fn to_css(&self) -> String {
		format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
	}
}

/// Fill and halo colours for one node origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePalette {
	/// Node disc.
	pub fill: Rgba,
	/// Ring just outside the disc.
	pub halo: Rgba,
}

/// Tunables for the galaxy view. The defaults reproduce the stock look.
#[derive(Clone, Debug, PartialEq)]
pub struct GalaxyConfig {
	/// Size of the background particle field.
	pub particle_count: usize,
	/// Largest absolute velocity component, px/frame.
	pub particle_max_speed: f64,
	/// Lower bound of the random per-particle opacity.
	pub particle_opacity_min: f64,
	/// Upper bound (exclusive) of the random per-particle opacity.
	pub particle_opacity_max: f64,
	/// Particle dot radius, px.
	pub particle_radius: f64,
	/// Distance below which two nodes are linked.
	pub link_threshold: f64,
	/// Edge stroke alpha at full strength.
	pub link_max_alpha: f64,
	/// Edge stroke width, px.
	pub link_width: f64,
	/// Keep-out band along every canvas edge for node placement.
	pub layout_margin: f64,
	/// Node disc radius, px.
	pub node_radius: f64,
	/// Halo ring radius, px.
	pub halo_radius: f64,
	/// Halo stroke width, px.
	pub halo_width: f64,
	/// Longer contents are cut to this many characters plus `...`.
	pub label_max_chars: usize,
	/// Label baseline distance below the node centre.
	pub label_offset: f64,
	/// CSS font for labels.
	pub label_font: String,
	/// Label text colour.
	pub label_color: Rgba,
	/// Painted over the whole surface each frame to fade the previous one.
	pub fade: Rgba,
	/// Particle and edge colour.
	pub accent: Rgba,
	/// Colours for [`Origin::Ai`] nodes.
	pub ai: NodePalette,
	/// Colours for [`Origin::User`] nodes.
	pub user: NodePalette,
}

impl Default for GalaxyConfig {
	fn default() -> Self {
		Self {
			particle_count: 50,
			particle_max_speed: 0.25,
			particle_opacity_min: 0.2,
			particle_opacity_max: 0.7,
			particle_radius: 1.0,
			link_threshold: 200.0,
			link_max_alpha: 0.3,
			link_width: 1.0,
			layout_margin: 100.0,
			node_radius: 20.0,
			halo_radius: 22.0,
			halo_width: 2.0,
			label_max_chars: 20,
			label_offset: 35.0,
			label_font: "12px Inter, sans-serif".into(),
			label_color: Rgba::WHITE,
			fade: Rgba::rgba(15, 23, 42, 0.1),
			accent: Rgba::rgb(139, 92, 246),
			ai: NodePalette {
				fill: Rgba::rgb(0x3b, 0x82, 0xf6),
				halo: Rgba::rgb(0x60, 0xa5, 0xfa),
			},
			user: NodePalette {
				fill: Rgba::rgb(0x6b, 0x72, 0x80),
				halo: Rgba::rgb(0x9c, 0xa3, 0xaf),
			},
		}
	}
}

impl GalaxyConfig {
	/// Colours for nodes of the given origin.
	pub fn palette(&self, origin: Origin) -> NodePalette {
		match origin {
			Origin::Ai => self.ai,
			Origin::User => self.user,
		}
	}
}

/// Who authored an idea card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
	/// Typed in by the user.
	User,
	/// Suggested by the assistant.
	Ai,
}

/// An idea card as the host application owns it.
#[derive(Clone, Debug, PartialEq)]
pub struct IdeaRecord {
	/// Stable key, unique within the host's list.
	pub id: String,
	/// Card text; the galaxy shows a truncated label of it.
	pub content: String,
	/// Picks the node colours.
	pub origin: Origin,
}

impl IdeaRecord {
	/// Build a record from anything string-like.
	pub fn new(id: impl Into<String>, content: impl Into<String>, origin: Origin) -> Self {
		Self {
			id: id.into(),
			content: content.into(),
			origin,
		}
	}
}

/// Drawable area in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	pub width: f64,
	pub height: f64,
}

impl Bounds {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Both dimensions finite and strictly positive.
	pub fn is_valid(&self) -> bool {
		self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
	}
}

/// A positioned idea in the galaxy.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphNode {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub content: String,
	pub origin: Origin,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
	pub x: f64,
	pub y: f64,
	pub vx: f64,
	pub vy: f64,
	pub opacity: f64,
}

/// A proximity link between two nodes of the current frame.
///
/// `source` and `target` index into the node slice the edge was computed
/// from, with `source < target`. Edges are rebuilt every frame and never
/// outlive that slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
	pub source: usize,
	pub target: usize,
	pub strength: f64,
}

/// Counters reported for each rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
	pub particles: usize,
	pub nodes: usize,
	pub edges: usize,
}

use std::f64::consts::PI;

use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::config::Rgba;
use super::error::GalaxyError;
use super::types::Bounds;

/// The drawing primitives the frame renderer needs.
pub trait Surface {
	/// Current drawable size in pixels.
	fn size(&self) -> Bounds;
	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) -> Result<(), GalaxyError>;
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) -> Result<(), GalaxyError>;
	fn stroke_circle(
		&mut self,
		x: f64,
		y: f64,
		radius: f64,
		line_width: f64,
		color: Rgba,
	) -> Result<(), GalaxyError>;
	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		line_width: f64,
		color: Rgba,
	) -> Result<(), GalaxyError>;
	/// Text horizontally centered on `x`, baseline at `y`.
	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Rgba) -> Result<(), GalaxyError>;
}

fn render_failure(err: JsValue) -> GalaxyError {
	GalaxyError::RenderFailure(format!("{err:?}"))
}

/// A `<canvas>` element and its 2D context.
pub struct Canvas2dSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
	pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
		Self { canvas, ctx }
	}

	/// Acquire the 2D context of `canvas`.
	pub fn from_canvas(canvas: HtmlCanvasElement) -> Result<Self, GalaxyError> {
		let ctx = canvas
			.get_context("2d")
			.map_err(render_failure)?
			.ok_or_else(|| GalaxyError::RenderFailure("2d context unavailable".into()))?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|obj| render_failure(obj.into()))?;
		Ok(Self::new(canvas, ctx))
	}

	fn circle_path(&self, x: f64, y: f64, radius: f64) -> Result<(), GalaxyError> {
		self.ctx.begin_path();
		self.ctx.arc(x, y, radius, 0.0, 2.0 * PI).map_err(render_failure)
	}
}

impl Surface for Canvas2dSurface {
	fn size(&self) -> Bounds {
		Bounds::new(self.canvas.width() as f64, self.canvas.height() as f64)
	}

	fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) -> Result<(), GalaxyError> {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill_rect(x, y, width, height);
		Ok(())
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) -> Result<(), GalaxyError> {
		self.circle_path(x, y, radius)?;
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
		Ok(())
	}

	fn stroke_circle(
		&mut self,
		x: f64,
		y: f64,
		radius: f64,
		line_width: f64,
		color: Rgba,
	) -> Result<(), GalaxyError> {
		self.circle_path(x, y, radius)?;
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(line_width);
		self.ctx.stroke();
		Ok(())
	}

	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		line_width: f64,
		color: Rgba,
	) -> Result<(), GalaxyError> {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(line_width);
		self.ctx.stroke();
		Ok(())
	}

	fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Rgba) -> Result<(), GalaxyError> {
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.set_font(font);
		self.ctx.set_text_align("center");
		self.ctx.fill_text(text, x, y).map_err(render_failure)
	}
}

#[cfg(test)]
pub(crate) mod recording {
	use super::*;

	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		FillRect { x: f64, y: f64, width: f64, height: f64, color: Rgba },
		FillCircle { x: f64, y: f64, radius: f64, color: Rgba },
		StrokeCircle { x: f64, y: f64, radius: f64, line_width: f64, color: Rgba },
		Line { from: (f64, f64), to: (f64, f64), line_width: f64, color: Rgba },
		Text { text: String, x: f64, y: f64, font: String, color: Rgba },
	}

	/// Surface that records every call instead of drawing.
	///
	/// With `fail_after` set, calls past that many recorded ones fail with
	/// `RenderFailure`, standing in for a lost context.
	#[derive(Debug)]
	pub struct RecordingSurface {
		pub bounds: Bounds,
		pub calls: Vec<DrawCall>,
		pub fail_after: Option<usize>,
	}

	impl RecordingSurface {
		pub fn new(width: f64, height: f64) -> Self {
			Self {
				bounds: Bounds::new(width, height),
				calls: Vec::new(),
				fail_after: None,
			}
		}

		fn push(&mut self, call: DrawCall) -> Result<(), GalaxyError> {
			if self.fail_after.is_some_and(|limit| self.calls.len() >= limit) {
				return Err(GalaxyError::RenderFailure("context lost".into()));
			}
			self.calls.push(call);
			Ok(())
		}
	}

	impl Surface for RecordingSurface {
		fn size(&self) -> Bounds {
			self.bounds
		}

		fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, color: Rgba) -> Result<(), GalaxyError> {
			self.push(DrawCall::FillRect { x, y, width, height, color })
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Rgba) -> Result<(), GalaxyError> {
			self.push(DrawCall::FillCircle { x, y, radius, color })
		}

		fn stroke_circle(
			&mut self,
			x: f64,
			y: f64,
			radius: f64,
			line_width: f64,
			color: Rgba,
		) -> Result<(), GalaxyError> {
			self.push(DrawCall::StrokeCircle { x, y, radius, line_width, color })
		}

		fn stroke_line(
			&mut self,
			from: (f64, f64),
			to: (f64, f64),
			line_width: f64,
			color: Rgba,
		) -> Result<(), GalaxyError> {
			self.push(DrawCall::Line { from, to, line_width, color })
		}

		fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: Rgba) -> Result<(), GalaxyError> {
			self.push(DrawCall::Text {
				text: text.into(),
				x,
				y,
				font: font.into(),
				color,
			})
		}
	}
}

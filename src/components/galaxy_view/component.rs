use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use leptos::ev;
use leptos::prelude::*;
use log::{debug, error, trace, warn};
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, Window};

use super::animation::{AnimationLoop, CancelToken, FrameScheduler};
use super::config::GalaxyConfig;
use super::error::GalaxyError;
use super::surface::Canvas2dSurface;
use super::types::{Bounds, IdeaRecord};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type SharedLoop = Rc<RefCell<AnimationLoop<RafScheduler>>>;
type LoopSlot = Rc<RefCell<Option<SharedLoop>>>;

/// `requestAnimationFrame` / `cancelAnimationFrame` on the browser window.
pub struct RafScheduler {
	window: Window,
	callback: FrameCallback,
}

impl FrameScheduler for RafScheduler {
	type Handle = i32;

	fn request_frame(&mut self) -> Result<i32, GalaxyError> {
		let callback = self.callback.borrow();
		let callback = callback
			.as_ref()
			.ok_or_else(|| GalaxyError::Scheduler("frame callback not installed".into()))?;
		self.window
			.request_animation_frame(callback.as_ref().unchecked_ref())
			.map_err(|err| GalaxyError::Scheduler(format!("{err:?}")))
	}

	fn cancel_frame(&mut self, handle: i32) {
		let _ = self.window.cancel_animation_frame(handle);
	}
}

fn viewport(
	window: &Window,
	canvas: &HtmlCanvasElement,
	fullscreen: bool,
	width: Option<f64>,
	height: Option<f64>,
	inset: f64,
) -> Bounds {
	if fullscreen {
		let (w, h) = (
			window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(800.0),
			window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(600.0),
		);
		return Bounds::new(w - inset, h);
	}
	Bounds::new(
		width.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_width() as f64)
				.unwrap_or(800.0)
		}),
		height.unwrap_or_else(|| {
			canvas
				.parent_element()
				.map(|p| p.client_height() as f64)
				.unwrap_or(600.0)
		}),
	)
}

fn set_canvas_size(canvas: &HtmlCanvasElement, bounds: Bounds) {
	canvas.set_width(bounds.width.max(0.0) as u32);
	canvas.set_height(bounds.height.max(0.0) as u32);
}

/// Build the loop and the frame closure that drives it.
///
/// The closure only holds a weak handle, so dropping the loop (which cancels
/// its pending frame) also releases the closure.
fn build_loop(window: &Window, canvas: HtmlCanvasElement, config: GalaxyConfig) -> Result<SharedLoop, GalaxyError> {
	let mut surface = Canvas2dSurface::from_canvas(canvas)?;
	let callback: FrameCallback = Rc::new(RefCell::new(None));
	let scheduler = RafScheduler {
		window: window.clone(),
		callback: callback.clone(),
	};
	let anim: SharedLoop = Rc::new(RefCell::new(AnimationLoop::new(scheduler, config)));

	let weak = Rc::downgrade(&anim);
	*callback.borrow_mut() = Some(Closure::new(move || {
		let Some(anim) = weak.upgrade() else {
			return;
		};
		match anim.borrow_mut().frame(&mut surface) {
			Ok(Some(stats)) => trace!(
				"galaxy frame: {} particles, {} nodes, {} edges",
				stats.particles, stats.nodes, stats.edges
			),
			Ok(None) => {}
			Err(err) => error!("galaxy view frozen: {err}"),
		}
	}));
	Ok(anim)
}

/// The loop slot and canvas, if the view is still mounted.
///
/// Window listeners can fire after the owner is disposed, so the node ref is
/// read with `try_get_untracked` and only once the slot is known to be alive.
fn mounted_canvas<T>(
	slot: &Weak<RefCell<Option<T>>>,
	canvas_ref: NodeRef<leptos::html::Canvas>,
) -> Option<(Rc<RefCell<Option<T>>>, HtmlCanvasElement)> {
	let slot = slot.upgrade()?;
	let canvas = canvas_ref.try_get_untracked().flatten()?;
	Some((slot, canvas))
}

/// Stop the running activation, then tell the host. `notify` runs once per view.
///
/// The token is cancelled first so a loop that is mid-frame still stops before
/// its next reschedule.
fn dismiss<S: FrameScheduler>(
	anim: Option<&RefCell<AnimationLoop<S>>>,
	token: &CancelToken,
	closed: &Cell<bool>,
	notify: impl FnOnce(),
) {
	token.cancel();
	if let Some(Ok(mut anim)) = anim.map(RefCell::try_borrow_mut) {
		anim.close();
	}
	if !closed.replace(true) {
		notify();
	}
}

/// Galaxy mode: the host's ideas as a drifting node-link diagram.
///
/// Every change of `ideas` restarts the animation with a fresh random
/// layout. `on_close` fires once when the user dismisses the view; the host
/// unmounts it, which stops the loop.
#[component]
pub fn GalaxyView(
	/// Ideas to lay out. Each change restarts the view.
	#[prop(into)]
	ideas: Signal<Vec<IdeaRecord>>,
	/// Fired once when the close button is pressed.
	#[prop(into)]
	on_close: Callback<()>,
	/// Size the canvas from the window and follow its resizes.
	#[prop(default = false)]
	fullscreen: bool,
	/// Fixed canvas width; defaults to the parent element's width.
	#[prop(default = None)]
	width: Option<f64>,
	/// Fixed canvas height; defaults to the parent element's height.
	#[prop(default = None)]
	height: Option<f64>,
	/// Horizontal space reserved by host panels in fullscreen mode.
	#[prop(default = 0.0)]
	inset: f64,
	/// Colours, sizes and counts for the drawing.
	#[prop(default = GalaxyConfig::default())]
	config: GalaxyConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let slot: LoopSlot = Rc::new(RefCell::new(None));
	let (slot_init, slot_resize, slot_close) = (slot.clone(), Rc::downgrade(&slot), slot);
	let token = Rc::new(RefCell::new(CancelToken::new()));
	let (token_init, token_close) = (token.clone(), token);

	Effect::new(move |_| {
		let records = ideas.get();
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("galaxy view needs a browser window");
			return;
		};

		let bounds = viewport(&window, &canvas, fullscreen, width, height, inset);
		set_canvas_size(&canvas, bounds);

		let existing = slot_init.borrow().clone();
		let anim = match existing {
			Some(anim) => anim,
			None => match build_loop(&window, canvas, config.clone()) {
				Ok(anim) => {
					*slot_init.borrow_mut() = Some(anim.clone());
					anim
				}
				Err(err) => {
					error!("galaxy view unavailable: {err}");
					return;
				}
			},
		};

		let mut anim = anim.borrow_mut();
		anim.close();
		if let Err(err) = anim.open(&records, bounds, &mut rand::thread_rng()) {
			warn!("galaxy view not started: {err}");
		}
		*token_init.borrow_mut() = anim.cancel_token();
		debug!(
			"galaxy view {:?} with {} nodes",
			anim.phase(),
			anim.state().map_or(0, |state| state.nodes.len())
		);
	});

	if fullscreen {
		let handle = window_event_listener(ev::resize, move |_| {
			let Some((slot, canvas)) = mounted_canvas(&slot_resize, canvas_ref) else {
				return;
			};
			let Some(window) = web_sys::window() else {
				return;
			};
			let bounds = viewport(&window, &canvas, true, None, None, inset);
			set_canvas_size(&canvas, bounds);
			if let Some(anim) = slot.borrow().as_ref() {
				if let Err(err) = anim.borrow_mut().resize(bounds) {
					warn!("ignoring resize: {err}");
				}
			}
		});
		on_cleanup(move || handle.remove());
	}

	let closed = Cell::new(false);
	let on_close_click = move |_: ev::MouseEvent| {
		let anim = slot_close.borrow().clone();
		let token = token_close.borrow().clone();
		dismiss(anim.as_deref(), &token, &closed, || on_close.run(()));
	};

	view! {
		<div class="galaxy-view">
			<div class="galaxy-header">
				<div class="galaxy-title">
					<h2>"Galaxy Mode"</h2>
					<p class="subtitle">"A graph view of your ideas"</p>
				</div>
				<button class="galaxy-close" title="Close" on:click=on_close_click>
					"×"
				</button>
			</div>
			<canvas node_ref=canvas_ref class="galaxy-canvas" style="display: block;" />
			<div class="galaxy-footer">
				<p>"Ideas that land close together are linked"</p>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;
	use crate::components::galaxy_view::animation::LoopPhase;
	use crate::components::galaxy_view::surface::recording::RecordingSurface;
	use crate::components::galaxy_view::types::Origin;

	#[derive(Default)]
	struct CountingScheduler {
		requested: u32,
	}

	impl FrameScheduler for CountingScheduler {
		type Handle = u32;

		fn request_frame(&mut self) -> Result<u32, GalaxyError> {
			self.requested += 1;
			Ok(self.requested)
		}

		fn cancel_frame(&mut self, _handle: u32) {}
	}

	fn running_loop() -> RefCell<AnimationLoop<CountingScheduler>> {
		let mut anim = AnimationLoop::new(CountingScheduler::default(), GalaxyConfig::default());
		let records = [IdeaRecord::new("a", "Only idea", Origin::User)];
		anim.open(&records, Bounds::new(800.0, 600.0), &mut StdRng::seed_from_u64(1))
			.expect("open");
		RefCell::new(anim)
	}

	#[test]
	fn resize_after_unmount_finds_nothing() {
		let owner = Owner::new();
		let canvas_ref = owner.with(NodeRef::<leptos::html::Canvas>::new);
		let slot: Rc<RefCell<Option<()>>> = Rc::new(RefCell::new(None));

		assert!(mounted_canvas(&Rc::downgrade(&slot), canvas_ref).is_none());
		owner.cleanup();
		assert!(mounted_canvas(&Rc::downgrade(&slot), canvas_ref).is_none());
		drop(slot);
		assert!(mounted_canvas(&Weak::<RefCell<Option<()>>>::new(), canvas_ref).is_none());
	}

	#[test]
	fn close_stops_the_loop_before_notifying_once() {
		let anim = running_loop();
		let token = anim.borrow().cancel_token();
		let closed = Cell::new(false);
		let seen = RefCell::new(Vec::new());

		for _ in 0..2 {
			dismiss(Some(&anim), &token, &closed, || {
				seen.borrow_mut().push(anim.borrow().phase());
			});
		}
		assert_eq!(*seen.borrow(), vec![LoopPhase::Stopped]);
		assert!(anim.borrow().state().is_none());
	}

	#[test]
	fn close_during_a_frame_stops_at_the_next_one() {
		let anim = running_loop();
		let token = anim.borrow().cancel_token();
		let closed = Cell::new(false);
		let mut notified = 0;

		{
			let _busy = anim.borrow_mut();
			dismiss(Some(&anim), &token, &closed, || notified += 1);
		}
		assert_eq!(notified, 1);

		let mut surface = RecordingSurface::new(800.0, 600.0);
		let mut anim = anim.borrow_mut();
		assert_eq!(anim.frame(&mut surface).expect("cancelled"), None);
		assert!(surface.calls.is_empty());
		assert_eq!(anim.phase(), LoopPhase::Stopped);
	}

	#[test]
	fn close_without_a_loop_still_notifies() {
		let closed = Cell::new(false);
		let mut notified = 0;
		dismiss::<CountingScheduler>(None, &CancelToken::new(), &closed, || notified += 1);
		assert_eq!(notified, 1);
	}
}

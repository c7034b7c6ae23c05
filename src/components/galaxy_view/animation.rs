use std::cell::Cell;
use std::fmt::Debug;
use std::rc::Rc;

use log::{debug, error, info};
use rand::Rng;

use super::config::GalaxyConfig;
use super::error::GalaxyError;
use super::state::GalaxyState;
use super::surface::Surface;
use super::types::{Bounds, FrameStats, IdeaRecord};

/// Host hook for display-synced frame callbacks.
///
/// `request_frame` asks the host to call back once on its next repaint;
/// `cancel_frame` withdraws a request that has not fired yet.
pub trait FrameScheduler {
	type Handle: Copy + Debug;

	fn request_frame(&mut self) -> Result<Self::Handle, GalaxyError>;
	fn cancel_frame(&mut self, handle: Self::Handle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopPhase {
	Idle,
	Running,
	Stopped,
}

/// One-way stop flag shared between the loop and whoever may close it.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn cancel(&self) {
		self.0.set(true);
	}

	pub fn is_cancelled(&self) -> bool {
		self.0.get()
	}
}

/// Drives a [`GalaxyState`] through Idle → Running → Stopped.
///
/// Each activation owns a fresh state and cancel token. The host calls
/// [`AnimationLoop::frame`] from its frame callback; the loop paints and
/// requests the next callback unless the token was cancelled in between.
pub struct AnimationLoop<S: FrameScheduler> {
	scheduler: S,
	config: GalaxyConfig,
	phase: LoopPhase,
	state: Option<GalaxyState>,
	pending: Option<S::Handle>,
	token: CancelToken,
}

impl<S: FrameScheduler> AnimationLoop<S> {
	pub fn new(scheduler: S, config: GalaxyConfig) -> Self {
		Self {
			scheduler,
			config,
			phase: LoopPhase::Idle,
			state: None,
			pending: None,
			token: CancelToken::new(),
		}
	}

	pub fn phase(&self) -> LoopPhase {
		self.phase
	}

	pub fn state(&self) -> Option<&GalaxyState> {
		self.state.as_ref()
	}

	/// Token of the current activation.
	pub fn cancel_token(&self) -> CancelToken {
		self.token.clone()
	}

	/// Start an activation: lay out `records`, seed particles, schedule the first frame.
	///
	/// Reopening after a stop begins a fresh activation. Fails with
	/// `AlreadyRunning` while running and with `InvalidBounds` before
	/// allocating anything.
	pub fn open<R: Rng + ?Sized>(
		&mut self,
		records: &[IdeaRecord],
		bounds: Bounds,
		rng: &mut R,
	) -> Result<(), GalaxyError> {
		match self.phase {
			LoopPhase::Running => return Err(GalaxyError::AlreadyRunning),
			LoopPhase::Stopped => {
				debug!("galaxy loop reset for a new activation");
				self.phase = LoopPhase::Idle;
				self.token = CancelToken::new();
			}
			LoopPhase::Idle => {}
		}

		self.state = Some(GalaxyState::open(records, bounds, self.config.clone(), rng)?);
		self.phase = LoopPhase::Running;
		if let Err(err) = self.schedule() {
			self.halt();
			return Err(err);
		}
		info!("galaxy loop running with {} ideas", records.len());
		Ok(())
	}

	/// Run one tick. Returns `None` when nothing was drawn.
	///
	/// Any error ends the activation without rescheduling.
	pub fn frame<Sf: Surface + ?Sized>(&mut self, surface: &mut Sf) -> Result<Option<FrameStats>, GalaxyError> {
		self.pending = None;
		if self.phase != LoopPhase::Running {
			return Ok(None);
		}
		if self.token.is_cancelled() {
			self.close();
			return Ok(None);
		}
		let Some(state) = self.state.as_mut() else {
			return Ok(None);
		};

		let stats = match state.tick(surface) {
			Ok(stats) => stats,
			Err(err) => {
				error!("galaxy frame failed, stopping: {err}");
				self.halt();
				return Err(err);
			}
		};

		if self.token.is_cancelled() {
			self.close();
			return Ok(Some(stats));
		}
		if let Err(err) = self.schedule() {
			error!("could not schedule next galaxy frame: {err}");
			self.halt();
			return Err(err);
		}
		Ok(Some(stats))
	}

	/// Forward a viewport change to the running state.
	pub fn resize(&mut self, bounds: Bounds) -> Result<(), GalaxyError> {
		match self.state.as_mut() {
			Some(state) => {
				state.resize(bounds)?;
				debug!("galaxy resized to {}x{}", bounds.width, bounds.height);
				Ok(())
			}
			None => Ok(()),
		}
	}

	/// Stop the activation: cancel the pending frame and drop nodes and particles.
	pub fn close(&mut self) {
		if self.phase != LoopPhase::Running {
			return;
		}
		self.halt();
		info!("galaxy loop stopped");
	}

	fn schedule(&mut self) -> Result<(), GalaxyError> {
		self.pending = Some(self.scheduler.request_frame()?);
		Ok(())
	}

	fn halt(&mut self) {
		self.token.cancel();
		if let Some(handle) = self.pending.take() {
			self.scheduler.cancel_frame(handle);
		}
		self.state = None;
		self.phase = LoopPhase::Stopped;
	}
}

impl<S: FrameScheduler> Drop for AnimationLoop<S> {
	fn drop(&mut self) {
		self.close();
	}
}

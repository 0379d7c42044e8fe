//! Frame-driven animation loop.
//!
//! [`FrameLoop`] calls a per-frame closure once per display refresh until it
//! is stopped. Scheduling goes through [`FrameScheduler`]; the browser
//! implementation wraps `requestAnimationFrame`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;

/// Source of display-refresh callbacks.
pub trait FrameScheduler: 'static {
	/// Take ownership of the tick run on each requested frame.
	fn install(&self, tick: Box<dyn FnMut()>);
	/// Ask for the installed tick on the next frame. `None` if refused.
	fn request(&self) -> Option<i32>;
	/// Withdraw a pending request.
	fn cancel(&self, id: i32);
	/// Drop the installed tick.
	fn release(&self);
}

/// `requestAnimationFrame` on the current window.
#[derive(Default)]
pub struct BrowserFrames {
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameScheduler for BrowserFrames {
	fn install(&self, tick: Box<dyn FnMut()>) {
		*self.callback.borrow_mut() = Some(Closure::wrap(tick));
	}

	fn request(&self) -> Option<i32> {
		let window = web_sys::window()?;
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		window.request_animation_frame(cb.as_ref().unchecked_ref()).ok()
	}

	fn cancel(&self, id: i32) {
		if let Some(window) = web_sys::window() {
			let _ = window.cancel_animation_frame(id);
		}
	}

	fn release(&self) {
		self.callback.borrow_mut().take();
	}
}

/// A per-frame loop that can be stopped exactly once.
pub struct FrameLoop<S: FrameScheduler> {
	scheduler: Rc<S>,
	pending: Rc<Cell<Option<i32>>>,
	stopped: Rc<Cell<bool>>,
}

impl<S: FrameScheduler> FrameLoop<S> {
	/// Run `frame` on every refresh `scheduler` delivers until [`FrameLoop::stop`].
	pub fn start(scheduler: S, mut frame: impl FnMut() + 'static) -> Self {
		let scheduler = Rc::new(scheduler);
		let pending = Rc::new(Cell::new(None));
		let stopped = Rc::new(Cell::new(false));

		// Weak so the installed tick does not keep its own scheduler alive.
		let (weak, pending_inner, stopped_inner): (Weak<S>, _, _) =
			(Rc::downgrade(&scheduler), pending.clone(), stopped.clone());
		scheduler.install(Box::new(move || {
			pending_inner.set(None);
			if stopped_inner.get() {
				return;
			}
			frame();
			if let Some(scheduler) = weak.upgrade() {
				pending_inner.set(scheduler.request());
			}
		}));
		pending.set(scheduler.request());

		Self {
			scheduler,
			pending,
			stopped,
		}
	}

	/// Cancel the pending frame and release the tick. Later calls are no-ops.
	pub fn stop(&self) {
		if self.stopped.replace(true) {
			return;
		}
		if let Some(id) = self.pending.take() {
			self.scheduler.cancel(id);
		}
		self.scheduler.release();
	}
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;

	/// Host scheduler: frames fire only when the test says so.
	#[derive(Clone, Default)]
	pub(crate) struct ManualFrames {
		tick: Rc<RefCell<Option<Box<dyn FnMut()>>>>,
		next_id: Rc<Cell<i32>>,
		pub(crate) requested: Rc<RefCell<Vec<i32>>>,
		pub(crate) cancelled: Rc<RefCell<Vec<i32>>>,
		pub(crate) released: Rc<Cell<usize>>,
	}

	impl ManualFrames {
		/// Deliver one refresh. The tick stays reachable after release, like a
		/// browser callback already queued when the loop stops.
		pub(crate) fn fire(&self) {
			let tick = self.tick.borrow_mut().take();
			if let Some(mut tick) = tick {
				tick();
				self.tick.borrow_mut().get_or_insert(tick);
			}
		}
	}

	impl FrameScheduler for ManualFrames {
		fn install(&self, tick: Box<dyn FnMut()>) {
			*self.tick.borrow_mut() = Some(tick);
		}

		fn request(&self) -> Option<i32> {
			let id = self.next_id.get() + 1;
			self.next_id.set(id);
			self.requested.borrow_mut().push(id);
			Some(id)
		}

		fn cancel(&self, id: i32) {
			self.cancelled.borrow_mut().push(id);
		}

		fn release(&self) {
			self.released.set(self.released.get() + 1);
		}
	}

	fn counting_loop() -> (ManualFrames, Rc<Cell<usize>>, FrameLoop<ManualFrames>) {
		let frames = ManualFrames::default();
		let count = Rc::new(Cell::new(0));
		let counter = count.clone();
		let frame_loop = FrameLoop::start(frames.clone(), move || counter.set(counter.get() + 1));
		(frames, count, frame_loop)
	}

	#[test]
	fn start_requests_the_first_frame_without_running_it() {
		let (frames, count, _loop) = counting_loop();
		assert_eq!(*frames.requested.borrow(), vec![1]);
		assert_eq!(count.get(), 0);
	}

	#[test]
	fn each_frame_runs_once_and_requests_the_next() {
		let (frames, count, _loop) = counting_loop();
		frames.fire();
		frames.fire();
		assert_eq!(count.get(), 2);
		assert_eq!(*frames.requested.borrow(), vec![1, 2, 3]);
	}

	#[test]
	fn stop_cancels_pending_frame_exactly_once() {
		let (frames, _count, frame_loop) = counting_loop();
		frames.fire();

		frame_loop.stop();
		frame_loop.stop();

		assert_eq!(*frames.cancelled.borrow(), vec![2]);
		assert_eq!(frames.released.get(), 1);
	}

	#[test]
	fn frame_arriving_after_stop_neither_runs_nor_reschedules() {
		let (frames, count, frame_loop) = counting_loop();
		frame_loop.stop();
		let requested = frames.requested.borrow().len();

		frames.fire();

		assert_eq!(count.get(), 0);
		assert_eq!(frames.requested.borrow().len(), requested);
	}

	#[test]
	fn dropped_scheduler_ends_the_chain() {
		let (frames, count, frame_loop) = counting_loop();
		drop(frame_loop);
		frames.fire();
		assert_eq!(count.get(), 1);
		assert_eq!(frames.requested.borrow().len(), 1);
	}
}

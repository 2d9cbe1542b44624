use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::*;

/// Queues callbacks until the test advances a frame.
#[derive(Clone, Default)]
struct ManualScheduler {
    queue: Rc<RefCell<Vec<(i32, Box<dyn FnOnce()>)>>>,
    next_id: Rc<Cell<i32>>,
}

impl ManualScheduler {
    fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    fn run_frame(&self) {
        let due: Vec<_> = self.queue.borrow_mut().drain(..).collect();
        for (_, callback) in due {
            callback();
        }
    }
}

impl FrameScheduler for ManualScheduler {
    fn request(&self, callback: Box<dyn FnOnce()>) -> Option<i32> {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.queue.borrow_mut().push((id, callback));
        Some(id)
    }

    fn cancel(&self, id: i32) {
        self.queue.borrow_mut().retain(|(queued, _)| *queued != id);
    }
}

fn counting_loop(scheduler: &ManualScheduler) -> (FrameLoop<ManualScheduler>, Rc<Cell<u32>>) {
    let ticks = Rc::new(Cell::new(0));
    let counter = Rc::clone(&ticks);
    let frame_loop = FrameLoop::start(scheduler.clone(), move || counter.set(counter.get() + 1));
    (frame_loop, ticks)
}

#[test]
fn start_books_one_frame_without_ticking() {
    let scheduler = ManualScheduler::default();
    let (frame_loop, ticks) = counting_loop(&scheduler);
    assert_eq!(ticks.get(), 0);
    assert_eq!(scheduler.pending(), 1);
    assert!(frame_loop.has_pending_frame());
}

#[test]
fn each_frame_ticks_once_and_rebooks() {
    let scheduler = ManualScheduler::default();
    let (_frame_loop, ticks) = counting_loop(&scheduler);
    for expected in 1..=3 {
        scheduler.run_frame();
        assert_eq!(ticks.get(), expected);
        assert_eq!(scheduler.pending(), 1);
    }
}

#[test]
fn stop_leaves_no_scheduled_frame() {
    let scheduler = ManualScheduler::default();
    let (frame_loop, ticks) = counting_loop(&scheduler);
    scheduler.run_frame();
    frame_loop.stop();
    assert_eq!(scheduler.pending(), 0);
    assert!(!frame_loop.is_running());
    assert!(!frame_loop.has_pending_frame());
    scheduler.run_frame();
    assert_eq!(ticks.get(), 1);
}

#[test]
fn drop_cancels_pending_frame() {
    let scheduler = ManualScheduler::default();
    let (frame_loop, ticks) = counting_loop(&scheduler);
    drop(frame_loop);
    assert_eq!(scheduler.pending(), 0);
    scheduler.run_frame();
    assert_eq!(ticks.get(), 0);
}

#[test]
fn stop_is_idempotent() {
    let scheduler = ManualScheduler::default();
    let (frame_loop, _ticks) = counting_loop(&scheduler);
    frame_loop.stop();
    frame_loop.stop();
    assert_eq!(scheduler.pending(), 0);
}

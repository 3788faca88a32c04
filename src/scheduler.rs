//! Delayed callbacks whose handle cancels the callback when dropped.

use gloo_timers::callback::Timeout;

pub trait Scheduler {
    /// Dropping the handle before the delay elapses cancels the callback.
    type Handle;

    fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Self::Handle;
}

/// `setTimeout` through gloo.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> Timeout {
        Timeout::new(delay_ms, callback)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Scheduler;

    type Queued = (usize, u32, Box<dyn FnOnce()>);

    #[derive(Default)]
    struct Queue {
        next_id: usize,
        queued: Vec<Queued>,
        cancelled: usize,
    }

    /// Callbacks run only when the test calls [`ManualScheduler::fire_all`].
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().queued.len()
        }

        pub fn cancelled(&self) -> usize {
            self.queue.borrow().cancelled
        }

        pub fn delays(&self) -> Vec<u32> {
            self.queue.borrow().queued.iter().map(|(_, delay, _)| *delay).collect()
        }

        pub fn fire_all(&self) {
            let due = std::mem::take(&mut self.queue.borrow_mut().queued);
            for (_, _, callback) in due {
                callback();
            }
        }
    }

    pub struct ManualHandle {
        id: usize,
        queue: Rc<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            let mut queue = self.queue.borrow_mut();
            let before = queue.queued.len();
            queue.queued.retain(|(id, _, _)| *id != self.id);
            if queue.queued.len() != before {
                queue.cancelled += 1;
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, callback: impl FnOnce() + 'static) -> ManualHandle {
            let mut queue = self.queue.borrow_mut();
            let id = queue.next_id;
            queue.next_id += 1;
            let callback: Box<dyn FnOnce()> = Box::new(callback);
            queue.queued.push((id, delay_ms, callback));
            ManualHandle { id, queue: Rc::clone(&self.queue) }
        }
    }
}

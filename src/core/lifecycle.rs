//! Host-independent bookkeeping for the frame loop and teardown.

/// State of the re-armed animation-frame callback.
#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<i32>,
    stopped: bool,
    frames: u64,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a frame may be requested right now.
    #[inline]
    pub fn can_arm(&self) -> bool {
        !self.stopped
    }

    /// Record the handle returned by the host's frame scheduler.
    pub fn armed(&mut self, handle: i32) {
        if !self.stopped {
            self.pending = Some(handle);
        }
    }

    /// Called at the top of each frame callback. Returns `false` if the loop
    /// was stopped and the callback should do nothing.
    pub fn begin_frame(&mut self) -> bool {
        self.pending = None;
        if self.stopped {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Stop for good. Yields the pending handle (if any) to cancel; later
    /// calls yield nothing.
    pub fn stop(&mut self) -> Option<i32> {
        self.stopped = true;
        self.pending.take()
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// One-shot cleanup actions run together, at most once.
#[derive(Default)]
pub struct Teardown {
    actions: Vec<(&'static str, Box<dyn FnOnce()>)>,
    done: bool,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a cleanup. If teardown already happened, it runs immediately
    /// so late registrations cannot leak.
    pub fn defer(&mut self, label: &'static str, action: impl FnOnce() + 'static) {
        if self.done {
            log::debug!("[teardown] late cleanup {}", label);
            action();
            return;
        }
        self.actions.push((label, Box::new(action)));
    }

    /// Run every registered cleanup in reverse registration order. Returns
    /// how many ran; subsequent calls return 0.
    pub fn run(&mut self) -> usize {
        if self.done {
            return 0;
        }
        self.done = true;
        let actions = std::mem::take(&mut self.actions);
        let n = actions.len();
        for (label, action) in actions.into_iter().rev() {
            log::debug!("[teardown] {}", label);
            action();
        }
        n
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.done
    }

    #[inline]
    pub fn pending(&self) -> usize {
        self.actions.len()
    }
}

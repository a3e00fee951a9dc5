use std::cell::Cell;
use std::rc::Rc;

/// Shared flag handed to an async continuation; once the owning scope is
/// cancelled the continuation must discard its result.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Ties spawned work to a component: cancelled from the component's effect
/// cleanup, on `renew`, and again on drop.
#[derive(Debug, Default)]
pub struct TaskScope {
    flag: Rc<Cell<bool>>,
}

impl TaskScope {
    pub fn token(&self) -> CancelToken {
        CancelToken(self.flag.clone())
    }

    pub fn cancel(&self) {
        self.flag.set(true);
    }

    /// Cancel everything handed out so far and start issuing fresh tokens.
    pub fn renew(&mut self) {
        self.cancel();
        self.flag = Rc::new(Cell::new(false));
    }
}

impl Drop for TaskScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

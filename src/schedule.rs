use std::time::Duration;

/// A one-shot deferred task that can be called off before it runs.
pub trait TaskHandle {
    fn cancel(self);
}

/// Runs a task once after a delay on the current (single) thread.
pub trait Scheduler {
    type Handle: TaskHandle;

    /// Returns `None` if the task could not be scheduled at all.
    fn schedule<F>(&self, delay: Duration, task: F) -> Option<Self::Handle>
    where
        F: FnOnce() + 'static;
}

#[cfg(test)]
pub use manual::{ManualHandle, ManualScheduler};


#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_runs_once_when_due() {
        let scheduler = ManualScheduler::default();
        let runs = Rc::new(RefCell::new(0));
        let counter = runs.clone();
        scheduler.schedule(Duration::from_secs(3), move || *counter.borrow_mut() += 1);

        scheduler.advance(Duration::from_millis(2999));
        assert_eq!(*runs.borrow(), 0);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(*runs.borrow(), 1);
        scheduler.advance(Duration::from_secs(10));
        assert_eq!(*runs.borrow(), 1);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancelled_task_never_runs() {
        let scheduler = ManualScheduler::default();
        let ran = Rc::new(RefCell::new(false));
        let flag = ran.clone();
        let handle = scheduler
            .schedule(Duration::from_secs(1), move || *flag.borrow_mut() = true)
            .unwrap();
        handle.cancel();
        scheduler.advance(Duration::from_secs(5));
        assert!(!*ran.borrow());
    }

    #[test]
    fn test_runs_in_due_order() {
        let scheduler = ManualScheduler::default();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (name, secs) in [("late", 2), ("early", 1)] {
            let order = order.clone();
            scheduler.schedule(Duration::from_secs(secs), move || order.borrow_mut().push(name));
        }
        scheduler.advance(Duration::from_secs(2));
        assert_eq!(*order.borrow(), vec!["early", "late"]);
    }
}

use std::time::Duration;

use leptos::prelude::*;

use crate::{
    schedule::{Scheduler, TaskHandle},
    view::{StateHandle, ViewState},
};

/// `setTimeout` on the browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl TaskHandle for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

impl Scheduler for BrowserScheduler {
    type Handle = TimeoutHandle;

    fn schedule<F>(&self, delay: Duration, task: F) -> Option<Self::Handle>
    where
        F: FnOnce() + 'static,
    {
        set_timeout_with_handle(task, delay)
            .map_err(|e| log::error!("couldn't schedule timeout: {e:?}"))
            .ok()
    }
}

// A disposed signal means the page was torn down; writes become no-ops.
impl StateHandle for RwSignal<ViewState> {
    fn update_state<U>(&self, f: impl FnOnce(&mut ViewState) -> U) -> Option<U> {
        self.try_update(f)
    }

    fn read_state<U>(&self, f: impl FnOnce(&ViewState) -> U) -> Option<U> {
        self.try_with_untracked(f)
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::{
        contact::{Field, RESET_DELAY},
        content::PORTFOLIO,
        schedule::ManualScheduler,
        view::ViewSession,
    };

    fn signal_session(
        owner: &Owner,
    ) -> (
        ViewSession<RwSignal<ViewState>, ManualScheduler>,
        RwSignal<ViewState>,
        ManualScheduler,
    ) {
        let state = owner.with(|| RwSignal::new(ViewState::default()));
        let scheduler = ManualScheduler::default();
        let session = ViewSession::new(state, scheduler.clone(), &PORTFOLIO);
        session.update_field(Field::Name, "Ada".to_string());
        session.update_field(Field::Email, "ada@example.com".to_string());
        session.update_field(Field::Message, "Hello".to_string());
        (session, state, scheduler)
    }

    #[test]
    fn test_disposed_signal_rejects_access() {
        let owner = Owner::new();
        let state = owner.with(|| RwSignal::new(ViewState::default()));
        assert_eq!(
            state.update_state(|s| {
                s.toggle_menu();
                s.menu_open
            }),
            Some(true)
        );
        assert_eq!(state.read_state(|s| s.menu_open), Some(true));

        state.dispose();
        assert_eq!(state.update_state(|s| s.menu_open), None);
        assert_eq!(state.read_state(|s| s.menu_open), None);
    }

    #[test]
    fn test_submit_on_disposed_view_schedules_nothing() {
        let owner = Owner::new();
        let (mut session, state, scheduler) = signal_session(&owner);
        state.dispose();

        assert_eq!(session.submit(), Ok(()));
        assert!(!session.has_pending_reset());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_reset_after_disposal_is_skipped() {
        let owner = Owner::new();
        let (mut session, state, scheduler) = signal_session(&owner);
        session.submit().unwrap();
        assert!(session.has_pending_reset());

        state.dispose();
        assert!(!session.has_pending_reset());
        scheduler.advance(RESET_DELAY);
        assert_eq!(scheduler.pending(), 0);
        assert!(state.try_get_untracked().is_none());
        drop(session);
    }
}

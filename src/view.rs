use std::{cell::RefCell, rc::Rc};

use crate::{
    contact::{ContactForm, DraftError, Field, SubmitTicket, RESET_DELAY},
    content::{Portfolio, Section},
    schedule::{Scheduler, TaskHandle},
};

/// Scroll offset (px) past which the nav bar is drawn elevated.
pub const ELEVATE_AFTER: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Hamburger,
    Close,
}

/// Everything that can change while the page is open.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub menu_open: bool,
    pub active_section: Section,
    pub expanded_project: Option<String>,
    pub scroll_offset: f64,
    pub form: ContactForm,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            menu_open: false,
            active_section: Section::Home,
            expanded_project: None,
            scroll_offset: 0.0,
            form: ContactForm::default(),
        }
    }
}

impl ViewState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn select_section(&mut self, section: Section) {
        self.menu_open = false;
        self.active_section = section;
    }

    /// Expanding one project collapses whichever was open before.
    pub fn toggle_project(&mut self, id: &str) {
        if self.is_expanded(id) {
            self.expanded_project = None;
        } else {
            self.expanded_project = Some(id.to_string());
        }
    }

    pub fn record_scroll(&mut self, offset: f64) {
        self.scroll_offset = offset;
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded_project.as_deref() == Some(id)
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active_section == section
    }

    pub fn is_submitted(&self) -> bool {
        self.form.is_submitted()
    }

    pub fn menu_icon(&self) -> MenuIcon {
        if self.menu_open {
            MenuIcon::Close
        } else {
            MenuIcon::Hamburger
        }
    }

    pub fn nav_elevated(&self) -> bool {
        self.scroll_offset > ELEVATE_AFTER
    }

    pub fn project_toggle_label(&self, id: &str) -> &'static str {
        if self.is_expanded(id) {
            "Hide Details"
        } else {
            "View Details"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitted() {
            "Message Sent!"
        } else {
            "Send Message"
        }
    }
}

/// Somewhere a [`ViewState`] lives. Both accessors return `None` once the
/// backing view is gone.
pub trait StateHandle: Clone + 'static {
    fn update_state<U>(&self, f: impl FnOnce(&mut ViewState) -> U) -> Option<U>;

    /// Reads without notifying anything that depends on the state.
    fn read_state<U>(&self, f: impl FnOnce(&ViewState) -> U) -> Option<U>;
}

impl StateHandle for Rc<RefCell<ViewState>> {
    fn update_state<U>(&self, f: impl FnOnce(&mut ViewState) -> U) -> Option<U> {
        Some(f(&mut self.borrow_mut()))
    }

    fn read_state<U>(&self, f: impl FnOnce(&ViewState) -> U) -> Option<U> {
        Some(f(&self.borrow()))
    }
}

/// Applies user operations to one page view and owns the view's pending
/// reset timer. Dropping the session cancels the timer.
pub struct ViewSession<H, S>
where
    H: StateHandle,
    S: Scheduler,
{
    state: H,
    scheduler: S,
    portfolio: &'static Portfolio,
    pending_reset: Option<(SubmitTicket, S::Handle)>,
}

impl<H, S> ViewSession<H, S>
where
    H: StateHandle,
    S: Scheduler,
{
    pub fn new(state: H, scheduler: S, portfolio: &'static Portfolio) -> Self {
        Self {
            state,
            scheduler,
            portfolio,
            pending_reset: None,
        }
    }

    pub fn toggle_menu(&self) {
        self.state.update_state(ViewState::toggle_menu);
    }

    pub fn select_section(&self, section: Section) {
        self.state.update_state(|s| s.select_section(section));
    }

    pub fn toggle_project(&self, id: &str) {
        if self.portfolio.project(id).is_none() {
            log::warn!("ignoring toggle for unknown project {id}");
            return;
        }
        self.state.update_state(|s| s.toggle_project(id));
    }

    pub fn record_scroll(&self, offset: f64) {
        self.state.update_state(|s| s.record_scroll(offset));
    }

    pub fn update_field(&self, field: Field, value: String) {
        self.state.update_state(|s| s.form.update(field, value));
    }

    /// Marks the form submitted and schedules the reset. A submit inside
    /// an open window replaces the earlier timer.
    pub fn submit(&mut self) -> Result<(), DraftError> {
        let ticket = match self.state.update_state(|s| s.form.submit()) {
            Some(res) => res?,
            None => return Ok(()),
        };
        log::info!("contact form acknowledged");
        if let Some(previous) = self.take_live_reset() {
            previous.cancel();
        }
        let state = self.state.clone();
        self.pending_reset = self
            .scheduler
            .schedule(RESET_DELAY, move || Self::finish_submit(&state, ticket))
            .map(|handle| (ticket, handle));
        Ok(())
    }

    fn finish_submit(state: &H, ticket: SubmitTicket) {
        match state.update_state(|s| s.form.reset(ticket)) {
            Some(true) => log::debug!("contact form reset"),
            Some(false) => log::debug!("stale contact form reset skipped"),
            None => log::debug!("contact form reset after teardown skipped"),
        }
    }

    /// True while a scheduled reset has not run yet.
    pub fn has_pending_reset(&self) -> bool {
        self.pending_reset
            .as_ref()
            .is_some_and(|(ticket, _)| self.reset_outstanding(*ticket))
    }

    fn reset_outstanding(&self, ticket: SubmitTicket) -> bool {
        self.state
            .read_state(|s| s.form.awaits_reset(ticket))
            .unwrap_or(false)
    }

    /// Takes the timer handle, dropping it instead if the timer already fired.
    fn take_live_reset(&mut self) -> Option<S::Handle> {
        let (ticket, handle) = self.pending_reset.take()?;
        self.reset_outstanding(ticket).then_some(handle)
    }

    /// Releases everything the view holds. Same as dropping the session.
    pub fn teardown(self) {}
}

impl<H, S> Drop for ViewSession<H, S>
where
    H: StateHandle,
    S: Scheduler,
{
    fn drop(&mut self) {
        if let Some(handle) = self.take_live_reset() {
            log::debug!("cancelling pending contact form reset");
            handle.cancel();
        }
    }
}

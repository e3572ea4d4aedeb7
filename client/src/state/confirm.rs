//! Confirmation gate for destructive actions.
//!
//! A pending action is only released by `confirm`; `cancel` drops it so no
//! request is ever built for a dismissed dialog.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConfirmState<A> {
    pending: Option<A>,
}

impl<A> Default for ConfirmState<A> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<A> ConfirmState<A> {
    /// Open the dialog for `action`, replacing any earlier unconfirmed one.
    pub fn request(&mut self, action: A) {
        self.pending = Some(action);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Close the dialog and hand back the action to execute.
    pub fn confirm(&mut self) -> Option<A> {
        self.pending.take()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&A> {
        self.pending.as_ref()
    }
}

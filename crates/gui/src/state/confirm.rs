//! Pending confirmation prompts

/// Destructive actions that require confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    NewScene,
}

/// Modal confirmation state. At most one prompt is pending.
#[derive(Debug, Default)]
pub struct ConfirmDialog {
    pending: Option<ConfirmAction>,
}

impl ConfirmDialog {
    pub fn open(&mut self, action: ConfirmAction) {
        self.pending = Some(action);
    }

    pub fn pending(&self) -> Option<ConfirmAction> {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    /// Close the prompt, returning the action it was asking about
    pub fn close(&mut self) -> Option<ConfirmAction> {
        self.pending.take()
    }
}

//! Toast notifications for mutation outcomes and fetch failures.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Toasts beyond this count push out the oldest.
pub const MAX_TOASTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast { id: id.clone(), kind, message: message.into() });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> String {
        self.push(ToastKind::Error, message)
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}

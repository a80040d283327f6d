//! User-facing notifications raised by forms

use tracing::{info, warn};

/// Visual weight of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

/// A short message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    /// Error toast with the standard "Error" title
    pub fn error(description: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.into(),
            variant: ToastVariant::Destructive,
        }
    }

    #[inline]
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }
}

/// Sink for toasts raised by a form
pub trait Notifier: Send + Sync {
    fn notify(&self, toast: Toast);
}

/// Notifier for headless use: toasts become log events
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, toast: Toast) {
        match toast.variant {
            ToastVariant::Destructive => {
                warn!(title = %toast.title, description = %toast.description, "Form error");
            }
            ToastVariant::Default => {
                info!(title = %toast.title, description = %toast.description, "Form notice");
            }
        }
    }
}

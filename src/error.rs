use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or a body that did not decode.
    #[error("request failed: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("server responded with {status}: {message}")]
    Status { status: u16, message: String },
}

/// Returned by a dialog that was closed without submitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("dialog dismissed")]
pub struct ModalDismissed;

impl From<futures::channel::oneshot::Canceled> for ModalDismissed {
    fn from(_: futures::channel::oneshot::Canceled) -> Self {
        ModalDismissed
    }
}

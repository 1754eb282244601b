//! Dialog presentation.
//!
//! A dialog is opened by putting an [`ActiveModal`] into a signal that the
//! [`ModalHost`](crate::components::modal_host::ModalHost) renders. The caller
//! awaits a oneshot receiver; the dialog resolves it on submit, and dropping
//! the sender (cancel, backdrop, or another dialog replacing it) reads as
//! [`ModalDismissed`].
//!
//! Dialogs that finish asynchronously hold on to their own [`ModalReply`] and
//! only ever close the dialog that reply belongs to.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::logging::{error, log};
use leptos::*;

use crate::api::OpinionService;
use crate::error::ModalDismissed;
use crate::models::opinion::{CreateUpdateOpinionDto, Opinion, ReportOpinionDto};

#[async_trait(?Send)]
pub trait ModalService {
    /// Resolves with the submitted payload, or `ModalDismissed` on cancel.
    async fn open_opinion_modal(
        &self,
        draft: CreateUpdateOpinionDto,
    ) -> Result<CreateUpdateOpinionDto, ModalDismissed>;

    /// Resolves with whether the opinion was actually deleted.
    async fn open_delete_opinion_modal(&self, opinion: Opinion) -> Result<bool, ModalDismissed>;

    /// Fire and forget; the report dialog talks to the service itself.
    fn open_report_modal(&self, opinion: Opinion);
}

/// Sending half of an open dialog, shared between the signal and the view.
pub struct ModalReply<T>(Rc<RefCell<Option<oneshot::Sender<T>>>>);

impl<T> Clone for ModalReply<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> ModalReply<T> {
    fn channel() -> (Self, oneshot::Receiver<T>) {
        let (tx, rx) = oneshot::channel();
        (Self(Rc::new(RefCell::new(Some(tx)))), rx)
    }

    /// Returns false when the dialog was already resolved or the opener is gone.
    pub fn resolve(&self, value: T) -> bool {
        match self.0.borrow_mut().take() {
            Some(tx) => tx.send(value).is_ok(),
            None => false,
        }
    }

    pub fn dismiss(&self) {
        self.0.borrow_mut().take();
    }

    /// Whether both handles belong to the same opened dialog.
    pub fn is_same(&self, other: &ModalReply<T>) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone)]
pub enum ActiveModal {
    Opinion {
        draft: CreateUpdateOpinionDto,
        reply: ModalReply<CreateUpdateOpinionDto>,
    },
    DeleteOpinion {
        opinion: Opinion,
        reply: ModalReply<bool>,
    },
    ReportOpinion {
        opinion: Opinion,
        reply: ModalReply<()>,
    },
}

impl ActiveModal {
    fn dismiss(&self) {
        match self {
            ActiveModal::Opinion { reply, .. } => reply.dismiss(),
            ActiveModal::DeleteOpinion { reply, .. } => reply.dismiss(),
            ActiveModal::ReportOpinion { reply, .. } => reply.dismiss(),
        }
    }
}

/// `ModalService` whose dialogs are whatever is currently in `active`.
#[derive(Clone, Copy)]
pub struct SignalModalService {
    active: RwSignal<Option<ActiveModal>>,
}

impl SignalModalService {
    pub fn new() -> Self {
        Self {
            active: create_rw_signal(None),
        }
    }

    pub fn active(&self) -> ReadSignal<Option<ActiveModal>> {
        self.active.read_only()
    }

    pub fn is_open(&self) -> bool {
        self.active.with_untracked(Option::is_some)
    }

    fn open(&self, modal: ActiveModal) {
        self.active.update(|slot| {
            if let Some(previous) = slot.replace(modal) {
                log!("[MODAL] Replacing an open dialog");
                previous.dismiss();
            }
        });
    }

    fn take(&self) -> Option<ActiveModal> {
        let mut taken = None;
        self.active.update(|slot| taken = slot.take());
        taken
    }

    /// Closes whatever is open without a result.
    pub fn dismiss(&self) {
        if let Some(modal) = self.take() {
            modal.dismiss();
        }
    }

    pub fn submit_opinion(&self, dto: CreateUpdateOpinionDto) {
        match self.take() {
            Some(ActiveModal::Opinion { reply, .. }) => {
                reply.resolve(dto);
            }
            Some(other) => other.dismiss(),
            None => {}
        }
    }

    /// Closes the open dialog only if `is_current` recognizes it.
    fn close_if(&self, is_current: impl Fn(&ActiveModal) -> bool) -> bool {
        let mut closed = false;
        self.active.update(|slot| {
            if slot.as_ref().is_some_and(&is_current) {
                *slot = None;
                closed = true;
            }
        });
        closed
    }

    /// Answers the delete dialog behind `reply`. Whatever dialog was opened
    /// since then stays open.
    pub fn resolve_delete(&self, reply: &ModalReply<bool>, was_deleted: bool) {
        reply.resolve(was_deleted);
        self.close_if(|modal| {
            matches!(modal, ActiveModal::DeleteOpinion { reply: open, .. } if open.is_same(reply))
        });
    }

    pub fn close_report(&self, reply: &ModalReply<()>) {
        reply.dismiss();
        self.close_if(|modal| {
            matches!(modal, ActiveModal::ReportOpinion { reply: open, .. } if open.is_same(reply))
        });
    }
}

impl Default for SignalModalService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ModalService for SignalModalService {
    async fn open_opinion_modal(
        &self,
        draft: CreateUpdateOpinionDto,
    ) -> Result<CreateUpdateOpinionDto, ModalDismissed> {
        let (reply, rx) = ModalReply::channel();
        self.open(ActiveModal::Opinion { draft, reply });
        Ok(rx.await?)
    }

    async fn open_delete_opinion_modal(&self, opinion: Opinion) -> Result<bool, ModalDismissed> {
        let (reply, rx) = ModalReply::channel();
        self.open(ActiveModal::DeleteOpinion { opinion, reply });
        Ok(rx.await?)
    }

    fn open_report_modal(&self, opinion: Opinion) {
        // nobody awaits a report, the receiver is dropped right away
        let (reply, _) = ModalReply::channel();
        self.open(ActiveModal::ReportOpinion { opinion, reply });
    }
}

/// Deletes the opinion and answers its dialog with whether the server
/// accepted the delete.
pub async fn delete_and_resolve(
    service: &dyn OpinionService,
    modals: SignalModalService,
    opinion: &Opinion,
    reply: &ModalReply<bool>,
) -> bool {
    let deleted = match service
        .delete_opinion(&opinion.product_id, &opinion.opinion_id)
        .await
    {
        Ok(()) => true,
        Err(err) => {
            error!("[MODAL] Deleting opinion {} failed: {}", opinion.opinion_id, err);
            false
        }
    };
    modals.resolve_delete(reply, deleted);
    deleted
}

/// Posts the report, then closes the report dialog behind `reply`.
pub async fn report_and_close(
    service: &dyn OpinionService,
    modals: SignalModalService,
    opinion: &Opinion,
    dto: &ReportOpinionDto,
    reply: &ModalReply<()>,
) -> bool {
    let reported = match service
        .report_opinion(&opinion.product_id, &opinion.opinion_id, dto)
        .await
    {
        Ok(()) => {
            log!("[MODAL] Reported opinion {}", opinion.opinion_id);
            true
        }
        Err(err) => {
            error!("[MODAL] Reporting opinion {} failed: {}", opinion.opinion_id, err);
            false
        }
    };
    modals.close_report(reply);
    reported
}

use std::rc::Rc;

use leptos::logging::{log, warn};
use leptos::*;

use crate::api::OpinionService;
use crate::auth::{AuthService, USER_ROLE};
use crate::error::ApiError;
use crate::modal::ModalService;
use crate::models::opinion::{CreateUpdateOpinionDto, Opinion, Reaction};

/// A new value for the product-id input, together with the one it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductChange {
    pub previous: Option<String>,
    pub current: String,
}

impl ProductChange {
    pub fn new(previous: Option<String>, current: impl Into<String>) -> Self {
        Self {
            previous,
            current: current.into(),
        }
    }

    pub fn is_first_change(&self) -> bool {
        self.previous.is_none()
    }

    fn is_same_product(&self) -> bool {
        self.previous.as_deref() == Some(self.current.as_str())
    }
}

/// Overwrites the entry with the same `(product_id, opinion_id)`, keeping its
/// position. A record of another product matches nothing.
pub fn replace_updated(opinions: &mut [Opinion], updated: &Opinion) {
    for old in opinions.iter_mut() {
        if old.opinion_id == updated.opinion_id && old.product_id == updated.product_id {
            old.clone_from(updated);
        }
    }
}

pub fn remove_opinion(opinions: &mut Vec<Opinion>, opinion_id: &str) {
    opinions.retain(|o| o.opinion_id != opinion_id);
}

/// State and actions behind the opinions list of one product.
///
/// The list only ever changes from the continuation of a confirmed server
/// call or a resolved dialog.
#[derive(Clone)]
pub struct OpinionsController {
    product_id: RwSignal<String>,
    opinions: RwSignal<Vec<Opinion>>,
    opinion_service: Rc<dyn OpinionService>,
    auth: Rc<dyn AuthService>,
    modals: Rc<dyn ModalService>,
}

impl OpinionsController {
    pub fn new(
        product_id: impl Into<String>,
        initial: Vec<Opinion>,
        opinion_service: Rc<dyn OpinionService>,
        auth: Rc<dyn AuthService>,
        modals: Rc<dyn ModalService>,
    ) -> Self {
        Self {
            product_id: create_rw_signal(product_id.into()),
            opinions: create_rw_signal(initial),
            opinion_service,
            auth,
            modals,
        }
    }

    pub fn opinions(&self) -> ReadSignal<Vec<Opinion>> {
        self.opinions.read_only()
    }

    pub fn product_id(&self) -> String {
        self.product_id.get_untracked()
    }

    /// Refetches when the product changes. The first assignment comes from
    /// the parent that already seeded the list, so it fetches nothing.
    pub async fn on_product_change(&self, change: ProductChange) -> Result<(), ApiError> {
        self.product_id.set(change.current.clone());
        if change.is_first_change() || change.is_same_product() {
            return Ok(());
        }

        let opinions = self.opinion_service.fetch_opinions(&change.current).await?;
        if self.product_id.get_untracked() != change.current {
            warn!(
                "[OPINIONS] Dropping stale opinions for product {}",
                change.current
            );
            return Ok(());
        }
        log!(
            "[OPINIONS] Loaded {} opinions for product {}",
            opinions.len(),
            change.current
        );
        self.opinions.set(opinions);
        Ok(())
    }

    /// Likes, dislikes or retracts depending on the viewer's current flags.
    /// Returns the transition that was sent, or `None` for non-users.
    pub async fn on_reaction_click(
        &self,
        opinion: &Opinion,
        positive: bool,
    ) -> Result<Option<Reaction>, ApiError> {
        if !self.is_user() {
            return Ok(None);
        }

        let reaction = Reaction::resolve(opinion, positive);
        let service = &self.opinion_service;
        let updated = if reaction.is_retraction() {
            service
                .remove_reaction(&opinion.product_id, &opinion.opinion_id, reaction.positive())
                .await?
        } else {
            service
                .rate(&opinion.product_id, &opinion.opinion_id, reaction.positive())
                .await?
        };
        self.replace_updated(&updated);
        Ok(Some(reaction))
    }

    pub fn is_author(&self, opinion: &Opinion) -> bool {
        self.auth.username().as_deref() == Some(opinion.author_name.as_str())
    }

    pub fn is_user(&self) -> bool {
        self.auth.role().as_deref() == Some(USER_ROLE)
    }

    pub fn open_report_modal(&self, opinion: &Opinion) {
        self.modals.open_report_modal(opinion.clone());
    }

    pub async fn open_create_opinion_modal(&self) -> Result<(), ApiError> {
        let Ok(dto) = self
            .modals
            .open_opinion_modal(CreateUpdateOpinionDto::default())
            .await
        else {
            return Ok(());
        };

        let product_id = self.product_id.get_untracked();
        let created = self.opinion_service.create_opinion(&product_id, &dto).await?;
        if self.product_id.get_untracked() != product_id {
            warn!(
                "[OPINIONS] Not listing opinion {} created on product {}",
                created.opinion_id, product_id
            );
            return Ok(());
        }
        self.opinions.update(|opinions| opinions.push(created));
        Ok(())
    }

    pub async fn open_edit_opinion_modal(&self, opinion: &Opinion) -> Result<(), ApiError> {
        let Ok(dto) = self
            .modals
            .open_opinion_modal(CreateUpdateOpinionDto::from(opinion))
            .await
        else {
            return Ok(());
        };

        let updated = self
            .opinion_service
            .update_opinion(&opinion.product_id, &opinion.opinion_id, &dto)
            .await?;
        self.replace_updated(&updated);
        Ok(())
    }

    /// The dialog performs the delete itself; a `true` result means it went
    /// through and the entry can be dropped.
    pub async fn open_delete_confirmation_modal(&self, opinion: &Opinion) {
        if let Ok(true) = self.modals.open_delete_opinion_modal(opinion.clone()).await {
            self.opinions
                .update(|opinions| remove_opinion(opinions, &opinion.opinion_id));
        }
    }

    fn replace_updated(&self, updated: &Opinion) {
        self.opinions
            .update(|opinions| replace_updated(opinions, updated));
    }
}

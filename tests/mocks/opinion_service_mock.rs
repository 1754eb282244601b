use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use async_trait::async_trait;
use futures::channel::oneshot;
use opinion_collector::api::OpinionService;
use opinion_collector::error::ApiError;
use opinion_collector::models::opinion::{CreateUpdateOpinionDto, Opinion, ReportOpinionDto};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Fetch(String),
    Rate(String, String, bool),
    RemoveReaction(String, String, bool),
    Create(String, CreateUpdateOpinionDto),
    Update(String, String, CreateUpdateOpinionDto),
    Delete(String, String),
    Report(String, String, ReportOpinionDto),
}

/// In-memory stand-in for the opinion backend. Keeps its own copy of every
/// product's opinions and answers the way the server would.
pub struct MockOpinionService {
    author: String,
    store: RefCell<HashMap<String, Vec<Opinion>>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    failure: Cell<Option<u16>>,
    gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
}

impl MockOpinionService {
    pub fn new(author: &str) -> Self {
        Self {
            author: author.to_string(),
            store: RefCell::new(HashMap::new()),
            calls: RefCell::new(Vec::new()),
            next_id: Cell::new(100),
            failure: Cell::new(None),
            gates: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_product(self, product_id: &str, opinions: Vec<Opinion>) -> Self {
        self.store.borrow_mut().insert(product_id.to_string(), opinions);
        self
    }

    /// Every following call answers with this HTTP status.
    pub fn fail_with(&self, status: u16) {
        self.failure.set(Some(status));
    }

    /// Holds fetches of `product_id` until the returned sender fires.
    pub fn gate(&self, product_id: &str) -> oneshot::Sender<()> {
        self.gate_key(product_id.to_string())
    }

    /// Holds the next create on `product_id` until the returned sender fires.
    pub fn gate_create(&self, product_id: &str) -> oneshot::Sender<()> {
        self.gate_key(format!("create:{}", product_id))
    }

    fn gate_key(&self, key: String) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.gates.borrow_mut().insert(key, rx);
        tx
    }

    async fn pass_gate(&self, key: &str) {
        let gate = self.gates.borrow_mut().remove(key);
        if let Some(gate) = gate {
            let _ = gate.await;
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failure.get() {
            Some(status) => Err(ApiError::Status {
                status,
                message: "mock failure".to_string(),
            }),
            None => Ok(()),
        }
    }

    fn modify(
        &self,
        product_id: &str,
        opinion_id: &str,
        change: impl FnOnce(&mut Opinion),
    ) -> Result<Opinion, ApiError> {
        let mut store = self.store.borrow_mut();
        let opinion = store
            .get_mut(product_id)
            .and_then(|opinions| opinions.iter_mut().find(|o| o.opinion_id == opinion_id))
            .ok_or_else(|| ApiError::Status {
                status: 404,
                message: format!("no opinion {}", opinion_id),
            })?;
        change(opinion);
        Ok(opinion.clone())
    }
}

#[async_trait(?Send)]
impl OpinionService for MockOpinionService {
    async fn fetch_opinions(&self, product_id: &str) -> Result<Vec<Opinion>, ApiError> {
        self.record(Call::Fetch(product_id.to_string()))?;
        self.pass_gate(product_id).await;
        Ok(self.store.borrow().get(product_id).cloned().unwrap_or_default())
    }

    async fn rate(
        &self,
        product_id: &str,
        opinion_id: &str,
        positive: bool,
    ) -> Result<Opinion, ApiError> {
        self.record(Call::Rate(product_id.into(), opinion_id.into(), positive))?;
        self.modify(product_id, opinion_id, |o| {
            if positive {
                if o.disliked {
                    o.dislikes -= 1;
                }
                o.likes += 1;
            } else {
                if o.liked {
                    o.likes -= 1;
                }
                o.dislikes += 1;
            }
            o.liked = positive;
            o.disliked = !positive;
        })
    }

    async fn remove_reaction(
        &self,
        product_id: &str,
        opinion_id: &str,
        positive: bool,
    ) -> Result<Opinion, ApiError> {
        self.record(Call::RemoveReaction(product_id.into(), opinion_id.into(), positive))?;
        self.modify(product_id, opinion_id, |o| {
            if positive && o.liked {
                o.liked = false;
                o.likes -= 1;
            } else if !positive && o.disliked {
                o.disliked = false;
                o.dislikes -= 1;
            }
        })
    }

    async fn create_opinion(
        &self,
        product_id: &str,
        dto: &CreateUpdateOpinionDto,
    ) -> Result<Opinion, ApiError> {
        self.record(Call::Create(product_id.into(), dto.clone()))?;
        self.pass_gate(&format!("create:{}", product_id)).await;
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let created = Opinion {
            product_id: product_id.to_string(),
            opinion_id: format!("O{}", id),
            author_name: self.author.clone(),
            content: dto.content.clone(),
            likes: 0,
            dislikes: 0,
            liked: false,
            disliked: false,
        };
        self.store
            .borrow_mut()
            .entry(product_id.to_string())
            .or_default()
            .push(created.clone());
        Ok(created)
    }

    async fn update_opinion(
        &self,
        product_id: &str,
        opinion_id: &str,
        dto: &CreateUpdateOpinionDto,
    ) -> Result<Opinion, ApiError> {
        self.record(Call::Update(product_id.into(), opinion_id.into(), dto.clone()))?;
        self.modify(product_id, opinion_id, |o| o.content = dto.content.clone())
    }

    async fn delete_opinion(&self, product_id: &str, opinion_id: &str) -> Result<(), ApiError> {
        self.record(Call::Delete(product_id.into(), opinion_id.into()))?;
        if let Some(opinions) = self.store.borrow_mut().get_mut(product_id) {
            opinions.retain(|o| o.opinion_id != opinion_id);
        }
        Ok(())
    }

    async fn report_opinion(
        &self,
        product_id: &str,
        opinion_id: &str,
        dto: &ReportOpinionDto,
    ) -> Result<(), ApiError> {
        self.record(Call::Report(product_id.into(), opinion_id.into(), dto.clone()))
    }
}

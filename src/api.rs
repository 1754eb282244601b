use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use urlencoding::encode;

use crate::auth::AuthService;
use crate::error::ApiError;
use crate::models::opinion::{CreateUpdateOpinionDto, Opinion, ReportOpinionDto};

/// Remote operations on the opinions of a product.
#[async_trait(?Send)]
pub trait OpinionService {
    async fn fetch_opinions(&self, product_id: &str) -> Result<Vec<Opinion>, ApiError>;

    async fn rate(&self, product_id: &str, opinion_id: &str, positive: bool)
        -> Result<Opinion, ApiError>;

    async fn remove_reaction(
        &self,
        product_id: &str,
        opinion_id: &str,
        positive: bool,
    ) -> Result<Opinion, ApiError>;

    async fn create_opinion(
        &self,
        product_id: &str,
        dto: &CreateUpdateOpinionDto,
    ) -> Result<Opinion, ApiError>;

    async fn update_opinion(
        &self,
        product_id: &str,
        opinion_id: &str,
        dto: &CreateUpdateOpinionDto,
    ) -> Result<Opinion, ApiError>;

    async fn delete_opinion(&self, product_id: &str, opinion_id: &str) -> Result<(), ApiError>;

    async fn report_opinion(
        &self,
        product_id: &str,
        opinion_id: &str,
        dto: &ReportOpinionDto,
    ) -> Result<(), ApiError>;
}

pub fn opinions_url(base: &str, product_id: &str) -> String {
    format!("{}/products/{}/opinions", base, encode(product_id))
}

pub fn opinion_url(base: &str, product_id: &str, opinion_id: &str) -> String {
    format!("{}/{}", opinions_url(base, product_id), encode(opinion_id))
}

pub fn reaction_url(base: &str, product_id: &str, opinion_id: &str, positive: bool) -> String {
    format!(
        "{}/reaction?positive={}",
        opinion_url(base, product_id, opinion_id),
        positive
    )
}

pub fn report_url(base: &str, product_id: &str, opinion_id: &str) -> String {
    format!("{}/report", opinion_url(base, product_id, opinion_id))
}

/// `OpinionService` backed by the REST API, using gloo-net.
pub struct HttpOpinionService {
    base_url: String,
    auth: Rc<dyn AuthService>,
}

impl HttpOpinionService {
    pub fn new(base_url: impl Into<String>, auth: Rc<dyn AuthService>) -> Self {
        Self {
            base_url: base_url.into(),
            auth,
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.auth.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response.text().await.unwrap_or_default();
    error!("[API] {} failed with {}: {}", response.url(), status, message);
    Err(ApiError::Status { status, message })
}

async fn send_json<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let response = ensure_success(request.send().await?).await?;
    Ok(response.json::<T>().await?)
}

async fn send_empty(request: Request) -> Result<(), ApiError> {
    ensure_success(request.send().await?).await?;
    Ok(())
}

#[async_trait(?Send)]
impl OpinionService for HttpOpinionService {
    async fn fetch_opinions(&self, product_id: &str) -> Result<Vec<Opinion>, ApiError> {
        let url = opinions_url(&self.base_url, product_id);
        log!("[API] Fetching opinions for product {}", product_id);
        let opinions: Vec<Opinion> = send_json(self.authorized(Request::get(&url)).build()?).await?;
        log!("[API] Received {} opinions for product {}", opinions.len(), product_id);
        Ok(opinions)
    }

    async fn rate(
        &self,
        product_id: &str,
        opinion_id: &str,
        positive: bool,
    ) -> Result<Opinion, ApiError> {
        let url = reaction_url(&self.base_url, product_id, opinion_id, positive);
        send_json(self.authorized(Request::put(&url)).build()?).await
    }

    async fn remove_reaction(
        &self,
        product_id: &str,
        opinion_id: &str,
        positive: bool,
    ) -> Result<Opinion, ApiError> {
        let url = reaction_url(&self.base_url, product_id, opinion_id, positive);
        send_json(self.authorized(Request::delete(&url)).build()?).await
    }

    async fn create_opinion(
        &self,
        product_id: &str,
        dto: &CreateUpdateOpinionDto,
    ) -> Result<Opinion, ApiError> {
        let url = opinions_url(&self.base_url, product_id);
        let created: Opinion = send_json(self.authorized(Request::post(&url)).json(dto)?).await?;
        log!("[API] Created opinion {} on product {}", created.opinion_id, product_id);
        Ok(created)
    }

    async fn update_opinion(
        &self,
        product_id: &str,
        opinion_id: &str,
        dto: &CreateUpdateOpinionDto,
    ) -> Result<Opinion, ApiError> {
        let url = opinion_url(&self.base_url, product_id, opinion_id);
        send_json(self.authorized(Request::put(&url)).json(dto)?).await
    }

    async fn delete_opinion(&self, product_id: &str, opinion_id: &str) -> Result<(), ApiError> {
        let url = opinion_url(&self.base_url, product_id, opinion_id);
        send_empty(self.authorized(Request::delete(&url)).build()?).await?;
        log!("[API] Deleted opinion {} on product {}", opinion_id, product_id);
        Ok(())
    }

    async fn report_opinion(
        &self,
        product_id: &str,
        opinion_id: &str,
        dto: &ReportOpinionDto,
    ) -> Result<(), ApiError> {
        let url = report_url(&self.base_url, product_id, opinion_id);
        send_empty(self.authorized(Request::post(&url)).json(dto)?).await
    }
}

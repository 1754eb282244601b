/// Main application entry point for Opinion Collector.
/// Wires the services into context and routes product pages to the opinions list.
use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::{HttpOpinionService, OpinionService};
use crate::auth::{AuthService, BrowserAuthService};
use crate::components::{modal_host::ModalHost, opinions_list::OpinionsList};
use crate::config::ClientConfig;
use crate::modal::SignalModalService;

/// Collaborators shared by every component through context.
#[derive(Clone)]
pub struct AppServices {
    pub opinions: Rc<dyn OpinionService>,
    pub auth: Rc<dyn AuthService>,
    pub modals: SignalModalService,
}

impl AppServices {
    pub fn from_config(config: ClientConfig) -> Self {
        let auth: Rc<dyn AuthService> = Rc::new(BrowserAuthService::new(config.clone()));
        Self {
            opinions: Rc::new(HttpOpinionService::new(config.api_base_url, Rc::clone(&auth))),
            auth,
            modals: SignalModalService::new(),
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(AppServices::from_config(ClientConfig::from_env()));

    view! {
        <Stylesheet id="leptos" href="/pkg/opinion-collector.css" />
        <Title text="Opinion Collector" />
        <Router>
            <main>
                <Routes>
                    <Route path="/products/:id" view=ProductPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
            <ModalHost />
        </Router>
    }
}

/// Product page. The opinions are loaded once here; later changes of the
/// `:id` parameter are picked up by the list itself.
#[component]
fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let product_id =
        Signal::derive(move || params.with(|p| p.get("id").cloned().unwrap_or_default()));
    let service = expect_context::<AppServices>().opinions;

    let seed = create_local_resource(
        || (),
        move |_| {
            let service = Rc::clone(&service);
            let id = product_id.get_untracked();
            async move { service.fetch_opinions(&id).await }
        },
    );

    view! {
        <h2>{ "Product " }{ product_id }</h2>
        <Suspense fallback=|| view! { <p>{ "Loading opinions..." }</p> }>
            {move || seed.map(|result| {
                let initial = match result {
                    Ok(opinions) => opinions.clone(),
                    Err(err) => {
                        error!("[OPINIONS] Initial load failed: {}", err);
                        Vec::new()
                    }
                };
                view! { <OpinionsList product_id=product_id initial_opinions=initial /> }
            })}
        </Suspense>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <p>{ "Nothing here. Open /products/<id> to see its opinions." }</p> }
}

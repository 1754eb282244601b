/// Component listing the opinions of a product.
/// Reactions, authoring and reporting go through `OpinionsController`.
use std::future::Future;
use std::rc::Rc;

use leptos::logging::error;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppServices;
use crate::controller::{OpinionsController, ProductChange};
use crate::error::ApiError;
use crate::models::opinion::Opinion;

/// Runs an action in the background; failures end up in the console.
fn spawn_action<F>(context: &'static str, action: F)
where
    F: Future<Output = Result<(), ApiError>> + 'static,
{
    spawn_local(async move {
        if let Err(err) = action.await {
            error!("[OPINIONS] {} failed: {}", context, err);
        }
    });
}

#[component]
pub fn OpinionsList(
    #[prop(into)] product_id: Signal<String>,
    #[prop(optional)] initial_opinions: Vec<Opinion>,
) -> impl IntoView {
    let services = expect_context::<AppServices>();
    let controller = OpinionsController::new(
        product_id.get_untracked(),
        initial_opinions,
        services.opinions.clone(),
        services.auth.clone(),
        Rc::new(services.modals),
    );

    let watcher = controller.clone();
    create_effect(move |previous: Option<String>| {
        let current = product_id.get();
        let change = ProductChange::new(previous, current.clone());
        if !change.is_first_change() {
            let controller = watcher.clone();
            spawn_action("Loading opinions", async move {
                controller.on_product_change(change).await
            });
        }
        current
    });

    let opinions = controller.opinions();
    let header_controller = controller.clone();
    let list_controller = controller;

    view! {
        <section class="opinions">
            <header class="opinions-header">
                <h3>{ "Opinions" }</h3>
                {move || header_controller.is_user().then(|| {
                    let controller = header_controller.clone();
                    view! {
                        <button
                            class="opinions-add"
                            on:click=move |_| {
                                let controller = controller.clone();
                                spawn_action("Creating opinion", async move {
                                    controller.open_create_opinion_modal().await
                                });
                            }
                        >
                            { "Add opinion" }
                        </button>
                    }
                })}
            </header>
            {move || opinions.with(Vec::is_empty).then(|| view! {
                <p class="opinions-empty">{ "No opinions yet." }</p>
            })}
            <ul class="opinions-list">
                {move || opinions.get().into_iter().map(|opinion| view! {
                    <OpinionCard opinion=opinion controller=list_controller.clone() />
                }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

#[component]
fn OpinionCard(opinion: Opinion, controller: OpinionsController) -> impl IntoView {
    let is_user = controller.is_user();
    let is_author = controller.is_author(&opinion);

    let react = {
        let controller = controller.clone();
        let opinion = opinion.clone();
        move |positive: bool| {
            let controller = controller.clone();
            let opinion = opinion.clone();
            spawn_action("Reacting to opinion", async move {
                controller.on_reaction_click(&opinion, positive).await.map(|_| ())
            });
        }
    };
    let like = react.clone();
    let dislike = react;

    let edit = {
        let controller = controller.clone();
        let opinion = opinion.clone();
        move |_: ev::MouseEvent| {
            let controller = controller.clone();
            let opinion = opinion.clone();
            spawn_action("Editing opinion", async move {
                controller.open_edit_opinion_modal(&opinion).await
            });
        }
    };

    let delete = {
        let controller = controller.clone();
        let opinion = opinion.clone();
        move |_: ev::MouseEvent| {
            let controller = controller.clone();
            let opinion = opinion.clone();
            spawn_local(async move { controller.open_delete_confirmation_modal(&opinion).await });
        }
    };

    let report = {
        let opinion = opinion.clone();
        move |_: ev::MouseEvent| controller.open_report_modal(&opinion)
    };

    view! {
        <li class="opinion">
            <div class="opinion-author">{ opinion.author_name.clone() }</div>
            <p class="opinion-content">{ opinion.content.clone() }</p>
            <div class="opinion-reactions">
                <button
                    class:active={opinion.liked}
                    disabled={!is_user}
                    on:click=move |_| like(true)
                >
                    { format!("Like ({})", opinion.likes) }
                </button>
                <button
                    class:active={opinion.disliked}
                    disabled={!is_user}
                    on:click=move |_| dislike(false)
                >
                    { format!("Dislike ({})", opinion.dislikes) }
                </button>
            </div>
            <div class="opinion-actions">
                {is_author.then(|| view! {
                    <button on:click=edit>{ "Edit" }</button>
                    <button on:click=delete>{ "Delete" }</button>
                })}
                {(is_user && !is_author).then(|| view! {
                    <button on:click=report>{ "Report" }</button>
                })}
            </div>
        </li>
    }
}

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppServices;
use crate::modal::{delete_and_resolve, ModalReply};
use crate::models::opinion::Opinion;

/// Asks for confirmation, then deletes. The dialog resolves with whether the
/// server accepted the delete.
#[component]
pub fn DeleteOpinionModal(opinion: Opinion, reply: ModalReply<bool>) -> impl IntoView {
    let services = expect_context::<AppServices>();
    let modals = services.modals;
    let (pending, set_pending) = create_signal(false);
    let author = opinion.author_name.clone();

    let delete = move |_: ev::MouseEvent| {
        let service = services.opinions.clone();
        let opinion = opinion.clone();
        let reply = reply.clone();
        set_pending.set(true);
        spawn_local(async move {
            delete_and_resolve(service.as_ref(), modals, &opinion, &reply).await;
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-sm">
                <h3>{ "Delete opinion" }</h3>
                <p>{ format!("Delete the opinion by {}? This cannot be undone.", author) }</p>
                <div class="modal-actions">
                    // once the request is out only its result may close the dialog
                    <button type="button" disabled=pending on:click=move |_| modals.dismiss()>
                        { "Cancel" }
                    </button>
                    <button type="button" class="danger" disabled=pending on:click=delete>
                        { "Delete" }
                    </button>
                </div>
            </div>
        </div>
    }
}

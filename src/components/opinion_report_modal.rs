use leptos::ev::SubmitEvent;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppServices;
use crate::modal::{report_and_close, ModalReply};
use crate::models::opinion::{Opinion, ReportOpinionDto};

#[component]
pub fn OpinionReportModal(opinion: Opinion, reply: ModalReply<()>) -> impl IntoView {
    let services = expect_context::<AppServices>();
    let modals = services.modals;
    let (reason, set_reason) = create_signal(String::new());
    let (pending, set_pending) = create_signal(false);

    let submit_report = move |ev: SubmitEvent| {
        ev.prevent_default();
        let service = services.opinions.clone();
        let opinion = opinion.clone();
        let reply = reply.clone();
        let dto = ReportOpinionDto {
            reason: reason.get_untracked(),
        };
        set_pending.set(true);
        spawn_local(async move {
            report_and_close(service.as_ref(), modals, &opinion, &dto, &reply).await;
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=submit_report>
                <h3>{ "Report opinion" }</h3>
                <textarea
                    placeholder="What is wrong with this opinion?"
                    prop:value=reason
                    on:input=move |e| set_reason.set(event_target_value(&e))
                />
                <div class="modal-actions">
                    <button type="button" disabled=pending on:click=move |_| modals.dismiss()>
                        { "Cancel" }
                    </button>
                    <button
                        type="submit"
                        disabled=move || pending.get() || reason.with(|r| r.trim().is_empty())
                    >
                        { "Report" }
                    </button>
                </div>
            </form>
        </div>
    }
}

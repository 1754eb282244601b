use leptos::ev::SubmitEvent;
use leptos::*;

use crate::app::AppServices;
use crate::models::opinion::CreateUpdateOpinionDto;

/// Create/edit form. Resolves the open dialog with the edited payload.
#[component]
pub fn OpinionModal(draft: CreateUpdateOpinionDto) -> impl IntoView {
    let modals = expect_context::<AppServices>().modals;
    let (content, set_content) = create_signal(draft.content);

    let submit_opinion = move |ev: SubmitEvent| {
        ev.prevent_default();
        modals.submit_opinion(CreateUpdateOpinionDto {
            content: content.get_untracked(),
        });
    };

    view! {
        <div class="modal-backdrop">
            <form class="modal" on:submit=submit_opinion>
                <h3>{ "Your opinion" }</h3>
                <textarea
                    placeholder="Write your opinion here"
                    prop:value=content
                    on:input=move |e| set_content.set(event_target_value(&e))
                />
                <div class="modal-actions">
                    <button type="button" on:click=move |_| modals.dismiss()>{ "Cancel" }</button>
                    <button
                        type="submit"
                        disabled=move || content.with(|c| c.trim().is_empty())
                    >
                        { "Save" }
                    </button>
                </div>
            </form>
        </div>
    }
}

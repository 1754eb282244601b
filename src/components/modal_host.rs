use leptos::*;

use crate::app::AppServices;
use crate::components::delete_opinion_modal::DeleteOpinionModal;
use crate::components::opinion_modal::OpinionModal;
use crate::components::opinion_report_modal::OpinionReportModal;
use crate::modal::ActiveModal;

/// Renders whichever dialog the modal service has open.
#[component]
pub fn ModalHost() -> impl IntoView {
    let active = expect_context::<AppServices>().modals.active();

    move || {
        active.get().map(|modal| match modal {
            ActiveModal::Opinion { draft, .. } => view! { <OpinionModal draft=draft /> }.into_view(),
            ActiveModal::DeleteOpinion { opinion, reply } => {
                view! { <DeleteOpinionModal opinion=opinion reply=reply /> }.into_view()
            }
            ActiveModal::ReportOpinion { opinion, reply } => {
                view! { <OpinionReportModal opinion=opinion reply=reply /> }.into_view()
            }
        })
    }
}

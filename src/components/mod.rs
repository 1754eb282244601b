pub mod delete_opinion_modal;
pub mod modal_host;
pub mod opinion_modal;
pub mod opinion_report_modal;
pub mod opinions_list;

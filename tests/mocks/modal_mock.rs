use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use opinion_collector::error::ModalDismissed;
use opinion_collector::modal::ModalService;
use opinion_collector::models::opinion::{CreateUpdateOpinionDto, Opinion};

#[derive(Debug, Clone, PartialEq)]
pub enum Opened {
    Opinion(CreateUpdateOpinionDto),
    DeleteOpinion(Opinion),
    Report(Opinion),
}

/// Dialogs that answer from a script. An empty script means the user
/// cancelled.
#[derive(Default)]
pub struct ScriptedModals {
    opinion_answers: RefCell<VecDeque<Result<CreateUpdateOpinionDto, ModalDismissed>>>,
    delete_answers: RefCell<VecDeque<Result<bool, ModalDismissed>>>,
    opened: RefCell<Vec<Opened>>,
}

impl ScriptedModals {
    pub fn submit_opinion(&self, content: &str) -> &Self {
        self.opinion_answers.borrow_mut().push_back(Ok(CreateUpdateOpinionDto {
            content: content.to_string(),
        }));
        self
    }

    pub fn answer_delete(&self, answer: Result<bool, ModalDismissed>) -> &Self {
        self.delete_answers.borrow_mut().push_back(answer);
        self
    }

    pub fn opened(&self) -> Vec<Opened> {
        self.opened.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ModalService for ScriptedModals {
    async fn open_opinion_modal(
        &self,
        draft: CreateUpdateOpinionDto,
    ) -> Result<CreateUpdateOpinionDto, ModalDismissed> {
        self.opened.borrow_mut().push(Opened::Opinion(draft));
        self.opinion_answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ModalDismissed))
    }

    async fn open_delete_opinion_modal(&self, opinion: Opinion) -> Result<bool, ModalDismissed> {
        self.opened.borrow_mut().push(Opened::DeleteOpinion(opinion));
        self.delete_answers
            .borrow_mut()
            .pop_front()
            .unwrap_or(Err(ModalDismissed))
    }

    fn open_report_modal(&self, opinion: Opinion) {
        self.opened.borrow_mut().push(Opened::Report(opinion));
    }
}

use crate::host::{EditEvent, HostBridge, LabelRef, PageModel, PromptReply, QuantityId};
use std::collections::VecDeque;

/// In-memory host with scripted prompt replies. Backs the tests, the
/// non-interactive CLI path and the wasm surface. An exhausted reply
/// queue behaves like a cancelled modal.
pub struct MemoryHost {
    page: PageModel,
    replies: VecDeque<PromptReply>,
    prompted_defaults: Vec<String>,
}

impl MemoryHost {
    pub fn new(page: PageModel) -> Self {
        Self {
            page,
            replies: VecDeque::new(),
            prompted_defaults: Vec::new(),
        }
    }

    pub fn queue_reply(&mut self, reply: PromptReply) {
        self.replies.push_back(reply);
    }

    pub fn page(&self) -> &PageModel {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageModel {
        &mut self.page
    }

    /// Default texts shown by past prompts, oldest first.
    pub fn prompted_defaults(&self) -> &[String] {
        &self.prompted_defaults
    }
}

impl HostBridge for MemoryHost {
    fn quantities(&self) -> Vec<QuantityId> {
        self.page.quantity_ids()
    }

    fn value(&self, id: QuantityId) -> f64 {
        self.page.value(id)
    }

    fn set_value(&mut self, id: QuantityId, value: f64) {
        self.page.set_value(id, value);
    }

    fn text(&self, id: QuantityId) -> String {
        self.page.text(id).to_string()
    }

    fn set_text(&mut self, id: QuantityId, text: &str) {
        self.page.set_text(id, text);
    }

    fn labels(&self, id: QuantityId) -> Vec<LabelRef> {
        self.page.label_forms(id)
    }

    fn set_label_text(&mut self, id: QuantityId, slot: usize, text: &str) {
        self.page.set_label_text(id, slot, text);
    }

    fn resolve_target(&self, event: &EditEvent) -> Option<QuantityId> {
        self.page.owner_of(event.target)
    }

    fn prompt(&mut self, default_text: &str) -> PromptReply {
        self.prompted_defaults.push(default_text.to_string());
        self.replies.pop_front().unwrap_or(PromptReply::Cancelled)
    }
}

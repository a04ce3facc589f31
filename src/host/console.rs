use crate::host::{EditEvent, HostBridge, LabelRef, PageModel, PromptReply, QuantityId};
use std::io::{self, BufRead, Write};

/// Console stand-in for the page's modal prompt: the prompt goes to
/// stderr, the reply is one line from stdin. EOF and a blank line cancel.
pub struct ConsoleHost {
    page: PageModel,
}

impl ConsoleHost {
    pub fn new(page: PageModel) -> Self {
        Self { page }
    }

    pub fn page(&self) -> &PageModel {
        &self.page
    }
}

impl HostBridge for ConsoleHost {
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
        eprint!("Enter new value [{}]: ", default_text);
        let _ = io::stderr().flush();

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => PromptReply::Cancelled,
            Ok(_) => {
                let reply = line.trim();
                if reply.is_empty() {
                    PromptReply::Cancelled
                } else {
                    PromptReply::Text(reply.to_string())
                }
            }
        }
    }
}

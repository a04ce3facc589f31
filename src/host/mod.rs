#[cfg(not(target_arch = "wasm32"))]
pub mod console;
pub mod document;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use console::ConsoleHost;
pub use document::{page_from_recipe, PageEntry, RecipePage};
pub use memory::MemoryHost;

use crate::noun::NounForm;
use std::collections::HashMap;

/// Opaque handle to a tracked quantity group on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantityId(usize);

/// Handle to a single page element. Clicks arrive as element ids; the
/// page resolves them to the owning quantity group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(usize);

/// What a page element is, instead of probing attributes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementRole {
    /// Carries the stored numeric value and the rendered amount text.
    Amount,
    /// A noun label adjacent to the amount (unit or ingredient name).
    Label,
}

/// A click delivered by the page. The target may be any element inside a
/// quantity group, not necessarily the amount itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditEvent {
    pub target: ElementId,
}

/// Outcome of the blocking modal prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    Text(String),
    Cancelled,
}

/// A configured noun label slot on a quantity group.
#[derive(Debug, Clone)]
pub struct LabelRef {
    pub slot: usize,
    pub form: NounForm,
}

/// Page-side surface the scale controller drives. Implemented by the
/// shipped in-memory hosts here and, in production, by the generated page
/// itself. The controller is the only caller of the mutating methods.
pub trait HostBridge {
    /// All currently tracked quantity groups.
    fn quantities(&self) -> Vec<QuantityId>;

    /// Stored numeric value of a group. This is the exact value, never the
    /// rounded display text re-parsed.
    fn value(&self, id: QuantityId) -> f64;

    fn set_value(&mut self, id: QuantityId, value: f64);

    /// Currently rendered display text of a group.
    fn text(&self, id: QuantityId) -> String;

    fn set_text(&mut self, id: QuantityId, text: &str);

    /// Noun label slots configured on a group. Labels without a form are
    /// not listed; they are left untouched by design.
    fn labels(&self, id: QuantityId) -> Vec<LabelRef>;

    fn set_label_text(&mut self, id: QuantityId, slot: usize, text: &str);

    /// Map a raw click target to its owning quantity group, if any.
    fn resolve_target(&self, event: &EditEvent) -> Option<QuantityId>;

    /// Blocking modal prompt: show `default_text`, return the user's
    /// replacement text or cancellation.
    fn prompt(&mut self, default_text: &str) -> PromptReply;
}

struct LabelSlot {
    element: ElementId,
    form: Option<NounForm>,
    text: String,
}

struct QuantityGroup {
    value: f64,
    text: String,
    amount_element: ElementId,
    labels: Vec<LabelSlot>,
}

/// In-memory element store standing in for the generated page: quantity
/// groups, their label elements, and the child-to-owner map used for
/// event resolution.
#[derive(Default)]
pub struct PageModel {
    groups: Vec<QuantityGroup>,
    owners: HashMap<ElementId, QuantityId>,
    next_element: usize,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_element(&mut self) -> ElementId {
        let element = ElementId(self.next_element);
        self.next_element += 1;
        element
    }

    /// Register a quantity group with its stored numeric value. The
    /// display text starts empty; the controller's initial pass renders
    /// it.
    pub fn add_quantity(&mut self, value: f64) -> QuantityId {
        let id = QuantityId(self.groups.len());
        let amount_element = self.allocate_element();
        self.owners.insert(amount_element, id);
        self.groups.push(QuantityGroup {
            value,
            text: String::new(),
            amount_element,
            labels: Vec::new(),
        });
        id
    }

    /// Attach a label element to a group. A label without a noun form is
    /// never rewritten, but clicks on it still resolve to the group.
    pub fn add_label(&mut self, id: QuantityId, form: Option<NounForm>) -> ElementId {
        let element = self.allocate_element();
        self.owners.insert(element, id);
        self.groups[id.0].labels.push(LabelSlot {
            element,
            form,
            text: String::new(),
        });
        element
    }

    pub fn quantity_ids(&self) -> Vec<QuantityId> {
        (0..self.groups.len()).map(QuantityId).collect()
    }

    pub fn value(&self, id: QuantityId) -> f64 {
        self.groups[id.0].value
    }

    pub fn set_value(&mut self, id: QuantityId, value: f64) {
        self.groups[id.0].value = value;
    }

    pub fn text(&self, id: QuantityId) -> &str {
        &self.groups[id.0].text
    }

    pub fn set_text(&mut self, id: QuantityId, text: &str) {
        self.groups[id.0].text = text.to_string();
    }

    /// The clickable element carrying the amount.
    pub fn amount_element(&self, id: QuantityId) -> ElementId {
        self.groups[id.0].amount_element
    }

    pub fn label_elements(&self, id: QuantityId) -> Vec<ElementId> {
        self.groups[id.0].labels.iter().map(|l| l.element).collect()
    }

    pub fn label_forms(&self, id: QuantityId) -> Vec<LabelRef> {
        self.groups[id.0]
            .labels
            .iter()
            .enumerate()
            .filter_map(|(slot, label)| {
                label.form.as_ref().map(|form| LabelRef {
                    slot,
                    form: form.clone(),
                })
            })
            .collect()
    }

    pub fn label_text(&self, id: QuantityId, slot: usize) -> &str {
        &self.groups[id.0].labels[slot].text
    }

    pub fn set_label_text(&mut self, id: QuantityId, slot: usize, text: &str) {
        self.groups[id.0].labels[slot].text = text.to_string();
    }

    /// All label texts of a group in slot order, for rendering.
    pub fn label_texts(&self, id: QuantityId) -> Vec<&str> {
        self.groups[id.0]
            .labels
            .iter()
            .map(|l| l.text.as_str())
            .collect()
    }

    pub fn role_of(&self, element: ElementId) -> Option<ElementRole> {
        let owner = self.owners.get(&element)?;
        if self.groups[owner.0].amount_element == element {
            Some(ElementRole::Amount)
        } else {
            Some(ElementRole::Label)
        }
    }

    /// Owner lookup for event resolution; elements the page never
    /// registered resolve to nothing.
    pub fn owner_of(&self, element: ElementId) -> Option<QuantityId> {
        self.owners.get(&element).copied()
    }

    /// An element id no page element owns, for exercising unresolvable
    /// clicks.
    pub fn unowned_element(&self) -> ElementId {
        ElementId(self.next_element)
    }

    pub fn quantity_count(&self) -> usize {
        self.groups.len()
    }
}

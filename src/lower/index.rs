//! Identifier indices over the extracted collections.

use std::collections::HashMap;

use crate::parse::{AppDocument, DataModelSlot, Identified, Step, TableQuery, Trigger, Variable, Widget};

/// Entity id → entity, borrowed from the document.
pub type Index<'a, T> = HashMap<&'a str, &'a T>;

/// Key every element by its identifier. Elements without one are dropped; for
/// duplicate identifiers the later element replaces the earlier.
pub fn index_by_id<T: Identified>(items: &[T]) -> Index<'_, T> {
    items
        .iter()
        .filter_map(|item| item.id().map(|id| (id, item)))
        .collect()
}

/// The reference tables needed to describe input values.
#[derive(Debug, Default)]
pub struct ResolutionContext<'a> {
    pub table_queries: Index<'a, TableQuery>,
    pub variables: Index<'a, Variable>,
    pub data_model_slots: Index<'a, DataModelSlot>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(doc: &'a AppDocument) -> Self {
        ResolutionContext {
            table_queries: index_by_id(&doc.table_queries),
            variables: index_by_id(&doc.variables),
            data_model_slots: index_by_id(&doc.data_model_slots),
        }
    }
}

/// All indices built once per document.
#[derive(Debug, Default)]
pub struct Indices<'a> {
    pub steps: Index<'a, Step>,
    pub triggers: Index<'a, Trigger>,
    pub widgets: Index<'a, Widget>,
    pub context: ResolutionContext<'a>,
}

impl<'a> Indices<'a> {
    pub fn new(doc: &'a AppDocument) -> Self {
        Indices {
            steps: index_by_id(&doc.steps),
            triggers: index_by_id(&doc.triggers),
            widgets: index_by_id(&doc.widgets),
            context: ResolutionContext::new(doc),
        }
    }
}

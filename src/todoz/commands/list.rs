use crate::model::{Document, ListSummary};

pub fn run(doc: &Document) -> Vec<ListSummary> {
    doc.lists.iter().map(|l| l.summary()).collect()
}

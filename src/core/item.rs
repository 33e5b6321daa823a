/// A single todo. Only `TodoList` creates these, after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem {
    pub description: String,
    pub is_complete: bool,
}

impl TodoItem {
    pub(crate) fn new(description: String) -> Self {
        Self {
            description,
            is_complete: false,
        }
    }
}

//! # Todo List
//!
//! The manager that owns every todo for one session.
//!
//! ```text
//! TodoList
//! ├── items: Vec<TodoItem>        // insertion order
//! └── sink: Box<dyn EventSink>    // diagnostics side channel
//! ```
//!
//! Display numbers are `position + 1`, computed on every `list()` call and
//! never stored. Deleting item 2 makes the old item 3 the new item 2.
//!
//! Every operation validates before it mutates, so a failed call leaves the
//! list exactly as it was.

use crate::core::error::TodoError;
use crate::core::events::{EventSink, LogSink, TodoEvent};
use crate::core::item::TodoItem;
use crate::core::validation::{check_in_range, validate_description};

pub struct TodoList {
    items: Vec<TodoItem>,
    sink: Box<dyn EventSink>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self::new(Box::new(LogSink))
    }
}

impl TodoList {
    pub fn new(sink: Box<dyn EventSink>) -> Self {
        Self {
            items: Vec::new(),
            sink,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends a new, pending todo with the trimmed description.
    pub fn add(&mut self, description: &str) -> Result<(), TodoError> {
        let description = validate_description(description)?;
        self.items.push(TodoItem::new(description.clone()));
        self.sink.record(&TodoEvent::Added { description });
        Ok(())
    }

    /// Snapshot of `(display_number, item)` pairs, 1-based, in order.
    pub fn list(&self) -> Vec<(usize, &TodoItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| (i + 1, item))
            .collect()
    }

    /// Marks a todo done. Already-done todos stay done, no error.
    pub fn mark_complete(&mut self, number: i64) -> Result<(), TodoError> {
        let pos = check_in_range(number, self.items.len())?;
        self.items[pos].is_complete = true;
        self.sink.record(&TodoEvent::Completed { number });
        Ok(())
    }

    pub fn delete(&mut self, number: i64) -> Result<(), TodoError> {
        let pos = check_in_range(number, self.items.len())?;
        let removed = self.items.remove(pos);
        self.sink.record(&TodoEvent::Deleted {
            number,
            description: removed.description,
        });
        Ok(())
    }

    /// Replaces the description, keeping completion state.
    ///
    /// The number is checked before the description, so a bad number always
    /// wins over a bad description.
    pub fn update(&mut self, number: i64, new_description: &str) -> Result<(), TodoError> {
        let pos = check_in_range(number, self.items.len())?;
        let new = validate_description(new_description)?;
        let old = std::mem::replace(&mut self.items[pos].description, new.clone());
        self.sink.record(&TodoEvent::Updated { number, old, new });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::DescriptionError;
    use crate::test_support::{RecordingSink, list_with, test_list};

    fn descriptions(list: &TodoList) -> Vec<(usize, String)> {
        list.list()
            .into_iter()
            .map(|(n, item)| (n, item.description.clone()))
            .collect()
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = test_list();
        assert!(list.is_empty());
        assert!(list.list().is_empty());
    }

    #[test]
    fn test_add_then_list() {
        let mut list = test_list();
        list.add("Buy milk").unwrap();
        let listed = list.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].0, 1);
        assert_eq!(
            listed[0].1,
            &TodoItem {
                description: "Buy milk".into(),
                is_complete: false
            }
        );
    }

    #[test]
    fn test_add_trims_and_appends_last() {
        let mut list = list_with(&["A", "B"]);
        list.add("   C  ").unwrap();
        let listed = list.list();
        assert_eq!(listed.last().map(|(n, i)| (*n, i.description.as_str())), Some((3, "C")));
        assert!(!listed[2].1.is_complete);
    }

    #[test]
    fn test_add_allows_duplicates() {
        let list = list_with(&["Same", "Same"]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_add_invalid_leaves_list_unchanged() {
        let mut list = list_with(&["A"]);
        let too_long = "A".repeat(201);
        for bad in ["", "   ", too_long.as_str()] {
            assert!(matches!(list.add(bad), Err(TodoError::InvalidInput(_))));
        }
        assert_eq!(descriptions(&list), vec![(1, "A".to_string())]);
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut list = list_with(&["A"]);
        list.mark_complete(1).unwrap();
        assert!(list.list()[0].1.is_complete);
        list.mark_complete(1).unwrap();
        assert!(list.list()[0].1.is_complete);
    }

    #[test]
    fn test_boundaries() {
        let mut list = list_with(&["A", "B", "C"]);
        let len = list.len() as i64;
        assert_eq!(list.mark_complete(0), Err(TodoError::NotFound("0".into())));
        assert_eq!(list.mark_complete(len + 1), Err(TodoError::NotFound("4".into())));
        assert_eq!(list.delete(-1), Err(TodoError::NotFound("-1".into())));
        assert_eq!(list.mark_complete(len), Ok(()));
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_renumbers() {
        let mut list = list_with(&["A", "B", "C"]);
        list.delete(2).unwrap();
        assert_eq!(
            descriptions(&list),
            vec![(1, "A".to_string()), (2, "C".to_string())]
        );
    }

    #[test]
    fn test_delete_first() {
        let mut list = list_with(&["A", "B", "C"]);
        list.delete(1).unwrap();
        assert_eq!(
            descriptions(&list),
            vec![(1, "B".to_string()), (2, "C".to_string())]
        );
    }

    #[test]
    fn test_update_keeps_completion() {
        let mut list = list_with(&["A", "B"]);
        list.mark_complete(2).unwrap();
        list.update(2, "  Bee ").unwrap();
        let listed = list.list();
        assert_eq!(listed[1].1.description, "Bee");
        assert!(listed[1].1.is_complete);
        assert!(!listed[0].1.is_complete);
    }

    #[test]
    fn test_update_invalid_description() {
        let mut list = list_with(&["A"]);
        assert_eq!(
            list.update(1, " "),
            Err(TodoError::InvalidInput(DescriptionError::Empty))
        );
        assert_eq!(list.list()[0].1.description, "A");
    }

    #[test]
    fn test_update_checks_number_first() {
        let mut list = list_with(&["A", "B"]);
        assert_eq!(list.update(3, ""), Err(TodoError::NotFound("3".into())));
    }

    #[test]
    fn test_events_recorded_for_successful_mutations_only() {
        let sink = RecordingSink::default();
        let mut list = TodoList::new(Box::new(sink.clone()));

        list.add("Buy milk").unwrap();
        list.add("").unwrap_err();
        list.update(1, "Buy oat milk").unwrap();
        list.mark_complete(1).unwrap();
        list.delete(2).unwrap_err();
        list.delete(1).unwrap();

        assert_eq!(
            sink.events(),
            vec![
                TodoEvent::Added {
                    description: "Buy milk".into()
                },
                TodoEvent::Updated {
                    number: 1,
                    old: "Buy milk".into(),
                    new: "Buy oat milk".into()
                },
                TodoEvent::Completed { number: 1 },
                TodoEvent::Deleted {
                    number: 1,
                    description: "Buy oat milk".into()
                },
            ]
        );
    }
}

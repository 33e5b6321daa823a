//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::{EventSink, NullSink, TodoEvent, TodoList};

/// Collects events so tests can assert on them. Clones share storage.
#[derive(Clone, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<TodoEvent>>>,
}

impl RecordingSink {
    pub fn events(&self) -> Vec<TodoEvent> {
        self.events.borrow().clone()
    }
}

impl EventSink for RecordingSink {
    fn record(&self, event: &TodoEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Creates an empty list that discards events.
pub fn test_list() -> TodoList {
    TodoList::new(Box::new(NullSink))
}

/// Creates a list pre-filled with the given descriptions.
pub fn list_with(descriptions: &[&str]) -> TodoList {
    let mut list = test_list();
    for d in descriptions {
        list.add(d).expect("valid test description");
    }
    list
}

//! In-memory todo store.
//!
//! # Design
//! An explicit store value injected into handlers through axum state, so it
//! can be exercised without a socket. The collection is an ordered `Vec`
//! and every lookup is a linear scan; insertion order is observable through
//! `list`, and replace/patch update in place without reordering. `next_id`
//! starts at 1 and only moves forward, so ids are never reused.

use crate::types::{Todo, TodoId, TodoIn, TodoPatch};

/// Ordered in-memory collection of todos plus the id counter.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    next_id: TodoId,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            next_id: 1,
        }
    }

    /// All todos in insertion order.
    pub fn list(&self) -> Vec<Todo> {
        self.todos.clone()
    }

    /// Append a new todo under the next free id.
    pub fn create(&mut self, input: TodoIn) -> Todo {
        let id = self.next_id;
        self.next_id += 1;
        let todo = Todo::from_input(id, input);
        self.todos.push(todo.clone());
        todo
    }

    pub fn get(&self, id: TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    /// Overwrite every field of the todo with `id` from `input`, keeping its
    /// position. Previous values are discarded entirely. A missing id is a
    /// miss, never an insert.
    pub fn replace(&mut self, id: TodoId, input: TodoIn) -> Option<Todo> {
        let slot = self.todos.iter_mut().find(|t| t.id == id)?;
        *slot = Todo::from_input(id, input);
        Some(slot.clone())
    }

    /// Apply only the fields present in `patch`; omitted fields keep their
    /// prior values. The id is never altered.
    pub fn patch(&mut self, id: TodoId, patch: TodoPatch) -> Option<Todo> {
        let todo = self.todos.iter_mut().find(|t| t.id == id)?;
        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(done) = patch.done {
            todo.done = done;
        }
        if let Some(notes) = patch.notes {
            todo.notes = notes;
        }
        Some(todo.clone())
    }

    /// Remove the todo with `id`, preserving the order of the rest. The id
    /// counter is unaffected.
    pub fn remove(&mut self, id: TodoId) -> bool {
        match self.todos.iter().position(|t| t.id == id) {
            Some(pos) => {
                self.todos.remove(pos);
                true
            }
            None => false,
        }
    }
}

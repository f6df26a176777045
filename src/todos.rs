//! Todo Collection Helpers
//!
//! Plain-`Vec` operations behind the store and the list view.
//! A todo is just its text; its position is its only identity.

/// One rendered row: the text plus the position its delete action targets
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TodoEntry {
    pub index: usize,
    pub text: String,
}

impl TodoEntry {
    /// Fire the delete callback for this row's position
    pub fn delete(&self, on_delete: impl Fn(usize)) {
        on_delete(self.index);
    }
}

/// Pair each todo with its current position
pub fn indexed_entries(todos: &[String]) -> Vec<TodoEntry> {
    todos
        .iter()
        .enumerate()
        .map(|(index, text)| TodoEntry { index, text: text.clone() })
        .collect()
}

/// Append a todo
pub fn add_todo(todos: &mut Vec<String>, text: String) {
    todos.push(text);
}

/// Remove the todo at `index`. Out-of-range positions are ignored.
pub fn remove_todo(todos: &mut Vec<String>, index: usize) -> Option<String> {
    if index >= todos.len() {
        log::warn!("[TODOS] delete at {} ignored, only {} todos", index, todos.len());
        return None;
    }
    Some(todos.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn sample() -> Vec<String> {
        vec!["wash dishes".to_string(), "buy milk".to_string(), "pay bills".to_string()]
    }

    #[test]
    fn test_second_entry_deletes_index_one() {
        let entries = indexed_entries(&sample());
        let calls = RefCell::new(Vec::new());

        entries[1].delete(|index| calls.borrow_mut().push(index));

        assert_eq!(entries[1].text, "buy milk");
        assert_eq!(*calls.borrow(), vec![1]);
    }

    #[test]
    fn test_empty_collection_has_no_entries() {
        assert!(indexed_entries(&[]).is_empty());
    }

    #[test]
    fn test_entries_keep_order_and_duplicates() {
        let todos = vec!["a".to_string(), "a".to_string(), "b".to_string()];
        let entries = indexed_entries(&todos);
        let indices: Vec<usize> = entries.iter().map(|e| e.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert_eq!(entries[0].text, entries[1].text);
    }

    #[test]
    fn test_remove_targets_current_position() {
        let mut todos = sample();
        assert_eq!(remove_todo(&mut todos, 0).as_deref(), Some("wash dishes"));
        // "pay bills" has moved into slot 1
        assert_eq!(remove_todo(&mut todos, 1).as_deref(), Some("pay bills"));
        assert_eq!(todos, vec!["buy milk".to_string()]);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut todos = sample();
        assert_eq!(remove_todo(&mut todos, 3), None);
        assert_eq!(todos.len(), 3);
    }

    #[test]
    fn test_add_appends() {
        let mut todos = sample();
        add_todo(&mut todos, " new ".to_string());
        assert_eq!(todos.last().map(String::as_str), Some(" new "));
    }
}

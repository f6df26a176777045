//! Draft Logic
//!
//! Restore, persist and submit the text being typed into the form.
//! No Leptos here: the form component wires these into signals and effects.

use crate::error::StorageResult;
use crate::storage::KeyValueStore;

/// Decode a persisted draft.
///
/// Anything that is not a JSON string (missing key, garbage, `null`, a
/// number...) is treated as "no draft".
pub fn decode_draft(raw: Option<&str>) -> String {
    raw.and_then(|raw| serde_json::from_str::<Option<String>>(raw).ok())
        .flatten()
        .unwrap_or_default()
}

/// Encode a draft for storage (JSON string literal)
pub fn encode_draft(draft: &str) -> StorageResult<String> {
    Ok(serde_json::to_string(draft)?)
}

/// Read the saved draft under `key`
pub fn restore_draft(store: &dyn KeyValueStore, key: &str) -> String {
    let draft = decode_draft(store.get(key).as_deref());
    log::debug!("[DRAFT] restored {} chars from `{}`", draft.chars().count(), key);
    draft
}

/// Write the draft under `key`
pub fn persist_draft(store: &dyn KeyValueStore, key: &str, draft: &str) -> StorageResult<()> {
    store.set(key, &encode_draft(draft)?)
}

/// Whitespace as a browser's `String.prototype.trim` sees it.
///
/// Unicode `White_Space` plus U+FEFF (BOM), minus U+0085 (NEL).
pub fn is_js_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Whether the draft has nothing but whitespace
pub fn is_blank(draft: &str) -> bool {
    draft.trim_matches(is_js_whitespace).is_empty()
}

/// Take the draft as a new todo, leaving it empty.
///
/// Blank drafts are left untouched and yield `None`. The returned text is the
/// draft as typed, not trimmed.
pub fn take_submission(draft: &mut String) -> Option<String> {
    if is_blank(draft) {
        return None;
    }
    Some(std::mem::take(draft))
}

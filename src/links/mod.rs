use crate::models::LinkEntry;

/// Ticket links in upload order, plus the one currently handed to the viewer.
///
/// Selection is tracked by text, not by position, so it survives deletion of
/// other entries. Removing the last entry that carries the selected text
/// clears the selection. Duplicate links share one selection: selecting either
/// copy marks every entry with that text as selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct LinkRegistry {
    entries: Vec<LinkEntry>,
    selected: Option<String>,
}

impl LinkRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Append `text` as a new entry. Empty text is ignored.
    ///
    /// Returns `true` when an entry was appended.
    pub fn add(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        self.entries.push(LinkEntry::new(text));
        true
    }

    /// Same as [`add`](Self::add), but drains the pending input buffer on success.
    pub fn add_from_input(&mut self, input: &mut String) -> bool {
        if !self.add(input) {
            return false;
        }
        input.clear();
        true
    }

    pub fn remove(&mut self, index: usize) -> Option<LinkEntry> {
        if index >= self.entries.len() {
            return None;
        }

        let removed = self.entries.remove(index);
        if self.selected.as_deref() == Some(removed.text.as_str())
            && !self.entries.iter().any(|e| e.text == removed.text)
        {
            self.selected = None;
        }
        Some(removed)
    }

    /// Mark the entry at `index` as the one to display. Entries are untouched.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let entry = self.entries.get(index)?;
        self.selected = Some(entry.text.clone());
        self.selected.as_deref()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        match (self.entries.get(index), self.selected.as_deref()) {
            (Some(entry), Some(sel)) => entry.text == sel,
            _ => false,
        }
    }
}

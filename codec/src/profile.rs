//! Ordered, observable entry list.

use std::fmt;

use crate::entry::Entry;
use crate::error::{CodecError, CodecResult};
use crate::known::KnownSetting;
use crate::types::SettingId;

/// A mutation applied to a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileChange {
    /// An entry now lives at `index`.
    Inserted { index: usize },
    /// The entry previously at `index` is gone.
    Removed { index: usize },
    /// The entry at `from` now lives at `to`.
    Moved { from: usize, to: usize },
    /// The entry at `index` was modified in place.
    Updated { index: usize },
    /// The whole list was replaced.
    Reset,
}

/// Handle returned by [`Profile::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&ProfileChange) + Send>;

/// The entries of one profile file, in file order.
///
/// Order is significant and preserved on save. All mutation goes through
/// methods that notify registered observers after the change is applied.
#[derive(Default)]
pub struct Profile {
    entries: Vec<Entry>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl Profile {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a profile holding `entries`, with no observers.
    #[must_use]
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Takes the entries out, leaving the profile empty.
    #[must_use]
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }

    /// Registers a callback run after every mutation.
    pub fn subscribe<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&ProfileChange) + Send + 'static,
    {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes a callback. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer, _)| *observer != id);
        self.observers.len() != before
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
        self.notify(ProfileChange::Inserted {
            index: self.entries.len() - 1,
        });
    }

    /// Inserts at `index`; `index == len` appends.
    pub fn insert(&mut self, index: usize, entry: Entry) -> CodecResult<()> {
        if index > self.entries.len() {
            return Err(self.out_of_range(index));
        }
        self.entries.insert(index, entry);
        self.notify(ProfileChange::Inserted { index });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> CodecResult<Entry> {
        if index >= self.entries.len() {
            return Err(self.out_of_range(index));
        }
        let entry = self.entries.remove(index);
        self.notify(ProfileChange::Removed { index });
        Ok(entry)
    }

    /// Moves the entry at `from` so that it ends up at index `to`.
    pub fn move_entry(&mut self, from: usize, to: usize) -> CodecResult<()> {
        let len = self.entries.len();
        if from >= len {
            return Err(self.out_of_range(from));
        }
        if to >= len {
            return Err(self.out_of_range(to));
        }
        if from == to {
            return Ok(());
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        self.notify(ProfileChange::Moved { from, to });
        Ok(())
    }

    /// Moves a selection of entries to a drop position.
    ///
    /// `insert_at` is an index into the list before the move and may equal
    /// `len`. Selected entries keep their relative order and land
    /// contiguously. Duplicate indices are ignored. Returns the final index
    /// range of the moved block.
    pub fn move_entries(
        &mut self,
        indices: &[usize],
        insert_at: usize,
    ) -> CodecResult<std::ops::Range<usize>> {
        let len = self.entries.len();
        if insert_at > len {
            return Err(self.out_of_range(insert_at));
        }
        let mut selected = indices.to_vec();
        selected.sort_unstable();
        selected.dedup();
        if let Some(&bad) = selected.iter().find(|&&index| index >= len) {
            return Err(self.out_of_range(bad));
        }

        // Positions shift as entries move; track each original index.
        let mut order: Vec<usize> = (0..len).collect();
        let mut target = insert_at;
        for &original in &selected {
            let Some(current) = order.iter().position(|&o| o == original) else {
                continue;
            };
            if target > current {
                target -= 1;
            }
            if current != target {
                let entry = self.entries.remove(current);
                self.entries.insert(target, entry);
                let slot = order.remove(current);
                order.insert(target, slot);
                self.notify(ProfileChange::Moved {
                    from: current,
                    to: target,
                });
            }
            target += 1;
        }

        Ok(target - selected.len()..target)
    }

    /// Applies `f` to the entry at `index` and notifies observers.
    pub fn update<R>(
        &mut self,
        index: usize,
        f: impl FnOnce(&mut Entry) -> CodecResult<R>,
    ) -> CodecResult<R> {
        let len = self.entries.len();
        let entry = self
            .entries
            .get_mut(index)
            .ok_or(CodecError::IndexOutOfRange { index, len })?;
        let result = f(entry)?;
        self.notify(ProfileChange::Updated { index });
        Ok(result)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.notify(ProfileChange::Reset);
    }

    /// Replaces the whole list with a single [`ProfileChange::Reset`].
    pub fn replace_entries(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.notify(ProfileChange::Reset);
    }

    /// Index of the first entry with `id`.
    #[must_use]
    pub fn position(&self, id: SettingId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// First entry with `id`.
    #[must_use]
    pub fn find(&self, id: SettingId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Index of the first entry matching both id and type of `setting`.
    #[must_use]
    pub fn position_known(&self, setting: KnownSetting) -> Option<usize> {
        self.entries.iter().position(|entry| setting.matches(entry))
    }

    #[must_use]
    pub fn find_known(&self, setting: KnownSetting) -> Option<&Entry> {
        self.entries.iter().find(|entry| setting.matches(entry))
    }

    fn notify(&mut self, change: ProfileChange) {
        for (_, observer) in &mut self.observers {
            observer(&change);
        }
    }

    fn out_of_range(&self, index: usize) -> CodecError {
        CodecError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        }
    }
}

impl Clone for Profile {
    /// Clones the entries; observers stay with the original.
    fn clone(&self) -> Self {
        Self::from_entries(self.entries.clone())
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl fmt::Debug for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("entries", &self.entries)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a Profile {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl From<Vec<Entry>> for Profile {
    fn from(entries: Vec<Entry>) -> Self {
        Self::from_entries(entries)
    }
}

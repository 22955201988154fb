//! Active symbol selection for every key under the global modifier mask

use crate::layout::{KeyDefinition, KeyId, SymbolVariant};

use super::types::ModifierMask;

/// Which symbol variant of each key is currently visible and actionable.
///
/// Recomputed over the whole key set on every mask change: which keys have a
/// variant for a given combination is key-specific.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolVisibility {
    mask: ModifierMask,
    /// Per key, index into its symbol list
    active: Vec<Option<usize>>,
}

impl SymbolVisibility {
    /// Compute visibility for `keys` under `mask`
    pub fn new(keys: &[KeyDefinition], mask: ModifierMask) -> Self {
        let mut visibility = Self::default();
        visibility.recompute(keys, mask);
        visibility
    }

    /// Mask the current visibility was computed for
    pub fn mask(&self) -> ModifierMask {
        self.mask
    }

    /// Recompute if `mask` differs from the last one. Returns whether a
    /// recomputation happened.
    pub fn refresh(&mut self, keys: &[KeyDefinition], mask: ModifierMask) -> bool {
        if mask == self.mask && self.active.len() == keys.len() {
            return false;
        }
        self.recompute(keys, mask);
        true
    }

    fn recompute(&mut self, keys: &[KeyDefinition], mask: ModifierMask) {
        self.mask = mask;
        self.active = keys.iter().map(|k| k.variant_for(mask)).collect();
        let blank = self.active.iter().filter(|a| a.is_none()).count();
        tracing::debug!(%mask, blank, "symbol visibility recomputed");
    }

    /// Index of the active variant of `key`; `None` when the key shows nothing
    pub fn active_index(&self, key: KeyId) -> Option<usize> {
        self.active.get(key.0).copied().flatten()
    }

    /// Active variant of `key`
    pub fn active_symbol<'a>(&self, keys: &'a [KeyDefinition], key: KeyId) -> Option<&'a SymbolVariant> {
        let index = self.active_index(key)?;
        keys.get(key.0)?.symbols.get(index)
    }
}

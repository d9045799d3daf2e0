//! Session favorites
//!
//! One instance lives in the `App` for the whole session and is handed to every
//! card renderer by reference. Nothing is persisted.

use std::collections::HashSet;

use crate::constants::messages::{ADD_FAVOURITE, FAVOURITED};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Favorites {
    ids: HashSet<u64>,
}

impl Favorites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `ids` already marked.
    pub fn seeded(ids: impl IntoIterator<Item = u64>) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Flip membership of `id`. Returns true if `id` is a favorite afterwards.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.ids.remove(&id) {
            log::debug!("[favorites] removed {id}");
            false
        } else {
            self.ids.insert(id);
            log::debug!("[favorites] added {id}");
            true
        }
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Card label for `id`.
    pub fn label(&self, id: u64) -> &'static str {
        if self.is_favorite(id) {
            FAVOURITED
        } else {
            ADD_FAVOURITE
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in ascending order (set order is unspecified).
    pub fn sorted_ids(&self) -> Vec<u64> {
        let mut ids: Vec<u64> = self.ids.iter().copied().collect();
        ids.sort_unstable();
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn toggle_on_empty_set_adds_id() {
        let mut favs = Favorites::new();
        assert!(favs.toggle(7));
        assert!(favs.is_favorite(7));
        assert_eq!(favs.sorted_ids(), vec![7]);
    }

    #[test]
    fn second_toggle_removes_id() {
        let mut favs = Favorites::seeded([3, 7]);
        assert!(!favs.toggle(7));
        assert!(!favs.is_favorite(7));
        assert_eq!(favs.sorted_ids(), vec![3]);
    }

    #[test]
    fn labels_follow_membership() {
        let mut favs = Favorites::new();
        assert_eq!(favs.label(25), "Add to Favourites");
        favs.toggle(25);
        assert_eq!(favs.label(25), "Favourited");
    }

    proptest! {
        #[test]
        fn prop_double_toggle_is_identity(seed in proptest::collection::hash_set(0u64..50, 0..20), id in 0u64..60) {
            let mut favs = Favorites::seeded(seed.clone());
            let before = favs.clone();
            favs.toggle(id);
            favs.toggle(id);
            prop_assert_eq!(favs, before);
        }

        #[test]
        fn prop_toggle_flips_membership(seed in proptest::collection::hash_set(0u64..50, 0..20), id in 0u64..60) {
            let mut favs = Favorites::seeded(seed);
            let was = favs.is_favorite(id);
            let now = favs.toggle(id);
            prop_assert_eq!(now, !was);
            prop_assert_eq!(favs.is_favorite(id), now);
        }
    }
}

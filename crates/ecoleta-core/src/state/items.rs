//! Item Selection
//!
//! Ordered set of selected item ids.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSelection {
    ids: Vec<u32>,
}

impl ItemSelection {
    /// Remove `id` if selected (keeping the order of the rest), else append it
    pub fn toggle(&mut self, id: u32) {
        if self.contains(id) {
            self.ids.retain(|selected| *selected != id);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

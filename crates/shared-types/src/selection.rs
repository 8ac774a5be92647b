use crate::fabric::{Fabric, FabricKey};

/// Fabrics picked for an RFQ or mockup, in the order they were picked.
///
/// Membership is by [`FabricKey`]; a key appears at most once.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionSet {
    items: Vec<Fabric>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &FabricKey) -> bool {
        self.position(key).is_some()
    }

    pub fn is_selected(&self, fabric: &Fabric) -> bool {
        self.contains(&fabric.key())
    }

    /// Remove the fabric if present, else append it.
    /// Returns whether the fabric is selected afterwards.
    pub fn toggle(&mut self, fabric: Fabric) -> bool {
        match self.position(&fabric.key()) {
            Some(idx) => {
                self.items.remove(idx);
                false
            }
            None => {
                self.items.push(fabric);
                true
            }
        }
    }

    /// Remove by key. Returns the removed fabric, if it was selected.
    pub fn remove(&mut self, key: &FabricKey) -> Option<Fabric> {
        self.position(key).map(|idx| self.items.remove(idx))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Fabric> {
        self.items.iter()
    }

    pub fn keys(&self) -> Vec<FabricKey> {
        self.items.iter().map(Fabric::key).collect()
    }

    fn position(&self, key: &FabricKey) -> Option<usize> {
        self.items.iter().position(|f| &f.key() == key)
    }
}

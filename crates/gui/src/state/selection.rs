use shared::ObjectId;

/// Object selection state (at most one object)
#[derive(Default, Debug, Clone)]
pub struct SelectionState {
    selected: Option<ObjectId>,
    /// Version counter for selection changes (for cache invalidation)
    version: u64,
}

impl SelectionState {
    /// Selected object, if any
    pub fn primary(&self) -> Option<&ObjectId> {
        self.selected.as_ref()
    }

    /// Check if an object is selected
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Select an object (replaces previous selection)
    pub fn select(&mut self, id: ObjectId) {
        if self.selected.as_ref() != Some(&id) {
            self.selected = Some(id);
            self.version += 1;
        }
    }

    /// Clear selection
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            self.version += 1;
        }
    }

    /// Clear selection, returning the previously selected ID
    pub fn take(&mut self) -> Option<ObjectId> {
        let id = self.selected.take();
        if id.is_some() {
            self.version += 1;
        }
        id
    }

    /// Number of selected objects (0 or 1)
    pub fn count(&self) -> usize {
        usize::from(self.selected.is_some())
    }

    pub fn version(&self) -> u64 {
        self.version
    }
}

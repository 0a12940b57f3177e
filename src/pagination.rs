/// State of one pagination toggle as the controller wants it displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggle {
    pub on: bool,
    pub interactable: bool,
}

/// One toggle per panel. The controller keeps the toggle of the target panel
/// on and non-interactable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    toggles: Vec<Toggle>,
    /// Whether switching a toggle on navigates to its panel.
    pub navigation: bool,
}

impl Pagination {
    pub fn new(count: usize) -> Self {
        Self {
            toggles: vec![Toggle::default(); count],
            navigation: true,
        }
    }

    pub fn len(&self) -> usize {
        self.toggles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toggles.is_empty()
    }

    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    pub fn get(&self, index: usize) -> Option<Toggle> {
        self.toggles.get(index).copied()
    }

    /// Adds a toggle. Out-of-range indices append.
    pub fn insert(&mut self, index: usize) {
        let index = index.min(self.toggles.len());
        self.toggles.insert(index, Toggle::default());
    }

    pub fn remove(&mut self, index: usize) -> Option<Toggle> {
        (index < self.toggles.len()).then(|| self.toggles.remove(index))
    }

    pub fn select(&mut self, target: usize) {
        for (i, toggle) in self.toggles.iter_mut().enumerate() {
            toggle.on = i == target;
            toggle.interactable = i != target;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_marks_only_target() {
        let mut pagination = Pagination::new(3);
        pagination.select(1);
        assert_eq!(
            pagination.toggles(),
            &[
                Toggle {
                    on: false,
                    interactable: true
                },
                Toggle {
                    on: true,
                    interactable: false
                },
                Toggle {
                    on: false,
                    interactable: true
                },
            ]
        );
    }

    #[test]
    fn test_insert_and_remove() {
        let mut pagination = Pagination::new(1);
        pagination.insert(9);
        pagination.insert(0);
        assert_eq!(pagination.len(), 3);
        assert!(pagination.remove(3).is_none());
        assert!(pagination.remove(0).is_some());
        assert_eq!(pagination.len(), 2);
    }
}

//! FAQ accordion: at most one item open at a time.

#[cfg(test)]
#[path = "accordion_test.rs"]
mod accordion_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    /// All `len` items start closed.
    pub fn new(len: usize) -> Self {
        Self { open: vec![false; len] }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// The currently open item, if any.
    pub fn open_index(&self) -> Option<usize> {
        self.open.iter().position(|open| *open)
    }

    /// Flip item `index` and close every other item.
    ///
    /// Returns `false` and changes nothing for an unknown index.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(&was_open) = self.open.get(index) else {
            return false;
        };
        for (i, open) in self.open.iter_mut().enumerate() {
            *open = i == index && !was_open;
        }
        true
    }

    /// Open/closed flag per item, in page order.
    pub fn states(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        self.open.iter().copied().enumerate()
    }
}

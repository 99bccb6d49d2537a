/// A 1-based page of fixed size over an already filtered result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_index: u32,
    pub page_size: u32,
}

impl PageWindow {
    pub fn new(page_index: u32, page_size: u32) -> Self {
        Self {
            page_index,
            page_size,
        }
    }

    /// Number of leading items to skip. Index 0 is treated like index 1.
    pub fn offset(&self) -> usize {
        (self.page_index.saturating_sub(1) as usize).saturating_mul(self.page_size as usize)
    }

    pub fn apply<T>(&self, items: Vec<T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.page_size as usize)
            .collect()
    }
}

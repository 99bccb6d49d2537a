use crate::domain::page::entity::Page;

/// Filter applied when listing pages. A blank key selects every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSearch {
    key: Option<String>,
}

impl PageSearch {
    pub fn new(key: Option<&str>) -> Self {
        let key = key.filter(|k| !k.is_empty()).map(str::to_owned);
        Self { key }
    }

    pub fn all() -> Self {
        Self::default()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn is_satisfied_by(&self, page: &Page) -> bool {
        match &self.key {
            Some(key) => page.matches_key(key),
            None => true,
        }
    }
}

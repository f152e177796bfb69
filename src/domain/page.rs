use crate::domain::sort::Sort;
use serde::{Serialize, Serializer};

/// A normalised page request: `page >= 0`, `size >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
    size: i64,
    pub sort: Sort,
}

impl PageRequest {
    /// Out-of-range values are clamped, never rejected.
    pub fn new(page: i64, size: i64, sort: Sort) -> Self {
        PageRequest {
            page: page.max(0),
            size: size.max(1),
            sort,
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }
}

/// One slice of an ordered result plus the total it was cut from.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_elements: i64, request: &PageRequest) -> Self {
        Page {
            items,
            total_elements,
            page: request.page(),
            size: request.size(),
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            page: self.page,
            size: self.size,
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 {
            return 0;
        }
        // Round up without adding to total_elements; size may be i64::MAX.
        self.total_elements / self.size + i64::from(self.total_elements % self.size != 0)
    }

    pub fn is_first(&self) -> bool {
        self.page == 0
    }

    pub fn is_last(&self) -> bool {
        self.page.saturating_add(1) >= self.total_pages()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a, T> {
    content: &'a [T],
    total_elements: i64,
    total_pages: i64,
    number: i64,
    size: i64,
    number_of_elements: usize,
    first: bool,
    last: bool,
    empty: bool,
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Envelope {
            content: &self.items,
            total_elements: self.total_elements,
            total_pages: self.total_pages(),
            number: self.page,
            size: self.size,
            number_of_elements: self.items.len(),
            first: self.is_first(),
            last: self.is_last(),
            empty: self.items.is_empty(),
        }
        .serialize(serializer)
    }
}

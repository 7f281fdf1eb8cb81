//! Fixed-size page windows over an ordered sequence.
//!
//! Pages are 1-indexed. [`paginate`] is a pure slice operation and never
//! clamps; callers that track a current page clamp it with [`clamp_page`]
//! (or a [`PageCursor`]) before slicing.

/// Return page `page` of `items` using `page_size` items per page.
///
/// The window is `[(page - 1) * page_size, page * page_size)` intersected with
/// the sequence. Page `0`, a zero page size, or a page past the end yield an
/// empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 || page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items (`ceil(len / page_size)`).
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Clamp a requested page into `[1, max(1, page_count)]`.
pub fn clamp_page(page: usize, len: usize, page_size: usize) -> usize {
    page.clamp(1, page_count(len, page_size).max(1))
}

/// Current page of a paged listing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageCursor {
    page: usize,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self { page: 1 }
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> usize {
        self.page
    }

    /// Back to the first page (used whenever the underlying selection changes).
    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move to `page`, clamped against a listing of `len` items.
    pub fn go_to(&mut self, page: usize, len: usize, page_size: usize) -> usize {
        self.page = clamp_page(page, len, page_size);
        self.page
    }
}

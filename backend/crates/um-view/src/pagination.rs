use std::ops::Range;

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// 1-based page cursor over a sequence whose length is passed to each call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    per_page: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: PAGE_SIZE,
        }
    }
}

impl Pagination {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self, len: usize) -> usize {
        len.div_ceil(self.per_page)
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Move to `page`, clamped to `[1, page_count]`. No-op on an empty sequence.
    pub fn go_to(&mut self, page: usize, len: usize) {
        let count = self.page_count(len);
        if count == 0 {
            return;
        }
        self.page = page.clamp(1, count);
    }

    pub fn next(&mut self, len: usize) {
        self.go_to(self.page.saturating_add(1), len);
    }

    pub fn prev(&mut self, len: usize) {
        self.go_to(self.page.saturating_sub(1), len);
    }

    /// Index range of the current page within a sequence of `len` items
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.per_page).min(len);
        let end = start.saturating_add(self.per_page).min(len);
        start..end
    }

    pub fn page_label(&self, len: usize) -> String {
        format!("Page {} of {}", self.page, self.page_count(len).max(1))
    }

    pub fn showing_label(&self, len: usize) -> String {
        if len == 0 {
            return "No users found".to_string();
        }

        let range = self.range(len);
        format!("Showing {}-{} of {} users", range.start + 1, range.end, len)
    }
}

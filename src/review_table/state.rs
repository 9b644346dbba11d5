use crate::models::review::{ReviewColumn, ReviewRow};
use crate::utils::paginate::{page_count, paginate};
use crate::utils::sort::{stable_sort, Order};

pub const DEFAULT_ROWS_PER_PAGE: usize = 5;

/// Upvote the caller should send after a row flipped to upvoted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpvoteRequest {
    pub review_id: String,
}

/// Everything the review table shows, owned by the view.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewTableState {
    /// Working set after search filtering.
    pub rows: Vec<ReviewRow>,
    /// Unfiltered rows from the last load; search always starts from here.
    pub original_rows: Vec<ReviewRow>,
    pub order: Order,
    pub order_by: ReviewColumn,
    pub page: usize,
    pub rows_per_page: usize,
    pub searched: String,
}

impl Default for ReviewTableState {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            original_rows: Vec::new(),
            order: Order::Desc,
            order_by: ReviewColumn::Rating,
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            searched: String::new(),
        }
    }
}

impl ReviewTableState {
    /// Installs freshly loaded rows, keeping any search already typed.
    pub fn with_rows(self, rows: Vec<ReviewRow>) -> Self {
        let searched = self.searched.clone();
        Self {
            original_rows: rows,
            ..self
        }
        .apply_search(&searched)
    }

    /// Case-insensitive substring filter on the review text.
    pub fn apply_search(self, term: &str) -> Self {
        let needle = term.to_lowercase();
        let rows = self
            .original_rows
            .iter()
            .filter(|row| row.review_text.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        Self {
            rows,
            searched: term.to_string(),
            page: 0,
            ..self
        }
    }

    /// Header click: the active column flips from ascending to descending;
    /// anything else sorts ascending by the clicked column.
    pub fn apply_sort(self, column: ReviewColumn) -> Self {
        if !column.sortable() {
            return self;
        }
        let is_asc = self.order_by == column && self.order == Order::Asc;
        Self {
            order: if is_asc { Order::Desc } else { Order::Asc },
            order_by: column,
            ..self
        }
    }

    pub fn apply_page(self, page: usize) -> Self {
        Self { page, ..self }
    }

    pub fn apply_rows_per_page(self, rows_per_page: usize) -> Self {
        Self {
            rows_per_page,
            page: 0,
            ..self
        }
    }

    /// Marks the row with `key` as upvoted. Returns the request to send only
    /// the first time; later calls, or an unknown key, change nothing.
    pub fn apply_upvote(mut self, key: &str) -> (Self, Option<UpvoteRequest>) {
        let upvotable = self
            .original_rows
            .iter()
            .any(|row| row.key == key && !row.has_upvoted);
        if !upvotable {
            return (self, None);
        }

        for row in self
            .rows
            .iter_mut()
            .chain(self.original_rows.iter_mut())
            .filter(|row| row.key == key)
        {
            row.has_upvoted = true;
        }
        let request = UpvoteRequest {
            review_id: key.to_string(),
        };
        (self, Some(request))
    }

    pub fn sorted_rows(&self) -> Vec<&ReviewRow> {
        stable_sort(&self.rows, self.order, self.order_by)
    }

    /// The current page of the sorted working set.
    pub fn visible_rows(&self) -> Vec<&ReviewRow> {
        let sorted = self.sorted_rows();
        paginate(&sorted, self.page, self.rows_per_page).to_vec()
    }

    pub fn page_count(&self) -> usize {
        page_count(self.rows.len(), self.rows_per_page)
    }

    /// Pagination caption such as `"6-10 of 12"`, or `"0-0 of 12"` once the
    /// page holds no rows.
    pub fn range_label(&self) -> String {
        let count = self.rows.len();
        let from = self.page.saturating_mul(self.rows_per_page);
        let to = from.saturating_add(self.rows_per_page).min(count);
        if from >= to {
            return format!("0-0 of {}", count);
        }
        format!("{}-{} of {}", from + 1, to, count)
    }

    pub fn is_sorted_by(&self, column: ReviewColumn) -> bool {
        self.order_by == column
    }
}

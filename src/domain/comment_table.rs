// Comment table engine - filter, sort and page-slice the fetched comments
use super::comment::Comment;
use super::view_state::{Sort, SortColumn, SortDirection, ViewState};
use std::cmp::Reverse;

/// Rows for the current page plus the counts the pagination controls need
#[derive(Debug, Clone, PartialEq)]
pub struct CommentTable<'a> {
    pub visible: Vec<&'a Comment>,
    /// Number of comments matching the search term
    pub total_count: usize,
    pub total_pages: usize,
}

impl CommentTable<'_> {
    /// Pagination controls are hidden unless there is more than one page
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

/// Derive the visible page from the full comment list and the view state.
pub fn compute<'a>(comments: &'a [Comment], state: &ViewState) -> CommentTable<'a> {
    let mut rows = filter_comments(comments, &state.search_term);

    if let Some(sort) = state.sort {
        sort_comments(&mut rows, sort);
    }

    let total_count = rows.len();
    let total_pages = total_pages(total_count, state.page_size);
    let visible = paginate(&rows, state.current_page, state.page_size).to_vec();

    CommentTable {
        visible,
        total_count,
        total_pages,
    }
}

/// Keep comments whose name, email or post id contains `term`.
/// Name and email are compared case-insensitively.
pub fn filter_comments<'a>(comments: &'a [Comment], term: &str) -> Vec<&'a Comment> {
    if term.is_empty() {
        return comments.iter().collect();
    }

    let term = term.to_lowercase();
    comments
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&term)
                || c.email.to_lowercase().contains(&term)
                || c.post_id.to_string().contains(&term)
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortKey {
    Number(i64),
    Text(String),
}

fn sort_key(comment: &Comment, column: SortColumn) -> SortKey {
    match column {
        SortColumn::PostId => SortKey::Number(comment.post_id),
        SortColumn::Name => SortKey::Text(comment.name.to_lowercase()),
        SortColumn::Email => SortKey::Text(comment.email.to_lowercase()),
    }
}

/// Stable sort: rows with equal keys keep their fetched order in both directions.
pub fn sort_comments(rows: &mut [&Comment], sort: Sort) {
    match sort.direction {
        SortDirection::Asc => rows.sort_by_cached_key(|c| sort_key(c, sort.column)),
        SortDirection::Desc => rows.sort_by_cached_key(|c| Reverse(sort_key(c, sort.column))),
    }
}

/// Half-open slice for a 1-based page. Out-of-range pages yield an empty slice.
pub fn paginate<T>(rows: &[T], current_page: usize, page_size: usize) -> &[T] {
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(rows.len());
    let end = start.saturating_add(page_size).min(rows.len());
    &rows[start..end]
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

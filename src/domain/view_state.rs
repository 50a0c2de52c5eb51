// Persisted dashboard view state and the header-click sort cycle
use super::errors::InteractionError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortColumn {
    #[serde(rename = "postId")]
    PostId,
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "email")]
    Email,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] = [SortColumn::PostId, SortColumn::Name, SortColumn::Email];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::PostId => "postId",
            SortColumn::Name => "name",
            SortColumn::Email => "email",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortColumn::PostId => "Post ID",
            SortColumn::Name => "Name",
            SortColumn::Email => "Email",
        }
    }
}

impl FromStr for SortColumn {
    type Err = InteractionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortColumn::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| InteractionError::UnknownColumn(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Column and direction, present together or not at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Sort {
    pub fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Rebuild from the two independently stored halves. A half-set pair is
    /// treated as unsorted.
    pub fn from_parts(column: Option<SortColumn>, direction: Option<SortDirection>) -> Option<Self> {
        match (column, direction) {
            (Some(column), Some(direction)) => Some(Self::new(column, direction)),
            _ => None,
        }
    }

    /// Next state after clicking `clicked`: none -> asc -> desc -> none.
    pub fn cycle(current: Option<Sort>, clicked: SortColumn) -> Option<Sort> {
        match current {
            Some(Sort {
                column,
                direction: SortDirection::Asc,
            }) if column == clicked => Some(Sort::new(clicked, SortDirection::Desc)),
            Some(Sort {
                column,
                direction: SortDirection::Desc,
            }) if column == clicked => None,
            _ => Some(Sort::new(clicked, SortDirection::Asc)),
        }
    }
}

/// Per-column indicator shown on a header button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortState {
    None,
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search_term: String,
    pub current_page: usize,
    pub page_size: usize,
    pub sort: Option<Sort>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            current_page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            sort: None,
        }
    }
}

impl ViewState {
    pub fn sort_state(&self, column: SortColumn) -> SortState {
        match self.sort {
            Some(sort) if sort.column == column => match sort.direction {
                SortDirection::Asc => SortState::Asc,
                SortDirection::Desc => SortState::Desc,
            },
            _ => SortState::None,
        }
    }

    pub fn search(&mut self, term: &str) {
        self.search_term = term.to_string();
        self.current_page = DEFAULT_PAGE;
    }

    pub fn click_sort(&mut self, column: SortColumn) {
        self.sort = Sort::cycle(self.sort, column);
        self.current_page = DEFAULT_PAGE;
    }

    pub fn go_to_page(&mut self, page: usize) -> Result<(), InteractionError> {
        if page < 1 {
            return Err(InteractionError::InvalidPage);
        }
        self.current_page = page;
        Ok(())
    }

    /// Changing the page size keeps search and sort but returns to page 1
    pub fn resize_pages(&mut self, page_size: usize) -> Result<(), InteractionError> {
        if page_size == 0 {
            return Err(InteractionError::InvalidPageSize);
        }
        self.page_size = page_size;
        self.current_page = DEFAULT_PAGE;
        Ok(())
    }
}

// Pagination links for the dashboard table
use serde::Serialize;

/// Pages always listed at each end of the range
const EDGE_PAGES: usize = 2;
/// Pages listed before and after the current one
const BEFORE_CURRENT: usize = 2;
const AFTER_CURRENT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageLink {
    Previous { page: usize },
    Page { page: usize, current: bool },
    Gap,
    Next { page: usize },
}

fn is_listed(page: usize, current_page: usize, total_pages: usize) -> bool {
    page <= EDGE_PAGES
        || page + EDGE_PAGES > total_pages
        || (page + BEFORE_CURRENT >= current_page && page <= current_page + AFTER_CURRENT)
}

/// Previous, page numbers (a `Gap` wherever numbers are skipped), next
pub fn page_links(total_pages: usize, current_page: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    if total_pages == 0 {
        return links;
    }

    if current_page > 1 {
        links.push(PageLink::Previous {
            page: current_page - 1,
        });
    }

    let mut last_listed = 0;
    for page in (1..=total_pages).filter(|&p| is_listed(p, current_page, total_pages)) {
        if page > last_listed + 1 {
            links.push(PageLink::Gap);
        }
        links.push(PageLink::Page {
            page,
            current: page == current_page,
        });
        last_listed = page;
    }

    if current_page < total_pages {
        links.push(PageLink::Next {
            page: current_page + 1,
        });
    }

    links
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginationControls {
    pub current_page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    pub links: Vec<PageLink>,
    pub page_size_options: Vec<usize>,
}

impl PaginationControls {
    pub fn new(
        current_page: usize,
        total_pages: usize,
        page_size: usize,
        page_size_options: &[usize],
    ) -> Self {
        let mut options = page_size_options.to_vec();
        if !options.contains(&page_size) {
            options.push(page_size);
            options.sort_unstable();
        }

        Self {
            current_page,
            total_pages,
            page_size,
            links: page_links(total_pages, current_page),
            page_size_options: options,
        }
    }
}

// HTML rendering for the dashboard and profile pages
use crate::application::dashboard_service::DashboardPage;
use crate::application::page::PageState;
use crate::domain::comment::Comment;
use crate::domain::pagination::PaginationControls;
use crate::domain::user::User;
use crate::domain::view_state::{SortColumn, SortState};
use serde::Serialize;
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 8] = [
    ("shell_open.html", include_str!("../../templates/shell_open.html")),
    ("shell_close.html", include_str!("../../templates/shell_close.html")),
    ("spinner.html", include_str!("../../templates/spinner.html")),
    ("loaded.html", include_str!("../../templates/loaded.html")),
    ("error.html", include_str!("../../templates/error.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("profile.html", include_str!("../../templates/profile.html")),
    ("not_found.html", "<div class=\"error\"><p role=\"alert\">{{ message }}</p></div>"),
];

pub const DASHBOARD_TITLE: &str = "Comments Dashboard";
pub const PROFILE_TITLE: &str = "Profile";

#[derive(Serialize)]
struct ColumnHeader {
    key: &'static str,
    label: &'static str,
    state: SortState,
}

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;
        Ok(Self { tera })
    }

    fn render(&self, template: &str, context: &Context) -> String {
        self.tera.render(template, context).unwrap_or_else(|e| {
            tracing::error!("Failed to render {}: {}", template, e);
            "<p>Failed to render page</p>".to_string()
        })
    }

    /// Document head and the opening `<body>`
    pub fn shell_open(&self, title: &str) -> String {
        let mut context = Context::new();
        context.insert("title", title);
        self.render("shell_open.html", &context)
    }

    pub fn shell_close(&self) -> String {
        self.render("shell_close.html", &Context::new())
    }

    /// Placeholder shown while the mount's fetch is outstanding
    pub fn spinner(&self) -> String {
        self.render("spinner.html", &Context::new())
    }

    /// Hides the spinner once the rest of the page has streamed in
    pub fn loaded(&self) -> String {
        self.render("loaded.html", &Context::new())
    }

    pub fn error(&self, message: &str) -> String {
        let mut context = Context::new();
        context.insert("message", message);
        self.render("error.html", &context)
    }

    pub fn dashboard(&self, page: &DashboardPage, page_size_options: &[usize]) -> String {
        if page.state().is_loading() {
            return self.spinner();
        }
        if let PageState::Error(message) = page.state() {
            return self.error(message);
        }
        let Some(table) = page.table() else {
            return self.spinner();
        };

        let state = &page.view_state;
        let columns: Vec<ColumnHeader> = SortColumn::ALL
            .into_iter()
            .map(|column| ColumnHeader {
                key: column.as_str(),
                label: column.label(),
                state: state.sort_state(column),
            })
            .collect();

        let pagination = table.has_pagination().then(|| {
            PaginationControls::new(
                state.current_page,
                table.total_pages,
                state.page_size,
                page_size_options,
            )
        });

        let rows: Vec<&Comment> = table.visible;

        let mut context = Context::new();
        context.insert("search_term", &state.search_term);
        context.insert("filtered_count", &table.total_count);
        context.insert("total_count", &page.total_comments());
        context.insert("columns", &columns);
        context.insert("rows", &rows);
        context.insert("pagination", &pagination);
        self.render("dashboard.html", &context)
    }

    pub fn profile(&self, state: &PageState<User>) -> String {
        match state {
            PageState::Loading => self.spinner(),
            PageState::Error(message) => self.error(message),
            PageState::Ready(user) => {
                let mut context = Context::new();
                context.insert("user", user);
                context.insert("initial", &user.initial());
                self.render("profile.html", &context)
            }
        }
    }

    pub fn not_found(&self) -> String {
        let mut context = Context::new();
        context.insert("message", "Page not found");
        self.render("not_found.html", &context)
    }

    /// Whole document for a page that has already settled
    pub fn document(&self, title: &str, content: &str) -> String {
        format!("{}{}{}", self.shell_open(title), content, self.shell_close())
    }
}

// Application state for HTTP handlers
use crate::application::dashboard_service::DashboardService;
use crate::application::profile_service::ProfileService;
use crate::infrastructure::config::UiSettings;
use crate::presentation::views::Views;

pub struct AppState {
    pub dashboard_service: DashboardService,
    pub profile_service: ProfileService,
    pub views: Views,
    pub ui: UiSettings,
}

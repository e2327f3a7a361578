use crate::config::AppConfig;
use crate::services::booking::BookingLinks;

pub struct AppState {
    pub config: AppConfig,
    pub links: BookingLinks,
}

pub mod api;
pub mod handle_response;

pub use api::{ApiClient, DashboardQuery, OrderEntryFields, SocietyQuery};
pub use handle_response::ApiError;

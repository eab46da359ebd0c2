pub mod auth;
pub mod entry;
pub mod location;

pub use auth::{AuthData, PromoterInfo, StatusResponse, VerifyOtpResponse};
pub use entry::{DashboardData, DashboardResponse, Entry, PaginationInfo};
pub use location::{ActivityInfo, ActivityLocation, ActivityLocationsResponse, LocationData};

pub mod app;
pub mod create_entry_screen;
pub mod dashboard_screen;
pub mod header;
pub mod location_screen;
pub mod login_screen;
pub mod otp_screen;
pub mod search_dropdown;
pub mod upload_images_screen;

pub use app::App;
pub use create_entry_screen::CreateEntryScreen;
pub use dashboard_screen::DashboardScreen;
pub use header::AppHeader;
pub use location_screen::LocationScreen;
pub use login_screen::LoginScreen;
pub use otp_screen::OtpScreen;
pub use search_dropdown::{SearchDropdown, SearchFetcher};
pub use upload_images_screen::UploadImagesScreen;

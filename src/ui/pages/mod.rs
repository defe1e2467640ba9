pub mod artists;
pub mod dashboard;
pub mod home;
pub mod onboard;

pub use artists::ArtistsPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
pub use onboard::OnboardPage;

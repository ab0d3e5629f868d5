//! Page components for the application.
//!
//! Each page is a Leptos component rendered by the guarded outlet for the
//! route that resolved to it.

pub mod analysis;
pub mod guide;
pub mod home;
pub mod login;
pub mod not_found;
pub mod poem;
pub mod register;

// Re-export all page components for convenient access
pub use analysis::AnalysisPage;
pub use guide::GuidePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use poem::PoemDetailPage;
pub use register::RegisterPage;

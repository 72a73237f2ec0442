mod chatbot;
mod coming_soon;
mod error;
mod google_callback;
mod home;
pub mod login;
mod signup;

pub use chatbot::ChatbotPage;
pub use coming_soon::ComingSoonPage;
pub use error::ErrorPage;
pub use google_callback::GoogleCallbackPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use signup::SignupPage;

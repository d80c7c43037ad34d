mod email_sender;
mod home;
mod login;
mod register;

pub use email_sender::EmailSenderPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use register::RegisterPage;

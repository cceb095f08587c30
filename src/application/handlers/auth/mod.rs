//! Login and logout.

mod login;
mod logout;

pub use login::{LoginCommand, LoginError, LoginHandler, LoginResult};
pub use logout::LogoutHandler;

mod login;
pub use login::Login;

mod token;
pub use token::GetToken;

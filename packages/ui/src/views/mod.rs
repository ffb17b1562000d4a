mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod login;
pub use login::LoginView;

mod token;
pub use token::TokenView;

pub mod login;
pub mod signup;

pub use login::login;
pub use signup::signup;

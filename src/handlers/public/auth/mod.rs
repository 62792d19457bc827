mod login;
mod register;

pub use login::user_login;
pub use register::user_register;

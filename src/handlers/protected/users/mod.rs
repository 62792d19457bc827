mod status;
mod whoami;

pub use status::status_put;
pub use whoami::user_whoami;

mod save;
mod session;

pub use save::*;
pub use session::*;

pub mod activity;
pub mod error;
pub mod locale;
pub mod time;

pub use activity::*;
pub use error::{Error, Result};
pub use locale::*;
pub use time::*;

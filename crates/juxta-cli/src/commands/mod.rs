//! Command implementations.

pub mod cities;
pub mod compare;
pub mod extract;
pub mod profile;

pub use self::cities::execute_cities;
pub use self::compare::{compare_and_print, execute_compare, resolve_token, run_compare};
pub use self::extract::execute_extract;
pub use self::profile::execute_profile;

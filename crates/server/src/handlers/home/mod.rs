mod common;
mod get_home;
mod get_overview;

pub use common::load_home_view;
pub use get_home::get_home;
pub use get_overview::get_overview;

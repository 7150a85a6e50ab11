pub mod users_page;

pub use users_page::{format_timestamp, UsersPage};

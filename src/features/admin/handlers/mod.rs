pub mod admin_handlers;

pub use admin_handlers::{
    __path_get_overview, __path_list_activity, __path_list_users, get_overview, list_activity,
    list_users,
};

pub mod date;
pub mod leptos_owner;
pub mod paginate;
pub mod panic_hook;
pub mod sort;

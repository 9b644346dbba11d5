pub mod nutrition;
pub mod review;
pub mod user;

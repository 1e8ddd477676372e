pub mod list;
pub mod send;

pub mod login;
pub mod under_construction;

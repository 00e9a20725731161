pub mod repository;
pub mod types;
pub mod validator;

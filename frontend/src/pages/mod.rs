pub mod home;
pub mod leaves;
pub mod login;

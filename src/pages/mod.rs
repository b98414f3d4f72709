pub mod account;
pub mod contact;
pub mod dashboard;
pub mod help;
pub mod landing;
pub mod login;
pub mod plants;
pub mod register;
pub mod settings;

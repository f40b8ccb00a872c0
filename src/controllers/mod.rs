pub mod health;
pub mod home;
pub mod install;
pub mod sites;

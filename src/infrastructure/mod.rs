pub mod config;
pub mod db;
pub mod http;
pub mod repositories;
pub mod static_site;
pub mod webflow;

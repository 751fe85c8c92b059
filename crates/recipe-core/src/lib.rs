pub mod browser;
pub mod config;
pub mod consts;
pub mod detail;
pub mod error;
pub mod filter;
pub mod recipe;
pub mod route;
pub mod scale;
pub mod sidebar;
pub mod store;

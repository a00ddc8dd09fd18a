pub mod api;
pub mod config;
pub mod csrf;
pub mod date_utils;
pub mod logging;
pub mod random;

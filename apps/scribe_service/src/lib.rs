pub mod app_module;
pub mod app_router;
pub mod config;
pub mod health;
pub mod scripting;
pub mod shared;

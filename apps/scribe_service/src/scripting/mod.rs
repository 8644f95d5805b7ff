pub mod scripting_controller;
pub mod scripting_prompts;
pub mod scripting_service;

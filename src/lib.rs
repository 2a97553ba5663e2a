pub mod console;
pub mod controllers;
pub mod error;
pub mod models;

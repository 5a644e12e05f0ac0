#![warn(clippy::all, rust_2018_idioms)]

mod app;
pub mod config;
pub mod editor;
pub mod enums;
pub mod error;
pub mod launcher;
pub mod library;
pub mod listing;
pub mod structs;

pub use app::PandaLauncher;

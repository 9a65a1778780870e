pub mod animation;
pub mod assets;
pub mod audio;
pub mod compute;
pub mod config;
pub mod constants;
pub mod entities;
pub mod error;
pub mod game;
pub mod input;
pub mod logging;
pub mod physics;
pub mod scene;

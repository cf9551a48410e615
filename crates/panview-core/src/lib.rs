pub mod buffer;
pub mod config;
pub mod consts;
pub mod controller;
pub mod drag;
pub mod error;
pub mod format;
pub mod geometry;
pub mod scale;
pub mod surface;
pub mod view;

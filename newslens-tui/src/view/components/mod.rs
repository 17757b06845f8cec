//! View components

pub mod editor;
pub mod results;
pub mod statusbar;

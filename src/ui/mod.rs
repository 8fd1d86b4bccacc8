//! UI components

pub mod results;
pub mod search_bar;
pub mod spinner;
pub mod theme;

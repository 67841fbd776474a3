//! Component builders

pub mod banner;
pub mod icon_button;

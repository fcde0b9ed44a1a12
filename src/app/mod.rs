pub mod navigator;
pub mod pages;

pub use navigator::{App, NavigationContext, Page};

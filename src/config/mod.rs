pub mod layout_config;

pub use layout_config::LayoutConfig;

pub mod config;
pub mod content;
pub mod error;
pub mod feed_renderer;
pub mod logger;
pub mod post;
pub mod view;
mod test_data;
mod text_utils;

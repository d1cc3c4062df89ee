pub mod app;
pub mod image_viewer;
pub mod index_view;
pub mod post_view;
pub mod theme_toggle;
pub mod toc;
pub mod viewer_toolbar;

pub mod browser;
pub mod detail;

pub use browser::render_browser;
pub use detail::render_detail;

mod chart;
mod navbar;

pub use chart::PriceChart;
pub use navbar::Navbar;

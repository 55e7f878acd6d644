//! Portfolio content query handlers.

mod get_portfolio;

pub use get_portfolio::{GetPortfolioHandler, GetPortfolioQuery};

pub mod portfolio;

pub use portfolio::{non_blank, non_blank_opt, PortfolioData, ResumeRef};

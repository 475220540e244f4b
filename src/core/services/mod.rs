pub mod portfolio_service;
pub mod usage_service;

pub use portfolio_service::{
    CompanyParams, PortfolioKpis, PortfolioOverview, PortfolioRow, PortfolioService,
};
pub use usage_service::UsageService;

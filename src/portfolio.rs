//! Portfolio data sources.

use async_trait::async_trait;

use crate::types::{Amount, Portfolio, Position};

/// Where portfolio snapshots come from.
#[async_trait]
pub trait PortfolioSource: Send + Sync {
    async fn fetch(&self, username: &str) -> Portfolio;
}

/// Fixed snapshot returned for every user until the gateway is wired in.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticPortfolio;

#[async_trait]
impl PortfolioSource for StaticPortfolio {
    async fn fetch(&self, _username: &str) -> Portfolio {
        Portfolio {
            positions: vec![
                position("AAPL", 120, 187.42, 141.6),
                position("MSFT", 80, 422.15, -51.2),
                position("DMSO", 800, 1000.00, 1000_i64),
            ],
            cash: Amount::Int(18250),
        }
    }
}

fn position(symbol: &str, quantity: i64, price: f64, pnl: impl Into<Amount>) -> Position {
    Position {
        symbol: symbol.into(),
        quantity,
        price: price.into(),
        pnl: pnl.into(),
    }
}

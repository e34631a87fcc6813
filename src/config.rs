//! Demo settings
//!
//! Defaults: 800 ms per animation step, a pretend 20 gwei gas price and a
//! pretend $2000 ETH rate. Each can be overridden through the environment
//! for faster local runs.

use std::env;

use tracing::debug;

use crate::utils::errors::PanelError;

#[derive(Debug, Clone)]
pub struct Config {
    /// Delay between batch progress steps, in milliseconds.
    pub step_delay_ms: u64,
    /// Pretend gas price used for the displayed cost.
    pub gas_price_gwei: f64,
    /// Pretend ETH/USD rate used for the displayed cost.
    pub eth_price_usd: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            step_delay_ms: 800,
            gas_price_gwei: 20.0,
            eth_price_usd: 2000.0,
        }
    }
}

impl Config {
    /// Load the configuration, applying environment overrides on top of the
    /// defaults.
    pub fn from_env() -> Result<Self, PanelError> {
        let mut config = Config::default();

        if let Ok(delay) = env::var("OHMY_STEP_DELAY_MS") {
            config.step_delay_ms = delay
                .parse()
                .map_err(|e| PanelError::Config(format!("Invalid step delay: {}", e)))?;
        }
        if let Ok(price) = env::var("OHMY_GAS_PRICE_GWEI") {
            config.gas_price_gwei = price
                .parse()
                .map_err(|e| PanelError::Config(format!("Invalid gas price: {}", e)))?;
        }
        if let Ok(price) = env::var("OHMY_ETH_PRICE_USD") {
            config.eth_price_usd = price
                .parse()
                .map_err(|e| PanelError::Config(format!("Invalid ETH price: {}", e)))?;
        }

        debug!(
            "Config loaded: step_delay_ms={} gas_price_gwei={} eth_price_usd={}",
            config.step_delay_ms, config.gas_price_gwei, config.eth_price_usd
        );
        Ok(config)
    }
}

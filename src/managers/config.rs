use crate::logic::FeeTier;
use crate::utils::config_loader::{
    LoadConfigError, SwapConfigLoader, SwapConfigLoaderSync, load_from_file, load_from_file_sync,
};
use crate::utils::constants::UniswapV3Address;
use alloy_primitives::Address;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Deserialize, Debug)]
pub struct UniswapV3ConfigRoot {
    pub uniswap_v3: UniswapV3Deployment,
}

/// Contract addresses of one concentrated-liquidity deployment.
///
/// Several deployments (networks) can coexist; each manager is built from one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UniswapV3Deployment {
    pub network: String,
    pub router_address: Address,
    pub quoter_address: Address,
    #[serde(default)]
    pub default_fee_tier: FeeTier,
}

impl UniswapV3Deployment {
    pub fn mainnet() -> Self {
        Self {
            network: "mainnet".to_string(),
            router_address: UniswapV3Address::MAINNET_ROUTER,
            quoter_address: UniswapV3Address::MAINNET_QUOTER,
            default_fee_tier: FeeTier::default(),
        }
    }

    pub fn with_default_fee_tier(mut self, default_fee_tier: FeeTier) -> Self {
        self.default_fee_tier = default_fee_tier;
        self
    }

    /// Mainnet deployment with overrides from the environment
    pub fn from_env() -> eyre::Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();

        if let Ok(network) = std::env::var("UNISWAP_V3_NETWORK") {
            config.network = network;
        }

        if let Ok(router) = std::env::var("UNISWAP_V3_ROUTER") {
            config.router_address = Address::from_str(&router)
                .map_err(|e| eyre::eyre!("Invalid UNISWAP_V3_ROUTER: {}", e))?;
        }

        if let Ok(quoter) = std::env::var("UNISWAP_V3_QUOTER") {
            config.quoter_address = Address::from_str(&quoter)
                .map_err(|e| eyre::eyre!("Invalid UNISWAP_V3_QUOTER: {}", e))?;
        }

        if let Ok(fee_str) = std::env::var("UNISWAP_V3_DEFAULT_FEE") {
            let fee: u32 = fee_str.parse()
                .map_err(|e| eyre::eyre!("Invalid UNISWAP_V3_DEFAULT_FEE: {}", e))?;
            config.default_fee_tier = FeeTier::try_from(fee)
                .map_err(|e| eyre::eyre!("Invalid UNISWAP_V3_DEFAULT_FEE: {}", e))?;
        }

        Ok(config)
    }
}

impl Default for UniswapV3Deployment {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[async_trait]
impl SwapConfigLoader for UniswapV3Deployment {
    type SectionType = UniswapV3Deployment;

    async fn load_section_from_file(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: UniswapV3ConfigRoot = load_from_file(file_name).await?;
        Ok(root.uniswap_v3)
    }
}

impl SwapConfigLoaderSync for UniswapV3Deployment {
    type SectionType = UniswapV3Deployment;

    fn load_section_from_file_sync(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: UniswapV3ConfigRoot = load_from_file_sync(file_name)?;
        Ok(root.uniswap_v3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::config_loader::load_from_str;
    use std::io::Write;

    const SEPOLIA_SECTION: &str = r#"
        [uniswap_v3]
        network = "sepolia"
        router_address = "0x3bFA4769FB09eefC5a80d6E87c3B9C650f7Ae48E"
        quoter_address = "0xEd1f6473345F45b75F8179591dd5bA1888cf2FB3"
        default_fee_tier = "HIGH"
    "#;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_is_mainnet() {
        let config = UniswapV3Deployment::default();
        assert_eq!(config.network, "mainnet");
        assert_eq!(config.router_address, UniswapV3Address::MAINNET_ROUTER);
        assert_eq!(config.quoter_address, UniswapV3Address::MAINNET_QUOTER);
        assert_eq!(config.default_fee_tier, FeeTier::Medium);
    }

    #[test]
    fn test_parse_section() {
        let raw = r#"
            [uniswap_v3]
            network = "sepolia"
            router_address = "0x3bFA4769FB09eefC5a80d6E87c3B9C650f7Ae48E"
            quoter_address = "0xEd1f6473345F45b75F8179591dd5bA1888cf2FB3"
            default_fee_tier = "LOW"
        "#;
        let root: UniswapV3ConfigRoot = load_from_str(raw).unwrap();
        let config = root.uniswap_v3;
        assert_eq!(config.network, "sepolia");
        assert_eq!(config.default_fee_tier, FeeTier::Low);
        assert_ne!(config.router_address, UniswapV3Address::MAINNET_ROUTER);
    }

    #[test]
    fn test_fee_tier_defaults_when_missing() {
        let raw = r#"
            [uniswap_v3]
            network = "mainnet"
            router_address = "0xE592427A0AEce92De3Edee1F18E0157C05861564"
            quoter_address = "0xb27308f9F90D607463bb33eA1BeBb41C27CE5AB6"
        "#;
        let root: UniswapV3ConfigRoot = load_from_str(raw).unwrap();
        assert_eq!(root.uniswap_v3, UniswapV3Deployment::mainnet());
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let raw = r#"
            [uniswap_v3]
            network = "mainnet"
            router_address = "0xE592427A0AEce92De3Edee1F18E0157C05861564"
            quoter_address = "0xb27308f9F90D607463bb33eA1BeBb41C27CE5AB6"
            factory_address = "0x1F98431c8aD98523631AE4a59f267346ea31F984"
        "#;
        assert!(load_from_str::<UniswapV3ConfigRoot>(raw).is_err());
    }

    #[test]
    fn test_load_section_from_file_sync() {
        let file = config_file(SEPOLIA_SECTION);
        let path = file.path().to_string_lossy().to_string();

        let config = UniswapV3Deployment::load_section_from_file_sync(path).unwrap();
        assert_eq!(config.network, "sepolia");
        assert_eq!(config.default_fee_tier, FeeTier::High);
        assert_eq!(config.quoter_address, Address::from_str("0xEd1f6473345F45b75F8179591dd5bA1888cf2FB3").unwrap());
    }

    #[tokio::test]
    async fn test_load_section_from_file() {
        let file = config_file(SEPOLIA_SECTION);
        let path = file.path().to_string_lossy().to_string();

        let config = UniswapV3Deployment::load_section_from_file(path).await.unwrap();
        assert_eq!(config.network, "sepolia");
        assert_eq!(config.router_address, Address::from_str("0x3bFA4769FB09eefC5a80d6E87c3B9C650f7Ae48E").unwrap());
    }

    #[test]
    fn test_load_section_from_missing_file() {
        let result = UniswapV3Deployment::load_section_from_file_sync("/nonexistent/uniswap_v3.toml".to_string());
        assert!(matches!(result, Err(LoadConfigError::IoError(_))));
    }

    // Only test that touches UNISWAP_V3_* variables.
    #[test]
    fn test_from_env_overrides_and_rejects_bad_fee() {
        let router = "0x3bFA4769FB09eefC5a80d6E87c3B9C650f7Ae48E";
        unsafe {
            std::env::set_var("UNISWAP_V3_NETWORK", "sepolia");
            std::env::set_var("UNISWAP_V3_ROUTER", router);
            std::env::set_var("UNISWAP_V3_DEFAULT_FEE", "500");
        }
        let config = UniswapV3Deployment::from_env().unwrap();
        assert_eq!(config.network, "sepolia");
        assert_eq!(config.router_address, Address::from_str(router).unwrap());
        assert_eq!(config.quoter_address, UniswapV3Address::MAINNET_QUOTER);
        assert_eq!(config.default_fee_tier, FeeTier::Low);

        unsafe { std::env::set_var("UNISWAP_V3_DEFAULT_FEE", "2500") };
        let err = UniswapV3Deployment::from_env().unwrap_err();
        assert!(err.to_string().contains("UNISWAP_V3_DEFAULT_FEE"));

        unsafe { std::env::set_var("UNISWAP_V3_DEFAULT_FEE", "medium") };
        assert!(UniswapV3Deployment::from_env().is_err());

        unsafe {
            std::env::remove_var("UNISWAP_V3_NETWORK");
            std::env::remove_var("UNISWAP_V3_ROUTER");
            std::env::remove_var("UNISWAP_V3_DEFAULT_FEE");
        }
    }
}

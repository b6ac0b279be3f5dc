use {
    serde::Serialize,
    stellar_strkey::Strkey,
    thiserror::Error,
};

/// Fee tiers the pool factory creates pools for, in hundredths of a bip.
pub const FEE_TIERS: [u32; 4] = [100, 500, 3000, 10000];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing environment variable `{0}`")]
    Missing(&'static str),

    #[error("`{var}` is not a Stellar account or contract address: `{value}`")]
    InvalidAddress { var: &'static str, value: String },

    #[error("`POOL_FEE_TIER` must be one of 100, 500, 3000 or 10000, got `{0}`")]
    InvalidFeeTier(String),

    #[error("`{first}` and `{second}` must be different addresses")]
    DuplicateRole {
        first: &'static str,
        second: &'static str,
    },
}

/// Host-side mirror of the contract's `ChainEndpoint`.
///
/// Serializes to the JSON the `stellar` CLI accepts for a struct argument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainEndpoint {
    pub chain_name: String,
    pub gateway: String,
    pub gas_service: String,
    pub gas_token: String,
    pub dex_factory: String,
    pub dex_router: String,
    pub canonical_token: String,
    pub source_token: String,
    pub fee_tier: u32,
    pub registry: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    pub owner: String,
    pub endpoint: ChainEndpoint,
}

impl DeploymentConfig {
    /// Load from the process environment, after `.env` has been applied.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(|var| std::env::var(var).ok())
    }

    /// Load from an arbitrary variable lookup.
    pub fn from_source<F>(source: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &'static str| -> Result<String, ConfigError> {
            source(var)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or(ConfigError::Missing(var))
        };
        let address = |var: &'static str| -> Result<String, ConfigError> {
            let value = read(var)?;
            match Strkey::from_string(&value) {
                Ok(Strkey::PublicKeyEd25519(_)) | Ok(Strkey::Contract(_)) => Ok(value),
                _ => Err(ConfigError::InvalidAddress { var, value }),
            }
        };

        let fee_tier = read("POOL_FEE_TIER")?;
        let fee_tier = fee_tier
            .parse::<u32>()
            .ok()
            .filter(|tier| FEE_TIERS.contains(tier))
            .ok_or(ConfigError::InvalidFeeTier(fee_tier))?;

        let registry = match source("REGISTRY_CONTRACT").filter(|value| !value.trim().is_empty()) {
            Some(_) => Some(address("REGISTRY_CONTRACT")?),
            None => None,
        };

        let config = Self {
            owner: address("OWNER")?,
            endpoint: ChainEndpoint {
                chain_name: read("CHAIN_NAME")?,
                gateway: address("AXELAR_GATEWAY")?,
                gas_service: address("AXELAR_GAS_RECEIVER")?,
                gas_token: address("GAS_TOKEN")?,
                dex_factory: address("DEX_FACTORY")?,
                dex_router: address("DEX_ROUTER")?,
                canonical_token: address("CANONICAL_TOKEN")?,
                source_token: address("SOURCE_TOKEN")?,
                fee_tier,
                registry,
            },
        };
        config.check_roles()?;

        Ok(config)
    }

    /// Same constraints `initialize` enforces on chain, reported before
    /// anything is deployed.
    fn check_roles(&self) -> Result<(), ConfigError> {
        let endpoint = &self.endpoint;
        let pairs = [
            ("CANONICAL_TOKEN", &endpoint.canonical_token, "SOURCE_TOKEN", &endpoint.source_token),
            ("CANONICAL_TOKEN", &endpoint.canonical_token, "GAS_TOKEN", &endpoint.gas_token),
            ("AXELAR_GATEWAY", &endpoint.gateway, "AXELAR_GAS_RECEIVER", &endpoint.gas_service),
            ("DEX_FACTORY", &endpoint.dex_factory, "DEX_ROUTER", &endpoint.dex_router),
        ];

        for (first, a, second, b) in pairs {
            if a == b {
                return Err(ConfigError::DuplicateRole { first, second });
            }
        }
        Ok(())
    }

    pub fn endpoint_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.endpoint)
    }
}

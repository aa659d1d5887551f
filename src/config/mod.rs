//! Configuration file management and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ProviderConfig, RelayConfig, RelaySettings, ResolveOptions,
    ResolvedConfig, StoreKind, resolve_config, resolve_relay_settings,
};

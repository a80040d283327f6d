//! Configuration structs

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, DraftConfig, Environment,
    JwtConfig, RateLimitConfig, RedisConfig, ServerConfig,
};

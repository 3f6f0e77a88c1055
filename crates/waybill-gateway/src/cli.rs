use clap::{Parser, ValueEnum};
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "WAYBILL_GATEWAY_LISTEN_ADDR";
pub const COUNTER_BACKEND_ENV: &str = "WAYBILL_GATEWAY_COUNTER_BACKEND";
pub const COUNTER_KEY_ENV: &str = "WAYBILL_GATEWAY_COUNTER_KEY";
pub const REDIS_URL_ENV: &str = "WAYBILL_GATEWAY_REDIS_URL";
pub const REDIS_TIMEOUT_MS_ENV: &str = "WAYBILL_GATEWAY_REDIS_TIMEOUT_MS";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_REDIS_TIMEOUT_MS: u64 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CounterBackendArg {
    /// Per-process counter. Not durable; local runs and tests only.
    #[value(name = "in-memory")]
    InMemory,
    /// Shared Redis counter. Required for multi-instance deployments.
    #[value(name = "redis")]
    Redis,
}

impl Display for CounterBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterBackendArg::InMemory => write!(f, "in-memory"),
            CounterBackendArg::Redis => write!(f, "redis"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "waybill-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(
        long,
        env = COUNTER_BACKEND_ENV,
        value_enum,
        default_value_t = CounterBackendArg::Redis
    )]
    pub counter: CounterBackendArg,

    #[arg(
        long,
        env = COUNTER_KEY_ENV,
        default_value = waybill_generator::TRACKING_SEQUENCE_KEY
    )]
    pub counter_key: String,

    #[arg(long, env = REDIS_URL_ENV, required_if_eq("counter", "redis"))]
    pub redis_url: Option<String>,

    #[arg(long, env = REDIS_TIMEOUT_MS_ENV, default_value_t = DEFAULT_REDIS_TIMEOUT_MS)]
    pub redis_timeout_ms: u64,
}

use std::env;

use crate::constants::{
    CONFIG_OBSERVABILITY_NAME, DEFAULT_IDLE_TIMEOUT, DEFAULT_IMAGE, DEFAULT_PORT,
    DEFAULT_READ_TIMEOUT, DEFAULT_TIMEOUT_HANDLER, DEFAULT_WRITE_TIMEOUT,
    EVENTLISTENER_API_VERSION, TRIGGERS_METRICS_DOMAIN,
};

/// Observability values the sink container receives through its environment.
///
/// This is a snapshot: take it once per reconcile with [`ObservabilityEnv::from_env`]
/// and pass it along inside [`SinkConfig`], nothing downstream reads the process
/// environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityEnv {
    pub system_namespace: String,
    pub config_observability_name: String,
    pub metrics_domain: String,
    pub metrics_prometheus_port: String,
}

impl Default for ObservabilityEnv {
    fn default() -> Self {
        ObservabilityEnv {
            system_namespace: String::new(),
            config_observability_name: CONFIG_OBSERVABILITY_NAME.to_string(),
            metrics_domain: TRIGGERS_METRICS_DOMAIN.to_string(),
            metrics_prometheus_port: String::new(),
        }
    }
}

impl ObservabilityEnv {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Unset or empty variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ObservabilityEnv::default();
        let read = |key: &str, fallback: String| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or(fallback)
        };

        ObservabilityEnv {
            system_namespace: read("SYSTEM_NAMESPACE", defaults.system_namespace),
            config_observability_name: read(
                "CONFIG_OBSERVABILITY_NAME",
                defaults.config_observability_name,
            ),
            metrics_domain: defaults.metrics_domain,
            metrics_prometheus_port: read(
                "METRICS_PROMETHEUS_PORT",
                defaults.metrics_prometheus_port,
            ),
        }
    }
}

/// Everything the reconciler knows about the sink it is about to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    pub el_name: String,
    pub el_namespace: String,
    pub port: i32,
    pub read_timeout: i64,
    pub write_timeout: i64,
    pub idle_timeout: i64,
    pub timeout_handler: i64,
    pub payload_validation: bool,
    pub is_multi_ns: bool,
    pub image: String,
    pub observability: ObservabilityEnv,
}

impl SinkConfig {
    pub fn new(el_name: &str, el_namespace: &str) -> Self {
        SinkConfig {
            el_name: el_name.to_string(),
            el_namespace: el_namespace.to_string(),
            port: DEFAULT_PORT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
            timeout_handler: DEFAULT_TIMEOUT_HANDLER,
            payload_validation: true,
            is_multi_ns: false,
            image: DEFAULT_IMAGE.to_string(),
            observability: ObservabilityEnv::default(),
        }
    }

    pub fn with_observability(mut self, observability: ObservabilityEnv) -> Self {
        self.observability = observability;
        self
    }
}

/// The EventListener that owns the generated object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventListenerRef {
    pub name: String,
    pub namespace: String,
    pub uid: String,
    pub api_version: String,
    pub block_owner_deletion: bool,
}

impl EventListenerRef {
    pub fn new(name: &str, namespace: &str) -> Self {
        EventListenerRef {
            name: name.to_string(),
            namespace: namespace.to_string(),
            uid: String::new(),
            api_version: EVENTLISTENER_API_VERSION.to_string(),
            block_owner_deletion: true,
        }
    }

    pub fn with_uid(mut self, uid: &str) -> Self {
        self.uid = uid.to_string();
        self
    }
}

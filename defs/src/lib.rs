mod config;
mod constants;
mod errors;

pub use config::{EventListenerRef, ObservabilityEnv, SinkConfig};
pub use constants::{
    CONFIG_OBSERVABILITY_NAME, DEFAULT_IDLE_TIMEOUT, DEFAULT_IMAGE, DEFAULT_PORT,
    DEFAULT_READ_TIMEOUT, DEFAULT_TIMEOUT_HANDLER, DEFAULT_WRITE_TIMEOUT,
    EVENTLISTENER_API_VERSION, EVENTLISTENER_CONFIGMAP_NAME, EVENTLISTENER_CONTAINER_NAME,
    EVENTLISTENER_KIND, EVENTLISTENER_LABEL, LOGGING_MOUNT_PATH, LOGGING_VOLUME_NAME,
    MANAGED_BY_LABEL, MANAGED_BY_VALUE, PART_OF_LABEL, PART_OF_VALUE, READINESS_PROBE_PATH,
    TRIGGERS_METRICS_DOMAIN,
};
pub use errors::CustomObjectError;

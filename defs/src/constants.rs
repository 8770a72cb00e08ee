// Names below are read back by the sink and by the reconciler, keep them in sync.

pub const EVENTLISTENER_CONTAINER_NAME: &str = "event-listener";
pub const EVENTLISTENER_CONFIGMAP_NAME: &str = "config-logging-triggers";
pub const EVENTLISTENER_API_VERSION: &str = "triggers.tekton.dev/v1beta1";
pub const EVENTLISTENER_KIND: &str = "EventListener";

pub const LOGGING_VOLUME_NAME: &str = "config-logging";
pub const LOGGING_MOUNT_PATH: &str = "/etc/config-logging";
pub const READINESS_PROBE_PATH: &str = "/live";

pub const MANAGED_BY_LABEL: &str = "app.kubernetes.io/managed-by";
pub const MANAGED_BY_VALUE: &str = "EventListener";
pub const PART_OF_LABEL: &str = "app.kubernetes.io/part-of";
pub const PART_OF_VALUE: &str = "Triggers";
pub const EVENTLISTENER_LABEL: &str = "eventlistener";

pub const CONFIG_OBSERVABILITY_NAME: &str = "config-observability";
pub const TRIGGERS_METRICS_DOMAIN: &str = "tekton.dev/triggers";

pub const DEFAULT_IMAGE: &str = "ko://github.com/tektoncd/triggers/cmd/eventlistenersink";
pub const DEFAULT_PORT: i32 = 8080;

// Timeouts are in seconds
pub const DEFAULT_READ_TIMEOUT: i64 = 5;
pub const DEFAULT_WRITE_TIMEOUT: i64 = 40;
pub const DEFAULT_IDLE_TIMEOUT: i64 = 120;
pub const DEFAULT_TIMEOUT_HANDLER: i64 = 30;

use std::collections::BTreeMap;

use el_defs::{
    CustomObjectError, EventListenerRef, SinkConfig, EVENTLISTENER_CONFIGMAP_NAME,
    EVENTLISTENER_CONTAINER_NAME, EVENTLISTENER_KIND, EVENTLISTENER_LABEL, LOGGING_MOUNT_PATH,
    LOGGING_VOLUME_NAME, MANAGED_BY_LABEL, MANAGED_BY_VALUE, PART_OF_LABEL, PART_OF_VALUE,
    READINESS_PROBE_PATH,
};
use el_utils::to_object;
use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, Container, ContainerPort, EnvVar, HTTPGetAction, Probe,
    ResourceRequirements, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, OwnerReference};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;
use serde_json::{Map, Value};

/// Operator-owned values for the sink, already in generic form so they can be
/// overlaid onto an arbitrary custom resource.
#[derive(Debug, Clone, PartialEq)]
pub struct SinkDefaults {
    pub metadata: Value,
    pub container: Map<String, Value>,
    pub volumes: Vec<Value>,
}

impl SinkDefaults {
    pub fn build(config: &SinkConfig, owner: &EventListenerRef) -> Result<Self, CustomObjectError> {
        let mut metadata =
            to_object(&object_meta(config, owner)).map_err(CustomObjectError::Serialize)?;
        // Never set here, but the API server expects the key on rendered objects
        metadata.insert("creationTimestamp".to_string(), Value::Null);

        let container = to_object(&sink_container(config)).map_err(CustomObjectError::Serialize)?;

        let volumes = sink_volumes()
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .map_err(CustomObjectError::Serialize)?;

        Ok(SinkDefaults {
            metadata: Value::Object(metadata),
            container,
            volumes,
        })
    }
}

pub fn sink_labels(el_name: &str) -> BTreeMap<String, String> {
    BTreeMap::from([
        (MANAGED_BY_LABEL.to_string(), MANAGED_BY_VALUE.to_string()),
        (PART_OF_LABEL.to_string(), PART_OF_VALUE.to_string()),
        (EVENTLISTENER_LABEL.to_string(), el_name.to_string()),
    ])
}

pub fn owner_reference(owner: &EventListenerRef) -> OwnerReference {
    OwnerReference {
        api_version: owner.api_version.clone(),
        kind: EVENTLISTENER_KIND.to_string(),
        name: owner.name.clone(),
        uid: owner.uid.clone(),
        controller: Some(true),
        block_owner_deletion: Some(owner.block_owner_deletion),
    }
}

fn object_meta(config: &SinkConfig, owner: &EventListenerRef) -> ObjectMeta {
    ObjectMeta {
        labels: Some(sink_labels(&config.el_name)),
        namespace: Some(config.el_namespace.clone()),
        owner_references: Some(vec![owner_reference(owner)]),
        ..Default::default()
    }
}

/// Flags passed to the sink binary. The order is part of the output and must not change.
pub fn sink_args(config: &SinkConfig) -> Vec<String> {
    vec![
        format!("--el-name={}", config.el_name),
        format!("--el-namespace={}", config.el_namespace),
        format!("--port={}", config.port),
        format!("--readtimeout={}", config.read_timeout),
        format!("--writetimeout={}", config.write_timeout),
        format!("--idletimeout={}", config.idle_timeout),
        format!("--timeouthandler={}", config.timeout_handler),
        format!("--is-multi-ns={}", config.is_multi_ns),
        format!("--payload-validation={}", config.payload_validation),
    ]
}

pub fn sink_env(config: &SinkConfig) -> Vec<EnvVar> {
    let observability = &config.observability;
    [
        ("SYSTEM_NAMESPACE", &observability.system_namespace),
        (
            "CONFIG_OBSERVABILITY_NAME",
            &observability.config_observability_name,
        ),
        ("METRICS_DOMAIN", &observability.metrics_domain),
        (
            "METRICS_PROMETHEUS_PORT",
            &observability.metrics_prometheus_port,
        ),
    ]
    .into_iter()
    .map(|(name, value)| EnvVar {
        name: name.to_string(),
        value: Some(value.clone()),
        ..Default::default()
    })
    .collect()
}

fn sink_container(config: &SinkConfig) -> Container {
    Container {
        name: EVENTLISTENER_CONTAINER_NAME.to_string(),
        image: Some(config.image.clone()),
        args: Some(sink_args(config)),
        env: Some(sink_env(config)),
        ports: Some(vec![ContainerPort {
            container_port: config.port,
            protocol: Some("TCP".to_string()),
            ..Default::default()
        }]),
        resources: Some(ResourceRequirements::default()),
        volume_mounts: Some(vec![VolumeMount {
            name: LOGGING_VOLUME_NAME.to_string(),
            mount_path: LOGGING_MOUNT_PATH.to_string(),
            read_only: Some(true),
            ..Default::default()
        }]),
        readiness_probe: Some(Probe {
            http_get: Some(HTTPGetAction {
                path: Some(READINESS_PROBE_PATH.to_string()),
                // Port 0 resolves to the container's first port
                port: IntOrString::Int(0),
                scheme: Some("HTTP".to_string()),
                ..Default::default()
            }),
            success_threshold: Some(1),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn sink_volumes() -> Vec<Volume> {
    vec![Volume {
        name: LOGGING_VOLUME_NAME.to_string(),
        config_map: Some(ConfigMapVolumeSource {
            name: EVENTLISTENER_CONFIGMAP_NAME.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }]
}

use el_defs::CustomObjectError;
use el_utils::{
    ensure_array, ensure_object, join_index, join_path, resolve_object_path, shape_error,
    value_kind,
};
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::defaults::SinkDefaults;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// The operator value replaces whatever the user wrote.
    Overwrite,
    /// User entries first, operator entries appended. No deduplication by name.
    ConcatenateOrdered,
    /// The operator value is used only when the user left the field out.
    DefaultIfAbsent,
}

/// Container fields owned or shared by the operator. Anything not listed here is
/// left exactly as the user wrote it.
pub const CONTAINER_MERGE_POLICIES: &[(&str, MergePolicy)] = &[
    ("name", MergePolicy::Overwrite),
    ("image", MergePolicy::Overwrite),
    ("args", MergePolicy::Overwrite),
    ("env", MergePolicy::ConcatenateOrdered),
    ("ports", MergePolicy::Overwrite),
    ("resources", MergePolicy::DefaultIfAbsent),
    ("volumeMounts", MergePolicy::Overwrite),
    ("readinessProbe", MergePolicy::Overwrite),
];

const POD_TEMPLATE_PATH: [&str; 2] = ["spec", "template"];

pub fn policy_for(field: &str) -> Option<MergePolicy> {
    CONTAINER_MERGE_POLICIES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, policy)| *policy)
}

/// Overlays the sink defaults onto a parsed custom resource in place.
///
/// `metadata` and the pod volumes are operator-owned and replaced wholesale. The
/// first container of `spec.template.spec.containers` is created if needed and merged
/// field by field following [`CONTAINER_MERGE_POLICIES`]. Other containers are not
/// touched.
pub fn overlay_sink_defaults(
    document: &mut Value,
    defaults: &SinkDefaults,
) -> Result<(), CustomObjectError> {
    let root = match document {
        Value::Object(root) => root,
        other => {
            return Err(CustomObjectError::Shape {
                path: "<root>".to_string(),
                expected: "a mapping",
                found: value_kind(other),
            })
        }
    };

    if let Some(user_metadata) = root.get("metadata") {
        if *user_metadata != defaults.metadata {
            warn!("Discarding user supplied metadata, it is owned by the EventListener");
        }
    }
    root.insert("metadata".to_string(), defaults.metadata.clone());

    let template = resolve_object_path(root, &POD_TEMPLATE_PATH)?;
    let template_path = POD_TEMPLATE_PATH.join(".");

    ensure_object(template, &template_path, "metadata")?
        .entry("creationTimestamp")
        .or_insert(Value::Null);

    let pod_spec = ensure_object(template, &template_path, "spec")?;
    let pod_spec_path = join_path(&template_path, "spec");

    let containers = ensure_array(pod_spec, &pod_spec_path, "containers")?;
    if containers.is_empty() {
        containers.push(Value::Object(Map::new()));
    } else if containers.len() > 1 {
        debug!(
            "Leaving {} additional containers untouched",
            containers.len() - 1
        );
    }

    let container_path = join_index(&join_path(&pod_spec_path, "containers"), 0);
    match &mut containers[0] {
        Value::Object(container) => {
            merge_container(container, &defaults.container, &container_path)?
        }
        other => return Err(shape_error(container_path, "a mapping", other)),
    }

    if pod_spec.contains_key("volumes") {
        warn!("Replacing user supplied pod volumes with the sink logging volume");
    }
    pod_spec.insert("volumes".to_string(), Value::Array(defaults.volumes.clone()));

    Ok(())
}

/// Applies every policy in [`CONTAINER_MERGE_POLICIES`] for which a default exists.
pub fn merge_container(
    container: &mut Map<String, Value>,
    defaults: &Map<String, Value>,
    container_path: &str,
) -> Result<(), CustomObjectError> {
    for (field, policy) in CONTAINER_MERGE_POLICIES {
        if let Some(default) = defaults.get(*field) {
            apply_policy(*policy, container, field, default, container_path)?;
        }
    }
    Ok(())
}

pub fn apply_policy(
    policy: MergePolicy,
    container: &mut Map<String, Value>,
    field: &str,
    default: &Value,
    container_path: &str,
) -> Result<(), CustomObjectError> {
    match policy {
        MergePolicy::Overwrite => {
            if let Some(existing) = container.get(field) {
                if existing != default {
                    debug!("Overwriting {} on the sink container", field);
                }
            }
            container.insert(field.to_string(), default.clone());
        }
        MergePolicy::ConcatenateOrdered => {
            let appended = match default {
                Value::Array(items) => items.clone(),
                other => vec![other.clone()],
            };
            match container.get_mut(field) {
                Some(Value::Array(items)) => items.extend(appended),
                Some(Value::Null) | None => {
                    container.insert(field.to_string(), Value::Array(appended));
                }
                Some(other) => {
                    return Err(shape_error(
                        join_path(container_path, field),
                        "a sequence",
                        other,
                    ))
                }
            }
        }
        MergePolicy::DefaultIfAbsent => match container.get(field) {
            Some(existing) if !existing.is_null() => {}
            _ => {
                container.insert(field.to_string(), default.clone());
            }
        },
    }
    Ok(())
}

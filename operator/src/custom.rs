use el_defs::{CustomObjectError, EventListenerRef, SinkConfig};
use kube::api::{ApiResource, DynamicObject, GroupVersionKind};
use log::{debug, info};
use serde_json::Value;

use crate::defaults::SinkDefaults;
use crate::merge::overlay_sink_defaults;

/// A fully merged custom object, ready to be submitted through the dynamic API.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomObject {
    pub object: Value,
    pub gvk: GroupVersionKind,
}

impl CustomObject {
    pub fn api_resource(&self) -> ApiResource {
        ApiResource::from_gvk(&self.gvk)
    }

    pub fn into_dynamic_object(self) -> Result<DynamicObject, CustomObjectError> {
        serde_json::from_value(self.object).map_err(CustomObjectError::Object)
    }
}

/// Only checks that the bytes are well-formed JSON. Any value is accepted here.
pub fn parse_document(raw: &[u8]) -> Result<Value, CustomObjectError> {
    serde_json::from_slice(raw).map_err(CustomObjectError::Decode)
}

/// Splits `apiVersion` into group and version. Core resources such as `v1` have an
/// empty group. Missing fields resolve to empty strings.
pub fn resolve_gvk(document: &Value) -> GroupVersionKind {
    let api_version = document
        .get("apiVersion")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let kind = document
        .get("kind")
        .and_then(Value::as_str)
        .unwrap_or_default();

    let (group, version) = match api_version.rsplit_once('/') {
        Some((group, version)) => (group, version),
        None => ("", api_version),
    };
    GroupVersionKind::gvk(group, version, kind)
}

/// Builds the sink workload from the raw custom resource embedded in an EventListener.
pub fn make_custom_object(
    raw: &[u8],
    config: &SinkConfig,
    owner: &EventListenerRef,
) -> Result<CustomObject, CustomObjectError> {
    debug!(
        "Building custom object for EventListener {}/{}",
        config.el_namespace, config.el_name
    );

    let mut object = parse_document(raw)?;
    let defaults = SinkDefaults::build(config, owner)?;
    overlay_sink_defaults(&mut object, &defaults)?;

    let gvk = resolve_gvk(&object);
    info!(
        "Custom object for EventListener {} resolved to {}/{} {}",
        config.el_name, gvk.group, gvk.version, gvk.kind
    );

    Ok(CustomObject { object, gvk })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_document_rejects_garbage() {
        let err = parse_document(b"garbage").unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_parse_document_rejects_truncated() {
        let err = parse_document(br#"{"apiVersion": "v1", "kind": "#).unwrap_err();
        assert!(err.is_decode());
    }

    #[test]
    fn test_parse_document_accepts_any_mapping() {
        assert_eq!(
            parse_document(br#"{"foo": [1, true, null]}"#).unwrap(),
            json!({"foo": [1, true, null]})
        );
    }

    #[test]
    fn test_parse_document_preserves_key_order() {
        let document = parse_document(br#"{"kind": "Service", "apiVersion": "v1"}"#).unwrap();
        let keys: Vec<&str> = document
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["kind", "apiVersion"]);
    }

    #[test]
    fn test_resolve_gvk_grouped() {
        let gvk = resolve_gvk(&json!({
            "apiVersion": "serving.knative.dev/v1",
            "kind": "Service"
        }));
        assert_eq!(gvk.group, "serving.knative.dev");
        assert_eq!(gvk.version, "v1");
        assert_eq!(gvk.kind, "Service");
    }

    #[test]
    fn test_resolve_gvk_core_and_missing() {
        let gvk = resolve_gvk(&json!({"apiVersion": "v1", "kind": "Pod"}));
        assert_eq!((gvk.group.as_str(), gvk.version.as_str()), ("", "v1"));

        let gvk = resolve_gvk(&json!({}));
        assert_eq!(gvk, GroupVersionKind::gvk("", "", ""));
    }

    #[test]
    fn test_api_resource_and_dynamic_object() {
        let object = make_custom_object(
            br#"{"apiVersion": "serving.knative.dev/v1", "kind": "Service"}"#,
            &SinkConfig::new("el", "ns"),
            &EventListenerRef::new("el", "ns"),
        )
        .unwrap();

        let resource = object.api_resource();
        assert_eq!(resource.api_version, "serving.knative.dev/v1");
        assert_eq!(resource.kind, "Service");

        let dynamic = object.into_dynamic_object().unwrap();
        assert_eq!(dynamic.metadata.namespace.as_deref(), Some("ns"));
        assert_eq!(
            dynamic.metadata.owner_references.unwrap()[0].kind,
            "EventListener"
        );
        assert!(dynamic.data["spec"]["template"]["spec"]["containers"].is_array());
    }
}

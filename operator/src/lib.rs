mod custom;
mod defaults;
mod merge;

pub use custom::{make_custom_object, parse_document, resolve_gvk, CustomObject};
pub use defaults::{owner_reference, sink_args, sink_env, sink_labels, SinkDefaults};
pub use merge::{
    apply_policy, merge_container, overlay_sink_defaults, policy_for, MergePolicy,
    CONTAINER_MERGE_POLICIES,
};

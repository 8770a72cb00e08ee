use anyhow::{anyhow, Context};
use el_defs::{EventListenerRef, ObservabilityEnv, SinkConfig};
use el_operator::make_custom_object;
use el_utils::setup_logging;
use log::info;
use std::env;
use std::fs;
use std::io::{self, Read};

fn main() -> anyhow::Result<()> {
    setup_logging().context("Failed to initialize logging")?;

    let raw = read_input(env::args().nth(1))?;
    let config = config_from_env()?;
    let owner = EventListenerRef::new(&config.el_name, &config.el_namespace)
        .with_uid(&env::var("EL_UID").unwrap_or_default());

    let custom_object = make_custom_object(&raw, &config, &owner)?;
    info!(
        "Rendered {} for EventListener {}",
        custom_object.gvk.kind, config.el_name
    );

    print!("{}", serde_yaml::to_string(&custom_object.object)?);
    Ok(())
}

// "-" or no argument reads the custom resource from stdin
fn read_input(path: Option<String>) -> anyhow::Result<Vec<u8>> {
    match path.as_deref() {
        Some(path) if path != "-" => {
            fs::read(path).with_context(|| format!("Failed to read custom resource {}", path))
        }
        _ => {
            let mut raw = Vec::new();
            io::stdin().read_to_end(&mut raw)?;
            Ok(raw)
        }
    }
}

fn config_from_env() -> anyhow::Result<SinkConfig> {
    let el_name = env::var("EL_NAME").map_err(|_| anyhow!("EL_NAME must be set"))?;
    let el_namespace = env::var("EL_NAMESPACE").unwrap_or_else(|_| "default".to_string());

    let mut config = SinkConfig::new(&el_name, &el_namespace)
        .with_observability(ObservabilityEnv::from_env());

    if let Ok(port) = env::var("SINK_PORT") {
        config.port = port
            .parse()
            .with_context(|| format!("Invalid SINK_PORT '{}'", port))?;
    }
    if let Ok(image) = env::var("SINK_IMAGE") {
        config.image = image;
    }
    config.payload_validation = env_flag("PAYLOAD_VALIDATION", config.payload_validation)?;
    config.is_multi_ns = env_flag("IS_MULTI_NS", config.is_multi_ns)?;

    Ok(config)
}

fn env_flag(key: &str, default: bool) -> anyhow::Result<bool> {
    match env::var(key) {
        Ok(value) => value
            .parse()
            .with_context(|| format!("Invalid {} '{}', expected true or false", key, value)),
        Err(_) => Ok(default),
    }
}

use crate::config::{Config, DEFAULT_MODEL_PATH, DEFAULT_SCALER_PATH, Language};
use std::env;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::OnceLock;

// Global lock to prevent race conditions when modifying environment variables in tests
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn get_env_lock() -> &'static Mutex<()> {
    ENV_LOCK.get_or_init(|| Mutex::new(()))
}

const VARS: [&str; 4] = [
    "AQI_MODEL_PATH",
    "AQI_SCALER_PATH",
    "AQI_LANGUAGE",
    "OBSERVABILITY_ENABLED",
];

fn clear_vars() {
    for var in VARS {
        // SAFETY: every test touching these variables holds ENV_LOCK
        unsafe { env::remove_var(var) };
    }
}

#[test]
fn test_config_defaults() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();

    let config = Config::from_env().unwrap();
    assert_eq!(config.artifacts.model_path, PathBuf::from(DEFAULT_MODEL_PATH));
    assert_eq!(config.artifacts.scaler_path, PathBuf::from(DEFAULT_SCALER_PATH));
    assert_eq!(config.language, Language::English);
    assert!(config.observability.enabled);
}

#[test]
fn test_config_from_env_overrides() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    unsafe {
        env::set_var("AQI_MODEL_PATH", "/srv/models/aqi.onnx");
        env::set_var("AQI_SCALER_PATH", "/srv/models/aqi_scaler.json");
        env::set_var("AQI_LANGUAGE", "id");
        env::set_var("OBSERVABILITY_ENABLED", "false");
    }

    let config = Config::from_env().unwrap();
    assert_eq!(config.artifacts.model_path, PathBuf::from("/srv/models/aqi.onnx"));
    assert_eq!(
        config.artifacts.scaler_path,
        PathBuf::from("/srv/models/aqi_scaler.json")
    );
    assert_eq!(config.language, Language::Indonesian);
    assert!(!config.observability.enabled);

    clear_vars();
}

#[test]
fn test_invalid_language_is_rejected() {
    let _guard = get_env_lock().lock().unwrap();
    clear_vars();
    unsafe { env::set_var("AQI_LANGUAGE", "klingon") };

    assert!(Config::from_env().is_err());

    clear_vars();
}

use serial_test::serial;
use std::env;
use timeclock::config::Config;

mod common;

const CONFIG_VARS: [&str; 8] = [
    "DATABASE_URL",
    "HOST",
    "PORT",
    "ENVIRONMENT",
    "BASE_URL",
    "WORKDAYS_PER_MONTH",
    "CACHE_MAX_CAPACITY",
    "CACHE_TTL_SECONDS",
];

fn snapshot_env() -> Vec<(&'static str, Option<String>)> {
    CONFIG_VARS
        .iter()
        .map(|key| (*key, env::var(key).ok()))
        .collect()
}

fn restore_env(original_values: Vec<(&'static str, Option<String>)>) {
    unsafe {
        for (key, value) in original_values {
            if let Some(val) = value {
                env::set_var(key, val);
            } else {
                env::remove_var(key);
            }
        }
    }
}

#[test]
#[serial]
fn test_config_defaults() {
    common::setup_test_env();

    let original_values = snapshot_env();

    // Clear environment variables
    for (key, _) in &original_values {
        unsafe {
            env::remove_var(key);
        }
    }

    let config = Config::from_env_only().unwrap();

    assert_eq!(config.database_url, "sqlite:timeclock.db");
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert_eq!(config.environment, "development");
    assert_eq!(config.client_base_url, "http://localhost:3000");
    assert_eq!(config.workdays_per_month, 20);
    assert_eq!(config.cache_max_capacity, 1000);
    assert_eq!(config.cache_ttl_seconds, 300);

    restore_env(original_values);
}

#[test]
#[serial]
fn test_config_custom_values() {
    common::setup_test_env();

    let original_values = snapshot_env();

    unsafe {
        env::set_var("DATABASE_URL", "sqlite:./custom.db");
        env::set_var("HOST", "0.0.0.0");
        env::set_var("PORT", "3000");
        env::set_var("ENVIRONMENT", "production");
        env::set_var("BASE_URL", "https://clock.example.com");
        env::set_var("WORKDAYS_PER_MONTH", "22");
        env::set_var("CACHE_MAX_CAPACITY", "50");
        env::set_var("CACHE_TTL_SECONDS", "60");
    }

    let config = Config::from_env_only().unwrap();

    assert_eq!(config.database_url, "sqlite:./custom.db");
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.environment, "production");
    assert_eq!(config.client_base_url, "https://clock.example.com");
    assert_eq!(config.workdays_per_month, 22);
    assert_eq!(config.cache_max_capacity, 50);
    assert_eq!(config.cache_ttl_seconds, 60);

    restore_env(original_values);
}

#[test]
#[serial]
fn test_config_invalid_numbers_fall_back_to_defaults() {
    common::setup_test_env();

    let original_values = snapshot_env();

    unsafe {
        env::set_var("PORT", "invalid_port");
        env::set_var("WORKDAYS_PER_MONTH", "twenty");
        env::set_var("CACHE_MAX_CAPACITY", "lots");
        env::set_var("CACHE_TTL_SECONDS", "-5");
    }

    let config = Config::from_env_only().unwrap();

    assert_eq!(config.port, 8080);
    assert_eq!(config.workdays_per_month, 20);
    assert_eq!(config.cache_max_capacity, 1000);
    assert_eq!(config.cache_ttl_seconds, 300);

    restore_env(original_values);
}

#[test]
fn test_config_environment_detection() {
    let mut production_config = common::test_config();
    production_config.environment = "production".to_string();

    let development_config = Config {
        environment: "development".to_string(),
        ..common::test_config()
    };

    assert!(production_config.is_production());
    assert!(!production_config.is_development());

    assert!(!development_config.is_production());
    assert!(development_config.is_development());
}

#[test]
fn test_server_address_formatting() {
    let config = Config {
        host: "192.168.1.1".to_string(),
        port: 9000,
        ..common::test_config()
    };

    assert_eq!(config.server_address(), "192.168.1.1:9000");
}

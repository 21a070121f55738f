use crate::AppConfig;
use figment::{
    Figment,
    providers::{Format, Toml},
};

#[test]
fn test_defaults_without_any_source() {
    let config = AppConfig::from_figment(Figment::new()).unwrap();
    assert_eq!(config.app_name, "order-service");
    assert_eq!(config.server.port, 5003);
    assert_eq!(config.telemetry.log_level, "info");
    assert!(!config.seed_demo_data);
    assert_eq!(config.app_env, "development");
}

#[test]
fn test_later_layer_overrides_earlier() {
    let figment = Figment::new()
        .merge(Toml::string(
            r#"
            app_name = "orders"
            [server]
            port = 7000
            "#,
        ))
        .merge(Toml::string(
            r#"
            app_env = "production"
            seed_demo_data = true
            [server]
            host = "127.0.0.1"
            "#,
        ));

    let config = AppConfig::from_figment(figment).unwrap();
    assert_eq!(config.app_name, "orders");
    assert_eq!(config.server.address(), "127.0.0.1:7000");
    assert!(config.is_production());
    assert!(config.seed_demo_data);
}

#[test]
fn test_health_port_defaults_to_grpc_port_plus_1000() {
    let mut config = AppConfig::default();
    assert_eq!(config.health_port(), 6003);

    config.health.port = Some(9100);
    assert_eq!(config.health_port(), 9100);
}

#[test]
fn test_invalid_type_is_reported() {
    let figment = Figment::new().merge(Toml::string(
        r#"
        [server]
        port = "not-a-port"
        "#,
    ));

    assert!(AppConfig::from_figment(figment).is_err());
}

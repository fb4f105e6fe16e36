use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_to_postgres() {
    let cfg = config_from(&[("DATABASE_URL", "postgres://localhost/companions")]).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(
        cfg.store,
        StoreKind::Postgres {
            database_url: "postgres://localhost/companions".into(),
            max_connections: DEFAULT_DB_MAX_CONNECTIONS,
        }
    );
}

#[test]
fn postgres_requires_database_url() {
    assert_eq!(config_from(&[]), Err(ConfigError::Missing("DATABASE_URL")));
}

#[test]
fn memory_store_needs_no_database() {
    let cfg = config_from(&[("STORE", "memory"), ("PORT", "8080")]).unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.store, StoreKind::Memory);
}

#[test]
fn rejects_unknown_store() {
    assert_eq!(
        config_from(&[("STORE", "sqlite")]),
        Err(ConfigError::Invalid { var: "STORE", value: "sqlite".into() })
    );
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        config_from(&[("STORE", "memory"), ("PORT", "eighty")]),
        Err(ConfigError::Invalid { var: "PORT", value: "eighty".into() })
    );
}

#[test]
fn reads_pool_size_and_ignores_garbage() {
    let cfg = config_from(&[("DATABASE_URL", "postgres://db/c"), ("DB_MAX_CONNECTIONS", "12")]).unwrap();
    assert!(matches!(cfg.store, StoreKind::Postgres { max_connections: 12, .. }));

    let cfg = config_from(&[("DATABASE_URL", "postgres://db/c"), ("DB_MAX_CONNECTIONS", "lots")]).unwrap();
    assert!(matches!(cfg.store, StoreKind::Postgres { max_connections: DEFAULT_DB_MAX_CONNECTIONS, .. }));
}

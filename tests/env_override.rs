// Kept in its own test binary: these cases mutate the process environment.
use db_connection::{get_connection, is_valid, ConnectionConfig, ConnectionError, URL, URL_ENV};
use std::env;

// Restores the previous value of a variable when dropped, even if an assertion fails.
struct EnvGuard {
    key: &'static str,
    previous: Option<String>,
}

impl EnvGuard {
    fn new(key: &'static str) -> Self {
        Self {
            key,
            previous: env::var(key).ok(),
        }
    }

    fn set(&self, value: impl AsRef<str>) {
        env::set_var(self.key, value.as_ref());
    }

    fn remove(&self) {
        env::remove_var(self.key);
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.previous {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

#[test]
fn test_url_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("env.db");
    let url_var = EnvGuard::new(URL_ENV);

    url_var.remove();
    assert_eq!(ConnectionConfig::from_env().url, URL);

    url_var.set("   ");
    assert_eq!(ConnectionConfig::from_env().url, URL);

    url_var.set(format!("sqlite://{}", path.display()));
    let conn = get_connection().unwrap();
    assert!(is_valid(&conn));
    assert!(path.exists());
    drop(conn);

    url_var.set("jdbc:h2:tcp://localhost/~/test");
    let err = get_connection().unwrap_err();
    assert!(matches!(err, ConnectionError::UnsupportedUrl(_)));
}

#[test]
fn test_env_guard_restores_previous_value() {
    const KEY: &str = "DB_CONNECTION_GUARD_CHECK";
    env::set_var(KEY, "before");
    {
        let guard = EnvGuard::new(KEY);
        guard.set("during");
        assert_eq!(env::var(KEY).unwrap(), "during");
    }
    assert_eq!(env::var(KEY).unwrap(), "before");
    env::remove_var(KEY);
}

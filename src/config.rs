//! Fixed connection parameters. Values are compiled in; there is no
//! environment or CLI surface.

/// Database connection parameters plus the listen port.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_name: String,
    pub db_user: String,
    pub db_password: String,
    pub db_host: String,
    pub db_port: String,
    pub listen_port: u16,
}

impl Config {
    /// Returns the fixed configuration. No inputs, no error path.
    pub fn load() -> Self {
        Config {
            db_name: "car_db".into(),
            db_user: "postgres".into(),
            db_password: "bezhan2009".into(),
            db_host: "localhost".into(),
            db_port: "5432".into(),
            listen_port: 8080,
        }
    }

    /// PostgreSQL connection URL for sqlx.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.db_user, self.db_password, self.db_host, self.db_port, self.db_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_has_all_parts() {
        let config = Config::load();
        let url = config.database_url();
        assert!(url.starts_with("postgres://"));
        assert!(url.contains(&config.db_host));
        assert!(url.ends_with(&config.db_name));
    }

    #[test]
    fn listen_port_is_fixed() {
        assert_eq!(Config::load().listen_port, 8080);
    }
}

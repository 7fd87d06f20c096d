use std::env;
use std::str::FromStr;

/// Max HR used to draw the illustrative HR zones on the race-time calculator path.
pub const DEFAULT_RACE_MAX_HR_ESTIMATE: u32 = 185;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub race_max_hr_estimate: u32,
}

/// Parse `value`, falling back to `default` when absent or malformed.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        let race_max_hr_estimate = parse_or(
            env::var("RACE_MAX_HR_ESTIMATE").ok(),
            DEFAULT_RACE_MAX_HR_ESTIMATE,
        );

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:paceplan.db?mode=rwc".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_or(env::var("PORT").ok(), 3000),
            race_max_hr_estimate: if race_max_hr_estimate == 0 {
                DEFAULT_RACE_MAX_HR_ESTIMATE
            } else {
                race_max_hr_estimate
            },
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

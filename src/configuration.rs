use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl Settings {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Defaults layered under the process environment, so `PORT` (and `HOST`)
/// override the listening address. Port defaults to 8000.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = config::Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 8000)?
        .add_source(config::Environment::default())
        .build()?;

    settings.try_deserialize::<Settings>()
}

use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub webdriver: WebDriverSettings,
    pub scrape: ScrapeSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct WebDriverSettings {
    pub server_url: String,
    pub headless: bool,
}

#[derive(serde::Deserialize, Clone)]
pub struct ScrapeSettings {
    /// Base URL of the seeded table pages; the seed is appended as a
    /// `seed` query parameter.
    pub base_url: String,
    pub seeds: Vec<u64>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub wait_timeout_secs: u64,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub instance: InstanceConfig,

	#[serde(default)]
	pub datasource: DatasourceConfig,

	#[serde(default)]
	pub security: SecurityConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct InstanceConfig {
	#[serde_inline_default("flightdeck".into())]
	/// site name, shown in page titles
	pub name: String,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct DatasourceConfig {
	#[serde_inline_default("sqlite://./flightdeck.db?mode=rwc".into())]
	pub connection_string: String,

	#[serde_inline_default(32)]
	pub max_connections: u32,

	#[serde_inline_default(1)]
	pub min_connections: u32,

	#[serde_inline_default(90u64)]
	pub connect_timeout_seconds: u64,

	#[serde_inline_default(30u64)]
	pub acquire_timeout_seconds: u64,

	#[serde_inline_default(10u64)]
	/// threshold for queries to be considered slow
	pub slow_query_warn_seconds: u64,

	#[serde_inline_default(true)]
	/// enable logging warn for slow queries
	pub slow_query_warn_enable: bool,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct SecurityConfig {
	#[serde_inline_default(30)]
	/// max time, in seconds, before requests fail with timeout
	pub request_timeout: u64,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}

#[cfg(test)]
mod test {
	use super::Config;

	#[test]
	fn partial_config_keeps_defaults_for_missing_fields() {
		let cfg: Config = toml::from_str("[datasource]\nmax_connections = 4\n").unwrap();
		assert_eq!(cfg.datasource.max_connections, 4);
		assert_eq!(cfg.datasource.connection_string, "sqlite://./flightdeck.db?mode=rwc");
		assert_eq!(cfg.instance.name, "flightdeck");
		assert_eq!(cfg.security.request_timeout, 30);
	}

	#[test]
	fn missing_config_file_falls_back_to_defaults() {
		let cfg = Config::load(Some(&std::path::PathBuf::from("/definitely/not/here.toml")));
		assert_eq!(cfg.datasource.min_connections, 1);
		assert!(cfg.datasource.slow_query_warn_enable);
	}
}

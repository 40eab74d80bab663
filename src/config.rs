use std::path::{Path, PathBuf};

use log::*;
use nexmo::{Credentials, HttpConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::commands::GlobalArgs;

/// Contents of `config.json`. Every field can also come from the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
	pub api_key: Option<String>,
	pub api_secret: Option<String>,
	pub api_base_uri: Option<String>,
	pub rest_base_uri: Option<String>,
}

impl ConfigFile {
	/// A missing file is the same as an empty one.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		if !path.is_file() {
			debug!("no config file at {}, using defaults", path.display());
			return Ok(Self::default());
		}
		debug!("loading config from {}", path.display());
		let text = std::fs::read_to_string(path)?;
		let mut deser = serde_json::Deserializer::from_str(text.as_str());
		let config = serde_path_to_error::deserialize(&mut deser)
			.map_err(|err| ConfigError::Deserialize(path.to_owned(), err))?;
		Ok(config)
	}
}

pub(crate) fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("nexmo-cli").join("config.json"))
}

/// Everything needed to build a transport.
#[derive(Debug)]
pub(crate) struct Settings {
	pub credentials: Credentials,
	pub http: HttpConfig,
}

/// Merges command line arguments over the config file.
pub(crate) fn resolve(args: &GlobalArgs, file: ConfigFile) -> Result<Settings, ConfigError> {
	let api_key = args
		.api_key
		.clone()
		.or(file.api_key)
		.ok_or(ConfigError::MissingCredential("api_key"))?;
	let api_secret = args
		.api_secret
		.clone()
		.or(file.api_secret)
		.ok_or(ConfigError::MissingCredential("api_secret"))?;

	let mut http = HttpConfig::default();
	if let Some(uri) = args.api_base_uri.clone().or(file.api_base_uri) {
		http = http.with_api_base_uri(uri);
	}
	if let Some(uri) = args.rest_base_uri.clone().or(file.rest_base_uri) {
		http = http.with_rest_base_uri(uri);
	}

	Ok(Settings {
		credentials: Credentials::new(api_key, api_secret),
		http,
	})
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
	#[error("No {0} given. Pass it as a flag, set it in the environment, or add it to the config file.")]
	MissingCredential(&'static str),
	#[error("Failed to read config file: {0}")]
	Io(#[from] std::io::Error),
	#[error("Failed to deserialize config file {0}: {1}")]
	Deserialize(PathBuf, serde_path_to_error::Error<serde_json::Error>),
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::commands::Verbosity;
	use std::io::Write;

	fn empty_args() -> GlobalArgs {
		GlobalArgs {
			config: None,
			api_key: None,
			api_secret: None,
			api_base_uri: None,
			rest_base_uri: None,
			verbosity: Verbosity::Info,
		}
	}

	#[test]
	fn test_missing_file_is_default() {
		let dir = tempfile::tempdir().unwrap();
		let config = ConfigFile::load(&dir.path().join("config.json")).unwrap();
		assert_eq!(config, ConfigFile::default());
	}

	#[test]
	fn test_load_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(
			file,
			r#"{{"api_key": "abc123", "api_secret": "shh", "rest_base_uri": "http://localhost:8080/"}}"#
		)
		.unwrap();

		let config = ConfigFile::load(file.path()).unwrap();
		assert_eq!(config.api_key.as_deref(), Some("abc123"));
		assert_eq!(config.api_base_uri, None);

		let settings = resolve(&empty_args(), config).unwrap();
		assert_eq!(settings.credentials.api_key(), "abc123");
		assert_eq!(settings.http.rest_base_uri(), "http://localhost:8080");
		assert_eq!(settings.http.api_base_uri(), "https://api.nexmo.com");
	}

	#[test]
	fn test_malformed_file_names_path() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, r#"{{"api_key": 12}}"#).unwrap();

		let err = ConfigFile::load(file.path()).unwrap_err();
		assert!(matches!(err, ConfigError::Deserialize(_, _)));
		assert!(err.to_string().contains("api_key"), "got: {}", err);
	}

	#[test]
	fn test_args_override_file() {
		let file = ConfigFile {
			api_key: Some("from-file".into()),
			api_secret: Some("file-secret".into()),
			api_base_uri: Some("http://file".into()),
			rest_base_uri: None,
		};
		let mut args = empty_args();
		args.api_key = Some("from-args".into());
		args.api_base_uri = Some("http://args".into());

		let settings = resolve(&args, file).unwrap();
		assert_eq!(settings.credentials.api_key(), "from-args");
		assert_eq!(settings.http.api_base_uri(), "http://args");
	}

	#[test]
	fn test_missing_secret() {
		let mut args = empty_args();
		args.api_key = Some("abc".into());
		let err = resolve(&args, ConfigFile::default()).unwrap_err();
		assert!(matches!(err, ConfigError::MissingCredential("api_secret")));
	}
}

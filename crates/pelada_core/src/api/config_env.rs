use crate::config::BalancerConfig;
use crate::error::Result;
use std::env;
use std::path::Path;

pub const CONFIG_PATH_ENV: &str = "PELADA_BALANCER_CONFIG_PATH";

/// Loads the balancer config named by `PELADA_BALANCER_CONFIG_PATH`.
///
/// Unset or blank means defaults. A path that cannot be read or parsed is an
/// error, never a silent fallback.
pub fn config_from_env() -> Result<BalancerConfig> {
    config_from_path_var(env::var(CONFIG_PATH_ENV).ok().as_deref())
}

fn config_from_path_var(value: Option<&str>) -> Result<BalancerConfig> {
    match value.map(str::trim) {
        None | Some("") => Ok(BalancerConfig::default()),
        Some(path) => BalancerConfig::load(Path::new(path)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BalanceError;
    use std::io::Write;

    #[test]
    fn test_unset_or_blank_uses_defaults() {
        assert_eq!(config_from_path_var(None).unwrap(), BalancerConfig::default());
        assert_eq!(config_from_path_var(Some("   ")).unwrap(), BalancerConfig::default());
    }

    #[test]
    fn test_path_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"quality_divisor": 25.0}}"#).unwrap();

        let path = file.path().to_string_lossy().to_string();
        let cfg = config_from_path_var(Some(&path)).unwrap();
        assert!((cfg.quality_divisor - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_broken_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let path = file.path().to_string_lossy().to_string();
        assert!(matches!(config_from_path_var(Some(&path)), Err(BalanceError::Json(_))));
    }
}

//! Hints Loader
//!
//! Reads device hints from JSON or YAML documents at the caller boundary.
//! Invalid form factors are rejected here rather than coerced.

use crate::domain::DeviceHints;
use crate::error::{Error, Result};
use std::path::Path;
use tracing::debug;

/// Parse hints from a JSON document
pub fn parse_hints_json(input: &str) -> Result<DeviceHints> {
    Ok(serde_json::from_str(input)?)
}

/// Parse hints from a YAML document
pub fn parse_hints_yaml(input: &str) -> Result<DeviceHints> {
    Ok(serde_yaml::from_str(input)?)
}

/// Load hints from a `.json`, `.yaml` or `.yml` file
pub fn load_hints(path: &Path) -> Result<DeviceHints> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    let parse: fn(&str) -> Result<DeviceHints> = match extension.as_deref() {
        Some("json") => parse_hints_json,
        Some("yaml" | "yml") => parse_hints_yaml,
        _ => {
            return Err(Error::UnsupportedHintsFormat {
                path: path.to_path_buf(),
            })
        }
    };

    let contents = std::fs::read_to_string(path)?;
    let hints = parse(&contents)?;

    debug!(path = %path.display(), "loaded device hints");
    Ok(hints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormFactor;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("phone.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{"formFactor": "phone", "supportedGLayers": ["4G", "5G"]}}"#
        )
        .unwrap();

        let hints = load_hints(&path).unwrap();
        assert_eq!(hints.form_factor, Some(FormFactor::Phone));
        assert_eq!(hints.supported_g_layers.unwrap().len(), 2);
    }

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sensor.YML");
        std::fs::write(
            &path,
            "formFactor: iot\nhasCellularModem: true\nsupportedGLayers:\n  - 2G\n  - NB-IoT\n",
        )
        .unwrap();

        let hints = load_hints(&path).unwrap();
        assert_eq!(hints.form_factor, Some(FormFactor::Iot));
        assert_eq!(hints.has_cellular_modem, Some(true));
        assert_eq!(
            hints.supported_g_layers,
            Some(vec!["2G".to_string(), "NB-IoT".to_string()])
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hints.toml");
        std::fs::write(&path, "").unwrap();

        assert_matches!(load_hints(&path), Err(Error::UnsupportedHintsFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_hints(&dir.path().join("absent.json")).unwrap_err();

        assert_matches!(err, Error::Io(_));
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_invalid_form_factor_rejected() {
        assert_matches!(
            parse_hints_json(r#"{"formFactor": "watch"}"#),
            Err(Error::JsonParse(_))
        );
        assert_matches!(
            parse_hints_yaml("formFactor: watch\n"),
            Err(Error::YamlParse(_))
        );
    }
}

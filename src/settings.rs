// settings.rs
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Startup parameters, optionally read from a line-oriented settings file
/// (`key value` per line, `#` starts a comment). The file is read once at
/// startup and never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub polar_degrees: f32,
    pub azimuth_degrees: f32,
    pub eta_entry: f32,
    pub eta_exit: f32,
    pub show_collision_plane: bool,
    pub show_media: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            polar_degrees: 0.0,
            azimuth_degrees: 0.0,
            eta_entry: 1.0,
            eta_exit: 1.0,
            show_collision_plane: true,
            show_media: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected `key value`, got {found} fields")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: invalid value `{value}` for `{key}`")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
    },
    #[error("line {line}: unknown key `{key}`")]
    UnknownKey { line: usize, key: String },
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    fn parse(contents: &str) -> Result<Self, SettingsError> {
        let mut settings = Settings::default();

        for (line_num, line) in contents.lines().enumerate() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = trimmed.split_whitespace().collect();
            if parts.len() != 2 {
                return Err(SettingsError::FieldCount {
                    line: line_num + 1,
                    found: parts.len(),
                });
            }

            let (key, value) = (parts[0], parts[1]);
            match key {
                "polar" => settings.polar_degrees = parse_f32(line_num, key, value)?,
                "azimuth" => settings.azimuth_degrees = parse_f32(line_num, key, value)?,
                "eta_entry" => settings.eta_entry = parse_f32(line_num, key, value)?,
                "eta_exit" => settings.eta_exit = parse_f32(line_num, key, value)?,
                "show_collision_plane" => {
                    settings.show_collision_plane = parse_bool(line_num, key, value)?
                }
                "show_media" => settings.show_media = parse_bool(line_num, key, value)?,
                _ => {
                    return Err(SettingsError::UnknownKey {
                        line: line_num + 1,
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(settings)
    }
}

fn parse_f32(line_num: usize, key: &str, value: &str) -> Result<f32, SettingsError> {
    value.parse::<f32>().map_err(|_| SettingsError::InvalidValue {
        line: line_num + 1,
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_bool(line_num: usize, key: &str, value: &str) -> Result<bool, SettingsError> {
    value.parse::<bool>().map_err(|_| SettingsError::InvalidValue {
        line: line_num + 1,
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_yields_defaults() {
        let settings = Settings::parse("").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let settings = Settings::parse("# a comment\n\n  \npolar 30\n").unwrap();
        assert_eq!(settings.polar_degrees, 30.0);
        assert_eq!(settings.eta_entry, 1.0);
    }

    #[test]
    fn full_file_parses() {
        let input = "\
polar 45
azimuth 90
eta_entry 1.5
eta_exit 1.0
show_collision_plane false
show_media true
";
        let settings = Settings::parse(input).unwrap();
        assert_eq!(settings.polar_degrees, 45.0);
        assert_eq!(settings.azimuth_degrees, 90.0);
        assert_eq!(settings.eta_entry, 1.5);
        assert_eq!(settings.eta_exit, 1.0);
        assert!(!settings.show_collision_plane);
        assert!(settings.show_media);
    }

    #[test]
    fn wrong_field_count_is_reported_with_its_line() {
        let err = Settings::parse("polar 30\neta_entry 1.0 2.0\n").unwrap_err();
        assert!(matches!(
            err,
            SettingsError::FieldCount { line: 2, found: 3 }
        ));
    }

    #[test]
    fn bad_number_is_reported_with_key_and_value() {
        let err = Settings::parse("azimuth north\n").unwrap_err();
        match err {
            SettingsError::InvalidValue { line, key, value } => {
                assert_eq!(line, 1);
                assert_eq!(key, "azimuth");
                assert_eq!(value, "north");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = Settings::parse("fov 75\n").unwrap_err();
        assert!(matches!(err, SettingsError::UnknownKey { line: 1, .. }));
    }
}

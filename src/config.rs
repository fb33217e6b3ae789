use std::{fs::File, io::Read, io::Write, path::Path, str::FromStr};

use json::{JsonValue, object};

use crate::{
    color_palette::{Compression, Theme},
    dithering::{DitherConfig, ThresholdSpread, threshold::BayerStrategy},
    error::{DitherError, Result},
};

/// Which theme × compression combinations to render and how to dither them.
///
/// Stored as JSON, every key is optional:
///
/// ```json
/// {
///     "themes": ["low-tech", "grayscale"],
///     "compressions": ["0%", "100%"],
///     "matrix_size": 8,
///     "strength": 1.0,
///     "serpentine": true,
///     "spread": "palette-spacing",
///     "strategy": "auto"
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SweepConfig {
    pub themes: Vec<Theme>,
    pub compressions: Vec<Compression>,
    pub dither: DitherConfig,
}

impl Default for SweepConfig {
    /// Every theme at every compression level.
    fn default() -> Self {
        Self {
            themes: Theme::ALL.to_vec(),
            compressions: Compression::ALL.to_vec(),
            dither: DitherConfig::default(),
        }
    }
}

impl SweepConfig {
    pub fn from_json(json_string: &str) -> Result<SweepConfig> {
        let json = json::parse(json_string)?;
        let defaults = DitherConfig::default();

        let themes = parse_list(&json["themes"], "themes", &Theme::ALL)?;
        let compressions = parse_list(&json["compressions"], "compressions", &Compression::ALL)?;

        let matrix_size = match &json["matrix_size"] {
            JsonValue::Null => defaults.matrix_size,
            value => value
                .as_usize()
                .ok_or_else(|| config_error("Couldn't parse matrix_size"))?,
        };
        let strength = match &json["strength"] {
            JsonValue::Null => defaults.strength,
            value => value
                .as_f32()
                .ok_or_else(|| config_error("Couldn't parse strength"))?,
        };
        let serpentine = match &json["serpentine"] {
            JsonValue::Null => defaults.serpentine,
            value => value
                .as_bool()
                .ok_or_else(|| config_error("Couldn't parse serpentine"))?,
        };
        let spread = match &json["spread"] {
            JsonValue::Null => defaults.spread,
            value => value
                .as_str()
                .ok_or_else(|| config_error("Couldn't parse spread"))?
                .parse::<ThresholdSpread>()?,
        };
        let strategy = match json["strategy"].as_str() {
            None if json["strategy"].is_null() => None,
            None => return Err(config_error("Couldn't parse strategy")),
            Some("auto") => None,
            Some(name) => Some(name.parse::<BayerStrategy>()?),
        };

        let dither = DitherConfig {
            matrix_size,
            strength,
            serpentine,
            spread,
            strategy,
        };
        // reject bad matrix sizes and strengths before any image is touched
        dither.matrix()?;

        Ok(SweepConfig {
            themes,
            compressions,
            dither,
        })
    }

    pub fn to_json(&self) -> String {
        let strategy = match self.dither.strategy {
            Some(strategy) => strategy.name(),
            None => "auto",
        };
        let themes: Vec<&str> = self.themes.iter().map(Theme::name).collect();
        let compressions: Vec<&str> = self.compressions.iter().map(Compression::name).collect();
        let data = object! {
            themes: themes,
            compressions: compressions,
            matrix_size: self.dither.matrix_size,
            strength: self.dither.strength,
            serpentine: self.dither.serpentine,
            spread: self.dither.spread.name(),
            strategy: strategy
        };
        data.pretty(4)
    }

    pub fn read_config<P: AsRef<Path>>(path: P) -> Result<SweepConfig> {
        let mut file = File::open(path)?;
        let mut json_string = String::new();
        file.read_to_string(&mut json_string)?;

        SweepConfig::from_json(&json_string)
    }

    pub fn write_config<P: AsRef<Path>>(&self, path: P) -> Result {
        let mut file = File::create(path)?;
        file.write_all(self.to_json().as_bytes())?;
        Ok(())
    }

    /// Amount of outputs one sweep produces.
    pub fn combinations(&self) -> usize {
        self.themes.len() * self.compressions.len()
    }
}

fn config_error(msg: &str) -> DitherError {
    DitherError::Config(msg.to_string())
}

/// Parse an optional array of names, `null` selects `all`.
fn parse_list<T>(value: &JsonValue, key: &str, all: &[T]) -> Result<Vec<T>>
where
    T: FromStr<Err = DitherError> + Copy,
{
    if value.is_null() {
        return Ok(all.to_vec());
    }
    if !value.is_array() || value.is_empty() {
        return Err(DitherError::Config(format!(
            "{key} should be an array of 1 or more names"
        )));
    }
    value
        .members()
        .map(|member| {
            member
                .as_str()
                .ok_or_else(|| DitherError::Config(format!("Couldn't parse {key}.*")))?
                .parse::<T>()
        })
        .collect()
}

//! Light sets on disk.
//!
//! The text format is one command per line, a light starting at `NEW_LIGHT`
//! and collecting the properties that follow it:
//!
//! ```text
//! NEW_LIGHT
//! COLOR 255 255 50
//! STRENGTH 400
//! POSITION 1 30
//! ```
//!
//! `COLOR` defaults to white, `STRENGTH` and `POSITION` are required. Unknown
//! commands are skipped and `#` starts a comment. Files ending in `.json` hold
//! a serialized `[Light]` array instead.

use std::{
    fmt::Display,
    fs::File,
    io::{self, BufRead, BufReader},
    path::Path,
    str::{FromStr, SplitAsciiWhitespace},
};

use log::debug;

use crate::{
    color::{Color, WHITE},
    light::Light,
    types::{Float, PixelLocation},
};

#[derive(Debug, thiserror::Error)]
pub enum LightsFileError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("light {index}: missing {property}")]
    Incomplete { index: usize, property: &'static str },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

#[derive(Debug, Default)]
struct ParsedLight {
    color: Option<Color>,
    strength: Option<Float>,
    position: Option<PixelLocation>,
}

impl ParsedLight {
    fn build(self, index: usize) -> Result<Light, LightsFileError> {
        let strength = self.strength.ok_or(LightsFileError::Incomplete { index, property: "STRENGTH" })?;
        let pixel = self.position.ok_or(LightsFileError::Incomplete { index, property: "POSITION" })?;
        Ok(Light { color: self.color.unwrap_or(WHITE), strength, pixel })
    }
}

pub fn load(path: impl AsRef<Path>) -> Result<Vec<Light>, LightsFileError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let lights = if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
        serde_json::from_reader(reader)?
    } else {
        parse_lights(reader)?
    };
    debug!("loaded {} lights from {}", lights.len(), path.display());
    Ok(lights)
}

pub fn parse_lights(input: impl BufRead) -> Result<Vec<Light>, LightsFileError> {
    let mut parsed: Vec<ParsedLight> = vec![];

    for (number, line) in input.lines().enumerate() {
        let line = line?;
        let number = number + 1;
        let content = line.split('#').next().unwrap_or_default();
        let mut parts = content.split_ascii_whitespace();
        let Some(command) = parts.next() else { continue; };
        if command == "NEW_LIGHT" {
            parsed.push(ParsedLight::default());
            continue;
        }
        if !matches!(command, "COLOR" | "STRENGTH" | "POSITION") {
            continue;
        }
        let Some(light) = parsed.last_mut() else {
            return Err(syntax(number, format!("{} before NEW_LIGHT", command)));
        };
        match command {
            "COLOR" => light.color = Some(Color::new(next(&mut parts, number)?, next(&mut parts, number)?, next(&mut parts, number)?)),
            "STRENGTH" => light.strength = Some(next(&mut parts, number)?),
            _ => light.position = Some(PixelLocation::new(next(&mut parts, number)?, next(&mut parts, number)?)),
        }
        if let Some(extra) = parts.next() {
            return Err(syntax(number, format!("unexpected `{}` after {}", extra, command)));
        }
    }

    parsed.into_iter().enumerate().map(|(index, light)| light.build(index)).collect()
}

fn syntax(line: usize, message: String) -> LightsFileError {
    LightsFileError::Syntax { line, message }
}

fn next<T: FromStr>(parts: &mut SplitAsciiWhitespace, line: usize) -> Result<T, LightsFileError>
    where <T as FromStr>::Err: Display
{
    let token = parts.next().ok_or_else(|| syntax(line, "missing value".to_string()))?;
    token.parse().map_err(|e| syntax(line, format!("`{}`: {}", token, e)))
}

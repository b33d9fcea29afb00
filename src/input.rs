use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::ScoringError;
use crate::profile::{profile_answers_from_vector, ProfileAnswers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
}

fn file_format(path: &Path) -> Result<FileFormat> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(FileFormat::Json),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            Ok(FileFormat::Yaml)
        }
        _ => bail!(
            "Unsupported answer file {}: expected .json, .yaml or .yml",
            path.display()
        ),
    }
}

fn read_file<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let format = file_format(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read answer file at {}", path.display()))?;

    match format {
        FileFormat::Json => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON in {}", path.display())),
        FileFormat::Yaml => serde_saphyr::from_str(&content)
            .with_context(|| format!("Failed to parse YAML in {}", path.display())),
    }
}

/// Profile answers may be a map of question id to value, or a positional list
/// in A..E question order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ProfileInput {
    Map(ProfileAnswers),
    List(Vec<Value>),
}

/// Vector answers may be a bare list or a submission body `{ "answers": [...] }`.
///
/// List elements stay untyped until [`numeric_answers`] so a stray string is
/// reported as a bad answer rather than a parse failure of the whole file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VectorInput {
    List(Vec<Value>),
    Body { answers: Vec<Value> },
}

/// Convert positional answers to numbers, naming the first element that isn't one.
fn numeric_answers(values: &[Value]) -> Result<Vec<f64>, ScoringError> {
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            value.as_f64().ok_or_else(|| ScoringError::NotANumber {
                position: i + 1,
                value: value.to_string(),
            })
        })
        .collect()
}

/// Where profile answers come from.
#[derive(Debug, Clone, Copy)]
pub enum ProfileInputSource<'a> {
    File(&'a Path),
    Values(&'a str),
}

/// Load profile answers from a file or an inline value list.
pub fn profile_from_input(input: ProfileInputSource<'_>) -> Result<ProfileAnswers> {
    let values = match input {
        ProfileInputSource::File(path) => match read_file::<ProfileInput>(path)? {
            ProfileInput::Map(map) => return Ok(map),
            ProfileInput::List(values) => numeric_answers(&values)
                .with_context(|| format!("Invalid answers in {}", path.display()))?,
        },
        ProfileInputSource::Values(csv) => parse_values(csv)?,
    };

    profile_answers_from_vector(&values).context("Invalid profile answer list")
}

/// Load a positional answer list from a JSON or YAML file.
pub fn load_answer_list(path: &Path) -> Result<Vec<f64>> {
    let values = match read_file::<VectorInput>(path)? {
        VectorInput::List(values) => values,
        VectorInput::Body { answers } => answers,
    };
    numeric_answers(&values).with_context(|| format!("Invalid answers in {}", path.display()))
}

/// Parse a comma or whitespace separated list such as `"5,4,3"` or `"5 4 3"`.
pub fn parse_values(s: &str) -> Result<Vec<f64>> {
    let values = s
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .enumerate()
        .map(|(i, part)| {
            part.parse::<f64>().map_err(|_| ScoringError::NotANumber {
                position: i + 1,
                value: format!("'{}'", part),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if values.is_empty() {
        bail!("No answer values given");
    }
    Ok(values)
}

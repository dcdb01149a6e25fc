use std::fs::File;
use std::io::BufReader;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::info;

use crate::error::{KnnError, Result};
use crate::prediction::VotingStrategy;
use crate::representation::schema::RecordSchema;
use crate::selection::SelectionPolicy;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    /// Classify the test table against the training table.
    #[default]
    Holdout,
    /// Stratified n-fold validation within the training table.
    CrossValidate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // -- classification -- //
    pub k: usize,
    pub selection_policy: SelectionPolicy,
    pub voting_strategy: VotingStrategy,
    pub fallback_label: String,

    // -- input -- //
    pub training_path: String,
    pub test_path: String,
    pub delimiter: char,
    pub has_headers: bool,
    pub training_schema: RecordSchema,
    pub test_schema: RecordSchema,

    // -- output -- //
    pub output_path: String,
    pub summary_path: Option<String>,

    // -- validation -- //
    pub mode: RunMode,
    pub n_folds: usize,
    pub seed: u64,
}

impl Default for Params {
    fn default() -> Params {
        return Params {
            k: 4,
            selection_policy: SelectionPolicy::LegacySlotScan,
            voting_strategy: VotingStrategy::MaxWeightLastSeen,
            fallback_label: "unknown".to_string(),

            training_path: "training_data.csv".to_string(),
            test_path: "test_data_post_rapid_miner.csv".to_string(),
            delimiter: ';',
            has_headers: false,
            training_schema: RecordSchema::training_default(),
            test_schema: RecordSchema::test_default(),

            output_path: "OutputResults.csv".to_string(),
            summary_path: None,

            mode: RunMode::Holdout,
            n_folds: 5,
            seed: 42,
        };
    }
}

impl Params {
    pub fn from_json_file(path: &str) -> Result<Params> {
        let file = File::open(path).map_err(|source| KnnError::Io {
            path: path.to_string(),
            source,
        })?;
        let params = serde_json::from_reader(BufReader::new(file))?;
        return Ok(params);
    }

    pub fn delimiter_byte(&self) -> Result<u8> {
        if !self.delimiter.is_ascii() {
            return Err(invalid("delimiter", "must be a single ascii character"));
        }
        return Ok(self.delimiter as u8);
    }

    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(KnnError::InvalidK(self.k));
        }
        if self.mode == RunMode::CrossValidate && self.n_folds < 2 {
            return Err(invalid("n_folds", "cross validation needs at least 2 folds"));
        }
        self.delimiter_byte()?;
        Ok(())
    }
}

pub struct VerbosityParams {
    pub show_predictions: bool,
    pub show_diagnostics: bool,
    pub show_final_acc: bool,
}

impl VerbosityParams {
    pub fn holdout_defaults() -> VerbosityParams {
        return VerbosityParams {
            show_predictions: true,
            show_diagnostics: false,
            show_final_acc: true,
        };
    }

    pub fn n_fold_defaults() -> VerbosityParams {
        return VerbosityParams {
            show_predictions: false,
            show_diagnostics: false,
            show_final_acc: false,
        };
    }
}

fn invalid(key: &str, reason: &str) -> KnnError {
    return KnnError::InvalidArgument {
        key: key.to_string(),
        reason: reason.to_string(),
    };
}

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    return value
        .parse::<T>()
        .map_err(|e| invalid(key, &format!("{:?}: {}", value, e)));
}

fn param_string_to_bool(key: &str, value: &str) -> Result<bool> {
    match value {
        "True" | "t" | "true" => Ok(true),
        "False" | "f" | "false" => Ok(false),
        _ => Err(invalid(key, &format!("{:?} is not a bool", value))),
    }
}

/// Parses a schema override of the form `id,class,complex,motif,localization`.
fn parse_schema(key: &str, value: &str) -> Result<RecordSchema> {
    let columns = value
        .split(',')
        .map(|v| parse_value::<usize>(key, v.trim()))
        .collect::<Result<Vec<_>>>()?;

    match columns.as_slice() {
        [id, class, complex, motif, localization] => Ok(RecordSchema {
            id: *id,
            class: *class,
            complex: *complex,
            motif: *motif,
            localization: *localization,
        }),
        _ => Err(invalid(
            key,
            "expected id,class,complex,motif,localization columns",
        )),
    }
}

/// Builds params from defaults, an optional `--config=<json>` file and
/// `--key=value` overrides, in that order.
pub fn params_from_args(args: &[String]) -> Result<Params> {
    let config_path = args
        .iter()
        .filter_map(|arg| arg.strip_prefix("--config="))
        .last();

    let mut params = match config_path {
        Some(path) => {
            info!("reading config from {}", path);
            Params::from_json_file(path)?
        }
        None => Params::default(),
    };

    modify_config_by_args(&mut params, args)?;
    params.validate()?;
    return Ok(params);
}

pub fn modify_config_by_args(params: &mut Params, args: &[String]) -> Result<()> {
    for arg in args {
        let stripped = match arg.strip_prefix("--") {
            Some(v) => v,
            None => continue,
        };
        let (key, value) = stripped
            .split_once('=')
            .ok_or_else(|| invalid(stripped, "expected --key=value"))?;

        match key {
            "config" => {}
            "k" => params.k = parse_value(key, value)?,
            "selection_policy" => params.selection_policy = parse_value(key, value)?,
            "voting_strategy" => params.voting_strategy = parse_value(key, value)?,
            "fallback_label" => params.fallback_label = value.to_string(),

            "training_path" => params.training_path = value.to_string(),
            "test_path" => params.test_path = value.to_string(),
            "delimiter" => params.delimiter = parse_value(key, value)?,
            "has_headers" => params.has_headers = param_string_to_bool(key, value)?,
            "training_schema" => params.training_schema = parse_schema(key, value)?,
            "test_schema" => params.test_schema = parse_schema(key, value)?,

            "output_path" => params.output_path = value.to_string(),
            "summary_path" => params.summary_path = Some(value.to_string()),

            "mode" => params.mode = parse_value(key, value)?,
            "n_folds" => params.n_folds = parse_value(key, value)?,
            "seed" => params.seed = parse_value(key, value)?,

            _ => return Err(invalid(key, "unknown config arg")),
        }
    }
    Ok(())
}

// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Parameter resolution — turns optional flags plus an input source into a
// validated `TransformParameters`.
//
// Resolution never touches stdin directly. The caller hands in an
// `InputProvider`; the CLI passes a terminal prompt, tests pass a script.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::types::{MAX_BIT_DEPTH, TransformParameters};

/// The five transform values as they arrive from flags or a config file.
/// `None` (or zero) means "ask".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParameterFlags {
    pub height: Option<u32>,
    pub width: Option<u32>,
    pub dpi_x: Option<u32>,
    pub dpi_y: Option<u32>,
    pub bit_depth: Option<u32>,
}

impl ParameterFlags {
    /// Fill every missing value in `self` from `fallback`.
    pub fn or(self, fallback: ParameterFlags) -> Self {
        Self {
            height: self.height.or(fallback.height),
            width: self.width.or(fallback.width),
            dpi_x: self.dpi_x.or(fallback.dpi_x),
            dpi_y: self.dpi_y.or(fallback.dpi_y),
            bit_depth: self.bit_depth.or(fallback.bit_depth),
        }
    }

    /// True when no value needs to be asked for.
    pub fn is_complete(&self) -> bool {
        [self.height, self.width, self.dpi_x, self.dpi_y, self.bit_depth]
            .iter()
            .all(|v| v.is_some_and(|v| v > 0))
    }
}

/// Source of interactive answers for values that were not supplied up front.
pub trait InputProvider {
    /// Show `prompt` and return the reply, or `None` once input is exhausted.
    fn read_value(&mut self, prompt: &str) -> std::io::Result<Option<String>>;

    /// Tell the user why the previous reply was rejected.
    fn report_invalid(&mut self, message: &str);
}

/// One prompted field.
struct Field {
    name: &'static str,
    prompt: &'static str,
    max: Option<u32>,
}

const HEIGHT: Field = Field {
    name: "height",
    prompt: "Enter target height (pixels): ",
    max: None,
};
const WIDTH: Field = Field {
    name: "width",
    prompt: "Enter target width (pixels): ",
    max: None,
};
const DPI_X: Field = Field {
    name: "dpi-x",
    prompt: "Enter horizontal resolution (DPI): ",
    max: None,
};
const DPI_Y: Field = Field {
    name: "dpi-y",
    prompt: "Enter vertical resolution (DPI): ",
    max: None,
};
const BIT_DEPTH: Field = Field {
    name: "bit-depth",
    prompt: "Enter bit depth: ",
    max: Some(MAX_BIT_DEPTH),
};

/// Resolve all five parameters, prompting through `input` for any that are
/// missing or non-positive, then validate the result.
///
/// Values taken from `flags` are not range-checked beyond positivity here;
/// [`TransformParameters::new`] rejects them afterwards, so `--bit-depth 9`
/// fails with [`ConvertError::InvalidParameter`] rather than prompting.
pub fn resolve_parameters<P>(flags: &ParameterFlags, input: &mut P) -> Result<TransformParameters>
where
    P: InputProvider + ?Sized,
{
    let height = resolve_field(flags.height, &HEIGHT, input)?;
    let width = resolve_field(flags.width, &WIDTH, input)?;
    let dpi_x = resolve_field(flags.dpi_x, &DPI_X, input)?;
    let dpi_y = resolve_field(flags.dpi_y, &DPI_Y, input)?;
    let bit_depth = resolve_field(flags.bit_depth, &BIT_DEPTH, input)?;

    TransformParameters::new(width, height, dpi_x, dpi_y, bit_depth)
}

fn resolve_field<P>(value: Option<u32>, field: &Field, input: &mut P) -> Result<u32>
where
    P: InputProvider + ?Sized,
{
    if let Some(value) = value.filter(|v| *v > 0) {
        debug!(field = field.name, value, "parameter supplied");
        return Ok(value);
    }

    loop {
        let Some(reply) = input.read_value(field.prompt)? else {
            return Err(ConvertError::InputValidation(format!(
                "input ended before a value for {} was entered",
                field.name
            )));
        };
        match parse_positive(&reply, field.max) {
            Ok(value) => {
                debug!(field = field.name, value, "parameter entered");
                return Ok(value);
            }
            Err(ConvertError::InputValidation(detail)) => input.report_invalid(&detail),
            Err(err) => return Err(err),
        }
    }
}

/// Parse one interactive reply as a positive integer, optionally bounded.
///
/// Returns [`ConvertError::InputValidation`] for non-numeric, non-positive,
/// or out-of-range replies.
pub fn parse_positive(reply: &str, max: Option<u32>) -> Result<u32> {
    let value: i64 = reply
        .trim()
        .parse()
        .map_err(|_| ConvertError::InputValidation("enter a valid number".into()))?;
    if value <= 0 {
        return Err(ConvertError::InputValidation(
            "must be a positive number and > 0".into(),
        ));
    }
    let value = u32::try_from(value)
        .map_err(|_| ConvertError::InputValidation(format!("{value} is too large")))?;
    match max {
        Some(max) if value > max => Err(ConvertError::InputValidation(format!(
            "must be between 1 and {max}"
        ))),
        _ => Ok(value),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Replays canned answers and records every prompt and complaint.
    #[derive(Default)]
    struct ScriptedInput {
        answers: VecDeque<&'static str>,
        prompts: Vec<String>,
        complaints: Vec<String>,
    }

    impl ScriptedInput {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl InputProvider for ScriptedInput {
        fn read_value(&mut self, prompt: &str) -> std::io::Result<Option<String>> {
            self.prompts.push(prompt.to_owned());
            Ok(self.answers.pop_front().map(str::to_owned))
        }

        fn report_invalid(&mut self, message: &str) {
            self.complaints.push(message.to_owned());
        }
    }

    fn full_flags() -> ParameterFlags {
        ParameterFlags {
            height: Some(800),
            width: Some(600),
            dpi_x: Some(300),
            dpi_y: Some(300),
            bit_depth: Some(4),
        }
    }

    #[test]
    fn complete_flags_never_prompt() {
        let mut input = ScriptedInput::new(&[]);
        let params = resolve_parameters(&full_flags(), &mut input).expect("resolve");
        assert_eq!(params.target_width(), 600);
        assert_eq!(params.target_height(), 800);
        assert!(input.prompts.is_empty());
    }

    #[test]
    fn missing_values_are_prompted_in_order() {
        let mut input = ScriptedInput::new(&["1448", "1072", "300", "300", "8"]);
        let params = resolve_parameters(&ParameterFlags::default(), &mut input).expect("resolve");

        assert_eq!(params.target_height(), 1448);
        assert_eq!(params.target_width(), 1072);
        assert_eq!(params.bit_depth(), 8);
        assert_eq!(input.prompts.len(), 5);
        assert!(input.prompts[0].contains("height"));
        assert!(input.prompts[4].contains("bit depth"));
    }

    #[test]
    fn rejects_non_numeric_and_non_positive_then_accepts() {
        let flags = ParameterFlags {
            height: None,
            ..full_flags()
        };
        let mut input = ScriptedInput::new(&["abc", "0", "-3", "1024"]);
        let params = resolve_parameters(&flags, &mut input).expect("resolve");

        assert_eq!(params.target_height(), 1024);
        assert_eq!(input.prompts.len(), 4);
        assert_eq!(input.complaints.len(), 3);
        assert_eq!(input.complaints[0], "enter a valid number");
        assert_eq!(input.complaints[1], "must be a positive number and > 0");
        assert_eq!(input.complaints[2], "must be a positive number and > 0");
    }

    #[test]
    fn zero_flag_is_treated_as_missing() {
        let flags = ParameterFlags {
            dpi_x: Some(0),
            ..full_flags()
        };
        let mut input = ScriptedInput::new(&["212"]);
        let params = resolve_parameters(&flags, &mut input).expect("resolve");
        assert_eq!(params.dpi().x, 212);
        assert_eq!(input.prompts.len(), 1);
    }

    #[test]
    fn bit_depth_flag_out_of_range_fails_without_prompting() {
        let flags = ParameterFlags {
            bit_depth: Some(9),
            ..full_flags()
        };
        let mut input = ScriptedInput::new(&["4"]);
        let err = resolve_parameters(&flags, &mut input).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidParameter(_)));
        assert!(input.prompts.is_empty());
    }

    #[test]
    fn prompted_bit_depth_out_of_range_is_reprompted() {
        let flags = ParameterFlags {
            bit_depth: None,
            ..full_flags()
        };
        let mut input = ScriptedInput::new(&["16", "2"]);
        let params = resolve_parameters(&flags, &mut input).expect("resolve");
        assert_eq!(params.bit_depth(), 2);
        assert_eq!(input.complaints.len(), 1);
    }

    #[test]
    fn exhausted_input_is_an_error() {
        let mut input = ScriptedInput::new(&["abc"]);
        let err = resolve_parameters(&ParameterFlags::default(), &mut input).unwrap_err();
        assert!(matches!(err, ConvertError::InputValidation(_)));
    }

    #[test]
    fn parse_positive_trims_whitespace() {
        assert_eq!(parse_positive("  42\n", None).expect("parse"), 42);
        assert!(parse_positive("4.5", None).is_err());
        assert!(parse_positive("99999999999", None).is_err());
    }

    #[test]
    fn or_prefers_self_and_completeness_ignores_zero() {
        let partial = ParameterFlags {
            width: Some(100),
            ..Default::default()
        };
        let merged = partial.or(ParameterFlags {
            width: Some(5),
            ..full_flags()
        });
        assert_eq!(merged.width, Some(100));
        assert_eq!(merged.height, Some(800));
        assert!(merged.is_complete());

        let zeroed = ParameterFlags {
            bit_depth: Some(0),
            ..full_flags()
        };
        assert!(!zeroed.is_complete());
    }
}

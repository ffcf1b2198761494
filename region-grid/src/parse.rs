//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Level range and bounding box parsing

use crate::grid::BoundingBox;
use thiserror::Error;

/// Parsing errors
#[derive(Error, Debug, PartialEq)]
pub enum ParseError {
    /// The level range does not have the form `<from>-<to>`.
    #[error("cannot parse levels from '{0}'")]
    MalformedLevelRange(String),
    /// A token is not a number.
    #[error("cannot parse {field} from '{token}'")]
    NotANumber { field: &'static str, token: String },
    /// The levels violate `0 <= from <= to <= 16`.
    #[error("levels range {from}-{to} is broken")]
    OutOfRange { from: i32, to: i32 },
}

const MAX_LEVEL: i32 = 16;

/// Parses a level range like `7-9` or `7 - 9` (spaces are ignored).
pub fn parse_levels(text: &str) -> Result<(u8, u8), ParseError> {
    let stripped = remove_characters(text, " ");
    let tokens = stripped.split('-').collect::<Vec<_>>();
    if tokens.len() != 2 {
        return Err(ParseError::MalformedLevelRange(text.to_string()));
    }

    let from = parse_level(tokens[0], "fromLevel")?;
    let to = parse_level(tokens[1], "toLevel")?;
    if to > MAX_LEVEL || from < 0 || to < from {
        return Err(ParseError::OutOfRange { from, to });
    }

    Ok((from as u8, to as u8))
}

fn parse_level(token: &str, field: &'static str) -> Result<i32, ParseError> {
    token.parse().map_err(|_| ParseError::NotANumber {
        field,
        token: token.to_string(),
    })
}

const BBOX_FIELDS: [&str; 4] = ["minLat", "minLon", "maxLat", "maxLon"];

/// Parses four positional tokens ordered `minLat minLon maxLat maxLon`.
///
/// Commas and spaces are stripped from each token before parsing. The result
/// is not checked for `min <= max`; see `BoundingBox`.
pub fn parse_bounding_box(tokens: [&str; 4]) -> Result<BoundingBox, ParseError> {
    let mut values = [0f64; 4];
    for (i, token) in tokens.iter().enumerate() {
        values[i] = remove_characters(token, ", ")
            .parse()
            .map_err(|_| ParseError::NotANumber {
                field: BBOX_FIELDS[i],
                token: token.to_string(),
            })?;
    }

    Ok(BoundingBox {
        min_lat: values[0],
        min_lon: values[1],
        max_lat: values[2],
        max_lon: values[3],
    })
}

/// Returns `input` with every occurrence of `characters` removed.
pub fn remove_characters(input: &str, characters: &str) -> String {
    input.chars().filter(|c| !characters.contains(*c)).collect()
}

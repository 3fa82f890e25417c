//! Parallel parsing of independent source units.

use puffs_ir::{File, Token, TokenMap};
use rayon::prelude::*;

use crate::{parse_file_with_options, ParseOptions, ParseResult};

/// One file's worth of tokens.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    pub filename: String,
    pub tokens: Vec<Token>,
}

impl SourceUnit {
    pub fn new(filename: impl Into<String>, tokens: Vec<Token>) -> Self {
        SourceUnit {
            filename: filename.into(),
            tokens,
        }
    }
}

/// Parse each unit on the rayon pool.
///
/// Results are in input order; one unit's error does not affect the others.
pub fn parse_files(
    map: &TokenMap,
    units: &[SourceUnit],
    options: ParseOptions,
) -> Vec<ParseResult<File>> {
    units
        .par_iter()
        .map(|unit| parse_file_with_options(map, &unit.filename, &unit.tokens, options))
        .collect()
}

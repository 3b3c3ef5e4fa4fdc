use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::errors::{self, Error, Result};

/// Number of distinct bases in the alphabet.
pub const N_BASES: usize = 4;

/// DNA base, encoded as integer (A = 0, C = 1, G = 2, T = 3).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Base {
    A = 0,
    C = 1,
    G = 2,
    T = 3,
}

impl Base {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Index of the base into a per-base probability vector.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl TryFrom<u8> for Base {
    type Error = u8;

    fn try_from(code: u8) -> std::result::Result<Self, u8> {
        match code {
            0 => Ok(Base::A),
            1 => Ok(Base::C),
            2 => Ok(Base::G),
            3 => Ok(Base::T),
            _ => Err(code),
        }
    }
}

impl TryFrom<char> for Base {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, char> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            _ => Err(c),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        };
        write!(f, "{}", c)
    }
}

/// Validate integer encoded bases, returning the decoded sequence.
/// Fails with `Error::InvalidBase` at the first code outside of [0, 3].
pub(crate) fn decode(codes: &[u8]) -> Result<Vec<Base>> {
    codes
        .iter()
        .enumerate()
        .map(|(position, &code)| {
            Base::try_from(code).map_err(|code| errors::invalid_base(position, code))
        })
        .collect()
}

/// An observed sequence of integer encoded bases.
///
/// Parsed from text, either as nucleotide letters (`"ACGT"`) or as integer codes separated
/// by commas or whitespace (`"0, 1, 2, 3"`).
#[derive(Derefable, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Sequence(#[deref] Vec<u8>);

impl Sequence {
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        self.0
            .iter()
            .map(|&code| Base::try_from(code).expect("bug: sequence contains invalid base code"))
    }
}

impl TryFrom<Vec<u8>> for Sequence {
    type Error = Error;

    fn try_from(codes: Vec<u8>) -> Result<Self> {
        decode(&codes)?;
        Ok(Sequence(codes))
    }
}

impl From<Vec<Base>> for Sequence {
    fn from(bases: Vec<Base>) -> Self {
        Sequence(bases.into_iter().map(Base::code).collect())
    }
}

impl FromStr for Sequence {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let is_code_list = s
            .chars()
            .any(|c| c.is_ascii_digit() || c == ',' || c == '-' || c == '.');

        let codes = if is_code_list {
            s.split(|c: char| c == ',' || c.is_whitespace())
                .filter(|token| !token.is_empty())
                .enumerate()
                .map(|(position, token)| match token.parse::<u8>() {
                    Ok(code) if Base::try_from(code).is_ok() => Ok(code),
                    _ => Err(errors::invalid_base(position, token)),
                })
                .collect::<Result<Vec<u8>>>()?
        } else {
            s.chars()
                .filter(|c| !c.is_whitespace())
                .enumerate()
                .map(|(position, c)| {
                    Base::try_from(c)
                        .map(Base::code)
                        .map_err(|c| errors::invalid_base(position, c))
                })
                .collect::<Result<Vec<u8>>>()?
        };

        Ok(Sequence(codes))
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.bases().join(""))
    }
}

use rand::{Rng, RngCore};

use rowforge_core::{ColumnData, Error, LogicalType, Result};
use rowforge_engine::{
    BindContext, Binding, ParamKind, ParamMap, ParamSpec, RowGenerator, TableFunction,
};

const RANDOM_STRING_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("length", ParamKind::UInt, false),
    ParamSpec::new("min_length", ParamKind::UInt, false),
    ParamSpec::new("max_length", ParamKind::UInt, false),
    ParamSpec::new("casing", ParamKind::String, false),
];

const LOWER_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPER_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const MIXED_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Table function producing random alphabetic strings.
pub struct RandomString;

impl TableFunction for RandomString {
    fn name(&self) -> &'static str {
        "random_string"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        RANDOM_STRING_PARAMS
    }

    fn bind(&self, ctx: &BindContext<'_>) -> Result<Binding> {
        let length = length_policy(&ctx.params)?;
        let casing = match ctx.params.get_str("casing") {
            Some(input) => Casing::parse(input)?,
            None => Casing::Lower,
        };
        Ok(Binding::scan(
            LogicalType::Varchar,
            Box::new(StringDraw { length, casing }),
        ))
    }
}

/// How long each generated string should be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LengthPolicy {
    Exact(u64),
    Bounded { min: u64, max: u64 },
}

impl LengthPolicy {
    fn draw(&self, rng: &mut dyn RngCore) -> u64 {
        match *self {
            LengthPolicy::Exact(length) => length,
            LengthPolicy::Bounded { min, max } => rng.random_range(min..=max),
        }
    }
}

/// Resolves the three length parameters into one policy.
///
/// `length` is exclusive with the range bounds. An open upper bound is
/// widened to 20 for short minimums and to twice the minimum otherwise,
/// saturating near the top of the range.
fn length_policy(params: &ParamMap<'_>) -> Result<LengthPolicy> {
    let length = params.get_u64("length");
    let min_length = params.get_u64("min_length");
    let max_length = params.get_u64("max_length");

    if let Some(length) = length {
        if min_length.is_some() || max_length.is_some() {
            return Err(Error::InvalidInput(
                "length cannot be combined with min_length or max_length".to_string(),
            ));
        }
        return Ok(LengthPolicy::Exact(length));
    }

    let min = min_length.unwrap_or(1);
    let max = match max_length {
        Some(max) => max,
        None if min < 10 => 20,
        None if min < u64::MAX / 2 => min * 2,
        None => u64::MAX,
    };
    if min > max {
        return Err(Error::InvalidInput(
            "min_length cannot be greater than max_length".to_string(),
        ));
    }
    Ok(LengthPolicy::Bounded { min, max })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Casing {
    Lower,
    Upper,
    Mixed,
}

impl Casing {
    fn parse(input: &str) -> Result<Self> {
        match input {
            "lower" => Ok(Casing::Lower),
            "upper" => Ok(Casing::Upper),
            "mixed" => Ok(Casing::Mixed),
            _ => Err(Error::InvalidInput(
                "casing must be one of: lower, upper, mixed".to_string(),
            )),
        }
    }

    fn alphabet(self) -> &'static str {
        match self {
            Casing::Lower => LOWER_ALPHABET,
            Casing::Upper => UPPER_ALPHABET,
            Casing::Mixed => MIXED_ALPHABET,
        }
    }
}

struct StringDraw {
    length: LengthPolicy,
    casing: Casing,
}

impl RowGenerator for StringDraw {
    fn fill(&self, count: usize, rng: &mut dyn RngCore) -> ColumnData {
        let chars: Vec<char> = self.casing.alphabet().chars().collect();
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let length = self.length.draw(rng);
            let mut value = String::with_capacity(length as usize);
            for _ in 0..length {
                let index = rng.random_range(0..chars.len());
                value.push(chars[index]);
            }
            values.push(value);
        }
        ColumnData::Text(values)
    }
}

use rand::{Rng, RngCore};

use rowforge_core::{ColumnData, Error, LogicalType, Result};
use rowforge_engine::{
    BindContext, Binding, ParamKind, ParamMap, ParamSpec, RowGenerator, TableFunction,
};

const RANDOM_INT_PARAMS: &[ParamSpec] = &[
    ParamSpec::new("min", ParamKind::Int, false),
    ParamSpec::new("max", ParamKind::Int, false),
    ParamSpec::new("distribution", ParamKind::String, false),
];

/// Table function producing random 32-bit integers within a closed range.
pub struct RandomInt;

impl TableFunction for RandomInt {
    fn name(&self) -> &'static str {
        "random_int"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        RANDOM_INT_PARAMS
    }

    fn bind(&self, ctx: &BindContext<'_>) -> Result<Binding> {
        let min = bound(&ctx.params, "min")?.unwrap_or(i32::MIN);
        let max = bound(&ctx.params, "max")?.unwrap_or(i32::MAX);
        if min > max {
            return Err(Error::InvalidInput(
                "min must be less than or equal to max".to_string(),
            ));
        }
        let distribution = match ctx.params.get_str("distribution") {
            Some(input) => Distribution::parse(input)?,
            None => Distribution::Uniform,
        };
        Ok(Binding::scan(
            LogicalType::Integer,
            Box::new(IntDraw {
                min,
                max,
                distribution,
            }),
        ))
    }
}

fn bound(params: &ParamMap<'_>, key: &str) -> Result<Option<i32>> {
    match params.get_i64(key) {
        Some(value) => i32::try_from(value)
            .map(Some)
            .map_err(|_| Error::InvalidInput(format!("{key} does not fit a 32-bit integer"))),
        None => Ok(None),
    }
}

/// Probability distributions the integer generator can draw from.
///
/// The set is closed; parsing is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Distribution {
    Uniform,
}

impl Distribution {
    fn parse(input: &str) -> Result<Self> {
        if input.eq_ignore_ascii_case("uniform") {
            Ok(Distribution::Uniform)
        } else {
            Err(Error::InvalidInput(format!(
                "unknown probability distribution \"{input}\""
            )))
        }
    }
}

struct IntDraw {
    min: i32,
    max: i32,
    distribution: Distribution,
}

impl RowGenerator for IntDraw {
    fn fill(&self, count: usize, rng: &mut dyn RngCore) -> ColumnData {
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            let value = match self.distribution {
                Distribution::Uniform => rng.random_range(self.min..=self.max),
            };
            values.push(value);
        }
        ColumnData::Int32(values)
    }
}

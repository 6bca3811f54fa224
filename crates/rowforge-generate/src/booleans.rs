use rand::{Rng, RngCore};

use rowforge_core::{ColumnData, Error, LogicalType, Result};
use rowforge_engine::{BindContext, Binding, ParamKind, ParamSpec, RowGenerator, TableFunction};

const RANDOM_BOOL_PARAMS: &[ParamSpec] =
    &[ParamSpec::new("true_probability", ParamKind::Float, false)];

/// Table function producing weighted random booleans.
pub struct RandomBool;

impl TableFunction for RandomBool {
    fn name(&self) -> &'static str {
        "random_bool"
    }

    fn parameters(&self) -> &'static [ParamSpec] {
        RANDOM_BOOL_PARAMS
    }

    fn bind(&self, ctx: &BindContext<'_>) -> Result<Binding> {
        let probability = ctx.params.get_f64("true_probability").unwrap_or(0.5);
        if !(0.0..=1.0).contains(&probability) {
            return Err(Error::InvalidInput(
                "true_probability must be between 0 and 1".to_string(),
            ));
        }
        // The endpoints never draw; the whole column collapses to a constant.
        let draw = if probability == 0.0 {
            BoolDraw::Constant(false)
        } else if probability == 1.0 {
            BoolDraw::Constant(true)
        } else {
            BoolDraw::Weighted(probability)
        };
        Ok(Binding::scan(LogicalType::Boolean, Box::new(draw)))
    }
}

enum BoolDraw {
    Constant(bool),
    Weighted(f64),
}

impl RowGenerator for BoolDraw {
    fn fill(&self, count: usize, rng: &mut dyn RngCore) -> ColumnData {
        let values = match *self {
            BoolDraw::Constant(value) => vec![value; count],
            BoolDraw::Weighted(probability) => {
                let mut values = Vec::with_capacity(count);
                for _ in 0..count {
                    values.push(rng.random_bool(probability));
                }
                values
            }
        };
        ColumnData::Bool(values)
    }
}

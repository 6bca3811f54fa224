//! Built-in row-generator table functions.
//!
//! Three scalar generators produce a single `value` column of random
//! booleans, integers, or strings, each paired with the virtual rowid the
//! engine adds. The fourth function, `random_data`, mirrors the shape of a
//! cataloged table by rewriting itself into a composed plan over the scalar
//! generators.

pub mod booleans;
pub mod mirror;
pub mod numbers;
pub mod strings;

pub use booleans::RandomBool;
pub use mirror::RandomData;
pub use numbers::RandomInt;
pub use strings::RandomString;

use rowforge_engine::FunctionRegistry;

/// Registers every built-in table function on the given registry.
pub fn register_all(registry: &mut FunctionRegistry) {
    registry.register(Box::new(RandomBool));
    registry.register(Box::new(RandomInt));
    registry.register(Box::new(RandomString));
    registry.register(Box::new(RandomData));
}

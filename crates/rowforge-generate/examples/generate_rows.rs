use std::env;

use rowforge_core::{Catalog, LogicalType, TableDef};
use rowforge_engine::{Executor, FunctionRegistry, Query, ScanColumn};
use rowforge_generate::register_all;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut rows = 10_u64;
    let mut seed: Option<u64> = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rows" => {
                rows = args
                    .next()
                    .ok_or("missing value for --rows")?
                    .parse::<u64>()?;
            }
            "--seed" => {
                seed = Some(args.next().ok_or("missing value for --seed")?.parse::<u64>()?);
            }
            _ => return Err("unexpected argument".into()),
        }
    }

    let mut registry = FunctionRegistry::new();
    register_all(&mut registry);
    println!("functions: {}", registry.names().join(", "));

    let mut catalog = Catalog::new();
    catalog.create_table(
        TableDef::new("users")
            .with_column("id", LogicalType::Integer)
            .with_column("active", LogicalType::Boolean)
            .with_column("handle", LogicalType::Varchar),
    );

    let mut executor = match seed {
        Some(seed) => Executor::with_seed(registry, catalog, seed),
        None => Executor::new(registry, catalog),
    };

    let strings = executor.run(
        &Query::new("random_string")
            .with_args(json!({"min_length": 4, "max_length": 12}))
            .select(&[ScanColumn::RowId, ScanColumn::Value])
            .limit(rows),
    )?;
    println!("rowid\tvalue");
    for row in &strings.rows {
        println!("{}\t{}", row[0], row[1]);
    }

    let mirrored = executor.run(
        &Query::new("random_data")
            .with_args(json!({"schema_source": "users"}))
            .limit(rows),
    )?;
    let header: Vec<&str> = mirrored
        .columns
        .iter()
        .map(|column| column.name.as_str())
        .collect();
    println!("{}", header.join("\t"));
    for row in &mirrored.rows {
        let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
        println!("{}", cells.join("\t"));
    }

    Ok(())
}

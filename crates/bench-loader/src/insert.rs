//! SQL text generation for the benchmark table.

use bench_core::{Schema, SqliteDdl};

/// Generate the CREATE TABLE statement for `schema`.
///
/// Column 0 (the identifier) is the primary key.
pub fn generate_create_table(schema: &Schema, table_name: &str) -> String {
    let columns: Vec<String> = schema
        .column_definitions(&SqliteDdl)
        .iter()
        .enumerate()
        .map(|(i, def)| {
            if i == 0 {
                format!("\"{}\" {} NOT NULL PRIMARY KEY", def.name, def.storage_type)
            } else {
                format!("\"{}\" {} NOT NULL", def.name, def.storage_type)
            }
        })
        .collect();

    format!("CREATE TABLE \"{table_name}\" ({})", columns.join(", "))
}

/// Generate the parameterized INSERT statement for `schema`.
pub fn generate_insert(schema: &Schema, table_name: &str) -> String {
    let columns = schema.column_names();
    let placeholders: Vec<String> = (1..=columns.len()).map(|i| format!("?{i}")).collect();

    format!(
        "INSERT INTO \"{}\" ({}) VALUES ({})",
        table_name,
        columns
            .iter()
            .map(|c| format!("\"{c}\""))
            .collect::<Vec<_>>()
            .join(", "),
        placeholders.join(", ")
    )
}

/// Generate the row count query.
pub fn generate_count(table_name: &str) -> String {
    format!("SELECT COUNT(*) FROM \"{table_name}\"")
}

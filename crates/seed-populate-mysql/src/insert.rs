//! SQL for the `search` table: batched INSERT and DDL.

use mysql_async::Value;
use seed_generator::CompanyRecord;

/// Default batch size for INSERT operations.
pub const DEFAULT_BATCH_SIZE: usize = 100_000;

/// Default number of batches per transaction.
pub const DEFAULT_COMMIT_INTERVAL: usize = 8;

/// Build one multi-row INSERT for `rows`, sized to the batch.
///
/// Values are inlined as escaped literals rather than bound as parameters: a
/// full batch carries far more values than the server's placeholder limit.
/// Every row also sets `created_at` and `updated_at` to `NOW()`.
pub fn build_insert_sql(table: &str, columns: &[&str], rows: &[CompanyRecord]) -> String {
    let column_list = columns
        .iter()
        .map(|c| format!("`{c}`"))
        .collect::<Vec<_>>()
        .join(", ");

    let rows_sql: Vec<String> = rows
        .iter()
        .map(|row| {
            let values: Vec<String> = row_values(row)
                .iter()
                .map(|value| value.as_sql(false))
                .collect();
            format!("({}, NOW(), NOW())", values.join(", "))
        })
        .collect();

    format!(
        "INSERT INTO `{table}` ({column_list}, `created_at`, `updated_at`) VALUES {}",
        rows_sql.join(", ")
    )
}

/// Values of one record in column order.
pub fn row_values(row: &CompanyRecord) -> Vec<Value> {
    row.column_values()
        .into_iter()
        .map(|value| Value::Bytes(value.into_bytes()))
        .collect()
}

/// Generate CREATE TABLE statement for the `search` table.
///
/// Includes the FULLTEXT and lookup indexes the search service queries by.
pub fn generate_create_table(table_name: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS `{table_name}` (\n\
         \x20 `id` BIGINT UNSIGNED NOT NULL AUTO_INCREMENT,\n\
         \x20 `company_id` VARCHAR(255) NOT NULL,\n\
         \x20 `name` VARCHAR(255) NOT NULL,\n\
         \x20 `status` VARCHAR(255) NOT NULL,\n\
         \x20 `address_line_1` VARCHAR(255) NULL,\n\
         \x20 `address_line_2` VARCHAR(255) NULL,\n\
         \x20 `city` VARCHAR(255) NULL,\n\
         \x20 `region` VARCHAR(255) NULL,\n\
         \x20 `postal_code` VARCHAR(255) NULL,\n\
         \x20 `country` VARCHAR(255) NULL,\n\
         \x20 `revenue` DECIMAL(15, 2) NULL,\n\
         \x20 `employees` INT NULL,\n\
         \x20 `incorporated_on` DATE NULL,\n\
         \x20 `last_filed_on` DATE NULL,\n\
         \x20 `created_at` TIMESTAMP NULL,\n\
         \x20 `updated_at` TIMESTAMP NULL,\n\
         \x20 PRIMARY KEY (`id`),\n\
         \x20 UNIQUE KEY `{table_name}_company_id_unique` (`company_id`),\n\
         \x20 FULLTEXT KEY `idx_{table_name}_name` (`name`),\n\
         \x20 KEY `idx_{table_name}_company_id` (`company_id`),\n\
         \x20 KEY `idx_{table_name}_city` (`city`),\n\
         \x20 KEY `idx_{table_name}_postal_code` (`postal_code`)\n\
         ) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4"
    )
}

/// Generate DROP TABLE statement.
pub fn generate_drop_table(table_name: &str) -> String {
    format!("DROP TABLE IF EXISTS `{table_name}`")
}

//! Database initialisation.

use rusqlite::Connection;

use crate::{Error, budget::create_budget_table, expense::create_expense_table};

/// Create the tables for the domain models if they do not exist and turn on
/// foreign key enforcement for `connection`.
///
/// Expenses reference their budget with a foreign key, so inserting an expense
/// for a budget that does not exist fails.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    connection.pragma_update(None, "foreign_keys", true)?;

    let transaction = connection.unchecked_transaction()?;

    create_budget_table(&transaction)?;
    create_expense_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

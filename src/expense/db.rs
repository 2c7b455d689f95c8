//! Database operations for expenses.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    budget::BudgetId,
    expense::{Expense, ExpenseId, ExpenseName, NewExpense},
};

/// Insert an expense and return it with its generated ID.
///
/// # Errors
/// Returns an error if there is an SQL error, e.g. the budget does not exist.
pub fn create_expense(new_expense: NewExpense, connection: &Connection) -> Result<Expense, Error> {
    connection.execute(
        "INSERT INTO expense (name, amount, budget_id, created_at) VALUES (?1, ?2, ?3, ?4);",
        (
            new_expense.name.as_ref(),
            new_expense.amount,
            new_expense.budget_id,
            new_expense.created_at,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Expense {
        id,
        name: new_expense.name,
        amount: new_expense.amount,
        budget_id: new_expense.budget_id,
        created_at: new_expense.created_at,
    })
}

/// Retrieve the expenses for a budget, newest first.
pub fn get_expenses_for_budget(
    budget_id: BudgetId,
    connection: &Connection,
) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(
            "SELECT id, name, amount, budget_id, created_at FROM expense
            WHERE budget_id = :budget_id
            ORDER BY created_at DESC, id DESC;",
        )?
        .query_map(&[(":budget_id", &budget_id)], map_row)?
        .map(|maybe_expense| maybe_expense.map_err(|error| error.into()))
        .collect()
}

/// Delete an expense by ID. Returns an error if the expense doesn't exist.
pub fn delete_expense(expense_id: ExpenseId, connection: &Connection) -> Result<(), Error> {
    let rows_affected = connection.execute("DELETE FROM expense WHERE id = ?1", [expense_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingExpense);
    }

    Ok(())
}

/// Initialize the expense table and indexes.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS expense (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            amount REAL NOT NULL,
            budget_id INTEGER NOT NULL,
            created_at TEXT NOT NULL,
            FOREIGN KEY(budget_id) REFERENCES budget(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_expense_budget_id ON expense(budget_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let amount = row.get(2)?;
    let budget_id = row.get(3)?;
    let created_at = row.get(4)?;

    Ok(Expense {
        id,
        name: ExpenseName::new_unchecked(&raw_name),
        amount,
        budget_id,
        created_at,
    })
}

#[cfg(test)]
mod expense_query_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        budget::{BudgetName, NewBudget, create_budget},
        db::initialize,
        expense::{ExpenseName, NewExpense},
    };

    use super::{create_expense, delete_expense, get_expenses_for_budget};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn create_test_budget(name: &str, connection: &Connection) -> i64 {
        create_budget(
            NewBudget {
                name: BudgetName::new_unchecked(name),
                amount: 100.0,
            },
            connection,
        )
        .expect("Could not create test budget")
        .id
    }

    fn new_expense(name: &str, budget_id: i64, created_at: time::Date) -> NewExpense {
        NewExpense {
            name: ExpenseName::new_unchecked(name),
            amount: 12.34,
            budget_id,
            created_at,
        }
    }

    #[test]
    fn create_expense_succeeds() {
        let connection = get_test_connection();
        let budget_id = create_test_budget("Food", &connection);

        let expense = create_expense(
            new_expense("Lunch", budget_id, date!(2025 - 03 - 04)),
            &connection,
        )
        .expect("Could not create expense");

        assert!(expense.id > 0);
        assert_eq!(expense.name, ExpenseName::new_unchecked("Lunch"));
        assert_eq!(expense.budget_id, budget_id);
    }

    #[test]
    fn created_at_is_stored_as_calendar_date() {
        let connection = get_test_connection();
        let budget_id = create_test_budget("Food", &connection);
        create_expense(
            new_expense("Lunch", budget_id, date!(2025 - 03 - 04)),
            &connection,
        )
        .unwrap();

        let stored: String = connection
            .query_row("SELECT created_at FROM expense", [], |row| row.get(0))
            .unwrap();

        assert_eq!(stored, "2025-03-04");
    }

    #[test]
    fn create_expense_fails_for_missing_budget() {
        let connection = get_test_connection();

        let result = create_expense(new_expense("Lunch", 42, date!(2025 - 03 - 04)), &connection);

        assert!(
            matches!(result, Err(Error::SqlError(_))),
            "want SQL error, got {result:?}"
        );
    }

    #[test]
    fn get_expenses_returns_newest_first_for_one_budget() {
        let connection = get_test_connection();
        let food = create_test_budget("Food", &connection);
        let rent = create_test_budget("Rent", &connection);
        let older = create_expense(
            new_expense("Older", food, date!(2025 - 03 - 01)),
            &connection,
        )
        .unwrap();
        let newer = create_expense(
            new_expense("Newer", food, date!(2025 - 03 - 02)),
            &connection,
        )
        .unwrap();
        let same_day = create_expense(
            new_expense("Same day", food, date!(2025 - 03 - 02)),
            &connection,
        )
        .unwrap();
        create_expense(
            new_expense("Rent", rent, date!(2025 - 03 - 03)),
            &connection,
        )
        .unwrap();

        let expenses = get_expenses_for_budget(food, &connection);

        assert_eq!(expenses, Ok(vec![same_day, newer, older]));
    }

    #[test]
    fn delete_expense_succeeds() {
        let connection = get_test_connection();
        let budget_id = create_test_budget("Food", &connection);
        let expense = create_expense(
            new_expense("Lunch", budget_id, date!(2025 - 03 - 04)),
            &connection,
        )
        .unwrap();

        assert_eq!(delete_expense(expense.id, &connection), Ok(()));
        assert_eq!(get_expenses_for_budget(budget_id, &connection), Ok(vec![]));
    }

    #[test]
    fn delete_missing_expense_fails() {
        let connection = get_test_connection();

        assert_eq!(
            delete_expense(999, &connection),
            Err(Error::DeleteMissingExpense)
        );
    }
}

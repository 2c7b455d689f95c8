//! Database operations for budgets.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    budget::{Budget, BudgetId, BudgetName, BudgetSummary, NewBudget},
};

/// Create a budget and return it with its generated ID.
pub fn create_budget(new_budget: NewBudget, connection: &Connection) -> Result<Budget, Error> {
    connection.execute(
        "INSERT INTO budget (name, amount) VALUES (?1, ?2);",
        (new_budget.name.as_ref(), new_budget.amount),
    )?;

    let id = connection.last_insert_rowid();

    Ok(Budget {
        id,
        name: new_budget.name,
        amount: new_budget.amount,
    })
}

/// Retrieve a single budget by ID.
pub fn get_budget(budget_id: BudgetId, connection: &Connection) -> Result<Budget, Error> {
    connection
        .prepare("SELECT id, name, amount FROM budget WHERE id = :id;")?
        .query_row(&[(":id", &budget_id)], map_row)
        .map_err(|error| error.into())
}

const SUMMARY_QUERY: &str = "SELECT budget.id, budget.name, budget.amount,
        COALESCE(SUM(expense.amount), 0.0), COUNT(expense.id)
    FROM budget
    LEFT JOIN expense ON expense.budget_id = budget.id";

/// Retrieve a budget by ID along with the totals of its expenses.
pub fn get_budget_summary(
    budget_id: BudgetId,
    connection: &Connection,
) -> Result<BudgetSummary, Error> {
    connection
        .prepare(&format!(
            "{SUMMARY_QUERY} WHERE budget.id = :id GROUP BY budget.id;"
        ))?
        .query_row(&[(":id", &budget_id)], map_summary_row)
        .map_err(|error| error.into())
}

/// Retrieve all budgets with the totals of their expenses, ordered alphabetically by name.
pub fn get_budget_summaries(connection: &Connection) -> Result<Vec<BudgetSummary>, Error> {
    connection
        .prepare(&format!(
            "{SUMMARY_QUERY} GROUP BY budget.id ORDER BY budget.name ASC, budget.id ASC;"
        ))?
        .query_map([], map_summary_row)?
        .map(|maybe_summary| maybe_summary.map_err(|error| error.into()))
        .collect()
}

/// Initialize the budget table.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS budget (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            amount REAL NOT NULL
        )",
        (),
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let amount = row.get(2)?;

    Ok(Budget {
        id,
        name: BudgetName::new_unchecked(&raw_name),
        amount,
    })
}

fn map_summary_row(row: &Row) -> Result<BudgetSummary, rusqlite::Error> {
    let budget = map_row(row)?;
    let total_spent = row.get(3)?;
    let expense_count = row.get(4)?;

    Ok(BudgetSummary {
        budget,
        total_spent,
        expense_count,
    })
}

#[cfg(test)]
mod budget_query_tests {
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        budget::{BudgetName, BudgetSummary, NewBudget},
        db::initialize,
        expense::{ExpenseName, NewExpense, create_expense},
    };

    use super::{create_budget, get_budget, get_budget_summaries, get_budget_summary};

    fn get_test_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn new_budget(name: &str, amount: f64) -> NewBudget {
        NewBudget {
            name: BudgetName::new_unchecked(name),
            amount,
        }
    }

    fn add_expense(budget_id: i64, amount: f64, connection: &Connection) {
        create_expense(
            NewExpense {
                name: ExpenseName::new_unchecked("Thing"),
                amount,
                budget_id,
                created_at: date!(2025 - 01 - 01),
            },
            connection,
        )
        .expect("Could not create test expense");
    }

    #[test]
    fn create_budget_succeeds() {
        let connection = get_test_connection();

        let budget = create_budget(new_budget("Groceries", 400.0), &connection)
            .expect("Could not create budget");

        assert!(budget.id > 0);
        assert_eq!(budget.name, BudgetName::new_unchecked("Groceries"));
        assert_eq!(budget.amount, 400.0);
    }

    #[test]
    fn get_budget_succeeds() {
        let connection = get_test_connection();
        let inserted = create_budget(new_budget("Groceries", 400.0), &connection).unwrap();

        let selected = get_budget(inserted.id, &connection);

        assert_eq!(Ok(inserted), selected);
    }

    #[test]
    fn get_budget_with_invalid_id_returns_not_found() {
        let connection = get_test_connection();
        let inserted = create_budget(new_budget("Groceries", 400.0), &connection).unwrap();

        let selected = get_budget(inserted.id + 123, &connection);

        assert_eq!(selected, Err(Error::NotFound));
    }

    #[test]
    fn summary_totals_expenses() {
        let connection = get_test_connection();
        let budget = create_budget(new_budget("Groceries", 400.0), &connection).unwrap();
        add_expense(budget.id, 10.5, &connection);
        add_expense(budget.id, 20.0, &connection);

        let summary = get_budget_summary(budget.id, &connection);

        assert_eq!(
            summary,
            Ok(BudgetSummary {
                budget,
                total_spent: 30.5,
                expense_count: 2,
            })
        );
    }

    #[test]
    fn summary_of_budget_without_expenses_is_zero() {
        let connection = get_test_connection();
        let budget = create_budget(new_budget("Groceries", 400.0), &connection).unwrap();

        let summary = get_budget_summary(budget.id, &connection).unwrap();

        assert_eq!(summary.total_spent, 0.0);
        assert_eq!(summary.expense_count, 0);
    }

    #[test]
    fn summary_of_missing_budget_returns_not_found() {
        let connection = get_test_connection();

        assert_eq!(get_budget_summary(42, &connection), Err(Error::NotFound));
    }

    #[test]
    fn summaries_are_ordered_by_name_and_only_count_own_expenses() {
        let connection = get_test_connection();
        let rent = create_budget(new_budget("Rent", 1200.0), &connection).unwrap();
        let food = create_budget(new_budget("Food", 300.0), &connection).unwrap();
        add_expense(rent.id, 1200.0, &connection);
        add_expense(food.id, 12.0, &connection);
        add_expense(food.id, 8.0, &connection);

        let summaries = get_budget_summaries(&connection).unwrap();

        assert_eq!(
            summaries,
            vec![
                BudgetSummary {
                    budget: food,
                    total_spent: 20.0,
                    expense_count: 2,
                },
                BudgetSummary {
                    budget: rent,
                    total_spent: 1200.0,
                    expense_count: 1,
                },
            ]
        );
    }
}

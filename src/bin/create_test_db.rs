use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use spendwise::{
    BudgetName, ExpenseName, NewBudget, NewExpense, create_budget, create_expense, initialize_db,
};

/// A utility for creating a test database for the Spendwise server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

const BUDGETS: [(&str, f64, &[(&str, f64)]); 3] = [
    (
        "Home Decor",
        5000.0,
        &[("Bedroom Decor", 1000.0), ("Lamp", 89.99), ("Rug", 349.5)],
    ),
    ("Groceries", 400.0, &[("Milk", 3.2), ("Bread", 4.5)]),
    ("Holiday", 2500.0, &[]),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    if output_path
        .extension()
        .is_none_or(|extension| extension.is_empty())
    {
        eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
        exit(1);
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let connection = Connection::open(output_path)?;

    initialize_db(&connection)?;

    let today = OffsetDateTime::now_utc().date();

    for (name, amount, expenses) in BUDGETS {
        println!("Creating budget {name} with {} expenses...", expenses.len());

        let budget = create_budget(
            NewBudget {
                name: BudgetName::new(name)?,
                amount,
            },
            &connection,
        )?;

        for (days_ago, (expense_name, expense_amount)) in expenses.iter().enumerate() {
            create_expense(
                NewExpense {
                    name: ExpenseName::new(expense_name)?,
                    amount: *expense_amount,
                    budget_id: budget.id,
                    created_at: today - Duration::days(days_ago as i64),
                },
                &connection,
            )?;
        }
    }

    println!("Success!");

    Ok(())
}

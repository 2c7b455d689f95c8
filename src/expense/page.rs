//! The page for a budget's expenses and the overview fragment it reloads.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    budget::{BudgetId, BudgetSummary, budget_card, get_budget_summary},
    endpoints::{self, format_endpoint},
    expense::{
        Expense, ExpenseDraft,
        add::{ADD_EXPENSE_FORM_CONTAINER_ID, EXPENSES_CHANGED_EVENT, add_expense_form_view},
        get_expenses_for_budget,
    },
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, dollar_input_styles, format_currency, link,
    },
    navigation::NavBar,
};

/// The ID of the element that holds a budget's summary and expenses.
const EXPENSE_OVERVIEW_ID: &str = "expense-overview";

/// The state needed for the expenses page and overview.
#[derive(Debug, Clone)]
pub struct BudgetExpensesState {
    /// The database connection for reading budgets and expenses.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BudgetExpensesState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the page with a budget's summary, its expenses and the Add Expense form.
///
/// # Errors
/// Returns [Error::NotFound] if the budget does not exist.
pub async fn get_budget_expenses_page(
    State(state): State<BudgetExpensesState>,
    Path(budget_id): Path<BudgetId>,
) -> Result<Response, Error> {
    let (summary, expenses) = load_overview(&state, budget_id)?;

    Ok(budget_expenses_view(&summary, &expenses).into_response())
}

/// Render just the overview of a budget so it can be swapped in after expenses change.
pub async fn get_expense_overview(
    State(state): State<BudgetExpensesState>,
    Path(budget_id): Path<BudgetId>,
) -> Response {
    match load_overview(&state, budget_id) {
        Ok((summary, expenses)) => expense_overview_view(&summary, &expenses).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

fn load_overview(
    state: &BudgetExpensesState,
    budget_id: BudgetId,
) -> Result<(BudgetSummary, Vec<Expense>), Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let summary = get_budget_summary(budget_id, &connection)?;
    let expenses = get_expenses_for_budget(budget_id, &connection)?;

    Ok((summary, expenses))
}

fn budget_expenses_view(summary: &BudgetSummary, expenses: &[Expense]) -> Markup {
    let budget_id = summary.budget.id;
    let nav_bar = NavBar::new(endpoints::BUDGET_EXPENSES_VIEW).into_html();
    let add_form = add_expense_form_view(budget_id, &ExpenseDraft::default());

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-xl"
            {
                p { (link(endpoints::BUDGETS_VIEW, "Back to budgets")) }
                h1 class="mt-2 text-3xl font-bold" { (summary.budget.name) }
            }

            div class="grid w-full max-w-screen-xl grid-cols-1 gap-5 lg:grid-cols-3"
            {
                div id=(ADD_EXPENSE_FORM_CONTAINER_ID) { (add_form) }

                div class="lg:col-span-2"
                {
                    (expense_overview_view(summary, expenses))
                }
            }
        }
    };

    base(
        summary.budget.name.as_ref(),
        &[dollar_input_styles()],
        &content,
    )
}

fn expense_overview_view(summary: &BudgetSummary, expenses: &[Expense]) -> Markup {
    let overview_url = format_endpoint(endpoints::EXPENSE_OVERVIEW, summary.budget.id);
    let trigger = format!("{EXPENSES_CHANGED_EVENT} from:body");

    html! {
        div
            id=(EXPENSE_OVERVIEW_ID)
            hx-get=(overview_url)
            hx-trigger=(trigger)
            hx-swap="outerHTML"
            class="flex flex-col gap-5"
        {
            div class=(CARD_STYLE) { (budget_card(summary)) }

            @if expenses.is_empty() {
                p class="text-gray-500 dark:text-gray-400" data-empty-expenses
                {
                    "No expenses yet. Add one to start tracking your spending."
                }
            } @else {
                div class="relative overflow-x-auto shadow-md sm:rounded-lg"
                {
                    table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
                    {
                        thead class=(TABLE_HEADER_STYLE)
                        {
                            tr
                            {
                                th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Name" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                            }
                        }

                        tbody
                        {
                            @for expense in expenses {
                                (expense_row(expense))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let delete_url = format_endpoint(endpoints::DELETE_EXPENSE, expense.id);
    let confirm_message = format!("Are you sure you want to delete '{}'?", expense.name);

    html! {
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
        {
            td class=(TABLE_CELL_STYLE) { (expense.created_at) }
            td class=(TABLE_CELL_STYLE) { (expense.name) }
            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm=(confirm_message)
                    hx-target="#alert-container"
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

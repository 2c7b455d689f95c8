//! The page listing all budgets.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    budget::{
        BudgetSummary, budget_card, create::create_budget_form_view, db::get_budget_summaries,
        domain::BudgetFormData,
    },
    endpoints::{self, format_endpoint},
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base, dollar_input_styles},
    navigation::NavBar,
};

/// The state needed for the budgets page.
#[derive(Debug, Clone)]
pub struct BudgetsPageState {
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for BudgetsPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Render the page listing budgets and the form for creating one.
pub async fn get_budgets_page(State(state): State<BudgetsPageState>) -> Result<Response, Error> {
    let connection = state.db_connection.lock().map_err(|error| {
        tracing::error!("could not acquire database lock: {error}");
        Error::DatabaseLockError
    })?;

    let summaries = get_budget_summaries(&connection)?;

    Ok(budgets_view(&summaries).into_response())
}

fn budgets_view(summaries: &[BudgetSummary]) -> Markup {
    let nav_bar = NavBar::new(endpoints::BUDGETS_VIEW).into_html();
    let create_form = create_budget_form_view(&BudgetFormData::default(), "");

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold w-full max-w-screen-xl" { "My Budgets" }

            div class="grid w-full max-w-screen-xl grid-cols-1 gap-5 md:grid-cols-2 lg:grid-cols-3"
            {
                div id="create-budget" { (create_form) }

                @for summary in summaries {
                    a
                        href=(format_endpoint(endpoints::BUDGET_EXPENSES_VIEW, summary.budget.id))
                        class={ (CARD_STYLE) " hover:shadow-md" }
                        data-budget-id=(summary.budget.id)
                    {
                        (budget_card(summary))
                    }
                }
            }

            @if summaries.is_empty() {
                p class="text-gray-500 dark:text-gray-400"
                {
                    "You have no budgets yet. Create one to start tracking expenses."
                }
            }
        }
    };

    base("Budgets", &[dollar_input_styles()], &content)
}

#[cfg(test)]
mod budgets_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::Selector;

    use crate::{
        budget::{BudgetName, NewBudget, create_budget},
        db::initialize,
        endpoints,
        test_utils::{
            assert_content_type, assert_form_input, assert_form_submit_button,
            assert_hx_endpoint, assert_valid_html, must_get_form, parse_html_document,
        },
    };

    use super::{BudgetsPageState, get_budgets_page};

    fn get_state() -> BudgetsPageState {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).unwrap();

        BudgetsPageState {
            db_connection: Arc::new(Mutex::new(connection)),
        }
    }

    #[tokio::test]
    async fn renders_create_budget_form() {
        let state = get_state();

        let response = get_budgets_page(State(state)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_content_type(&response, "text/html; charset=utf-8");
        let html = parse_html_document(response).await;
        assert_valid_html(&html);
        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_BUDGET, "hx-post");
        assert_form_input(&form, "name", "text");
        assert_form_input(&form, "amount", "text");
        assert_form_submit_button(&form);
    }

    #[tokio::test]
    async fn links_to_each_budgets_expenses() {
        let state = get_state();
        for name in ["Rent", "Food"] {
            create_budget(
                NewBudget {
                    name: BudgetName::new_unchecked(name),
                    amount: 100.0,
                },
                &state.db_connection.lock().unwrap(),
            )
            .unwrap();
        }

        let response = get_budgets_page(State(state)).await.unwrap();

        let html = parse_html_document(response).await;
        let links = html
            .select(&Selector::parse("a[data-budget-id]").unwrap())
            .map(|link| link.value().attr("href").unwrap_or_default().to_owned())
            .collect::<Vec<_>>();
        // Budgets are listed by name, so "Food" (ID 2) comes first.
        assert_eq!(links, vec!["/budgets/2/expenses", "/budgets/1/expenses"]);
    }
}

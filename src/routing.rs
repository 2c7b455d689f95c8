//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    budget::{create_budget_endpoint, get_budgets_page},
    endpoints,
    expense::{
        add_expense_endpoint, delete_expense_endpoint, get_budget_expenses_page,
        get_expense_overview,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::BUDGETS_VIEW, get(get_budgets_page))
        .route(
            endpoints::BUDGET_EXPENSES_VIEW,
            get(get_budget_expenses_page),
        )
        .route(endpoints::EXPENSE_OVERVIEW, get(get_expense_overview))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(endpoints::POST_BUDGET, post(create_budget_endpoint))
        .route(endpoints::POST_EXPENSE, post(add_expense_endpoint))
        .route(endpoints::DELETE_EXPENSE, delete(delete_expense_endpoint));

    page_routes
        .merge(api_routes)
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the budgets page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::BUDGETS_VIEW)
}

//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/budgets/{budget_id}/expenses', use [format_endpoint].

/// The root route which redirects to the budgets page.
pub const ROOT: &str = "/";
/// The page listing all budgets.
pub const BUDGETS_VIEW: &str = "/budgets";
/// The page for a budget's expenses, including the form for adding an expense.
pub const BUDGET_EXPENSES_VIEW: &str = "/budgets/{budget_id}/expenses";
/// The fragment with a budget's summary and expenses that is reloaded when expenses change.
pub const EXPENSE_OVERVIEW: &str = "/budgets/{budget_id}/expenses/overview";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create a budget.
pub const POST_BUDGET: &str = "/api/budgets";
/// The route to add an expense to a budget.
pub const POST_EXPENSE: &str = "/api/budgets/{budget_id}/expenses";
/// The route to delete an expense.
pub const DELETE_EXPENSE: &str = "/api/expenses/{expense_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/budgets/{budget_id}', '{budget_id}' is the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|end| param_start + end + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

//! The card that summarises a budget's spending.

use maud::{Markup, html};

use crate::{budget::BudgetSummary, html::format_currency};

/// Render the name, planned amount, spending and a progress bar for a budget.
pub fn budget_card(summary: &BudgetSummary) -> Markup {
    let remaining = summary.remaining();
    let item_label = if summary.expense_count == 1 {
        "Item"
    } else {
        "Items"
    };
    let progress_style = if remaining < 0.0 {
        "h-2 rounded-full bg-red-600"
    } else {
        "h-2 rounded-full bg-blue-600"
    };

    html! {
        div class="flex flex-col gap-4"
        {
            div class="flex justify-between items-center"
            {
                div
                {
                    h2 class="font-bold text-lg" data-budget-name { (summary.budget.name) }
                    p class="text-sm text-gray-500 dark:text-gray-400" data-expense-count
                    {
                        (summary.expense_count) " " (item_label)
                    }
                }

                p class="font-bold text-lg text-blue-600 dark:text-blue-400" data-budget-amount
                {
                    (format_currency(summary.budget.amount))
                }
            }

            div
            {
                div class="flex justify-between mb-2 text-xs text-gray-500 dark:text-gray-400"
                {
                    span data-total-spent { (format_currency(summary.total_spent)) " Spent" }
                    span data-remaining { (format_currency(remaining)) " Remaining" }
                }

                div class="w-full h-2 rounded-full bg-gray-200 dark:bg-gray-700"
                {
                    div
                        class=(progress_style)
                        style={ "width: " (format!("{:.0}", summary.percent_spent())) "%;" }
                    {}
                }
            }
        }
    }
}

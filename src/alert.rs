//! Alert system for displaying success and error messages to users.
//!
//! Alerts are transient toasts shown in the `#alert-container` element that
//! every page includes (see [crate::html::base]). Error responses for htmx
//! requests are routed into the container with `hx-target-error`, while
//! successful responses that also carry other content place the alert with an
//! out-of-band swap.

use axum::response::{IntoResponse, Response};
use maud::{Markup, html};

/// The ID of the element that alerts are rendered into.
pub const ALERT_CONTAINER_ID: &str = "alert-container";

/// A message to show the user after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    SuccessSimple { message: String },
    Error { message: String, details: String },
    ErrorSimple { message: String },
}

impl Alert {
    fn is_error(&self) -> bool {
        matches!(self, Alert::Error { .. } | Alert::ErrorSimple { .. })
    }

    fn message(&self) -> &str {
        match self {
            Alert::SuccessSimple { message }
            | Alert::Error { message, .. }
            | Alert::ErrorSimple { message } => message,
        }
    }

    fn details(&self) -> &str {
        match self {
            Alert::Error { details, .. } => details,
            Alert::SuccessSimple { .. } | Alert::ErrorSimple { .. } => "",
        }
    }

    /// Render the alert for swapping into the alert container.
    pub fn into_html(self) -> Markup {
        let (container_style, role) = if self.is_error() {
            (
                "flex items-start gap-3 p-4 mb-4 text-sm rounded-lg shadow \
                text-red-800 bg-red-50 border border-red-300 \
                dark:bg-gray-800 dark:text-red-400 dark:border-red-800",
                "alert",
            )
        } else {
            (
                "flex items-start gap-3 p-4 mb-4 text-sm rounded-lg shadow \
                text-green-800 bg-green-50 border border-green-300 \
                dark:bg-gray-800 dark:text-green-400 dark:border-green-800",
                "status",
            )
        };
        let details = self.details();

        html! {
            div class=(container_style) role=(role) data-alert
            {
                div class="flex-1"
                {
                    p class="font-medium" { (self.message()) }

                    @if !details.is_empty() {
                        p class="mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Close"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex \
                        items-center justify-center h-8 w-8 hover:opacity-75"
                    onclick="this.closest('[data-alert]').remove()"
                {
                    "✕"
                }
            }
        }
    }

    /// Render the alert so that htmx swaps it into the alert container out-of-band,
    /// regardless of where the rest of the response is swapped.
    pub fn into_oob_html(self) -> Markup {
        html! {
            div id=(ALERT_CONTAINER_ID) hx-swap-oob="innerHTML"
            {
                (self.into_html())
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}

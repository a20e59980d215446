//! Plain-text rendering of the answer panel.

use crate::controller::{QueryController, RequestStatus};

/// Shown while an exchange is in flight.
pub const LOADING_PLACEHOLDER: &str = "Retrieving official Groww documents…";

/// Shown when there is neither an answer nor a call in flight.
pub const EMPTY_PLACEHOLDER: &str = "Your answer will appear here.";

/// Footer line under every answer panel.
pub const DISCLAIMER: &str = "Facts-only. No investment advice.";

/// Label of the submit affordance for `status`.
pub fn submit_label(status: RequestStatus) -> &'static str {
    match status {
        RequestStatus::Loading => "Looking up…",
        _ => "Get answer",
    }
}

/// Render heading, error, answer panel and disclaimer as text.
pub fn render(controller: &QueryController) -> String {
    let mut lines = vec![controller.heading().to_string(), String::new()];

    if let Some(error) = controller.error_message() {
        lines.push(format!("Error: {}", error));
        lines.push(String::new());
    }

    if controller.status() == RequestStatus::Loading {
        lines.push(LOADING_PLACEHOLDER.to_string());
    }

    match controller.answer() {
        Some(answer) => {
            lines.push(answer.answer.clone());
            if let Some(ref updated) = answer.last_updated {
                lines.push(updated.clone());
            }

            let citations = controller.ranked_citations();
            if !citations.is_empty() {
                lines.push(String::new());
                lines.push("Sources:".to_string());
                lines.extend(citations.iter().map(|url| format!("  - {}", url)));
            }
        }
        None if controller.status() != RequestStatus::Loading => {
            lines.push(EMPTY_PLACEHOLDER.to_string());
        }
        None => {}
    }

    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());
    lines.join("\n")
}

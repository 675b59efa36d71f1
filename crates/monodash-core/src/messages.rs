// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Fixed user-facing text.
//
// Every failure a list component can hit collapses into one of two banners.
// Nothing from the underlying error (status code, transport detail) reaches
// the screen; that goes to the log instead.

use crate::types::ResourceKind;

/// Placeholder shown while a fetch cycle is in flight.
pub fn loading(kind: ResourceKind) -> String {
    format!("Loading {}...", kind.plural())
}

/// Banner shown after a failed list fetch. Drives the auto-retry loop.
pub fn retrying(kind: ResourceKind) -> String {
    format!(
        "{} is starting up... Retrying automatically.",
        kind.service_label()
    )
}

/// Banner shown after a failed create submission.
pub fn create_failed(kind: ResourceKind) -> String {
    format!("Failed to create {}", kind.singular())
}

/// Shown when the service returned an empty list.
pub fn empty(kind: ResourceKind) -> String {
    format!(
        "No {} found. Create your first {}!",
        kind.plural(),
        kind.singular()
    )
}

/// Section heading for a list component.
pub fn heading(kind: ResourceKind) -> String {
    match kind {
        ResourceKind::Users => format!("User Management ({})", kind.service_label()),
        ResourceKind::Orders => format!("Order Management ({})", kind.service_label()),
    }
}

/// Label of the button that opens the creation form.
pub fn open_form(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Users => "Add User",
        ResourceKind::Orders => "Create Order",
    }
}

/// Label of the form's submit button.
pub fn submit_form(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Users => "Create User",
        ResourceKind::Orders => "Create Order",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        assert_eq!(loading(ResourceKind::Users), "Loading users...");
        assert_eq!(loading(ResourceKind::Orders), "Loading orders...");
    }

    #[test]
    fn banners_name_the_service() {
        assert_eq!(
            retrying(ResourceKind::Users),
            "Service A is starting up... Retrying automatically."
        );
        assert_eq!(create_failed(ResourceKind::Orders), "Failed to create order");
    }

    #[test]
    fn empty_state() {
        assert_eq!(
            empty(ResourceKind::Users),
            "No users found. Create your first user!"
        );
    }
}

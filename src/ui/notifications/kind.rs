// SPDX-License-Identifier: MPL-2.0
//! Static registry of notification kinds.
//!
//! Every kind is a fixed template: category, severity, title, default
//! message, icon and offered action. The category alone decides which
//! surface presents the kind, so a given kind looks the same no matter
//! which code path raised it.

use super::notification::Severity;

/// Broad class of a notification kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// User input rejected by a form validator.
    Validation,
    /// Credential, lockout and rate-limit failures.
    Auth,
    /// Empty query, missing filter, no results.
    Search,
    /// Backend request failures.
    Api,
    /// Connectivity failures.
    Network,
    /// Authorization denials.
    Permission,
    /// Panics and unhandled background failures.
    Runtime,
    /// Anything not otherwise classified.
    General,
}

/// Presentation mechanism for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// Blocking dialog, one at a time.
    Modal,
    /// Annotation attached to a form field, one at a time.
    Inline,
    /// Transient card in the toast stack; toasts accumulate.
    Toast,
}

impl Category {
    /// Returns the one surface used for this category.
    #[must_use]
    pub fn surface(self) -> Surface {
        match self {
            Category::Validation | Category::Search => Surface::Inline,
            Category::Auth
            | Category::Api
            | Category::Network
            | Category::Permission
            | Category::Runtime => Surface::Modal,
            Category::General => Surface::Toast,
        }
    }
}

/// Control affordance offered alongside a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    None,
    /// Move input focus to the annotated field.
    Focus,
    /// Offer to retry the failed operation.
    Retry,
    /// Offer to contact support.
    Contact,
    /// Ask the user to wait before trying again.
    Cooldown,
    /// Ask the user to pick an option.
    Select,
}

/// Immutable notification template.
#[derive(Debug, PartialEq, Eq)]
pub struct NotificationKind {
    pub key: &'static str,
    pub category: Category,
    pub severity: Severity,
    pub title: &'static str,
    pub message: &'static str,
    /// Symbolic glyph name, resolved by the view layer.
    pub icon: &'static str,
    pub action: Action,
}

impl NotificationKind {
    /// Returns the surface this kind is presented on.
    #[must_use]
    pub fn surface(&self) -> Surface {
        self.category.surface()
    }
}

/// Key of the fallback kind used for unknown keys.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

/// Key of the kind used for panics and unhandled background failures.
pub const UNCAUGHT_ERROR: &str = "UNCAUGHT_ERROR";

const fn kind(
    key: &'static str,
    category: Category,
    severity: Severity,
    title: &'static str,
    message: &'static str,
    icon: &'static str,
    action: Action,
) -> NotificationKind {
    NotificationKind {
        key,
        category,
        severity,
        title,
        message,
        icon,
        action,
    }
}

static REGISTRY: &[NotificationKind] = &[
    // Form validation
    kind(
        "INVALID_EMAIL",
        Category::Validation,
        Severity::Error,
        "Invalid Email Format",
        "Please enter a valid email address",
        "envelope",
        Action::Focus,
    ),
    kind(
        "PASSWORD_TOO_SHORT",
        Category::Validation,
        Severity::Error,
        "Password Too Short",
        "Password must be at least 8 characters long",
        "lock",
        Action::Focus,
    ),
    kind(
        "PASSWORDS_NO_MATCH",
        Category::Validation,
        Severity::Error,
        "Passwords Do Not Match",
        "Passwords do not match",
        "exclamation-circle",
        Action::Focus,
    ),
    kind(
        "USERNAME_TAKEN",
        Category::Validation,
        Severity::Warning,
        "Username Already Taken",
        "This username is already registered",
        "user",
        Action::Focus,
    ),
    kind(
        "MISSING_FIELDS",
        Category::Validation,
        Severity::Error,
        "Missing Fields",
        "Please fill in all fields",
        "exclamation-circle",
        Action::Focus,
    ),
    kind(
        "INVALID_ACCOUNT_HASH",
        Category::Validation,
        Severity::Error,
        "Invalid Account Hash",
        "Account hash must be 20 characters long",
        "key",
        Action::Focus,
    ),
    // Authentication
    kind(
        "INVALID_CREDENTIALS",
        Category::Auth,
        Severity::Error,
        "Invalid Credentials",
        "Invalid email or password",
        "shield",
        Action::Retry,
    ),
    kind(
        "ACCOUNT_LOCKED",
        Category::Auth,
        Severity::Error,
        "Account Locked",
        "Your account has been temporarily locked",
        "lock",
        Action::Contact,
    ),
    kind(
        "TOO_MANY_ATTEMPTS",
        Category::Auth,
        Severity::Error,
        "Too Many Attempts",
        "Too many login attempts. Please try again later.",
        "clock",
        Action::Cooldown,
    ),
    // Search
    kind(
        "NO_SEARCH_TERM",
        Category::Search,
        Severity::Warning,
        "No Search Term",
        "Please enter a search term",
        "search",
        Action::Focus,
    ),
    kind(
        "NO_SEARCH_TYPES",
        Category::Search,
        Severity::Warning,
        "No Search Types",
        "Please select at least one search type",
        "filter",
        Action::Select,
    ),
    kind(
        "NO_RESULTS",
        Category::Search,
        Severity::Info,
        "No Results Found",
        "No results found for your search",
        "search",
        Action::None,
    ),
    // API
    kind(
        "API_TIMEOUT",
        Category::Api,
        Severity::Error,
        "Request Timeout",
        "Request timed out. Please try again.",
        "clock",
        Action::Retry,
    ),
    kind(
        "API_UNAVAILABLE",
        Category::Api,
        Severity::Error,
        "Service Unavailable",
        "Service temporarily unavailable. Please try again later.",
        "server",
        Action::Retry,
    ),
    kind(
        "RATE_LIMIT",
        Category::Api,
        Severity::Warning,
        "Rate Limit Reached",
        "Too many requests. Please wait before trying again.",
        "gauge",
        Action::Cooldown,
    ),
    kind(
        "DATABASE_ERROR",
        Category::Api,
        Severity::Error,
        "Database Error",
        "Database connection failed. Please try again.",
        "database",
        Action::Retry,
    ),
    // Network
    kind(
        "NETWORK_ERROR",
        Category::Network,
        Severity::Error,
        "Network Error",
        "Network connection failed. Please check your connection.",
        "wifi",
        Action::Retry,
    ),
    // Permission
    kind(
        "PERMISSION_DENIED",
        Category::Permission,
        Severity::Error,
        "Access Denied",
        "You do not have permission to perform this action.",
        "ban",
        Action::None,
    ),
    // Process-wide failures
    kind(
        UNCAUGHT_ERROR,
        Category::Runtime,
        Severity::Error,
        "Unexpected Error",
        "Something went wrong. Please try again.",
        "warning",
        Action::None,
    ),
    // Fallback
    kind(
        UNKNOWN_ERROR,
        Category::General,
        Severity::Info,
        "Notice",
        "An unexpected error occurred",
        "info",
        Action::None,
    ),
];

/// Returns every registered kind.
#[must_use]
pub fn all() -> &'static [NotificationKind] {
    REGISTRY
}

/// Looks up a kind by its exact key.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static NotificationKind> {
    REGISTRY.iter().find(|kind| kind.key == key)
}

/// Looks up a kind, falling back to [`UNKNOWN_ERROR`] for unmatched keys.
#[must_use]
pub fn resolve(key: &str) -> &'static NotificationKind {
    lookup(key).unwrap_or_else(unknown)
}

/// Returns the fallback kind.
#[must_use]
pub fn unknown() -> &'static NotificationKind {
    // The fallback is the last registry entry.
    &REGISTRY[REGISTRY.len() - 1]
}

/// Returns the kind used for panics and unhandled background failures.
#[must_use]
pub fn uncaught() -> &'static NotificationKind {
    &REGISTRY[REGISTRY.len() - 2]
}

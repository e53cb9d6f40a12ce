//! Centralized icon catalogue and the shared [`Icon`] primitive.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named icons available to dashboard surfaces.
pub enum IconName {
    /// Home/landing page.
    Home,
    /// Dashboard overview tiles.
    Dashboard,
    /// People/user list.
    People,
    /// Single person/avatar placeholder.
    Person,
    /// Settings gear.
    Settings,
    /// Notification bell.
    Alert,
    /// Hamburger navigation toggle.
    Navigation,
    /// Chevron pointing left.
    ChevronLeft,
    /// Chevron pointing right.
    ChevronRight,
    /// Chevron pointing down.
    ChevronDown,
    /// Close/dismiss cross.
    Dismiss,
    /// Success checkmark.
    Checkmark,
    /// Informational circle.
    Info,
    /// Warning triangle.
    Warning,
    /// Error circle.
    ErrorCircle,
    /// Search magnifier.
    Search,
    /// Theme palette.
    Palette,
    /// Tabular data grid.
    Table,
}

impl IconName {
    /// Stable kebab-case token used by the `data-ui-icon` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Dashboard => "dashboard",
            Self::People => "people",
            Self::Person => "person",
            Self::Settings => "settings",
            Self::Alert => "alert",
            Self::Navigation => "navigation",
            Self::ChevronLeft => "chevron-left",
            Self::ChevronRight => "chevron-right",
            Self::ChevronDown => "chevron-down",
            Self::Dismiss => "dismiss",
            Self::Checkmark => "checkmark",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::ErrorCircle => "error-circle",
            Self::Search => "search",
            Self::Palette => "palette",
            Self::Table => "table",
        }
    }

    /// Every icon in declaration order.
    pub fn all() -> &'static [IconName] {
        &ALL_ICONS
    }

    /// Resolves an icon from its token, returning `None` for unknown names.
    pub fn from_token(token: &str) -> Option<Self> {
        ALL_ICONS
            .iter()
            .copied()
            .find(|icon| icon.token() == token.trim())
    }

    fn path_data(self) -> &'static str {
        match self {
            Self::Home => "M3 10.5 12 3l9 7.5V21h-6v-6H9v6H3z",
            Self::Dashboard => "M3 3h8v8H3zM13 3h8v5h-8zM13 10h8v11h-8zM3 13h8v8H3z",
            Self::People => "M8 11a3 3 0 1 0 0-6 3 3 0 0 0 0 6zm8 0a3 3 0 1 0 0-6 3 3 0 0 0 0 6zM2 20c0-3 3-5 6-5s6 2 6 5zm12 0c0-2-1-3.5-2.5-4.5 1-.3 2-.5 2.5-.5 3 0 6 2 6 5z",
            Self::Person => "M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8zm-8 9c0-4 4-6 8-6s8 2 8 6z",
            Self::Settings => "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zm9 5v-2l-2.2-.6-.6-1.5 1.1-2-1.4-1.4-2 1.1-1.5-.6L14 3h-2l-.6 2.2-1.5.6-2-1.1-1.4 1.4 1.1 2-.6 1.5L3 11v2l2.2.6.6 1.5-1.1 2 1.4 1.4 2-1.1 1.5.6L10 21h2l.6-2.2 1.5-.6 2 1.1 1.4-1.4-1.1-2 .6-1.5z",
            Self::Alert => "M12 22a2 2 0 0 0 2-2h-4a2 2 0 0 0 2 2zm6-6V11a6 6 0 0 0-5-5.9V4h-2v1.1A6 6 0 0 0 6 11v5l-2 2v1h16v-1z",
            Self::Navigation => "M3 6h18v2H3zM3 11h18v2H3zM3 16h18v2H3z",
            Self::ChevronLeft => "M15 5l-7 7 7 7-1.5 1.5L5 12l8.5-8.5z",
            Self::ChevronRight => "M9 5l7 7-7 7 1.5 1.5L19 12l-8.5-8.5z",
            Self::ChevronDown => "M5 9l7 7 7-7-1.5-1.5L12 13 6.5 7.5z",
            Self::Dismiss => "M6.4 5 5 6.4 10.6 12 5 17.6 6.4 19l5.6-5.6 5.6 5.6 1.4-1.4-5.6-5.6L19 6.4 17.6 5 12 10.6z",
            Self::Checkmark => "M9 16.2 4.8 12l-1.4 1.4L9 19 21 7l-1.4-1.4z",
            Self::Info => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 15h-2v-6h2zm0-8h-2V7h2z",
            Self::Warning => "M1 21h22L12 2zm12-3h-2v-2h2zm0-4h-2v-4h2z",
            Self::ErrorCircle => "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20zm1 15h-2v-2h2zm0-4h-2V7h2z",
            Self::Search => "M15.5 14h-.8l-.3-.3A6.5 6.5 0 1 0 14 15.5l.3.3v.8l5 5 1.5-1.5zm-6 0a4.5 4.5 0 1 1 0-9 4.5 4.5 0 0 1 0 9z",
            Self::Palette => "M12 3a9 9 0 0 0 0 18c.8 0 1.5-.7 1.5-1.5 0-.4-.2-.7-.4-1-.2-.3-.4-.6-.4-1 0-.8.7-1.5 1.5-1.5H16a5 5 0 0 0 5-5c0-4.4-4-8-9-8z",
            Self::Table => "M3 4h18v16H3zm2 2v3h6V6zm8 0v3h6V6zm-8 5v3h6v-3zm8 0v3h6v-3zm-8 5v2h6v-2zm8 0v2h6v-2z",
        }
    }
}

const ALL_ICONS: [IconName; 18] = [
    IconName::Home,
    IconName::Dashboard,
    IconName::People,
    IconName::Person,
    IconName::Settings,
    IconName::Alert,
    IconName::Navigation,
    IconName::ChevronLeft,
    IconName::ChevronRight,
    IconName::ChevronDown,
    IconName::Dismiss,
    IconName::Checkmark,
    IconName::Info,
    IconName::Warning,
    IconName::ErrorCircle,
    IconName::Search,
    IconName::Palette,
    IconName::Table,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icon sizing tokens.
pub enum IconSize {
    /// 12px glyph.
    Xs,
    /// 16px glyph.
    Sm,
    /// 20px glyph.
    Md,
    /// 32px glyph.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    fn pixels(self) -> u8 {
        match self {
            Self::Xs => 12,
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 32,
        }
    }
}

#[component]
/// Inline SVG icon. Decorative unless an `aria_label` is supplied.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
) -> impl IntoView {
    let decorative = aria_label.is_none();
    let pixels = size.pixels();
    let class = match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("ui-icon {layout_class}"),
        _ => "ui-icon".to_string(),
    };

    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            width=pixels
            height=pixels
            role=if decorative { "presentation" } else { "img" }
            aria-hidden=if decorative { "true" } else { "false" }
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            <path d=icon.path_data() fill="currentColor"></path>
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_token_resolves_back_to_its_name() {
        for icon in ALL_ICONS {
            assert_eq!(IconName::from_token(icon.token()), Some(icon));
        }
    }

    #[test]
    fn unknown_icon_token_is_none() {
        assert_eq!(IconName::from_token("unicorn"), None);
    }
}

//! Theme catalogue, selection context, and persistence.

use std::rc::Rc;

use leptos::*;
use platform_host::{load_pref_with, save_pref_with, NoopPrefsStore, PrefsStore};

/// Preference key holding the selected theme identifier.
pub const THEME_PREF_KEY: &str = "dashboard.theme.v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Theme identifiers. `System` is the empty identifier and follows the OS colour scheme.
pub enum ThemeId {
    /// `""`
    #[default]
    System,
    /// `"dark"`
    Dark,
    /// `"light"`
    Light,
    /// `"red"`
    Red,
}

impl ThemeId {
    /// Identifier string written to `data-theme` and persisted.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "",
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Red => "red",
        }
    }

    /// Parses an identifier string.
    pub fn parse(id: &str) -> Option<Self> {
        find_theme(id).map(|theme| theme.id)
    }

    /// Toast colour mode for this theme.
    pub fn color_mode(self, prefers_dark: bool) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light | Self::Red => "light",
            Self::System if prefers_dark => "dark",
            Self::System => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Catalogue entry.
pub struct Theme {
    /// Display name.
    pub name: &'static str,
    /// Identifier.
    pub id: ThemeId,
    /// Accent swatch shown in the switcher.
    pub color: Option<&'static str>,
}

/// Every selectable theme in display order.
pub static THEMES: [Theme; 4] = [
    Theme {
        name: "System",
        id: ThemeId::System,
        color: None,
    },
    Theme {
        name: "Dark",
        id: ThemeId::Dark,
        color: Some("#1f2329"),
    },
    Theme {
        name: "Light",
        id: ThemeId::Light,
        color: Some("#f5f6f8"),
    },
    Theme {
        name: "Red",
        id: ThemeId::Red,
        color: Some("#c62828"),
    },
];

/// Looks up a catalogue entry by identifier string.
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id.as_str() == id)
}

/// Reads the persisted theme. Unknown or undecodable values count as unset.
pub fn load_persisted_theme(store: &dyn PrefsStore) -> Option<ThemeId> {
    match load_pref_with::<_, String>(store, THEME_PREF_KEY) {
        Ok(Some(id)) => {
            let parsed = ThemeId::parse(&id);
            if parsed.is_none() {
                logging::warn!("ignoring unknown persisted theme `{id}`");
            }
            parsed
        }
        Ok(None) => None,
        Err(err) => {
            logging::warn!("theme preference load failed: {err}");
            None
        }
    }
}

/// Persists `theme`; `None` removes the stored value.
pub fn persist_theme(store: &dyn PrefsStore, theme: Option<ThemeId>) {
    let result = match theme {
        Some(id) => save_pref_with(store, THEME_PREF_KEY, id.as_str()),
        None => store.delete(THEME_PREF_KEY),
    };
    if let Err(err) = result {
        logging::warn!("theme preference save failed: {err}");
    }
}

#[derive(Clone, Copy)]
/// Leptos context for reading and changing the active theme.
pub struct ThemeContext {
    /// Selected theme; `None` means the default.
    pub current: RwSignal<Option<ThemeId>>,
    /// Fallback used while nothing is selected.
    pub default_theme: ThemeId,
    prefs: StoredValue<Rc<dyn PrefsStore>>,
    prefers_dark: bool,
}

impl ThemeContext {
    /// Creates a context restored from `prefs`.
    pub fn new(default_theme: ThemeId, prefs: Rc<dyn PrefsStore>) -> Self {
        let restored = load_persisted_theme(prefs.as_ref());
        Self {
            current: create_rw_signal(restored),
            default_theme,
            prefs: store_value(prefs),
            prefers_dark: host_prefers_dark(),
        }
    }

    /// Selects `theme` (or clears the selection) and persists the choice.
    pub fn set_theme(&self, theme: Option<ThemeId>) {
        if self.current.get_untracked() == theme {
            return;
        }
        self.current.set(theme);
        self.prefs
            .with_value(|prefs| persist_theme(prefs.as_ref(), theme));
    }

    /// Tracked selection.
    pub fn theme(&self) -> Option<ThemeId> {
        self.current.get()
    }

    /// Tracked effective theme.
    pub fn effective(&self) -> ThemeId {
        self.current.get().unwrap_or(self.default_theme)
    }

    /// Catalogue entry for the effective theme.
    pub fn descriptor(&self) -> &'static Theme {
        let id = self.effective();
        THEMES.iter().find(|theme| theme.id == id).unwrap_or(&THEMES[0])
    }

    /// Tracked toast colour mode.
    pub fn color_mode(&self) -> &'static str {
        self.effective().color_mode(self.prefers_dark)
    }
}

#[cfg(target_arch = "wasm32")]
fn host_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

#[cfg(not(target_arch = "wasm32"))]
fn host_prefers_dark() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn apply_document_theme(theme: ThemeId) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };
    if let Err(err) = root.set_attribute("data-theme", theme.as_str()) {
        logging::warn!("document theme update failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_document_theme(_theme: ThemeId) {}

#[component]
/// Provides [`ThemeContext`] and keeps the document `data-theme` attribute in sync.
pub fn ThemeProvider(
    /// Theme used while nothing is selected.
    #[prop(optional)]
    default_theme: ThemeId,
    /// Store used to restore and persist the selection.
    #[prop(optional)]
    prefs: Option<Rc<dyn PrefsStore>>,
    children: Children,
) -> impl IntoView {
    let prefs = prefs.unwrap_or_else(|| Rc::new(NoopPrefsStore));
    let theme = ThemeContext::new(default_theme, prefs);
    provide_context(theme);

    create_effect(move |_| apply_document_theme(theme.effective()));

    children().into_view()
}

/// Returns the nearest [`ThemeContext`], or a detached default outside a provider.
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        logging::warn!("use_theme called outside ThemeProvider; using detached default theme");
        let detached = ThemeContext::new(ThemeId::default(), Rc::new(NoopPrefsStore));
        provide_context(detached);
        detached
    })
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn unknown_theme_lookup_is_none() {
        assert!(find_theme("purple").is_none());
        assert_eq!(find_theme("red").map(|theme| theme.name), Some("Red"));
        assert_eq!(find_theme("").map(|theme| theme.id), Some(ThemeId::System));
    }

    #[test]
    fn identifiers_round_trip_through_catalogue() {
        for theme in THEMES.iter() {
            assert_eq!(ThemeId::parse(theme.id.as_str()), Some(theme.id));
        }
    }

    #[test]
    fn color_mode_follows_theme_and_host_preference() {
        assert_eq!(ThemeId::Dark.color_mode(false), "dark");
        assert_eq!(ThemeId::Red.color_mode(true), "light");
        assert_eq!(ThemeId::System.color_mode(true), "dark");
        assert_eq!(ThemeId::System.color_mode(false), "light");
    }

    #[test]
    fn selection_is_persisted_and_restored() {
        let _ = leptos::create_runtime();
        let store = MemoryPrefsStore::default();

        let theme = ThemeContext::new(ThemeId::Light, Rc::new(store.clone()));
        assert_eq!(theme.theme(), None);
        assert_eq!(theme.effective(), ThemeId::Light);

        theme.set_theme(Some(ThemeId::Dark));
        let restored = ThemeContext::new(ThemeId::Light, Rc::new(store.clone()));
        assert_eq!(restored.theme(), Some(ThemeId::Dark));
        assert_eq!(restored.color_mode(), "dark");

        restored.set_theme(None);
        assert!(store.is_empty());
        assert_eq!(restored.descriptor().id, ThemeId::Light);
    }

    #[test]
    fn unknown_persisted_theme_counts_as_unset() {
        let store = MemoryPrefsStore::default();
        store
            .save_raw(THEME_PREF_KEY, "\"purple\"")
            .expect("seed preference");
        assert_eq!(load_persisted_theme(&store), None);

        store.save_raw(THEME_PREF_KEY, "{").expect("seed preference");
        assert_eq!(load_persisted_theme(&store), None);
    }

    #[test]
    fn consumer_without_provider_gets_default_theme() {
        let _ = leptos::create_runtime();
        let theme = use_theme();
        assert_eq!(theme.theme(), None);
        assert_eq!(theme.effective(), ThemeId::System);
    }
}

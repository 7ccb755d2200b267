use leptos::prelude::*;
use leptos_use::use_preferred_dark;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::prefs::{apply_lang, apply_theme, DocumentRoot};
use crate::{
    i18n::{strings, Lang, Strings},
    prefs::Theme,
};

/// Site-wide language and theme, provided as context by [`provide_settings`].
#[derive(Debug, Clone, Copy)]
pub struct Settings {
    lang: Signal<Lang>,
    set_lang: WriteSignal<Lang>,
    stored_theme: Signal<Option<Theme>>,
    set_theme: WriteSignal<Option<Theme>>,
    prefers_dark: Signal<bool>,
}

impl Settings {
    pub fn lang(&self) -> Lang {
        self.lang.get()
    }

    pub fn strings(&self) -> &'static Strings {
        strings(self.lang.get())
    }

    pub fn theme(&self) -> Theme {
        Theme::resolve(self.stored_theme.get(), self.prefers_dark.get())
    }

    pub fn toggle_lang(&self) {
        self.set_lang.update(|l| *l = l.toggled());
    }

    pub fn toggle_theme(&self) {
        let current = Theme::resolve(
            self.stored_theme.get_untracked(),
            self.prefers_dark.get_untracked(),
        );
        self.set_theme.set(Some(current.toggled()));
    }
}

pub fn provide_settings() -> Settings {
    #[cfg(feature = "hydrate")]
    let (lang, set_lang, _) = use_local_storage::<Lang, JsonSerdeWasmCodec>("lang");
    #[cfg(feature = "hydrate")]
    let (stored_theme, set_theme, _) =
        use_local_storage::<Option<Theme>, JsonSerdeWasmCodec>("theme");

    #[cfg(not(feature = "hydrate"))]
    let (lang, set_lang) = {
        let (lang, set_lang) = signal(Lang::default());
        (Signal::from(lang), set_lang)
    };
    #[cfg(not(feature = "hydrate"))]
    let (stored_theme, set_theme) = {
        let (theme, set_theme) = signal(None::<Theme>);
        (Signal::from(theme), set_theme)
    };

    let settings = Settings {
        lang,
        set_lang,
        stored_theme,
        set_theme,
        prefers_dark: use_preferred_dark(),
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        apply_theme(&DocumentRoot, settings.theme());
        apply_lang(&DocumentRoot, settings.lang());
    });

    provide_context(settings);
    settings
}

pub fn use_settings() -> Settings {
    expect_context::<Settings>()
}

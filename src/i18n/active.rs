//! Ambient "active language" of the current thread.
//!
//! Request handling passes the language explicitly; this slot exists only for
//! URL builders that read ambient state. It is thread-scoped, so it never
//! leaks between requests served on different threads. Guards must not be
//! held across an `.await`.

use std::cell::Cell;

use tracing::debug;

use crate::i18n::Language;

thread_local! {
    static ACTIVE: Cell<Option<Language>> = const { Cell::new(None) };
}

/// The language activated on this thread, if any.
pub fn current() -> Option<Language> {
    ACTIVE.with(|slot| slot.get())
}

/// Activate `language` until the returned guard is dropped.
///
/// Dropping the guard restores whatever was active before, including on
/// early return and panic unwinding.
#[must_use = "the previous language is restored as soon as the guard is dropped"]
pub fn activate(language: Language) -> LocaleGuard {
    let previous = ACTIVE.with(|slot| slot.replace(Some(language)));
    debug!(
        "Activated language {} (previous: {:?})",
        language,
        previous.map(|l| l.code())
    );
    LocaleGuard { previous }
}

/// Run `f` with `language` active, restoring the previous language afterwards.
pub fn with_locale<T>(language: Language, f: impl FnOnce() -> T) -> T {
    let _guard = activate(language);
    f()
}

/// Restores the previously active language on drop.
#[derive(Debug)]
pub struct LocaleGuard {
    previous: Option<Language>,
}

impl Drop for LocaleGuard {
    fn drop(&mut self) {
        ACTIVE.with(|slot| slot.set(self.previous));
    }
}

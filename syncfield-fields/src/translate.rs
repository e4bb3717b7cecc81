//! Translation of display strings.

/// Maps a raw display string to localized text.
///
/// Closures work directly:
///
/// ```
/// use syncfield_fields::Translate;
///
/// let upper = |text: &str| text.to_uppercase();
/// assert_eq!(upper.trans("name"), "NAME");
/// ```
pub trait Translate {
    fn trans(&self, text: &str) -> String;
}

/// Returns text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTranslation;

impl Translate for NoTranslation {
    fn trans(&self, text: &str) -> String {
        text.to_string()
    }
}

impl<F> Translate for F
where
    F: Fn(&str) -> String,
{
    fn trans(&self, text: &str) -> String {
        self(text)
    }
}

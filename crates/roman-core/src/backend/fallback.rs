use tracing::warn;

use super::{FallibleTransliterator, RuleBasedTransliterator, Transliterator};

/// Tries a fallible primary backend and, on any error, runs the rule-based
/// backend on the original input. Never surfaces the primary's failure.
pub struct WithFallback<P> {
    primary: P,
    fallback: RuleBasedTransliterator,
}

impl<P: FallibleTransliterator> WithFallback<P> {
    pub fn new(primary: P) -> Self {
        Self::with_fallback(primary, RuleBasedTransliterator::default())
    }

    pub fn with_fallback(primary: P, fallback: RuleBasedTransliterator) -> Self {
        Self { primary, fallback }
    }

    pub fn primary(&self) -> &P {
        &self.primary
    }
}

impl<P: FallibleTransliterator> Transliterator for WithFallback<P> {
    fn name(&self) -> &str {
        self.primary.name()
    }

    fn transliterate(&self, text: &str) -> String {
        match self.primary.try_transliterate(text) {
            Ok(out) => out,
            Err(e) => {
                warn!(
                    backend = self.primary.name(),
                    fallback = self.fallback.name(),
                    "primary backend failed, falling back: {e}"
                );
                self.fallback.transliterate(text)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;

    use super::super::testutil::StubBackend;
    use super::*;

    #[test]
    fn primary_result_wins() {
        let b = WithFallback::new(StubBackend::ok());
        assert_eq!(b.name(), "stub");
        assert_eq!(b.transliterate("abc"), "ABC");
        assert_eq!(b.primary().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failure_falls_back_to_rules() {
        let b = WithFallback::new(StubBackend::failing());
        assert_eq!(b.transliterate("السلام علیکم"), "Assalam Alaikum");
        assert_eq!(b.primary().calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn fallback_sees_original_input() {
        // Un-normalized input must reach the fallback untouched; the rule
        // engine does its own whitespace handling.
        let b = WithFallback::new(StubBackend::failing());
        assert_eq!(b.transliterate("  کیا \n ہے "), "kya hai");
        assert_eq!(b.transliterate(""), "");
    }
}

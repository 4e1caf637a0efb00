//! Title normalisation.
//!
//! Every pattern in the rule tables is written against the canonical form
//! produced here: trimmed, lower-cased, accents folded to ASCII and internal
//! whitespace collapsed to single spaces. "  Directora de Tecnología " and
//! "directora de tecnologia" therefore match the same rules.

use std::collections::HashMap;
use std::sync::RwLock;

use unicode_normalization::UnicodeNormalization;

/// Fold a raw title into its canonical matching form.
///
/// Characters that have no ASCII decomposition (symbols, emoji, CJK) are
/// dropped, like the combining marks left over from NFD decomposition.
pub fn normalise(raw: &str) -> String {
    let folded: String = raw
        .trim()
        .to_lowercase()
        .nfd()
        .filter(char::is_ascii)
        .collect();
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Memoising wrapper around [`normalise`].
///
/// The cache is append-only: once `capacity` entries are stored, further
/// inputs are normalised on every call and never inserted.
pub struct Normaliser {
    cache: RwLock<HashMap<String, String>>,
    capacity: usize,
}

impl Normaliser {
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
            capacity,
        }
    }

    pub fn normalise(&self, raw: &str) -> String {
        {
            let cache = self.cache.read().unwrap_or_else(|e| e.into_inner());
            if let Some(hit) = cache.get(raw) {
                return hit.clone();
            }
        }

        let value = normalise(raw);

        let mut cache = self.cache.write().unwrap_or_else(|e| e.into_inner());
        if cache.len() < self.capacity {
            cache.insert(raw.to_string(), value.clone());
        } else {
            tracing::trace!("Normaliser cache full ({} entries), not caching", self.capacity);
        }
        value
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_folds_case_accents_and_spacing() {
        assert_eq!(normalise("  Directora   de Tecnología "), "directora de tecnologia");
        assert_eq!(normalise("Diseño\tGráfico"), "diseno grafico");
        assert_eq!(normalise("RR. HH."), "rr. hh.");
    }

    #[test]
    fn test_empty_and_blank_inputs() {
        assert_eq!(normalise(""), "");
        assert_eq!(normalise("   \n\t "), "");
    }

    #[test]
    fn test_drops_non_ascii_symbols() {
        assert_eq!(normalise("€ CEO"), "ceo");
        assert_eq!(normalise("CTO 🚀"), "cto");
    }

    #[test]
    fn test_cache_stops_growing_at_capacity() {
        let n = Normaliser::new(2);
        assert_eq!(n.normalise("CEO"), "ceo");
        assert_eq!(n.normalise("CFO"), "cfo");
        assert_eq!(n.normalise("CTO"), "cto");
        assert_eq!(n.len(), 2);
        // Uncached inputs are still normalised correctly.
        assert_eq!(n.normalise("CTO"), "cto");
        assert_eq!(n.normalise("CEO"), "ceo");
    }

    proptest! {
        #[test]
        fn prop_normalise_is_idempotent(s in "\\PC{0,40}") {
            let once = normalise(&s);
            prop_assert_eq!(normalise(&once), once);
        }

        #[test]
        fn prop_cached_matches_uncached(s in "\\PC{0,40}") {
            let n = Normaliser::new(4);
            prop_assert_eq!(n.normalise(&s), normalise(&s));
            prop_assert_eq!(n.normalise(&s), normalise(&s));
        }
    }
}

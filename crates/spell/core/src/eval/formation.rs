//! Formation penalty: vowel balance plus clashing neighbours.

use crate::config::FormationConfig;
use crate::rune::RuneSymbol;

/// Returns true if two adjacent runes clash, in either order.
///
/// Fire clashes with Water and Ice; Light clashes with Void.
pub fn clashes(a: RuneSymbol, b: RuneSymbol) -> bool {
    use RuneSymbol::*;
    matches!(
        (a, b),
        (F, W) | (W, F) | (F, I) | (I, F) | (L, V) | (V, L)
    )
}

/// Penalty in `[0, max_penalty]` applied multiplicatively to instability.
///
/// ```text
/// vowel_ratio   = vowels / total
/// vowel_penalty = vowel_ratio < threshold ? scale * (threshold - vowel_ratio) / threshold : 0
/// clash         = clash_penalty * (number of clashing adjacent pairs)
/// penalty       = min(max_penalty, vowel_penalty + clash)
/// ```
pub fn formation_penalty(runes: &[RuneSymbol], config: &FormationConfig) -> f64 {
    if runes.is_empty() {
        return 0.0;
    }

    let vowels = runes.iter().filter(|r| r.is_vowel()).count();
    let vowel_ratio = vowels as f64 / runes.len() as f64;
    let vowel_penalty = if vowel_ratio < config.vowel_threshold && config.vowel_threshold > 0.0 {
        config.vowel_penalty_scale * (config.vowel_threshold - vowel_ratio) / config.vowel_threshold
    } else {
        0.0
    };

    let clash_pairs = runes.windows(2).filter(|w| clashes(w[0], w[1])).count();
    let clash = config.clash_penalty * clash_pairs as f64;

    (vowel_penalty + clash).min(config.max_penalty).max(0.0)
}

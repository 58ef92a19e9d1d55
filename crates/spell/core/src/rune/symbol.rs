//! The fixed 26-symbol rune alphabet.

use super::CatalogError;

/// One of the 26 rune symbols, `A` through `Z`.
///
/// The alphabet is closed: anything outside it is rejected with
/// [`CatalogError::UnknownRune`] at the parsing boundary, so every
/// `RuneSymbol` value resolves in a complete catalog.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum RuneSymbol {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
    L = 11,
    M = 12,
    N = 13,
    O = 14,
    P = 15,
    Q = 16,
    R = 17,
    S = 18,
    T = 19,
    U = 20,
    V = 21,
    W = 22,
    X = 23,
    Y = 24,
    Z = 25,
}

impl RuneSymbol {
    /// Total number of rune symbols.
    pub const COUNT: usize = 26;

    /// Returns all symbols in canonical order.
    pub const fn all() -> [RuneSymbol; Self::COUNT] {
        use RuneSymbol::*;
        [
            A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
        ]
    }

    #[inline]
    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Returns the symbol's letter.
    pub const fn as_char(self) -> char {
        (b'A' + self as u8) as char
    }

    /// Parses a single letter, case-insensitively.
    pub fn from_char(c: char) -> Result<Self, CatalogError> {
        if c.is_ascii_alphabetic() {
            let index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            Ok(Self::all()[index])
        } else {
            Err(CatalogError::UnknownRune(c.to_string()))
        }
    }

    /// Parses a rune sequence such as `"FAR"`, skipping whitespace.
    pub fn parse_sequence(raw: &str) -> Result<Vec<Self>, CatalogError> {
        raw.chars()
            .filter(|c| !c.is_whitespace())
            .map(Self::from_char)
            .collect()
    }

    /// Vowel-class symbols drive the formation penalty's balance check.
    pub const fn is_vowel(self) -> bool {
        matches!(
            self,
            Self::A | Self::E | Self::I | Self::O | Self::U | Self::Y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn char_round_trip_covers_alphabet() {
        for symbol in RuneSymbol::all() {
            assert_eq!(RuneSymbol::from_char(symbol.as_char()).unwrap(), symbol);
        }
        assert_eq!(RuneSymbol::from_char('f').unwrap(), RuneSymbol::F);
    }

    #[test]
    fn rejects_symbols_outside_alphabet() {
        assert!(matches!(
            RuneSymbol::from_char('7'),
            Err(CatalogError::UnknownRune(s)) if s == "7"
        ));
        assert!(RuneSymbol::parse_sequence("FA-R").is_err());
        assert!("FA".parse::<RuneSymbol>().is_err());
    }

    #[test]
    fn parses_sequences_ignoring_whitespace() {
        let runes = RuneSymbol::parse_sequence(" f a r ").unwrap();
        assert_eq!(runes, vec![RuneSymbol::F, RuneSymbol::A, RuneSymbol::R]);
    }

    #[test]
    fn vowel_class() {
        let vowels: Vec<_> = RuneSymbol::all()
            .into_iter()
            .filter(|s| s.is_vowel())
            .collect();
        assert_eq!(vowels.len(), 6);
        assert!(RuneSymbol::Y.is_vowel());
        assert!(!RuneSymbol::W.is_vowel());
    }
}

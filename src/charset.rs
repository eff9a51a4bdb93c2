//! Character class predicates shared by the scorer and the detector.

use unicode_normalization::UnicodeNormalization;

/// True for decimal digits in any script and for digit forms such as
/// superscripts or circled digits.
///
/// A numeric character counts as a digit when its compatibility form is a
/// single numeric character, so `٣` and `²` are digits while fractions
/// like `½` and Roman numerals like `Ⅻ` are not.
pub fn is_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    if !c.is_numeric() {
        return false;
    }
    let mut folded = std::iter::once(c).nfkc();
    matches!((folded.next(), folded.next()), (Some(f), None) if f.is_numeric())
}

/// True for ASCII punctuation.
pub fn is_special(c: char) -> bool {
    c.is_ascii_punctuation()
}

//! Code 128 symbol patterns.
//!
//! Each entry holds the 11 modules of a symbol, most significant bit first,
//! `1` being a bar module and `0` a space module.

use crate::bitfield::Bitfield;

/// Number of modules in every symbol except Stop.
pub const SYMBOL_LEN: u8 = 11;
/// Number of modules in the Stop symbol (Stop + final bar).
pub const STOP_LEN: u8 = 13;

/// Value of the first printable character (space) in subset B.
pub const FIRST_CHAR: u8 = b' ';
/// Value of the last printable character (`~`) in subset B.
pub const LAST_CHAR: u8 = b'~';

/// Symbol value of Start Code B, also the initial checksum weight.
pub const START_B: u8 = 104;
/// Modulus of the Code 128 check symbol.
pub const CHECKSUM_MOD: u32 = 103;

pub const START_B_PAT: Bitfield = Bitfield::new(SYMBOLS[START_B as usize] as u32, SYMBOL_LEN);
pub const STOP_PAT: Bitfield = Bitfield::new(0b1100011101011, STOP_LEN);

/// Patterns indexed by symbol value. Values 0 to 94 are the printable
/// characters of subset B (`value = byte - 32`), 95 to 105 the control
/// symbols only a checksum can land on.
pub const SYMBOLS: [u16; 106] = [
    0b11011001100, //   0 ' '
    0b11001101100, //   1 '!'
    0b11001100110, //   2 '"'
    0b10010011000, //   3 '#'
    0b10010001100, //   4 '$'
    0b10001001100, //   5 '%'
    0b10011001000, //   6 '&'
    0b10011000100, //   7 "'"
    0b10001100100, //   8 '('
    0b11001001000, //   9 ')'
    0b11001000100, //  10 '*'
    0b11000100100, //  11 '+'
    0b10110011100, //  12 ','
    0b10011011100, //  13 '-'
    0b10011001110, //  14 '.'
    0b10111001100, //  15 '/'
    0b10011101100, //  16 '0'
    0b10011100110, //  17 '1'
    0b11001110010, //  18 '2'
    0b11001011100, //  19 '3'
    0b11001001110, //  20 '4'
    0b11011100100, //  21 '5'
    0b11001110100, //  22 '6'
    0b11101101110, //  23 '7'
    0b11101001100, //  24 '8'
    0b11100101100, //  25 '9'
    0b11100100110, //  26 ':'
    0b11101100100, //  27 ';'
    0b11100110100, //  28 '<'
    0b11100110010, //  29 '='
    0b11011011000, //  30 '>'
    0b11011000110, //  31 '?'
    0b11000110110, //  32 '@'
    0b10100011000, //  33 'A'
    0b10001011000, //  34 'B'
    0b10001000110, //  35 'C'
    0b10110001000, //  36 'D'
    0b10001101000, //  37 'E'
    0b10001100010, //  38 'F'
    0b11010001000, //  39 'G'
    0b11000101000, //  40 'H'
    0b11000100010, //  41 'I'
    0b10110111000, //  42 'J'
    0b10110001110, //  43 'K'
    0b10001101110, //  44 'L'
    0b10111011000, //  45 'M'
    0b10111000110, //  46 'N'
    0b10001110110, //  47 'O'
    0b11101110110, //  48 'P'
    0b11010001110, //  49 'Q'
    0b11000101110, //  50 'R'
    0b11011101000, //  51 'S'
    0b11011100010, //  52 'T'
    0b11011101110, //  53 'U'
    0b11101011000, //  54 'V'
    0b11101000110, //  55 'W'
    0b11100010110, //  56 'X'
    0b11101101000, //  57 'Y'
    0b11101100010, //  58 'Z'
    0b11100011010, //  59 '['
    0b11101111010, //  60 '\\'
    0b11001000010, //  61 ']'
    0b11110001010, //  62 '^'
    0b10100110000, //  63 '_'
    0b10100001100, //  64 '`'
    0b10010110000, //  65 'a'
    0b10010000110, //  66 'b'
    0b10000101100, //  67 'c'
    0b10000100110, //  68 'd'
    0b10110010000, //  69 'e'
    0b10110000100, //  70 'f'
    0b10011010000, //  71 'g'
    0b10011000010, //  72 'h'
    0b10000110100, //  73 'i'
    0b10000110010, //  74 'j'
    0b11000010010, //  75 'k'
    0b11001010000, //  76 'l'
    0b11110111010, //  77 'm'
    0b11000010100, //  78 'n'
    0b10001111010, //  79 'o'
    0b10100111100, //  80 'p'
    0b10010111100, //  81 'q'
    0b10010011110, //  82 'r'
    0b10111100100, //  83 's'
    0b10011110100, //  84 't'
    0b10011110010, //  85 'u'
    0b11110100100, //  86 'v'
    0b11110010100, //  87 'w'
    0b11110010010, //  88 'x'
    0b11011011110, //  89 'y'
    0b11011110110, //  90 'z'
    0b11110110110, //  91 '{'
    0b10101111000, //  92 '|'
    0b10100011110, //  93 '}'
    0b10001011110, //  94 '~'
    0b10111101000, //  95 DEL
    0b10111100010, //  96 FNC 3
    0b11110101000, //  97 FNC 2
    0b11110100010, //  98 Shift A
    0b10111011110, //  99 Code C
    0b10111101110, // 100 FNC 4
    0b11101011110, // 101 Code A
    0b11110101110, // 102 FNC 1
    0b11010000100, // 103 Start A
    0b11010010000, // 104 Start B
    0b11010011100, // 105 Start C
];

/// Returns the subset B value of `c`, if it has one.
#[inline]
pub const fn value_of(c: char) -> Option<u8> {
    let code = c as u32;
    if code >= FIRST_CHAR as u32 && code <= LAST_CHAR as u32 {
        Some((code - FIRST_CHAR as u32) as u8)
    } else {
        None
    }
}

/// Returns the pattern of the symbol with the given value.
#[inline]
pub const fn pattern_of(value: u32) -> Option<Bitfield> {
    if (value as usize) < SYMBOLS.len() {
        Some(Bitfield::new(SYMBOLS[value as usize] as u32, SYMBOL_LEN))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_has_three_bars() {
        for (value, &pat) in SYMBOLS.iter().enumerate() {
            let bits = Bitfield::new(pat as u32, SYMBOL_LEN);
            let mut bars = 0;
            let mut prev = false;
            for bit in bits {
                if bit && !prev {
                    bars += 1;
                }
                prev = bit;
            }
            assert_eq!(bars, 3, "symbol {value} has {bars} bars");
            assert_eq!(pat >> 10, 1, "symbol {value} must start with a bar");
            assert_eq!(pat & 1, 0, "symbol {value} must end with a space");
        }
    }

    #[test]
    fn test_symbols_are_unique() {
        for (i, a) in SYMBOLS.iter().enumerate() {
            for b in &SYMBOLS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_value_of() {
        assert_eq!(value_of(' '), Some(0));
        assert_eq!(value_of('A'), Some(33));
        assert_eq!(value_of('~'), Some(94));
        assert_eq!(value_of('\x7f'), None);
        assert_eq!(value_of('\n'), None);
        assert_eq!(value_of('é'), None);
    }

    #[test]
    fn test_pattern_of() {
        assert_eq!(pattern_of(104).map(|b| b.bits()), Some(0b11010010000));
        assert_eq!(pattern_of(95).map(|b| b.bits()), Some(0b10111101000));
        assert!(pattern_of(106).is_none());
    }
}

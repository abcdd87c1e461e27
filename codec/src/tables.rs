//! диапазоны кодпоинтов и битовые шаблоны UTF-8
//!
//! | первый кодпоинт | последний кодпоинт | байт 1   | байт 2   | байт 3   | байт 4   |
//! |-----------------|--------------------|----------|----------|----------|----------|
//! | U+0000          | U+007F             | 0xxxxxxx |          |          |          |
//! | U+0080          | U+07FF             | 110xxxxx | 10xxxxxx |          |          |
//! | U+0800          | U+FFFF             | 1110xxxx | 10xxxxxx | 10xxxxxx |          |
//! | U+10000         | U+1FFFFF           | 11110xxx | 10xxxxxx | 10xxxxxx | 10xxxxxx |

/// описание последовательности определенной длины
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequence
{
    /// количество байт
    pub len: usize,
    /// старшие биты первого байта
    pub leading_bits: u8,
    /// маска значащих бит первого байта
    pub payload_mask: u8,
    /// наименьший кодпоинт, кодируемый последовательностью такой длины
    pub min: u32,
    /// наибольший кодпоинт
    pub max: u32,
}

/// старшие биты байта продолжения
pub const CONTINUATION_LEADING_BITS: u8 = 0b_1000_0000;
/// маска старших бит байта продолжения
pub const CONTINUATION_PATTERN_MASK: u8 = 0b_1100_0000;
/// маска значащих бит байта продолжения
pub const CONTINUATION_PAYLOAD_MASK: u8 = 0b_0011_1111;
/// количество значащих бит байта продолжения
pub const CONTINUATION_PAYLOAD_BITS: u32 = 6;

/// наибольший кодпоинт, который может быть закодирован
pub const MAX_CODE_POINT: u32 = 0x1F_FFFF;

/// последовательности, упорядоченные по длине: SEQUENCES[n - 1] - последовательность из n байт
pub static SEQUENCES: [Sequence; 4] = [
    Sequence {
        len: 1,
        leading_bits: 0b_0000_0000,
        payload_mask: 0b_0111_1111,
        min: 0x00_0000,
        max: 0x00_007F,
    },
    Sequence {
        len: 2,
        leading_bits: 0b_1100_0000,
        payload_mask: 0b_0001_1111,
        min: 0x00_0080,
        max: 0x00_07FF,
    },
    Sequence {
        len: 3,
        leading_bits: 0b_1110_0000,
        payload_mask: 0b_0000_1111,
        min: 0x00_0800,
        max: 0x00_FFFF,
    },
    Sequence {
        len: 4,
        leading_bits: 0b_1111_0000,
        payload_mask: 0b_0000_0111,
        min: 0x01_0000,
        max: MAX_CODE_POINT,
    },
];

/// последовательность, которой кодируется кодпоинт
#[inline(always)]
pub fn sequence_for(code: u32) -> Option<&'static Sequence>
{
    SEQUENCES.iter().find(|sequence| code <= sequence.max)
}

/// последовательность, которую открывает первый байт; None - если байт не может быть первым
#[inline(always)]
pub fn sequence_by_first_byte(first: u8) -> Option<&'static Sequence>
{
    // количество единиц до первого нуля: 0 - ASCII, 1 - байт продолжения, 5+ - недопустимо
    match first.leading_ones() {
        0 => Some(&SEQUENCES[0]),
        n @ 2 ..= 4 => Some(&SEQUENCES[n as usize - 1]),
        _ => None,
    }
}

/// длина последовательности по первому байту
#[inline(always)]
pub fn sequence_len(first: u8) -> Option<usize>
{
    sequence_by_first_byte(first).map(|sequence| sequence.len)
}

/// является ли байт байтом продолжения (10xxxxxx)
#[inline(always)]
pub fn is_continuation(byte: u8) -> bool
{
    byte & CONTINUATION_PATTERN_MASK == CONTINUATION_LEADING_BITS
}

use crate::tables::{self, MAX_CODE_POINT};

/// кодпоинт в виде u32. допустимы значения до U+1FFFFF включительно - всё, что вмещает
/// 4-байтовая последовательность UTF-8
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Codepoint(u32);

impl From<u32> for Codepoint
{
    #[inline]
    fn from(value: u32) -> Self
    {
        Self(value)
    }
}

impl From<Codepoint> for u32
{
    #[inline]
    fn from(value: Codepoint) -> Self
    {
        value.0
    }
}

impl From<char> for Codepoint
{
    #[inline]
    fn from(value: char) -> Self
    {
        Self(value as u32)
    }
}

/// суррогаты и значения выше U+10FFFF символами не являются
impl TryFrom<Codepoint> for char
{
    type Error = core::char::CharTryFromError;

    #[inline]
    fn try_from(value: Codepoint) -> Result<Self, Self::Error>
    {
        char::try_from(value.0)
    }
}

impl Codepoint
{
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.0
    }

    #[inline(always)]
    pub fn is_ascii(&self) -> bool
    {
        self.0 <= tables::SEQUENCES[0].max
    }

    /// может ли кодпоинт быть закодирован
    #[inline(always)]
    pub fn is_encodable(&self) -> bool
    {
        self.0 <= MAX_CODE_POINT
    }

    /// длина UTF-8 последовательности, None - если кодпоинт за пределами U+1FFFFF
    #[inline(always)]
    pub fn encoded_len(&self) -> Option<usize>
    {
        tables::sequence_for(self.0).map(|sequence| sequence.len)
    }
}

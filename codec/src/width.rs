use crate::error::{CodecError, CodecResult};

/// сколько байт занимает один кодпоинт в массиве кодпоинтов.
/// слоты хранятся в нативном порядке байт - так же, как в [u8], [u16] или [u32]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Width
{
    One = 1,
    #[default]
    Two = 2,
    Four = 4,
}

impl TryFrom<u32> for Width
{
    type Error = CodecError;

    fn try_from(value: u32) -> CodecResult<Self>
    {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            _ => Err(CodecError::BadWidth(value)),
        }
    }
}

impl From<Width> for u32
{
    #[inline]
    fn from(value: Width) -> Self
    {
        value as u32
    }
}

impl Width
{
    /// размер слота в байтах
    #[inline(always)]
    pub fn bytes(&self) -> usize
    {
        *self as usize
    }

    /// наибольшее значение, которое помещается в слот
    #[inline(always)]
    pub fn max_code(&self) -> u32
    {
        match self {
            Self::One => u8::MAX as u32,
            Self::Two => u16::MAX as u32,
            Self::Four => u32::MAX,
        }
    }

    /// количество целых слотов в хранилище указанного размера, неполный хвост не учитывается
    #[inline(always)]
    pub fn slots(&self, len: usize) -> usize
    {
        len / self.bytes()
    }

    /// прочитать кодпоинт из слота. длина слота должна совпадать с шириной
    #[inline(always)]
    pub fn read(&self, slot: &[u8]) -> u32
    {
        match self {
            Self::One => slot[0] as u32,
            Self::Two => u16::from_ne_bytes([slot[0], slot[1]]) as u32,
            Self::Four => u32::from_ne_bytes([slot[0], slot[1], slot[2], slot[3]]),
        }
    }

    /// записать кодпоинт в слот. значение должно помещаться в слот, см. max_code
    #[inline(always)]
    pub fn write(&self, slot: &mut [u8], code: u32)
    {
        match self {
            Self::One => slot[0] = code as u8,
            Self::Two => slot.copy_from_slice(&(code as u16).to_ne_bytes()),
            Self::Four => slot.copy_from_slice(&code.to_ne_bytes()),
        }
    }

    /// итератор по кодпоинтам хранилища
    #[inline]
    pub fn codes<'a>(&self, storage: &'a [u8]) -> impl Iterator<Item = u32> + 'a
    {
        let width = *self;

        storage
            .chunks_exact(width.bytes())
            .map(move |slot| width.read(slot))
    }
}

use thiserror::Error;

pub type CodecResult<T> = Result<T, CodecError>;

/// код успешного завершения операции
pub const CODE_OK: i32 = 0;

/// ошибки кодека
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError
{
    /// общая ошибка
    #[error("codec error")]
    Generic,
    /// недостаточно памяти. кодек ничего не выделяет, вариант зарезервирован
    #[error("not enough memory")]
    NoMemory,
    /// неизвестная опция
    #[error("unknown option: {0}")]
    BadOption(u32),
    /// недопустимая ширина слота кодпоинта
    #[error("invalid code point width: {0}")]
    BadWidth(u32),
    /// недостаточно места в буфере назначения, либо входные данные оборваны
    #[error("buffer is too small")]
    NoBuffer,
    /// недопустимый кодпоинт или некорректная последовательность байт
    #[error("invalid code point or byte sequence: {0:#X}")]
    BadCodePoint(u32),
}

impl CodecError
{
    /// числовой код ошибки
    pub fn code(&self) -> i32
    {
        match self {
            Self::Generic => -1,
            Self::NoMemory => -2,
            Self::BadOption(_) => -3,
            Self::BadWidth(_) => -4,
            Self::NoBuffer => -5,
            Self::BadCodePoint(_) => -6,
        }
    }
}

/// числовой код результата операции
pub fn result_code<T>(result: &CodecResult<T>) -> i32
{
    match result {
        Ok(_) => CODE_OK,
        Err(err) => err.code(),
    }
}

use log::{debug, trace};

pub use codepoint::Codepoint;
pub use error::{result_code, CodecError, CodecResult, CODE_OK};
pub use tables::{sequence_len, MAX_CODE_POINT};
pub use width::Width;

mod codepoint;
mod decode;
mod encode;
mod error;
pub mod tables;
mod width;

/// опция установки ширины слота кодпоинта
pub const OPTION_SET_WIDTH: u32 = 1;

/// опции кодека
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOption
{
    /// ширина слота в массиве кодпоинтов: 1, 2 или 4 байта
    SetWidth,
}

impl TryFrom<u32> for CodecOption
{
    type Error = CodecError;

    fn try_from(value: u32) -> CodecResult<Self>
    {
        match value {
            OPTION_SET_WIDTH => Ok(Self::SetWidth),
            _ => Err(CodecError::BadOption(value)),
        }
    }
}

/// результат последней операции: где и на чем она остановилась
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress
{
    /// последний рассмотренный кодпоинт (при ошибке декодирования - частично собранное значение)
    pub code_point: u32,
    /// записано (кодирование) или прочитано (декодирование) байт UTF-8
    pub bytes: usize,
    /// полностью обработано кодпоинтов
    pub code_points: usize,
}

/// кодек UTF-8 <-> массив кодпоинтов фиксированной ширины
///
/// экземпляр не выделяет памяти и не хранит ссылок на буферы между вызовами.
/// encode / decode изменяют состояние, поэтому одновременное использование одного
/// экземпляра из нескольких потоков требует внешней синхронизации
#[derive(Debug, Clone, Default)]
pub struct Codec
{
    /// ширина слота в массиве кодпоинтов
    width: Width,
    /// результат последней операции кодирования / декодирования
    progress: Progress,
}

impl Codec
{
    /// кодек с шириной слота по умолчанию (2 байта)
    pub fn new() -> Self
    {
        Self::default()
    }

    /// сбросить ширину слота к значению по умолчанию и очистить результат последней операции
    pub fn init(&mut self) -> CodecResult<()>
    {
        *self = Self::default();
        Ok(())
    }

    /// изменить настройку кодека. на уже завершенные операции не влияет
    pub fn configure(&mut self, option: u32, value: u32) -> CodecResult<()>
    {
        match CodecOption::try_from(option)? {
            CodecOption::SetWidth => {
                self.width = Width::try_from(value)?;
                trace!("codec width set to {} byte(s)", value);
            }
        }

        Ok(())
    }

    #[inline]
    pub fn set_width(&mut self, width: Width)
    {
        self.width = width;
    }

    #[inline]
    pub fn width(&self) -> Width
    {
        self.width
    }

    /// результат последней операции
    #[inline]
    pub fn progress(&self) -> Progress
    {
        self.progress
    }

    /// сохранить результат операции, ошибки пишем в лог
    fn finish<T>(&mut self, operation: &str, progress: Progress, result: CodecResult<T>) -> CodecResult<T>
    {
        self.progress = progress;

        match &result {
            Ok(_) => trace!("{}: {:?}", operation, progress),
            Err(err) => debug!("{} stopped: {}, {:?}", operation, err, progress),
        }

        result
    }
}

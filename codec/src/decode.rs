use crate::tables::{self, CONTINUATION_PAYLOAD_BITS, CONTINUATION_PAYLOAD_MASK};
use crate::{Codec, CodecError, CodecResult, Progress, Width};

impl Codec
{
    /// декодировать UTF-8 в массив кодпоинтов текущей ширины
    ///
    /// результат - количество записанных кодпоинтов. при ошибке декодированные
    /// кодпоинты остаются в массиве, progress().bytes указывает на начало
    /// последовательности, на которой декодирование остановилось
    pub fn decode(&mut self, code_points: &mut [u8], bytes: &[u8]) -> CodecResult<usize>
    {
        let mut progress = Progress::default();
        let result = decode_into(self.width, code_points, bytes, &mut progress);

        self.finish("decode", progress, result)
    }

    /// количество кодпоинтов в UTF-8 последовательности; проверки те же, что и при декодировании
    pub fn count(&self, bytes: &[u8]) -> CodecResult<usize>
    {
        let mut offset = 0;
        let mut count = 0;
        let mut code = 0;

        while offset < bytes.len() {
            offset += read_sequence(&bytes[offset ..], &mut code)?;
            count += 1;
        }

        Ok(count)
    }
}

fn decode_into(
    width: Width,
    code_points: &mut [u8],
    bytes: &[u8],
    progress: &mut Progress,
) -> CodecResult<usize>
{
    let mut slots = code_points.chunks_exact_mut(width.bytes());

    while progress.bytes < bytes.len() {
        let slot = match slots.next() {
            Some(slot) => slot,
            None => return Err(CodecError::NoBuffer),
        };

        let len = read_sequence(&bytes[progress.bytes ..], &mut progress.code_point)?;
        let code = progress.code_point;

        // кодпоинт корректен, но не помещается в слот
        if code > width.max_code() {
            return Err(CodecError::BadCodePoint(code));
        }

        width.write(slot, code);

        progress.bytes += len;
        progress.code_points += 1;
    }

    Ok(progress.code_points)
}

/// прочитать последовательность с начала input (input не пуст), вернуть её длину.
/// в code собирается значение кодпоинта - при ошибке там остается то, что успели собрать
#[inline(always)]
fn read_sequence(input: &[u8], code: &mut u32) -> CodecResult<usize>
{
    let first = input[0];
    *code = first as u32;

    // байт продолжения или 11111xxx
    let sequence = match tables::sequence_by_first_byte(first) {
        Some(sequence) => sequence,
        None => return Err(CodecError::BadCodePoint(first as u32)),
    };

    *code = (first & sequence.payload_mask) as u32;

    let available = sequence.len.min(input.len());

    for &byte in &input[1 .. available] {
        if !tables::is_continuation(byte) {
            return Err(CodecError::BadCodePoint(byte as u32));
        }

        *code = (*code << CONTINUATION_PAYLOAD_BITS) | (byte & CONTINUATION_PAYLOAD_MASK) as u32;
    }

    if available < sequence.len {
        return Err(CodecError::NoBuffer);
    }

    // overlong: значение можно было записать более короткой последовательностью
    if *code < sequence.min {
        return Err(CodecError::BadCodePoint(*code));
    }

    Ok(sequence.len)
}

use crate::tables::{self, Sequence, CONTINUATION_LEADING_BITS, CONTINUATION_PAYLOAD_BITS, CONTINUATION_PAYLOAD_MASK};
use crate::{Codec, CodecError, CodecResult, Codepoint, Progress, Width};

impl Codec
{
    /// закодировать массив кодпоинтов в UTF-8
    ///
    /// code_points - слоты текущей ширины, неполный слот в конце не читается.
    /// результат - количество записанных байт. при ошибке в буфере остаются
    /// полностью закодированные кодпоинты, место остановки - в progress()
    pub fn encode(&mut self, buffer: &mut [u8], code_points: &[u8]) -> CodecResult<usize>
    {
        let mut progress = Progress::default();
        let result = encode_into(self.width, buffer, code_points, &mut progress);

        self.finish("encode", progress, result)
    }

    /// размер буфера, достаточный для кодирования массива кодпоинтов
    pub fn measure(&self, code_points: &[u8]) -> CodecResult<usize>
    {
        self.width.codes(code_points).try_fold(0, |total, code| {
            match Codepoint::from(code).encoded_len() {
                Some(len) => Ok(total + len),
                None => Err(CodecError::BadCodePoint(code)),
            }
        })
    }
}

fn encode_into(
    width: Width,
    buffer: &mut [u8],
    code_points: &[u8],
    progress: &mut Progress,
) -> CodecResult<usize>
{
    for code in width.codes(code_points) {
        progress.code_point = code;

        let sequence = match tables::sequence_for(code) {
            Some(sequence) => sequence,
            None => return Err(CodecError::BadCodePoint(code)),
        };

        let end = progress.bytes + sequence.len;

        if end > buffer.len() {
            return Err(CodecError::NoBuffer);
        }

        write_sequence(&mut buffer[progress.bytes .. end], code, sequence);

        progress.bytes = end;
        progress.code_points += 1;
    }

    Ok(progress.bytes)
}

/// записать последовательность; длина target совпадает с длиной последовательности.
/// старшие биты - в первом байте, далее по 6 бит в каждом байте продолжения
#[inline(always)]
fn write_sequence(target: &mut [u8], code: u32, sequence: &Sequence)
{
    let tail = (sequence.len - 1) as u32;

    target[0] = sequence.leading_bits
        | ((code >> (CONTINUATION_PAYLOAD_BITS * tail)) as u8 & sequence.payload_mask);

    for (i, byte) in target[1 ..].iter_mut().enumerate() {
        let shift = CONTINUATION_PAYLOAD_BITS * (tail - 1 - i as u32);

        *byte = CONTINUATION_LEADING_BITS | ((code >> shift) as u8 & CONTINUATION_PAYLOAD_MASK);
    }
}

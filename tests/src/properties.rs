use pretty_assertions::assert_eq;
use utf8_codec::{Codec, CodecError, Progress, Width, OPTION_SET_WIDTH};
use utf8_codec_source::{pack, unpack};

fn codec(width: Width) -> Codec
{
    let mut codec = Codec::new();
    codec.set_width(width);
    codec
}

/// длина последовательности определяется диапазоном кодпоинта
#[test]
fn encoded_bytes()
{
    let cases: [(u32, &[u8]); 4] = [
        (0x7F, &[0x7F]),
        (0x80, &[0xC2, 0x80]),
        (0x800, &[0xE0, 0xA0, 0x80]),
        (0x10000, &[0xF0, 0x90, 0x80, 0x80]),
    ];

    let mut codec = codec(Width::Four);

    for (code, expected) in cases {
        let mut buffer = [0u8; 8];
        let written = codec.encode(&mut buffer, &pack(&[code], Width::Four));

        assert_eq!(written, Ok(expected.len()), "U+{:04X}", code);
        assert_eq!(&buffer[.. expected.len()], expected, "U+{:04X}", code);
    }
}

/// 2-байтовый кодпоинт в буфер на 1 байт: ничего не записано
#[test]
fn no_buffer()
{
    let mut codec = codec(Width::Two);
    let mut buffer = [0xAAu8; 1];

    assert_eq!(codec.encode(&mut buffer, &pack(&[0x80], Width::Two)), Err(CodecError::NoBuffer));
    assert_eq!(buffer, [0xAA]);
    assert_eq!(
        codec.progress(),
        Progress {
            code_point: 0x80,
            bytes: 0,
            code_points: 0
        }
    );
}

/// кодпоинт за пределами U+1FFFFF: ничего не записано для него, предыдущие остаются
#[test]
fn bad_code_point()
{
    let mut codec = codec(Width::Four);
    let mut buffer = [0u8; 8];

    assert_eq!(
        codec.encode(&mut buffer, &pack(&[0x200000], Width::Four)),
        Err(CodecError::BadCodePoint(0x200000))
    );
    assert_eq!(codec.progress().bytes, 0);

    assert_eq!(
        codec.encode(&mut buffer, &pack(&[0x41, 0x200000, 0x42], Width::Four)),
        Err(CodecError::BadCodePoint(0x200000))
    );
    assert_eq!(&buffer[.. 1], b"A");
    assert_eq!(
        codec.progress(),
        Progress {
            code_point: 0x200000,
            bytes: 1,
            code_points: 1
        }
    );
}

/// overlong-последовательность нуля
#[test]
fn overlong_zero()
{
    let mut codec = codec(Width::Two);
    let mut storage = [0xFFu8; 4];

    assert!(matches!(
        codec.decode(&mut storage, &[0xC0, 0x80]),
        Err(CodecError::BadCodePoint(_))
    ));
    assert_eq!(storage, [0xFF; 4]);
    assert_eq!(codec.progress().code_points, 0);
}

/// 3-байтовая последовательность, от которой осталось 2 байта
#[test]
fn truncated_input()
{
    let mut codec = codec(Width::Two);
    let mut storage = [0u8; 4];

    assert_eq!(codec.decode(&mut storage, &[0xE0, 0xA0]), Err(CodecError::NoBuffer));
    assert_eq!(codec.progress().bytes, 0);
}

/// повторная установка ширины
#[test]
fn configure_is_idempotent()
{
    let mut codec = Codec::new();

    assert_eq!(codec.configure(OPTION_SET_WIDTH, 4), Ok(()));
    assert_eq!(codec.configure(OPTION_SET_WIDTH, 4), Ok(()));
    assert_eq!(codec.width(), Width::Four);
}

/// после ошибки на середине массива счетчик показывает, сколько кодпоинтов реально записано
#[test]
fn diagnostics_after_partial_encode()
{
    // 1 + 2 + 3 байта помещаются, 4-байтовый уже нет
    let codes = [0x41, 0x416, 0x20AC, 0x1F600, 0x42];
    let mut codec = codec(Width::Four);
    let mut buffer = [0u8; 8];
    let storage = pack(&codes, Width::Four);

    assert_eq!(codec.encode(&mut buffer, &storage), Err(CodecError::NoBuffer));

    let progress = codec.progress();

    assert_eq!(progress.code_points, 3);
    assert_eq!(progress.bytes, 6);
    assert_eq!(progress.code_point, 0x1F600);
    assert_eq!(&buffer[.. 6], "AЖ€".as_bytes());

    // продолжаем с места остановки в новый буфер
    let rest = &storage[progress.code_points * Width::Four.bytes() ..];
    let mut next = [0u8; 8];

    assert_eq!(codec.encode(&mut next, rest), Ok(5));
    assert_eq!(&next[.. 5], "😀B".as_bytes());
}

/// после ошибки кодек остается рабочим
#[test]
fn usable_after_error()
{
    let mut codec = codec(Width::Four);
    let mut buffer = [0u8; 4];

    assert!(codec.encode(&mut buffer, &pack(&[0x300000], Width::Four)).is_err());
    assert_eq!(codec.encode(&mut buffer, &pack(&[0x44F], Width::Four)), Ok(2));
    assert_eq!(&buffer[.. 2], "я".as_bytes());

    let mut storage = [0u8; 4];
    assert!(codec.decode(&mut storage, &[0xFF]).is_err());
    assert_eq!(codec.decode(&mut storage, "я".as_bytes()), Ok(1));
    assert_eq!(unpack(&storage, Width::Four), vec![0x44F]);
}

/// пустой вход
#[test]
fn empty()
{
    let mut codec = codec(Width::Two);

    assert_eq!(codec.encode(&mut [], &[]), Ok(0));
    assert_eq!(codec.progress(), Progress::default());

    assert_eq!(codec.decode(&mut [], &[]), Ok(0));
    assert_eq!(codec.progress(), Progress::default());

    // пустой буфер и непустой вход
    assert_eq!(codec.decode(&mut [], b"a"), Err(CodecError::NoBuffer));
    assert_eq!(codec.encode(&mut [], &pack(&[0x61], Width::Two)), Err(CodecError::NoBuffer));
}

/// новая ширина действует со следующего вызова
#[test]
fn width_change_between_calls()
{
    let mut codec = codec(Width::One);
    let mut buffer = [0u8; 8];

    // 0x416 в 2-байтовом слоте читается в 1-байтовом режиме как два ASCII-кодпоинта 0x04 и 0x16
    let storage = pack(&[0x416], Width::Two);

    assert_eq!(codec.encode(&mut buffer, &storage), Ok(2));
    assert_eq!(codec.progress().code_points, 2);

    codec.set_width(Width::Two);
    assert_eq!(codec.encode(&mut buffer, &storage), Ok(2));
    assert_eq!(&buffer[.. 2], "Ж".as_bytes());
}

use utf8_codec::{Codec, Codepoint, Width};
use utf8_codec_source::{pack, SAMPLES};

/// сколько кодпоинтов каждой длины в образцах, и во сколько байт обходится UTF-8
/// по сравнению с массивом кодпоинтов минимальной ширины?
fn main()
{
    let mut codec = Codec::new();

    for sample in SAMPLES.iter() {
        let mut lengths = [0usize; 4];

        for &code in sample.codes.iter() {
            if let Some(len) = Codepoint::from(code).encoded_len() {
                lengths[len - 1] += 1;
            }
        }

        let width = sample.min_width();
        let storage = pack(&sample.codes, width);

        codec.set_width(width);

        let size = match codec.measure(&storage) {
            Ok(size) => size,
            Err(err) => {
                println!("{}: {}", sample.name, err);
                continue;
            }
        };

        println!(
            "{:>8}: 1б {:>3}, 2б {:>3}, 3б {:>3}, 4б {:>3} | UTF-8: {:>4} байт, слоты по {}: {:>4} байт",
            sample.name,
            lengths[0],
            lengths[1],
            lengths[2],
            lengths[3],
            size,
            width.bytes(),
            storage.len(),
        );
    }

    // для сравнения: всё в 4-байтовых слотах
    let total: usize = SAMPLES.iter().map(|s| s.codes.len() * Width::Four.bytes()).sum();
    println!("\nвсе образцы в 4-байтовых слотах: {} байт\n", total);
}

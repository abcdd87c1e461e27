use lazy_static::lazy_static;
use utf8_codec::Width;

/// образец текста для тестов и бенчмарков
#[derive(Debug)]
pub struct Sample
{
    pub name: &'static str,
    pub text: &'static str,
    /// кодпоинты текста
    pub codes: Vec<u32>,
}

impl Sample
{
    fn new(name: &'static str, text: &'static str) -> Self
    {
        Self {
            name,
            text,
            codes: text.chars().map(u32::from).collect(),
        }
    }

    /// наибольший кодпоинт текста
    pub fn max_code(&self) -> u32
    {
        self.codes.iter().copied().max().unwrap_or(0)
    }

    /// наименьшая ширина слота, в которую помещаются все кодпоинты текста
    pub fn min_width(&self) -> Width
    {
        match self.max_code() {
            0 ..= 0xFF => Width::One,
            0x100 ..= 0xFFFF => Width::Two,
            _ => Width::Four,
        }
    }
}

lazy_static! {
    /// тексты на разных письменностях: от чистого ASCII до 4-байтовых последовательностей
    pub static ref SAMPLES: Vec<Sample> = vec![
        Sample::new("ascii", "The quick brown fox jumps over the lazy dog. 0123456789 ~!@#$%^&*()"),
        Sample::new("latin1", "Größenwahn, façade, naïve, señor, smørrebrød, ÿ ¿¡ ©® ×÷"),
        Sample::new("cyrillic", "Съешь же ещё этих мягких французских булок, да выпей чаю."),
        Sample::new("greek", "Ξεσκεπάζω τὴν ψυχοφθόρα βδελυγμία."),
        Sample::new("cjk", "天地玄黄，宇宙洪荒。いろはにほへと ちりぬるを。키스의 고유조건은"),
        Sample::new("symbols", "€ ₽ ¥ → ⇒ ∀x∈ℝ: x² ≥ 0 ☃ ♞ \u{FFFD} \u{FEFF}\u{FFFF}"),
        Sample::new("emoji", "😀🙈🚀🦀 𝄞 𝕏 𠜎𠜱 \u{10FFFF}"),
        Sample::new("mixed", "a я € 😀\u{0}\u{7F}\u{80}\u{7FF}\u{800}\u{FFFF}\u{10000}"),
        Sample::new("empty", ""),
    ];

    /// кодпоинты, которые не являются символами Unicode, но кодируются 3- и 4-байтовыми
    /// последовательностями: суррогаты и значения выше U+10FFFF
    pub static ref EXTENDED: Vec<u32> = vec![
        0xD800, 0xDBFF, 0xDC00, 0xDFFF,
        0x11_0000, 0x13_FFFF, 0x1F_0000, 0x1F_FFFF,
    ];
}

/// разложить кодпоинты по слотам указанной ширины (нативный порядок байт).
/// значения, не помещающиеся в слот, обрезаются
pub fn pack(codes: &[u32], width: Width) -> Vec<u8>
{
    let mut storage = vec![0; codes.len() * width.bytes()];

    for (slot, &code) in storage.chunks_exact_mut(width.bytes()).zip(codes) {
        width.write(slot, code);
    }

    storage
}

/// прочитать кодпоинты из слотов
pub fn unpack(storage: &[u8], width: Width) -> Vec<u32>
{
    width.codes(storage).collect()
}

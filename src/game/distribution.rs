//! Thai letter distribution: how many tiles of each letter go into a bag and
//! what each letter is worth.

/// `(letter, count in bag, point value)`
pub const LETTER_DISTRIBUTION: [(char, u32, u32); 60] = [
    // common consonants
    ('ก', 4, 1),
    ('ง', 3, 1),
    ('น', 4, 1),
    ('ม', 3, 1),
    ('ร', 4, 1),
    ('ล', 3, 1),
    ('ว', 3, 1),
    ('ส', 3, 1),
    ('ห', 3, 1),
    ('อ', 3, 1),
    // mid-frequency consonants
    ('ค', 3, 2),
    ('ช', 2, 2),
    ('ต', 3, 2),
    ('ท', 3, 2),
    ('ป', 3, 2),
    ('บ', 2, 2),
    ('ย', 2, 2),
    // uncommon consonants
    ('จ', 2, 3),
    ('ด', 2, 3),
    ('พ', 2, 3),
    ('ฟ', 1, 3),
    ('ภ', 1, 3),
    ('ศ', 2, 3),
    ('ษ', 1, 3),
    // rare consonants
    ('ข', 1, 4),
    ('ฉ', 1, 4),
    ('ซ', 1, 4),
    ('ถ', 1, 4),
    ('ผ', 1, 4),
    ('ฝ', 1, 4),
    // very rare consonants
    ('ฆ', 1, 5),
    ('ฌ', 1, 5),
    ('ญ', 1, 5),
    ('ฎ', 1, 5),
    ('ฏ', 1, 5),
    ('ฐ', 1, 5),
    ('ฑ', 1, 5),
    ('ฒ', 1, 5),
    // vowels and tone marks
    ('า', 5, 1),
    ('ิ', 4, 1),
    ('ี', 4, 1),
    ('ึ', 2, 1),
    ('ื', 2, 1),
    ('ุ', 3, 1),
    ('ู', 3, 1),
    ('เ', 4, 1),
    ('แ', 2, 1),
    ('โ', 2, 1),
    ('ใ', 1, 2),
    ('ไ', 2, 1),
    ('ะ', 2, 1),
    ('ั', 3, 1),
    ('ํ', 2, 2),
    ('ๆ', 1, 2),
    ('่', 3, 1),
    ('้', 3, 1),
    ('๊', 1, 2),
    ('๋', 1, 2),
    ('์', 2, 1),
    // blanks
    ('_', 2, 0),
];

/// Point value of a letter; letters outside the table are worth nothing.
pub fn letter_score(letter: char) -> u32 {
    LETTER_DISTRIBUTION
        .iter()
        .find(|(l, _, _)| *l == letter)
        .map(|(_, _, score)| *score)
        .unwrap_or(0)
}

/// Total number of tiles a fresh bag holds.
pub fn total_tile_count() -> usize {
    LETTER_DISTRIBUTION
        .iter()
        .map(|(_, count, _)| *count as usize)
        .sum()
}

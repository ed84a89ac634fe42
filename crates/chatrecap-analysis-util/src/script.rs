/// CJK Unified Ideographs block (U+4E00..=U+9FFF).
pub fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

pub fn cjk_count(text: &str) -> usize {
    text.chars().filter(|c| is_cjk(*c)).count()
}

/// Share of CJK ideographs among all characters; `0.0` for empty text.
pub fn cjk_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        0.0
    } else {
        cjk_count(text) as f64 / total as f64
    }
}

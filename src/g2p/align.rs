//! Word-to-phoneme alignment

/// Distributes `phoneme_count` phonemes over `token_count` tokens.
///
/// Every token gets `phoneme_count / token_count`; the first
/// `phoneme_count % token_count` tokens get one more. Equivalent to handing
/// out phonemes one at a time to the first token with the lowest count.
pub fn distribute(phoneme_count: usize, token_count: usize) -> Vec<usize> {
    if token_count == 0 {
        return Vec::new();
    }

    let base = phoneme_count / token_count;
    let remainder = phoneme_count % token_count;

    (0..token_count)
        .map(|i| if i < remainder { base + 1 } else { base })
        .collect()
}

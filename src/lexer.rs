/// Split a raw command line into words.
///
/// Surrounding whitespace is trimmed, then the line is split on single space
/// characters. Consecutive spaces therefore yield empty words, and quotes
/// have no special meaning: `echo "a b"` splits inside the quotes. Both are
/// deliberate properties of this shell's naive tokenizer and callers rely on
/// them being stable.
///
/// The result always contains at least one element; an empty or all-space
/// line yields a single empty word.
pub(crate) fn split_words(line: &str) -> Vec<String> {
    line.trim().split(' ').map(str::to_owned).collect()
}

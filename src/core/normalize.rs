/// Strip every character that is not an ASCII digit.
///
/// Order is preserved. Punctuation, whitespace, letters and non-ASCII
/// digits are all dropped, so the result is always a plain `[0-9]*` string.
///
/// ```
/// assert_eq!(brdoc::normalize("111.444.777-35"), "11144477735");
/// assert_eq!(brdoc::normalize("no digits"), "");
/// ```
pub fn normalize(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Convert a normalized digit string into digit values.
pub(crate) fn digit_values(digits: &str) -> Vec<u8> {
    digits.bytes().map(|b| b - b'0').collect()
}

/// Whether a non-empty string consists of one repeated character.
pub(crate) fn is_repeated(digits: &str) -> bool {
    let mut bytes = digits.bytes();
    match bytes.next() {
        Some(first) => bytes.all(|b| b == first),
        None => false,
    }
}

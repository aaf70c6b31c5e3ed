/// Extract the words of a title fragment.
///
/// A word is a run of ASCII letters and digits that is either at least two
/// characters long or joined to a following run by a single apostrophe
/// (`Don't`, `I'm`). Lone characters such as `I` or `a` are not words.
/// Everything else, including non-ASCII letters, separates words.
#[must_use]
pub fn words(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let n = bytes.len();
    let mut words = Vec::new();
    let mut i = 0;

    while i < n {
        if !bytes[i].is_ascii_alphanumeric() {
            i += 1;
            continue;
        }

        let start = i;
        while i < n && bytes[i].is_ascii_alphanumeric() {
            i += 1;
        }
        let run_end = i;

        if i + 1 < n && bytes[i] == b'\'' && bytes[i + 1].is_ascii_alphanumeric() {
            i += 1;
            while i < n && bytes[i].is_ascii_alphanumeric() {
                i += 1;
            }
            words.push(&text[start..i]);
        } else if run_end - start >= 2 {
            words.push(&text[start..run_end]);
        }
    }

    words
}

//! Common utility functions shared across the codebase.

/// Normalize an identifier into PascalCase.
///
/// Non-alphanumeric characters separate words, and a new word also starts at
/// every uppercase letter and at every letter/digit boundary. Each word is
/// lower-cased, its first character upper-cased, and the words concatenated.
/// Because every word of the output begins with an uppercase letter or is a
/// digit run, normalizing twice gives the same result as normalizing once.
///
/// # Examples
///
/// ```
/// use taro_bindgen::utils::normalize_name;
///
/// assert_eq!(normalize_name("view"), "View");
/// assert_eq!(normalize_name("scroll-view"), "ScrollView");
/// assert_eq!(normalize_name("movable_area"), "MovableArea");
/// assert_eq!(normalize_name("openData"), "OpenData");
/// assert_eq!(normalize_name("view2d"), "View2D");
/// assert_eq!(normalize_name(""), "");
/// ```
pub fn normalize_name(name: &str) -> String {
    split_words(name).iter().map(|w| capitalize(w)).collect()
}

/// Stem of a declaration file name: everything before the first `.`.
///
/// ```
/// use taro_bindgen::utils::file_stem;
///
/// assert_eq!(file_stem("scroll-view.d.ts"), "scroll-view");
/// assert_eq!(file_stem("view"), "view");
/// ```
pub fn file_stem(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or_default()
}

fn split_words(name: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in name.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        let boundary = prev.is_some_and(|p| {
            c.is_uppercase()
                || (p.is_numeric() && !c.is_numeric())
                || (!p.is_numeric() && c.is_numeric())
        });
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

// Lower-casing can produce non-alphanumeric marks (`İ` -> `i\u{307}`); they
// are dropped so the output never contains a separator.
fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars().filter(|c| c.is_alphanumeric());
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

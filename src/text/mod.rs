//! String utilities.
//!
//! Pure transforms over `&str` returning fresh `String`s:
//! capitalization ([`capitalize`], [`decapitalize`], [`capitalize_words`]),
//! reversal ([`reverse`]), centered padding ([`pad_center`]), and an
//! anagram check ([`is_anagram`]).
//!
//! All operations are Unicode-aware at the `char` level; none of them
//! allocate unless they have to return a new `String`.

/// Uppercases the first character of `s`, leaving the rest untouched.
///
/// Uses [`char::to_uppercase`], so characters whose uppercase form expands
/// to multiple code points are handled correctly.
///
/// # Examples
///
/// ```
/// use seqtools::text::capitalize;
///
/// assert_eq!(capitalize("fooBar"), "FooBar");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Lowercases the first character of `s`, leaving the rest untouched.
///
/// # Examples
///
/// ```
/// use seqtools::text::decapitalize;
///
/// assert_eq!(decapitalize("FooBar"), "fooBar");
/// ```
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}

/// Uppercases the first character of every whitespace-separated word.
///
/// Whitespace runs are preserved as-is.
///
/// # Examples
///
/// ```
/// use seqtools::text::capitalize_words;
///
/// assert_eq!(capitalize_words("hello world!"), "Hello World!");
/// assert_eq!(capitalize_words("  spaced  out  "), "  Spaced  Out  ");
/// ```
pub fn capitalize_words(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    let mut at_word_start = true;
    for character in s.chars() {
        if character.is_whitespace() {
            at_word_start = true;
            output.push(character);
        } else if at_word_start {
            at_word_start = false;
            output.extend(character.to_uppercase());
        } else {
            output.push(character);
        }
    }
    output
}

/// Reverses `s` by `char`.
///
/// # Examples
///
/// ```
/// use seqtools::text::reverse;
///
/// assert_eq!(reverse("foobar"), "raboof");
/// ```
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Returns `true` if `a` and `b` are anagrams of each other, ignoring
/// case and non-alphanumeric characters.
///
/// # Examples
///
/// ```
/// use seqtools::text::is_anagram;
///
/// assert!(is_anagram("iceman", "cinema"));
/// assert!(is_anagram("Dormitory", "dirty room!"));
/// assert!(!is_anagram("abc", "abd"));
/// ```
pub fn is_anagram(a: &str, b: &str) -> bool {
    normalize_for_anagram(a) == normalize_for_anagram(b)
}

fn normalize_for_anagram(s: &str) -> Vec<char> {
    let mut characters: Vec<char> = s
        .chars()
        .filter(|character| character.is_alphanumeric())
        .flat_map(|character| character.to_lowercase())
        .collect();
    characters.sort_unstable();
    characters
}

/// Pads `s` on both sides with `pad_char` until it is `length` characters
/// long, biasing the extra character to the right when the padding is
/// uneven.
///
/// Returns `s` unchanged when it is already `length` characters or longer.
///
/// # Examples
///
/// ```
/// use seqtools::text::pad_center;
///
/// assert_eq!(pad_center("cat", 8, ' '), "  cat   ");
/// assert_eq!(pad_center("foobar", 3, '-'), "foobar");
/// ```
pub fn pad_center(s: &str, length: usize, pad_char: char) -> String {
    let current = s.chars().count();
    if current >= length {
        return s.to_string();
    }
    let missing = length - current;
    let left = missing / 2;
    let right = missing - left;
    let mut output = String::with_capacity(s.len() + missing);
    output.extend(std::iter::repeat_n(pad_char, left));
    output.push_str(s);
    output.extend(std::iter::repeat_n(pad_char, right));
    output
}

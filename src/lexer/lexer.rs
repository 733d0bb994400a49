use lazy_static::lazy_static;
use regex::Regex;

use crate::MK_TOKEN;

use super::tokens::Token;

/// How the source text is split into words before segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Whitespace {
    /// Every single `' '` separates two words, so two spaces in a row
    /// produce an empty token.
    #[default]
    Single,
    /// Any run of whitespace (spaces, tabs, newlines) separates words.
    Any,
}

lazy_static! {
    static ref WORD: Regex = Regex::new("\\S+").unwrap();
}

/// Characters that always form a token of their own, even when written
/// against a word.
fn is_split_char(c: char) -> bool {
    matches!(c, '(' | ')' | '[' | ']' | ',' | ':' | '"')
}

/// An apostrophe between two alphanumerics is a digit separator (`1'000`),
/// anywhere else it is a character quote marker.
fn is_digit_separator(word: &str, index: usize) -> bool {
    let before = word[..index].chars().next_back();
    let after = word[index + 1..].chars().next();

    matches!(
        (before, after),
        (Some(b), Some(a)) if b.is_ascii_alphanumeric() && a.is_ascii_alphanumeric()
    )
}

fn split_words(source: &str, whitespace: Whitespace) -> Vec<(usize, &str)> {
    match whitespace {
        Whitespace::Single => {
            let mut words = vec![];
            let mut offset = 0;

            for word in source.split(' ') {
                words.push((offset, word));
                offset += word.len() + 1;
            }

            words
        }
        Whitespace::Any => WORD
            .find_iter(source)
            .map(|word| (word.start(), word.as_str()))
            .collect(),
    }
}

fn segment<'src>(word: &'src str, offset: usize, tokens: &mut Vec<Token<'src>>) {
    if word.is_empty() {
        tokens.push(MK_TOKEN!(word, offset));
        return;
    }

    let mut start = 0;

    for (index, c) in word.char_indices() {
        let splits = is_split_char(c) || (c == '\'' && !is_digit_separator(word, index));
        if !splits {
            continue;
        }

        if start < index {
            tokens.push(MK_TOKEN!(&word[start..index], offset + start));
        }
        tokens.push(MK_TOKEN!(&word[index..index + 1], offset + index));
        start = index + 1;
    }

    if start < word.len() {
        tokens.push(MK_TOKEN!(&word[start..], offset + start));
    }
}

/// Splits source text into tokens.
///
/// The source is first split into words (see [`Whitespace`]), then every
/// delimiter or quote marker glued to a word is cut out into its own token,
/// so `add(a,` yields `add`, `(`, `a` and `,`. Empty source yields no tokens.
pub fn tokenize(source: &str, whitespace: Whitespace) -> Vec<Token<'_>> {
    let mut tokens = vec![];

    if source.is_empty() {
        return tokens;
    }

    for (offset, word) in split_words(source, whitespace) {
        segment(word, offset, &mut tokens);
    }

    tokens
}

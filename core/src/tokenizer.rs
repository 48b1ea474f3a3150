use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // A run of letters followed only by trailing punctuation from `. , ? : ; !`.
    static ref KEYWORD_RE: Regex = Regex::new(r"^(\p{L}+)[.,?:;!]*$").expect("valid regex");
    static ref ENGLISH: Vec<&'static str> = vec![
        "a","about","above","after","again","against","all","am","an","and","any","are","as","at",
        "be","because","been","before","being","below","between","both","but","by",
        "can","cannot","could",
        "did","do","does","doing","down","during",
        "each","few","for","from","further",
        "had","has","have","having","he","her","here","hers","herself","him","himself","his","how",
        "i","if","in","into","is","it","its","itself",
        "me","more","most","my","myself",
        "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
        "same","she","should","so","some","such",
        "than","that","the","their","theirs","them","themselves","then","there","these","they","this","those","through","to","too",
        "under","until","up","very",
        "was","we","were","what","when","where","which","while","who","whom","why","with","would",
        "you","your","yours","yourself","yourselves"
    ];
}

/// Words excluded from indexing regardless of frequency.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Built-in English list, used when no stop-word file is supplied.
    pub fn english() -> Self {
        ENGLISH.iter().copied().collect()
    }

    /// Adds a word; surrounding whitespace is trimmed and case folded.
    /// Blank input is ignored.
    pub fn insert(&mut self, word: &str) {
        let word = word.trim();
        if !word.is_empty() {
            self.words.insert(word.to_lowercase());
        }
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}

impl<S: AsRef<str>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut stop_words = StopWords::new();
        for word in iter {
            stop_words.insert(word.as_ref());
        }
        stop_words
    }
}

/// Lower-cases `token` and strips trailing punctuation, returning `None` unless
/// what remains is a non-empty run of letters. Stop words are not consulted.
pub fn keyword(token: &str) -> Option<String> {
    let lowered = token.to_lowercase();
    KEYWORD_RE
        .captures(&lowered)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Keyword test used while indexing: [`keyword`] followed by stop-word removal.
pub fn normalize(token: &str, stop_words: &StopWords) -> Option<String> {
    keyword(token).filter(|word| !stop_words.contains(word))
}

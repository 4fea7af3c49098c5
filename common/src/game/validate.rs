pub const MIN_WORD_LEN: usize = 3;

/// Lowercase and strip surrounding whitespace before any checks run.
pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Whether `word` can be assembled from the letters of `root_word`, each
/// root letter consumable at most once. Works on a shrinking copy of the
/// root: every matched letter is removed before the next lookup, which
/// gives multiset-subset semantics in O(|word| * |root|).
pub fn is_possible(word: &str, root_word: &str) -> bool {
    let mut remaining: Vec<char> = root_word.chars().collect();

    for letter in word.chars() {
        match remaining.iter().position(|&c| c == letter) {
            Some(pos) => {
                remaining.remove(pos);
            }
            None => return false,
        }
    }

    true
}

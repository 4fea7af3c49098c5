mod spell_check;
mod word_list;

pub use spell_check::{FileDictionary, SpellChecker};
pub use word_list::{WordList, WordsError};

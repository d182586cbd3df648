pub mod config;
pub mod corpus;
pub mod evaluation;
pub mod ngram;

pub use ngram::{
    build_profile, cosine_similarity, load_profile, save_profile, LangError, LanguageMatch,
    LanguageMatcher, MatchResult, TrigramTable,
};

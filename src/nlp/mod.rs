// NLP building blocks for extractive summarization
pub mod conclusion;
pub mod normalize;
pub mod sentences;
pub mod stopwords;
pub mod summarization;
pub mod tfidf;
pub mod tokenize;
pub mod topics;

pub use normalize::clean_text;
pub use sentences::{split_sentences, Sentence};
pub use stopwords::StopWords;
pub use summarization::summarize_text_content;
pub use topics::main_topics;

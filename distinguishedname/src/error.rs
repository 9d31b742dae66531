#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DnError {
    #[error("parse error at offset {position}: end of input before '=' in attribute name")]
    UnterminatedAttribute { position: usize },

    #[error("parse error at offset {position}: delimiter {found:?} inside attribute name")]
    DelimiterInAttribute { position: usize, found: char },

    #[error("parse error at offset {position}: empty RDN or attribute-value pair")]
    EmptyComponent { position: usize },

    #[error("parse error at offset {position}: unexpected {found:?} after closing quote")]
    TrailingContentAfterQuote { position: usize, found: char },

    #[error("parse error at offset {position}: quoted value not terminated")]
    UnterminatedQuote { position: usize },

    #[error("parse error at offset {position}: malformed escape sequence")]
    MalformedEscape { position: usize },

    #[error("attribute-value pair {0:?} has no '=' separator")]
    MissingSeparator(String),

    #[error("RDN must contain at least one attribute-value pair")]
    EmptyRdn,

    #[error("DN must contain at least one RDN")]
    EmptyDn,
}

pub type Result<T> = std::result::Result<T, DnError>;

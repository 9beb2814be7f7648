#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Parsing error: {0}")]
    ParseGrammar(#[from] peg::error::ParseError<peg::str::LineCol>),
}

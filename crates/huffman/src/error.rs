#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HuffmanError {
    #[error("symbol {0:#04x} has no code")]
    UnknownSymbol(u8),
    #[error("bit stream ends in the middle of a code")]
    TruncatedCode,
}

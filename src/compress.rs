use codetree::CodeTable;
use common::CodeError;
use common::Symbol;

/// Concatenates the codewords of `symbols`.
///
/// Fails with [`CodeError::UnknownSymbol`] if a symbol has no entry in `codes`.
#[inline]
pub fn encode_symbols<S, I>(codes: &CodeTable<S>, symbols: I) -> Result<String, CodeError>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut bits = String::new();
    for symbol in symbols {
        let code = codes
            .get(&symbol)
            .ok_or_else(|| CodeError::UnknownSymbol(format!("{:?}", symbol)))?;
        bits.push_str(code);
    }
    Ok(bits)
}

#[inline]
pub fn encode_text(codes: &CodeTable<char>, text: &str) -> Result<String, CodeError> {
    encode_symbols(codes, text.chars())
}

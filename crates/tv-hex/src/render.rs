use crate::error::{HexError, Result};

/// How rendered tokens are grouped into lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineGrouping {
    /// All tokens on a single line with no terminator, as `$readmemh`
    /// expects for a flat memory image.
    Flat,
    /// One newline-terminated line per `row_len` tokens; used for per-cycle
    /// lane vectors where each line of the file is one clock cycle.
    PerRow(usize),
}

/// Number of hex digits needed for a `width`-bit value.
pub fn token_digits(width: u32) -> usize {
    width.div_ceil(4) as usize
}

/// Renders one value as a fixed-width lowercase hex token.
///
/// Fails if the value does not fit in `width` bits; a token must never
/// silently drop high bits of a value it claims to represent.
pub fn hex_token(value: u64, width: u32) -> Result<String> {
    if width == 0 || width > 64 {
        return Err(HexError::UnsupportedWidth { width });
    }
    if width < 64 && value >> width != 0 {
        return Err(HexError::ValueOutOfRange { value, width });
    }
    Ok(format!("{:0digits$x}", value, digits = token_digits(width)))
}

/// Renders a sequence of values as space-separated hex tokens under the
/// given grouping policy.
pub fn render(values: &[u64], width: u32, grouping: LineGrouping) -> Result<String> {
    let tokens = values
        .iter()
        .map(|&v| hex_token(v, width))
        .collect::<Result<Vec<_>>>()?;

    match grouping {
        LineGrouping::Flat => Ok(tokens.join(" ")),
        LineGrouping::PerRow(row_len) => {
            if row_len == 0 {
                return Err(HexError::EmptyRow);
            }
            if tokens.len() % row_len != 0 {
                return Err(HexError::RowLengthMismatch {
                    len: tokens.len(),
                    row_len,
                });
            }
            let mut out = String::new();
            for row in tokens.chunks(row_len) {
                out.push_str(&row.join(" "));
                out.push('\n');
            }
            Ok(out)
        }
    }
}

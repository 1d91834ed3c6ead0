//! CLI enum types.

use clap::ValueEnum;

use crate::encoder::OutputFormat;

/// Output format selector for `-f`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum FormatArg {
    /// Binary literals, one digit per column
    #[default]
    #[value(name = "b", alias = "bin")]
    Bin,
    /// Hexadecimal literals, column 0 as the most significant bit
    #[value(name = "h", alias = "hex")]
    Hex,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Bin => OutputFormat::Bin,
            FormatArg::Hex => OutputFormat::Hex,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_arg_to_output_format() {
        assert_eq!(OutputFormat::from(FormatArg::Bin), OutputFormat::Bin);
        assert_eq!(OutputFormat::from(FormatArg::Hex), OutputFormat::Hex);
    }

    #[test]
    fn test_format_arg_names_and_aliases() {
        assert_eq!(FormatArg::from_str("b", false), Ok(FormatArg::Bin));
        assert_eq!(FormatArg::from_str("bin", false), Ok(FormatArg::Bin));
        assert_eq!(FormatArg::from_str("h", false), Ok(FormatArg::Hex));
        assert_eq!(FormatArg::from_str("hex", false), Ok(FormatArg::Hex));
        assert!(FormatArg::from_str("x", false).is_err());
        assert!(FormatArg::from_str("", false).is_err());
    }
}

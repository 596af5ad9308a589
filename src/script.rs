//! Write scripts: the external driver of the memory region
//!
//! A script is a line-oriented description of a region and a sequence of
//! 32-bit writes, stepped through interactively by the TUI:
//!
//! ```text
//! # a stack frame being filled in
//! size 64
//! base 0xffff0000
//! w32 0x3c 0xffff0058   saved ebp
//! w32 0x38 0x00000007   local a
//! ```
//!
//! Directives:
//! - `size <bytes>` — region capacity (required, before any write)
//! - `base <addr>` — label cells from a fixed logical base instead of raw
//!   offsets (optional, before any write)
//! - `w32 <addr> <value> [note…]` — one step: a little-endian 32-bit write,
//!   with an optional free-form note shown in the write log
//!
//! `#` starts a comment; blank lines are ignored. Integers are decimal or
//! `0x`-prefixed hex. Parse errors carry 1-based line numbers.

use crate::errors::ScriptError;
use crate::memory::Address;
use crate::view::AddressBase;

/// One scripted write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOp {
    pub address: Address,
    pub value: u32,
    /// Free-form annotation shown alongside the applied write
    pub note: Option<String>,
}

/// A parsed write script
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub size: usize,
    pub base: AddressBase,
    pub writes: Vec<WriteOp>,
}

impl Script {
    /// Parse a whole script source
    pub fn parse(source: &str) -> Result<Script, ScriptError> {
        let mut size: Option<usize> = None;
        let mut base = AddressBase::Buffer;
        let mut writes: Vec<WriteOp> = Vec::new();

        for (index, raw_line) in source.lines().enumerate() {
            let line = index + 1;

            // Strip comments and surrounding whitespace
            let text = match raw_line.find('#') {
                Some(pos) => &raw_line[..pos],
                None => raw_line,
            };
            let text = text.trim();
            if text.is_empty() {
                continue;
            }

            let mut tokens = text.split_whitespace();
            let directive = tokens.next().expect("non-empty line has a first token");
            let rest: Vec<&str> = tokens.collect();

            match directive {
                "size" => {
                    if !writes.is_empty() {
                        return Err(ScriptError::DirectiveAfterWrites {
                            directive: "size",
                            line,
                        });
                    }
                    let [operand] = &rest[..] else {
                        return Err(ScriptError::MalformedDirective {
                            directive: "size",
                            expected: "one operand: size <bytes>",
                            line,
                        });
                    };
                    size = Some(parse_int(operand, line)? as usize);
                }
                "base" => {
                    if !writes.is_empty() {
                        return Err(ScriptError::DirectiveAfterWrites {
                            directive: "base",
                            line,
                        });
                    }
                    let [operand] = &rest[..] else {
                        return Err(ScriptError::MalformedDirective {
                            directive: "base",
                            expected: "one operand: base <addr>",
                            line,
                        });
                    };
                    base = AddressBase::Fixed(parse_int(operand, line)?);
                }
                "w32" => {
                    let [addr, value, note @ ..] = &rest[..] else {
                        return Err(ScriptError::MalformedDirective {
                            directive: "w32",
                            expected: "w32 <addr> <value> [note…]",
                            line,
                        });
                    };
                    writes.push(WriteOp {
                        address: parse_int(addr, line)?,
                        value: parse_int(value, line)? as u32,
                        note: if note.is_empty() {
                            None
                        } else {
                            Some(note.join(" "))
                        },
                    });
                }
                other => {
                    return Err(ScriptError::UnknownDirective {
                        directive: other.to_string(),
                        line,
                    });
                }
            }
        }

        let size = size.ok_or(ScriptError::MissingSize)?;
        log::debug!("parsed script: {} bytes, {} writes", size, writes.len());

        Ok(Script {
            size,
            base,
            writes,
        })
    }
}

/// Parse a decimal or `0x`-prefixed hex integer
fn parse_int(token: &str, line: usize) -> Result<u64, ScriptError> {
    let parsed = if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else {
        token.parse::<u64>()
    };
    parsed.map_err(|_| ScriptError::InvalidNumber {
        token: token.to_string(),
        line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_script() {
        let script = Script::parse(
            "# demo\n\
             size 64\n\
             base 0xffff0000\n\
             \n\
             w32 0x3c 0xffff0058 saved ebp\n\
             w32 0 7\n",
        )
        .unwrap();

        assert_eq!(script.size, 64);
        assert_eq!(script.base, AddressBase::Fixed(0xffff_0000));
        assert_eq!(script.writes.len(), 2);
        assert_eq!(script.writes[0].address, 0x3c);
        assert_eq!(script.writes[0].value, 0xffff_0058);
        assert_eq!(script.writes[0].note.as_deref(), Some("saved ebp"));
        assert_eq!(script.writes[1], WriteOp { address: 0, value: 7, note: None });
    }

    #[test]
    fn test_trailing_comment_is_stripped() {
        let script = Script::parse("size 16\nw32 0 1 # not a note\n").unwrap();
        assert_eq!(script.writes[0].note, None);
    }

    #[test]
    fn test_missing_size() {
        assert_eq!(Script::parse("w32 0 1\n"), Err(ScriptError::MissingSize));
    }

    #[test]
    fn test_unknown_directive_reports_line() {
        let err = Script::parse("size 16\nw64 0 1\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownDirective {
                directive: "w64".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn test_invalid_number_reports_token_and_line() {
        let err = Script::parse("size 16\nw32 0xzz 1\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::InvalidNumber {
                token: "0xzz".to_string(),
                line: 2,
            }
        );
    }

    #[test]
    fn test_size_after_writes_is_rejected() {
        let err = Script::parse("size 16\nw32 0 1\nsize 32\n").unwrap_err();
        assert_eq!(
            err,
            ScriptError::DirectiveAfterWrites {
                directive: "size",
                line: 3,
            }
        );
    }

    #[test]
    fn test_malformed_write() {
        let err = Script::parse("size 16\nw32 0\n").unwrap_err();
        assert!(matches!(
            err,
            ScriptError::MalformedDirective {
                directive: "w32",
                ..
            }
        ));
    }
}

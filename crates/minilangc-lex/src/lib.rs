//! minilangc-lex - Lexical Analyzer
//!
//! Transforms MiniLang source text into a token stream. Tokenization is a
//! pure function of the input: identical source yields an identical token
//! sequence, including positions.
//!
//! The lexer is direct-coded (one dispatch per leading character) rather
//! than table-driven, following the same approach `faxc-lex` takes for
//! its own, much larger, token set.

mod cursor;
mod error;
mod lexer;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use token::{Number, Token, TokenKind};

/// Tokenizes `source`, returning a stream terminated by exactly one `Eof`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    minilangc_util::trace_stage(
        minilangc_util::Stage::Lexical,
        &format!("tokenizing {} bytes", source.len()),
    );
    let tokens = Lexer::new(source).tokenize()?;
    minilangc_util::trace_stage(
        minilangc_util::Stage::Lexical,
        &format!("produced {} tokens", tokens.len()),
    );
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn empty_source_yields_only_eof() {
        assert_eq!(kinds(""), vec![TokenKind::Eof]);
    }

    #[test]
    fn whitespace_and_comment_only_source_yields_only_eof() {
        assert_eq!(kinds("   \t\r\n // nothing here\n"), vec![TokenKind::Eof]);
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(kinds("var"), vec![TokenKind::Var, TokenKind::Eof]);
        assert_eq!(kinds("Var"), vec![TokenKind::Identifier, TokenKind::Eof]);
    }

    #[test]
    fn two_char_operators_take_priority_over_prefixes() {
        assert_eq!(
            kinds("== != <= >="),
            vec![
                TokenKind::Equal,
                TokenKind::NotEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Eof,
            ]
        );
        assert_eq!(
            kinds("= < >"),
            vec![
                TokenKind::Assign,
                TokenKind::LessThan,
                TokenKind::GreaterThan,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn bang_alone_is_invalid() {
        assert!(matches!(
            tokenize("!"),
            Err(LexError::UnrecognizedChar { ch: '!', .. })
        ));
    }

    #[test]
    fn integer_and_float_numbers() {
        let tokens = tokenize("42 2.5").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Number(Number::Int(42)));
        assert_eq!(tokens[1].kind, TokenKind::Number(Number::Float(2.5)));
    }

    #[test]
    fn trailing_dot_is_malformed() {
        assert!(matches!(
            tokenize("3."),
            Err(LexError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn multiple_dots_is_malformed() {
        assert!(matches!(
            tokenize("3.14.5"),
            Err(LexError::MalformedNumber { .. })
        ));
    }

    #[test]
    fn unrecognized_character_reports_position() {
        match tokenize("var x;\n@") {
            Err(LexError::UnrecognizedChar { ch, span }) => {
                assert_eq!(ch, '@');
                assert_eq!(span.line, 2);
                assert_eq!(span.column, 1);
            }
            other => panic!("expected UnrecognizedChar, got {other:?}"),
        }
    }

    #[test]
    fn comment_runs_to_end_of_line_not_past_it() {
        let tokens = tokenize("print(1); // comment\nprint(2);").unwrap();
        // two `print` keywords survive; the comment produced no tokens.
        let print_count = tokens.iter().filter(|t| t.kind == TokenKind::Print).count();
        assert_eq!(print_count, 2);
    }

    #[test]
    fn line_and_column_track_newlines() {
        let tokens = tokenize("var x;\nvar y;").unwrap();
        let second_var = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Var)
            .nth(1)
            .unwrap();
        assert_eq!(second_var.span.line, 2);
        assert_eq!(second_var.span.column, 1);
    }

    #[test]
    fn stream_always_ends_with_exactly_one_eof() {
        let tokens = tokenize("var x; x = 1;").unwrap();
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
        assert_eq!(
            tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(),
            1
        );
    }
}

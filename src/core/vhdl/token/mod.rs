use crate::core::lexer::TrainCar;
use std::fmt::Debug;
use std::fmt::Display;
use std::str::FromStr;

pub mod comment;
pub mod delimiter;

pub mod identifier;
pub mod keyword;
pub mod literal;
pub mod tokenizer;

use literal::{based_integer, AbstLiteral, BaseSpec, BitStrLiteral, Character};
pub use tokenizer::char_set;

pub type Identifier = identifier::Identifier;
pub type Comment = comment::Comment;
pub type Keyword = keyword::Keyword;
pub type Delimiter = delimiter::Delimiter;
pub type VhdlTokenizer = tokenizer::VhdlTokenizer;
pub type VhdlError = super::error::VhdlError;

#[derive(Debug, PartialEq, Clone)]
pub enum VhdlToken {
    Comment(Comment),             // (String)
    Identifier(Identifier), // (String) ...can be general or extended (case-sensitive) identifier
    AbstLiteral(AbstLiteral), // (String)
    CharLiteral(Character), // (String)
    StrLiteral(String),     // (String)
    BitStrLiteral(BitStrLiteral), // (String)
    Keyword(Keyword),
    Delimiter(Delimiter),
    EOF,
}

impl Display for VhdlToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Comment(note) => note.to_string(),
                Self::Identifier(id) => id.to_string(),
                Self::AbstLiteral(a) => a.to_string(),
                Self::CharLiteral(c) => c.to_string(),
                Self::StrLiteral(s) => format!("\"{}\"", s),
                Self::BitStrLiteral(b) => b.to_string(),
                Self::Keyword(kw) => kw.to_string(),
                Self::Delimiter(d) => d.to_string(),
                Self::EOF => String::new(),
            }
        )
    }
}

impl VhdlToken {
    /// Takes the identifier from the token.
    pub fn take_identifier(self) -> Option<Identifier> {
        match self {
            Self::Identifier(i) => Some(i),
            _ => None,
        }
    }

    /// Casts into a keyword.
    pub fn as_keyword(&self) -> Option<&Keyword> {
        match self {
            Self::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// Checks if the current token type `self` is a delimiter.
    pub fn is_delimiter(&self) -> bool {
        match self {
            Self::Delimiter(_) => true,
            _ => false,
        }
    }

    /// Casts as a delimiter
    pub fn as_delimiter(&self) -> Option<&Delimiter> {
        match self {
            Self::Delimiter(d) => Some(d),
            _ => None,
        }
    }

    /// Attempts to match a string `s` to a valid delimiter.
    pub fn match_delimiter(s: &str) -> Result<Self, VhdlError> {
        match Delimiter::transform(s) {
            Some(d) => Ok(VhdlToken::Delimiter(d)),
            None => Err(VhdlError::Invalid(s.to_string())),
        }
    }

    /// Captures VHDL Tokens that begin with `integer` production rule:
    /// decimal literal, based_literal, and bit_string_literals.
    ///
    /// Assumes the incoming char `c0` was last char consumed as it a digit `0..=9`.
    pub fn consume_numeric(
        train: &mut TrainCar<impl Iterator<Item = char>>,
        c0: char,
    ) -> Result<VhdlToken, VhdlError> {
        let mut based_delim: Option<char> = None;
        let mut number = Self::consume_value_pattern(train, Some(c0), char_set::is_digit)?;
        // check if the next char should be included
        if let Some(mut c) = train.peek() {
            // * decimal_literal
            if c == &char_set::DOT {
                number.push(train.consume().unwrap());
                // gather more integers (must exist)
                let fraction = Self::consume_value_pattern(train, None, char_set::is_digit)?;
                if fraction.is_empty() {
                    return Err(VhdlError::Any(String::from(
                        "cannot have trailing decimal point",
                    )));
                // append to number
                } else {
                    number.push_str(&fraction);
                }
                // update c if there is another token to grab!
                c = if let Some(c_next) = train.peek() {
                    c_next
                } else {
                    return Ok(VhdlToken::AbstLiteral(AbstLiteral::Decimal(number)));
                };
            // * based_literal (can begin with '#' or ':')
            } else if c == &char_set::HASH || c == &char_set::COLON {
                // verify 2 <= number <= 16
                let base = literal::interpret_integer(&number);
                if base < 2 || base > 16 {
                    return Err(VhdlError::Any(String::from(
                        "based literal must have base of at least 2 and at most 16",
                    )));
                }
                based_delim = Some(*c);
                number.push(train.consume().unwrap());
                // gather initial extended digits
                // select the `eval` fn to evaluate digits
                let eval = based_integer::as_fn(base);
                let base_integers = Self::consume_value_pattern(train, None, eval)?;

                number.push_str(&base_integers);
                // still expecting another token
                if let Some(c_next) = train.consume() {
                    // closing with a '#' or ':'
                    if c_next == based_delim.unwrap() {
                        number.push(c_next);
                    // is there a dot?
                    } else if c_next == char_set::DOT {
                        number.push(c_next);
                        // gather more integers (must exist)
                        let fraction = Self::consume_value_pattern(train, None, eval)?;
                        number.push_str(&fraction);
                        // make sure there is a closing character '#' or ':'
                        if let Some(c_next_next) = train.consume() {
                            // did not find the closing character '#' or ':'
                            if c_next_next != based_delim.unwrap() {
                                return Err(VhdlError::Any(String::from(
                                    "expecting closing '#' but found something else",
                                )));
                            }
                            if fraction.is_empty() {
                                return Err(VhdlError::Any(String::from(
                                    "expecting an integer after the dot",
                                )));
                            }
                            number.push(c_next_next);
                        // there are no more characters left to consume
                        } else {
                            if fraction.is_empty() {
                                return Err(VhdlError::Any(String::from(
                                    "expecting an integer after the dot",
                                )));
                            }
                            return Err(VhdlError::Any(String::from("expecting closing '#'")));
                        }
                    // an unknown character
                    } else {
                        return Err(VhdlError::Any(String::from(
                            "expecting closing '#' but got something else",
                        )));
                    }
                    // update c if there is another token to grab!
                    c = if let Some(c_next_next) = train.peek() {
                        c_next_next
                    } else {
                        return Ok(VhdlToken::AbstLiteral(AbstLiteral::Based(number)));
                    }
                // there are no more characters to consume
                } else {
                    return Err(VhdlError::Any(String::from("expecting closing '#'")));
                }
            // * bit string literal
            } else if c != &'e' && c != &'E' && char_set::is_letter(&c) {
                // gather letters
                let mut base_spec = String::from(train.consume().unwrap());
                while let Some(c_next) = train.peek() {
                    if char_set::is_letter(c_next) == true {
                        base_spec.push(train.consume().unwrap());
                    } else {
                        break;
                    }
                }
                // verify valid base specifier
                BaseSpec::from_str(&base_spec)?;
                // force double quote to be next
                if train.peek().is_none() || train.peek().unwrap() != &char_set::DOUBLE_QUOTE {
                    return Err(VhdlError::Any(String::from(
                        "expecting opening quote character for bit string literal",
                    )));
                }
                // append base_specifier
                number.push_str(&base_spec);
                // append first double quote " char
                number.push(train.consume().unwrap());
                // complete tokenizing the bit string literal
                return Ok(Self::consume_bit_str_literal(train, number)?);
            }
            // gather exponent
            if c == &'e' || c == &'E' {
                let c0 = train.consume().unwrap();
                let expon = Self::consume_exponent(train, c0)?;
                number.push_str(&expon);
            }
            return Ok(VhdlToken::AbstLiteral(match based_delim {
                Some(_) => AbstLiteral::Based(number),
                None => AbstLiteral::Decimal(number),
            }));
        } else {
            Ok(VhdlToken::AbstLiteral(AbstLiteral::Decimal(number)))
        }
    }

    /// Captures VHDL Tokens: keywords, basic identifiers, and regular bit string literals.
    ///
    /// Assumes the first `letter` char was the last char consumed before the function call.
    pub fn consume_word(
        train: &mut TrainCar<impl Iterator<Item = char>>,
        c0: char,
    ) -> Result<VhdlToken, VhdlError> {
        let mut word = Self::consume_value_pattern(train, Some(c0), char_set::is_letter_or_digit)?;
        match Keyword::match_keyword(&word) {
            Some(kw) => Ok(VhdlToken::Keyword(kw)),
            None => {
                // * bit string literal: check if the next char is a double quote
                if let Some(c) = train.peek() {
                    if c == &char_set::DOUBLE_QUOTE {
                        // verify valid base specifier
                        BaseSpec::from_str(&word)?;
                        // add the opening '"' character to the literal
                        word.push(train.consume().unwrap());
                        return Ok(Self::consume_bit_str_literal(train, word)?);
                    }
                }
                Ok(VhdlToken::Identifier(Identifier::Basic(word)))
            }
        }
    }

    /// Captures the remaining characters for a bit string literal.
    ///
    /// Assumes the integer, base_specifier, and first " char are already consumed
    /// and moved as `s0`. Note that a bit string literal is allowed to have no
    /// characters within the " ".
    /// - bit_string_literal ::= \[ integer ] base_specifier " \[ bit_value ] "
    /// - bit_value ::= graphic_character { [ underline ] graphic_character }
    pub fn consume_bit_str_literal(
        train: &mut TrainCar<impl Iterator<Item = char>>,
        s0: String,
    ) -> Result<VhdlToken, VhdlError> {
        let mut literal = s0;
        // consume bit_value (all graphic characters except the double quote " char)
        let bit_value =
            Self::consume_value_pattern(train, None, char_set::is_graphic_and_not_double_quote)?;
        // verify the next character is the closing double quote " char
        if train.peek().is_none() || train.peek().unwrap() != &char_set::DOUBLE_QUOTE {
            return Err(VhdlError::Any(String::from(
                "expecting closing double quote for bit string literal",
            )));
        }
        literal.push_str(&bit_value);
        // accept the closing " char
        literal.push(train.consume().unwrap());
        Ok(VhdlToken::BitStrLiteral(BitStrLiteral(literal)))
    }

    /// Captures an extended identifier token.
    ///
    /// Errors if the identifier is empty.
    pub fn consume_extended_identifier(
        train: &mut TrainCar<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        let id = Self::consume_literal(train, &char_set::BACKSLASH)?;
        if id.is_empty() {
            Err(VhdlError::Any(String::from(
                "extended identifier cannot be empty",
            )))
        } else {
            Ok(VhdlToken::Identifier(Identifier::Extended(id)))
        }
    }

    /// Captures a character literal according to VHDL-2008 LRM p231.
    ///
    /// Assumes the first single quote '\'' was the last char consumed.
    pub fn consume_char_lit(
        train: &mut TrainCar<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        let mut char_lit = String::with_capacity(1);
        if let Some(c) = train.consume() {
            // verify the character is a graphic character
            if char_set::is_graphic(&c) == false {
                return Err(VhdlError::Any(String::from("char not graphic")));
            }
            // add to the struct
            char_lit.push(c);
            // expect a closing single-quote
            if let Some(c) = train.consume() {
                // return
                if c != char_set::SINGLE_QUOTE {
                    return Err(VhdlError::Any(String::from(
                        "expecting a single quote but got something else",
                    )));
                }
            } else {
                return Err(VhdlError::Any(String::from(
                    "expecting a single quote but got none",
                )));
            }
        }
        Ok(VhdlToken::CharLiteral(Character(char_lit)))
    }

    /// Captures a string literal.
    ///
    /// Assumes the first double quote '\"' was the last char consumed before entering the function.
    pub fn consume_str_lit(
        train: &mut TrainCar<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        let value = Self::consume_literal(train, &char_set::DOUBLE_QUOTE)?;
        Ok(VhdlToken::StrLiteral(value))
    }

    /// Collects a delimited comment (all characters after a `/*` up until `*/`).
    ///
    /// Assumes the opening '/' char was the last char consumed before entering the function.
    /// Also assumes the next char is '*'.
    pub fn consume_delim_comment(
        train: &mut TrainCar<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        // skip over opening '*'
        train.consume().expect("assumes '*' exists");
        let mut note = String::new();
        while let Some(c) = train.consume() {
            // check if we are breaking from the comment
            if c == char_set::STAR {
                if let Some(c_next) = train.peek() {
                    // break from the comment
                    if c_next == &char_set::FWDSLASH {
                        train.consume();
                        return Ok(VhdlToken::Comment(Comment::Delimited(note)));
                    }
                }
            }
            note.push(c);
        }
        Err(VhdlError::Any(String::from("missing closing delimiter */")))
    }

    /// Collects a single-line comment (all characters after a `--` up until end-of-line).
    ///
    /// Assumes the opening '-' was the last char consumed before entering the function.
    /// Also assumes the next char is '-'.
    pub fn consume_comment(
        train: &mut TrainCar<impl Iterator<Item = char>>,
    ) -> Result<VhdlToken, VhdlError> {
        // skip over second '-'
        train.consume();
        // consume characters to form the comment
        let mut note = String::new();
        while let Some(c) = train.consume() {
            // cannot be vt, cr (\r), lf (\n)
            if c == '\u{000B}' || c == '\u{000D}' || c == '\u{000A}' {
                break;
            } else {
                note.push(c);
            }
        }
        Ok(VhdlToken::Comment(Comment::Single(note)))
    }

    /// Walks through the possible interpretations for capturing a VHDL delimiter.
    ///
    /// If it successfully finds a valid VHDL delimiter, it will move the `loc` the number
    /// of characters it consumed.
    pub fn collect_delimiter(
        train: &mut TrainCar<impl Iterator<Item = char>>,
        c0: Option<char>,
    ) -> Result<VhdlToken, VhdlError> {
        // delimiter will have at most 3 characters
        let mut delim = String::with_capacity(3);
        if let Some(c) = c0 {
            delim.push(c);
        };
        // check the next character in the sequence
        while let Some(c) = train.peek() {
            match delim.len() {
                0 => match c {
                    // ambiguous characters...read another character (could be a len-2 delimiter)
                    '?' | '<' | '>' | '/' | '=' | '*' | ':' => delim.push(train.consume().unwrap()),
                    // if it was a delimiter, take the character and increment the location
                    _ => return Self::match_delimiter(&String::from(train.consume().unwrap())),
                },
                1 => match delim.chars().nth(0).unwrap() {
                    '?' => match c {
                        // move on to next round (could be a len-3 delimiter)
                        '/' | '<' | '>' | '=' | '?' => delim.push(train.consume().unwrap()),
                        _ => return Ok(Self::match_delimiter(&delim).expect("invalid token")),
                    },
                    '<' => match c {
                        // move on to next round (could be a len-3 delimiter)
                        '=' | '>' | '<' => delim.push(train.consume().unwrap()),
                        _ => return Ok(Self::match_delimiter(&delim).expect("invalid token")),
                    },
                    _ => {
                        // try with 2
                        delim.push(*c);
                        if let Ok(op) = Self::match_delimiter(&delim) {
                            train.consume();
                            return Ok(op);
                        } else {
                            // revert back to 1
                            delim.pop();
                            return Self::match_delimiter(&delim);
                        }
                    }
                },
                2 => {
                    // try with 3
                    delim.push(*c);
                    if let Ok(op) = Self::match_delimiter(&delim) {
                        train.consume();
                        return Ok(op);
                    } else {
                        // revert back to 2 (guaranteed to exist)
                        delim.pop();
                        return Ok(Self::match_delimiter(&delim).expect("invalid token"));
                    }
                }
                _ => panic!("delimiter matching exceeds 3 characters"),
            }
        }
        // try when hitting end of stream
        Self::match_delimiter(&delim)
    }

    /// Captures the generic pattern production rule by passing a fn as `eval` to compare.
    ///
    /// This function allows for an empty result to be returned as `Ok`.
    /// - A ::= A { \[ underline ] A }
    pub fn consume_value_pattern(
        train: &mut TrainCar<impl Iterator<Item = char>>,
        c0: Option<char>,
        eval: fn(&char) -> bool,
    ) -> Result<String, VhdlError> {
        let mut car = if let Some(c) = c0 {
            String::from(c)
        } else {
            String::new()
        };
        while let Some(c) = train.peek() {
            if eval(&c) == true {
                car.push(train.consume().unwrap());
            } else if c == &char_set::UNDERLINE {
                if car.is_empty() == true {
                    return Err(VhdlError::Any(String::from(
                        "expecting a digit before underline",
                    )));
                }
                car.push(train.consume().unwrap());
                // a digit must proceed the underline
                if let Some(c_next) = train.consume() {
                    if eval(&c_next) == false {
                        return Err(VhdlError::Any(String::from(
                            "expecting a digit to follow underline",
                        )));
                    } else {
                        car.push(c_next);
                    }
                } else {
                    return Err(VhdlError::Any(String::from("expecting a digit")));
                }
            } else {
                break;
            }
        }
        Ok(car)
    }

    /// Captures an exponent.
    ///
    /// Assumes the previous function has already peeked and determined the next char is 'E' as `c0`.
    /// - exponent ::= E \[ + ] integer | E - integer
    fn consume_exponent(
        train: &mut TrainCar<impl Iterator<Item = char>>,
        c0: char,
    ) -> Result<String, VhdlError> {
        // start with 'E'
        let mut expon = String::from(c0);
        // check for sign
        let sign = if let Some(c1) = train.consume() {
            if c1 != char_set::PLUS && c1 != char_set::DASH && char_set::is_digit(&c1) == false {
                return Err(VhdlError::Any(String::from("expecting +, -, or a digit")));
            } else {
                c1
            }
        } else {
            return Err(VhdlError::Any(String::from(
                "expecting +, -, or digit but got nothing",
            )));
        };
        // determine if c0 was a digit
        let c0 = if char_set::is_digit(&sign) == true {
            Some(sign)
        } else {
            // add the sign to the exponent
            expon.push(sign);
            None
        };
        let value = Self::consume_value_pattern(train, c0, char_set::is_digit)?;
        if value.is_empty() {
            Err(VhdlError::Any(String::from(
                "expecting an integer exponent value but got nothing",
            )))
        } else {
            expon.push_str(&value);
            Ok(expon)
        }
    }

    /// Walks through the stream to gather a `String` literal until finding the
    /// exiting character `br`.
    ///
    /// An escape is allowed by double placing the `br`, i.e. """hello"" world".
    /// Assumes the first token to parse in the stream is not the `br` character.
    /// Allows for zero or more characters in result and chars must be graphic.
    pub fn consume_literal(
        train: &mut TrainCar<impl Iterator<Item = char>>,
        br: &char,
    ) -> Result<String, VhdlError> {
        let mut result = String::new();
        while let Some(c) = train.consume() {
            // verify it is a graphic character
            if char_set::is_graphic(&c) == false {
                return Err(VhdlError::Any(String::from("invalid character in literal")));
            }
            // detect escape sequence
            if br == &c {
                match train.peek() {
                    Some(c_next) => {
                        if br == c_next {
                            train.consume(); // skip over escape character
                        } else {
                            return Ok(result);
                        }
                    }
                    None => return Ok(result),
                }
            }
            result.push(c);
        }
        Err(VhdlError::Any(String::from("expecting closing delimiter")))
    }
}

impl VhdlToken {
    /// Checks if the element is a particular keyword `kw`.
    pub fn check_keyword(&self, kw: &Keyword) -> bool {
        match self {
            VhdlToken::Keyword(r) => r == kw,
            _ => false,
        }
    }

    pub fn is_eof(&self) -> bool {
        match self {
            VhdlToken::EOF => true,
            _ => false,
        }
    }

    pub fn is_comment(&self) -> bool {
        match self {
            VhdlToken::Comment(_) => true,
            _ => false,
        }
    }

    /// Accesses the underlying `Identifier`, if one exists.
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            VhdlToken::Identifier(id) => Some(id),
            _ => None,
        }
    }

    /// Checks if the element is a particular delimiter `d`.
    pub fn check_delimiter(&self, d: &Delimiter) -> bool {
        match self {
            VhdlToken::Delimiter(r) => r == d,
            _ => false,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            VhdlToken::Comment(r) => Some(r),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::core::lexer::Tokenize;
    use super::literal::Character;

    #[test]
    fn single_quote_as_delimiter() {
        let contents = "\
foo <= std_logic_vector'('a','b','c');";
        let tokens: Vec<VhdlToken> = VhdlTokenizer::tokenize(&contents)
            .into_iter()
            .map(|f| f.unwrap().take())
            .collect();
        assert_eq!(
            tokens,
            vec![
                VhdlToken::Identifier(Identifier::Basic("foo".to_owned())),
                VhdlToken::Delimiter(Delimiter::SigAssign),
                VhdlToken::Identifier(Identifier::Basic("std_logic_vector".to_owned())),
                VhdlToken::Delimiter(Delimiter::SingleQuote),
                VhdlToken::Delimiter(Delimiter::ParenL),
                VhdlToken::CharLiteral(Character("a".to_owned())),
                VhdlToken::Delimiter(Delimiter::Comma),
                VhdlToken::CharLiteral(Character("b".to_owned())),
                VhdlToken::Delimiter(Delimiter::Comma),
                VhdlToken::CharLiteral(Character("c".to_owned())),
                VhdlToken::Delimiter(Delimiter::ParenR),
                VhdlToken::Delimiter(Delimiter::Terminator),
                VhdlToken::EOF,
            ]
        );
    }

    #[test]
    fn lex_literals() {
        let contents = "16#FF# 2.5 1e3 10ub\"10\" x\"a8\"";
        let tokens: Vec<VhdlToken> = VhdlTokenizer::tokenize(&contents)
            .into_iter()
            .map(|f| f.unwrap().take())
            .collect();
        assert_eq!(
            tokens,
            vec![
                VhdlToken::AbstLiteral(AbstLiteral::Based("16#FF#".to_owned())),
                VhdlToken::AbstLiteral(AbstLiteral::Decimal("2.5".to_owned())),
                VhdlToken::AbstLiteral(AbstLiteral::Decimal("1e3".to_owned())),
                VhdlToken::BitStrLiteral(BitStrLiteral("10ub\"10\"".to_owned())),
                VhdlToken::BitStrLiteral(BitStrLiteral("x\"a8\"".to_owned())),
                VhdlToken::EOF,
            ]
        );
    }

    #[test]
    fn compound_delimiters() {
        let contents = "<= <> <=> ?= ?<= << := =>";
        let tokens: Vec<VhdlToken> = VhdlTokenizer::tokenize(&contents)
            .into_iter()
            .map(|f| f.unwrap().take())
            .collect();
        assert_eq!(
            tokens,
            vec![
                VhdlToken::Delimiter(Delimiter::SigAssign),
                VhdlToken::Delimiter(Delimiter::Box),
                VhdlToken::Delimiter(Delimiter::SigAssoc),
                VhdlToken::Delimiter(Delimiter::MatchEQ),
                VhdlToken::Delimiter(Delimiter::MatchLTE),
                VhdlToken::Delimiter(Delimiter::DoubleLT),
                VhdlToken::Delimiter(Delimiter::VarAssign),
                VhdlToken::Delimiter(Delimiter::Arrow),
                VhdlToken::EOF,
            ]
        );
    }

    #[test]
    fn lex_comments_and_keywords() {
        let contents = "\
-- design under test
entity dut is end; /* nothing
to see */ architecture a of dut is begin end;";
        let tokens: Vec<VhdlToken> = VhdlTokenizer::tokenize(&contents)
            .into_iter()
            .map(|f| f.unwrap().take())
            .filter(|f| f.is_comment() == false)
            .collect();
        assert_eq!(tokens.first().unwrap(), &VhdlToken::Keyword(Keyword::Entity));
        assert_eq!(
            tokens
                .iter()
                .filter(|f| f.check_keyword(&Keyword::End))
                .count(),
            2
        );
    }
}

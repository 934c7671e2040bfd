use super::*;

type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Option<Expression>;
/// Suffix operators are parsed as infix operators without a right operand.
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Option<Expression>;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses an expression whose operators bind tighter than `precedence`.
    /// To parse any expression, use `Precedence::Lowest`.
    pub fn parse_expr(&mut self, precedence: Precedence) -> Option<Expression> {
        self.nested(|parser| parser.parse_expr_at(precedence))
    }

    fn parse_expr_at(&mut self, precedence: Precedence) -> Option<Expression> {
        let prefix = match Self::prefix_parse_fn(self.current_token.kind) {
            Some(prefix) => prefix,
            None => {
                self.no_prefix_parse_fn_error();
                return None;
            }
        };
        let mut left = prefix(self)?;

        while !self.peek_is(TokenKind::Semicolon) && precedence < self.peek_token.kind.precedence()
        {
            let infix = match Self::infix_parse_fn(self.peek_token.kind) {
                Some(infix) => infix,
                None => return Some(left), // not an operator, stop parsing
            };
            // the operator becomes `current_token`
            self.next();

            left = infix(self, left)?;
        }

        Some(left)
    }

    /// Handler for tokens that can start an expression.
    fn prefix_parse_fn(kind: TokenKind) -> Option<PrefixParseFn<'a>> {
        let prefix: PrefixParseFn<'a> = match kind {
            TokenKind::Ident => Self::parse_identifier_expr,
            TokenKind::Int => Self::parse_integer_literal,
            TokenKind::True | TokenKind::False => Self::parse_boolean_literal,
            TokenKind::Bang | TokenKind::Minus => Self::parse_prefix_expr,
            TokenKind::LParen => Self::parse_grouped_expr,
            TokenKind::If => Self::parse_if_expr,
            TokenKind::Function => Self::parse_function_literal,
            _ => return None,
        };
        Some(prefix)
    }

    /// Handler for tokens that can follow an expression.
    fn infix_parse_fn(kind: TokenKind) -> Option<InfixParseFn<'a>> {
        let infix: InfixParseFn<'a> = match kind {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multi
            | TokenKind::Divide
            | TokenKind::Eq
            | TokenKind::Ne
            | TokenKind::Lt
            | TokenKind::Le
            | TokenKind::Gt
            | TokenKind::Ge => Self::parse_infix_expr,
            TokenKind::PlusPlus | TokenKind::MinusMinus | TokenKind::What => {
                Self::parse_suffix_expr
            }
            TokenKind::LParen => Self::parse_call_expr,
            _ => return None,
        };
        Some(infix)
    }

    fn no_prefix_parse_fn_error(&mut self) {
        let message = match self.current_token.kind {
            TokenKind::Illegal => format!("illegal character {}", self.current_token.literal),
            kind => format!("no prefix parse fn for {} found", kind),
        };
        self.error(message);
    }

    /* Expressions.Prefix */
    fn parse_identifier_expr(&mut self) -> Option<Expression> {
        Some(Expression::Identifier(Identifier::new(
            self.current_token.clone(),
        )))
    }

    /// An integer literal that does not fit in an `i64` is reported and replaced by `0`.
    fn parse_integer_literal(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        let value = match token.literal.parse::<i64>() {
            Ok(value) => value,
            Err(_) => {
                self.error(format!("could not parse {} as integer", token.literal));
                0
            }
        };
        Some(Expression::IntegerLiteral { token, value })
    }

    fn parse_boolean_literal(&mut self) -> Option<Expression> {
        Some(Expression::BooleanLiteral {
            value: self.current_is(TokenKind::True),
            token: self.current_token.clone(),
        })
    }

    fn parse_prefix_expr(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();
        self.next();

        let right = self.parse_expr(Precedence::Prefix)?;
        Some(Expression::Prefix {
            token,
            right: Box::new(right),
        })
    }

    fn parse_grouped_expr(&mut self) -> Option<Expression> {
        self.next();

        let expr = self.parse_expr(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(expr)
    }

    /// `if (<condition>) { ... } else { ... }`. The `else` branch is optional.
    fn parse_if_expr(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        self.next();
        let condition = self.parse_expr(Precedence::Lowest)?;
        if !self.expect_peek(TokenKind::RParen) || !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let consequence = self.parse_block_stmt();

        let alternative = if self.peek_is(TokenKind::Else) {
            self.next();
            if !self.expect_peek(TokenKind::LBrace) {
                return None;
            }
            Some(self.parse_block_stmt())
        } else {
            None
        };

        Some(Expression::If {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        })
    }

    /// `fn(<params>) { ... }`
    fn parse_function_literal(&mut self) -> Option<Expression> {
        let token = self.current_token.clone();

        if !self.expect_peek(TokenKind::LParen) {
            return None;
        }
        let params = self.parse_function_params()?;
        if !self.expect_peek(TokenKind::LBrace) {
            return None;
        }
        let body = self.parse_block_stmt();

        Some(Expression::Function {
            token,
            params,
            body,
        })
    }

    /// Parses a comma separated (possibly empty) list of identifiers. `current_token` must be the `(`.
    fn parse_function_params(&mut self) -> Option<Vec<Identifier>> {
        let mut params = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next();
            return Some(params);
        }

        loop {
            if !self.expect_peek(TokenKind::Ident) {
                return None;
            }
            params.push(Identifier::new(self.current_token.clone()));

            if self.peek_is(TokenKind::Comma) {
                self.next();
            } else {
                break;
            }
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(params)
    }

    /* Expressions.Infix */
    /// Parses the right operand at the operator's own precedence, which makes binary operators left associative.
    fn parse_infix_expr(&mut self, left: Expression) -> Option<Expression> {
        let token = self.current_token.clone();
        let precedence = token.kind.precedence();
        self.next();

        let right = self.parse_expr(precedence)?;
        Some(Expression::Infix {
            token,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    fn parse_suffix_expr(&mut self, left: Expression) -> Option<Expression> {
        Some(Expression::Suffix {
            token: self.current_token.clone(),
            left: Box::new(left),
        })
    }

    fn parse_call_expr(&mut self, function: Expression) -> Option<Expression> {
        let token = self.current_token.clone();
        let arguments = self.parse_call_arguments()?;
        Some(Expression::Call {
            token,
            function: Box::new(function),
            arguments,
        })
    }

    /// Parses a comma separated (possibly empty) list of expressions. `current_token` must be the `(`.
    fn parse_call_arguments(&mut self) -> Option<Vec<Expression>> {
        let mut args = Vec::new();
        if self.peek_is(TokenKind::RParen) {
            self.next();
            return Some(args);
        }

        self.next();
        args.push(self.parse_expr(Precedence::Lowest)?);
        while self.peek_is(TokenKind::Comma) {
            self.next();
            self.next();
            args.push(self.parse_expr(Precedence::Lowest)?);
        }

        if !self.expect_peek(TokenKind::RParen) {
            return None;
        }
        Some(args)
    }
}

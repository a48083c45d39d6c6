use super::*;

impl<'a> Parser<'a> {
    /* Expressions */
    /// Parses any expression.
    /// This is equivalent to calling [`Self::parse_expr_bp`] with `min_bp = 0`.
    pub fn parse_expr(&mut self) -> ParseResult<Node> {
        self.parse_expr_bp(0) // 0 to accept any expression
    }

    /// Parses a primary (atom) expression.
    fn parse_primary_expr(&mut self) -> ParseResult<Node> {
        match self.current().clone() {
            Token::NumberLit(val) => {
                self.next();
                Ok(Node::number(val))
            }
            Token::Identifier(_) => self.parse_identifier_or_call_expr(),
            Token::OpenParen => {
                self.next();
                let expr = self.parse_expr()?;
                self.expect(Token::CloseParen)?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    /// Parses an expression with the specified `min_bp`.
    /// To parse any expression use, [`Self::parse_expr`].
    fn parse_expr_bp(&mut self, min_bp: u8) -> ParseResult<Node> {
        let mut lhs = self.parse_primary_expr()?;

        loop {
            let (op, (l_bp, r_bp)) = match (self.current().as_operator(), self.current().binop_bp()) {
                (Some(op), Some(bp)) => (op, bp),
                _ => break, // not a valid binop, stop parsing
            };
            if l_bp < min_bp {
                break; // less than the min_bp, stop parsing
            }

            // self.current() is a valid binop
            self.next();

            let rhs = self.parse_expr_bp(r_bp)?;

            lhs = Node::binary_op(op, lhs, rhs);
        }

        Ok(lhs)
    }

    /* Expressions.Identifier */
    /// Parses an identifier or a function call (`ident(args...)`).
    fn parse_identifier_or_call_expr(&mut self) -> ParseResult<Node> {
        let ident = self.expect_identifier()?;

        if !self.eat(Token::OpenParen) {
            return Ok(Node::identifier(ident));
        }

        let mut args = Vec::new();
        if !self.eat(Token::CloseParen) {
            loop {
                args.push(self.parse_expr()?);

                if self.eat(Token::CloseParen) {
                    break;
                }
                self.expect(Token::Comma)?;
            }
        }

        Ok(Node::fun_call(ident, args))
    }
}

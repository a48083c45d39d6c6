use super::*;

impl<'a> Parser<'a> {
    /// Parses a top-level item (a function definition or a statement).
    pub fn parse_item(&mut self) -> ParseResult<Node> {
        if self.at_fun_def() {
            self.parse_fun_def()
        } else {
            self.parse_stmt()
        }
    }

    /// Parses a statement.
    pub fn parse_stmt(&mut self) -> ParseResult<Node> {
        match self.current() {
            Token::Int if self.at_fun_def() => Err(SyntaxError::new(
                "Function definitions are only allowed at top level",
                self.span(),
            )),
            Token::Int => self.parse_var_decl(),
            Token::Return => self.parse_return_stmt(),
            Token::If => self.parse_if_stmt(),
            Token::While => self.parse_while_stmt(),
            Token::OpenBrace => self.parse_block_stmt(),
            Token::Identifier(_) if *self.nth(1) == Token::Equals => self.parse_assign_stmt(),
            _ => {
                // expression statement
                let expr = self.parse_expr()?;
                self.expect(Token::Semi)?;
                Ok(expr)
            }
        }
    }

    pub fn parse_block_stmt(&mut self) -> ParseResult<Node> {
        self.expect(Token::OpenBrace)?;

        let mut body = Vec::new();
        while !self.eat(Token::CloseBrace) {
            if *self.current() == Token::Eof {
                return Err(self.unexpected(&Token::CloseBrace.to_string()));
            }
            body.push(self.parse_stmt()?);
        }

        Ok(Node::compound(body))
    }

    /// `int <ident> (` starts a function definition.
    fn at_fun_def(&self) -> bool {
        *self.current() == Token::Int
            && matches!(self.nth(1), Token::Identifier(_))
            && *self.nth(2) == Token::OpenParen
    }

    fn parse_fun_def(&mut self) -> ParseResult<Node> {
        self.expect(Token::Int)?;
        let ident = self.expect_identifier()?;
        self.expect(Token::OpenParen)?;

        let mut params = Vec::new();
        if !self.eat(Token::CloseParen) {
            loop {
                self.expect(Token::Int)?;
                params.push(self.expect_identifier()?);

                if self.eat(Token::CloseParen) {
                    break;
                }
                self.expect(Token::Comma)?;
            }
        }

        let body = self.parse_block_stmt()?;
        Ok(Node::fun_def(ident, params, body))
    }

    fn parse_var_decl(&mut self) -> ParseResult<Node> {
        self.expect(Token::Int)?;
        let ident = self.expect_identifier()?;
        let initializer = if self.eat(Token::Equals) {
            Some(self.parse_expr()?)
        } else {
            None
        };
        self.expect(Token::Semi)?;
        Ok(Node::var_decl(ident, initializer))
    }

    fn parse_assign_stmt(&mut self) -> ParseResult<Node> {
        let ident = self.expect_identifier()?;
        self.expect(Token::Equals)?;
        let value = self.parse_expr()?;
        self.expect(Token::Semi)?;
        Ok(Node::assign(ident, value))
    }

    fn parse_return_stmt(&mut self) -> ParseResult<Node> {
        self.expect(Token::Return)?;
        let expr = self.parse_expr()?;
        self.expect(Token::Semi)?;
        Ok(Node::return_stmt(expr))
    }

    fn parse_if_stmt(&mut self) -> ParseResult<Node> {
        self.expect(Token::If)?;
        let condition = self.parse_condition()?;
        let then_branch = self.parse_stmt()?;
        // `else` binds to the nearest `if`
        let else_branch = if self.eat(Token::Else) {
            Some(self.parse_stmt()?)
        } else {
            None
        };
        Ok(Node::if_stmt(condition, then_branch, else_branch))
    }

    fn parse_while_stmt(&mut self) -> ParseResult<Node> {
        self.expect(Token::While)?;
        let condition = self.parse_condition()?;
        let body = self.parse_stmt()?;
        Ok(Node::while_stmt(condition, body))
    }

    /// Parses a parenthesized `if` or `while` condition.
    fn parse_condition(&mut self) -> ParseResult<Node> {
        self.expect(Token::OpenParen)?;
        let condition = self.parse_expr()?;
        self.expect(Token::CloseParen)?;
        Ok(condition)
    }
}

use super::{Function, Link, Segment, Symbols};
use crate::error;
use crate::lang::{Cursor, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Statement and expression compiler
///
/// Parsing and emission happen together. Each method consumes source
/// from the cursor and appends postfix tokens to the code segment, so
/// operands are always written before the word that consumes them.

#[derive(Debug, Default)]
pub struct Compiler {
    pub(super) data: Segment,
    pub(super) code: Segment,
    pub(super) symbols: Symbols,
    pub(super) link: Link,
}

impl Compiler {
    pub fn new() -> Compiler {
        Compiler::default()
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.code.clear();
        self.symbols.clear();
        self.link.clear();
    }

    pub fn data(&self) -> &Segment {
        &self.data
    }

    pub fn code(&self) -> &Segment {
        &self.code
    }

    /// Compiles one source line: an optional line number then exactly one statement.
    pub fn line(&mut self, line: &mut Cursor) -> Result<()> {
        if line.is_digit() {
            let line_number = line.parse_number()?;
            self.link.define(line_number, &mut self.code);
        }
        self.statement(line)?;
        if !line.done() {
            return Err(error!(UnexpectedCharacter, ..&line.column(); "EXPECTED END OF LINE"));
        }
        self.code.newline();
        Ok(())
    }

    pub fn statement(&mut self, line: &mut Cursor) -> Result<()> {
        if line.r#match("REM") {
            self.r#rem(line)
        } else if line.r#match("PRINT") {
            self.r#print(line)
        } else if line.r#match("INPUT") {
            self.r#input(line)
        } else if line.r#match("IF") {
            self.r#if(line)
        } else if line.r#match("LET") {
            self.r#let(line)
        } else if line.r#match("GOTO") {
            self.r#goto(line)
        } else if line.r#match("GOSUB") {
            self.r#gosub(line)
        } else if line.r#match("POKE") {
            self.r#poke(line)
        } else if line.r#match("CALL") {
            self.r#call(line)
        } else if line.r#match("RETURN") {
            self.r#return(line)
        } else if line.r#match("END") {
            self.r#end(line)
        } else if line.r#match("DIM") {
            self.r#dim(line)
        } else {
            Err(error!(UnknownStatement, ..&line.column()))
        }
    }

    /// `expression = term { ("+" | "-") term }`
    pub fn expression(&mut self, line: &mut Cursor) -> Result<()> {
        self.term(line)?;
        loop {
            if line.expr_done() {
                return Ok(());
            } else if line.r#match("+") {
                self.term(line)?;
                self.code.push("+");
            } else if line.r#match("-") {
                self.term(line)?;
                self.code.push("-");
            } else {
                return Err(error!(MalformedExpression, ..&line.column()));
            }
        }
    }

    fn term(&mut self, line: &mut Cursor) -> Result<()> {
        self.factor(line)?;
        loop {
            if line.r#match("*") {
                self.factor(line)?;
                self.code.push("*");
            } else if line.r#match("/") {
                self.factor(line)?;
                self.code.push("/");
            } else if line.r#match("%") {
                self.factor(line)?;
                self.code.push("mod");
            } else {
                return Ok(());
            }
        }
    }

    fn factor(&mut self, line: &mut Cursor) -> Result<()> {
        if let Some((word, arity)) = Function::scan(line) {
            let mut args = line.parse_parens()?;
            self.expression(&mut args)?;
            for _ in 1..arity {
                args.expect(',')?;
                self.expression(&mut args)?;
            }
            self.code.push(word);
            return Self::exhausted(&args);
        }
        if line.r#match("VAR") {
            let mut inner = line.parse_parens()?;
            let name = inner.parse_var()?;
            self.code.push(name);
            return Self::exhausted(&inner);
        }
        if line.is_alpha() {
            let name = line.parse_var()?;
            self.var(name);
            self.code.push("@");
        } else if line.is_digit() {
            let number = line.parse_number()?;
            self.code.push(&number.to_string());
        } else if line.at('(') {
            let mut inner = line.parse_parens()?;
            self.expression(&mut inner)?;
            return Self::exhausted(&inner);
        } else {
            return Err(error!(MalformedFactor, ..&line.column()));
        }
        Ok(())
    }

    fn exhausted(inner: &Cursor) -> Result<()> {
        if inner.done() {
            Ok(())
        } else {
            Err(error!(UnexpectedCharacter, ..&inner.column()))
        }
    }

    /// Emits a scalar reference, declaring it on first use.
    fn var(&mut self, name: &str) {
        self.symbols.declare_if_new(name, &mut self.data);
        self.code.push(name);
    }

    fn r#rem(&mut self, line: &mut Cursor) -> Result<()> {
        line.skip_rest();
        Ok(())
    }

    fn r#print(&mut self, line: &mut Cursor) -> Result<()> {
        while !line.done() {
            if line.at('"') {
                let s = line.parse_string()?;
                self.code.push(&format!("\"{}\"", s));
                self.code.push("prints");
            } else {
                self.expression(line)?;
                self.code.push("print");
            }
            if !line.r#match(",") {
                break;
            }
        }
        self.code.push("cr");
        Ok(())
    }

    fn r#input(&mut self, line: &mut Cursor) -> Result<()> {
        loop {
            let name = line.parse_var()?;
            self.code.push("input");
            self.var(name);
            self.code.push("!");
            if !line.r#match(",") {
                return Ok(());
            }
        }
    }

    fn r#if(&mut self, line: &mut Cursor) -> Result<()> {
        self.expression(line)?;
        let rel = line.parse_rel_op()?;
        self.expression(line)?;
        line.r#match("THEN");
        self.code.push(rel);
        self.code.push("if");
        self.statement(line)?;
        self.code.push("then");
        Ok(())
    }

    fn r#let(&mut self, line: &mut Cursor) -> Result<()> {
        let name = line.parse_var()?;
        line.r#match("=");
        self.expression(line)?;
        self.var(name);
        self.code.push("!");
        Ok(())
    }

    fn r#goto(&mut self, line: &mut Cursor) -> Result<()> {
        let line_number = line.parse_number()?;
        self.link.reference(line_number, true, &mut self.code);
        self.code.push("goto");
        Ok(())
    }

    fn r#gosub(&mut self, line: &mut Cursor) -> Result<()> {
        let line_number = line.parse_number()?;
        self.link.reference(line_number, false, &mut self.code);
        Ok(())
    }

    fn r#poke(&mut self, line: &mut Cursor) -> Result<()> {
        self.expression(line)?;
        line.expect(',')?;
        self.expression(line)?;
        self.code.push("!");
        Ok(())
    }

    fn r#call(&mut self, line: &mut Cursor) -> Result<()> {
        self.expression(line)?;
        self.code.push("exec");
        Ok(())
    }

    fn r#return(&mut self, _line: &mut Cursor) -> Result<()> {
        self.code.push(";");
        Ok(())
    }

    fn r#end(&mut self, _line: &mut Cursor) -> Result<()> {
        self.code.push("halt");
        Ok(())
    }

    fn r#dim(&mut self, line: &mut Cursor) -> Result<()> {
        let name = line.parse_var()?;
        let mut size = line.parse_parens()?;
        let len = size.parse_number()?;
        Self::exhausted(&size)?;
        self.symbols.declare_array(name, len, &mut self.data);
        Ok(())
    }
}

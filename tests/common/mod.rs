//! Helpers shared by the integration tests: a parser for the printed
//! expressions and an independent normal form to compare them by.
#![allow(dead_code)]

/// A parsed, fully parenthesized expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Binary(char, Box<Expr>, Box<Expr>),
}

struct Parser<'a> {
    rest: &'a str,
}

impl<'a> Parser<'a> {
    fn eat(&mut self, expected: char) -> Result<(), String> {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(format!("expected {expected:?} at {:?}", self.rest)),
        }
    }

    fn expr(&mut self) -> Result<Expr, String> {
        if self.rest.starts_with('(') {
            self.eat('(')?;
            let lhs = self.expr()?;
            self.eat(' ')?;
            let op = self
                .rest
                .chars()
                .next()
                .filter(|c| "+-*/".contains(*c))
                .ok_or_else(|| format!("expected an operator at {:?}", self.rest))?;
            self.eat(op)?;
            self.eat(' ')?;
            let rhs = self.expr()?;
            self.eat(')')?;
            Ok(Expr::Binary(op, Box::new(lhs), Box::new(rhs)))
        } else {
            let end = self
                .rest
                .char_indices()
                .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
                .map_or(self.rest.len(), |(i, _)| i);
            let (number, rest) = self.rest.split_at(end);
            self.rest = rest;
            number
                .parse()
                .map(Expr::Number)
                .map_err(|error| format!("bad number {number:?}: {error}"))
        }
    }
}

pub fn parse(line: &str) -> Result<Expr, String> {
    let mut parser = Parser { rest: line };
    let expr = parser.expr()?;
    if parser.rest.is_empty() {
        Ok(expr)
    } else {
        Err(format!("trailing input {:?}", parser.rest))
    }
}

/// Evaluates with exact integer division. `None` on division by zero, a
/// remainder, or overflow.
pub fn eval(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Number(n) => Some(*n),
        Expr::Binary(op, lhs, rhs) => {
            let (lhs, rhs) = (eval(lhs)?, eval(rhs)?);
            match op {
                '+' => lhs.checked_add(rhs),
                '-' => lhs.checked_sub(rhs),
                '*' => lhs.checked_mul(rhs),
                '/' if lhs.checked_rem(rhs) == Some(0) => lhs.checked_div(rhs),
                _ => None,
            }
        }
    }
}

/// Flattens every `+`/`*` run and sorts its operands, so two expressions get
/// the same string exactly when they differ only by commutativity and
/// associativity of those operators.
pub fn normal_form(expr: &Expr) -> String {
    fn operands<'e>(expr: &'e Expr, op: char, out: &mut Vec<&'e Expr>) {
        match expr {
            Expr::Binary(inner, lhs, rhs) if *inner == op => {
                operands(lhs, op, out);
                operands(rhs, op, out);
            }
            _ => out.push(expr),
        }
    }

    match expr {
        Expr::Number(n) => n.to_string(),
        Expr::Binary(op @ ('+' | '*'), _, _) => {
            let mut flat = Vec::new();
            operands(expr, *op, &mut flat);
            let mut parts: Vec<_> = flat.into_iter().map(normal_form).collect();
            parts.sort();
            format!("[{}]", parts.join(op.to_string().as_str()))
        }
        Expr::Binary(op, lhs, rhs) => format!("({}{op}{})", normal_form(lhs), normal_form(rhs)),
    }
}

pub fn normal_form_of(line: &str) -> String {
    match parse(line) {
        Ok(expr) => normal_form(&expr),
        Err(error) => panic!("cannot parse {line:?}: {error}"),
    }
}

/// Every division in `expr` has a non-zero divisor.
pub fn never_divides_by_zero(expr: &Expr) -> bool {
    match expr {
        Expr::Number(_) => true,
        Expr::Binary(op, lhs, rhs) => {
            never_divides_by_zero(lhs)
                && never_divides_by_zero(rhs)
                && (*op != '/' || eval(rhs) != Some(0))
        }
    }
}

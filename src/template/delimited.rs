// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Reference template engine driven by delimiter patterns.
//!
//! # Scanning
//! The template is scanned left to right for the earliest match of the escape,
//! interpolate and evaluate patterns. When two patterns match at the same offset the
//! first in that order wins, which is what lets `{{{raw}}}` and `{{escaped}}` coexist:
//! the default escape pattern refuses a third opening brace, so only interpolate
//! matches at the start of `{{{raw}}}`.
//!
//! # Expressions
//! A pattern's first capture group is the expression: a dotted property path into the
//! context (`name`, `field.label`, `items.0`). Missing and null values render as the
//! empty string.
//!
//! # Evaluate directives
//! When an evaluate delimiter is configured, its expression is one of:
//!
//! | Directive | Meaning |
//! |-----------|---------|
//! | `if path` | render the block when `path` is truthy |
//! | `unless path` | render the block when `path` is falsy |
//! | `else` | alternate branch of the enclosing `if`/`unless` |
//! | `each path` | render the block per element, binding `this` and `index` |
//! | `end`, `/if`, `/unless`, `/each` | close the innermost block |
//!
//! Any other directive, or unbalanced blocks, fails compilation.

use std::sync::Arc;

use regex::Captures;
use serde_json::Value;

use crate::config::{Delimiter, Delimiters};
use crate::errors::{MessageBoxError, Result};
use crate::template::value::{display, is_truthy, Scope};
use crate::template::{Context, MessageFn, TemplateEngine};

/// Engine for the `{{{raw}}}`, `{{escaped}}` and `{{#directive}}` template family.
///
/// # Example
/// ```
/// use message_box::config::Delimiters;
/// use message_box::template::{Context, DelimitedTemplateEngine, TemplateEngine};
///
/// let render = DelimitedTemplateEngine
///     .compile("{{{name}}} must be at least {{min}}", &Delimiters::builtin())
///     .unwrap();
///
/// let mut context = Context::new();
/// context.insert("name".into(), "<qty>".into());
/// context.insert("min".into(), 10.into());
///
/// assert_eq!(render(&context), "<qty> must be at least 10");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct DelimitedTemplateEngine;

impl TemplateEngine for DelimitedTemplateEngine {
    fn compile(&self, template: &str, delimiters: &Delimiters) -> Result<MessageFn> {
        let tokens = tokenize(template, delimiters);
        let nodes = parse(tokens).map_err(|reason| MessageBoxError::Template {
            template: template.to_string(),
            reason,
        })?;

        Ok(Arc::new(move |context: &Context| {
            let mut out = String::new();
            render(&nodes, &Scope::root(context), &mut out);
            out
        }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Region {
    Escape,
    Interpolate,
    Evaluate,
}

#[derive(Debug, PartialEq)]
enum Token {
    Text(String),
    Region(Region, String),
}

fn tokenize(template: &str, delimiters: &Delimiters) -> Vec<Token> {
    let patterns: Vec<(Region, &Delimiter)> = [
        (Region::Escape, delimiters.escape.as_ref()),
        (Region::Interpolate, delimiters.interpolate.as_ref()),
        (Region::Evaluate, delimiters.evaluate.as_ref()),
    ]
    .into_iter()
    .filter_map(|(region, delimiter)| delimiter.map(|d| (region, d)))
    .collect();

    let mut tokens = Vec::new();
    let mut text = String::new();
    let mut cursor = 0;

    while cursor < template.len() {
        let next = patterns
            .iter()
            .filter_map(|(region, delimiter)| {
                delimiter
                    .regex()
                    .captures_at(template, cursor)
                    .map(|caps| (*region, caps))
            })
            .min_by_key(|(_, caps)| match_start(caps));

        let Some((region, caps)) = next else {
            text.push_str(&template[cursor..]);
            break;
        };

        let (start, end) = caps.get(0).map_or((cursor, cursor), |m| (m.start(), m.end()));
        text.push_str(&template[cursor..start]);

        if end == start {
            // A pattern matching the empty string would never advance.
            match template[start..].chars().next() {
                Some(c) => {
                    text.push(c);
                    cursor = start + c.len_utf8();
                }
                None => break,
            }
            continue;
        }

        if !text.is_empty() {
            tokens.push(Token::Text(std::mem::take(&mut text)));
        }
        let expression = caps.get(1).map_or("", |m| m.as_str());
        tokens.push(Token::Region(region, expression.trim().to_string()));
        cursor = end;
    }

    if !text.is_empty() {
        tokens.push(Token::Text(text));
    }
    tokens
}

fn match_start(caps: &Captures<'_>) -> usize {
    caps.get(0).map_or(usize::MAX, |m| m.start())
}

#[derive(Debug)]
enum Node {
    Text(String),
    Raw(String),
    Escaped(String),
    Condition {
        path: String,
        negate: bool,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
    Each {
        path: String,
        body: Vec<Node>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum BlockKind {
    If,
    Unless,
    Each,
}

impl BlockKind {
    fn keyword(self) -> &'static str {
        match self {
            BlockKind::If => "if",
            BlockKind::Unless => "unless",
            BlockKind::Each => "each",
        }
    }
}

struct Frame {
    kind: BlockKind,
    path: String,
    primary: Vec<Node>,
    alternate: Option<Vec<Node>>,
}

impl Frame {
    fn target(&mut self) -> &mut Vec<Node> {
        match &mut self.alternate {
            Some(alternate) => alternate,
            None => &mut self.primary,
        }
    }

    fn into_node(self) -> Node {
        match self.kind {
            BlockKind::Each => Node::Each {
                path: self.path,
                body: self.primary,
            },
            BlockKind::If | BlockKind::Unless => Node::Condition {
                path: self.path,
                negate: self.kind == BlockKind::Unless,
                then: self.primary,
                otherwise: self.alternate.unwrap_or_default(),
            },
        }
    }
}

fn parse(tokens: Vec<Token>) -> std::result::Result<Vec<Node>, String> {
    let mut root = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();

    for token in tokens {
        let node = match token {
            Token::Text(text) => Node::Text(text),
            Token::Region(Region::Escape, path) => Node::Escaped(path),
            Token::Region(Region::Interpolate, path) => Node::Raw(path),
            Token::Region(Region::Evaluate, code) => {
                let (keyword, argument) = match code.split_once(char::is_whitespace) {
                    Some((keyword, argument)) => (keyword, argument.trim()),
                    None => (code.as_str(), ""),
                };

                match (keyword, argument.is_empty()) {
                    ("if", false) | ("unless", false) | ("each", false) => {
                        let kind = match keyword {
                            "if" => BlockKind::If,
                            "unless" => BlockKind::Unless,
                            _ => BlockKind::Each,
                        };
                        stack.push(Frame {
                            kind,
                            path: argument.to_string(),
                            primary: Vec::new(),
                            alternate: None,
                        });
                        continue;
                    }
                    ("else", true) => {
                        let frame = stack
                            .last_mut()
                            .ok_or_else(|| "`else` outside of a block".to_string())?;
                        if frame.kind == BlockKind::Each || frame.alternate.is_some() {
                            return Err(format!("unexpected `else` in `{}` block", frame.kind.keyword()));
                        }
                        frame.alternate = Some(Vec::new());
                        continue;
                    }
                    ("end", true) | ("/if", true) | ("/unless", true) | ("/each", true) => {
                        let frame = stack
                            .pop()
                            .ok_or_else(|| format!("`{}` without an open block", keyword))?;
                        if let Some(expected) = keyword.strip_prefix('/') {
                            if expected != frame.kind.keyword() {
                                return Err(format!(
                                    "`{}` closes a `{}` block",
                                    keyword,
                                    frame.kind.keyword()
                                ));
                            }
                        }
                        frame.into_node()
                    }
                    _ => return Err(format!("unknown directive `{}`", code)),
                }
            }
        };

        match stack.last_mut() {
            Some(frame) => frame.target().push(node),
            None => root.push(node),
        }
    }

    if let Some(frame) = stack.last() {
        return Err(format!("unclosed `{}` block", frame.kind.keyword()));
    }
    Ok(root)
}

fn render(nodes: &[Node], scope: &Scope<'_>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Raw(path) => out.push_str(&display(scope.lookup(path))),
            Node::Escaped(path) => {
                let text = display(scope.lookup(path));
                out.push_str(&html_escape::encode_quoted_attribute(&text));
            }
            Node::Condition {
                path,
                negate,
                then,
                otherwise,
            } => {
                if is_truthy(scope.lookup(path)) != *negate {
                    render(then, scope, out);
                } else {
                    render(otherwise, scope, out);
                }
            }
            Node::Each { path, body } => {
                let items: Vec<Value> = match scope.lookup(path) {
                    Some(Value::Array(items)) => items.clone(),
                    Some(Value::Object(map)) => map.values().cloned().collect(),
                    _ => Vec::new(),
                };
                for (index, item) in items.into_iter().enumerate() {
                    let mut locals = Context::new();
                    locals.insert("this".to_string(), item);
                    locals.insert("index".to_string(), Value::from(index));
                    render(body, &Scope::child(&locals, scope), out);
                }
            }
        }
    }
}

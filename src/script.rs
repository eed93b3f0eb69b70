//! The operation script run by the `pq` binary.
//!
//! One command per line, against heaps addressed by name:
//!
//! ```text
//! # build two queues and merge them
//! push a 5 1
//! push b 8 3
//! merge a b
//! drain a
//! ```

use std::collections::HashMap;
use std::io::{self, Write};

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config;
use crate::heap::MergeableHeap;

lazy_static! {
    static ref LINE: Regex = Regex::new(r"^\s*(?P<cmd>\S+)(?P<args>.*)$").unwrap();
    static ref NAME: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// Element ordering of the driver's heaps, chosen at run time.
pub type Order = fn(&i64, &i64) -> bool;

/// Larger values come out first.
pub fn descending(a: &i64, b: &i64) -> bool {
    a < b
}

/// Smaller values come out first.
pub fn ascending(a: &i64, b: &i64) -> bool {
    a > b
}

pub fn order(min: bool) -> Order {
    if min {
        ascending
    } else {
        descending
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Push(String, Vec<i64>),
    Pop(String),
    Top(String),
    Size(String),
    Empty(String),
    /// `h` absorbs `g`.
    Merge(String, String),
    /// `h` becomes a deep copy of `g`.
    Copy(String, String),
    Clear(String),
    Drain(String),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::Push(..) => "push",
            Command::Pop(_) => "pop",
            Command::Top(_) => "top",
            Command::Size(_) => "size",
            Command::Empty(_) => "empty",
            Command::Merge(..) => "merge",
            Command::Copy(..) => "copy",
            Command::Clear(_) => "clear",
            Command::Drain(_) => "drain",
        }
    }
}

/// A parsed command and the 1-based line it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: invalid heap name `{name}`")]
    BadName { line: usize, name: String },
    #[error("line {line}: invalid integer `{text}`")]
    BadValue { line: usize, text: String },
    #[error("line {line}: `{command}` expects {expected} argument(s), got {got}")]
    Arity {
        line: usize,
        command: &'static str,
        expected: &'static str,
        got: usize,
    },
    #[error("line {line}: cannot merge heap `{name}` into itself")]
    SelfMerge { line: usize, name: String },
}

fn heap_name(line: usize, text: &str) -> Result<String, ScriptError> {
    if NAME.is_match(text) {
        Ok(text.to_string())
    } else {
        Err(ScriptError::BadName {
            line,
            name: text.to_string(),
        })
    }
}

fn value(line: usize, text: &str) -> Result<i64, ScriptError> {
    text.parse().map_err(|_| ScriptError::BadValue {
        line,
        text: text.to_string(),
    })
}

/// Parses one line. Blank lines and `#` comments give `Ok(None)`.
pub fn parse_line(line: usize, text: &str) -> Result<Option<Command>, ScriptError> {
    let text = text.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }
    let Some(caps) = LINE.captures(text) else {
        return Ok(None);
    };
    let cmd = &caps["cmd"];
    let args: Vec<&str> = caps["args"].split_whitespace().collect();
    let arity = |command: &'static str, expected: &'static str| ScriptError::Arity {
        line,
        command,
        expected,
        got: args.len(),
    };
    let command = match (cmd, args.as_slice()) {
        ("push", [h, values @ ..]) if !values.is_empty() => Command::Push(
            heap_name(line, h)?,
            values
                .iter()
                .map(|v| value(line, v))
                .collect::<Result<_, _>>()?,
        ),
        ("push", _) => return Err(arity("push", "at least 2")),
        ("merge" | "copy", [h, g]) => {
            let (h, g) = (heap_name(line, h)?, heap_name(line, g)?);
            if cmd == "merge" {
                if h == g {
                    return Err(ScriptError::SelfMerge { line, name: h });
                }
                Command::Merge(h, g)
            } else {
                Command::Copy(h, g)
            }
        }
        ("merge", _) => return Err(arity("merge", "2")),
        ("copy", _) => return Err(arity("copy", "2")),
        ("pop" | "top" | "size" | "empty" | "clear" | "drain", [h]) => {
            let h = heap_name(line, h)?;
            match cmd {
                "pop" => Command::Pop(h),
                "top" => Command::Top(h),
                "size" => Command::Size(h),
                "empty" => Command::Empty(h),
                "clear" => Command::Clear(h),
                _ => Command::Drain(h),
            }
        }
        ("pop", _) => return Err(arity("pop", "1")),
        ("top", _) => return Err(arity("top", "1")),
        ("size", _) => return Err(arity("size", "1")),
        ("empty", _) => return Err(arity("empty", "1")),
        ("clear", _) => return Err(arity("clear", "1")),
        ("drain", _) => return Err(arity("drain", "1")),
        (other, _) => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            })
        }
    };
    Ok(Some(command))
}

/// Parses a whole script, stopping at the first malformed line.
pub fn parse(text: &str) -> Result<Vec<Line>, ScriptError> {
    let mut lines = Vec::new();
    for (index, text) in text.lines().enumerate() {
        let number = index + 1;
        if let Some(command) = parse_line(number, text)? {
            lines.push(Line { number, command });
        }
    }
    Ok(lines)
}

/// Named heaps a script runs against.
pub struct Session {
    heaps: HashMap<String, MergeableHeap<i64, Order>>,
    order: Order,
    quiet: bool,
}

impl Session {
    pub fn new(order: Order) -> Self {
        Session {
            heaps: HashMap::new(),
            order,
            quiet: false,
        }
    }

    /// Stop printing command results.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn heap(&self, name: &str) -> Option<&MergeableHeap<i64, Order>> {
        self.heaps.get(name)
    }

    fn heap_mut(&mut self, name: &str) -> &mut MergeableHeap<i64, Order> {
        let order = self.order;
        self.heaps
            .entry(name.to_string())
            .or_insert_with(|| MergeableHeap::with_comparator(order))
    }

    fn take(&mut self, name: &str) -> MergeableHeap<i64, Order> {
        self.heaps
            .remove(name)
            .unwrap_or_else(|| MergeableHeap::with_comparator(self.order))
    }

    /// Runs one command, writing its result to `out`.
    ///
    /// An empty-container failure is reported on `out` and leaves the heap
    /// untouched. Write errors are returned, and so is a `merge` of a heap
    /// into itself, which `parse_line` never produces.
    pub fn execute<W: Write>(&mut self, line: &Line, out: &mut W) -> io::Result<()> {
        let number = line.number;
        if let Command::Merge(h, g) = &line.command {
            if h == g {
                let err = ScriptError::SelfMerge {
                    line: number,
                    name: h.clone(),
                };
                return Err(io::Error::new(io::ErrorKind::InvalidInput, err));
            }
        }
        debug!(line = number, command = line.command.name(), "executing");
        config::record(line.command.name());
        let result = match &line.command {
            Command::Push(h, values) => {
                self.heap_mut(h).extend(values.iter().copied());
                Ok(None)
            }
            Command::Pop(h) => self.heap_mut(h).pop().map(|v| Some(v.to_string())),
            Command::Top(h) => self.heap_mut(h).top().map(|v| Some(v.to_string())),
            Command::Size(h) => Ok(Some(self.heap_mut(h).len().to_string())),
            Command::Empty(h) => Ok(Some(self.heap_mut(h).is_empty().to_string())),
            Command::Merge(h, g) => {
                let mut other = self.take(g);
                self.heap_mut(h).merge(&mut other);
                self.heaps.insert(g.clone(), other);
                Ok(None)
            }
            Command::Copy(h, g) => {
                if h != g {
                    let source = self.take(g);
                    self.heap_mut(h).clone_from(&source);
                    self.heaps.insert(g.clone(), source);
                }
                Ok(None)
            }
            Command::Clear(h) => {
                self.heap_mut(h).clear();
                Ok(None)
            }
            Command::Drain(h) => {
                let heap = self.take(h);
                let values: Vec<String> = heap.into_iter().map(|v| v.to_string()).collect();
                self.heaps
                    .insert(h.clone(), MergeableHeap::with_comparator(self.order));
                Ok(Some(values.join(" ")))
            }
        };
        match result {
            Ok(Some(text)) if !self.quiet => writeln!(out, "{text}"),
            Ok(_) => Ok(()),
            Err(err) => {
                config::record("empty_container");
                warn!(line = number, "{err}");
                if self.quiet {
                    Ok(())
                } else {
                    writeln!(out, "error: line {number}: {err}")
                }
            }
        }
    }
}

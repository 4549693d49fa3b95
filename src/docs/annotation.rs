//! Annotation tree and its doc-comment rendering.
//!
//! An annotation renders on one line when all of its arguments are scalars and
//! one argument per line otherwise, four spaces deeper than its parent.

use std::fmt;

const INDENT: &str = "    ";

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Bool(bool),
    List(Vec<String>),
    /// Emitted verbatim, e.g. `{{"bearerAuth":{}}}`.
    Raw(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "{}", quoted(s)),
            Value::Int(i) => write!(f, "{}", i),
            Value::Bool(b) => write!(f, "{}", b),
            Value::List(items) => {
                let items: Vec<String> = items.iter().map(|s| quoted(s)).collect();
                write!(f, "{{{}}}", items.join(", "))
            }
            Value::Raw(s) => f.write_str(s),
        }
    }
}

/// Quote a string for annotation values. Embedded quotes are doubled and `*/`
/// is split so a value can never close the surrounding doc comment.
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\"").replace("*/", "* /"))
}

#[derive(Clone, Debug, PartialEq)]
enum Arg {
    Pair(&'static str, Value),
    Nested(Annotation),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    name: &'static str,
    args: Vec<Arg>,
}

impl Annotation {
    /// `name` without the leading `@`, e.g. `OA\Post`.
    pub fn new(name: &'static str) -> Self {
        Annotation {
            name,
            args: Vec::new(),
        }
    }

    pub fn pair(mut self, key: &'static str, value: Value) -> Self {
        self.args.push(Arg::Pair(key, value));
        self
    }

    pub fn str(self, key: &'static str, value: impl Into<String>) -> Self {
        self.pair(key, Value::Str(value.into()))
    }

    pub fn int(self, key: &'static str, value: i64) -> Self {
        self.pair(key, Value::Int(value))
    }

    pub fn bool(self, key: &'static str, value: bool) -> Self {
        self.pair(key, Value::Bool(value))
    }

    pub fn list<I, S>(self, key: &'static str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.pair(key, Value::List(items.into_iter().map(Into::into).collect()))
    }

    pub fn raw(self, key: &'static str, value: impl Into<String>) -> Self {
        self.pair(key, Value::Raw(value.into()))
    }

    pub fn child(mut self, child: Annotation) -> Self {
        self.args.push(Arg::Nested(child));
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Annotation>) -> Self {
        self.args.extend(children.into_iter().map(Arg::Nested));
        self
    }

    fn is_inline(&self) -> bool {
        self.args.iter().all(|a| matches!(a, Arg::Pair(..)))
    }

    /// Rendered lines without comment decoration.
    pub fn render_lines(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.write_lines(0, &mut out);
        out
    }

    fn write_lines(&self, depth: usize, out: &mut Vec<String>) {
        let indent = INDENT.repeat(depth);
        if self.is_inline() {
            let args: Vec<String> = self
                .args
                .iter()
                .filter_map(|a| match a {
                    Arg::Pair(k, v) => Some(format!("{}={}", k, v)),
                    Arg::Nested(_) => None,
                })
                .collect();
            out.push(format!("{}@{}({})", indent, self.name, args.join(", ")));
            return;
        }

        out.push(format!("{}@{}(", indent, self.name));
        let last = self.args.len() - 1;
        for (i, arg) in self.args.iter().enumerate() {
            match arg {
                Arg::Pair(k, v) => out.push(format!("{}{}{}={}", indent, INDENT, k, v)),
                Arg::Nested(a) => a.write_lines(depth + 1, out),
            }
            if i != last {
                if let Some(line) = out.last_mut() {
                    line.push(',');
                }
            }
        }
        out.push(format!("{})", indent));
    }
}

/// Wrap an annotation in a `/** ... */` doc comment.
pub fn doc_block(annotation: &Annotation) -> String {
    let mut out = String::from("/**\n");
    for line in annotation.render_lines() {
        out.push_str(" * ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(" */\n");
    out
}

//! A small line-oriented command language for driving a [`Tree`].
//!
//! Each non-blank line holds one command, optionally followed by a value.
//! Everything after a `#` is a comment.
//!
//! ```text
//! add <value>       remove <value>    get <value>      contains <value>
//! min               max               size             height
//! empty             balanced          balance          clear
//! preorder          inorder           postorder        dot
//! snapshot          equals            same
//! ```
//!
//! `snapshot` keeps a copy of the current tree; `equals` and `same` compare
//! the current tree against it. Commands that need a value but are given none
//! (and comparisons made before any snapshot) fail with the tree's
//! [`Error::InvalidArgument`].
//!
//! # Examples
//!
//! ```
//! use plain_bst::script::Session;
//!
//! let mut session = Session::<i32>::new();
//! let output = session.run("add 2\nadd 1\nadd 3\ninorder\nheight").unwrap();
//!
//! assert_eq!(output, ["1 2 3", "1"]);
//! ```

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

use crate::dot;
use crate::error::Error;
use crate::traversal::Order;
use crate::tree::Tree;

/// Script error
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ScriptError {
    /// The tree rejected the command.
    #[error("line {line}: {source}")]
    Tree {
        /// 1-based line number of the failing command.
        line: usize,
        /// What the tree reported.
        #[source]
        source: Error,
    },
    /// The first word of the line isn't a command.
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand {
        /// 1-based line number of the failing command.
        line: usize,
        /// The word that was read.
        command: String,
    },
    /// The value couldn't be parsed into the tree's element type.
    #[error("line {line}: cannot parse value `{input}`")]
    InvalidValue {
        /// 1-based line number of the failing command.
        line: usize,
        /// The text that failed to parse.
        input: String,
    },
    /// A command that takes no value was given one.
    #[error("line {line}: `{command}` takes no value")]
    UnexpectedValue {
        /// 1-based line number of the failing command.
        line: usize,
        /// The command that was given a value.
        command: String,
    },
}

/// One parsed script command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command<T> {
    /// `add`
    Add(Option<T>),
    /// `remove`
    Remove(Option<T>),
    /// `get`
    Get(Option<T>),
    /// `contains`
    Contains(Option<T>),
    /// `min`
    Minimum,
    /// `max`
    Maximum,
    /// `size`
    Size,
    /// `height`
    Height,
    /// `empty`
    Empty,
    /// `balanced`
    Balanced,
    /// `balance`
    Balance,
    /// `preorder`, `inorder` or `postorder`
    Walk(Order),
    /// `dot`
    Dot,
    /// `snapshot`
    Snapshot,
    /// `equals`
    Equals,
    /// `same`
    SameValues,
    /// `clear`
    Clear,
}

impl<T: FromStr> Command<T> {
    /// Parses one line. Blank and comment-only lines give `Ok(None)`.
    pub fn parse(line: usize, text: &str) -> Result<Option<Self>, ScriptError> {
        let text = text.split('#').next().unwrap_or_default().trim();
        let mut words = text.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let argument = words.collect::<Vec<_>>().join(" ");
        let argument = (!argument.is_empty()).then_some(argument);

        let value = || -> Result<Option<T>, ScriptError> {
            argument
                .as_deref()
                .map(|input| {
                    input.parse().map_err(|_| ScriptError::InvalidValue {
                        line,
                        input: input.to_string(),
                    })
                })
                .transpose()
        };
        let bare = |command: Self| -> Result<Self, ScriptError> {
            if argument.is_some() {
                return Err(ScriptError::UnexpectedValue {
                    line,
                    command: name.to_string(),
                });
            }
            Ok(command)
        };

        let command = match name {
            "add" => Self::Add(value()?),
            "remove" => Self::Remove(value()?),
            "get" => Self::Get(value()?),
            "contains" => Self::Contains(value()?),
            "min" => bare(Self::Minimum)?,
            "max" => bare(Self::Maximum)?,
            "size" => bare(Self::Size)?,
            "height" => bare(Self::Height)?,
            "empty" => bare(Self::Empty)?,
            "balanced" => bare(Self::Balanced)?,
            "balance" => bare(Self::Balance)?,
            "preorder" => bare(Self::Walk(Order::Pre))?,
            "inorder" => bare(Self::Walk(Order::In))?,
            "postorder" => bare(Self::Walk(Order::Post))?,
            "dot" => bare(Self::Dot)?,
            "snapshot" => bare(Self::Snapshot)?,
            "equals" => bare(Self::Equals)?,
            "same" => bare(Self::SameValues)?,
            "clear" => bare(Self::Clear)?,
            _ => {
                return Err(ScriptError::UnknownCommand {
                    line,
                    command: name.to_string(),
                })
            }
        };
        Ok(Some(command))
    }
}

/// A working tree plus an optional snapshot to compare it against.
#[derive(Debug)]
pub struct Session<T> {
    tree: Tree<T>,
    snapshot: Option<Tree<T>>,
}

impl<T> Default for Session<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Session<T> {
    /// A session with an empty tree and no snapshot.
    pub fn new() -> Self {
        Self {
            tree: Tree::new(),
            snapshot: None,
        }
    }

    /// The working tree.
    pub fn tree(&self) -> &Tree<T> {
        &self.tree
    }
}

impl<T> Session<T>
where
    T: Ord + Clone + FromStr + Display,
{
    /// Runs every line of `script` in order, collecting the output lines.
    /// Stops at the first failing line.
    pub fn run(&mut self, script: &str) -> Result<Vec<String>, ScriptError> {
        let mut output = Vec::new();
        for (index, text) in script.lines().enumerate() {
            if let Some(line) = self.execute_line(index + 1, text)? {
                output.push(line);
            }
        }
        Ok(output)
    }

    /// Parses and runs a single line. `line` is only used for error reports.
    pub fn execute_line(&mut self, line: usize, text: &str) -> Result<Option<String>, ScriptError> {
        match Command::parse(line, text)? {
            Some(command) => self
                .execute(command)
                .map_err(|source| ScriptError::Tree { line, source }),
            None => Ok(None),
        }
    }

    /// Runs a parsed command against the working tree.
    pub fn execute(&mut self, command: Command<T>) -> Result<Option<String>, Error> {
        log::trace!("Session::execute {:?}", Discriminant(&command));
        let tree = &mut self.tree;
        let output = match command {
            Command::Add(value) => {
                tree.try_add(value)?;
                None
            }
            Command::Remove(value) => Some(tree.try_remove(value.as_ref())?.to_string()),
            Command::Get(value) => Some(show(tree.try_get(value.as_ref())?)),
            Command::Contains(value) => Some(tree.try_contains(value.as_ref())?.to_string()),
            Command::Minimum => Some(show(tree.minimum())),
            Command::Maximum => Some(show(tree.maximum())),
            Command::Size => Some(tree.size().to_string()),
            Command::Height => Some(tree.height().to_string()),
            Command::Empty => Some(tree.is_empty().to_string()),
            Command::Balanced => Some(tree.is_balanced().to_string()),
            Command::Balance => {
                tree.balance();
                None
            }
            Command::Walk(order) => {
                let values: Vec<String> = match order {
                    Order::Pre => tree.preorder_iter().map(T::to_string).collect(),
                    Order::In => tree.inorder_iter().map(T::to_string).collect(),
                    Order::Post => tree.postorder_iter().map(T::to_string).collect(),
                };
                Some(values.join(" "))
            }
            Command::Dot => Some(dot::to_dot_format(tree.root())),
            Command::Snapshot => {
                self.snapshot = Some(tree.clone());
                None
            }
            Command::Equals => Some(tree.try_equals(self.snapshot.as_ref())?.to_string()),
            Command::SameValues => {
                Some(tree.try_same_values(self.snapshot.as_ref())?.to_string())
            }
            Command::Clear => {
                *tree = Tree::new();
                None
            }
        };
        Ok(output)
    }
}

fn show<T: Display>(value: Option<&T>) -> String {
    value.map_or_else(|| "none".to_string(), T::to_string)
}

/// Logs a command by name only so the element type needn't be `Debug`.
struct Discriminant<'a, T>(&'a Command<T>);

impl<T> fmt::Debug for Discriminant<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.0 {
            Command::Add(_) => "add",
            Command::Remove(_) => "remove",
            Command::Get(_) => "get",
            Command::Contains(_) => "contains",
            Command::Minimum => "min",
            Command::Maximum => "max",
            Command::Size => "size",
            Command::Height => "height",
            Command::Empty => "empty",
            Command::Balanced => "balanced",
            Command::Balance => "balance",
            Command::Walk(Order::Pre) => "preorder",
            Command::Walk(Order::In) => "inorder",
            Command::Walk(Order::Post) => "postorder",
            Command::Dot => "dot",
            Command::Snapshot => "snapshot",
            Command::Equals => "equals",
            Command::SameValues => "same",
            Command::Clear => "clear",
        };
        f.write_str(name)
    }
}

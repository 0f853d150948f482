//! Line parsing for console commands.

use std::str::FromStr;

use menu_core::domain::{CategoryFilter, DishInput, UnknownCategory};
use thiserror::Error;
use uuid::Uuid;

/// A dish picked either by its position in the last listing or by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DishRef {
    /// 1-based position in the currently visible list.
    Index(usize),
    Id(Uuid),
}

impl FromStr for DishRef {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<usize>() {
            return Ok(DishRef::Index(index));
        }
        Uuid::parse_str(s)
            .map(DishRef::Id)
            .map_err(|_| ParseError::BadDishRef(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Description,
    Price,
    Category,
    ImageUrl,
}

impl FormField {
    fn parse(key: &str) -> Result<Self, ParseError> {
        match key {
            "name" => Ok(FormField::Name),
            "description" | "desc" => Ok(FormField::Description),
            "price" => Ok(FormField::Price),
            "category" => Ok(FormField::Category),
            "image" | "imageUrl" | "image_url" => Ok(FormField::ImageUrl),
            other => Err(ParseError::UnknownField(other.to_string())),
        }
    }

    /// Write `value` into the form. Unparsable prices become 0 and are then
    /// reported by the form's own validation.
    pub fn apply(&self, form: &mut DishInput, value: &str) {
        match self {
            FormField::Name => form.name = value.to_string(),
            FormField::Description => form.description = value.to_string(),
            FormField::Price => form.price = value.trim().parse().unwrap_or(0.0),
            FormField::Category => form.category = value.to_string(),
            FormField::ImageUrl => form.image_url = value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    List,
    Export,
    Categories,
    Search(String),
    Filter(CategoryFilter),
    New,
    Edit(DishRef),
    Delete(DishRef),
    Submit(Vec<(FormField, String)>),
    Confirm,
    Cancel,
    Suggest(Option<usize>),
    State,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command `{0}`; type `help` for a list")]
    UnknownCommand(String),

    #[error("`{command}` needs {what}")]
    MissingArgument {
        command: &'static str,
        what: &'static str,
    },

    #[error("`{0}` is neither a list position nor a dish id")]
    BadDishRef(String),

    #[error("unknown form field `{0}`")]
    UnknownField(String),

    #[error("expected field=value, got `{0}`")]
    BadAssignment(String),

    #[error("`{0}` is not a number")]
    BadNumber(String),

    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),

    #[error("unterminated quote")]
    UnterminatedQuote,
}

/// Split a line on whitespace, keeping double-quoted runs together.
/// A backslash escapes the next character inside quotes.
pub fn tokenize(line: &str) -> Result<Vec<String>, ParseError> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            '\\' if in_quotes => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_quotes {
        return Err(ParseError::UnterminatedQuote);
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(line)?;
        let Some((name, args)) = tokens.split_first() else {
            return Err(ParseError::Empty);
        };

        let command = match name.as_str() {
            "help" | "?" => Command::Help,
            "list" | "ls" => Command::List,
            "export" => Command::Export,
            "categories" => Command::Categories,
            "search" => Command::Search(args.join(" ")),
            "filter" => {
                let category = args.first().ok_or(ParseError::MissingArgument {
                    command: "filter",
                    what: "a category or `all`",
                })?;
                Command::Filter(category.parse()?)
            }
            "new" | "add" => Command::New,
            "edit" => Command::Edit(dish_ref("edit", args)?),
            "delete" | "rm" => Command::Delete(dish_ref("delete", args)?),
            "submit" | "save" => Command::Submit(assignments(args)?),
            "confirm" | "yes" => Command::Confirm,
            "cancel" | "close" => Command::Cancel,
            "suggest" => match args.first() {
                None => Command::Suggest(None),
                Some(n) => Command::Suggest(Some(
                    n.parse().map_err(|_| ParseError::BadNumber(n.clone()))?,
                )),
            },
            "state" => Command::State,
            "quit" | "exit" => Command::Quit,
            other => return Err(ParseError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

fn dish_ref(command: &'static str, args: &[String]) -> Result<DishRef, ParseError> {
    args.first()
        .ok_or(ParseError::MissingArgument {
            command,
            what: "a list position or dish id",
        })?
        .parse()
}

fn assignments(args: &[String]) -> Result<Vec<(FormField, String)>, ParseError> {
    args.iter()
        .map(|arg| {
            let (key, value) = arg
                .split_once('=')
                .ok_or_else(|| ParseError::BadAssignment(arg.clone()))?;
            Ok((FormField::parse(key)?, value.to_string()))
        })
        .collect()
}

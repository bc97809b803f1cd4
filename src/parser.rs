use std::collections::{BTreeSet, HashMap};

use crate::{
  command::{
    AddCommand, ClearCommand, Command, DeleteCommand, EditCommand, EditContactDescriptor,
    FindCommand, ListCommand, RemarkCommand, UndoCommand,
  },
  contact::{Address, Contact, ContactError, Email, Name, Phone, Remark},
  index::Index,
  predicate::ContactMatchesPredicate,
  tag::Tag,
};

const PREFIX_NAME: &str = "n/";
const PREFIX_PHONE: &str = "p/";
const PREFIX_EMAIL: &str = "e/";
const PREFIX_ADDRESS: &str = "a/";
const PREFIX_TAG: &str = "t/";
const PREFIX_REMARK: &str = "r/";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
  #[error("unknown command: '{0}'")]
  UnknownCommand(String),

  #[error("invalid command format!\n{0}")]
  InvalidFormat(&'static str),

  #[error("index is not a non-zero unsigned integer: '{0}'")]
  InvalidIndex(String),

  #[error("multiple values specified for the following single-valued field(s): {0}")]
  DuplicatePrefixes(String),

  #[error("at least one field to edit must be provided")]
  NothingToEdit,

  #[error(transparent)]
  InvalidValue(#[from] ContactError),
}

/// Parses one line of user input into a command.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
  let input = input.trim();
  let (word, args) = input
    .split_once(char::is_whitespace)
    .unwrap_or((input, ""));

  match word {
    AddCommand::WORD => parse_add(args).map(Command::Add),
    ClearCommand::WORD => Ok(Command::Clear(ClearCommand::new())),
    DeleteCommand::WORD => parse_delete(args).map(Command::Delete),
    EditCommand::WORD => parse_edit(args).map(Command::Edit),
    FindCommand::WORD => parse_find(args).map(Command::Find),
    ListCommand::WORD => Ok(Command::List(ListCommand::new())),
    RemarkCommand::WORD => parse_remark(args).map(Command::Remark),
    UndoCommand::WORD => Ok(Command::Undo(UndoCommand::new())),
    _ => Err(ParseError::UnknownCommand(word.to_owned())),
  }
}

pub fn help_text() -> String {
  [
    AddCommand::USAGE,
    DeleteCommand::USAGE,
    EditCommand::USAGE,
    FindCommand::USAGE,
    RemarkCommand::USAGE,
    "list: Lists all contacts.",
    "clear: Removes every contact.",
    "undo: Reverts the last change to the address book.",
  ]
  .join("\n\n")
}

fn parse_add(args: &str) -> Result<AddCommand, ParseError> {
  let arguments = tokenize(
    args,
    &[
      PREFIX_NAME,
      PREFIX_PHONE,
      PREFIX_EMAIL,
      PREFIX_ADDRESS,
      PREFIX_TAG,
      PREFIX_REMARK,
    ],
  );

  let required = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS];
  if !arguments.preamble.is_empty() || !required.iter().all(|p| arguments.value(p).is_some()) {
    return Err(ParseError::InvalidFormat(AddCommand::USAGE));
  }
  arguments.verify_no_duplicate_prefixes(&[
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_REMARK,
  ])?;

  let contact = Contact::new(
    Name::new(arguments.value(PREFIX_NAME).unwrap_or_default())?,
    Phone::new(arguments.value(PREFIX_PHONE).unwrap_or_default())?,
    Email::new(arguments.value(PREFIX_EMAIL).unwrap_or_default())?,
    Address::new(arguments.value(PREFIX_ADDRESS).unwrap_or_default())?,
    parse_tags(arguments.all_values(PREFIX_TAG))?,
    Remark::new(arguments.value(PREFIX_REMARK).unwrap_or_default())?,
  );

  Ok(AddCommand::new(contact))
}

fn parse_delete(args: &str) -> Result<DeleteCommand, ParseError> {
  if args.trim().is_empty() {
    return Err(ParseError::InvalidFormat(DeleteCommand::USAGE));
  }
  Ok(DeleteCommand::new(parse_index(args)?))
}

fn parse_edit(args: &str) -> Result<EditCommand, ParseError> {
  let arguments = tokenize(
    args,
    &[
      PREFIX_NAME,
      PREFIX_PHONE,
      PREFIX_EMAIL,
      PREFIX_ADDRESS,
      PREFIX_TAG,
    ],
  );

  if arguments.preamble.is_empty() {
    return Err(ParseError::InvalidFormat(EditCommand::USAGE));
  }
  let index = parse_index(&arguments.preamble)?;
  arguments.verify_no_duplicate_prefixes(&[PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_ADDRESS])?;

  let tag_values = arguments.all_values(PREFIX_TAG);
  let tags = match tag_values {
    [] => None,
    // a lone empty `t/` clears every tag
    [only] if only.is_empty() => Some(BTreeSet::new()),
    values => Some(parse_tags(values)?),
  };

  let descriptor = EditContactDescriptor {
    name: arguments.value(PREFIX_NAME).map(Name::new).transpose()?,
    phone: arguments.value(PREFIX_PHONE).map(Phone::new).transpose()?,
    email: arguments.value(PREFIX_EMAIL).map(Email::new).transpose()?,
    address: arguments.value(PREFIX_ADDRESS).map(Address::new).transpose()?,
    tags,
  };

  if !descriptor.is_any_field_edited() {
    return Err(ParseError::NothingToEdit);
  }

  Ok(EditCommand::new(index, descriptor))
}

fn parse_find(args: &str) -> Result<FindCommand, ParseError> {
  let keywords: Vec<String> = args.split_whitespace().map(|k| k.to_owned()).collect();
  if keywords.is_empty() {
    return Err(ParseError::InvalidFormat(FindCommand::USAGE));
  }
  Ok(FindCommand::new(ContactMatchesPredicate::new(keywords)))
}

fn parse_remark(args: &str) -> Result<RemarkCommand, ParseError> {
  let arguments = tokenize(args, &[PREFIX_REMARK]);

  let remark = match arguments.value(PREFIX_REMARK) {
    Some(remark) if !arguments.preamble.is_empty() => remark,
    _ => return Err(ParseError::InvalidFormat(RemarkCommand::USAGE)),
  };
  arguments.verify_no_duplicate_prefixes(&[PREFIX_REMARK])?;

  Ok(RemarkCommand::new(
    parse_index(&arguments.preamble)?,
    Remark::new(remark)?,
  ))
}

fn parse_index(input: &str) -> Result<Index, ParseError> {
  let trimmed = input.trim();
  trimmed
    .parse::<usize>()
    .ok()
    .and_then(Index::from_one_based)
    .ok_or_else(|| ParseError::InvalidIndex(trimmed.to_owned()))
}

fn parse_tags(values: &[String]) -> Result<BTreeSet<Tag>, ParseError> {
  let mut tags = BTreeSet::new();
  for value in values.iter() {
    tags.insert(Tag::new(value)?);
  }
  Ok(tags)
}

/// Arguments split on their prefixes. Text before the first prefix is the
/// preamble.
struct ArgumentMultimap {
  preamble: String,
  values: HashMap<&'static str, Vec<String>>,
}

impl ArgumentMultimap {
  /// Last value given for `prefix`.
  fn value(&self, prefix: &str) -> Option<&str> {
    self
      .values
      .get(prefix)
      .and_then(|v| v.last())
      .map(|v| v.as_str())
  }

  fn all_values(&self, prefix: &str) -> &[String] {
    self.values.get(prefix).map(|v| v.as_slice()).unwrap_or(&[])
  }

  fn verify_no_duplicate_prefixes(&self, prefixes: &[&str]) -> Result<(), ParseError> {
    let duplicated: Vec<&str> = prefixes
      .iter()
      .filter(|p| self.all_values(p).len() > 1)
      .copied()
      .collect();

    if duplicated.is_empty() {
      return Ok(());
    }
    Err(ParseError::DuplicatePrefixes(duplicated.join(" ")))
  }
}

// A prefix only counts when it follows whitespace, so `a/` inside an email
// or an address is left alone.
fn tokenize(args: &str, prefixes: &[&'static str]) -> ArgumentMultimap {
  let args = format!(" {}", args);

  let mut positions: Vec<(usize, &'static str)> = Vec::new();
  for prefix in prefixes.iter() {
    let pattern = format!(" {}", prefix);
    for (found, _) in args.match_indices(pattern.as_str()) {
      positions.push((found + 1, *prefix));
    }
  }
  positions.sort_by_key(|(position, _)| *position);

  let preamble_end = positions.first().map_or(args.len(), |(position, _)| *position);
  let mut arguments = ArgumentMultimap {
    preamble: args[..preamble_end].trim().to_owned(),
    values: HashMap::new(),
  };

  for (n, (start, prefix)) in positions.iter().enumerate() {
    let value_start = start + prefix.len();
    let value_end = positions
      .get(n + 1)
      .map_or(args.len(), |(next, _)| *next);
    arguments
      .values
      .entry(*prefix)
      .or_default()
      .push(args[value_start..value_end].trim().to_owned());
  }

  arguments
}

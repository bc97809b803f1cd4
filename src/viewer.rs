use colored::{Color, Colorize};

use crate::contact::Contact;

struct ViewColors {}
impl ViewColors {
  const INDEX: Color = Color::BrightBlack;
  const NAME: Color = Color::BrightWhite;
  const PHONE: Color = Color::Green;
  const EMAIL: Color = Color::Yellow;
  const ADDRESS: Color = Color::White;
  const TAG: Color = Color::Cyan;
  const REMARK: Color = Color::BrightBlack;
  const ERROR: Color = Color::Red;
}

const LINE_INDENT: usize = 6;

#[derive(Default)]
pub struct Viewer {}

impl Viewer {
  pub fn new() -> Self {
    Self {}
  }

  pub fn print_contacts(&self, contacts: &[&Contact]) {
    if contacts.is_empty() {
      println!("no contacts to show");
      return;
    }

    for (position, contact) in contacts.iter().enumerate() {
      println!("{}", self.contact_lines(position + 1, contact).join("\n"));
    }
  }

  pub fn print_feedback(&self, feedback: &str) {
    println!("{}", feedback);
  }

  pub fn print_error(&self, err: &dyn std::fmt::Display) {
    println!("{}", err.to_string().color(ViewColors::ERROR));
  }

  fn contact_lines(&self, one_based_index: usize, contact: &Contact) -> Vec<String> {
    let tags: Vec<String> = contact
      .tags()
      .iter()
      .map(|tag| tag.name().color(ViewColors::TAG).to_string())
      .collect();

    let mut lines = vec![
      format!(
        "{index}. {name}  [{tags}]",
        index = format!("{:>4}", one_based_index).color(ViewColors::INDEX),
        name = contact.name().as_str().color(ViewColors::NAME).bold(),
        tags = tags.join(", "),
      ),
      format!(
        "{pad}{phone}  {email}",
        pad = " ".repeat(LINE_INDENT),
        phone = contact.phone().as_str().color(ViewColors::PHONE),
        email = contact.email().as_str().color(ViewColors::EMAIL),
      ),
      format!(
        "{pad}{address}",
        pad = " ".repeat(LINE_INDENT),
        address = contact.address().as_str().color(ViewColors::ADDRESS),
      ),
    ];

    if !contact.remark().is_empty() {
      lines.push(format!(
        "{pad}{remark}",
        pad = " ".repeat(LINE_INDENT),
        remark = contact
          .remark()
          .as_str()
          .color(ViewColors::REMARK)
          .italic()
      ));
    }

    lines
  }
}

use std::io::{BufRead, Write};

use log::debug;

use rolodex::{config::Config, parser::help_text, viewer::Viewer, Rolodex};

const EXIT_WORD: &str = "exit";
const HELP_WORD: &str = "help";

fn build_cli() -> clap::Command<'static> {
  clap::Command::new("rolodex")
    .about("Keeps your contacts, their remarks and tags in one place")
    .arg_required_else_help(true)
    .subcommand(clap::Command::new("shell").about("Interactive session with undo history"))
    .subcommand(
      clap::Command::new("run")
        .about("Runs a single command, e.g. `rolodex run remark 1 r/Likes tea`")
        .arg(
          clap::Arg::new("command")
            .required(true)
            .index(1)
            .multiple_values(true),
        ),
    )
    .subcommand(clap::Command::new("list").about("Lists all contacts"))
    .subcommand(
      clap::Command::new("find")
        .about("Lists contacts whose name, phone or email contains any keyword")
        .arg(
          clap::Arg::new("keywords")
            .required(true)
            .index(1)
            .multiple_values(true),
        ),
    )
    .subcommand(
      clap::Command::new("completions")
        .about("Prints shell completions")
        .arg(
          clap::Arg::new("shell")
            .required(true)
            .index(1)
            .possible_values(["bash", "elvish", "fish", "powershell", "zsh"]),
        ),
    )
}

fn main() -> anyhow::Result<()> {
  env_logger::init();

  let matches = build_cli().get_matches();

  if let Some(("completions", sub_matches)) = matches.subcommand() {
    let shell: clap_complete::Shell = sub_matches.value_of_t("shell")?;
    clap_complete::generate(shell, &mut build_cli(), "rolodex", &mut std::io::stdout());
    return Ok(());
  }

  let config = Config::new()?;
  let mut rolodex = Rolodex::new(&config)?;
  let viewer = Viewer::new();
  debug!("contacts loaded from: {}", rolodex.storage_path());

  match matches.subcommand() {
    Some(("shell", _)) => run_shell(&mut rolodex, &viewer)?,

    Some(("run", sub_matches)) => {
      let words: Vec<&str> = sub_matches.values_of("command").map(|v| v.collect()).unwrap_or_default();
      run_line(&mut rolodex, &viewer, &words.join(" "));
    }

    Some(("list", _)) => run_line(&mut rolodex, &viewer, "list"),

    Some(("find", sub_matches)) => {
      let keywords: Vec<&str> = sub_matches.values_of("keywords").map(|v| v.collect()).unwrap_or_default();
      run_line(&mut rolodex, &viewer, &format!("find {}", keywords.join(" ")));
    }

    Some((subcmd, _)) => println!("unknown subcommand {}", subcmd),
    None => println!("subcommand not found"),
  };

  Ok(())
}

fn run_shell(rolodex: &mut Rolodex, viewer: &Viewer) -> std::io::Result<()> {
  viewer.print_contacts(&rolodex.filtered_contacts());

  let stdin = std::io::stdin();
  let mut lines = stdin.lock().lines();
  loop {
    print!("> ");
    std::io::stdout().flush()?;

    let line = match lines.next() {
      Some(line) => line?,
      None => return Ok(()),
    };

    match line.trim() {
      "" => continue,
      EXIT_WORD => return Ok(()),
      HELP_WORD => viewer.print_feedback(&help_text()),
      input => run_line(rolodex, viewer, input),
    }
  }
}

fn run_line(rolodex: &mut Rolodex, viewer: &Viewer, input: &str) {
  match rolodex.execute(input) {
    Ok(result) => {
      viewer.print_contacts(&rolodex.filtered_contacts());
      viewer.print_feedback(result.feedback());
    }
    Err(err) => viewer.print_error(&err),
  }
}

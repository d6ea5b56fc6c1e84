use std::thread;
use clap::{error, Parser, ArgMatches, Command};
use reedline::{Reedline, Signal};
use tokio::sync::mpsc::UnboundedSender;

mod prompt;
use prompt::ShellPrompt;

mod cmds {
    pub(crate) mod browse_cmd;
    pub(crate) mod contact_cmd;
}

use rolodex::{
    configuration as cfg,
    logger,
    Action,
    APIClient,
    ContactForm,
    ContactId,
    ContactManager,
    Event,
    PanelKind,
    Session,
};

fn build_cli() -> Command {
    let mut cmd = Command::new("rolodex")
        .about("Interactive contact manager shell")
        .no_binary_name(true)
        .subcommand_required(true)
        .subcommand(cmds::contact_cmd::add_cli())
        .subcommand(cmds::contact_cmd::edit_cli())
        .subcommand(cmds::contact_cmd::delete_cli())
        .subcommand(cmds::contact_cmd::submit_cli())
        .subcommand(cmds::contact_cmd::cancel_cli())
        .subcommand(cmds::browse_cmd::home_cli())
        .subcommand(cmds::browse_cmd::search_cli())
        .subcommand(cmds::browse_cmd::tag_cli())
        .subcommand(cmds::browse_cmd::show_cli())
        .help_template("{subcommands}");

    cmd.error(error::ErrorKind::InvalidSubcommand, "Invalid command provided");
    cmd
}

// Splits a command line on whitespace, keeping double-quoted runs together.
// An unbalanced quote extends its argument to the end of the line; `""`
// yields an empty argument.
fn split_args(input: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut pending = false;

    for c in input.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                pending = true;
            }
            c if c.is_whitespace() && !quoted => {
                if pending {
                    args.push(std::mem::take(&mut current));
                    pending = false;
                }
            }
            c => {
                current.push(c);
                pending = true;
            }
        }
    }
    if pending {
        args.push(current);
    }
    args
}

fn parse_form<'a, I>(fields: I) -> Result<ContactForm, String>
where I: IntoIterator<Item = &'a String> {
    let mut form = ContactForm::new();
    for field in fields {
        let Some((name, value)) = field.split_once('=') else {
            return Err(format!("invalid form field '{}', expected name=value", field));
        };
        form.set_field(name.trim(), value);
    }
    Ok(form)
}

fn to_event(matches: &ArgMatches) -> Option<Event> {
    let event = match matches.subcommand() {
        Some(("add", _))    => Event::Action(Action::Add),
        Some(("home", _))   => Event::Action(Action::Home),
        Some(("cancel", _)) => Event::Action(Action::Cancel),
        Some(("show", _))   => Event::Redraw,
        Some(("edit", m))   => {
            let id = m.get_one::<String>("ID")?;
            Event::Action(Action::Edit(ContactId::from(id.as_str())))
        }
        Some(("delete", m)) => {
            let id = m.get_one::<String>("ID")?;
            Event::Action(Action::Delete(ContactId::from(id.as_str())))
        }
        Some(("tag", m))    => {
            let tag = m.get_one::<String>("TAG")?;
            Event::Action(Action::Tag(tag.clone()))
        }
        Some(("search", m)) => {
            let text = m.get_many::<String>("TEXT")
                .map(|v| v.cloned().collect::<Vec<_>>().join(" "))
                .unwrap_or_default();
            Event::SearchInput(text)
        }
        Some(("submit", m)) => {
            let fields = m.get_many::<String>("FIELD").into_iter().flatten();
            match parse_form(fields) {
                Ok(form) => Event::Action(Action::Submit(form)),
                Err(e) => {
                    println!("Error: {}", e);
                    return None;
                }
            }
        }
        _ => {
            println!("Unknown command");
            return None;
        }
    };
    Some(event)
}

fn read_commands(tx: UnboundedSender<Event>, service_url: String) {
    let mut cli = build_cli();
    let mut rl = Reedline::create();
    let prompt = ShellPrompt::new(&service_url);

    loop {
        let Ok(sig) = rl.read_line(&prompt) else {
            println!("\n Fatal error occurred.");
            continue;
        };
        match sig {
            Signal::Success(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                match input {
                    "exit" | "quit" => {
                        println!("Goodbye!");
                        _ = tx.send(Event::Quit);
                        break;
                    },
                    "help" => {
                        _ = cli.print_long_help();
                        continue;
                    }
                    _ => {}
                }

                let args = split_args(input);
                if args[0] == "help" && args.len() > 1 {
                    _ = match cli.find_subcommand_mut(args[1].as_str()) {
                        Some(cmd) => cmd.print_long_help(),
                        None => cli.print_long_help(),
                    };
                    continue;
                }

                let matches = match cli.clone().try_get_matches_from(args.clone()) {
                    Ok(v) => v,
                    Err(_) => {
                        println!("Error: command not found: '{}'", input);
                        continue;
                    }
                };

                let Some(event) = to_event(&matches) else {
                    continue;
                };
                if tx.send(event).is_err() {
                    break;
                }
            }
            Signal::CtrlC | Signal::CtrlD => {
                println!("\nGoodbye!");
                _ = tx.send(Event::Quit);
                break;
            }
        }
    }
}

fn render(manager: &ContactManager<APIClient>) {
    let view = manager.view();
    println!();
    if view.is_visible(PanelKind::Welcome) {
        println!("Search: {}", view.search());
    }
    if let Some(filter) = manager.panel().filter().filter(|v| !v.is_none()) {
        println!("Filter: {}", filter);
    }
    println!("{}", view.markup());
}

#[derive(Parser, Debug)]
#[command(name = "Rolodex")]
#[command(version = "1.0")]
#[command(about = "Rolodex contact manager shell", long_about = None)]
struct Options {
    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Base url of the contact service, ending with '/'
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,
}

#[tokio::main]
async fn main() {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_ref() {
        if let Err(e) = builder.load(path) {
            eprintln!("{e}");
            return;
        }
    }
    if let Some(url) = opts.url.as_ref() {
        builder.with_service_url(url);
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building configuration error: {e}");
            return;
        }
    };

    #[cfg(feature = "inspect")] {
        cfg.dump();
    }

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("Setting up logger error: {e}");
        return;
    }

    let client = match APIClient::new(cfg.service_url()) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating contact service client error: {e}");
            return;
        }
    };

    let manager = ContactManager::new(client);
    let mut session = Session::new(manager, cfg.search_debounce());

    println!("Welcome to the contact manager shell. Type 'help' for commands, 'exit' to quit.");

    let tx = session.sender();
    let service_url = cfg.service_url().to_string();
    let reader = thread::spawn(move || read_commands(tx, service_url));

    session.run(render).await;

    _ = reader.join();
    logger::teardown();
}

use clap::{arg, Command};

pub(crate) fn add_cli() -> Command {
    Command::new("add")
        .about("Show the form for a new contact")
}

pub(crate) fn edit_cli() -> Command {
    Command::new("edit")
        .about("Open a contact in the edit form")
        .arg(arg!(<ID> "The contact id to edit"))
        .arg_required_else_help(true)
}

pub(crate) fn delete_cli() -> Command {
    Command::new("delete")
        .about("Delete a contact")
        .arg(arg!(<ID> "The contact id to be removed"))
        .arg_required_else_help(true)
}

pub(crate) fn submit_cli() -> Command {
    Command::new("submit")
        .about("Submit the visible form")
        .arg(arg!([FIELD] ... "Form fields as name=value, e.g. full_name=\"Ann Archer\""))
}

pub(crate) fn cancel_cli() -> Command {
    Command::new("cancel")
        .about("Leave the form and return to the contact list")
}

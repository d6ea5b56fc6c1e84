use clap::{arg, Command};

pub(crate) fn home_cli() -> Command {
    Command::new("home")
        .about("Show all cached contacts")
}

pub(crate) fn search_cli() -> Command {
    Command::new("search")
        .about("Type into the search box, an empty text clears it")
        .arg(arg!([TEXT] ... "The name fragment to search for"))
}

pub(crate) fn tag_cli() -> Command {
    Command::new("tag")
        .about("List contacts carrying a tag")
        .arg(arg!(<TAG> "The tag to filter by"))
        .arg_required_else_help(true)
}

pub(crate) fn show_cli() -> Command {
    Command::new("show")
        .about("Print the visible panel again")
}

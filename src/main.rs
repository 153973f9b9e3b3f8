use mysql_show_grants::args::parse_args;
use mysql_show_grants::run;
use mysql_show_grants::utils::exit_on_err;

fn main() {
    let args = exit_on_err!(parse_args(), "Could not parse CLI arguments");
    exit_on_err!(run(&args), "Could not export user accounts");
}

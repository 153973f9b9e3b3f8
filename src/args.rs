use pico_args::Arguments;
use pico_args::Error;

#[derive(Debug)]
pub struct AppArgs {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub ignore: String,
}

pub fn parse_args() -> Result<AppArgs, pico_args::Error> {
    _parse_args(Arguments::from_env())
}

fn _parse_args(mut pargs: Arguments) -> Result<AppArgs, Error> {
    // Help has a higher priority and should be handled separately.
    // -h is taken by the server host, so only the long form is recognised.
    if pargs.contains("--help") {
        println!("Usage: mysql-show-grants [-h host] [-P port] [-u user] [-p password] [-ignore user1,user2@host]");
        std::process::exit(0);
    }

    let args = AppArgs {
        host: pargs.opt_value_from_str("-h")?.unwrap_or_else(|| String::from("localhost")),
        port: pargs.opt_value_from_str("-P")?.unwrap_or(3306),
        user: pargs.opt_value_from_str("-u")?.unwrap_or_default(),
        password: pargs.opt_value_from_str("-p")?.unwrap_or_default(),
        ignore: pargs.opt_value_from_str("-ignore")?.unwrap_or_default(),
    };
    Ok(args)
}

#[cfg(test)]
mod test {
    use std::ffi::OsString;

    use super::*;

    #[test]
    fn parse_args_defaults() {
        let args: Vec<OsString> = vec![];
        let res = _parse_args(Arguments::from_vec(args)).expect("parse op unsuccessful");
        assert_eq!(res.host, "localhost");
        assert_eq!(res.port, 3306);
        assert!(res.user.is_empty());
        assert!(res.password.is_empty());
        assert!(res.ignore.is_empty());
    }

    #[test]
    fn parse_args_all_flags() {
        let args: Vec<OsString> = vec![
            "-h".into(),
            "db.example.com".into(),
            "-P".into(),
            "3307".into(),
            "-u".into(),
            "root".into(),
            "-p".into(),
            "secret".into(),
            "-ignore".into(),
            "monitor,backup@localhost".into(),
        ];
        let res = _parse_args(Arguments::from_vec(args)).expect("parse op unsuccessful");
        assert_eq!(res.host, "db.example.com");
        assert_eq!(res.port, 3307);
        assert_eq!(res.user, "root");
        assert_eq!(res.password, "secret");
        assert_eq!(res.ignore, "monitor,backup@localhost");
    }

    #[test]
    fn parse_args_bad_port_is_err() {
        let args: Vec<OsString> = vec![
            "-P".into(),
            "not-a-port".into(),
        ];
        let res = _parse_args(Arguments::from_vec(args));
        assert!(res.is_err());
    }
}

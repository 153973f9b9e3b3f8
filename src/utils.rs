/// Run expression returning a Result<>, If Err() logs the error and exits with status 1; else unwrap()
/// Usage let result = exit_on_err!(try_do(), "Try do failed");
#[macro_export]
macro_rules! exit_on_err {
    ( $x:expr, $y:expr ) => {
        {
            match $x {
                Ok(val) => val,
                Err(what) => {
                    eprintln!("ERROR: {}", $y);
                    eprintln!("{what}");
                    ::std::process::exit(1);
                }
            }
        }
    };
}
pub use exit_on_err;

/// Run expression returning a Result<>, If Err() logs the error and continues the enclosing loop; else unwrap()
macro_rules! continue_on_err {
    ( $x:expr, $y:expr ) => {
        {
            match $x {
                Ok(val) => val,
                Err(what) => {
                    eprintln!("ERROR: {}", $y);
                    eprintln!("{what}");
                    continue;
                }
            }
        }
    };
}
pub(crate) use continue_on_err;

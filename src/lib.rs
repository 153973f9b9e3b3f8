//! Dumps the CREATE USER and GRANTS statements of every account on a MySQL
//! server, for backup or migration of account state.

use std::io::{stdout, Write};

use mysql::{Conn, OptsBuilder, Result, TxOpts};
use mysql::prelude::*;

pub mod args;
use args::AppArgs;

pub mod ignore;
use ignore::IgnoreList;

pub mod version;
use version::ServerVersion;

pub mod accountdumper;

pub mod utils;

fn get_conn(args: &AppArgs) -> Result<Conn> {
    let opts = OptsBuilder::new()
        .ip_or_hostname(Some(args.host.as_str()))
        .tcp_port(args.port)
        .user(Some(args.user.as_str()))
        .pass(Some(args.password.as_str()))
        .db_name(Some("mysql"));
    Conn::new(opts)
}

/// Dump all accounts to stdout inside a single transaction.
/// The transaction is rolled back on every early-return path; only a run
/// that reaches the end commits.
pub fn run(args: &AppArgs) -> Result<()> {
    let mut conn = get_conn(args)?;
    let mut tx = conn.start_transaction(TxOpts::default())?;

    let reported: Option<String> = tx.query_first("SELECT VERSION()")?;
    let version = ServerVersion::parse(reported.as_deref().unwrap_or_default())?;
    if version.supports_print_identified_with_as_hex() {
        tx.query_drop("SET session print_identified_with_as_hex = on")?;
    }

    let accounts = accountdumper::query_accounts(&mut tx)?;
    let ignore = IgnoreList::parse(args.ignore.as_str());

    let out = stdout();
    let mut out = out.lock();
    accountdumper::dump_accounts(&mut out, &accounts, &ignore,
        |account| accountdumper::query_account_statements(&mut tx, account))?;
    out.flush()?;

    tx.commit()
}

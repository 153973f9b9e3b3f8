//! Account enumeration and CREATE USER / GRANTS statement dumping

use std::io::{self, Write};

use mysql::Result;
use mysql::prelude::*;

use crate::ignore::IgnoreList;
use crate::utils::continue_on_err;

/// A MySQL principal identified by its (user, host) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub host: String,
    pub name: String,
}

/// List every account on the server, in server order, leaving out the
/// reserved service accounts
pub fn query_accounts<C>(conn: &mut C) -> Result<Vec<Account>>
    where C: Queryable
{
    conn.query_map(
        "SELECT Host, User FROM mysql.user WHERE user NOT IN ('mysql.infoschema','mysql.session','mysql.sys')",
        |(host, name)| Account { host, name })
}

/// Fetch the CREATE USER statement of one account followed by its GRANTS statements.
/// Either query failing fails the whole account, so a failed account never
/// leaves a partial block in the dump.
pub fn query_account_statements<C>(conn: &mut C, account: &Account) -> Result<Vec<String>>
    where C: Queryable
{
    let mut stmts: Vec<String> = conn.query(format!("SHOW CREATE USER '{}'@'{}'", account.name, account.host))?;
    let grants: Vec<String> = conn.query(format!("SHOW GRANTS FOR '{}'@'{}'", account.name, account.host))?;
    stmts.extend(grants);
    Ok(stmts)
}

/// Write one block of `;`-terminated statements per account, one blank line
/// between consecutive blocks. Accounts matched by the ignore list are
/// skipped silently; accounts whose statements cannot be fetched are logged
/// and skipped.
pub fn dump_accounts<W, F>(out: &mut W, accounts: &[Account], ignore: &IgnoreList, mut fetch: F) -> io::Result<()>
    where W: Write, F: FnMut(&Account) -> Result<Vec<String>>
{
    let mut first = true;
    for account in accounts {
        if ignore.matches(&account.host, &account.name) {
            continue;
        }
        let stmts = continue_on_err!(fetch(account),
            format!("Could not export account '{}'@'{}'", account.name, account.host));
        if !first {
            writeln!(out)?;
        }
        first = false;
        for stmt in &stmts {
            writeln!(out, "{stmt};")?;
        }
    }
    Ok(())
}

//! The interactive numbered menu.
//!
//! Each choice collects raw answers, hands them to [`ContactsApi`] and prints
//! whatever comes back. Errors from the book are printed and the loop goes on;
//! only I/O errors on the terminal itself end it.

use crate::print::{print_contacts, print_error, print_messages, print_stats};
use colored::*;
use contactbook::api::{ContactUpdate, ContactsApi};
use contactbook::store::DataStore;
use std::io::{self, BufRead, Write};
use std::path::Path;

const MENU: &str = "
===============================
 CONTACT BOOK
===============================
1. Add Contact
2. Search Contact
3. Update Contact
4. Delete Contact
5. Display All Contacts
6. Export to CSV
7. Statistics
8. Exit
";

struct Prompter<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Prints `prompt` and reads one line. `None` means input is exhausted.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

pub fn run<S, R, W>(api: &mut ContactsApi<S>, export_path: &Path, input: R, out: W) -> io::Result<()>
where
    S: DataStore,
    R: BufRead,
    W: Write,
{
    let mut p = Prompter { input, out };

    loop {
        writeln!(p.out, "{}", MENU)?;
        let Some(choice) = p.ask("Choose option (1-8): ")? else {
            break;
        };

        let keep_going = match choice.as_str() {
            "1" => add(api, &mut p)?,
            "2" => search(api, &mut p)?,
            "3" => update(api, &mut p)?,
            "4" => delete(api, &mut p)?,
            "5" => {
                match api.list_all() {
                    Ok(result) => print_contacts(&mut p.out, &result.listed)?,
                    Err(e) => print_error(&mut p.out, &e)?,
                }
                true
            }
            "6" => {
                match api.export_csv(export_path) {
                    Ok(result) => print_messages(&mut p.out, &result.messages)?,
                    Err(e) => print_error(&mut p.out, &e)?,
                }
                true
            }
            "7" => {
                match api.statistics() {
                    Ok(result) => {
                        if let Some(stats) = &result.stats {
                            print_stats(&mut p.out, stats)?;
                        }
                    }
                    Err(e) => print_error(&mut p.out, &e)?,
                }
                true
            }
            "8" => {
                writeln!(p.out, "Goodbye!")?;
                break;
            }
            _ => {
                writeln!(p.out, "{}", "Invalid choice".red())?;
                true
            }
        };

        if !keep_going {
            break;
        }
    }

    Ok(())
}

// Each action returns Ok(false) when input ran out mid-prompt.

fn add<S: DataStore, R: BufRead, W: Write>(
    api: &mut ContactsApi<S>,
    p: &mut Prompter<R, W>,
) -> io::Result<bool> {
    writeln!(p.out, "\n--- ADD CONTACT ---")?;
    let Some(name) = p.ask("Enter name: ")? else {
        return Ok(false);
    };
    let Some(phone) = p.ask("Enter phone: ")? else {
        return Ok(false);
    };
    let Some(email) = p.ask("Enter email (optional): ")? else {
        return Ok(false);
    };
    let Some(group) = p.ask("Group (Friends/Work/Family): ")? else {
        return Ok(false);
    };

    match api.add(&name, &phone, Some(email.as_str()), Some(group.as_str())) {
        Ok(result) => print_messages(&mut p.out, &result.messages)?,
        Err(e) => print_error(&mut p.out, &e)?,
    }
    Ok(true)
}

fn search<S: DataStore, R: BufRead, W: Write>(
    api: &ContactsApi<S>,
    p: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(term) = p.ask("Enter name to search: ")? else {
        return Ok(false);
    };
    match api.search(&term) {
        Ok(result) => print_contacts(&mut p.out, &result.listed)?,
        Err(e) => print_error(&mut p.out, &e)?,
    }
    Ok(true)
}

fn update<S: DataStore, R: BufRead, W: Write>(
    api: &mut ContactsApi<S>,
    p: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(name) = p.ask("Enter name to update: ")? else {
        return Ok(false);
    };
    if let Err(e) = api.get(&name) {
        print_error(&mut p.out, &e)?;
        return Ok(true);
    }

    let Some(phone) = p.ask("New phone (leave blank to keep): ")? else {
        return Ok(false);
    };
    let Some(email) = p.ask("New email (leave blank to keep): ")? else {
        return Ok(false);
    };
    let Some(group) = p.ask("New group (leave blank to keep): ")? else {
        return Ok(false);
    };

    let changes = ContactUpdate::new().phone(phone).email(email).group(group);
    match api.update(&name, &changes) {
        Ok(result) => print_messages(&mut p.out, &result.messages)?,
        Err(e) => print_error(&mut p.out, &e)?,
    }
    Ok(true)
}

fn delete<S: DataStore, R: BufRead, W: Write>(
    api: &mut ContactsApi<S>,
    p: &mut Prompter<R, W>,
) -> io::Result<bool> {
    let Some(name) = p.ask("Enter name to delete: ")? else {
        return Ok(false);
    };
    if let Err(e) = api.get(&name) {
        print_error(&mut p.out, &e)?;
        return Ok(true);
    }

    let Some(answer) = p.ask("Are you sure? (y/n): ")? else {
        return Ok(false);
    };
    // Only a bare "y" or "Y" confirms; " y" does not.
    let confirmed = answer.eq_ignore_ascii_case("y");
    match api.delete(&name, confirmed) {
        Ok(result) => print_messages(&mut p.out, &result.messages)?,
        Err(e) => print_error(&mut p.out, &e)?,
    }
    Ok(true)
}

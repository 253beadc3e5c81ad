use crate::commands::{CmdMessage, CmdResult};
use crate::error::{ContactsError, Result};
use crate::model::ContactMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

const HEADER: [&str; 4] = ["Name", "Phone", "Email", "Group"];

pub fn run(contacts: &ContactMap, path: &Path) -> Result<CmdResult> {
    let file = File::create(path).map_err(ContactsError::Io)?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, contacts)?;
    writer.flush().map_err(ContactsError::Io)?;
    info!(path = %path.display(), count = contacts.len(), "exported contacts");

    let mut result = CmdResult::default().with_export_path(path.to_path_buf());
    result.add_message(CmdMessage::success(format!(
        "Exported {} contact(s) to {}",
        contacts.len(),
        path.display()
    )));
    Ok(result)
}

fn write_csv<W: Write>(mut writer: W, contacts: &ContactMap) -> Result<()> {
    write_row(&mut writer, &HEADER)?;
    for (name, contact) in contacts {
        let email = contact.email.as_deref().unwrap_or("");
        write_row(
            &mut writer,
            &[name.as_str(), contact.phone.as_str(), email, contact.group.as_str()],
        )?;
    }
    Ok(())
}

fn write_row<W: Write>(writer: &mut W, fields: &[&str]) -> Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    write!(writer, "{}\r\n", line).map_err(ContactsError::Io)
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

//! Output formatting for keys, values and decoded records

use crate::index::{SearchRecord, SubkeyType, TagFieldMetadata};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Render bytes as text when printable ASCII, otherwise as `0x`-hex
pub fn display_bytes(bytes: &[u8]) -> String {
    if bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
        format!("{:?}", String::from_utf8_lossy(bytes))
    } else {
        format!("0x{}", hex::encode(bytes))
    }
}

fn display_separator(meta: &TagFieldMetadata) -> String {
    display_bytes(&[meta.separator])
}

/// JSON view of a record with byte strings rendered by [`display_bytes`]
#[derive(Debug, Serialize)]
struct RecordView {
    subkey: &'static str,
    discriminator: String,
    fields: Vec<(&'static str, String)>,
}

fn record_fields(record: &SearchRecord) -> Vec<(&'static str, String)> {
    match record {
        SearchRecord::Prefixes(set) => set
            .prefixes
            .iter()
            .map(|p| ("prefix", display_bytes(p)))
            .collect(),
        SearchRecord::TagFieldMeta {
            field_name,
            metadata,
        } => vec![
            ("field", display_bytes(field_name)),
            ("separator", display_separator(metadata)),
            ("case_sensitive", metadata.case_sensitive.to_string()),
        ],
        SearchRecord::TagPosting(posting) => vec![
            ("field", display_bytes(&posting.field_name)),
            ("tag", display_bytes(&posting.tag)),
            ("doc_key", display_bytes(&posting.doc_key)),
        ],
    }
}

fn record_view(record: &SearchRecord) -> RecordView {
    let kind = record.subkey_type();
    RecordView {
        subkey: kind.name(),
        discriminator: format!("0x{:02x}", kind.as_byte()),
        fields: record_fields(record),
    }
}

/// Write a decoded record as `kind (0xNN)` followed by one indented field per line
pub fn write_record<W: WriteColor>(out: &mut W, record: &SearchRecord) -> io::Result<()> {
    let view = record_view(record);

    out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)).set_bold(true))?;
    write!(out, "{}", view.subkey)?;
    out.reset()?;
    writeln!(out, " ({})", view.discriminator)?;

    if view.fields.is_empty() {
        writeln!(out, "  (empty)")?;
    }
    for (name, value) in &view.fields {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "  {}", name)?;
        out.reset()?;
        writeln!(out, ": {}", value)?;
    }
    Ok(())
}

pub fn print_record(record: &SearchRecord, color: bool) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_record(&mut stdout, record)
}

pub fn record_json(record: &SearchRecord) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&record_view(record))
}

/// Print the discriminator registry as a table
pub fn print_registry() {
    println!("{:<6} {:<16} {:<12} field type", "byte", "subkey", "band");
    for kind in SubkeyType::ALL {
        println!(
            "0x{:02x}   {:<16} {:<12} {}",
            kind.as_byte(),
            kind.name(),
            format!("{:?}", kind.band()),
            kind.field_type()
                .map(|ft| format!("{:?}", ft))
                .unwrap_or_else(|| "-".to_string())
        );
    }
}

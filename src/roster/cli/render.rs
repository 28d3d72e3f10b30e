//! Terminal output: message lines and the record table.
//!
//! Column widths are measured with `unicode-width`, so names with wide
//! characters (which validation rejects, but older files may contain) still
//! line up.

use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::model::Student;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const HEADERS: [&str; 4] = ["NPM", "Nama", "Prodi", "Kelas"];

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_records(records: &[Student]) {
    if records.is_empty() {
        println!("{}", "No records.".dimmed());
        return;
    }
    let table = render_table(records);
    let mut lines = table.lines();
    if let Some(header) = lines.next() {
        println!("{}", header.bold());
    }
    for line in lines {
        println!("{}", line);
    }
}

/// A single hit, shown the way the record displays itself.
pub(super) fn print_found(student: &Student) {
    println!("{}", student);
}

pub(super) fn render_table(records: &[Student]) -> String {
    let mut widths = HEADERS.map(|h| h.width());
    for student in records {
        for (i, (_, value)) in student.to_mapping().iter().enumerate() {
            widths[i] = widths[i].max(value.width());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS, &widths);
    for student in records {
        let values = student.to_mapping().map(|(_, v)| v);
        push_row(&mut out, &values, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[&str; 4], widths: &[usize; 4]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        if i + 1 < cells.len() {
            let padding = widths[i].saturating_sub(cell.width());
            line.push_str(&" ".repeat(padding));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

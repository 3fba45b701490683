use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::flow::table::{TableRow, COLUMNS, EMPTY_TABLE};
use roster::model::{Notification, NotificationKind};
use roster::weather::WeatherReport;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const MAX_CELL_WIDTH: usize = 28;
const COLUMN_GAP: &str = "  ";

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// Everything but success messages, which the matching notification already announced.
pub(super) fn print_details(messages: &[CmdMessage]) {
    let details: Vec<CmdMessage> = messages
        .iter()
        .filter(|m| m.level != MessageLevel::Success)
        .cloned()
        .collect();
    print_messages(&details);
}

pub(super) fn print_notifications(notifications: &[Notification]) {
    for note in notifications {
        match note.kind {
            NotificationKind::Success => println!("{}", note.message.green()),
            NotificationKind::Error => println!("{}", note.message.red()),
        }
    }
}

pub(super) fn print_table(rows: &[TableRow]) {
    print!("{}", render_table(rows));
}

pub(super) fn render_table(rows: &[TableRow]) -> String {
    if rows.is_empty() {
        return format!("{}\n", EMPTY_TABLE);
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            r.cells
                .iter()
                .map(|c| truncate_to_width(c, MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let row_width = rows
        .iter()
        .map(|r| r.row.to_string().len() + 1)
        .max()
        .unwrap_or(2);
    let mut widths: Vec<usize> = COLUMNS.iter().map(|h| h.width()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = COLUMNS
        .iter()
        .zip(&widths)
        .map(|(h, w)| pad_to_width(h, *w))
        .collect();
    out.push_str(&format!(
        "{}{}{}\n",
        " ".repeat(row_width),
        COLUMN_GAP,
        header.join(COLUMN_GAP).trim_end().bold()
    ));

    for (row, line) in rows.iter().zip(&cells) {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(c, w)| pad_to_width(c, *w))
            .collect();
        let idx = format!("{:>width$}", format!("{}.", row.row), width = row_width);
        out.push_str(&format!(
            "{}{}{}\n",
            idx.yellow(),
            COLUMN_GAP,
            padded.join(COLUMN_GAP).trim_end()
        ));
    }
    out
}

pub(super) fn render_weather(report: &WeatherReport) -> String {
    format!(
        "{}\nTemperature: {}°C\nCondition: {}\nWind Speed: {} m/s\n",
        format!("Weather in {}", report.name).bold(),
        report.temperature,
        report.description,
        report.wind_speed
    )
}

pub(super) fn print_weather(report: &WeatherReport) {
    print!("{}", render_weather(report));
}

pub(super) fn print_options(options: &[&str]) {
    for option in options {
        println!("{}", option);
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    format!("{}{}", s, " ".repeat(width.saturating_sub(s.width())))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

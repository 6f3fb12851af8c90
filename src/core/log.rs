use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

/// Restituisce il colore ANSI in base all'operazione
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51), // arancione
        _ => Colour::White,
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let mut t: String = s.chars().take(max.saturating_sub(3)).collect();
        t.push_str("...");
        t
    } else {
        s.to_string()
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::format_entries(&entries, true) {
            println!("{line}");
        }

        Ok(())
    }

    /// Render log rows; `color` paints the operation word.
    pub fn format_entries(entries: &[LogEntry], color: bool) -> Vec<String> {
        let rows: Vec<(String, String, &LogEntry)> = entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let op_target = if e.target.is_empty() {
                    e.operation.clone()
                } else {
                    truncate(&format!("{} ({})", e.operation, e.target), 60)
                };

                (date, op_target, e)
            })
            .collect();

        let id_w = rows.iter().map(|(_, _, e)| e.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|(d, _, _)| d.len()).max().unwrap_or(10);
        let op_w = rows.iter().map(|(_, o, _)| o.chars().count()).max().unwrap_or(10);

        rows.iter()
            .map(|(date, op_target, e)| {
                // padding sul testo visibile, senza ANSI
                let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));

                let painted = if color {
                    match op_target.split_once(' ') {
                        Some((op, rest)) => {
                            format!("{} {}", color_for_operation(&e.operation).paint(op), rest)
                        }
                        None => color_for_operation(&e.operation)
                            .paint(op_target.as_str())
                            .to_string(),
                    }
                } else {
                    op_target.clone()
                };

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    date,
                    painted,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }
}

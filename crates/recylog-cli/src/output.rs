use crate::args::ColorChoice;
use is_terminal::IsTerminal;
use owo_colors::{OwoColorize, Style as TermStyle};
use recylog_report::render::clip;
use recylog_report::{Line, PALETTE_SIZE, Style};
use recylog_types::MaterialRecord;

/// Prints report spans and record tables, applying the terminal's
/// style mapping for palette indices. The report layer never emits
/// escape codes itself; this is the only place styling happens.
pub struct ConsoleRenderer {
    colored: bool,
}

impl ConsoleRenderer {
    pub fn new(choice: ColorChoice) -> Self {
        let colored = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        Self { colored }
    }

    pub fn print_lines(&self, lines: &[Line]) {
        for line in lines {
            for span in line {
                if self.colored {
                    print!("{}", span.text.style(term_style(span.style)));
                } else {
                    print!("{}", span.text);
                }
            }
            println!();
        }
    }

    pub fn print_table(&self, records: &[MaterialRecord]) {
        let header = format!(
            "{:<26} {:<20} {:<12} {:>9} {:>9} {:<16} {:<12} {:<10}",
            "ID", "Material", "Type", "Quantity", "Value", "Location", "Status", "Date"
        );
        if self.colored {
            println!("{}", header.bold());
        } else {
            println!("{}", header);
        }
        println!("{}", "-".repeat(header.len()));

        for record in records {
            println!(
                "{:<26} {:<20} {:<12} {:>9.1} {:>9.1} {:<16} {:<12} {:<10}",
                clip(&record.id, 26),
                clip(&record.name, 20),
                clip(&record.material_type, 12),
                record.quantity,
                record.value,
                clip(&record.location, 16),
                clip(&record.status, 12),
                record.recorded_date
            );
        }
    }
}

fn term_style(style: Style) -> TermStyle {
    match style {
        Style::Plain => TermStyle::new(),
        Style::Heading => TermStyle::new().bold(),
        Style::Palette(index) => palette_style(index),
    }
}

fn palette_style(index: usize) -> TermStyle {
    // one terminal color per rotating palette slot
    match index % PALETTE_SIZE {
        0 => TermStyle::new().red(),
        1 => TermStyle::new().green(),
        2 => TermStyle::new().blue(),
        3 => TermStyle::new().yellow(),
        4 => TermStyle::new().magenta(),
        5 => TermStyle::new().cyan(),
        6 => TermStyle::new().bright_yellow(),
        7 => TermStyle::new().bright_magenta(),
        _ => TermStyle::new().bright_black(),
    }
}

use cipherforge::optimizer::runner::RestartSummary;
use cipherforge::scorer::ScoreDetails;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn restarts(summaries: &[RestartSummary], winner: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Restart").add_attribute(Attribute::Bold),
        Cell::new("Score").fg(Color::Cyan),
        Cell::new("WordCov"),
        Cell::new("Iter"),
        Cell::new("Accepted"),
        Cell::new("Refine"),
        Cell::new("Stop"),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for s in summaries {
        let label = if s.restart == winner {
            format!("#{} *", s.restart + 1)
        } else {
            format!("#{}", s.restart + 1)
        };

        match (s.score, &s.error) {
            (Some(score), _) => {
                let score_color = if s.restart == winner {
                    Color::Green
                } else {
                    Color::Cyan
                };
                table.add_row(vec![
                    Cell::new(label).add_attribute(Attribute::Bold),
                    Cell::new(format!("{:.4}", score)).fg(score_color),
                    Cell::new(format!("{:.3}", s.word_coverage.unwrap_or(0.0))),
                    Cell::new(s.iterations),
                    Cell::new(s.accepted),
                    Cell::new(s.refine_swaps),
                    Cell::new(s.stop_reason.map(|r| r.to_string()).unwrap_or_default()),
                ]);
            }
            (None, err) => {
                table.add_row(vec![
                    Cell::new(label),
                    Cell::new("failed").fg(Color::Red),
                    Cell::new(err.clone().unwrap_or_default()),
                ]);
            }
        }
    }
    println!("\n{}", table);
}

pub fn breakdown(details: &ScoreDetails) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Order").add_attribute(Attribute::Bold),
        Cell::new("Weight"),
        Cell::new("Windows"),
        Cell::new("Known"),
        Cell::new("Mean"),
        Cell::new("Weighted").fg(Color::Cyan),
    ]);

    for i in 1..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for o in &details.orders {
        table.add_row(vec![
            Cell::new(o.order.to_string()).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.2}", o.weight)),
            Cell::new(o.windows),
            Cell::new(format!("{:.1}%", o.hit_rate() * 100.0)),
            Cell::new(format!("{:.4}", o.mean)),
            Cell::new(format!("{:.4}", o.weighted())).fg(Color::Cyan),
        ]);
    }

    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(details.letters).fg(Color::DarkGrey),
        Cell::new(""),
        Cell::new(""),
        Cell::new(format!("{:.4}", details.composite))
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
    ]);
    println!("\n{}", table);
}

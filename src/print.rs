//! Console tables for the board and for leg advice.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};

use crate::betting::{expected_value, TicketTents};
use crate::leg::Advice;
use crate::track::{Track, TRACK_POSITIONS};

/// Renders the track with one column per position and one row per stack level, the top of every
/// stack in the uppermost row.
pub fn tabulate_track(track: &Track) -> Table {
    let height = track.stacks().iter().map(Vec::len).max().unwrap_or(0);
    let mut table = Table::default()
        .with_cols(
            (0..TRACK_POSITIONS)
                .map(|_| Col::new(Styles::default().with(MinWidth(3)).with(HAlign::Centred)))
                .collect(),
        )
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            (0..TRACK_POSITIONS)
                .map(|position| format!("{position}").into())
                .collect(),
        ));

    for level in (0..height).rev() {
        let cells: Vec<Cell> = track
            .stacks()
            .iter()
            .map(|stack| match stack.get(level) {
                None => "".into(),
                Some(camel) => format!("{camel}").into(),
            })
            .collect();
        table.push_row(Row::new(Styles::default(), cells));
    }
    table
}

/// Renders the exact and experimental odds of every camel, alongside the next ticket on offer for
/// that camel and its expected value under the exact odds.
pub fn tabulate_advice(advice: &Advice, tents: &TicketTents) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Centred)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(Separator(true)).with(MinWidth(3))),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
            Col::new(Styles::default().with(Separator(true)).with(MinWidth(3))),
            Col::new(Styles::default().with(MinWidth(6)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(8)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)).with(Separator(true)),
            vec![
                "".into(),
                "Enumerative".into(),
                "".into(),
                "".into(),
                "Experimental".into(),
                "".into(),
                "".into(),
                "Betting".into(),
                "".into(),
            ],
        ))
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Camel".into(),
                "1st".into(),
                "2nd".into(),
                "".into(),
                "1st".into(),
                "2nd".into(),
                "".into(),
                "Ticket".into(),
                "EV".into(),
            ],
        ));

    for ((camel, exact), (_, experimental)) in advice.exact.iter().zip(advice.experimental.iter()) {
        let (ticket, ev) = match tents.peek(camel) {
            None => ("X".to_string(), "".to_string()),
            Some(value) => (
                format!("{value}"),
                format!("{:.2}", expected_value(value, exact)),
            ),
        };
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("{camel}").into(),
                format!("{:.4}", exact.first).into(),
                format!("{:.4}", exact.second).into(),
                format!("{camel}").into(),
                format!("{:.4}", experimental.first).into(),
                format!("{:.4}", experimental.second).into(),
                format!("{camel}").into(),
                ticket.into(),
                ev.into(),
            ],
        ));
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camel::Camel::{Blue, Green, Red};
    use crate::exact::analyse_exact;
    use crate::pyramid::Pyramid;
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;

    #[test]
    fn track_table_dimensions() {
        let track = Track::default()
            .with_stack(0, &[Red, Blue, Green])
            .unwrap();
        let table = tabulate_track(&track);
        assert_eq!(TRACK_POSITIONS, table.num_cols());
        assert_eq!(1 + 3, table.num_rows());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains('g'));
    }

    #[test]
    fn advice_table_dimensions() {
        let track = Track::default().with_stack(2, &[Red, Green]).unwrap();
        let exact = analyse_exact(&track, &Pyramid::from(vec![Red, Green])).unwrap();
        let advice = Advice {
            exact: exact.clone(),
            experimental: exact,
        };
        let mut tents = TicketTents::default();
        for _ in 0..4 {
            tents.take(Blue);
        }
        let table = tabulate_advice(&advice, &tents);
        assert_eq!(9, table.num_cols());
        assert_eq!(2 + 5, table.num_rows());
        let rendered = Console::default().render(&table).to_string();
        assert!(rendered.contains("Enumerative"));
        assert!(rendered.contains("0.6667"));
    }
}

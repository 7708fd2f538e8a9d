// Rendering: header, scrolling currency list, amount field and footer,
// redrawn in full each frame. The list keeps its `ListState` between frames
// so the cursor row stays on screen.

use super::Picker;
use ratatui::{
    layout::{Constraint, Layout},
    text::Line,
    widgets::{HighlightSpacing, List, ListItem, ListState, Paragraph},
    Frame,
};

const HEADER: [&str; 3] = [
    "* Please select the base currency with the Enter key",
    "* To select the target currencies use the Space bar",
    "* To exit the program and process the conversion press q",
];

const HEADER_NO_AMOUNT: [&str; 3] = [
    "* Please select the base currency with the Enter key",
    "* To select the target currencies use the Space bar",
    "* To exit the program and show the rates press q",
];

pub fn render(frame: &mut Frame, picker: &Picker, list_state: &mut ListState) {
    let options = picker.options();
    let amount_height = if options.amount_entry { 3 } else { 0 };
    let [header_area, list_area, amount_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Min(1),
        Constraint::Length(amount_height),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    let header = if options.amount_entry {
        HEADER
    } else {
        HEADER_NO_AMOUNT
    };
    frame.render_widget(
        Paragraph::new(header.iter().map(|l| Line::from(*l)).collect::<Vec<_>>()),
        header_area,
    );

    let items: Vec<ListItem> = picker
        .catalog()
        .entries()
        .iter()
        .map(|entry| {
            let checked = if picker.base() == Some(entry.code.as_str()) {
                "•"
            } else if picker.is_selected(&entry.code) {
                "x"
            } else {
                " "
            };
            ListItem::new(format!("[{}] {}", checked, entry.label()))
        })
        .collect();
    list_state.select((!items.is_empty()).then_some(picker.cursor()));
    let list = List::new(items)
        .highlight_symbol("> ")
        .highlight_spacing(HighlightSpacing::Always);
    frame.render_stateful_widget(list, list_area, list_state);

    if options.amount_entry {
        let [_, prompt_area, field_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(amount_area);
        frame.render_widget(
            Paragraph::new("Please enter the amount of money you want to convert:"),
            prompt_area,
        );
        let [marker_area, input_area] =
            Layout::horizontal([Constraint::Length(2), Constraint::Min(1)]).areas(field_area);
        frame.render_widget(Paragraph::new("> "), marker_area);
        frame.render_widget(picker.amount(), input_area);
    }

    frame.render_widget(Paragraph::new("Press q to quit."), footer_area);
}

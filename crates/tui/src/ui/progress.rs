use cvkick_wizard::{StepController, StepStatus};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const CONNECTOR: &str = " ─── ";

pub fn progress_line(controller: &StepController) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, entry) in controller.progress().into_iter().enumerate() {
        if i > 0 {
            let previous_done = entry
                .step
                .previous()
                .is_some_and(|step| controller.is_completed(step));
            let style = if previous_done {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(CONNECTOR, style));
        }

        let (marker, style) = match entry.status {
            StepStatus::Completed => (
                "✓".to_string(),
                Style::default().fg(Color::Green),
            ),
            StepStatus::Current => (
                entry.step.number().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            StepStatus::Pending => (
                entry.step.number().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };
        spans.push(Span::styled(
            format!("[{marker}] {}", entry.step.title()),
            style,
        ));
    }
    Line::from(spans)
}

pub fn current_description(controller: &StepController) -> Line<'static> {
    let step = controller.current();
    Line::from(vec![
        Span::styled(
            format!("Step {} of 4: ", step.number()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(step.description(), Style::default().fg(Color::Gray)),
    ])
}

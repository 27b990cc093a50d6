use super::*;
use cvkick_wizard::views::{ConfirmView, CoverLetterView, UploadView};
use cvkick_wizard::WizardDraft;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

const CURSOR: &str = "█";

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if self.wizard.is_some() {
            self.render_wizard(frame, area);
        } else {
            self.render_home(frame, area);
        }

        self.render_toasts(frame, area);

        if self.show_help {
            self.render_help(frame, area);
        }
    }

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        let accent = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("CV Kick", accent)),
            Line::from(""),
            Line::from(Span::styled(
                "Supercharge Your Job Applications",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Generate personalized, AI-powered cover letters that match your CV"),
            Line::from("to any job description. Land more interviews with CV Kick."),
            Line::from(""),
            Line::from("  1. Upload CV      Securely upload your CV in PDF format."),
            Line::from("  2. Cover letter   A personalized letter for the role you want."),
            Line::from("  3. Send           Review, edit and send your application by email."),
            Line::from(""),
            Line::from(Span::styled(
                "Press Enter to get started",
                Style::default().fg(Color::Yellow),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Your data stays on this machine. Nothing is stored after you quit.",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        let popup = layout::centered_rect(80, 80, area);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" CV Kick ")),
            popup,
        );

        let footer = Rect {
            y: area.y + area.height.saturating_sub(1),
            height: 1.min(area.height),
            ..area
        };
        frame.render_widget(
            Paragraph::new(self.keybinds.footer_hint(HintContext::Home))
                .style(Style::default().fg(Color::DarkGray)),
            footer,
        );
    }

    fn render_wizard(&mut self, frame: &mut Frame, area: Rect) {
        self.layout.calculate_layout(area);
        let panels = self.layout.get_panels().to_vec();

        for panel in panels {
            match panel.panel_type {
                PanelType::Title => self.render_title(frame, panel.rect),
                PanelType::Progress => self.render_progress(frame, panel.rect),
                PanelType::Body => self.render_body(frame, panel.rect),
                PanelType::Footer => self.render_footer(frame, panel.rect),
            }
        }
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let text = vec![
            Line::from(Span::styled(
                "Application Wizard",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Follow these steps to create and send your job application",
                Style::default().fg(Color::Gray),
            )),
        ];
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
    }

    fn render_progress(&self, frame: &mut Frame, area: Rect) {
        let Some(wizard) = self.wizard.as_ref() else {
            return;
        };
        let controller = wizard.controller();
        let text = vec![
            progress::progress_line(controller),
            progress::current_description(controller),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::BOTTOM)),
            area,
        );
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let context = match self.wizard.as_ref() {
            None => HintContext::Home,
            Some(wizard) if wizard.is_submitted() => HintContext::Submitted,
            Some(wizard) => match wizard.current_step() {
                Step::Upload => HintContext::Upload,
                Step::CoverLetter => HintContext::CoverLetter,
                Step::Send => HintContext::Send,
                Step::Confirm => HintContext::Confirm,
            },
        };
        frame.render_widget(
            Paragraph::new(self.keybinds.footer_hint(context))
                .style(Style::default().fg(Color::DarkGray)),
            area,
        );
    }

    fn render_body(&self, frame: &mut Frame, area: Rect) {
        let Some(wizard) = self.wizard.as_ref() else {
            return;
        };
        if wizard.is_submitted() {
            self.render_submitted(frame, area, wizard);
            return;
        }
        match wizard.view() {
            StepView::Upload(view) => self.render_upload(frame, area, wizard, view),
            StepView::CoverLetter(view) => self.render_cover_letter(frame, area, wizard, view),
            StepView::Send(_) => self.render_send(frame, area, wizard),
            StepView::Confirm(view) => self.render_confirm(frame, area, wizard.draft(), view),
        }
    }

    fn render_upload(&self, frame: &mut Frame, area: Rect, wizard: &Wizard, view: &UploadView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let mut text = vec![Line::from("")];
        if let Some(file) = view.pending_file() {
            text.push(Line::from(Span::styled(
                "Uploading your CV...",
                Style::default().fg(Color::Yellow),
            )));
            text.push(Line::from(format!("Processing {}", file.name)));
        } else if let Some(cv) = wizard.draft().cv() {
            text.push(Line::from(Span::styled(
                "✓ CV Uploaded Successfully!",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(""));
            text.push(Line::from(format!("{}  ({:.2} MB)", cv.name, cv.size_mib())));
            text.push(Line::from(""));
            text.push(Line::from("Your CV is ready! Press Ctrl+N to continue to the next step."));
            text.push(Line::from(Span::styled(
                "Ctrl+R removes it. Opening another file replaces it.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            text.push(Line::from(Span::styled(
                "Drop your CV here",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(
                "Drag the file onto this window or type its path below, then press Enter",
            ));
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                "PDF files only, up to 10MB",
                Style::default().fg(Color::DarkGray),
            )));
        }

        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Upload Your CV "),
                ),
            chunks[0],
        );

        let input_style = if view.is_uploading() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(
            Paragraph::new(format!("{}{CURSOR}", self.path_input.buffer)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(input_style)
                    .title(" File path "),
            ),
            chunks[1],
        );
    }

    fn render_cover_letter(
        &self,
        frame: &mut Frame,
        area: Rect,
        wizard: &Wizard,
        view: &CoverLetterView,
    ) {
        let (main, side) = layout::body_columns(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main);

        let letter_title = match view.mode() {
            LetterMode::Generated => " Your Cover Letter (generated, review and edit) ",
            LetterMode::Input => " Your Cover Letter ",
        };
        self.render_field(frame, rows[0], wizard, Field::JobDescription, None, None);
        self.render_field(
            frame,
            rows[1],
            wizard,
            Field::CoverLetter,
            Some(COVER_LETTER_PLACEHOLDER),
            Some(letter_title),
        );

        let (label, style) = if view.is_generating() {
            (
                "Generating with AI...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else if view.can_generate() {
            (
                "Ctrl+G  Generate Cover Letter with AI",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "Paste a job description to enable AI generation",
                Style::default().fg(Color::DarkGray),
            )
        };
        let mut text = vec![Line::from(Span::styled(label, style)), Line::from("")];
        text.push(Line::from(
            "Paste the job description to generate a personalized cover letter, or write your own.",
        ));
        text.push(Line::from(""));
        text.push(continue_line(wizard.can_advance(), "Continue to Email"));
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" AI Assistant ")),
            side,
        );
    }

    fn render_send(&self, frame: &mut Frame, area: Rect, wizard: &Wizard) {
        let (main, side) = layout::body_columns(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(4),
            ])
            .split(main);

        self.render_field(frame, rows[0], wizard, Field::RecipientEmail, Some("hr@company.com"), None);
        self.render_field(frame, rows[1], wizard, Field::Subject, None, None);
        self.render_field(frame, rows[2], wizard, Field::EmailBody, None, None);

        let draft = wizard.draft();
        let letter_preview: String = draft
            .cover_letter()
            .unwrap_or_default()
            .chars()
            .take(50)
            .collect();
        let text = vec![
            Line::from(Span::styled(
                "✓ CV Ready",
                Style::default().fg(Color::Green),
            )),
            Line::from(format!("  {}", draft.cv().map(|cv| cv.name.as_str()).unwrap_or("-"))),
            Line::from(""),
            Line::from(Span::styled(
                "✓ Cover Letter",
                Style::default().fg(Color::Green),
            )),
            Line::from(format!("  {}...", letter_preview.replace('\n', " "))),
            Line::from(""),
            Line::from(Span::styled(
                "Success Tips",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("• Double-check the recipient's email"),
            Line::from("• Mention the specific position"),
            Line::from("• Follow up in 1-2 weeks"),
            Line::from("• Keep your email concise"),
            Line::from(""),
            continue_line(wizard.can_advance(), "Review & Send"),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Application Summary "),
                ),
            side,
        );
    }

    fn render_confirm(&self, frame: &mut Frame, area: Rect, draft: &WizardDraft, view: &ConfirmView) {
        let (main, side) = layout::body_columns(area);
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(6), Constraint::Length(5)])
            .split(main);

        let label = Style::default().add_modifier(Modifier::BOLD);
        let mut review = vec![
            Line::from(vec![
                Span::styled("To: ", label),
                Span::raw(draft.recipient_email().unwrap_or_default().to_string()),
            ]),
            Line::from(vec![
                Span::styled("Attachments: ", label),
                Span::raw("CV + Cover Letter"),
            ]),
            Line::from(vec![
                Span::styled("Subject: ", label),
                Span::raw(draft.subject().unwrap_or_default().to_string()),
            ]),
            Line::from(Span::styled("Message:", label)),
        ];
        review.extend(
            draft
                .email_body()
                .unwrap_or_default()
                .lines()
                .map(|line| Line::from(line.to_string())),
        );
        frame.render_widget(
            Paragraph::new(review)
                .wrap(Wrap { trim: false })
                .block(Block::default().borders(Borders::ALL).title(" Final Review ")),
            rows[0],
        );

        let toggles: Vec<Line> = Preference::ALL
            .iter()
            .enumerate()
            .map(|(i, &preference)| {
                let mark = if view.is_set(preference) { "[x]" } else { "[ ]" };
                let focused = self.focused_preference() == Some(preference);
                let style = if focused {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(Span::styled(
                    format!("{} {mark} {}", i + 1, preference.label()),
                    style,
                ))
            })
            .collect();
        frame.render_widget(
            Paragraph::new(toggles).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Email Preferences "),
            ),
            rows[1],
        );

        let cv_name = draft.cv().map(|cv| cv.name.as_str()).unwrap_or("-");
        let button = if view.is_sending() {
            Line::from(Span::styled(
                "Sending Application...",
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ))
        } else if view.can_send(draft) {
            Line::from(Span::styled(
                "Enter  Send Application",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(Span::styled(
                "Send Application (agree to the terms first)",
                Style::default().fg(Color::DarkGray),
            ))
        };
        let text = vec![
            Line::from(Span::styled("Ready to Send!", label)),
            Line::from(""),
            Line::from("Your application package includes:"),
            Line::from(format!("• Professional CV ({cv_name})")),
            Line::from("• Personalized cover letter"),
            Line::from("• Professional email message"),
            Line::from(""),
            button,
            Line::from(""),
            Line::from(Span::styled(
                "Pro Tip: applications sent Tuesday through Thursday typically have higher response rates. Follow up within 1-2 weeks if you don't hear back!",
                Style::default().fg(Color::DarkGray),
            )),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(" Send ")),
            side,
        );
    }

    fn render_submitted(&self, frame: &mut Frame, area: Rect, wizard: &Wizard) {
        let Some(receipt) = wizard.receipt() else {
            return;
        };
        let sent_at = receipt.sent_at.with_timezone(&chrono::Local);
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Application Sent Successfully! 🎉",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Your application has been sent to "),
                Span::styled(
                    receipt.recipient_email.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("."),
            ]),
            Line::from(Span::styled(
                format!("Sent {}", sent_at.format("%Y-%m-%d %H:%M")),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from("Good luck with your job application!"),
            Line::from(""),
            Line::from("Personalized: AI-crafted for this specific role"),
            Line::from("Professional: Industry-standard formatting"),
            Line::from("Optimized: Higher chance of getting noticed"),
            Line::from(""),
            Line::from(Span::styled(
                "n  Create Another Application     h  Return to Home",
                Style::default().fg(Color::Yellow),
            )),
        ];
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }

    fn render_field(
        &self,
        frame: &mut Frame,
        area: Rect,
        wizard: &Wizard,
        field: Field,
        placeholder: Option<&str>,
        title: Option<&str>,
    ) {
        let value = wizard.view().field(field).unwrap_or_default();
        let focused = self.focused_field() == Some(field);
        let border = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let title = title
            .map(str::to_string)
            .unwrap_or_else(|| format!(" {} ", field.label()));

        let text = match (value.is_empty(), placeholder) {
            (true, Some(placeholder)) if !focused => {
                Text::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
            }
            _ if focused => Text::raw(format!("{value}{CURSOR}")),
            _ => Text::raw(value.to_string()),
        };
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        let scroll = if focused {
            tail_scroll(value, inner_width, inner_height)
        } else {
            0
        };

        frame.render_widget(
            Paragraph::new(text)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(border)
                        .title(title),
                ),
            area,
        );
    }

    fn render_toasts(&self, frame: &mut Frame, area: Rect) {
        for (i, toast) in self.toasts.iter().rev().enumerate() {
            let Some(rect) = layout::toast_rect(area, i as u16) else {
                break;
            };
            let color = match toast.notice.severity {
                Severity::Info => Color::Cyan,
                Severity::Success => Color::Green,
                Severity::Destructive => Color::Red,
            };
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(toast.notice.description.clone())
                    .wrap(Wrap { trim: true })
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_style(Style::default().fg(color))
                            .title(Span::styled(
                                format!(" {} ", toast.notice.title),
                                Style::default().fg(color).add_modifier(Modifier::BOLD),
                            )),
                    ),
                rect,
            );
        }
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        let help_text = self.keybinds.help_text();
        let popup_area = layout::centered_rect(60, 80, area);

        frame.render_widget(Clear, popup_area);
        frame.render_widget(
            Paragraph::new(help_text).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help - Press F1 to close "),
            ),
            popup_area,
        );
    }
}

fn continue_line(enabled: bool, label: &str) -> Line<'static> {
    if enabled {
        Line::from(Span::styled(
            format!("Ctrl+N  {label}"),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!("{label} (not available yet)"),
            Style::default().fg(Color::DarkGray),
        ))
    }
}

/// Rows to scroll so the end of `text` stays visible in a box of the given
/// size. Counts character-wrapped rows, which is close enough for word wrap.
fn tail_scroll(text: &str, width: u16, height: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let width = width as usize;
    let rows: usize = text
        .split('\n')
        .map(|line| line.chars().count().max(1).div_ceil(width))
        .sum();
    rows.saturating_sub(height as usize).min(u16::MAX as usize) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::backend::TestBackend;
    use cvkick_wizard::CvFile;
    use ratatui::Terminal;
    use std::time::Duration;

    async fn settle(app: &mut App) {
        tokio::time::sleep(Duration::from_secs(10)).await;
        app.process_async_events();
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 36)).expect("test terminal");
        terminal.draw(|frame| app.render(frame)).expect("draw");
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn home_screen_invites_to_start() {
        let mut app = App::new(Config::default());
        let screen = draw(&mut app);
        assert!(screen.contains("Press Enter to get started"));
    }

    #[test]
    fn upload_step_shows_progress_and_prompt() {
        let mut app = App::new(Config::default());
        app.navigate(Destination::NewApplication);
        app.path_input.handle_paste("~/cv.pdf");

        let screen = draw(&mut app);
        assert!(screen.contains("[1] Upload CV"));
        assert!(screen.contains("PDF files only, up to 10MB"));
        assert!(screen.contains("~/cv.pdf"));
    }

    #[test]
    fn help_overlay_lists_shortcuts() {
        let mut app = App::new(Config::default());
        app.show_help = true;
        let screen = draw(&mut app);
        assert!(screen.contains("Keyboard Shortcuts"));
    }

    #[test]
    fn toasts_are_drawn_with_their_title() {
        let mut app = App::new(Config::default());
        app.push_toast(Notice::destructive("Invalid Email", "Please enter a valid email address."));
        let screen = draw(&mut app);
        assert!(screen.contains("Invalid Email"));
    }

    #[tokio::test(start_paused = true)]
    async fn submitted_screen_names_the_recipient() {
        let mut app = App::new(Config::default());
        app.navigate(Destination::NewApplication);
        app.select_cv(CvFile::new("resume.pdf", 2 * 1024 * 1024, "application/pdf"));
        settle(&mut app).await;
        app.advance();

        app.handle_event(Event::Paste("Senior Engineer role...".into()))
            .expect("paste description");
        app.generate_cover_letter();
        settle(&mut app).await;
        app.advance();

        app.handle_event(Event::Paste("hr@acme.com".into()))
            .expect("paste recipient");
        app.advance();
        app.handle_event(Event::Key(KeyEvent::new(KeyCode::Char('3'), KeyModifiers::NONE)))
            .expect("agree to terms");
        app.send_application();
        settle(&mut app).await;
        assert!(app.wizard.as_ref().is_some_and(Wizard::is_submitted));
        assert_eq!(app.toasts.len(), 1);

        let screen = draw(&mut app);
        assert!(screen.contains("Application Sent Successfully"));
        assert!(screen.contains("Your application has been sent to hr@acme.com."));
    }

    #[test]
    fn tail_scroll_keeps_the_last_rows_visible() {
        assert_eq!(tail_scroll("short", 20, 5), 0);
        assert_eq!(tail_scroll("a\nb\nc\nd", 20, 2), 2);
        assert_eq!(tail_scroll(&"x".repeat(45), 10, 3), 2);
        assert_eq!(tail_scroll("anything", 0, 3), 0);
    }
}

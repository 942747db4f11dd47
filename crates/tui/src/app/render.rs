use super::*;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        match self.route {
            Route::Home => self.render_home(frame, area),
            Route::Login => self.render_authorize(frame, area),
        }

        if self.show_help {
            self.render_help(frame, area);
        }

        if self.show_error_details {
            self.render_error_details(frame, area);
        }
    }

    fn render_home(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph};

        let mut content = String::from("\n\n  Pocket Auth Example\n\n");

        if self.login_pending {
            content.push_str("  Requesting a login token...\n");
        } else if let Some(ref uri) = self.auth_uri {
            content.push_str(
                "  Open this link in your browser and grant access:\n\n",
            );
            content.push_str(&format!("    {uri}\n\n"));
            content.push_str("  Press [a] once you have approved the request.\n");
            content.push_str("  Press [Enter] to request a fresh token instead.\n");
        } else {
            content.push_str("  Press [Enter] to login with Pocket.\n");
            content.push_str("  Press [?] for help, [Esc] to quit.\n");
        }

        if let Some(ref error) = self.last_error {
            content.push_str(&format!("\n  {error}\n  Press [E] for details.\n"));
        }

        content.push_str(&format!("\n  Backend: {}\n", self.config.backend.base_url));

        let paragraph = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).title(" pocket-tui "));
        frame.render_widget(paragraph, area);
    }

    fn render_authorize(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Paragraph};

        // One view per status; the enum is closed, so this match is the
        // whole rendering contract.
        let content = match self.status {
            FetchStatus::Idle => "\n\n  Preparing authorization...\n",
            FetchStatus::Fetching => "\n\n  Completing authorization with Pocket...\n",
            FetchStatus::Success => "\n\n  Authorized! Taking you back home...\n",
            FetchStatus::Error => {
                "\n\n  Authorization failed.\n\n  Press [Esc] to go back and try again.\n"
            }
        };

        let paragraph = Paragraph::new(content)
            .block(Block::default().borders(Borders::ALL).title(" authorization "));
        frame.render_widget(paragraph, area);
    }

    fn render_help(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Clear, Paragraph};

        let help_text = self.keybinds.help_text();
        let popup_area = self.centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);
        let paragraph = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title(" Help "));
        frame.render_widget(paragraph, popup_area);
    }

    fn render_error_details(&self, frame: &mut Frame, area: Rect) {
        use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

        let details = self
            .last_error
            .clone()
            .unwrap_or_else(|| "No error recorded.".to_string());
        let popup_area = self.centered_rect(60, 40, area);

        frame.render_widget(Clear, popup_area);
        let paragraph = Paragraph::new(format!("\n  {details}\n\n  Press [Esc] to close."))
            .wrap(Wrap { trim: false })
            .block(Block::default().borders(Borders::ALL).title(" Error "));
        frame.render_widget(paragraph, popup_area);
    }

    fn centered_rect(&self, percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let width = area.width * percent_x / 100;
        let height = area.height * percent_y / 100;
        Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        }
    }
}

use crate::application::{App, AppMode, NAV_SECTIONS, Page};
use crate::domain::seed::POPULAR_PLAN_ID;
use crate::domain::stats::{
    StatCard, DASHBOARD_CARDS, MONTHLY_STREAMS, POPULAR_SERVICES, RECENT_ACTIVITY,
    SERVICE_DISTRIBUTION, SUMMARY_CARDS, TOP_LOCATIONS, VIEWERS, WEEKLY_BANDWIDTH,
};
use crate::domain::{FormSchema, FormStateController, NotificationKind, UserStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, BarChart, Block, Borders, Cell, Chart, Clear, Dataset, Gauge, GraphType, List,
        ListItem, ListState, Paragraph, Row, Table, TableState, Wrap,
    },
    Frame,
};

const SIDEBAR_WIDTH: u16 = 24;
const TOAST_WIDTH: u16 = 44;
const ACCENT: Color = Color::Magenta;
const USER_KEYS: &str =
    "a: add  d: delete  v: view  e: edit  r: reset services  s: suspend  x: export";

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_sidebar(f, app, body[0]);
    match app.page {
        Page::Dashboard => render_dashboard(f, body[1]),
        Page::Stats => render_stats(f, app, body[1]),
        Page::Users => render_users(f, app, body[1]),
        Page::Plans => render_plans(f, app, body[1]),
        page => render_placeholder(f, page, body[1]),
    }

    render_status_bar(f, app, chunks[2]);

    match app.mode {
        AppMode::AddUser => render_form_popup(f, "Add new user", &app.users.form),
        AppMode::AddPlan => render_form_popup(f, "Create new plan", &app.plans.form),
        AppMode::Help => render_help_popup(f, app.help_scroll),
        AppMode::Normal | AppMode::Search => {}
    }

    render_toasts(f, app, chunks[1]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "Streamly Admin | Control Panel | {}",
        app.page.title()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let mut items = Vec::new();
    for section in NAV_SECTIONS {
        if section.title.is_empty() {
            items.push(ListItem::new(""));
        } else {
            items.push(ListItem::new(Line::from(Span::styled(
                section.title,
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
            ))));
        }
        for page in section.pages {
            let style = if *page == app.page {
                Style::default().bg(ACCENT).fg(Color::Black)
            } else {
                Style::default()
            };
            items.push(ListItem::new(Line::from(Span::styled(
                format!("  {}", page.title()),
                style,
            ))));
        }
    }

    let sidebar = List::new(items).block(Block::default().borders(Borders::ALL).title("Streamly"));
    f.render_widget(sidebar, area);
}

fn render_stat_cards(f: &mut Frame, cards: &[StatCard], area: Rect) {
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, slot) in cards.iter().zip(slots.iter()) {
        let mut value_line = vec![Span::styled(
            card.value,
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if card.change_percent.is_some() {
            let color = if card.is_declining() { Color::Red } else { Color::Green };
            value_line.push(Span::raw("  "));
            value_line.push(Span::styled(card.change_label(), Style::default().fg(color)));
        }

        let mut lines = vec![Line::from(value_line)];
        if let Some(detail) = card.detail {
            lines.push(Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))));
        }

        let widget = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(card.title));
        f.render_widget(widget, *slot);
    }
}

fn render_dashboard(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(9),
        ])
        .split(area);

    render_stat_cards(f, &DASHBOARD_CARDS, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let activity = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Streaming Activity - monthly active streams"),
        )
        .data(&MONTHLY_STREAMS[..])
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(Color::Black).bg(ACCENT));
    f.render_widget(activity, middle[0]);

    let services_block = Block::default()
        .borders(Borders::ALL)
        .title("Popular Services");
    let inner = services_block.inner(middle[1]);
    f.render_widget(services_block, middle[1]);

    let gauge_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            POPULAR_SERVICES
                .iter()
                .map(|_| Constraint::Length(2))
                .collect::<Vec<_>>(),
        )
        .split(inner);
    for ((name, percent), slot) in POPULAR_SERVICES.iter().zip(gauge_rows.iter()) {
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(ACCENT).bg(Color::DarkGray))
            .label(format!("{name} {percent}%"))
            .percent(*percent);
        f.render_widget(gauge, *slot);
    }

    let items: Vec<ListItem> = RECENT_ACTIVITY
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<18}", entry.user),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:<30}", entry.action)),
                Span::styled(entry.time, Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();
    let recent = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Recent Activity - latest user activities"),
    );
    f.render_widget(recent, rows[2]);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(9),
        ])
        .split(area);

    let period = Paragraph::new(Line::from(vec![
        Span::styled("System Statistics", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  Period: "),
        Span::styled(app.stats_period.label(), Style::default().fg(ACCENT)),
        Span::styled("  (p to change)", Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(period, rows[0]);

    render_stat_cards(f, &SUMMARY_CARDS, rows[1]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    let viewers: Vec<(f64, f64)> = VIEWERS
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.viewers as f64))
        .collect();
    let sessions: Vec<(f64, f64)> = VIEWERS
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.sessions as f64))
        .collect();
    let y_max = VIEWERS
        .iter()
        .map(|s| s.viewers.max(s.sessions))
        .max()
        .unwrap_or(0) as f64;

    let datasets = vec![
        Dataset::default()
            .name("viewers")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(ACCENT))
            .data(&viewers),
        Dataset::default()
            .name("sessions")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&sessions),
    ];
    let x_labels: Vec<Span> = [VIEWERS[0].day, VIEWERS[3].day, VIEWERS[6].day]
        .into_iter()
        .map(Span::raw)
        .collect();
    let y_labels: Vec<Span> = vec![
        Span::raw("0"),
        Span::raw(format!("{}", y_max as u64 / 2)),
        Span::raw(format!("{}", y_max as u64)),
    ];
    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Viewing Trend - viewers and sessions"),
        )
        .x_axis(
            Axis::default()
                .bounds([0.0, (VIEWERS.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(Axis::default().bounds([0.0, y_max]).labels(y_labels));
    f.render_widget(chart, charts[0]);

    let services = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Service Distribution (%)"),
        )
        .data(&SERVICE_DISTRIBUTION[..])
        .bar_width(6)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan));
    f.render_widget(services, charts[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);

    let locations: Vec<ListItem> = TOP_LOCATIONS
        .iter()
        .map(|location| {
            ListItem::new(Line::from(vec![
                Span::raw(format!("{:<16}", location.country)),
                Span::styled(
                    format!("{:>6}", location.users),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("  {}%", location.percent())),
            ]))
        })
        .collect();
    let locations = List::new(locations)
        .block(Block::default().borders(Borders::ALL).title("Top Locations"));
    f.render_widget(locations, bottom[0]);

    let bandwidth = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Bandwidth Usage (GB)"),
        )
        .data(&WEEKLY_BANDWIDTH[..])
        .bar_width(8)
        .bar_gap(2)
        .bar_style(Style::default().fg(ACCENT))
        .value_style(Style::default().fg(Color::Black).bg(ACCENT));
    f.render_widget(bandwidth, bottom[1]);
}

fn render_users(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let searching = app.mode == AppMode::Search;
    let search_text = if app.users.search_query.is_empty() && !searching {
        Span::styled("Search users...", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.users.search_query.as_str())
    };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Search (/)")
            .border_style(if searching {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            }),
    );
    f.render_widget(search, rows[0]);
    if searching {
        let typed = app.users.search_query.get(..app.cursor_position).unwrap_or_default();
        let x = rows[0].x + 1 + typed.chars().count() as u16;
        f.set_cursor_position((x.min(rows[0].right().saturating_sub(2)), rows[0].y + 1));
    }

    let header = Row::new(vec!["Name", "Email", "Role", "Status", "Streams", "Services"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    let visible = app.users.visible();
    let table_rows: Vec<Row> = visible
        .iter()
        .map(|user| {
            let status_style = match user.status {
                UserStatus::Active => Style::default().fg(Color::Green),
                UserStatus::Inactive => Style::default().fg(Color::Red),
            };
            let services = user
                .services
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            Row::new(vec![
                Cell::from(user.name.clone()),
                Cell::from(user.email.clone()),
                Cell::from(user.role.as_str()),
                Cell::from(user.status.as_str()).style(status_style),
                Cell::from(user.streams.to_string()),
                Cell::from(services),
            ])
        })
        .collect();

    let title = format!(
        "All Users ({} of {}) | {USER_KEYS}",
        visible.count(),
        app.users.users.len()
    );
    let widths = [
        Constraint::Length(20),
        Constraint::Length(22),
        Constraint::Length(9),
        Constraint::Length(9),
        Constraint::Length(8),
        Constraint::Min(10),
    ];
    let table = Table::new(table_rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title))
        .row_highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ")
        .column_spacing(1);

    let mut state = TableState::default().with_selected(Some(app.users.selected));
    f.render_stateful_widget(table, rows[1], &mut state);
}

fn render_plans(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let items: Vec<ListItem> = app
        .plans
        .plans
        .records()
        .iter()
        .map(|plan| {
            let mut spans = vec![
                Span::styled(
                    format!("{:<18}", plan.name),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!("{:>9}", plan.price_label())),
                Span::styled(plan.billing_label(), Style::default().fg(Color::DarkGray)),
            ];
            if plan.id == POPULAR_PLAN_ID {
                spans.push(Span::styled(" Popular", Style::default().fg(ACCENT)));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Plans | a: new plan  d: delete  x: export"),
        )
        .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.plans.selected));
    f.render_stateful_widget(list, columns[0], &mut state);

    let Some(plan) = app.plans.selected_plan() else {
        let empty = Paragraph::new("No plans. Press a to create one.")
            .block(Block::default().borders(Borders::ALL).title("Plan"));
        f.render_widget(empty, columns[1]);
        return;
    };

    let heading = Style::default().add_modifier(Modifier::BOLD);
    let check = Span::styled("  + ", Style::default().fg(ACCENT));
    let mut lines = vec![
        Line::from(vec![
            Span::styled(plan.price_label(), heading.fg(ACCENT)),
            Span::raw(" "),
            Span::styled(plan.billing_label(), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled("Stream types", heading)),
        Line::from(format!(
            "  {}",
            plan.stream_types
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join("  ")
        )),
        Line::from(""),
        Line::from(Span::styled("Limits", heading)),
        Line::from(vec![
            check.clone(),
            Span::raw(format!("{} concurrent streams", plan.max_streams)),
        ]),
        Line::from(vec![
            check.clone(),
            Span::raw(format!("{} max viewers", plan.max_viewers)),
        ]),
        Line::from(vec![check.clone(), Span::raw(format!("{} storage", plan.storage))]),
        Line::from(""),
        Line::from(Span::styled("Features", heading)),
    ];
    lines.extend(
        plan.features
            .iter()
            .map(|feature| Line::from(vec![check.clone(), Span::raw(feature.as_str())])),
    );

    let mut title = plan.name.clone();
    if plan.id == POPULAR_PLAN_ID {
        title.push_str(" [Popular]");
    }
    let details = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: false });
    f.render_widget(details, columns[1]);
}

fn render_placeholder(f: &mut Frame, page: Page, area: Rect) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(page.title(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(
            "This page is under development.",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let placeholder = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(placeholder, area);
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let input_text = match app.mode {
        AppMode::Normal => {
            "Tab/Shift+Tab: switch page | ↑↓/jk: select | F1/?: help | q: quit".to_string()
        }
        AppMode::Search => format!(
            "Search: {} (Enter to keep filter, Esc to clear)",
            app.users.search_query
        ),
        AppMode::AddUser | AppMode::AddPlan => {
            "Tab: next field | ←/→: change option | Enter: create | Ctrl+U: clear | Esc: cancel"
                .to_string()
        }
        AppMode::Help => {
            "↑↓/jk: scroll | PgUp/PgDn: fast scroll | Home: top | Esc/q: close help".to_string()
        }
    };

    let input = Paragraph::new(input_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Search => Style::default().fg(Color::Yellow),
            AppMode::AddUser | AppMode::AddPlan => Style::default().fg(Color::Green),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(input, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn render_form_popup<S: FormSchema>(f: &mut Frame, title: &str, form: &FormStateController<S>) {
    let Some(draft) = form.draft() else {
        return;
    };
    let focused = form.focused_field();

    let mut lines = Vec::with_capacity(S::FIELDS.len() + 2);
    for &field in S::FIELDS {
        let is_focused = focused == Some(field);
        let value = draft.get(field);
        let shown = if S::choices(field).is_some() {
            format!("< {value} >")
        } else if is_focused {
            format!("{value}_")
        } else {
            value.to_string()
        };

        let label_style = if is_focused {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if is_focused { "> " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<13}", S::label(field)), label_style),
            Span::raw(shown),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: create   Esc: cancel",
        Style::default().fg(Color::DarkGray),
    )));

    let area = centered_rect(60, lines.len() as u16 + 2, f.area());
    f.render_widget(Clear, area);
    let popup = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_string())
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(popup, area);
}

fn render_toasts(f: &mut Frame, app: &App, area: Rect) {
    let mut bottom = area.bottom();
    let width = TOAST_WIDTH.min(area.width);
    let x = area.right().saturating_sub(width);

    let toasts: Vec<_> = app.notifications.visible().collect();
    for notification in toasts.into_iter().rev() {
        let height = 3;
        if bottom < area.y + height {
            break;
        }
        bottom -= height;
        let slot = Rect { x, y: bottom, width, height };

        let color = match notification.kind {
            NotificationKind::Info => Color::Cyan,
            NotificationKind::Error => Color::Red,
        };
        f.render_widget(Clear, slot);
        let toast = Paragraph::new(notification.description.as_str()).block(
            Block::default()
                .borders(Borders::ALL)
                .title(notification.title.as_str())
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(toast, slot);
    }
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_text = get_help_text();
    let help_lines: Vec<&str> = help_text.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(
                    "Streamly Admin Help (Line {}/{})",
                    start_line + 1,
                    help_lines.len()
                ))
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

fn get_help_text() -> &'static str {
    r#"STREAMLY ADMIN KEYBOARD REFERENCE

=== NAVIGATION ===
Tab             Next page in the sidebar
Shift+Tab       Previous page in the sidebar
↑↓ or k/j       Move the selection in lists and tables
Esc             Dismiss notifications
q               Quit

=== USERS PAGE ===
/               Search by name or email (live filter)
                Enter keeps the filter, Esc clears it
a               Add a new user
d / Delete      Delete the selected user
v               View details of the selected user
e               Edit the selected user
r               Restart the selected user's services
s               Suspend the selected user (marks it Inactive)
x               Export the users shown in the table to users.csv

=== PLANS PAGE ===
a               Create a new plan
d / Delete      Delete the selected plan
x               Export all plans to plans.json

=== STATISTICS PAGE ===
p               Change the reporting period

=== DIALOGS ===
Tab / ↓         Next field
Shift+Tab / ↑   Previous field
←/→ or Space    Change the value of an option field
Backspace       Delete the last character
Ctrl+U          Clear every field
Enter           Create the record
Esc             Cancel and discard the draft

Numeric plan fields accept the leading number of whatever is typed.
Price, Max streams and Max viewers that cannot be read are stored as
NaN (price) or 0 (limits) and a warning is shown.

=== HELP NAVIGATION ===
↑↓ or j/k       Scroll help text up/down one line
Page Up/Down    Scroll help text up/down 5 lines
Home            Jump to top of help text
Esc/F1/?/q      Close this help window"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Notification, PlanField};
    use ratatui::{backend::TestBackend, Terminal};

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render_ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for row in buffer.content().chunks(buffer.area.width as usize) {
            for cell in row {
                out.push_str(cell.symbol());
            }
            out.push('\n');
        }
        out
    }

    fn on_page(page: Page) -> App {
        let mut app = App::default();
        app.go_to(page);
        app
    }

    #[test]
    fn test_every_page_renders() {
        for page in Page::all() {
            let app = on_page(page);
            let screen = render_to_string(&app, 140, 45);
            assert!(screen.contains(page.title()), "missing title for {page}");
        }
    }

    #[test]
    fn test_only_pages_without_content_show_placeholder() {
        let placeholder = "This page is under development.";
        for page in [Page::Store, Page::Firewall, Page::Settings] {
            assert!(render_to_string(&on_page(page), 140, 45).contains(placeholder));
        }
        for page in [Page::Dashboard, Page::Stats, Page::Users, Page::Plans] {
            assert!(!render_to_string(&on_page(page), 140, 45).contains(placeholder));
        }
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        for page in Page::all() {
            let mut app = on_page(page);
            app.notify(Notification::info("Plan created", "Plan Pro"));
            render_to_string(&app, 30, 10);
        }
    }

    #[test]
    fn test_dashboard_shows_cards_and_activity() {
        let screen = render_to_string(&App::default(), 140, 45);
        assert!(screen.contains("Total Users"));
        assert!(screen.contains("$12,345"));
        assert!(screen.contains("Started a new RTMP stream"));
    }

    #[test]
    fn test_users_table_follows_filter() {
        let mut app = on_page(Page::Users);
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("Carlos Rodriguez"));
        assert!(screen.contains("Michael Brown"));

        app.users.search_query = "carlos".to_string();
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("Carlos Rodriguez"));
        assert!(!screen.contains("Michael Brown"));
        assert!(screen.contains("All Users (1 of 5)"));
    }

    #[test]
    fn test_plans_page_shows_selected_plan_details() {
        let mut app = on_page(Page::Plans);
        app.select_next();
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("Pro Plan [Popular]"));
        assert!(screen.contains("500 max viewers"));
        assert!(screen.contains("$49.99"));
    }

    #[test]
    fn test_plan_dialog_and_toasts_render() {
        let mut app = on_page(Page::Plans);
        app.open_add_dialog();
        app.plans.form.set_field(PlanField::Name, "Night Owl");
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("Create new plan"));
        assert!(screen.contains("Night Owl"));
        assert!(screen.contains("< Monthly >"));

        app.cancel_dialog();
        app.notify(Notification::error("Plan deleted", "Plan Basic Plan has been deleted"));
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("Plan deleted"));
    }

    #[test]
    fn test_help_popup_renders() {
        let mut app = App::default();
        app.toggle_help();
        let screen = render_to_string(&app, 140, 45);
        assert!(screen.contains("Streamly Admin Help"));
        assert!(screen.contains("KEYBOARD REFERENCE"));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(60, 30, area);
        assert_eq!(rect, area);

        let rect = centered_rect(10, 4, area);
        assert_eq!(rect, Rect::new(5, 3, 10, 4));
    }
}

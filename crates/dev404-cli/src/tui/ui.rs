//! TUI rendering — boot terminal chrome, then the four-tab landing view.
//!
//! ┌──────────────────────────────────────────────┐
//! │              DEV 404                         │
//! │   Full-Stack Web Developer Turned Sonic…     │
//! │          42 fans and counting                │
//! ├──────────────────────────────────────────────┤
//! │ ▌Music▐ │ Videos │ Bio │ Contact             │
//! ├──────────────────────────────────────────────┤
//! │ ┌ BROKEN ────────────┐ ┌ Movies, Lies… ────┐ │
//! │ │ ▃▆▂█▅▁▇▄▃▆▂█▅▁▇▄   │ │ ▂▁▃▂▁▂▃▁▂▁▂▃▁▂▁   │ │
//! │ └────────────────────┘ └───────────────────┘ │
//! │ ┌ Fractured Horizons ┐ ┌ Hello, World! ────┐ │
//! │ └────────────────────┘ └───────────────────┘ │
//! ├──────────────────────────────────────────────┤
//! │ ←→ tabs  ↑↓ album  enter: open  q: quit      │
//! └──────────────────────────────────────────────┘

use ratatui::{prelude::*, widgets::*};

use dev404_core::content::{
    ALBUMS, BIO, CONTACT_EMAIL, FAN_FORM_URL, HERO_TAGLINE, HERO_TITLE, SOCIAL_LINKS,
};
use dev404_core::{CatalogMode, View, VisualizerFrame};

use super::app::{App, FormField, Tab};

const PROMPT: &str = "dev404@sonic-architect:~$";

/// Two-stop bar gradient, the promo site's canvas colors.
const GRADIENT_HI: Color = Color::Rgb(0, 212, 255);
const GRADIENT_LO: Color = Color::Rgb(37, 99, 235);

const BAR_GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn draw(f: &mut Frame, app: &App) {
    match app.shell().view() {
        View::Boot => draw_boot(f, app),
        View::Main => draw_main(f, app),
    }
}

// ---------------------------------------------------------------------------
// Boot view
// ---------------------------------------------------------------------------

fn draw_boot(f: &mut Frame, app: &App) {
    let boot = app.boot();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(Color::Red)),
            Span::styled("● ", Style::default().fg(Color::Yellow)),
            Span::styled("● ", Style::default().fg(Color::Green)),
            Span::styled(" Terminal", Style::default().fg(Color::Cyan)),
        ]),
        Line::from(""),
    ];

    for line in boot.revealed() {
        lines.push(Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Color::Cyan)),
            Span::raw(" "),
            Span::styled(*line, Style::default().fg(Color::Green)),
        ]));
    }

    if boot.is_revealing() {
        lines.push(Line::from(vec![
            Span::styled(PROMPT, Style::default().fg(Color::Cyan)),
            Span::styled(
                " _",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]));
    }

    let height = (boot.script_len() + 5) as u16;
    let area = centered(f.area(), 72, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

/// Center a `width` × `height` box inside `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ---------------------------------------------------------------------------
// Main view
// ---------------------------------------------------------------------------

fn draw_main(f: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // hero
            Constraint::Length(3), // tabs
            Constraint::Min(8),    // body
            Constraint::Length(1), // keys
        ])
        .split(f.area());

    draw_hero(f, rows[0], app);
    draw_tabs(f, rows[1], app);
    match app.tab() {
        Tab::Music => draw_music(f, rows[2], app),
        Tab::Videos => draw_videos(f, rows[2], app),
        Tab::Bio => draw_bio(f, rows[2]),
        Tab::Contact => draw_contact(f, rows[2], app),
    }
    draw_keys(f, rows[3], app);
}

fn draw_hero(f: &mut Frame, area: Rect, app: &App) {
    let count = app.shell().counter.get();
    let lines = vec![
        Line::from(Span::styled(
            HERO_TITLE,
            Style::default().bold().fg(GRADIENT_HI),
        )),
        Line::from(Span::styled(HERO_TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            format!("{count} fans and counting"),
            Style::default().fg(Color::Yellow),
        )),
    ];
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_tabs(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .map(|t| Line::from(format!(" {} ", t.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.tab().index())
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(GRADIENT_HI)
                .add_modifier(Modifier::BOLD),
        )
        .divider("│");
    f.render_widget(tabs, area);
}

// ---------------------------------------------------------------------------
// Music tab
// ---------------------------------------------------------------------------

fn draw_music(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(halves[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(halves[1]);

    let cells = [top[0], top[1], bottom[0], bottom[1]];
    for ((index, album), cell) in ALBUMS.iter().enumerate().zip(cells) {
        let is_cursor = app.album_cursor() == index;
        let border = if is_cursor {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(
                format!(" {} ", album.title),
                Style::default().bold().fg(GRADIENT_HI),
            ));

        let mut lines = Vec::new();
        if !album.blurb.is_empty() {
            lines.push(Line::from(Span::styled(
                album.blurb,
                Style::default().fg(Color::Gray),
            )));
        }
        lines.push(spectrum_line(app.frame()));
        lines.push(Line::from(Span::styled(
            album.embed_url,
            Style::default().fg(Color::DarkGray),
        )));

        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
            cell,
        );
    }
}

/// One row of bar glyphs from the shared visualizer frame.
fn spectrum_line(frame: &VisualizerFrame) -> Line<'static> {
    let spans: Vec<Span> = (0..frame.bars().len())
        .map(|i| bar_cell(frame, i))
        .collect();
    Line::from(spans)
}

fn bar_cell(frame: &VisualizerFrame, index: usize) -> Span<'static> {
    let value = frame.bars()[index];
    let fraction = VisualizerFrame::height_fraction(value);
    let step = ((fraction * BAR_GLYPHS.len() as f64).ceil() as usize).clamp(1, BAR_GLYPHS.len());
    let glyph = BAR_GLYPHS[step - 1];

    // Taller bars take the top gradient stop; glowing bars get emphasis.
    let mut style = if fraction >= 0.4 {
        Style::default().fg(GRADIENT_HI)
    } else {
        Style::default().fg(GRADIENT_LO)
    };
    if frame.glows(index) {
        style = style.add_modifier(Modifier::BOLD);
    }
    Span::styled(glyph.to_string(), style)
}

// ---------------------------------------------------------------------------
// Videos tab
// ---------------------------------------------------------------------------

fn draw_videos(f: &mut Frame, area: Rect, app: &App) {
    match app.catalog().mode() {
        CatalogMode::Grid => draw_video_grid(f, area, app),
        CatalogMode::SinglePlayer => draw_video_player(f, area, app),
    }
}

fn draw_video_grid(f: &mut Frame, area: Rect, app: &App) {
    let entries = app.catalog().entries();
    let rows: Vec<Row> = entries
        .iter()
        .enumerate()
        .map(|(i, video)| {
            let is_cursor = i == app.video_cursor();
            let pointer = if is_cursor { "▸" } else { " " };
            let style = if is_cursor {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                pointer.to_string(),
                video.title.to_string(),
                video.description.to_string(),
                video.watch_url(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(26),
            Constraint::Length(24),
            Constraint::Min(30),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Music Videos (enter to watch) "),
    );
    f.render_widget(table, area);
}

fn draw_video_player(f: &mut Frame, area: Rect, app: &App) {
    let Some(selected) = app.catalog().selected() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(area);

    let player_lines = vec![
        Line::from(Span::styled(
            selected.title,
            Style::default().bold().fg(GRADIENT_HI),
        )),
        Line::from(Span::styled(
            selected.description,
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            selected.embed_url(),
            Style::default().fg(Color::Yellow),
        )),
    ];
    f.render_widget(
        Paragraph::new(player_lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GRADIENT_HI))
                .title(" Video Player "),
        ),
        chunks[0],
    );

    let others = app.catalog().others();
    let rows: Vec<Row> = others
        .iter()
        .enumerate()
        .map(|(i, video)| {
            let is_cursor = i == app.video_cursor();
            let pointer = if is_cursor { "▸" } else { " " };
            let style = if is_cursor {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default().fg(Color::White)
            };
            Row::new(vec![
                pointer.to_string(),
                video.title.to_string(),
                video.description.to_string(),
            ])
            .style(style)
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(2),
            Constraint::Length(26),
            Constraint::Min(20),
        ],
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Other Videos (enter to switch) "),
    );
    f.render_widget(table, chunks[1]);
}

// ---------------------------------------------------------------------------
// Bio tab
// ---------------------------------------------------------------------------

fn draw_bio(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Full-Stack Developer • Sonic Architect",
            Style::default().fg(GRADIENT_LO),
        )),
        Line::from(""),
        Line::from(BIO),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " About DEV 404 ",
            Style::default().bold().fg(GRADIENT_HI),
        ));
    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block),
        centered(area, 76, area.height),
    );
}

// ---------------------------------------------------------------------------
// Contact tab
// ---------------------------------------------------------------------------

fn draw_contact(f: &mut Frame, area: Rect, app: &App) {
    let area = centered(area, 72, area.height);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // heading + mailto
            Constraint::Length(3), // name input
            Constraint::Length(3), // email input
            Constraint::Length(2), // status
            Constraint::Min(4),    // social links
        ])
        .split(area);

    let form = &app.shell().form;

    let heading = vec![
        Line::from(Span::styled(
            "Join the Fanbase",
            Style::default().bold().fg(GRADIENT_HI),
        )),
        Line::from(Span::styled(
            CONTACT_EMAIL,
            Style::default().fg(Color::Cyan),
        )),
    ];
    f.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        chunks[0],
    );

    draw_input(
        f,
        chunks[1],
        " Your name (optional) ",
        &form.name,
        app.focus() == FormField::Name,
    );
    draw_input(
        f,
        chunks[2],
        " Your email address ",
        &form.email,
        app.focus() == FormField::Email,
    );

    let status = if form.is_submitting() {
        Line::from(Span::styled(
            "Joining the fanbase…",
            Style::default().fg(Color::Gray),
        ))
    } else if let Some(message) = form.message() {
        Line::from(Span::styled(message, Style::default().fg(Color::Yellow)))
    } else {
        Line::from(Span::styled(
            "enter: join the fanbase",
            Style::default().fg(Color::DarkGray),
        ))
    };
    f.render_widget(
        Paragraph::new(vec![status]).alignment(Alignment::Center),
        chunks[3],
    );

    let mut social = vec![Line::from(Span::styled(
        "Follow DEV 404",
        Style::default().bold().fg(GRADIENT_HI),
    ))];
    for link in SOCIAL_LINKS {
        social.push(Line::from(vec![
            Span::styled(format!("{:<9}", link.label), Style::default().fg(Color::White)),
            Span::styled(link.url, Style::default().fg(Color::DarkGray)),
        ]));
    }
    social.push(Line::from(""));
    social.push(Line::from(vec![
        Span::styled("Mailing list (external)  ", Style::default().fg(Color::White)),
        Span::styled(FAN_FORM_URL, Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(
        Paragraph::new(social).block(Block::default().borders(Borders::ALL)),
        chunks[4],
    );
}

fn draw_input(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let content = if focused {
        format!("{value}_")
    } else {
        value.to_string()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title.to_string());
    f.render_widget(Paragraph::new(content).block(block), area);
}

// ---------------------------------------------------------------------------
// Key bar
// ---------------------------------------------------------------------------

fn draw_keys(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.tab() {
        Tab::Music => " ←→ tabs   ↑↓ album   enter: open   1-4 jump   q: quit",
        Tab::Videos => match app.catalog().mode() {
            CatalogMode::Grid => " ←→ tabs   ↑↓ move   enter: watch   1-4 jump   q: quit",
            CatalogMode::SinglePlayer => " ↑↓ move   enter: switch   esc/b: back   ←→ tabs",
        },
        Tab::Bio => " ←→ tabs   1-4 jump   q: quit",
        Tab::Contact => " tab/↑↓ field   type to edit   enter: join   ←→ tabs   esc: quit",
    };
    let bar = Paragraph::new(hints).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(bar, area);
}

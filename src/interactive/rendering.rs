//! TUI rendering with ratatui
//!
//! One render function per screen, dispatched on the app state.

use super::app::{App, FeedbackTone, GameSummary, Screen};
use crate::core::{DifficultyLevel, GameMode, hints_for};
use crate::output::formatters::{accuracy_percent, format_clock, format_minutes};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    match &app.screen {
        Screen::Menu => render_menu(f, app),
        Screen::DifficultySelect { mode } => render_difficulty_select(f, app, *mode),
        Screen::Playing => render_game(f, app),
        Screen::Results(summary) => render_results(f, summary),
        Screen::Statistics => render_statistics(f, app),
        Screen::Achievements => render_achievements(f, app),
        Screen::Help => render_help(f),
    }
}

const fn difficulty_color(level: DifficultyLevel) -> Color {
    match level {
        DifficultyLevel::Beginner => Color::Green,
        DifficultyLevel::Intermediate => Color::Yellow,
        DifficultyLevel::Advanced => Color::Blue,
        DifficultyLevel::Expert => Color::Red,
    }
}

fn render_header(f: &mut Frame, area: Rect, title: &str) {
    let header = Paragraph::new(title.to_string())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_footer(f: &mut Frame, area: Rect, text: &str) {
    let footer = Paragraph::new(text.to_string())
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

/// Standard three-row shell: header, content, footer
fn shell(f: &mut Frame, title: &str, footer: &str) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(f.area());

    render_header(f, chunks[0], title);
    render_footer(f, chunks[2], footer);
    chunks[1]
}

fn render_menu(f: &mut Frame, app: &App) {
    let content = shell(
        f,
        "🎯 IPA TRANSLATION MASTER 🎯",
        "1-5 play · 6 statistics · 7 achievements · 8 help · q quit",
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(6)])
        .split(content);

    let mut welcome = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", app.profile.name),
            Style::default().fg(Color::Green),
        )),
        Line::from(Span::styled(
            format!(
                "Level {} | Experience: {}",
                app.profile.level, app.profile.experience
            ),
            Style::default().fg(Color::Yellow),
        )),
    ];
    if let Some(feedback) = &app.feedback {
        welcome.push(Line::from(Span::styled(
            feedback.text.clone(),
            Style::default().fg(feedback_color(feedback.tone)),
        )));
    }
    f.render_widget(
        Paragraph::new(welcome).block(Block::default().borders(Borders::NONE)),
        chunks[0],
    );

    let items: Vec<ListItem> = [
        "1. 📚 Classic Game",
        "2. 🏃 Time Attack (60s)",
        "3. 🔥 10 Streak Challenge",
        "4. 🐦 50 Streak Challenge",
        "5. 🚩 100 Streak Challenge",
        "6. 📊 View Statistics",
        "7. 🏆 View Achievements",
        "8. ❓ Help",
        "q. 🚪 Exit",
    ]
    .iter()
    .map(|&line| ListItem::new(line))
    .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Choose an option ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, chunks[1]);
}

fn render_difficulty_select(f: &mut Frame, app: &App, mode: GameMode) {
    let content = shell(
        f,
        &format!("🎯 {}", mode.label().to_uppercase()),
        "1-5 select difficulty · Esc back",
    );

    let counts = app.dictionary.counts_by_difficulty();
    let items: Vec<ListItem> = std::iter::once(ListItem::new(format!(
        "1. 🌈 All Difficulties ({} words)",
        app.dictionary.len()
    )))
    .chain(counts.iter().enumerate().map(|(i, &(level, count))| {
        let icons = ["🟢", "🟡", "🟠", "🔴"];
        ListItem::new(Line::from(Span::styled(
            format!("{}. {} {level} ({count} words)", i + 2, icons[i]),
            Style::default().fg(difficulty_color(level)),
        )))
    }))
    .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Select Difficulty ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, content);
}

fn render_game(f: &mut Frame, app: &App) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with live stats
            Constraint::Min(8),    // Word and hints
            Constraint::Length(3), // Input
            Constraint::Length(3), // Feedback
        ])
        .split(f.area());

    let mut stats_line = format!(
        "🎯 {} — Score: {} | Streak: {} | Best: {}",
        session.settings().mode.label().to_uppercase(),
        session.score(),
        session.streak(),
        session.max_streak()
    );
    if let Some(remaining) = session.time_remaining() {
        stats_line.push_str(&format!(" | Time: {remaining}s"));
    }
    render_header(f, chunks[0], &stats_line);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_word_panel(f, app, main_chunks[0]);
    render_hint_panel(f, app, main_chunks[1]);

    let input = Paragraph::new(format!("> {}", app.input_buffer)).block(
        Block::default()
            .title(" Your answer ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, chunks[2]);

    let (text, color) = match &app.feedback {
        Some(feedback) => (feedback.text.clone(), feedback_color(feedback.tone)),
        None => (
            "Type the word for the pronunciation · 'hint' · 'quit'".to_string(),
            Color::DarkGray,
        ),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, chunks[3]);
}

fn render_word_panel(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };
    let word = session.current_word();

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Pronunciation:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("/{}/", word.transcription()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Difficulty: "),
            Span::styled(
                word.difficulty().label(),
                Style::default().fg(difficulty_color(word.difficulty())),
            ),
        ]),
    ];

    if session.settings().mode.max_attempts() > 1 {
        content.push(Line::from(format!(
            "Attempts left: {}",
            session.attempts_remaining()
        )));
    }

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_hint_panel(f: &mut Frame, app: &App, area: Rect) {
    let Some(session) = app.session.as_ref() else {
        return;
    };

    let show = session.hint_revealed();
    let items: Vec<ListItem> = hints_for(session.current_word().transcription())
        .into_iter()
        .map(|hint| {
            let example = if show {
                hint.example.to_string()
            } else {
                "*".repeat(hint.example.len())
            };
            ListItem::new(Line::from(vec![
                Span::styled(hint.symbol, Style::default().fg(Color::Green)),
                Span::raw(": "),
                Span::raw(example),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" 💡 Hints (type \"hint\") ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Yellow)),
    );
    f.render_widget(list, area);
}

fn render_results(f: &mut Frame, summary: &GameSummary) {
    let content = shell(f, "🎯 GAME OVER", "Enter menu · q quit");

    let mut lines = Vec::new();
    if summary.won {
        lines.push(Line::from(Span::styled(
            "🎉 CONGRATULATIONS! YOU WON! 🎉",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(Span::styled(
        "Final Results:",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!("Score:       {}", summary.score)));
    lines.push(Line::from(format!("Best Streak: {}", summary.max_streak)));
    lines.push(Line::from(format!(
        "Words:       {} correct of {}",
        summary.total_correct, summary.total_words
    )));
    lines.push(Line::from(format!(
        "Time Played: {}",
        format_clock(summary.duration_seconds)
    )));
    lines.push(Line::from(format!("Hints Used:  {}", summary.hints_used)));

    if !summary.new_achievements.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "🏆 NEW ACHIEVEMENTS UNLOCKED!",
            Style::default().fg(Color::Yellow),
        )));
        for achievement in &summary.new_achievements {
            lines.push(Line::from(format!(
                "{} {}: {}",
                achievement.icon, achievement.name, achievement.description
            )));
        }
    }

    if let Some(error) = &summary.persist_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("⚠ Progress not saved: {error}"),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, content);
}

fn render_statistics(f: &mut Frame, app: &App) {
    let content = shell(f, "📊 YOUR STATISTICS", "Enter menu · q quit");

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(content);

    let stats = &app.profile.stats;
    let overall = vec![
        Line::from(format!(
            "Name: {} | Level: {} | Exp: {}",
            app.profile.name, app.profile.level, app.profile.experience
        )),
        Line::from(""),
        Line::from(format!("Games Played:    {}", stats.total_games_played)),
        Line::from(format!("Words Attempted: {}", stats.total_words_guessed)),
        Line::from(format!("Average Score:   {}", stats.average_score)),
        Line::from(format!("Best Streak:     {}", stats.best_streak)),
        Line::from(format!("Accuracy:        {}%", stats.accuracy_percentage())),
        Line::from(format!(
            "Time Played:     {}",
            format_minutes(stats.time_played_seconds)
        )),
        Line::from(format!("Favorite Mode:   {}", stats.favorite_mode)),
    ];
    f.render_widget(
        Paragraph::new(overall).block(
            Block::default()
                .title(" Overall ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        ),
        chunks[0],
    );

    let by_difficulty: Vec<Line> = DifficultyLevel::ALL
        .into_iter()
        .map(|level| {
            let word_stats = stats.word_stats.get(&level).copied().unwrap_or_default();
            Line::from(vec![
                Span::styled(
                    format!("{:<13}", format!("{level}:")),
                    Style::default().fg(difficulty_color(level)),
                ),
                Span::raw(format!(
                    "{} words, {} correct ({}%)",
                    word_stats.played,
                    word_stats.correct,
                    accuracy_percent(word_stats.correct, word_stats.played)
                )),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(by_difficulty).block(
            Block::default()
                .title(" By Word Difficulty ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        ),
        chunks[1],
    );
}

fn render_achievements(f: &mut Frame, app: &App) {
    let content = shell(f, "🏆 YOUR ACHIEVEMENTS", "Enter menu · q quit");

    let items: Vec<ListItem> = app
        .profile
        .achievements
        .iter()
        .map(|achievement| {
            let (marker, style) = if achievement.is_unlocked {
                ("✅", Style::default().fg(Color::Green))
            } else {
                ("🔒", Style::default().fg(Color::DarkGray))
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{marker} {} ", achievement.icon)),
                Span::styled(achievement.name.clone(), style),
                Span::raw(format!(": {}", achievement.description)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, content);
}

fn render_help(f: &mut Frame) {
    let content = shell(f, "❓ HELP & TUTORIAL", "Enter menu · q quit");

    let lines = vec![
        Line::from(Span::styled(
            "How to Play:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("1. You'll see an IPA transcription like /kæt/"),
        Line::from("2. Type the English word that matches the pronunciation (\"cat\" here)"),
        Line::from("3. Press Enter to submit your answer"),
        Line::from("4. Type \"hint\" to reveal the phoneme examples, \"quit\" to stop"),
        Line::from(""),
        Line::from(Span::styled(
            "Modes:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Classic gives three attempts per word; Time Attack is a 60-second"),
        Line::from("sprint; Streak challenges end when you reach the target streak."),
        Line::from(""),
        Line::from(Span::styled(
            "Profile:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Rename, reset, or export your profile from the command line:"),
        Line::from("  ipa_master rename <name> | ipa_master reset | ipa_master export"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, content);
}

const fn feedback_color(tone: FeedbackTone) -> Color {
    match tone {
        FeedbackTone::Info => Color::Cyan,
        FeedbackTone::Success => Color::Green,
        FeedbackTone::Error => Color::Red,
    }
}

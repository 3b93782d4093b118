//! Display functions for the reporting commands

use super::formatters::{accuracy_percent, format_minutes};
use crate::core::DifficultyLevel;
use crate::profile::{Achievement, UserProfile};
use colored::{ColoredString, Colorize};

fn print_title(title: &str) {
    println!("{}", "═".repeat(64).blue());
    println!("{}", title.cyan().bold());
    println!("{}", "═".repeat(64).blue());
}

fn difficulty_colored(level: DifficultyLevel) -> ColoredString {
    let label = level.label();
    match level {
        DifficultyLevel::Beginner => label.green(),
        DifficultyLevel::Intermediate => label.yellow(),
        DifficultyLevel::Advanced => label.blue(),
        DifficultyLevel::Expert => label.red(),
    }
}

/// Print the lifetime statistics report
pub fn print_statistics(profile: &UserProfile) {
    print_title("📊 YOUR STATISTICS");

    println!(
        "\nName: {} | Level: {} | Experience: {}",
        profile.name.green(),
        profile.level.to_string().yellow(),
        profile.experience.to_string().cyan()
    );

    let stats = &profile.stats;
    println!("\n{}", "Overall:".bold());
    println!("  Games Played:   {}", stats.total_games_played);
    println!("  Words Attempted: {}", stats.total_words_guessed);
    println!("  Average Score:  {}", stats.average_score);
    println!("  Best Streak:    {}", stats.best_streak);
    println!(
        "  Accuracy:       {}",
        format!("{}%", stats.accuracy_percentage()).green()
    );
    println!(
        "  Time Played:    {}",
        format_minutes(stats.time_played_seconds)
    );

    println!("\n{}", "By Word Difficulty:".bold());
    for level in DifficultyLevel::ALL {
        let word_stats = stats.word_stats.get(&level).copied().unwrap_or_default();
        println!(
            "  {:<22} {} words, {} correct ({}%)",
            format!("{}:", difficulty_colored(level)),
            word_stats.played,
            word_stats.correct,
            accuracy_percent(word_stats.correct, word_stats.played)
        );
    }
    println!();
}

/// Print the achievement list, unlocked first
pub fn print_achievements(achievements: &[Achievement]) {
    print_title("🏆 YOUR ACHIEVEMENTS");
    println!();

    let unlocked: Vec<&Achievement> = achievements.iter().filter(|a| a.is_unlocked).collect();
    let locked: Vec<&Achievement> = achievements.iter().filter(|a| !a.is_unlocked).collect();

    if !unlocked.is_empty() {
        println!("{}", "✅ Unlocked:".green());
        for achievement in unlocked {
            println!(
                "  {} {}: {}",
                achievement.icon,
                achievement.name.green(),
                achievement.description
            );
        }
        println!();
    }

    if !locked.is_empty() {
        println!("{}", "🔒 Locked:".dimmed());
        for achievement in locked {
            println!(
                "  {} {}: {}",
                achievement.icon,
                achievement.name.dimmed(),
                achievement.description
            );
        }
        println!();
    }
}

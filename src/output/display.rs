//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar};
use crate::commands::{CatalogReport, ScoreResult, TodayInfo};
use crate::core::GuessRecord;
use crate::game::{MAX_GUESSES, Session, Terminal, score_ratio};
use colored::Colorize;

/// Print one scored guess as a row of tiles
pub fn print_record(record: &GuessRecord, attempt: usize) {
    println!(
        "  {} {}  {}",
        format!("{attempt}.").bright_black(),
        colored_row(record),
        record.to_emoji()
    );
}

/// Print the end-of-game banner
pub fn print_game_over(session: &Session) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    match session.terminal() {
        Terminal::Won => {
            let attempts = session.attempts_used();
            println!(
                "{}",
                "    🎉  A L G O R I T H M   S O L V E D !  🎉    "
                    .bright_green()
                    .bold()
            );
            println!(
                "\n  Solved in {} {} ({})",
                attempts.to_string().bright_cyan().bold(),
                if attempts == 1 { "guess" } else { "guesses" },
                score_ratio(session)
            );
        }
        Terminal::Exhausted => {
            println!("{}", "    Out of guesses!".bright_red().bold());
            println!(
                "\n  The solution was: {}",
                session.solution().bright_yellow().bold()
            );
        }
        Terminal::InProgress => {
            println!(
                "  {} guesses left",
                session.attempts_left().to_string().bright_cyan()
            );
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
}

/// Print today's puzzle information
pub fn print_today(info: &TodayInfo) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Puzzle #{}", info.day.to_string().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());
    println!("  Date:          {}", info.date);
    println!("  Epoch:         {}", info.epoch);
    println!("  Moves:         {}", info.moves);
    println!("  Guesses:       {}", info.max_guesses);
    println!(
        "  Status:        {}",
        if info.stored {
            "already selected today".green()
        } else {
            "selected just now".yellow()
        }
    );
}

/// Print the catalog check report
pub fn print_catalog_report(report: &CatalogReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CATALOG CHECK".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📚 {}", "Entries:".bright_cyan().bold());
    println!("   Algorithms:     {}", report.total);
    println!("   Average moves:  {:.1}", report.average_moves);
    if let Some((name, len)) = &report.shortest {
        println!("   Shortest:       {name} ({len} moves)");
    }
    if let Some((name, len)) = &report.longest {
        println!("   Longest:        {name} ({len} moves)");
    }

    let total_moves: usize = report.kind_counts.values().sum();
    println!("\n📈 {}", "Move kinds:".bright_cyan().bold());
    for (kind, &count) in &report.kind_counts {
        let bar = create_progress_bar(count, total_moves, 30);
        println!("   {:<9} {} {count:5}", kind.to_string(), bar.green());
    }

    if report.is_clean() {
        println!("\n{}", "✅ Catalog looks good".green().bold());
        return;
    }

    for (name, first) in &report.duplicates {
        println!(
            "{} '{name}' repeats the algorithm of '{first}'",
            "⚠".yellow().bold()
        );
    }
    for (name, token) in &report.unknown_moves {
        println!(
            "{} '{name}' uses unknown move '{token}'",
            "⚠".yellow().bold()
        );
    }
}

/// Print a one-off scoring
pub fn print_score_result(result: &ScoreResult) {
    println!("\nSolution: {}", result.solution.bright_yellow());
    println!("Guess:    {}\n", result.guess);
    print_record(&result.record, 1);

    println!();
    for (i, item) in result.record.items().iter().enumerate() {
        let token = if item.token.is_some() {
            item.token_text()
        } else {
            "-"
        };
        println!("  {:>2}. {token:<6} {}", i + 1, item.classification.label());
    }

    println!(
        "\n  {} exact, {} partial, {} absent",
        result.record.count_exact().to_string().green().bold(),
        result.record.count_partial().to_string().yellow().bold(),
        result.record.count_absent().to_string().bright_black()
    );
    if result.record.is_perfect() {
        println!("{}", "  ✅ Exact match".green().bold());
    }
}

/// Print remaining attempts as a bar
pub fn print_attempts(session: &Session) {
    println!(
        "  Attempts: [{}] {}/{MAX_GUESSES}",
        create_progress_bar(session.attempts_used(), MAX_GUESSES, MAX_GUESSES).cyan(),
        session.attempts_used()
    );
}

//! Display functions for command results

use super::formatters::{clock, create_progress_bar, share_text, time_bars};
use crate::commands::{CheckStatistics, HistoryReport, ShownPuzzle, TraceResult};
use crate::core::{Clue, PlayResult, Puzzle};
use chrono::NaiveDate;
use colored::Colorize;

/// Print the clue list as bullets
pub fn print_clues(clues: &[Clue]) {
    println!("{}", "Clues".bright_cyan().bold());
    for clue in clues {
        println!("  • {clue}");
    }
}

/// Print the picks as a numbered list
pub fn print_picks(picks: &[String]) {
    println!("\n{}", "Picks".bright_cyan().bold());
    for (i, word) in picks.iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().bright_black(), word.bold());
    }
}

/// Print the outcome of a play with bars and share text
pub fn print_outcome(date: NaiveDate, puzzle: &Puzzle, result: &PlayResult) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if result.solved {
        println!("{}", "✅ Correct!".green().bold());
    } else {
        println!("{}", "❌ Not quite.".red().bold());
        println!("   The answer was {}", puzzle.answer.bright_yellow().bold());
    }
    println!("   Time: {}", clock(result.time_ms));
    println!("   {}", time_bars(result.solved, result.seconds()));
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n{}", "Share".bright_cyan().bold());
    println!("{}\n", share_text(date, result));
}

/// Print a puzzle, optionally with its answer
pub fn print_puzzle(shown: &ShownPuzzle, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Puzzle: {}", shown.label.bright_yellow().bold());
    if shown.fallback {
        println!("{}", "(fallback puzzle)".yellow());
    }
    println!("{}\n", "─".repeat(60).cyan());

    print_clues(&shown.puzzle.clues);
    print_picks(&shown.puzzle.picks);

    if reveal {
        println!(
            "\nAnswer: {}",
            shown.puzzle.answer.bright_green().bold()
        );
    }
    println!();
}

/// Print how each clue narrows the picks
pub fn print_trace(result: &TraceResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "NARROWING TRACE:".bright_cyan().bold(),
        result.label.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nPicks:  {}", result.puzzle.picks.join(" "));
    println!("Answer: {}", result.puzzle.answer.bright_green().bold());

    for (i, step) in result.steps.iter().enumerate() {
        let marker = if step.narrowed() {
            "▼".green()
        } else {
            "=".bright_black()
        };
        println!(
            "\n{} Clue {}: {}",
            marker,
            i + 1,
            step.clue.to_string().bold()
        );
        println!(
            "  Candidates: {} → {}",
            step.before.len(),
            step.after.len()
        );
        println!("  Left:       {}", step.after.join(" "));
    }

    println!();
    if result.is_unique() {
        println!(
            "{}",
            format!(
                "✅ Unique answer after {} clues ({} narrowing)",
                result.steps.len(),
                result.narrowing_clues()
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ {} candidates remain", result.remaining.len())
                .red()
                .bold()
        );
    }
}

/// Print sweep statistics
pub fn print_check_statistics(stats: &CheckStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Check Results ");
    println!("{}", "═".repeat(70));

    let searched = stats.days - stats.fallbacks;
    let pct = |n: usize| {
        if stats.days == 0 {
            0.0
        } else {
            n as f64 / stats.days as f64 * 100.0
        }
    };

    println!("\n📊 {}", "Overall".bright_cyan().bold());
    println!("  Dates checked:       {} from {}", stats.days, stats.from);
    println!(
        "  Generated:           {} {}",
        searched,
        format!("({:.1}%)", pct(searched)).green()
    );
    if stats.fallbacks > 0 {
        println!(
            "  Fallbacks:           {} {}",
            stats.fallbacks,
            format!("({:.1}%)", pct(stats.fallbacks)).yellow()
        );
    }
    println!(
        "  Average attempts:    {}",
        format!("{:.2}", stats.average_attempts())
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if stats.violations.is_empty() {
        println!("  Violations:          {}", "none".green().bold());
    } else {
        println!(
            "  Violations:          {}",
            stats.violations.len().to_string().red().bold()
        );
        for check in &stats.violations {
            println!(
                "    {} unique={} monotonic={} distinct_kinds={}",
                check.date, check.unique, check.monotonic, check.distinct_kinds
            );
        }
    }

    println!("\n📈 {}", "Clue Kind Usage".bright_cyan().bold());
    let max_usage = stats.kind_usage.values().copied().max().unwrap_or(0);
    for (kind, &count) in &stats.kind_usage {
        let bar = create_progress_bar(count as f64, max_usage as f64, 30);
        println!("  {:<22} {} {count:5}", kind.name(), bar.green());
    }

    println!("\n🔤 {}", "Answer Lengths".bright_cyan().bold());
    for (len, &count) in &stats.answer_lengths {
        println!("  {len:2} letters: {count:5} ({:.1}%)", pct(count));
    }
}

/// Print stored plays with a summary
pub fn print_history(report: &HistoryReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "PLAY HISTORY".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if report.entries.is_empty() {
        println!("\nNo plays recorded yet.");
        return;
    }

    println!();
    for (date, result) in &report.entries {
        let mark = if result.solved {
            "✅".normal()
        } else {
            "❌".normal()
        };
        println!(
            "  {date}  {mark}  {:>6}  {}",
            clock(result.time_ms),
            time_bars(result.solved, result.seconds())
        );
    }

    let stats = &report.stats;
    println!("\n📊 {}", "Summary".bright_cyan().bold());
    println!("  Played:          {}", stats.played);
    println!(
        "  Win rate:        {}",
        format!("{:.1}%", stats.win_rate()).bright_yellow().bold()
    );
    if let Some(avg) = stats.avg_solved_seconds {
        println!("  Average solve:   {avg:.1}s");
    }
    println!("  Current streak:  {}", report.current_streak);
}

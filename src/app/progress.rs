use std::io::{IsTerminal, Write};
use std::time::Duration;

use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use tokio::sync::mpsc;
use tokio::time::Instant;

const REDRAW_INTERVAL: Duration = Duration::from_millis(100);

/// Spawns the consumer of progress ticks. The channel is always drained so
/// the collector never blocks on it; the bar is drawn only when stderr is a
/// terminal.
pub(crate) fn setup_progress_indicator(
    total: usize,
    mut progress_rx: mpsc::Receiver<u64>,
    no_color: bool,
) -> tokio::task::JoinHandle<()> {
    let style = ProgressStyle::new(30);
    let goal = u64::try_from(total).unwrap_or(u64::MAX);

    tokio::spawn(async move {
        let mut draw = std::io::stderr().is_terminal();
        let mut current: u64 = 0;
        let mut last_draw: Option<Instant> = None;

        while let Some(step) = progress_rx.recv().await {
            current = current.saturating_add(step);
            if draw && last_draw.is_none_or(|at| at.elapsed() >= REDRAW_INTERVAL) {
                if render_progress_line(&style, current, goal, no_color).is_err() {
                    draw = false;
                }
                last_draw = Some(Instant::now());
            }
        }

        if draw && render_progress_line(&style, current, goal, no_color).is_ok() {
            drop(finish_progress_line());
        }
    })
}

fn render_progress_line(
    style: &ProgressStyle,
    current: u64,
    goal: u64,
    no_color: bool,
) -> Result<(), std::io::Error> {
    let line = build_progress_line(style, current, goal, no_color);

    let mut out = std::io::stderr();
    queue!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine))?;
    for segment in line {
        if no_color {
            queue!(out, Print(&segment.text))?;
        } else if let Some(color) = segment.color {
            queue!(
                out,
                SetForegroundColor(color),
                Print(&segment.text),
                ResetColor
            )?;
        } else {
            queue!(out, Print(&segment.text))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn finish_progress_line() -> Result<(), std::io::Error> {
    let mut out = std::io::stderr();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

fn build_progress_line(
    style: &ProgressStyle,
    current: u64,
    goal: u64,
    no_color: bool,
) -> Vec<ProgressSegment> {
    let size = style.size.max(1);
    let goal = goal.max(1);
    let current = current.min(goal);

    let current_u128 = u128::from(current);
    let goal_u128 = u128::from(goal);
    let size_u128 = u128::from(u64::try_from(size).unwrap_or(u64::MAX));

    let scaled = current_u128
        .saturating_mul(size_u128)
        .checked_div(goal_u128)
        .unwrap_or(0);
    let complete_size = usize::try_from(scaled).unwrap_or(size).min(size);
    let incomplete_size = size.saturating_sub(complete_size);

    let percent_x100 = current_u128
        .saturating_mul(10_000)
        .checked_div(goal_u128)
        .unwrap_or(0);
    let percent_whole = percent_x100.checked_div(100).unwrap_or(0);
    let percent_frac = percent_x100.checked_rem(100).unwrap_or(0);
    let percent_text = format!(" {}.{:02}%", percent_whole, percent_frac);
    let count_text = format!(" | {}/{}", current, goal);

    let progress_bar = format!(
        "{}{}{}{}",
        style.begin,
        style.fill.repeat(complete_size),
        style.empty.repeat(incomplete_size),
        style.end
    );

    if no_color {
        vec![
            ProgressSegment::plain(progress_bar),
            ProgressSegment::plain(percent_text),
            ProgressSegment::plain(count_text),
        ]
    } else {
        vec![
            ProgressSegment::plain(progress_bar),
            ProgressSegment::colored(percent_text, Color::Cyan),
            ProgressSegment::colored(count_text, Color::Yellow),
        ]
    }
}

struct ProgressStyle {
    size: usize,
    begin: String,
    end: String,
    fill: String,
    empty: String,
}

impl ProgressStyle {
    fn new(size: usize) -> Self {
        Self {
            size,
            begin: "[".to_owned(),
            end: "]".to_owned(),
            fill: "#".to_owned(),
            empty: "-".to_owned(),
        }
    }
}

struct ProgressSegment {
    text: String,
    color: Option<Color>,
}

impl ProgressSegment {
    const fn plain(text: String) -> Self {
        Self { text, color: None }
    }

    const fn colored(text: String, color: Color) -> Self {
        Self {
            text,
            color: Some(color),
        }
    }
}

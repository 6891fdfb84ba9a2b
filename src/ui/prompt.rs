//! Single-choice selection prompts.

use crate::errors::{AppError, AppResult};
use crate::utils::colors::{GREEN, GREY, RESET};
use crate::utils::formatting::bold;
use crate::ui::terminal::{RawModeGuard, is_abort_key};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{Clear, ClearType};
use crossterm::{cursor, queue, style::Print};
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, Write};
use std::ops::Range;

pub trait Selector {
    /// Index of the chosen entry in `choices`.
    fn select(&mut self, title: &str, choices: &[String]) -> AppResult<usize>;
}

/// Ask `selector` to pick one of `choices`.
pub fn choose<T, S>(selector: &mut S, title: &str, choices: &[T]) -> AppResult<T>
where
    T: Clone + Display,
    S: Selector + ?Sized,
{
    let labels: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
    let idx = selector.select(title, &labels)?;
    choices
        .get(idx)
        .cloned()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "selection out of range").into())
}

/// Put `default` at the front of `choices`, without duplicating it.
/// A default missing from `choices` is still offered first.
pub fn with_default_first<T: PartialEq + Clone>(choices: &[T], default: &T) -> Vec<T> {
    std::iter::once(default.clone())
        .chain(choices.iter().filter(|c| *c != default).cloned())
        .collect()
}

/// `count` values starting at zero, `interval` apart.
pub fn stepped_choices(count: u32, interval: u32) -> Vec<u32> {
    (0..count).map(|i| i * interval).collect()
}

pub fn hour_choices() -> Vec<u32> {
    stepped_choices(24, 1)
}

pub fn minute_choices() -> Vec<u32> {
    stepped_choices(12, 5)
}

/// Rows shown for a list of `len` entries with the highlight on `cursor`.
pub fn visible_window(len: usize, cursor: usize, page_size: usize) -> Range<usize> {
    if len <= page_size {
        return 0..len;
    }
    let start = cursor
        .saturating_sub(page_size / 2)
        .min(len - page_size);
    start..start + page_size
}

/// Arrow-key driven prompt on the controlling terminal.
#[derive(Debug, Clone)]
pub struct TerminalSelector {
    page_size: usize,
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self { page_size: 10 }
    }
}

impl TerminalSelector {
    fn draw<W: Write>(
        &self,
        out: &mut W,
        title: &str,
        choices: &[String],
        current: usize,
        drawn: u16,
    ) -> io::Result<u16> {
        if drawn > 0 {
            queue!(out, cursor::MoveUp(drawn))?;
        }
        queue!(
            out,
            cursor::MoveToColumn(0),
            Clear(ClearType::FromCursorDown),
            Print(bold(title)),
            Print("\r\n")
        )?;

        let mut lines: u16 = 1;
        for i in visible_window(choices.len(), current, self.page_size) {
            let row = if i == current {
                format!("{GREEN}> {}{RESET}\r\n", choices[i])
            } else {
                format!("  {}\r\n", choices[i])
            };
            queue!(out, Print(row))?;
            lines += 1;
        }

        if choices.len() > self.page_size {
            queue!(
                out,
                Print(format!(
                    "{GREY}(Move up and down to reveal more choices){RESET}\r\n"
                ))
            )?;
            lines += 1;
        }

        out.flush()?;
        Ok(lines)
    }
}

impl Selector for TerminalSelector {
    fn select(&mut self, title: &str, choices: &[String]) -> AppResult<usize> {
        if choices.is_empty() {
            return Err(io::Error::new(io::ErrorKind::InvalidInput, "no choices to select from").into());
        }

        let mut out = io::stdout();
        let guard = RawModeGuard::enable()?;
        queue!(out, cursor::Hide)?;

        let len = choices.len();
        let mut current = 0usize;
        let mut drawn = 0u16;

        let result = loop {
            drawn = self.draw(&mut out, title, choices, current, drawn)?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if is_abort_key(&key) {
                break Err(AppError::Interrupted);
            }

            match key.code {
                KeyCode::Up | KeyCode::Char('k') => current = (current + len - 1) % len,
                KeyCode::Down | KeyCode::Char('j') => current = (current + 1) % len,
                KeyCode::PageUp => current = current.saturating_sub(self.page_size),
                KeyCode::PageDown => current = (current + self.page_size).min(len - 1),
                KeyCode::Home => current = 0,
                KeyCode::End => current = len - 1,
                KeyCode::Enter => break Ok(current),
                _ => {}
            }
        };

        queue!(
            out,
            cursor::MoveUp(drawn),
            cursor::MoveToColumn(0),
            Clear(ClearType::FromCursorDown)
        )?;
        out.flush()?;
        drop(guard);

        if let Ok(idx) = result {
            println!("{} {GREEN}{}{RESET}", bold(title), choices[idx]);
        }
        result
    }
}

/// Selector that replays pre-recorded answers. Used by tests.
#[derive(Debug, Default)]
pub struct ScriptedSelector {
    answers: VecDeque<usize>,
    /// Every prompt shown, with its choices in display order.
    pub asked: Vec<(String, Vec<String>)>,
}

impl ScriptedSelector {
    pub fn new<I: IntoIterator<Item = usize>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked: Vec::new(),
        }
    }
}

impl Selector for ScriptedSelector {
    fn select(&mut self, title: &str, choices: &[String]) -> AppResult<usize> {
        self.asked.push((title.to_string(), choices.to_vec()));
        self.answers.pop_front().ok_or(AppError::Interrupted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;

    #[test]
    fn default_moves_to_front() {
        assert_eq!(
            with_default_first(&minute_choices(), &15),
            vec![15, 0, 5, 10, 20, 25, 30, 35, 40, 45, 50, 55]
        );
        assert_eq!(
            with_default_first(&Day::PAST, &Day::Yesterday),
            vec![Day::Yesterday, Day::Today, Day::DayBeforeYesterday]
        );
    }

    #[test]
    fn default_already_first_is_unchanged() {
        assert_eq!(with_default_first(&hour_choices(), &0), hour_choices());
    }

    #[test]
    fn off_list_default_is_still_first() {
        let offered = with_default_first(&minute_choices(), &7);
        assert_eq!(offered.len(), 13);
        assert_eq!(offered[..3], [7, 0, 5]);
    }

    #[test]
    fn choice_ranges() {
        let hours = hour_choices();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours.first(), Some(&0));
        assert_eq!(hours.last(), Some(&23));

        let minutes = minute_choices();
        assert_eq!(minutes.len(), 12);
        assert!(minutes.iter().all(|m| m % 5 == 0));
        assert_eq!(minutes.last(), Some(&55));
    }

    #[test]
    fn window_follows_cursor() {
        assert_eq!(visible_window(3, 2, 10), 0..3);
        assert_eq!(visible_window(24, 0, 10), 0..10);
        assert_eq!(visible_window(24, 12, 10), 7..17);
        assert_eq!(visible_window(24, 23, 10), 14..24);
    }

    #[test]
    fn choose_returns_selected_value() {
        let mut sel = ScriptedSelector::new([2]);
        let picked = choose(&mut sel, "Hour?", &[9u32, 10, 11]).unwrap();
        assert_eq!(picked, 11);
        assert_eq!(sel.asked[0].1, vec!["9", "10", "11"]);
    }

    #[test]
    fn out_of_range_answer_is_an_error() {
        let mut sel = ScriptedSelector::new([5]);
        assert!(choose(&mut sel, "Hour?", &[1u32, 2]).is_err());
    }

    #[test]
    fn exhausted_script_interrupts() {
        let mut sel = ScriptedSelector::new([]);
        assert!(matches!(
            choose(&mut sel, "Day?", &Day::FUTURE),
            Err(AppError::Interrupted)
        ));
    }
}

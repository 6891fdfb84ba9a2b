//! Walks the user through both wake-up sections, saving after every answer.

use crate::errors::AppResult;
use crate::models::{Day, InputSection, InputValues};
use crate::storage::StateStore;
use crate::ui::prompt::{Selector, choose, hour_choices, minute_choices, with_default_first};

/// Which of the two wake-ups a section describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Previous,
    Future,
}

impl SectionKind {
    pub fn day_choices(&self) -> &'static [Day] {
        match self {
            SectionKind::Previous => &Day::PAST,
            SectionKind::Future => &Day::FUTURE,
        }
    }

    fn titles(&self) -> [&'static str; 3] {
        match self {
            SectionKind::Previous => [
                "Which day did you wake up?",
                "At which hour did you wake up?",
                "At which minute did you wake up?",
            ],
            SectionKind::Future => [
                "Which day do you want to get up?",
                "At which hour do you want to get up?",
                "At which minute do you want to get up?",
            ],
        }
    }
}

/// Offer the stored value first when it is usable, otherwise the plain list.
fn offered<T: PartialEq + Clone>(choices: &[T], current: &T, usable: bool) -> Vec<T> {
    if usable {
        with_default_first(choices, current)
    } else {
        choices.to_vec()
    }
}

fn section_mut(values: &mut InputValues, kind: SectionKind) -> &mut InputSection {
    match kind {
        SectionKind::Previous => &mut values.previous_wakeup,
        SectionKind::Future => &mut values.future_wakeup,
    }
}

/// Prompt for day, hour and minute of one section.
pub fn collect_section<S: Selector + ?Sized>(
    values: &mut InputValues,
    kind: SectionKind,
    selector: &mut S,
    store: &StateStore,
) -> AppResult<()> {
    let [day_title, hour_title, minute_title] = kind.titles();

    let current = section_mut(values, kind).day;
    let legal = kind.day_choices().contains(&current);
    let day = choose(selector, day_title, &offered(kind.day_choices(), &current, legal))?;
    section_mut(values, kind).day = day;
    store.save(values)?;

    let current = section_mut(values, kind).hour;
    let hour = choose(selector, hour_title, &offered(&hour_choices(), &current, current < 24))?;
    section_mut(values, kind).hour = hour;
    store.save(values)?;

    let current = section_mut(values, kind).minute;
    let minute = choose(
        selector,
        minute_title,
        &offered(&minute_choices(), &current, current < 60),
    )?;
    section_mut(values, kind).minute = minute;
    store.save(values)?;

    Ok(())
}

/// Previous wake-up first, then the next one.
pub fn collect_inputs<S: Selector + ?Sized>(
    values: &mut InputValues,
    selector: &mut S,
    store: &StateStore,
) -> AppResult<()> {
    collect_section(values, SectionKind::Previous, selector, store)?;
    collect_section(values, SectionKind::Future, selector, store)?;
    log::debug!("collected selections: {:?}", values);
    Ok(())
}

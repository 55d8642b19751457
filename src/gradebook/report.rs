use super::{Assignment, Criteria, GradeBook, Settings};
use std::fmt;
use std::fmt::Display;

/// Something rendered with a given set of display settings.
pub struct Report<'a, T> {
    item: &'a T,
    settings: &'a Settings,
}

impl Assignment {
    pub fn report<'a>(&'a self, settings: &'a Settings) -> Report<'a, Self> {
        Report {
            item: self,
            settings,
        }
    }
}

impl Criteria {
    pub fn report<'a>(&'a self, settings: &'a Settings) -> Report<'a, Self> {
        Report {
            item: self,
            settings,
        }
    }
}

impl GradeBook {
    pub fn report<'a>(&'a self, settings: &'a Settings) -> Report<'a, Self> {
        Report {
            item: self,
            settings,
        }
    }
}

impl Display for Report<'_, Assignment> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let a = self.item;
        let p = self.settings.assignment_precision;
        let percent = match a.percent() {
            Some(percent) => format!("{:.p$} %", percent, p = p),
            None => "N/A".to_string(),
        };
        let earned = format!("{:.p$}", a.earned, p = p);
        let total = format!("{:.p$}", a.total, p = p);
        let name_pad = NAME_WIDTH.saturating_sub(a.name.chars().count());

        write!(f, "    {}", a.name)?;
        write_column(f, &earned, name_pad + EARNED_WIDTH)?;
        write_column(f, &total, TOTAL_WIDTH)?;
        write_column(f, &percent, PERCENT_WIDTH)
    }
}

const NAME_WIDTH: usize = 24;
const EARNED_WIDTH: usize = 10;
const TOTAL_WIDTH: usize = 16;
const PERCENT_WIDTH: usize = 16;

/// Columns are re-read by splitting on double spaces, so an overflowing
/// value still gets two spaces in front of it.
const MIN_GAP: usize = 2;

fn write_column(f: &mut fmt::Formatter, text: &str, width: usize) -> fmt::Result {
    let gap = width.saturating_sub(text.chars().count()).max(MIN_GAP);
    write!(f, "{:gap$}{}", "", text, gap = gap)
}

impl Display for Report<'_, Criteria> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = self.item;
        writeln!(
            f,
            "{} ({:.p$} %)",
            c.name,
            100.0 * c.weight,
            p = self.settings.weight_precision
        )?;
        for a in &c.assignments {
            writeln!(f, "{}", a.report(self.settings))?;
        }
        // a final exam usually has a single row already
        if !c.is_final() {
            let total = Assignment::new("Total", c.earned(), c.total());
            writeln!(f, "{}", total.report(self.settings))?;
        }
        Ok(())
    }
}

impl Display for Report<'_, GradeBook> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for c in self.item.criteria() {
            writeln!(f, "{}", c.report(self.settings))?;
        }
        writeln!(
            f,
            "Final Grade: {:.p$} %",
            100.0 * self.item.final_grade(),
            p = self.settings.final_precision
        )
    }
}

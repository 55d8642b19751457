use super::{Assignment, Criteria, GradeBook, Settings};
use failure::Fail;
use std::num::ParseFloatError;
use tracing::{debug, trace, warn};

#[derive(Debug, PartialEq, Fail)]
#[fail(display = "couldn't parse {} of assignment '{}'", field, name)]
struct FieldError {
    name: String,
    field: &'static str,
}

#[derive(Debug, PartialEq, Fail)]
enum HeadingError {
    #[fail(display = "heading has no weight")]
    MissingWeight,
    #[fail(display = "heading has invalid weight")]
    InvalidWeight,
    #[fail(display = "heading has no name")]
    MissingName,
}

impl From<ParseFloatError> for HeadingError {
    fn from(_: ParseFloatError) -> Self {
        HeadingError::InvalidWeight
    }
}

fn parse_real(token: &str) -> Result<f64, ParseFloatError> {
    token.trim().parse::<f64>()
}

/// Splits on every double space or tab and strips padding and `%` signs.
fn tokenize(line: &str) -> Vec<&str> {
    line.split('\t')
        .flat_map(|part| part.split("  "))
        .filter(|word| !word.trim().is_empty())
        .map(|word| word.trim_matches(|c: char| matches!(c, ' ' | '\t' | '%')))
        .collect()
}

fn parse_heading(line: &str) -> Result<(String, f64), HeadingError> {
    let mut parts = line.split('(');
    let name = parts.next().unwrap_or_default().trim();
    let weight = parts.next().ok_or(HeadingError::MissingWeight)?;
    let weight = parse_real(weight.trim_matches(|c: char| matches!(c, ' ' | '\t' | '%' | ')')))?;

    if name.is_empty() {
        return Err(HeadingError::MissingName);
    }

    Ok((name.to_string(), weight / 100.0))
}

impl Assignment {
    /// Parses `name  earned  total`. Returns `None` for a line without a
    /// name. A bad number is reported and leaves its field as it was.
    pub fn parse(line: &str, settings: &Settings) -> Option<Self> {
        let tokens = tokenize(line);
        let name = *tokens.first()?;
        if name.is_empty() {
            return None;
        }

        let mut assignment = Assignment::new(name, 0.0, 0.0);
        if let Some(earned) = tokens.get(1) {
            if let Some(earned) = assignment.parse_field(earned, "earned", settings) {
                assignment.earned = earned;
                assignment.total = earned;
            }
        }
        if let Some(total) = tokens.get(2) {
            if let Some(total) = assignment.parse_field(total, "total", settings) {
                assignment.total = total;
            }
        }

        Some(assignment)
    }

    fn parse_field(&self, token: &str, field: &'static str, settings: &Settings) -> Option<f64> {
        match parse_real(token) {
            Ok(value) => Some(value),
            Err(_) => {
                if settings.warnings {
                    let err = FieldError {
                        name: self.name.clone(),
                        field,
                    };
                    warn!(token, "{}", err);
                }
                None
            }
        }
    }

    fn is_total_row(&self) -> bool {
        self.name.to_lowercase() == "total"
    }
}

impl Criteria {
    /// Parses one section: a `Name (NN%)` heading followed by assignment
    /// lines. Returns `None` if the heading is malformed or no assignment
    /// survives.
    pub fn parse(section: &str, settings: &Settings) -> Option<Self> {
        let mut lines = section.split('\n');
        let heading = lines.next().unwrap_or_default();
        let (name, weight) = match parse_heading(heading) {
            Ok(heading) => heading,
            Err(err) => {
                debug!(heading, "skipping section: {}", err);
                return None;
            }
        };

        // rendered reports carry a synthetic total row
        let assignments: Vec<Assignment> = lines
            .filter_map(|line| Assignment::parse(line, settings))
            .filter(|a| !a.is_total_row())
            .collect();

        if assignments.is_empty() {
            debug!(criteria = %name, "skipping section: no assignments");
            return None;
        }

        Some(Criteria {
            name,
            weight,
            assignments,
        })
    }
}

impl GradeBook {
    pub fn parse(document: &str, settings: &Settings) -> Self {
        let criteria: Vec<Criteria> = document
            .split("\n\n")
            .filter_map(|section| Criteria::parse(section, settings))
            .collect();
        trace!(count = criteria.len(), "parsed gradebook");
        GradeBook(criteria)
    }
}

pub mod parse;
pub mod report;

/// Display precision and warning switches shared by parsing and rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub weight_precision: usize,
    pub assignment_precision: usize,
    pub final_precision: usize,
    pub warnings: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            weight_precision: 1,
            assignment_precision: 3,
            final_precision: 3,
            warnings: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: String,
    pub earned: f64,
    pub total: f64,
}

impl Assignment {
    pub fn new(name: &str, earned: f64, total: f64) -> Self {
        Assignment {
            name: name.to_string(),
            earned,
            total,
        }
    }

    /// `None` when nothing is possible, which renders as N/A.
    pub fn percent(&self) -> Option<f64> {
        if self.total > 0.0 {
            Some(100.0 * self.earned / self.total)
        } else {
            None
        }
    }
}

/// A weighted grading category.
#[derive(Debug, Clone, PartialEq)]
pub struct Criteria {
    pub name: String,
    pub weight: f64, // fraction of the final grade, 0.2 for "(20%)"
    pub assignments: Vec<Assignment>,
}

impl Criteria {
    pub fn earned(&self) -> f64 {
        self.assignments.iter().fold(0.0, |acc, a| acc + a.earned)
    }

    pub fn total(&self) -> f64 {
        self.assignments.iter().fold(0.0, |acc, a| acc + a.total)
    }

    /// This category's share of the final grade, as a fraction.
    pub fn contribution(&self) -> f64 {
        let total = self.total();
        if total > 0.0 {
            self.weight * self.earned() / total
        } else {
            0.0
        }
    }

    fn is_final(&self) -> bool {
        self.name.to_lowercase().contains("final")
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct GradeBook(Vec<Criteria>);

impl GradeBook {
    pub fn criteria(&self) -> &[Criteria] {
        &self.0
    }

    /// Weighted final grade as a fraction. Categories with nothing possible
    /// add zero; the remaining weights are not rescaled.
    pub fn final_grade(&self) -> f64 {
        // f64's Sum starts at -0.0, which renders as "-0.000"
        self.0.iter().fold(0.0, |acc, c| acc + c.contribution())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criteria(name: &str, weight: f64, assignments: Vec<Assignment>) -> Criteria {
        Criteria {
            name: name.to_string(),
            weight,
            assignments,
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(Assignment::new("HW1", 8.0, 10.0).percent(), Some(80.0));
        assert_eq!(Assignment::new("HW1", 3.0, 0.0).percent(), None);
        assert_eq!(Assignment::new("HW1", 3.0, -2.0).percent(), None);
    }

    #[test]
    fn test_criteria_sums() {
        let c = criteria(
            "Homework",
            0.2,
            vec![
                Assignment::new("HW1", 8.0, 10.0),
                Assignment::new("HW2", 9.0, 10.0),
            ],
        );
        assert_eq!(c.earned(), 17.0);
        assert_eq!(c.total(), 20.0);
        assert!((c.contribution() - 0.17).abs() < 1e-12);
    }

    #[test]
    fn test_criteria_sums_empty() {
        let c = criteria("Homework", 0.2, vec![]);
        assert!(c.earned().is_sign_positive());
        assert!(c.total().is_sign_positive());
    }

    #[test]
    fn test_final_grade_skips_zero_total() {
        let book = GradeBook(vec![
            criteria("Homework", 0.5, vec![Assignment::new("HW1", 10.0, 10.0)]),
            criteria("Bonus", 0.5, vec![Assignment::new("Extra", 0.0, 0.0)]),
        ]);
        assert_eq!(book.criteria()[1].contribution(), 0.0);
        assert_eq!(book.final_grade(), 0.5);
    }

    #[test]
    fn test_final_grade_empty() {
        let grade = GradeBook::default().final_grade();
        assert_eq!(grade, 0.0);
        assert!(grade.is_sign_positive());
    }

    #[test]
    fn test_is_final() {
        assert!(criteria("Final Exam", 0.4, vec![]).is_final());
        assert!(criteria("semifinals", 0.4, vec![]).is_final());
        assert!(!criteria("Midterm", 0.4, vec![]).is_final());
    }
}

//! Ordered set of lessons forming one numbering scope.
//!
//! Constructing a [`Unit`] numbers its lessons in a single left-to-right
//! pass. Nothing renumbers them afterwards.
//!
//! # Examples
//!
//! ```
//! use lps_core::{Lesson, TemplateEngine, Unit};
//!
//! let unit = Unit::try_new(vec![
//!     Lesson::new("Intro", "L1"),
//!     Lesson::new("Intro cont.", "L2").with_continuation(true),
//! ])
//! .unwrap();
//!
//! let titles: Vec<String> = unit
//!     .lessons()
//!     .iter()
//!     .map(|l| l.display_title().unwrap())
//!     .collect();
//! assert_eq!(titles, [
//!     "Topic 1 --- Intro --- Part I",
//!     "Topic 1 --- Intro cont. --- Part II",
//! ]);
//!
//! let engine = TemplateEngine::new().unwrap();
//! let documents = unit.generate_all_documents(&engine).unwrap();
//! assert_eq!(documents.file_count(), 2);
//! ```

use crate::{Error, GeneratedCode, GeneratedFile, Lesson, LessonId, Result, TemplateEngine};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Header written at the top of the objectives include file.
pub const OBJECTIVES_HEADER: &str = "% Automatically generated commands corresponding to objectives for different lessons\n\
     % Do not edit - all changes will be overwritten\n";

/// Default location of the objectives include file.
pub const DEFAULT_OBJECTIVES_FILE: &str = "info/objectives.tex";

/// An ordered, numbered collection of lessons.
#[derive(Debug, Clone)]
pub struct Unit {
    lessons: Vec<Lesson>,
    objectives_file: String,
}

/// One row of the unit overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonSummary {
    /// 1-based position in the unit
    pub lesson_number: u32,
    /// 1-based topic index
    pub topic_number: u32,
    /// Lesson id
    pub id: String,
    /// Title as rendered in the document
    pub display_title: String,
    /// Document file name
    pub file_name: String,
}

impl Unit {
    /// Builds a unit and numbers its lessons.
    ///
    /// Lesson numbers follow input order. The topic counter advances on every
    /// topic lesson that is not a continuation, and each lesson receives the
    /// counter value after that step. A second pass chains `count_within`
    /// across continuation runs: the lesson before a continuation is given
    /// part 1 if it has no part yet, and each continuation takes its
    /// predecessor's part plus one.
    ///
    /// Duplicate ids are not rejected here; see [`Unit::try_new`] and
    /// [`Unit::validate`].
    ///
    /// # Panics
    ///
    /// Panics if the unit holds more than `u32::MAX` lessons.
    #[must_use]
    pub fn new(mut lessons: Vec<Lesson>) -> Self {
        let mut topic_counter: u32 = 0;

        for (lesson_number, lesson) in (1..).zip(lessons.iter_mut()) {
            if lesson.is_topic() && !lesson.is_continuation() {
                topic_counter += 1;
            }
            lesson.assign_numbers(lesson_number, topic_counter);
        }

        for index in 1..lessons.len() {
            if !lessons[index].is_continuation() {
                continue;
            }
            let previous = match lessons[index - 1].count_within() {
                Some(count) => count,
                None => {
                    lessons[index - 1].set_count_within(1);
                    1
                }
            };
            lessons[index].set_count_within(previous.saturating_add(1));
        }

        debug!(
            lessons = lessons.len(),
            topics = topic_counter,
            "Numbered unit"
        );

        Self {
            lessons,
            objectives_file: DEFAULT_OBJECTIVES_FILE.to_string(),
        }
    }

    /// Builds a unit and rejects duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIds`] listing every repeated id.
    ///
    /// # Examples
    ///
    /// ```
    /// use lps_core::{Lesson, Unit};
    ///
    /// let err = Unit::try_new(vec![Lesson::new("a", "A"), Lesson::new("b", "A")]).unwrap_err();
    /// assert!(err.is_validation_error());
    /// assert_eq!(err.duplicate_ids(), ["A"]);
    /// ```
    pub fn try_new(lessons: Vec<Lesson>) -> Result<Self> {
        let unit = Self::new(lessons);
        unit.validate()?;
        Ok(unit)
    }

    /// Sets the path used for the objectives include file.
    #[must_use]
    pub fn with_objectives_file(mut self, path: impl Into<String>) -> Self {
        self.objectives_file = path.into();
        self
    }

    /// Path used for the objectives include file.
    #[must_use]
    pub fn objectives_file(&self) -> &str {
        &self.objectives_file
    }

    /// Lessons in unit order.
    #[must_use]
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Number of lessons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    /// Returns `true` if the unit has no lessons.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Ids that occur more than once.
    #[must_use]
    pub fn duplicate_ids(&self) -> BTreeSet<LessonId> {
        let mut seen = HashSet::new();
        self.lessons
            .iter()
            .map(Lesson::id)
            .filter(|id| !seen.insert(*id))
            .cloned()
            .collect()
    }

    /// Checks that every lesson id is unique.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIds`] listing every repeated id.
    pub fn validate(&self) -> Result<()> {
        let duplicates = self.duplicate_ids();
        if duplicates.is_empty() {
            return Ok(());
        }
        Err(Error::DuplicateIds {
            ids: duplicates.into_iter().map(LessonId::into_inner).collect(),
        })
    }

    /// Renders the objectives include: the fixed header followed by every
    /// lesson's objectives macro in lesson order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIds`] before rendering anything if ids repeat,
    /// or [`Error::Template`] if rendering fails.
    pub fn generate_objectives_include(&self, engine: &TemplateEngine<'_>) -> Result<GeneratedFile> {
        self.validate()?;

        let mut content = String::from(OBJECTIVES_HEADER);
        for lesson in &self.lessons {
            content.push_str(&lesson.render_objectives_block(engine)?);
            content.push('\n');
        }

        Ok(GeneratedFile {
            path: self.objectives_file.clone(),
            content,
        })
    }

    /// Renders one document per lesson, paired with its file name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateIds`] before rendering anything if ids repeat,
    /// [`Error::InvalidArgument`] for an unrepresentable part number, or
    /// [`Error::Template`] if rendering fails.
    pub fn generate_all_documents(&self, engine: &TemplateEngine<'_>) -> Result<GeneratedCode> {
        self.validate()?;

        let mut code = GeneratedCode::new();
        for lesson in &self.lessons {
            code.add_file(GeneratedFile {
                path: lesson.output_file_name()?,
                content: lesson.render_document(engine)?,
            });
        }
        Ok(code)
    }

    /// Overview rows for every lesson, in unit order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a part number cannot be rendered.
    pub fn summaries(&self) -> Result<Vec<LessonSummary>> {
        self.lessons
            .iter()
            .map(|lesson| {
                Ok(LessonSummary {
                    lesson_number: lesson.lesson_number().unwrap_or_default(),
                    topic_number: lesson.topic_number().unwrap_or_default(),
                    id: lesson.id().to_string(),
                    display_title: lesson.display_title()?,
                    file_name: lesson.output_file_name()?,
                })
            })
            .collect()
    }
}

impl FromIterator<Lesson> for Unit {
    fn from_iter<I: IntoIterator<Item = Lesson>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(unit: &Unit) -> Vec<(Option<u32>, Option<u32>, Option<u32>)> {
        unit.lessons()
            .iter()
            .map(|l| (l.lesson_number(), l.topic_number(), l.count_within()))
            .collect()
    }

    #[test]
    fn test_every_lesson_a_topic() {
        let unit: Unit = (0..6).map(|i| Lesson::new("t", format!("L{i}"))).collect();
        for lesson in unit.lessons() {
            assert_eq!(lesson.topic_number(), lesson.lesson_number());
            assert_eq!(lesson.count_within(), None);
        }
    }

    #[test]
    fn test_non_topic_inherits_counter() {
        let unit = Unit::new(vec![
            Lesson::new("a", "A"),
            Lesson::new("b", "B").with_topic(false),
            Lesson::new("c", "C"),
        ]);
        assert_eq!(
            numbers(&unit),
            [
                (Some(1), Some(1), None),
                (Some(2), Some(1), None),
                (Some(3), Some(2), None),
            ]
        );
    }

    #[test]
    fn test_non_topic_before_first_topic_gets_zero() {
        let unit = Unit::new(vec![
            Lesson::new("Orientation", "O").with_topic(false),
            Lesson::new("a", "A"),
        ]);
        assert_eq!(unit.lessons()[0].topic_number(), Some(0));
        assert_eq!(unit.lessons()[1].topic_number(), Some(1));
    }

    #[test]
    fn test_continuation_run_of_three() {
        let unit = Unit::new(vec![
            Lesson::new("a", "A"),
            Lesson::new("a", "B").with_continuation(true),
            Lesson::new("a", "C").with_continuation(true),
        ]);
        assert_eq!(
            numbers(&unit),
            [
                (Some(1), Some(1), Some(1)),
                (Some(2), Some(1), Some(2)),
                (Some(3), Some(1), Some(3)),
            ]
        );
    }

    #[test]
    fn test_continuation_respects_explicit_start() {
        let unit = Unit::new(vec![
            Lesson::new("a", "A").with_count_within(3),
            Lesson::new("a", "B").with_continuation(true),
        ]);
        assert_eq!(unit.lessons()[0].count_within(), Some(3));
        assert_eq!(unit.lessons()[1].count_within(), Some(4));
    }

    #[test]
    fn test_separate_runs_restart() {
        let unit = Unit::new(vec![
            Lesson::new("a", "A"),
            Lesson::new("a", "B").with_continuation(true),
            Lesson::new("b", "C"),
            Lesson::new("b", "D").with_continuation(true),
        ]);
        let counts: Vec<_> = unit.lessons().iter().map(Lesson::count_within).collect();
        assert_eq!(counts, [Some(1), Some(2), Some(1), Some(2)]);
        let topics: Vec<_> = unit.lessons().iter().map(Lesson::topic_number).collect();
        assert_eq!(topics, [Some(1), Some(1), Some(2), Some(2)]);
    }

    #[test]
    fn test_leading_continuation_has_no_predecessor() {
        let unit = Unit::new(vec![Lesson::new("a", "A").with_continuation(true)]);
        assert_eq!(unit.lessons()[0].count_within(), None);
        assert_eq!(unit.lessons()[0].topic_number(), Some(0));
    }

    #[test]
    fn test_empty_unit() {
        let unit = Unit::new(Vec::new());
        assert!(unit.is_empty());
        assert!(unit.duplicate_ids().is_empty());
        let engine = TemplateEngine::new().unwrap();
        assert_eq!(unit.generate_all_documents(&engine).unwrap().file_count(), 0);
        assert_eq!(
            unit.generate_objectives_include(&engine).unwrap().content,
            OBJECTIVES_HEADER
        );
    }

    #[test]
    fn test_duplicate_ids_reports_each_once() {
        let unit = Unit::new(vec![
            Lesson::new("a", "A"),
            Lesson::new("b", "B"),
            Lesson::new("c", "A"),
            Lesson::new("d", "A"),
            Lesson::new("e", "B"),
            Lesson::new("f", "C"),
        ]);
        let duplicates: Vec<_> = unit
            .duplicate_ids()
            .into_iter()
            .map(LessonId::into_inner)
            .collect();
        assert_eq!(duplicates, ["A", "B"]);
    }

    #[test]
    fn test_generation_blocked_by_duplicates() {
        let unit = Unit::new(vec![Lesson::new("a", "A"), Lesson::new("b", "A")]);
        let engine = TemplateEngine::new().unwrap();

        assert!(unit.generate_all_documents(&engine).unwrap_err().is_validation_error());
        assert!(
            unit.generate_objectives_include(&engine)
                .unwrap_err()
                .is_validation_error()
        );
    }

    #[test]
    fn test_objectives_include_layout() {
        let unit = Unit::new(vec![
            Lesson::new("a", "A").with_objectives(["one"]),
            Lesson::new("b", "B"),
        ])
        .with_objectives_file("build/objectives.tex");

        let engine = TemplateEngine::new().unwrap();
        let include = unit.generate_objectives_include(&engine).unwrap();

        assert_eq!(include.path, "build/objectives.tex");
        assert!(include.content.starts_with(OBJECTIVES_HEADER));
        assert!(include.content.ends_with("\\providecommand{\\objectivesB}{}\n"));
        let a = include.content.find("\\objectivesA").unwrap();
        let b = include.content.find("\\objectivesB").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_summaries() {
        let unit = Unit::new(vec![
            Lesson::new("Intro", "L1"),
            Lesson::new("Intro", "L2").with_continuation(true),
        ]);
        let rows = unit.summaries().unwrap();
        assert_eq!(rows[1].lesson_number, 2);
        assert_eq!(rows[1].topic_number, 1);
        assert_eq!(rows[1].display_title, "Topic 1 --- Intro --- Part II");
        assert_eq!(rows[1].file_name, "lp-02.tex");
    }
}

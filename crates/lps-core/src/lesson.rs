//! A single scheduled class session.
//!
//! A [`Lesson`] carries the authored fields (title, objectives, plan,
//! topic flags, id) plus the numbering assigned by its owning
//! [`Unit`](crate::Unit). Rendering requires that numbering; asking a lesson
//! that was never placed in a unit for its title or document fails with
//! [`Error::Precondition`].
//!
//! # Examples
//!
//! ```
//! use lps_core::{Lesson, TemplateEngine, Unit};
//!
//! let unit = Unit::new(vec![
//!     Lesson::new("Limits", "Limits1").with_plan(["Warm-up", "Notes"]),
//! ]);
//! let lesson = &unit.lessons()[0];
//!
//! assert_eq!(lesson.display_title().unwrap(), "Topic 1 --- Limits");
//! assert_eq!(lesson.output_file_name().unwrap(), "lp-01.tex");
//!
//! let engine = TemplateEngine::new().unwrap();
//! let document = lesson.render_document(&engine).unwrap();
//! assert!(document.contains("\\item Warm-up"));
//! ```

use crate::record::LessonRecord;
use crate::roman::to_roman;
use crate::{Error, LessonId, Result, TemplateEngine};
use serde::Serialize;
use std::num::NonZeroU32;

/// LaTeX include that defines the objectives macros.
pub const OBJECTIVES_INPUT: &str = "info/objectives";

/// One lesson within a unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    title: String,
    objectives: Vec<String>,
    plan: Vec<String>,
    is_topic: bool,
    is_continuation: bool,
    id: LessonId,
    count_within: Option<u32>,
    lesson_number: Option<u32>,
    topic_number: Option<u32>,
}

#[derive(Serialize)]
struct DocumentContext<'a> {
    display_title: String,
    lesson_number: u32,
    objectives_input: &'static str,
    objectives_macro: String,
    plan: &'a [String],
}

#[derive(Serialize)]
struct ObjectivesContext<'a> {
    objectives_macro: String,
    objectives: &'a [String],
}

impl Lesson {
    /// Creates a topic-starting lesson with no objectives and an empty plan.
    #[must_use]
    pub fn new(title: impl Into<String>, id: impl Into<LessonId>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the learning objectives.
    #[must_use]
    pub fn with_objectives<I, S>(mut self, objectives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.objectives = objectives.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the plan bullets.
    #[must_use]
    pub fn with_plan<I, S>(mut self, plan: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.plan = plan.into_iter().map(Into::into).collect();
        self
    }

    /// Sets whether the lesson carries a topic prefix.
    #[must_use]
    pub const fn with_topic(mut self, is_topic: bool) -> Self {
        self.is_topic = is_topic;
        self
    }

    /// Sets whether the lesson continues the previous lesson's topic.
    #[must_use]
    pub const fn with_continuation(mut self, is_continuation: bool) -> Self {
        self.is_continuation = is_continuation;
        self
    }

    /// Sets an explicit position within a continuation chain.
    #[must_use]
    pub const fn with_count_within(mut self, count_within: u32) -> Self {
        self.count_within = Some(count_within);
        self
    }

    /// Display text as authored.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Learning objectives in authored order.
    #[must_use]
    pub fn objectives(&self) -> &[String] {
        &self.objectives
    }

    /// Plan bullets in authored order.
    #[must_use]
    pub fn plan(&self) -> &[String] {
        &self.plan
    }

    /// Whether the title carries a topic prefix.
    #[must_use]
    pub const fn is_topic(&self) -> bool {
        self.is_topic
    }

    /// Whether this lesson continues the previous lesson's topic.
    #[must_use]
    pub const fn is_continuation(&self) -> bool {
        self.is_continuation
    }

    /// Unique id keying the objectives macro.
    #[must_use]
    pub const fn id(&self) -> &LessonId {
        &self.id
    }

    /// 1-based position within a continuation chain, if part of one.
    #[must_use]
    pub const fn count_within(&self) -> Option<u32> {
        self.count_within
    }

    /// 1-based position within the unit, once numbered.
    #[must_use]
    pub const fn lesson_number(&self) -> Option<u32> {
        self.lesson_number
    }

    /// 1-based topic index, once numbered.
    #[must_use]
    pub const fn topic_number(&self) -> Option<u32> {
        self.topic_number
    }

    pub(crate) const fn assign_numbers(&mut self, lesson_number: u32, topic_number: u32) {
        self.lesson_number = Some(lesson_number);
        self.topic_number = Some(topic_number);
    }

    pub(crate) const fn set_count_within(&mut self, count_within: u32) {
        self.count_within = Some(count_within);
    }

    fn numbered_lesson(&self) -> Result<u32> {
        self.lesson_number.ok_or_else(|| Error::Precondition {
            message: format!("lesson '{}' has no lesson number; add it to a unit first", self.id),
        })
    }

    fn numbered_topic(&self) -> Result<u32> {
        self.topic_number.ok_or_else(|| Error::Precondition {
            message: format!("lesson '{}' has no topic number; add it to a unit first", self.id),
        })
    }

    /// Computes the title shown in the rendered document.
    ///
    /// Topic lessons are prefixed with `Topic N --- ` and lessons inside a
    /// continuation chain get a ` --- Part <roman>` suffix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`] if the lesson has not been numbered and
    /// [`Error::InvalidArgument`] if `count_within` has no Roman numeral.
    pub fn display_title(&self) -> Result<String> {
        let topic_number = self.numbered_topic()?;

        let mut title = if self.is_topic {
            format!("Topic {topic_number} --- {}", self.title)
        } else {
            self.title.clone()
        };
        if let Some(count) = self.count_within {
            title.push_str(" --- Part ");
            title.push_str(&to_roman(i64::from(count))?);
        }

        Ok(title)
    }

    /// File name of the rendered document, e.g. `lp-07.tex`.
    ///
    /// The lesson number is zero-padded to at least two digits.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`] if the lesson has not been numbered.
    pub fn output_file_name(&self) -> Result<String> {
        let number = self.numbered_lesson()?;
        Ok(format!("lp-{number:02}.tex"))
    }

    /// Renders the `\providecommand` fragment defining this lesson's objectives.
    ///
    /// Lessons without objectives still get an empty macro so documents that
    /// reference it compile.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Template`] if rendering fails.
    pub fn render_objectives_block(&self, engine: &TemplateEngine<'_>) -> Result<String> {
        let context = ObjectivesContext {
            objectives_macro: self.id.objectives_macro(),
            objectives: &self.objectives,
        };
        let block = engine.render(TemplateEngine::OBJECTIVES, &context)?;
        Ok(block.trim_end().to_string())
    }

    /// Renders the full LaTeX document for this lesson.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`] if the lesson has not been numbered,
    /// [`Error::InvalidArgument`] for an unrepresentable part number and
    /// [`Error::Template`] if rendering fails.
    pub fn render_document(&self, engine: &TemplateEngine<'_>) -> Result<String> {
        let context = DocumentContext {
            display_title: self.display_title()?,
            lesson_number: self.numbered_lesson()?,
            objectives_input: OBJECTIVES_INPUT,
            objectives_macro: self.id.objectives_macro(),
            plan: &self.plan,
        };
        engine.render(TemplateEngine::DOCUMENT, &context)
    }
}

impl Default for Lesson {
    /// A blank lesson: empty title, topic start, id `Undefined`.
    fn default() -> Self {
        Self {
            title: String::new(),
            objectives: Vec::new(),
            plan: Vec::new(),
            is_topic: true,
            is_continuation: false,
            id: LessonId::default(),
            count_within: None,
            lesson_number: None,
            topic_number: None,
        }
    }
}

impl From<LessonRecord> for Lesson {
    fn from(record: LessonRecord) -> Self {
        Self {
            title: record.title,
            objectives: record.objectives,
            plan: record.plan,
            is_topic: record.is_topic,
            is_continuation: record.is_continuation,
            id: LessonId::new(record.id),
            count_within: record.count_within.map(NonZeroU32::get),
            lesson_number: None,
            topic_number: None,
        }
    }
}

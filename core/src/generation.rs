//! # AI Generation Schemas
//!
//! One table entry per activity category describing the generation form: which
//! endpoint it posts to, which inputs it shows (in order) and the defaults for
//! inputs left blank. The form renderer walks `fields`; the submit path calls
//! `build`. Both read the same entry, so the three shapes never drift apart.

use std::collections::BTreeMap;

use shared::{
    ActivityCategory, ComprehensionGenerationRequest, GenerationRequest,
    PronunciationGenerationRequest, ReadingGenerationRequest,
};

use crate::error::ValidationError;

pub const DEFAULT_SENTENCE_COUNT: u32 = 5;
pub const DEFAULT_WORD_COUNT: u32 = 10;
pub const DEFAULT_QUESTION_COUNT: u32 = 3;

/// Every input that appears on some generation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenerationField {
    Age,
    Therapist,
    SentenceCount,
    Theme,
    SyllablePattern,
    WordCount,
    QuestionCount,
}

impl GenerationField {
    pub fn label(&self) -> &'static str {
        match self {
            GenerationField::Age => "Child's age",
            GenerationField::Therapist => "Therapist",
            GenerationField::SentenceCount => "Length (sentences)",
            GenerationField::Theme => "Theme",
            GenerationField::SyllablePattern => "Syllable type",
            GenerationField::WordCount => "Number of words",
            GenerationField::QuestionCount => "Number of questions",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Number,
    Text,
    /// Select populated from the therapist directory
    TherapistPicker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: GenerationField,
    pub input: InputKind,
    pub required: bool,
    /// Value used when a numeric input is left blank
    pub default: Option<u32>,
}

impl FieldSpec {
    const fn required(field: GenerationField, input: InputKind) -> Self {
        Self { field, input, required: true, default: None }
    }

    const fn optional(field: GenerationField, input: InputKind, default: Option<u32>) -> Self {
        Self { field, input, required: false, default }
    }
}

/// Raw text of each generation input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationValues(BTreeMap<GenerationField, String>);

impl GenerationValues {
    pub fn get(&self, field: GenerationField) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: GenerationField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn with(mut self, field: GenerationField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    fn trimmed(&self, field: GenerationField) -> &str {
        self.get(field).trim()
    }

    fn age(&self) -> Result<u32, ValidationError> {
        if self.trimmed(GenerationField::Age).is_empty() {
            return Err(ValidationError::MissingAge);
        }
        self.positive(GenerationField::Age)
    }

    fn therapist(&self) -> Result<String, ValidationError> {
        match self.trimmed(GenerationField::Therapist) {
            "" => Err(ValidationError::MissingTherapist),
            id => Ok(id.to_string()),
        }
    }

    fn count_or(&self, field: GenerationField, default: u32) -> Result<u32, ValidationError> {
        if self.trimmed(field).is_empty() {
            Ok(default)
        } else {
            self.positive(field)
        }
    }

    fn text(&self, field: GenerationField) -> Option<String> {
        match self.trimmed(field) {
            "" => None,
            text => Some(text.to_string()),
        }
    }

    fn positive(&self, field: GenerationField) -> Result<u32, ValidationError> {
        match self.trimmed(field).parse::<u32>() {
            Ok(value) if value > 0 => Ok(value),
            _ => Err(ValidationError::InvalidNumber { field: field.label() }),
        }
    }
}

#[derive(Debug)]
pub struct GenerationSchema {
    pub category: ActivityCategory,
    /// Path of the category's generation endpoint
    pub endpoint: &'static str,
    pub fields: &'static [FieldSpec],
    build: fn(&GenerationValues) -> Result<GenerationRequest, ValidationError>,
}

impl GenerationSchema {
    /// Validate the typed values and produce the category's payload
    pub fn build(&self, values: &GenerationValues) -> Result<GenerationRequest, ValidationError> {
        (self.build)(values)
    }

    pub fn field(&self, field: GenerationField) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.field == field)
    }
}

pub static GENERATION_SCHEMAS: [GenerationSchema; 3] = [
    GenerationSchema {
        category: ActivityCategory::Reading,
        endpoint: "/activities/generate/reading",
        fields: &[
            FieldSpec::required(GenerationField::Age, InputKind::Number),
            FieldSpec::optional(
                GenerationField::SentenceCount,
                InputKind::Number,
                Some(DEFAULT_SENTENCE_COUNT),
            ),
            FieldSpec::optional(GenerationField::Theme, InputKind::Text, None),
            FieldSpec::required(GenerationField::Therapist, InputKind::TherapistPicker),
        ],
        build: build_reading,
    },
    GenerationSchema {
        category: ActivityCategory::Pronunciation,
        endpoint: "/activities/generate/pronunciation",
        fields: &[
            FieldSpec::required(GenerationField::Age, InputKind::Number),
            FieldSpec::optional(GenerationField::SyllablePattern, InputKind::Text, None),
            FieldSpec::optional(
                GenerationField::WordCount,
                InputKind::Number,
                Some(DEFAULT_WORD_COUNT),
            ),
            FieldSpec::required(GenerationField::Therapist, InputKind::TherapistPicker),
        ],
        build: build_pronunciation,
    },
    GenerationSchema {
        category: ActivityCategory::Comprehension,
        endpoint: "/activities/generate/comprehension",
        fields: &[
            FieldSpec::required(GenerationField::Age, InputKind::Number),
            FieldSpec::optional(GenerationField::Theme, InputKind::Text, None),
            FieldSpec::optional(
                GenerationField::QuestionCount,
                InputKind::Number,
                Some(DEFAULT_QUESTION_COUNT),
            ),
            FieldSpec::required(GenerationField::Therapist, InputKind::TherapistPicker),
        ],
        build: build_comprehension,
    },
];

pub fn schema_for(category: ActivityCategory) -> &'static GenerationSchema {
    match category {
        ActivityCategory::Reading => &GENERATION_SCHEMAS[0],
        ActivityCategory::Pronunciation => &GENERATION_SCHEMAS[1],
        ActivityCategory::Comprehension => &GENERATION_SCHEMAS[2],
    }
}

fn build_reading(values: &GenerationValues) -> Result<GenerationRequest, ValidationError> {
    Ok(GenerationRequest::Reading(ReadingGenerationRequest {
        age: values.age()?,
        therapist_id: values.therapist()?,
        length: values.count_or(GenerationField::SentenceCount, DEFAULT_SENTENCE_COUNT)?,
        theme: values.text(GenerationField::Theme),
    }))
}

fn build_pronunciation(values: &GenerationValues) -> Result<GenerationRequest, ValidationError> {
    Ok(GenerationRequest::Pronunciation(PronunciationGenerationRequest {
        age: values.age()?,
        therapist_id: values.therapist()?,
        syllable_type: values.text(GenerationField::SyllablePattern),
        count: values.count_or(GenerationField::WordCount, DEFAULT_WORD_COUNT)?,
    }))
}

fn build_comprehension(values: &GenerationValues) -> Result<GenerationRequest, ValidationError> {
    Ok(GenerationRequest::Comprehension(ComprehensionGenerationRequest {
        age: values.age()?,
        therapist_id: values.therapist()?,
        question_count: values.count_or(GenerationField::QuestionCount, DEFAULT_QUESTION_COUNT)?,
        theme: values.text(GenerationField::Theme),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_indexed_by_category() {
        for category in ActivityCategory::ALL {
            let schema = schema_for(category);
            assert_eq!(schema.category, category);
            assert!(schema.endpoint.starts_with("/activities/generate/"));
            assert!(schema.field(GenerationField::Age).is_some_and(|spec| spec.required));
            assert!(schema.field(GenerationField::Therapist).is_some_and(|spec| spec.required));
        }
    }

    #[test]
    fn test_reading_defaults_sentence_count() {
        let values = GenerationValues::default()
            .with(GenerationField::Age, "7")
            .with(GenerationField::Therapist, "id2")
            .with(GenerationField::Theme, "animals");

        let request = schema_for(ActivityCategory::Reading).build(&values).unwrap();
        assert_eq!(
            request,
            GenerationRequest::Reading(ReadingGenerationRequest {
                age: 7,
                therapist_id: "id2".to_string(),
                length: 5,
                theme: Some("animals".to_string()),
            })
        );
    }

    #[test]
    fn test_pronunciation_and_comprehension_defaults() {
        let values = GenerationValues::default()
            .with(GenerationField::Age, " 6 ")
            .with(GenerationField::Therapist, "t1");

        match schema_for(ActivityCategory::Pronunciation).build(&values).unwrap() {
            GenerationRequest::Pronunciation(request) => {
                assert_eq!(request.count, DEFAULT_WORD_COUNT);
                assert_eq!(request.syllable_type, None);
                assert_eq!(request.age, 6);
            }
            other => panic!("unexpected payload {:?}", other),
        }

        match schema_for(ActivityCategory::Comprehension).build(&values).unwrap() {
            GenerationRequest::Comprehension(request) => {
                assert_eq!(request.question_count, DEFAULT_QUESTION_COUNT);
                assert_eq!(request.theme, None);
            }
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_explicit_counts_override_defaults() {
        let values = GenerationValues::default()
            .with(GenerationField::Age, "8")
            .with(GenerationField::Therapist, "t1")
            .with(GenerationField::QuestionCount, "4");

        match schema_for(ActivityCategory::Comprehension).build(&values).unwrap() {
            GenerationRequest::Comprehension(request) => assert_eq!(request.question_count, 4),
            other => panic!("unexpected payload {:?}", other),
        }
    }

    #[test]
    fn test_age_and_therapist_required() {
        let schema = schema_for(ActivityCategory::Reading);

        let no_age = GenerationValues::default().with(GenerationField::Therapist, "t1");
        assert_eq!(schema.build(&no_age), Err(ValidationError::MissingAge));

        let no_therapist = GenerationValues::default().with(GenerationField::Age, "7");
        assert_eq!(schema.build(&no_therapist), Err(ValidationError::MissingTherapist));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let schema = schema_for(ActivityCategory::Pronunciation);
        let values = GenerationValues::default()
            .with(GenerationField::Age, "0")
            .with(GenerationField::Therapist, "t1");
        assert_eq!(
            schema.build(&values),
            Err(ValidationError::InvalidNumber { field: "Child's age" })
        );

        let values = values
            .with(GenerationField::Age, "5")
            .with(GenerationField::WordCount, "ten");
        assert_eq!(
            schema.build(&values),
            Err(ValidationError::InvalidNumber { field: "Number of words" })
        );
    }
}

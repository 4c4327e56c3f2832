use crate::{LessonInfo, ProcessingOptions};

#[test]
fn given_whitespace_distribution_when_reading_reference_then_returns_none() {
    let lesson = LessonInfo {
        distribution_content: " \n\t ".to_string(),
        ..LessonInfo::default()
    };

    assert_eq!(lesson.distribution_reference(), None);
}

#[test]
fn given_distribution_text_when_reading_reference_then_returns_untrimmed_text() {
    let lesson = LessonInfo {
        distribution_content: "\nTiết 3: NLS 1.1a\n".to_string(),
        ..LessonInfo::default()
    };

    assert_eq!(lesson.distribution_reference(), Some("\nTiết 3: NLS 1.1a\n"));
}

/// **VALUE**: Verifies the presentation layer's JSON shape deserializes with
/// the distribution excerpt and option flags omitted.
///
/// **WHY THIS MATTERS**: Forms post only the fields the user filled in.
#[test]
fn given_minimal_json_when_deserializing_then_optional_fields_default() {
    let lesson: LessonInfo = serde_json::from_str(
        r#"{"textbook":"A","subject":"Math","grade":"5","content":"Lesson body"}"#,
    )
    .expect("lesson JSON should parse");
    let options: ProcessingOptions =
        serde_json::from_str("{}").expect("empty options should parse");

    assert_eq!(lesson.content, "Lesson body");
    assert!(lesson.distribution_content.is_empty());
    assert_eq!(options, ProcessingOptions::default());
    assert!(!options.analyze_only);
    assert!(!options.detailed_report);
}

/// **VALUE**: Verifies the entry point on `LessonInfo` hands out a working
/// builder.
///
/// **BUG THIS CATCHES**: Would catch `LessonInfo::builder()` drifting from
/// `LessonInfoBuilder` (wrong type, missing import, different defaults).
#[test]
fn given_lesson_builder_entry_point_when_building_then_fields_are_set() {
    let lesson = LessonInfo::builder()
        .with_textbook("Chân trời sáng tạo")
        .with_subject("Tin học")
        .with_grade("7")
        .with_content("")
        .build()
        .unwrap();

    assert_eq!(lesson.textbook, "Chân trời sáng tạo");
    assert_eq!(lesson.grade, "7");
    assert!(!lesson.has_content());
    assert_eq!(lesson.distribution_reference(), None);
}

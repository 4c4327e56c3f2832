use crate::cli::GenerateArgs;
use crate::error::PlannerError;

use models::{LessonInfo, ProcessingOptions};
use planner_core::credential::{CredentialProbe, CredentialStore};
use planner_core::pipeline::{GenerativeModel, LessonPipeline};
use planner_core::storage::KeyValueStore;

use std::io::Write;
use std::path::Path;

use log::info;

async fn read_input_file(path: &Path, label: &str) -> Result<String, PlannerError> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        PlannerError::input(format!(
            "Cannot read {label} file {}: {e}",
            path.display()
        ))
    })
}

/// Read the lesson files named on the command line.
///
/// An empty lesson is refused here; the pipeline itself would accept it.
pub async fn load_lesson(
    args: &GenerateArgs,
) -> Result<(LessonInfo, ProcessingOptions), PlannerError> {
    let content = read_input_file(&args.content_file, "content").await?;
    if content.trim().is_empty() {
        return Err(PlannerError::input(format!(
            "Content file {} is empty",
            args.content_file.display()
        )));
    }

    let mut builder = LessonInfo::builder()
        .with_textbook(args.textbook.as_str())
        .with_subject(args.subject.as_str())
        .with_grade(args.grade.as_str())
        .with_content(content);

    if let Some(path) = &args.distribution_file {
        builder = builder.with_distribution_content(read_input_file(path, "distribution").await?);
    }

    let options = ProcessingOptions {
        analyze_only: args.analyze_only,
        detailed_report: args.detailed_report,
    };

    Ok((builder.build()?, options))
}

/// Transform the lesson with the stored key and write the result.
pub async fn run<S, P, M>(
    store: &mut CredentialStore<S, P>,
    pipeline: &LessonPipeline<M>,
    args: &GenerateArgs,
    out: &mut impl Write,
) -> Result<(), PlannerError>
where
    S: KeyValueStore,
    P: CredentialProbe,
    M: GenerativeModel,
{
    let (lesson, options) = load_lesson(args).await?;

    store.initialize();
    let text = pipeline
        .generate(&lesson, &options, store.credential())
        .await?;

    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &text).await.map_err(|e| {
                PlannerError::planner(format!("Cannot write {}: {e}", path.display()))
            })?;
            info!("Wrote {} chars to {}", text.chars().count(), path.display());
        }
        None => {
            out.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

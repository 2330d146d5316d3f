//! Integration tests for the export/import round trip

use taskflow_board::{
    board::{ExportBoard, ImportBoard, SetTheme},
    task::{AddTask, DeleteTask},
    BoardConfig, BoardContext, BoardError, BoardExport, BoardOperationProcessor,
    OperationProcessor, Priority,
};
use chrono::NaiveDate;
use tempfile::TempDir;

#[tokio::test]
async fn test_export_import_round_trip_through_file() {
    let temp = TempDir::new().unwrap();
    let source = BoardContext::new(BoardConfig::default().with_demo_tasks(true)).unwrap();
    let processor = BoardOperationProcessor::new();

    processor
        .process(
            &AddTask::new("Dated")
                .with_priority(Priority::Critical)
                .with_due_date(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap())
                .with_description("with a description"),
            &source,
        )
        .await
        .unwrap();
    processor.process(&SetTheme::new("dark"), &source).await.unwrap();

    let doc = processor.process(&ExportBoard, &source).await.unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 11, 3).unwrap();
    let path = temp.path().join(BoardExport::file_name(today));
    std::fs::write(&path, doc.to_json().unwrap()).unwrap();

    // Import into a fresh board
    let target = BoardContext::with_defaults().unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let summary = processor.process(&ImportBoard::new(content), &target).await.unwrap();
    assert_eq!(summary.task_count, 6);

    let original: Vec<_> = source.read().await.store.tasks().cloned().collect();
    let imported: Vec<_> = target.read().await.store.tasks().cloned().collect();
    assert_eq!(original, imported);
    assert_eq!(target.read().await.theme, "dark");

    let activity = target.read_activity(None).await;
    assert_eq!(activity.len(), 1);
    assert_eq!(activity[0].message, "Alice Johnson: Imported board from file");
}

#[tokio::test]
async fn test_failed_import_leaves_board_untouched() {
    let ctx = BoardContext::with_defaults().unwrap();
    let processor = BoardOperationProcessor::new();
    let task = processor.process(&AddTask::new("Keep me"), &ctx).await.unwrap();

    let error = processor
        .process(&ImportBoard::new(r#"{"tasks": "nope", "theme": "dark"}"#), &ctx)
        .await
        .unwrap_err();
    assert!(matches!(error, BoardError::MalformedImport { .. }));

    let state = ctx.read().await;
    assert!(state.store.contains_task(&task.id));
    assert_eq!(state.theme, "default");
    drop(state);
    assert_eq!(ctx.read_activity(None).await.len(), 1);
}

#[tokio::test]
async fn test_imported_tasks_are_editable() {
    let ctx = BoardContext::with_defaults().unwrap();
    let processor = BoardOperationProcessor::new();
    let content = r#"{"tasks": [
        {"id": "1730000000000", "title": "Legacy", "priority": "Low", "dueDate": "2025-11-10",
         "assignee": "Carol Davis", "status": "done", "createdAt": "2025-10-27T10:00:00.000Z"}
    ]}"#;
    processor.process(&ImportBoard::new(content), &ctx).await.unwrap();

    let deleted = processor
        .process(&DeleteTask::new("1730000000000"), &ctx)
        .await
        .unwrap();
    assert_eq!(deleted.map(|t| t.title), Some("Legacy".to_string()));
}

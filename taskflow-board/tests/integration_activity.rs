//! Integration tests for activity logging through the processor

use taskflow_board::{
    activity::ListActivity,
    column::{AddColumn, DeleteColumn},
    filter::SetSearch,
    task::{AddTask, DeleteTask, GetTask, MoveTask, UpdateTask},
    user::SwitchUser,
    BoardConfig, BoardContext, BoardError, BoardOperationProcessor, OperationProcessor,
};

#[test_log::test(tokio::test)]
async fn test_activity_logging_end_to_end() {
    let ctx = BoardContext::with_defaults().unwrap();
    let processor = BoardOperationProcessor::new();

    // Add a task (logged)
    let task = processor
        .process(&AddTask::new("First task").with_description("Test task"), &ctx)
        .await
        .unwrap();

    // Update the task (logged)
    processor
        .process(&UpdateTask::new(&task.id).with_title("Updated task"), &ctx)
        .await
        .unwrap();

    // Get task and change filters (unlogged)
    processor.process(&GetTask::new(&task.id), &ctx).await.unwrap();
    processor.process(&SetSearch::new("upd"), &ctx).await.unwrap();

    // Move the task (logged)
    processor
        .process(&MoveTask::new(&task.id, "todo", "done"), &ctx)
        .await
        .unwrap();

    let entries = ctx.read_activity(None).await;
    let messages: Vec<_> = entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        messages,
        vec![
            "Alice Johnson: Moved \"Updated task\" from To Do to Done",
            "Alice Johnson: Updated task \"Updated task\"",
            "Alice Johnson: Created task \"First task\"",
        ]
    );
    assert!(entries.iter().all(|e| e.user == "Alice Johnson"));
}

#[tokio::test]
async fn test_switch_user_attributed_to_new_user() {
    let ctx = BoardContext::with_defaults().unwrap();
    let processor = BoardOperationProcessor::new();

    processor.process(&SwitchUser::new("Bob Smith"), &ctx).await.unwrap();
    processor.process(&AddTask::new("Bob's task"), &ctx).await.unwrap();

    let entries = ctx.read_activity(None).await;
    assert_eq!(entries[0].message, "Bob Smith: Created task \"Bob's task\"");
    assert_eq!(entries[1].message, "Bob Smith: Bob Smith started viewing the board");
    assert_eq!(entries[1].user, "Bob Smith");
}

#[tokio::test]
async fn test_new_task_assigned_to_current_user() {
    let ctx = BoardContext::with_defaults().unwrap();
    let processor = BoardOperationProcessor::new();

    processor.process(&SwitchUser::new("Carol Davis"), &ctx).await.unwrap();
    let task = processor.process(&AddTask::new("Mine"), &ctx).await.unwrap();
    assert_eq!(task.assignee, "Carol Davis");
}

#[tokio::test]
async fn test_rejected_and_noop_commands_are_not_logged() {
    let ctx = BoardContext::with_defaults().unwrap();
    let processor = BoardOperationProcessor::new();
    let task = processor.process(&AddTask::new("Only"), &ctx).await.unwrap();

    // Same-column move is a no-op
    let moved = processor
        .process(&MoveTask::new(&task.id, "todo", "todo"), &ctx)
        .await
        .unwrap();
    assert!(moved.is_none());

    // Tolerant delete of an unknown id
    let deleted = processor.process(&DeleteTask::new("missing"), &ctx).await.unwrap();
    assert!(deleted.is_none());

    // Strict update of an unknown id
    let result = processor.process(&UpdateTask::new("missing"), &ctx).await;
    assert!(matches!(result, Err(BoardError::TaskNotFound { .. })));

    // Protected column
    let result = processor.process(&DeleteColumn::new("todo"), &ctx).await;
    assert!(matches!(result, Err(BoardError::ProtectedColumn { .. })));

    // Duplicate list name
    let result = processor.process(&AddColumn::new("DONE"), &ctx).await;
    assert!(matches!(result, Err(BoardError::DuplicateName { .. })));

    assert_eq!(ctx.read_activity(None).await.len(), 1);
}

#[tokio::test]
async fn test_activity_log_bounded_fifo() {
    let ctx = BoardContext::with_defaults().unwrap();
    let processor = BoardOperationProcessor::new();

    for i in 1..=51 {
        processor
            .process(&AddTask::new(format!("Task {i}")), &ctx)
            .await
            .unwrap();
    }

    let entries = ctx.read_activity(None).await;
    assert_eq!(entries.len(), 50);
    // Entry 1 was evicted; 2..=51 remain newest first
    assert_eq!(entries[0].message, "Alice Johnson: Created task \"Task 51\"");
    assert_eq!(entries[49].message, "Alice Johnson: Created task \"Task 2\"");

    let shown = processor.process(&ListActivity::new(), &ctx).await.unwrap();
    assert_eq!(shown.len(), 10);
    assert_eq!(shown[0], entries[0]);
}

#[tokio::test]
async fn test_activity_capacity_configurable() {
    let ctx = BoardContext::new(BoardConfig::default().with_activity_capacity(3)).unwrap();
    let processor = BoardOperationProcessor::new();

    for i in 0..5 {
        processor
            .process(&AddTask::new(format!("t{i}")), &ctx)
            .await
            .unwrap();
    }
    assert_eq!(ctx.read_activity(None).await.len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_commands_serialize() {
    let ctx = std::sync::Arc::new(BoardContext::with_defaults().unwrap());

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let ctx = ctx.clone();
            tokio::spawn(async move {
                BoardOperationProcessor::new()
                    .process(&AddTask::new(format!("Parallel {i}")), &*ctx)
                    .await
            })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(ctx.read().await.store.task_count(), 20);
    assert_eq!(ctx.read_activity(None).await.len(), 20);
}

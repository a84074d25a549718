// Project and task behavior of the workspace store.

use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use studyspace::document::CreateDocumentRequest;
use studyspace::error::StoreError;
use studyspace::models::project::ProjectStatus;
use studyspace::models::task::{TaskPriority, TaskStatus};
use studyspace::models::UserRole;
use studyspace::project::{CreateProjectRequest, UpdateProjectRequest};
use studyspace::task::{CreateTaskRequest, UpdateTaskRequest};
use studyspace::user_management::CreateUserRequest;
use studyspace::WorkspaceStore;

fn store_with_user() -> (WorkspaceStore, Uuid) {
    let mut store = WorkspaceStore::new();
    let user = store
        .register_user(CreateUserRequest {
            name: "Test Student".to_string(),
            email: "student@example.edu".to_string(),
            role: UserRole::Student,
            avatar_color: None,
        })
        .unwrap();
    (store, user.id)
}

fn project_request(owner: Uuid, name: &str) -> CreateProjectRequest {
    CreateProjectRequest {
        name: name.to_string(),
        owner_id: owner,
        description: None,
        color: None,
        icon: None,
        status: None,
        members: None,
        tags: None,
    }
}

fn task_request(project_id: Uuid, creator: Uuid, title: &str) -> CreateTaskRequest {
    CreateTaskRequest {
        project_id,
        title: title.to_string(),
        created_by: creator,
        description: None,
        status: None,
        priority: None,
        due_date: None,
        assignee_id: None,
        tags: None,
        subtasks: None,
    }
}

#[test]
fn create_project_applies_defaults() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "ML Notes")).unwrap();

    assert_eq!(project.status, ProjectStatus::Active);
    assert_eq!(project.members, vec![owner]);
    assert_eq!(project.description, "");
    assert_eq!(project.created_at, project.updated_at);
    assert_eq!(store.get_project(project.id).unwrap(), &project);
}

#[test]
fn create_project_caller_fields_win() {
    let (mut store, owner) = store_with_user();
    let other = Uuid::new_v4();
    let project = store
        .create_project(CreateProjectRequest {
            name: "Archived group".to_string(),
            owner_id: owner,
            description: Some("old".to_string()),
            color: Some("#000000".to_string()),
            icon: Some("📦".to_string()),
            status: Some(ProjectStatus::Archived),
            members: Some(vec![other]),
            tags: Some(vec!["legacy".to_string()]),
        })
        .unwrap();

    assert_eq!(project.status, ProjectStatus::Archived);
    assert_eq!(project.color, "#000000");
    assert_eq!(project.tags, vec!["legacy".to_string()]);
    // Supplied member list is kept, but the owner is always present.
    assert_eq!(project.members, vec![owner, other]);
}

#[test]
fn create_project_rejects_blank_name() {
    let (mut store, owner) = store_with_user();
    let err = store.create_project(project_request(owner, "   ")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
}

#[test]
fn update_project_merges_and_refreshes_timestamp() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "Before")).unwrap();

    let updated = store
        .update_project(
            project.id,
            UpdateProjectRequest {
                name: Some("After".to_string()),
                status: Some(ProjectStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.name, "After");
    assert_eq!(updated.status, ProjectStatus::Completed);
    assert_eq!(updated.description, project.description);
    assert!(updated.updated_at >= project.updated_at);
}

#[test]
fn update_project_cannot_drop_owner_from_members() {
    let (mut store, owner) = store_with_user();
    let other = Uuid::new_v4();
    let project = store.create_project(project_request(owner, "Group")).unwrap();

    let updated = store
        .update_project(
            project.id,
            UpdateProjectRequest {
                members: Some(vec![other]),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.members, vec![owner, other]);
}

#[test]
fn update_missing_project_is_reported() {
    let (mut store, _) = store_with_user();
    let id = Uuid::new_v4();
    let err = store.update_project(id, UpdateProjectRequest::default()).unwrap_err();
    assert_eq!(err, StoreError::ProjectNotFound(id));
}

#[test]
fn delete_project_cascades_to_everything() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "Doomed")).unwrap();
    store
        .create_document(CreateDocumentRequest {
            project_id: project.id,
            title: "Notes".to_string(),
            created_by: owner,
            content: None,
            doc_type: None,
            tags: None,
        })
        .unwrap();
    store.create_task(task_request(project.id, owner, "Todo")).unwrap();
    store
        .send_message(studyspace::chat::SendMessageRequest {
            project_id: project.id,
            channel_id: "general".to_string(),
            user_id: owner,
            content: "hello".to_string(),
        })
        .unwrap();

    store.delete_project(project.id).unwrap();

    assert!(store.get_project_documents(project.id).is_empty());
    assert!(store.get_project_tasks(project.id).is_empty());
    assert!(store.get_channel_messages(project.id, "general").is_empty());
    assert_eq!(
        store.get_project(project.id).unwrap_err(),
        StoreError::ProjectNotFound(project.id)
    );
}

#[test]
fn delete_missing_project_is_reported() {
    let (mut store, _) = store_with_user();
    let id = Uuid::new_v4();
    assert_eq!(store.delete_project(id).unwrap_err(), StoreError::ProjectNotFound(id));
}

#[test]
fn create_task_requires_existing_project() {
    let (mut store, owner) = store_with_user();
    let missing = Uuid::new_v4();
    let err = store.create_task(task_request(missing, owner, "Orphan")).unwrap_err();
    assert_eq!(err, StoreError::ProjectNotFound(missing));
}

#[test]
fn created_task_round_trips_with_defaults() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "Board")).unwrap();
    let due = Utc::now() + Duration::days(2);
    let task = store
        .create_task(CreateTaskRequest {
            project_id: project.id,
            title: "Write summary".to_string(),
            created_by: owner,
            description: Some("One page".to_string()),
            status: None,
            priority: Some(TaskPriority::High),
            due_date: Some(due),
            assignee_id: Some(owner),
            tags: Some(vec!["writing".to_string()]),
            subtasks: None,
        })
        .unwrap();

    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.priority, TaskPriority::High);
    assert_eq!(task.due_date, Some(due));
    assert!(task.subtasks.is_empty());
    assert!(task.comments.is_empty());
    assert_eq!(store.get_project_tasks(project.id), vec![&task]);
}

#[test]
fn update_task_merges_without_touching_other_fields() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "Board")).unwrap();
    let task = store
        .create_task(CreateTaskRequest {
            assignee_id: Some(owner),
            ..task_request(project.id, owner, "Task")
        })
        .unwrap();

    let updated = store
        .update_task(
            task.id,
            UpdateTaskRequest {
                status: Some(TaskStatus::InProgress),
                assignee_id: Some(None), // clear it
                ..Default::default()
            },
        )
        .unwrap();

    assert_eq!(updated.status, TaskStatus::InProgress);
    assert_eq!(updated.assignee_id, None);
    assert_eq!(updated.title, task.title);
    assert_eq!(updated.created_at, task.created_at);
}

#[test]
fn subtasks_are_created_and_toggled_by_id() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "Board")).unwrap();
    let task = store
        .create_task(CreateTaskRequest {
            subtasks: Some(vec!["first".to_string(), "second".to_string()]),
            ..task_request(project.id, owner, "Checklist")
        })
        .unwrap();
    assert_eq!(task.subtasks.len(), 2);
    assert!(task.subtasks.iter().all(|s| !s.completed));

    let extra = store.add_subtask(task.id, "third".to_string()).unwrap();
    store.update_subtask(task.id, extra.id, true).unwrap();

    let task = store.get_task(task.id).unwrap();
    assert_eq!(task.subtasks.len(), 3);
    assert!(task.subtasks[2].completed);
    assert!(!task.subtasks[0].completed);
}

#[test]
fn toggling_missing_subtask_mutates_nothing() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "Board")).unwrap();
    let task = store
        .create_task(CreateTaskRequest {
            subtasks: Some(vec!["only".to_string()]),
            ..task_request(project.id, owner, "Checklist")
        })
        .unwrap();

    let missing = Uuid::new_v4();
    let err = store.update_subtask(task.id, missing, true).unwrap_err();
    assert_eq!(err, StoreError::SubtaskNotFound(missing));
    assert_eq!(store.get_task(task.id).unwrap().subtasks, task.subtasks);
}

#[test]
fn task_comments_append_in_order() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "Board")).unwrap();
    let task = store.create_task(task_request(project.id, owner, "Task")).unwrap();

    store.add_task_comment(task.id, owner, "first".to_string()).unwrap();
    store.add_task_comment(task.id, owner, "second".to_string()).unwrap();

    let comments = &store.get_task(task.id).unwrap().comments;
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text, "first");
    assert_eq!(comments[1].text, "second");
}

#[test]
fn workspace_stats_count_tasks_by_status() {
    let (mut store, owner) = store_with_user();
    let project = store.create_project(project_request(owner, "Board")).unwrap();
    store.create_task(task_request(project.id, owner, "a")).unwrap();
    let b = store.create_task(task_request(project.id, owner, "b")).unwrap();
    store
        .update_task(
            b.id,
            UpdateTaskRequest {
                status: Some(TaskStatus::Completed),
                ..Default::default()
            },
        )
        .unwrap();

    let stats = store.workspace_stats();
    assert_eq!(stats.total_projects, 1);
    assert_eq!(stats.active_projects, 1);
    assert_eq!(stats.tasks.todo, 1);
    assert_eq!(stats.tasks.completed, 1);
    assert_eq!(stats.tasks.completion_pct, 50.0);

    let per_project = store.project_stats(project.id).unwrap();
    assert_eq!(per_project.tasks.completed, 1);
}

#[test]
fn duplicate_email_is_rejected() {
    let (mut store, _) = store_with_user();
    let err = store
        .register_user(CreateUserRequest {
            name: "Duplicate".to_string(),
            email: "STUDENT@example.edu".to_string(),
            role: UserRole::Student,
            avatar_color: None,
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::InvalidArgument(_)));
}

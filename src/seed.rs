// src/seed.rs

//! The demo workspace every fresh process starts from. Everything goes in
//! through the public store operations so the usual invariants hold.

use chrono::{Duration, Utc};
use log::info;

use crate::chat::SendMessageRequest;
use crate::document::CreateDocumentRequest;
use crate::error::StoreResult;
use crate::models::task::TaskPriority;
use crate::models::UserRole;
use crate::project::CreateProjectRequest;
use crate::store::WorkspaceStore;
use crate::task::CreateTaskRequest;
use crate::user_management::CreateUserRequest;

pub fn install_demo_data(store: &mut WorkspaceStore) -> StoreResult<()> {
    let elena = store.register_user(CreateUserRequest {
        name: "Dr. Elena Vasquez".to_string(),
        email: "elena.vasquez@university.edu".to_string(),
        role: UserRole::Instructor,
        avatar_color: Some("#8b5cf6".to_string()),
    })?;
    let maya = store.register_user(CreateUserRequest {
        name: "Maya Patel".to_string(),
        email: "maya.patel@student.university.edu".to_string(),
        role: UserRole::Student,
        avatar_color: Some("#3b82f6".to_string()),
    })?;
    let james = store.register_user(CreateUserRequest {
        name: "James Okafor".to_string(),
        email: "james.okafor@student.university.edu".to_string(),
        role: UserRole::Student,
        avatar_color: Some("#10b981".to_string()),
    })?;
    let sofia = store.register_user(CreateUserRequest {
        name: "Sofia Lindqvist".to_string(),
        email: "sofia.lindqvist@student.university.edu".to_string(),
        role: UserRole::Student,
        avatar_color: Some("#f59e0b".to_string()),
    })?;

    // -- Machine Learning Study Group ---------------------------------------

    let ml = store.create_project(CreateProjectRequest {
        name: "Machine Learning Study Group".to_string(),
        owner_id: maya.id,
        description: Some(
            "Weekly notes, problem sets and paper discussions for the ML course".to_string(),
        ),
        color: Some("#3b82f6".to_string()),
        icon: Some("🧠".to_string()),
        status: None,
        members: Some(vec![maya.id, james.id, sofia.id, elena.id]),
        tags: Some(vec!["machine-learning".to_string(), "study-group".to_string()]),
    })?;

    store.create_document(CreateDocumentRequest {
        project_id: ml.id,
        title: "Week 1 - Introduction to Neural Networks".to_string(),
        created_by: maya.id,
        content: Some(
            "Perceptrons, activation functions and why depth matters.\n\n\
             A neural network is a stack of linear maps with non-linearities \
             in between; training adjusts the weights by backpropagation. \
             Key terms for the quiz: sigmoid, ReLU, hidden layer, loss \
             surface, gradient."
                .to_string(),
        ),
        doc_type: None,
        tags: Some(vec!["neural-networks".to_string(), "notes".to_string()]),
    })?;
    let gradient_notes = store.create_document(CreateDocumentRequest {
        project_id: ml.id,
        title: "Gradient Descent Cheat Sheet".to_string(),
        created_by: james.id,
        content: Some(
            "Batch vs. stochastic vs. mini-batch; learning-rate schedules; \
             momentum and Adam in two lines each."
                .to_string(),
        ),
        doc_type: None,
        tags: Some(vec!["optimization".to_string()]),
    })?;
    store.add_document_comment(
        gradient_notes.id,
        elena.id,
        "Nice summary — add a line on when Adam's bias correction matters.".to_string(),
    )?;

    let reading_task = store.create_task(CreateTaskRequest {
        project_id: ml.id,
        title: "Read chapter 4 before Thursday".to_string(),
        created_by: maya.id,
        description: Some("Covers convolutional layers; quiz on Friday.".to_string()),
        status: None,
        priority: Some(TaskPriority::High),
        due_date: Some(Utc::now() + Duration::days(3)),
        assignee_id: Some(james.id),
        tags: Some(vec!["reading".to_string()]),
        subtasks: Some(vec![
            "Sections 4.1-4.3".to_string(),
            "Sections 4.4-4.6".to_string(),
            "Exercises 1-5".to_string(),
        ]),
    })?;
    store.add_task_comment(
        reading_task.id,
        james.id,
        "Started on 4.1, the pooling section is short.".to_string(),
    )?;
    store.create_task(CreateTaskRequest {
        project_id: ml.id,
        title: "Summarize the AlexNet paper".to_string(),
        created_by: sofia.id,
        description: None,
        status: None,
        priority: None,
        due_date: Some(Utc::now() + Duration::days(7)),
        assignee_id: Some(sofia.id),
        tags: Some(vec!["paper".to_string()]),
        subtasks: None,
    })?;

    let standup = store.send_message(SendMessageRequest {
        project_id: ml.id,
        channel_id: "general".to_string(),
        user_id: maya.id,
        content: "Who is taking notes in tomorrow's session?".to_string(),
    })?;
    store.add_reaction(standup.id, "👍", james.id)?;
    store.add_reaction(standup.id, "👍", sofia.id)?;
    store.send_message(SendMessageRequest {
        project_id: ml.id,
        channel_id: "general".to_string(),
        user_id: james.id,
        content: "I can — will post them to the Week 1 doc.".to_string(),
    })?;

    // -- Algorithms Problem Sets --------------------------------------------

    let algo = store.create_project(CreateProjectRequest {
        name: "Algorithms Problem Sets".to_string(),
        owner_id: james.id,
        description: Some("Shared solutions and complexity write-ups".to_string()),
        color: Some("#10b981".to_string()),
        icon: Some("📐".to_string()),
        status: None,
        members: Some(vec![james.id, maya.id]),
        tags: Some(vec!["algorithms".to_string()]),
    })?;
    store.create_document(CreateDocumentRequest {
        project_id: algo.id,
        title: "Big-O Reference".to_string(),
        created_by: james.id,
        content: Some(
            "Common recurrences and their closed forms; master theorem cases \
             with one example each."
                .to_string(),
        ),
        doc_type: None,
        tags: Some(vec!["complexity".to_string(), "reference".to_string()]),
    })?;
    store.create_task(CreateTaskRequest {
        project_id: algo.id,
        title: "Problem set 3, question 2".to_string(),
        created_by: james.id,
        description: Some("Dynamic programming on trees.".to_string()),
        status: None,
        priority: Some(TaskPriority::Medium),
        due_date: Some(Utc::now() + Duration::days(5)),
        assignee_id: Some(maya.id),
        tags: None,
        subtasks: Some(vec!["Recurrence".to_string(), "Proof of correctness".to_string()]),
    })?;
    store.send_message(SendMessageRequest {
        project_id: algo.id,
        channel_id: "general".to_string(),
        user_id: maya.id,
        content: "Pushed a first attempt at question 2 to the doc.".to_string(),
    })?;

    info!(
        "Demo workspace seeded: {} users, {} projects, {} documents, {} tasks, {} messages",
        store.list_users().len(),
        store.list_projects().len(),
        store.list_documents().len(),
        store.list_tasks().len(),
        store.list_messages().len()
    );
    Ok(())
}

// src/main.rs

use env_logger::Env;
use log::info;

use studyspace::chat::SendMessageRequest;
use studyspace::config::Config;
use studyspace::WorkspaceStore;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = Config::from_env();
    let mut store = if config.seed_demo_data {
        WorkspaceStore::with_demo_data()?
    } else {
        WorkspaceStore::new()
    };
    store = store.with_lock_ttl(config.lock_ttl());

    println!("StudySpace workspace ready (in-memory, resets on restart)");

    let results = store.search_workspace("neural");
    println!("Search 'neural': {} results", results.total_results);
    for doc in &results.documents {
        println!("  document: {} (v{})", doc.title, doc.version);
    }

    let first_user = store.list_users().first().cloned();
    let first_project = store.list_projects().first().cloned();
    if let (Some(user), Some(project)) = (first_user, first_project) {
        let message = store.send_message(SendMessageRequest {
            project_id: project.id,
            channel_id: config.default_channel.clone(),
            user_id: user.id,
            content: "Standup: who is taking the gradient descent summary?".to_string(),
        })?;
        store.add_reaction(message.id, "👍", user.id)?;
        println!(
            "Posted to #{} in '{}' as {}",
            config.default_channel, project.name, user.name
        );

        let stats = store.workspace_stats();
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    info!("Workspace demo finished");
    Ok(())
}

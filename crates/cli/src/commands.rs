//! Command handlers
//!
//! Each handler loads what its screen needs through the shared client,
//! renders it to stdout and persists the session when it changes.

use anyhow::Result;
use futures::future::try_join_all;
use tracing::info;

use taskbox_client::RestClient;
use taskbox_core::account::{AccountRepository, Credentials, Registration, UserId};
use taskbox_core::category::{Category, CategoryBoard, CategoryRepository, NewCategory, SortMode};
use taskbox_core::session::{FileSessionStore, Session, SessionStore};
use taskbox_core::task::{CategoryTasks, NewTask, Task, TaskRepository, TrashView};
use taskbox_core::Error;

use crate::cli::Command;

pub struct App {
    client: RestClient,
    sessions: FileSessionStore,
}

impl App {
    pub fn new(client: RestClient, sessions: FileSessionStore) -> Self {
        Self { client, sessions }
    }

    pub async fn run(&self, command: Command) -> Result<()> {
        match command {
            Command::Register {
                username,
                email,
                password,
            } => {
                let registration = Registration {
                    username,
                    email: email.clone(),
                    password,
                };
                let user = self.client.register(registration).await?;
                self.sign_in(user, email).await
            }
            Command::Login { email, password } => {
                let user = self
                    .client
                    .login(Credentials::new(email.clone(), password))
                    .await?;
                self.sign_in(user, email).await
            }
            Command::Logout => {
                if self.sessions.clear().await? {
                    println!("Signed out");
                } else {
                    println!("No saved session");
                }
                Ok(())
            }
            Command::Categories { sort, next_sort } => self.categories(sort, next_sort).await,
            Command::AddCategory { name, icon } => {
                let session = self.session().await?;
                let mut category = NewCategory::new(name);
                if let Some(icon) = icon {
                    category = category.with_icon(icon);
                }
                let created = self
                    .client
                    .create_category(session.user_id, category)
                    .await?;
                println!("Created {}", format_category(&created));
                Ok(())
            }
            Command::Tasks { category } => {
                let session = self.session().await?;
                let view = CategoryTasks::load(&self.client, session.user_id, category).await?;
                print_tasks(view.category(), view.tasks());
                Ok(())
            }
            Command::Add {
                category,
                title,
                description,
            } => {
                let session = self.session().await?;
                self.client
                    .create_task(session.user_id, NewTask::new(title, description, category))
                    .await?;
                println!("Task added");
                Ok(())
            }
            Command::Delete { category, id } => {
                let session = self.session().await?;
                let mut view =
                    CategoryTasks::load(&self.client, session.user_id, category).await?;
                let pair = view.delete(&self.client, session.user_id, id).await?;
                println!(
                    "Moved tasks {} and {} to the trash",
                    pair.task_id, pair.paired_id
                );
                print_tasks(view.category(), view.tasks());
                Ok(())
            }
            Command::Trash => {
                let session = self.session().await?;
                let trash = TrashView::load(&self.client, session.user_id).await?;
                print_tasks("Trash", trash.tasks());
                Ok(())
            }
            Command::Restore { id } => {
                let session = self.session().await?;
                let mut trash = TrashView::load(&self.client, session.user_id).await?;
                trash.restore(&self.client, session.user_id, id).await?;
                println!("Restored task {}", id);
                Ok(())
            }
            Command::Purge { id } => {
                let session = self.session().await?;
                let mut trash = TrashView::load(&self.client, session.user_id).await?;
                trash.purge(&self.client, session.user_id, id).await?;
                println!("Permanently deleted task {}", id);
                Ok(())
            }
        }
    }

    /// The saved session, or `Unauthenticated`
    async fn session(&self) -> taskbox_core::Result<Session> {
        self.sessions.load().await?.ok_or(Error::Unauthenticated)
    }

    async fn sign_in(&self, user: UserId, email: String) -> Result<()> {
        // Keep the sort mode of a previous session on this device
        let sort_mode = self
            .sessions
            .load()
            .await?
            .map(|s| s.sort_mode)
            .unwrap_or_default();
        self.sessions
            .save(Session::new(user, email).with_sort_mode(sort_mode))
            .await?;
        info!("Session saved to {:?}", self.sessions.path());
        println!("Signed in as user {}", user);
        Ok(())
    }

    async fn categories(&self, sort: Option<SortMode>, next_sort: bool) -> Result<()> {
        let session = self.session().await?;
        let user = session.user_id;

        let custom = self.client.list_categories(user).await?;
        let mut board = CategoryBoard::with_custom(sort.unwrap_or(session.sort_mode), custom);
        if next_sort {
            board.cycle_sort();
        }
        if board.mode() != session.sort_mode {
            let mode = board.mode();
            self.sessions.save(session.with_sort_mode(mode)).await?;
        }

        // The `All` list holds the mirror rows, so it is counted like any other
        let names: Vec<String> = board
            .ordered()
            .iter()
            .map(|c| c.display_name().to_string())
            .collect();
        let lists =
            try_join_all(names.iter().map(|name| self.client.list_tasks(user, name))).await?;
        let tasks: Vec<Task> = lists.into_iter().flatten().collect();
        board.refresh_counts(&tasks);

        println!("Sorted {}", board.mode());
        for category in board.ordered() {
            println!("{}", format_category(&category));
        }
        Ok(())
    }
}

fn format_category(category: &Category) -> String {
    let id = category
        .id
        .map(|id| format!("#{}", id))
        .unwrap_or_else(|| "-".to_string());
    format!(
        "{:>5}  {:<20} {:>3} tasks",
        id,
        category.display_name(),
        category.task_count
    )
}

fn format_task(task: &Task) -> String {
    let mut line = format!("{:>5}  {}: {}", task.id, task.title, task.description);
    if let Some(deleted_at) = task.deleted_at {
        line.push_str(&format!(" (deleted {})", deleted_at.format("%Y-%m-%d %H:%M")));
    }
    line
}

fn print_tasks(heading: &str, tasks: &[Task]) {
    println!("{} ({})", heading, tasks.len());
    for task in tasks {
        println!("{}", format_task(task));
    }
}

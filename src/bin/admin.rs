//! CLI administration tool for student-registry.
//!
//! Provides commands for inspecting and removing student records and for
//! checking the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all students
//! cargo run --bin admin -- student list
//!
//! # Show one student
//! cargo run --bin admin -- student show 1
//!
//! # Delete a student (asks for confirmation)
//! cargo run --bin admin -- student delete 1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use student_registry::application::services::StudentService;
use student_registry::domain::entities::Student;
use student_registry::infrastructure::persistence::PgStudentRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing student-registry.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and remove student records
    Student {
        #[command(subcommand)]
        action: StudentAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Student subcommands.
#[derive(Subcommand)]
enum StudentAction {
    /// List all students
    List,

    /// Show a single student
    Show {
        /// Student id
        id: i64,
    },

    /// Delete a student
    Delete {
        /// Student id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Student { action } => handle_student_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches student commands through the same service the HTTP API uses.
async fn handle_student_action(action: StudentAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgStudentRepository::new(Arc::new(pool.clone())));
    let service = StudentService::new(repo);

    match action {
        StudentAction::List => list_students(&service).await?,
        StudentAction::Show { id } => show_student(&service, id).await?,
        StudentAction::Delete { id, yes } => delete_student(&service, id, yes).await?,
    }

    Ok(())
}

/// Prints all students as a table.
///
/// # Output Format
///
/// ```text
/// Students
///
///   ID     Name                           Email
///   ──────────────────────────────────────────────────────────────────────
///   1      Alice                          a@x.com
/// ```
async fn list_students(service: &StudentService) -> Result<()> {
    println!("{}", "Students".bright_blue().bold());
    println!();

    let students = service
        .list_students()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list students: {}", e))?;

    if students.is_empty() {
        println!("{}", "  No students found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<30} {}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Email".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for student in &students {
        print_row(student);
    }

    println!();
    println!(
        "  Total: {}",
        students.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints one student; a missing id is an error, as for `delete`.
async fn show_student(service: &StudentService, id: i64) -> Result<()> {
    let student = service
        .require_student(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  ID:    {}", student.id.to_string().bright_black());
    println!("  Name:  {}", student.name.cyan());
    println!("  Email: {}", student.email.cyan());

    Ok(())
}

/// Deletes a student after confirmation (default: No).
async fn delete_student(service: &StudentService, id: i64, skip_confirm: bool) -> Result<()> {
    let student = service
        .require_student(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_row(&student);
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this student?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_student(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete student: {}", e))?;

    println!("{}", "Student deleted".green().bold());

    Ok(())
}

fn print_row(student: &Student) {
    println!(
        "  {:<6} {:<30} {}",
        student.id.to_string().bright_black(),
        student.name.cyan(),
        student.email
    );
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let students_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM students")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Students:   {}",
                students_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

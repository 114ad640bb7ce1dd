//! `nmp` - nonprofit board operations console

use anyhow::{bail, Context};
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand};
use nmp_app::{App, NewDocument, NewMeeting};
use nmp_client::{ApiClient, ClientConfig, FileSessionStore};
use nmp_domain::{
    format_file_size, Credentials, DeadlineId, DeadlineStatus, DocumentCategory, MeetingId,
    MeetingStatus, MeetingType,
};
use nmp_meeting::TemplateKind;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "nmp", version, about = "Nonprofit board operations console")]
struct Cli {
    /// Backend base URL (overrides NMP_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Directory holding the persisted session
    #[arg(long, global = true, default_value = ".nmp")]
    session_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and persist the session
    Login {
        /// Login email
        email: String,
        /// Password
        #[arg(long)]
        password: String,
    },
    /// Log out and clear the persisted session
    Logout,
    /// Check backend health
    Health,
    /// Show the dashboard
    Dashboard,
    /// Meeting operations
    Meetings {
        #[command(subcommand)]
        action: MeetingsAction,
    },
    /// Document operations
    Documents {
        #[command(subcommand)]
        action: DocumentsAction,
    },
    /// Board roster
    Board {
        /// Search text
        #[arg(long, default_value = "")]
        search: String,
    },
    /// Compliance operations
    Compliance {
        #[command(subcommand)]
        action: ComplianceAction,
    },
}

#[derive(Subcommand)]
enum MeetingsAction {
    /// List meetings
    List {
        /// Search text
        #[arg(long, default_value = "")]
        search: String,
        /// Status filter: scheduled, completed, cancelled
        #[arg(long)]
        status: Option<String>,
    },
    /// Schedule a meeting
    Create {
        /// Meeting title
        #[arg(long)]
        title: String,
        /// Meeting type: regular, special, committee, annual
        #[arg(long, default_value = "regular")]
        meeting_type: String,
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Start time (HH:MM:SS)
        #[arg(long)]
        time: NaiveTime,
        /// Duration in minutes
        #[arg(long, default_value_t = 60)]
        duration: u32,
        /// Quorum requirement
        #[arg(long, default_value_t = 0)]
        quorum: u32,
        /// Location
        #[arg(long)]
        location: Option<String>,
    },
    /// Build an agenda from a template and attach it
    Agenda {
        /// Meeting id
        id: MeetingId,
        /// Template: regular, special, annual
        #[arg(long, default_value = "regular")]
        template: String,
        /// Author recorded on the agenda
        #[arg(long)]
        author: String,
    },
}

#[derive(Subcommand)]
enum DocumentsAction {
    /// List documents
    List {
        /// Search text
        #[arg(long, default_value = "")]
        search: String,
        /// Category filter: legal, minutes, financial, policies, forms, other
        #[arg(long)]
        category: Option<String>,
    },
    /// Register a document
    Add {
        /// Document title
        #[arg(long)]
        title: String,
        /// Category
        #[arg(long, default_value = "other")]
        category: String,
        /// File name
        #[arg(long)]
        file_name: String,
        /// File size in bytes
        #[arg(long, default_value_t = 0)]
        file_size: u64,
        /// MIME type
        #[arg(long, default_value = "application/octet-stream")]
        file_type: String,
    },
}

#[derive(Subcommand)]
enum ComplianceAction {
    /// List deadlines
    List {
        /// Status filter: pending, in_progress, completed, overdue
        #[arg(long)]
        status: Option<String>,
    },
    /// Mark a deadline complete
    Complete {
        /// Deadline id
        id: DeadlineId,
        /// Who completed it
        #[arg(long)]
        by: String,
    },
}

fn parse_meeting_type(s: &str) -> anyhow::Result<MeetingType> {
    Ok(match s {
        "regular" => MeetingType::Regular,
        "special" => MeetingType::Special,
        "committee" => MeetingType::Committee,
        "annual" => MeetingType::Annual,
        other => bail!("unknown meeting type: {other}"),
    })
}

fn parse_meeting_status(s: &str) -> anyhow::Result<MeetingStatus> {
    Ok(match s {
        "scheduled" => MeetingStatus::Scheduled,
        "completed" => MeetingStatus::Completed,
        "cancelled" => MeetingStatus::Cancelled,
        other => bail!("unknown meeting status: {other}"),
    })
}

fn parse_category(s: &str) -> anyhow::Result<DocumentCategory> {
    Ok(match s {
        "legal" => DocumentCategory::Legal,
        "minutes" => DocumentCategory::Minutes,
        "financial" => DocumentCategory::Financial,
        "policies" => DocumentCategory::Policies,
        "forms" => DocumentCategory::Forms,
        "other" => DocumentCategory::Other,
        other => bail!("unknown document category: {other}"),
    })
}

fn parse_deadline_status(s: &str) -> anyhow::Result<DeadlineStatus> {
    Ok(match s {
        "pending" => DeadlineStatus::Pending,
        "in_progress" => DeadlineStatus::InProgress,
        "completed" => DeadlineStatus::Completed,
        "overdue" => DeadlineStatus::Overdue,
        other => bail!("unknown deadline status: {other}"),
    })
}

fn parse_template(s: &str) -> anyhow::Result<TemplateKind> {
    Ok(match s {
        "regular" => TemplateKind::Regular,
        "special" => TemplateKind::Special,
        "annual" => TemplateKind::Annual,
        other => bail!("unknown template: {other}"),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env();
    if let Some(api_url) = &cli.api_url {
        config = config.with_base_url(api_url);
    }
    let store = Arc::new(FileSessionStore::new(&cli.session_dir));
    let client = ApiClient::new(config, store);
    let mut app = App::new(client);

    match cli.command {
        Command::Login { email, password } => {
            let session = app
                .login(&Credentials::new(email, password))
                .await
                .context("login failed")?;
            println!("Logged in as {} ({})", session.user.name, session.user.role);
        }
        Command::Logout => {
            app.logout().await.context("logout failed")?;
            println!("Logged out");
        }
        Command::Health => {
            let health = app.client().health().await.context("health check failed")?;
            println!("{health}");
        }
        Command::Dashboard => {
            app.refresh_all().await;
            let stats = &app.dashboard.data().stats;
            match &stats.next_meeting {
                Some(meeting) => println!(
                    "Next meeting:    {} on {} at {}",
                    meeting.title, meeting.scheduled_date, meeting.scheduled_time
                ),
                None => println!("Next meeting:    none scheduled"),
            }
            println!("Active directors: {}", stats.active_directors);
            println!("Documents:        {}", stats.total_documents);
            println!("Compliance:       {}%", stats.compliance_percentage);
        }
        Command::Meetings { action } => match action {
            MeetingsAction::List { search, status } => {
                let client = app.client().clone();
                app.meetings.refresh(&client).await?;
                app.meetings.set_search(search);
                let status = status.as_deref().map(parse_meeting_status).transpose()?;
                app.meetings.set_status_filter(status);
                for meeting in app.meetings.filtered() {
                    println!(
                        "{}  {}  {} {}  [{:?}]",
                        meeting.id,
                        meeting.title,
                        meeting.scheduled_date,
                        meeting.scheduled_time,
                        meeting.status
                    );
                }
            }
            MeetingsAction::Create {
                title,
                meeting_type,
                date,
                time,
                duration,
                quorum,
                location,
            } => {
                let mut form = NewMeeting::new(title, parse_meeting_type(&meeting_type)?);
                form.scheduled_date = Some(date);
                form.scheduled_time = Some(time);
                form.duration_minutes = duration;
                form.quorum_required = quorum;
                form.location = location;

                let client = app.client().clone();
                let created = app
                    .meetings
                    .create(&client, &form, Utc::now())
                    .await?;
                println!("Created meeting {} ({})", created.title, created.id);
            }
            MeetingsAction::Agenda {
                id,
                template,
                author,
            } => {
                let client = app.client().clone();
                app.meetings.refresh(&client).await?;
                let mut builder = app.meetings.begin_agenda(id)?;
                builder.load_template(parse_template(&template)?);
                let agenda = builder.finish(author, Utc::now())?;
                let total = agenda.total_duration();
                app.meetings.save_agenda(&client, id, agenda).await?;
                println!("Agenda attached ({total} minutes planned)");
            }
        },
        Command::Documents { action } => match action {
            DocumentsAction::List { search, category } => {
                let client = app.client().clone();
                app.documents.refresh(&client).await?;
                app.documents.set_search(search);
                let category = category.as_deref().map(parse_category).transpose()?;
                app.documents.set_category_filter(category);
                for document in app.documents.filtered() {
                    println!(
                        "{}  {}  v{}  {}  [{}]",
                        document.id,
                        document.title,
                        document.version,
                        format_file_size(document.file_size),
                        document.category.label()
                    );
                }
            }
            DocumentsAction::Add {
                title,
                category,
                file_name,
                file_size,
                file_type,
            } => {
                let mut form = NewDocument::new(title, parse_category(&category)?, file_name);
                form.file_size = file_size;
                form.file_type = file_type;

                let client = app.client().clone();
                let created = app
                    .documents
                    .create(&client, &form)
                    .await?;
                println!("Registered document {} ({})", created.title, created.id);
            }
        },
        Command::Board { search } => {
            let client = app.client().clone();
            app.board.refresh(&client).await?;
            app.board.set_search(search);
            let today = Utc::now().date_naive();
            for member in app.board.filtered() {
                println!(
                    "{}  {}  {}  term ends {}  [{}]",
                    member.id,
                    member.name,
                    member.role,
                    member.term_end,
                    member.term_status(today).label()
                );
            }
            let counts = app.board.term_status_counts(today);
            println!(
                "{} active, {} expiring, {} expired",
                counts.active, counts.expiring, counts.expired
            );
        }
        Command::Compliance { action } => match action {
            ComplianceAction::List { status } => {
                let client = app.client().clone();
                app.compliance.refresh(&client).await?;
                let status = status.as_deref().map(parse_deadline_status).transpose()?;
                app.compliance.set_status_filter(status);
                let today = Utc::now().date_naive();
                for deadline in app.compliance.filtered() {
                    println!(
                        "{}  {}  due {}  [{:?}]",
                        deadline.id,
                        deadline.title,
                        deadline.due_date,
                        deadline.classified_status(today)
                    );
                }
                let metrics = app.compliance.metrics(today);
                println!(
                    "{} total, {} completed, {} overdue, {} due within 30 days",
                    metrics.total, metrics.completed, metrics.overdue, metrics.upcoming
                );
            }
            ComplianceAction::Complete { id, by } => {
                let client = app.client().clone();
                app.compliance.refresh(&client).await?;
                let next_due = app.compliance.complete(&client, id, &by).await?;
                println!("Deadline completed");
                if let Some(next) = next_due {
                    println!("Recurring deadline; next cycle due {next}");
                }
            }
        },
    }

    Ok(())
}

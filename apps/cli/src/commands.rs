use std::fmt::Write as _;

use clap::{Args, Parser, Subcommand};
use permitdesk_application::{ApiServices, GateState, PageMeta};
use permitdesk_core::{AppError, AppResult};
use permitdesk_domain::{
    ApprovalInput, LoginInput, Pagination, PermitFilter, PermitSearch, Task, TaskFilter,
};

/// PermitDesk API client.
#[derive(Debug, Parser)]
#[command(name = "permitdesk", version, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Sign in and store the session
    Login {
        username: String,
        password: String,
        /// Domain to sign in to
        domain_id: Option<i64>,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in user and domain
    #[command(name = "whoami")]
    WhoAmI,
    /// Change the active domain
    SwitchDomain { domain_id: i64 },
    /// Evaluate the route guard for a path
    Gate {
        path: String,
        /// Treat the path as a guest-only page
        #[arg(long)]
        public: bool,
    },
    /// List permits
    Permits { page: Option<u32> },
    /// Show one permit
    Permit { id: i64 },
    /// Search permits by free text
    PermitSearch {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// List tasks
    Tasks { page: Option<u32> },
    /// Show one task by code
    Task { code: String },
    /// Approve the pending step of a task
    Approve(Decision),
    /// Reject the pending step of a task
    Reject(Decision),
    /// List notifications
    Notifications { page: Option<u32> },
    /// Count unread notifications
    Unread,
    /// Mark notifications as read
    MarkRead {
        #[arg(required_unless_present = "all")]
        notification_ids: Vec<i64>,
        /// Mark every notification as read
        #[arg(long, conflicts_with = "notification_ids")]
        all: bool,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct Decision {
    pub task_id: i64,
    /// Note for the approver log
    pub note: Vec<String>,
}

impl Decision {
    fn note(self) -> Option<String> {
        (!self.note.is_empty()).then(|| self.note.join(" "))
    }
}

pub async fn run(command: Command, services: &ApiServices) -> AppResult<String> {
    match command {
        Command::Login {
            username,
            password,
            domain_id,
        } => {
            let login = services
                .auth
                .login(LoginInput {
                    username,
                    password,
                    domain_id,
                })
                .await?;
            let domain = login
                .default_domain
                .map(|domain| format!(" in {} ({})", domain.name, domain.code))
                .unwrap_or_default();

            Ok(format!("signed in as {}{domain}", login.user.username))
        }
        Command::Logout => {
            services.auth.logout().await?;
            Ok("signed out".to_owned())
        }
        Command::WhoAmI => {
            let Some(user) = services.auth.stored_user().await? else {
                return Ok("not signed in".to_owned());
            };
            let mut output = format!("{} <{}> ({})", user.full_name, user.email, user.username);
            if let Some(role) = user.role.as_ref() {
                let _ = write!(output, "\nrole: {}", role.name);
            }
            if let Some(domain) = services.auth.stored_domain().await? {
                let _ = write!(output, "\ndomain: {} ({})", domain.name, domain.code);
            }

            Ok(output)
        }
        Command::SwitchDomain { domain_id } => {
            let switched = services.auth.switch_domain(domain_id).await?;
            let role = switched
                .current_role
                .map(|role| format!(" as {}", role.name))
                .unwrap_or_default();

            Ok(format!(
                "switched to {} ({}){role}",
                switched.current_domain.name, switched.current_domain.code
            ))
        }
        Command::Gate { path, public } => {
            let mut session = services.gate.session(!public, path);
            Ok(match session.settle().await? {
                GateState::Redirecting(route) => format!("redirect {route}"),
                GateState::Settled | GateState::Checking => "settled".to_owned(),
            })
        }
        Command::Permits { page } => {
            let response = services
                .permits
                .get_all(&PermitFilter {
                    page,
                    ..PermitFilter::default()
                })
                .await?;

            Ok(render_list(
                response.data.iter().map(|permit| {
                    format!(
                        "{:>6}  {:<20}  {:<10}  expires {}  {}",
                        permit.id, permit.permit_no, permit.status, permit.expiry_date, permit.name
                    )
                }),
                response.meta.as_ref(),
            ))
        }
        Command::Permit { id } => {
            let permit = services.permits.get_by_id(id).await?;
            let mut output = format!(
                "{} ({})\nstatus: {}\neffective: {} to {}",
                permit.name, permit.permit_no, permit.status, permit.effective_date, permit.expiry_date
            );
            if let Some(permit_type) = permit.permit_type.as_ref() {
                let _ = write!(output, "\ntype: {}", permit_type.name);
            }
            if let Some(person) = permit.responsible_person.as_ref() {
                let _ = write!(output, "\nresponsible: {}", person.full_name);
            }

            Ok(output)
        }
        Command::PermitSearch { query } => {
            let response = services
                .permits
                .search(&PermitSearch {
                    q: query.join(" "),
                    ..PermitSearch::default()
                })
                .await?;

            Ok(render_list(
                response
                    .data
                    .iter()
                    .map(|permit| format!("{:>6}  {:<20}  {}", permit.id, permit.permit_no, permit.name)),
                response.meta.as_ref(),
            ))
        }
        Command::Tasks { page } => {
            let response = services
                .tasks
                .get_all(&TaskFilter {
                    page,
                    ..TaskFilter::default()
                })
                .await?;

            Ok(render_list(response.data.iter().map(task_line), response.meta.as_ref()))
        }
        Command::Task { code } => {
            let task = services.tasks.get_by_code(&code).await?;
            let mut output = task_line(&task);
            let description = task.description.as_deref().unwrap_or_default();
            if !description.is_empty() {
                let _ = write!(output, "\n{description}");
            }
            for approval in &task.approval_tasks {
                let approver = approval
                    .approved_by_user
                    .as_ref()
                    .or(approval.approver.as_ref())
                    .map(|user| user.full_name.as_str())
                    .unwrap_or("-");
                let _ = write!(
                    output,
                    "\n  step {} [{}] {approver}",
                    approval.sequence,
                    approval
                        .approval_status
                        .as_ref()
                        .map(|status| status.name.as_str())
                        .unwrap_or("-")
                );
            }

            Ok(output)
        }
        Command::Approve(decision) => decide(services, decision, true).await,
        Command::Reject(decision) => decide(services, decision, false).await,
        Command::Notifications { page } => {
            let response = services
                .notifications
                .get_all(&Pagination { page, limit: None })
                .await?;

            Ok(render_list(
                response.data.iter().map(|notification| {
                    format!(
                        "{:>6} {} {}: {}",
                        notification.id,
                        if notification.is_read { " " } else { "*" },
                        notification.title,
                        notification.message
                    )
                }),
                response.meta.as_ref(),
            ))
        }
        Command::Unread => {
            let count = services.notifications.unread_count().await?;
            Ok(format!("{count} unread notification(s)"))
        }
        Command::MarkRead { all: true, .. } => {
            services.notifications.mark_all_as_read().await?;
            Ok("marked all notifications as read".to_owned())
        }
        Command::MarkRead {
            notification_ids, ..
        } => {
            services
                .notifications
                .mark_as_read(&notification_ids)
                .await?;
            Ok(format!("marked {} notification(s) as read", notification_ids.len()))
        }
    }
}

async fn decide(services: &ApiServices, decision: Decision, approve: bool) -> AppResult<String> {
    let task_id = decision.task_id;
    let task = services.tasks.get_by_id(task_id).await?;
    let Some(step) = task.pending_approval() else {
        return Err(AppError::Validation(format!(
            "task {} has no pending approval step",
            task.code
        )));
    };
    let input = ApprovalInput {
        note: decision.note(),
    };
    if approve {
        services.tasks.approve(task_id, step.id, &input).await?;
    } else {
        services.tasks.reject(task_id, step.id, &input).await?;
    }

    Ok(format!(
        "{} step {} of task {}",
        if approve { "approved" } else { "rejected" },
        step.sequence,
        task.code
    ))
}

fn task_line(task: &Task) -> String {
    let status = task
        .workflow_status()
        .map(|status| format!("{status:?}"))
        .unwrap_or_else(|| "-".to_owned());
    let approval = task
        .approval_state()
        .map(|state| format!("{state:?}"))
        .unwrap_or_else(|| "-".to_owned());

    format!(
        "{:>6}  {:<16}  {:<12}  {:<10}  {}",
        task.id, task.code, status, approval, task.title
    )
}

fn render_list(lines: impl Iterator<Item = String>, meta: Option<&PageMeta>) -> String {
    let mut output = lines.collect::<Vec<_>>().join("\n");
    if output.is_empty() {
        output.push_str("no results");
    }
    if let Some(meta) = meta {
        let _ = write!(
            output,
            "\npage {} (limit {}, {} total)",
            meta.page, meta.limit, meta.total
        );
    }

    output
}

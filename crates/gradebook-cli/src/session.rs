//! The interactive session as a request/response interface.
//!
//! Commands come in as text lines, replies go out as rendered text. Nothing
//! here touches stdin or stdout, so the whole shell surface can be exercised
//! headlessly; the loop in `commands::shell` only moves lines in and replies
//! out.

use gradebook_core::model::{Identity, IdentityMode};
use gradebook_core::report::SummaryReport;
use gradebook_core::roster::Roster;

use crate::render;

/// A parsed operator request.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Register a student. The id is present in id mode, absent in name mode.
    Add { name: String, id: Option<u32> },
    /// Record a grade for an existing student.
    Grade { identity: Identity, value: f64 },
    /// Show one student's details.
    Show(Identity),
    /// List all students with their statistics.
    List,
    /// Print the summary report.
    Report,
    /// Print the summary report as JSON.
    Export,
    /// Remove a student.
    Remove(Identity),
    Help,
    Quit,
}

/// Parse one input line into a `Command`.
///
/// The identity mode decides how student keys are read: bare text (spaces
/// allowed) in name mode, a numeric id in id mode. Numeric parse failures are
/// shell-level errors and never reach the roster.
pub fn parse_command(line: &str, mode: IdentityMode) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word.to_ascii_lowercase().as_str() {
        "add" => parse_add(rest, mode),
        "grade" => parse_grade(rest, mode),
        "show" => Ok(Command::Show(parse_identity(rest, mode)?)),
        "remove" => Ok(Command::Remove(parse_identity(rest, mode)?)),
        "list" => Ok(Command::List),
        "report" => Ok(Command::Report),
        "export" => Ok(Command::Export),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "" => Err("empty command; try 'help'".to_string()),
        other => Err(format!("unknown command '{other}'; try 'help'")),
    }
}

fn parse_add(rest: &str, mode: IdentityMode) -> Result<Command, String> {
    match mode {
        IdentityMode::Name => {
            if rest.is_empty() {
                return Err("usage: add <name>".to_string());
            }
            Ok(Command::Add {
                name: rest.to_string(),
                id: None,
            })
        }
        IdentityMode::Id => {
            let (id_str, name) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "usage: add <id> <name>".to_string())?;
            let name = name.trim();
            if name.is_empty() {
                return Err("usage: add <id> <name>".to_string());
            }
            Ok(Command::Add {
                name: name.to_string(),
                id: Some(parse_id(id_str)?),
            })
        }
    }
}

fn parse_grade(rest: &str, mode: IdentityMode) -> Result<Command, String> {
    // The grade is the last token; everything before it names the student.
    let (who, value_str) = rest
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| "usage: grade <student> <value>".to_string())?;
    let value: f64 = value_str
        .parse()
        .map_err(|_| format!("'{value_str}' is not a number"))?;
    Ok(Command::Grade {
        identity: parse_identity(who.trim(), mode)?,
        value,
    })
}

fn parse_identity(s: &str, mode: IdentityMode) -> Result<Identity, String> {
    if s.is_empty() {
        return Err("expected a student".to_string());
    }
    match mode {
        IdentityMode::Name => Ok(Identity::Name(s.to_string())),
        IdentityMode::Id => Ok(Identity::Id(parse_id(s)?)),
    }
}

fn parse_id(s: &str) -> Result<u32, String> {
    s.parse().map_err(|_| format!("'{s}' is not a valid id"))
}

/// What the session hands back for one command.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub quit: bool,
}

impl Reply {
    fn msg(text: impl Into<String>) -> Self {
        Reply {
            text: text.into(),
            quit: false,
        }
    }
}

/// One interactive session.
///
/// The session is the roster's sole owner; every command runs to completion
/// on the calling thread before the next one is read.
pub struct Session {
    roster: Roster,
    mode: IdentityMode,
}

impl Session {
    pub fn new(mode: IdentityMode) -> Self {
        Self {
            roster: Roster::new(),
            mode,
        }
    }

    pub fn mode(&self) -> IdentityMode {
        self.mode
    }

    /// Parse and handle one input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match parse_command(line, self.mode) {
            Ok(command) => self.handle(command),
            Err(message) => Reply::msg(message),
        }
    }

    /// Execute a parsed command against the roster.
    ///
    /// Every failure comes back as a message; the session never aborts.
    pub fn handle(&mut self, command: Command) -> Reply {
        match command {
            Command::Add { name, id } => {
                let identity = match id {
                    Some(id) => Identity::Id(id),
                    None => Identity::Name(name.clone()),
                };
                match self.roster.add_student(identity, &name) {
                    Ok(()) => Reply::msg(format!("Added {name}.")),
                    Err(e) => Reply::msg(e.to_string()),
                }
            }
            Command::Grade { identity, value } => {
                match self.roster.add_grade_to(&identity, value) {
                    Ok(()) => Reply::msg(format!("Recorded {value} for {identity}.")),
                    Err(e) => Reply::msg(e.to_string()),
                }
            }
            Command::Show(identity) => match self.roster.find_student(&identity) {
                Some(student) => Reply::msg(render::student_details(student)),
                None => Reply::msg(format!("student '{identity}' not found")),
            },
            Command::List => Reply::msg(render::roster_table(&self.roster)),
            Command::Report => Reply::msg(SummaryReport::build(&self.roster).to_text()),
            Command::Export => {
                let report = SummaryReport::build(&self.roster);
                match serde_json::to_string_pretty(&report) {
                    Ok(json) => Reply::msg(json),
                    Err(e) => Reply::msg(format!("failed to serialize report: {e}")),
                }
            }
            Command::Remove(identity) => {
                if self.roster.remove_student(&identity) {
                    Reply::msg(format!("Removed {identity}."))
                } else {
                    Reply::msg(format!("student '{identity}' not found"))
                }
            }
            Command::Help => Reply::msg(help_text(self.mode)),
            Command::Quit => Reply {
                text: "Goodbye.".to_string(),
                quit: true,
            },
        }
    }
}

fn help_text(mode: IdentityMode) -> String {
    let (add, who) = match mode {
        IdentityMode::Name => ("add <name>", "<name>"),
        IdentityMode::Id => ("add <id> <name>", "<id>"),
    };
    let rows = [
        (add.to_string(), "register a student"),
        (format!("grade {who} <value>"), "record a grade (0-100)"),
        (format!("show {who}"), "one student's details"),
        ("list".to_string(), "all students"),
        ("report".to_string(), "class summary report"),
        ("export".to_string(), "summary report as JSON"),
        (format!("remove {who}"), "remove a student"),
        ("help".to_string(), "this text"),
        ("quit".to_string(), "exit"),
    ];

    let mut out = String::from("Commands:\n");
    for (cmd, what) in rows {
        out.push_str(&format!("  {cmd:<22} {what}\n"));
    }
    out
}

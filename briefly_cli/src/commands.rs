use std::str::FromStr;

pub const HELP: &str = "These commands are supported:
  signup <email> <password>   Create an account
  login <email> <password>    Log in
  logout                      Log out
  status                      Show whether you are logged in
  summarize <url>             Summarize a YouTube video (pasted text is fine)
  results                     Show the current summary
  save                        Save the current summary to history
  another                     Clear the current summary and start over
  history                     List saved summaries
  view <n>                    Re-open saved summary n
  delete <n>                  Delete saved summary n
  credits                     Show remaining credits
  help                        Display this text
  quit                        Exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Signup { email: String, password: String },
    Login { email: String, password: String },
    Logout,
    Status,
    Summarize(String),
    Results,
    Save,
    Another,
    History,
    /// 1-based position in the history list.
    View(usize),
    /// 1-based position in the history list.
    Delete(usize),
    Credits,
    Help,
    Quit,
}

fn parse_position(arg: &str) -> Result<usize, String> {
    match arg.trim().parse::<usize>() {
        Ok(0) => Err("Positions start at 1".to_string()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("Not a position: {:?}", arg.trim())),
    }
}

fn parse_credentials(rest: &str, usage: &str) -> Result<(String, String), String> {
    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(email), Some(password), None) => Ok((email.to_string(), password.to_string())),
        _ => Err(format!("Usage: {}", usage)),
    }
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match name.to_lowercase().as_str() {
            "signup" => {
                let (email, password) = parse_credentials(rest, "signup <email> <password>")?;
                Ok(Command::Signup { email, password })
            }
            "login" => {
                let (email, password) = parse_credentials(rest, "login <email> <password>")?;
                Ok(Command::Login { email, password })
            }
            "logout" => Ok(Command::Logout),
            "status" => Ok(Command::Status),
            "summarize" | "s" => {
                if rest.is_empty() {
                    Err("Usage: summarize <url>".to_string())
                } else {
                    Ok(Command::Summarize(rest.to_string()))
                }
            }
            "results" => Ok(Command::Results),
            "save" => Ok(Command::Save),
            "another" => Ok(Command::Another),
            "history" => Ok(Command::History),
            "view" => parse_position(rest).map(Command::View),
            "delete" => parse_position(rest).map(Command::Delete),
            "credits" => Ok(Command::Credits),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            "" => Err(String::new()),
            other => Err(format!("Unknown command {:?}. Type `help` for the list.", other)),
        }
    }
}

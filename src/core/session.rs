use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Who is acting in the current interaction. Passed explicitly to every
/// admin-only operation; there is no process-wide login flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    admin: bool,
}

impl Session {
    pub fn guest() -> Self {
        Self { admin: false }
    }

    /// Plain comparison against `admin_password`. With no password
    /// configured nobody can become admin.
    pub fn login(cfg: &Config, password: &str) -> AppResult<Self> {
        match &cfg.admin_password {
            Some(expected) if !expected.is_empty() && expected == password => {
                Ok(Self { admin: true })
            }
            _ => Err(AppError::AdminRequired),
        }
    }

    /// Admin session if a password was given and matches, guest otherwise.
    pub fn from_password(cfg: &Config, password: Option<&str>) -> AppResult<Self> {
        match password {
            Some(p) => Self::login(cfg, p),
            None => Ok(Self::guest()),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if self.admin {
            Ok(())
        } else {
            Err(AppError::AdminRequired)
        }
    }
}

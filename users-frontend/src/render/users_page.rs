use std::fmt::Display;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use minijinja::{context, Environment, Value};

use crate::error::Result;
use crate::models::user::UserRecord;

const TEMPLATE_NAME: &str = "users.html";

/// en-US `toLocaleString` layout, e.g. `1/5/2024, 2:03:09 PM`.
const LOCALE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub const INVALID_DATE: &str = "Invalid Date";

/// The users table page. Templates ending in `.html` are auto-escaped, so
/// user-supplied strings cannot inject markup.
pub struct UsersPage {
    env: Environment<'static>,
}

impl UsersPage {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        env.add_template(TEMPLATE_NAME, include_str!("../../templates/users.html"))?;
        Ok(Self { env })
    }

    pub fn render(&self, users: &[UserRecord]) -> Result<String> {
        let rows: Vec<Value> = users
            .iter()
            .map(|user| {
                context! {
                    username => user.username.as_deref().unwrap_or_default(),
                    email => user.email.as_deref().unwrap_or_default(),
                    // Generated here from digits and separators only.
                    created_at => Value::from_safe_string(format_timestamp(user.created_at.as_deref())),
                }
            })
            .collect();

        let template = self.env.get_template(TEMPLATE_NAME)?;
        Ok(template.render(context! { users => rows })?)
    }
}

/// Formats a backend timestamp in the server's local time zone.
pub fn format_timestamp(raw: Option<&str>) -> String {
    format_timestamp_in(raw, &Local)
}

fn format_timestamp_in<Tz>(raw: Option<&str>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return INVALID_DATE.to_string();
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(tz))
        .ok()
        // No offset means local time.
        .or_else(|| {
            NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .and_then(|naive| tz.from_local_datetime(&naive).earliest())
        });

    match parsed {
        Some(dt) => dt.format(LOCALE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

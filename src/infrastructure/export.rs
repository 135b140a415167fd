use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{Plan, User};

use super::errors::{InfraError, InfraResult};

pub const USERS_EXPORT_FILE: &str = "users.csv";
pub const PLANS_EXPORT_FILE: &str = "plans.json";

/// Column names of [`UserRow`], written by hand when there are no rows.
const USER_CSV_HEADER: [&str; 7] =
    ["id", "name", "email", "role", "status", "streams", "services"];

/// One flattened CSV row per user; services are joined with `;`.
#[derive(Debug, Serialize)]
struct UserRow<'a> {
    id: u32,
    name: &'a str,
    email: &'a str,
    role: &'static str,
    status: &'static str,
    streams: u32,
    services: String,
}

impl<'a> From<&'a User> for UserRow<'a> {
    fn from(user: &'a User) -> Self {
        Self {
            id: user.id.0,
            name: &user.name,
            email: &user.email,
            role: user.role.as_str(),
            status: user.status.as_str(),
            streams: user.streams,
            services: user
                .services
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(";"),
        }
    }
}

pub struct Exporter;

impl Exporter {
    /// Writes `users` as CSV into `dir` and returns the file path.
    pub fn export_users(users: &[&User], dir: &Path) -> InfraResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| InfraError::io(dir, e))?;
        let path = dir.join(USERS_EXPORT_FILE);

        let mut writer = csv::Writer::from_path(&path)?;
        if users.is_empty() {
            writer.write_record(USER_CSV_HEADER)?;
        }
        for user in users {
            writer.serialize(UserRow::from(*user))?;
        }
        writer.flush().map_err(|e| InfraError::io(&path, e))?;

        tracing::info!(path = %path.display(), rows = users.len(), "exported users");
        Ok(path)
    }

    /// Writes `plans` as pretty JSON into `dir` and returns the file path.
    ///
    /// JSON has no NaN, so an unreadable price is exported as `null`.
    pub fn export_plans(plans: &[Plan], dir: &Path) -> InfraResult<PathBuf> {
        fs::create_dir_all(dir).map_err(|e| InfraError::io(dir, e))?;
        let path = dir.join(PLANS_EXPORT_FILE);

        for plan in plans.iter().filter(|p| !p.price.is_finite()) {
            tracing::warn!(
                plan = %plan.id,
                name = %plan.name,
                "price is not a number, exported as null"
            );
        }

        let json = serde_json::to_string_pretty(plans)?;
        fs::write(&path, json).map_err(|e| InfraError::io(&path, e))?;

        tracing::info!(path = %path.display(), plans = plans.len(), "exported plans");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    #[test]
    fn test_export_users_csv() {
        let dir = tempfile::tempdir().unwrap();
        let users = seed::users();
        let rows: Vec<&User> = users.iter().take(2).collect();

        let path = Exporter::export_users(&rows, dir.path()).unwrap();
        let content = fs::read_to_string(path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(lines[0], "id,name,email,role,status,streams,services");
        assert_eq!(lines[1], "1,Carlos Rodriguez,carlos@example.com,Admin,Active,5,RTMP;HLS");
        assert_eq!(lines[2], "2,Maria Garcia,maria@example.com,Reseller,Active,12,RTMP;WebRTC;VOD");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_export_plans_json() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports");

        let path = Exporter::export_plans(&seed::plans(), &nested).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        let plans = value.as_array().unwrap();
        assert_eq!(plans.len(), 3);
        assert_eq!(plans[1]["name"], "Pro Plan");
        assert_eq!(plans[1]["billingCycle"], "Monthly");
        assert_eq!(plans[1]["maxViewers"], 500);
        assert_eq!(plans[1]["streamTypes"][2], "WebRTC");
    }

    #[test]
    fn test_export_no_users_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();

        let path = Exporter::export_users(&[], dir.path()).unwrap();
        let content = fs::read_to_string(path).unwrap();
        assert_eq!(content, "id,name,email,role,status,streams,services\n");
    }

    #[test]
    fn test_export_nan_price_as_null() {
        let dir = tempfile::tempdir().unwrap();
        let mut plans = seed::plans();
        plans[0].price = f64::NAN;

        let path = Exporter::export_plans(&plans, dir.path()).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert!(value[0]["price"].is_null());
        assert_eq!(value[1]["price"], 49.99);
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let result = Exporter::export_plans(&seed::plans(), &blocker);
        assert!(matches!(result, Err(InfraError::Io { .. })));
    }
}
